use axum::{
    Extension,
    extract::{Json, Path, State},
};

use crate::{
    AppState,
    auth::Claims,
    error::AppError,
    models::{Video, VideoInput},
};

use super::model::MessageResponse;

#[axum::debug_handler]
pub async fn get_videos(State(state): State<AppState>) -> Result<Json<Vec<Video>>, AppError> {
    let videos = state.videos.find_all().await?;
    Ok(Json(videos))
}

#[axum::debug_handler]
pub async fn create_video(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(input): Json<VideoInput>,
) -> Result<Json<MessageResponse>, AppError> {
    input.validate().map_err(AppError::Validation)?;

    let video = state.videos.save(input).await?;
    tracing::info!("Video {} created by {}", video.id, claims.name);
    Ok(Json(MessageResponse::success()))
}

#[axum::debug_handler]
pub async fn update_video(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<VideoInput>,
) -> Result<Json<MessageResponse>, AppError> {
    input.validate().map_err(AppError::Validation)?;

    match state.videos.update(id, input).await? {
        Some(video) => {
            tracing::info!("Video {} updated by {}", video.id, claims.name);
            Ok(Json(MessageResponse::success()))
        }
        None => Err(AppError::NotFound),
    }
}

/// Only tokens carrying the admin flag may delete.
#[axum::debug_handler]
pub async fn delete_video(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !claims.admin {
        tracing::warn!("{} tried to delete video {} without admin rights", claims.name, id);
        return Err(AppError::Forbidden);
    }

    if state.videos.delete(id).await? {
        tracing::info!("Video {} deleted by {}", id, claims.name);
        Ok(Json(MessageResponse::success()))
    } else {
        Err(AppError::NotFound)
    }
}
