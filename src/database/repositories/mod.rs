mod memory;
mod video;

use async_trait::async_trait;

use crate::models::{Video, VideoInput};

pub use memory::InMemoryVideoRepository;
pub use video::PgVideoRepository;

/// Storage for videos. Implementations must be safe to share across requests.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn save(&self, input: VideoInput) -> Result<Video, sqlx::Error>;

    /// Returns `None` when no video has the given id.
    async fn update(&self, id: i64, input: VideoInput) -> Result<Option<Video>, sqlx::Error>;

    /// Returns `false` when no video has the given id.
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// All videos ordered by id.
    async fn find_all(&self) -> Result<Vec<Video>, sqlx::Error>;
}
