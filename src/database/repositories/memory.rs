use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::VideoRepository;
use crate::models::{Video, VideoInput};

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct InMemoryVideoRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    videos: BTreeMap<i64, Video>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn save(&self, input: VideoInput) -> Result<Video, sqlx::Error> {
        let mut store = self.inner.write().await;
        store.next_id += 1;
        let now = Utc::now();
        let video = Video {
            id: store.next_id,
            title: input.title,
            description: input.description,
            url: input.url,
            author: input.author,
            created_at: now,
            updated_at: now,
        };
        store.videos.insert(video.id, video.clone());
        tracing::debug!("Stored video {}", video.id);
        Ok(video)
    }

    async fn update(&self, id: i64, input: VideoInput) -> Result<Option<Video>, sqlx::Error> {
        let mut store = self.inner.write().await;
        let Some(video) = store.videos.get_mut(&id) else {
            return Ok(None);
        };
        video.title = input.title;
        video.description = input.description;
        video.url = input.url;
        video.author = input.author;
        video.updated_at = Utc::now();
        Ok(Some(video.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        Ok(self.inner.write().await.videos.remove(&id).is_some())
    }

    async fn find_all(&self) -> Result<Vec<Video>, sqlx::Error> {
        Ok(self.inner.read().await.videos.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    const TITLE: &str = "Cool Video Title";
    const DESCRIPTION: &str = "Video Description";
    const URL: &str = "https://youtu.be/JgW-i2QjgHQ";

    fn input(title: &str) -> VideoInput {
        VideoInput {
            title: title.into(),
            description: DESCRIPTION.into(),
            url: URL.into(),
            author: Person {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                age: 30,
                email: "jane@example.com".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_find_all() {
        let repo = InMemoryVideoRepository::new();
        repo.save(input(TITLE)).await.unwrap();

        let videos = repo.find_all().await.unwrap();
        let first = &videos[0];
        assert_eq!(videos.len(), 1);
        assert_eq!(first.title, TITLE);
        assert_eq!(first.description, DESCRIPTION);
        assert_eq!(first.url, URL);
    }

    #[tokio::test]
    async fn test_ids_increase_and_are_not_reused() {
        let repo = InMemoryVideoRepository::new();
        let a = repo.save(input("Cool A")).await.unwrap();
        let b = repo.save(input("Cool B")).await.unwrap();
        assert!(b.id > a.id);

        assert!(repo.delete(b.id).await.unwrap());
        let c = repo.save(input("Cool C")).await.unwrap();
        assert!(c.id > b.id);

        let ids: Vec<i64> = repo.find_all().await.unwrap().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() {
        let repo = InMemoryVideoRepository::new();
        let saved = repo.save(input(TITLE)).await.unwrap();

        let updated = repo
            .update(saved.id, input("Cool New Title"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "Cool New Title");
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at >= saved.updated_at);

        assert!(repo.update(999, input(TITLE)).await.unwrap().is_none());
        assert!(!repo.delete(999).await.unwrap());
    }
}
