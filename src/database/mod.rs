pub mod repositories;

pub use repositories::{InMemoryVideoRepository, PgVideoRepository, VideoRepository};
