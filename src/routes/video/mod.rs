mod handler;
mod model;

pub use handler::{create_video, delete_video, get_videos, update_video};
pub use model::MessageResponse;
