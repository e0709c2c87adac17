pub mod video;

pub use video::{Person, Video, VideoInput};
