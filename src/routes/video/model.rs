use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            message: "Success!".into(),
        }
    }
}
