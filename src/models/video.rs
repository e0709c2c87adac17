use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validators::{is_cool_title, is_valid_email, is_valid_url};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub age: i32,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: Person,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub author: Person,
}

impl VideoInput {
    pub fn validate(&self) -> Result<(), String> {
        let title_len = self.title.chars().count();
        if !(2..=100).contains(&title_len) {
            return Err("title must be between 2 and 100 characters".into());
        }
        if !is_cool_title(&self.title) {
            return Err("title must contain \"Cool\"".into());
        }
        if self.description.chars().count() > 200 {
            return Err("description must be at most 200 characters".into());
        }
        if !is_valid_url(&self.url) {
            return Err("url must be an absolute http or https URL".into());
        }

        let author = &self.author;
        if author.first_name.trim().is_empty() {
            return Err("author.firstname is required".into());
        }
        if author.last_name.trim().is_empty() {
            return Err("author.lastname is required".into());
        }
        if !(1..=130).contains(&author.age) {
            return Err("author.age must be between 1 and 130".into());
        }
        if !is_valid_email(&author.email) {
            return Err("author.email must be a valid email address".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> VideoInput {
        VideoInput {
            title: "Cool Video Title".into(),
            description: "Video Description".into(),
            url: "https://youtu.be/JgW-i2QjgHQ".into(),
            author: Person {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                age: 30,
                email: "jane@example.com".into(),
            },
        }
    }

    #[test]
    fn valid_input_passes() {
        assert_eq!(input().validate(), Ok(()));
    }

    fn assert_rejected(mutate: fn(&mut VideoInput), expected: &str) {
        let mut v = input();
        mutate(&mut v);
        let err = v.validate().unwrap_err();
        assert!(err.contains(expected), "{err} should mention {expected}");
    }

    #[test]
    fn rejects_each_bad_field() {
        assert_rejected(|v| v.title = "C".into(), "title must be between");
        assert_rejected(|v| v.title = "Video Title".into(), "title must contain");
        assert_rejected(|v| v.description = "x".repeat(201), "description");
        assert_rejected(|v| v.url = "not a url".into(), "url");
        assert_rejected(|v| v.author.first_name = " ".into(), "author.firstname");
        assert_rejected(|v| v.author.last_name = String::new(), "author.lastname");
        assert_rejected(|v| v.author.age = 0, "author.age");
        assert_rejected(|v| v.author.age = 131, "author.age");
        assert_rejected(|v| v.author.email = "jane".into(), "author.email");
    }

    #[test]
    fn author_uses_lowercase_wire_names() {
        let json = serde_json::to_value(&input().author).unwrap();
        assert_eq!(json["firstname"], "Jane");
        assert_eq!(json["lastname"], "Doe");

        let parsed: VideoInput = serde_json::from_value(serde_json::json!({
            "title": "Cool",
            "url": "https://youtu.be/x",
            "author": {"firstname": "A", "lastname": "B", "age": 5, "email": "a@b.io"}
        }))
        .unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.author.age, 5);
    }
}
