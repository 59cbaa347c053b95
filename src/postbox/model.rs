use serde::{Deserialize, Serialize};

/// A post record as the remote stores it. The `id` is always
/// remote-assigned; the client never invents one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

/// A candidate post before the remote has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: u64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_remote_field_names() {
        let post = Post {
            id: 7,
            title: "T".into(),
            body: "B".into(),
            user_id: Some(3),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["userId"], 3);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn post_parses_without_user_id() {
        let post: Post =
            serde_json::from_str(r#"{"id":1,"title":"A","body":"a"}"#).unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, None);
    }

    #[test]
    fn draft_omits_absent_user_id() {
        let draft = PostDraft::new("T", "B");
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("userId"));

        let json = serde_json::to_string(&PostDraft::new("T", "B").with_user(9)).unwrap();
        assert!(json.contains("\"userId\":9"));
    }
}
