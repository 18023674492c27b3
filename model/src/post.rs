//! Community post model.

use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

/// A post on the community feed.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// The username of the author.
    pub author: String,
    /// When the post was created.
    ///
    /// Serialized without a timezone, e.g. `2024-01-01T00:00:00`.
    pub create_time: NaiveDateTime,
    pub likes: u32,
    pub comments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_time_format() {
        let post = Post {
            id: 1,
            title: "title".into(),
            content: "content".into(),
            author: "testuser".into(),
            create_time: "2024-01-01T00:00:00".parse().unwrap(),
            likes: 0,
            comments: 0,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["createTime"], "2024-01-01T00:00:00");
        assert!(json.get("create_time").is_none());
    }
}
