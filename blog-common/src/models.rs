use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BlogError;

/// 作者信息
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    /// 作者名称
    pub name: String,
    /// 头像地址
    pub avatar: String,
}

/// 文章分类
///
/// 上游数据中不同的 `id` 可能对应同一个 `name`，筛选和聚合都以 `name` 为准，
/// `id` 只用于展示时的键。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// 文章 - 接口返回后不再修改
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 文章唯一标识符
    pub id: String,
    /// 文章标题
    pub title: String,
    /// 发布时间
    pub publish_date: DateTime<Utc>,
    /// 作者
    pub author: Author,
    /// 文章摘要
    pub summary: String,
    /// 分类列表（保持接口返回的顺序）
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Post {
    /// 文章是否带有指定名称的分类
    pub fn has_category_named(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

/// 接口返回的数据外壳: `{ "posts": [...] }`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct PostsPayload {
    pub posts: Vec<Post>,
}

/// 解析接口返回的JSON文本
pub fn parse_posts(json: &str) -> Result<Vec<Post>, BlogError> {
    let payload: PostsPayload = serde_json::from_str(json)?;
    Ok(payload.posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PAYLOAD: &str = r#"{
        "posts": [
            {
                "id": "p1",
                "title": "Hello",
                "publishDate": "2023-04-01T08:30:00.000Z",
                "author": { "name": "Ada", "avatar": "https://example.com/ada.png" },
                "summary": "first",
                "categories": [
                    { "id": "c1", "name": "Tech" },
                    { "id": "c2", "name": "Life" }
                ]
            },
            {
                "id": "p2",
                "title": "Untagged",
                "publishDate": "2023-05-02T00:00:00Z",
                "author": { "name": "Bob", "avatar": "" },
                "summary": "second"
            }
        ]
    }"#;

    #[test]
    fn test_parse_payload() {
        let posts = parse_posts(PAYLOAD).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(
            posts[0].publish_date,
            Utc.with_ymd_and_hms(2023, 4, 1, 8, 30, 0).unwrap()
        );
        assert_eq!(posts[0].author.name, "Ada");
        assert_eq!(posts[0].categories.len(), 2);
        assert!(posts[1].categories.is_empty());
    }

    #[test]
    fn test_has_category_named() {
        let posts = parse_posts(PAYLOAD).unwrap();
        assert!(posts[0].has_category_named("Life"));
        assert!(!posts[0].has_category_named("life"));
        assert!(!posts[1].has_category_named("Tech"));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let json = r#"{"posts":[{"id":"x","title":"t","publishDate":"yesterday",
            "author":{"name":"a","avatar":""},"summary":"","categories":[]}]}"#;
        let err = parse_posts(json).unwrap_err();
        assert!(matches!(err, BlogError::Payload(_)));
    }

    #[test]
    fn test_parse_rejects_missing_envelope() {
        assert!(parse_posts("[]").is_err());
        assert!(parse_posts("not json").is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let posts = parse_posts(PAYLOAD).unwrap();
        let value = serde_json::to_value(&posts[0]).unwrap();
        assert!(value.get("publishDate").is_some());
        assert!(value.get("publish_date").is_none());
    }
}
