use serde::{Deserialize, Serialize};

/// A blog entry as it crosses the API boundary.
///
/// Field names are camelCase on the wire (`blogId`, `blogTitle`, ...).
/// `blogId` may be omitted on create, in which case it reads as 0 and the
/// service decides the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default)]
    pub blog_id: i64,
    pub blog_title: String,
    pub author_name: String,
    pub blog_content: String,
}

impl Blog {
    pub fn new(blog_id: i64, blog_title: &str, author_name: &str, blog_content: &str) -> Self {
        Self {
            blog_id,
            blog_title: blog_title.to_string(),
            author_name: author_name.to_string(),
            blog_content: blog_content.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_fields() {
        let blog = Blog::new(1, "DemoBlog", "Imneet", "SampleBlogforTesting");
        let json = serde_json::to_value(&blog).unwrap();
        assert_eq!(json["blogId"], 1);
        assert_eq!(json["blogTitle"], "DemoBlog");
        assert_eq!(json["authorName"], "Imneet");
        assert_eq!(json["blogContent"], "SampleBlogforTesting");
    }

    #[test]
    fn test_missing_id_defaults_to_zero() {
        let blog: Blog = serde_json::from_str(
            r#"{"blogTitle": "T", "authorName": "A", "blogContent": "C"}"#,
        ).unwrap();
        assert_eq!(blog.blog_id, 0);
        assert_eq!(blog.blog_title, "T");
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let res: Result<Blog, _> = serde_json::from_str(r#"{"blogId": 3, "authorName": "A", "blogContent": "C"}"#);
        assert!(res.is_err());
    }
}
