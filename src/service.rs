use std::sync::Arc;

use thiserror::Error;

use crate::model::Blog;

/// Failures a [`BlogService`] can report. Each maps to one HTTP status in
/// the routes layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A blog with the same id is already stored. The message is returned
    /// to the client verbatim.
    #[error("{0}")]
    AlreadyExists(String),

    #[error("Blog not found with id: {0}")]
    NotFound(i64),

    /// Anything else.
    #[error("{0}")]
    Other(String),
}

/// Business operations behind the blog endpoints.
///
/// Handlers call exactly one of these per request. Implementations must be
/// shareable across Rocket's worker threads.
pub trait BlogService: Send + Sync {
    fn save_blog(&self, blog: Blog) -> Result<Blog, ServiceError>;

    /// All blogs, in the order the client should see them.
    fn get_all_blogs(&self) -> Result<Vec<Blog>, ServiceError>;

    /// `Ok(None)` when no blog has this id.
    fn get_blog_by_id(&self, blog_id: i64) -> Result<Option<Blog>, ServiceError>;

    fn update_blog(&self, blog: Blog) -> Result<Blog, ServiceError>;

    /// Removes the blog and returns what was removed.
    fn delete_blog(&self, blog_id: i64) -> Result<Blog, ServiceError>;
}

pub type SharedBlogService = Arc<dyn BlogService>;
