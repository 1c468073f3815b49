use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::model::Blog;
use crate::service::{BlogService, ServiceError};

/// Process-local [`BlogService`]. Contents live only as long as the value.
pub struct MemoryBlogService {
    blogs: Mutex<BTreeMap<i64, Blog>>,
}

impl Default for MemoryBlogService {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBlogService {
    pub fn new() -> Self {
        Self {
            blogs: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn with_blogs(blogs: impl IntoIterator<Item = Blog>) -> Self {
        let blogs = blogs.into_iter().map(|b| (b.blog_id, b)).collect();
        Self {
            blogs: Mutex::new(blogs),
        }
    }

    /// A service holding a single sample blog.
    pub fn demo() -> Self {
        Self::with_blogs([Blog::new(1, "DemoBlog", "Imneet", "SampleBlogforTesting")])
    }

    /// Lock the map, recovering from mutex poison.
    fn blogs(&self) -> MutexGuard<'_, BTreeMap<i64, Blog>> {
        self.blogs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl BlogService for MemoryBlogService {
    fn save_blog(&self, mut blog: Blog) -> Result<Blog, ServiceError> {
        let mut blogs = self.blogs();
        if blog.blog_id <= 0 {
            blog.blog_id = match blogs.keys().next_back() {
                None => 1,
                Some(max) => max
                    .checked_add(1)
                    .ok_or_else(|| ServiceError::Other("no blog id available".to_string()))?,
            };
        } else if blogs.contains_key(&blog.blog_id) {
            return Err(ServiceError::AlreadyExists(format!(
                "Blog with ID {} already exists",
                blog.blog_id
            )));
        }
        blogs.insert(blog.blog_id, blog.clone());
        Ok(blog)
    }

    fn get_all_blogs(&self) -> Result<Vec<Blog>, ServiceError> {
        Ok(self.blogs().values().cloned().collect())
    }

    fn get_blog_by_id(&self, blog_id: i64) -> Result<Option<Blog>, ServiceError> {
        Ok(self.blogs().get(&blog_id).cloned())
    }

    fn update_blog(&self, blog: Blog) -> Result<Blog, ServiceError> {
        let mut blogs = self.blogs();
        match blogs.get_mut(&blog.blog_id) {
            Some(stored) => {
                *stored = blog.clone();
                Ok(blog)
            }
            None => Err(ServiceError::NotFound(blog.blog_id)),
        }
    }

    fn delete_blog(&self, blog_id: i64) -> Result<Blog, ServiceError> {
        self.blogs()
            .remove(&blog_id)
            .ok_or(ServiceError::NotFound(blog_id))
    }
}
