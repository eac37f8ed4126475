use agora_result::Result;

use crate::ReferenceDb;
use crate::{PartialPost, Post};

use super::AbstractPosts;

#[async_trait]
impl AbstractPosts for ReferenceDb {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.lock().await;
        if posts.contains_key(&post.id) {
            Err(create_database_error!("insert", "post"))
        } else {
            posts.insert(post.id.to_string(), post.clone());
            Ok(())
        }
    }

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post> {
        let posts = self.posts.lock().await;
        posts
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Update a post with new information
    async fn update_post(&self, id: &str, partial: &PartialPost) -> Result<()> {
        let mut posts = self.posts.lock().await;
        if let Some(post) = posts.get_mut(id) {
            post.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
