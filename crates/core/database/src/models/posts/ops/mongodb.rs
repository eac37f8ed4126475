use agora_result::Result;

use crate::MongoDb;
use crate::{PartialPost, Post};

use super::AbstractPosts;

static COL: &str = "posts";

#[async_trait]
impl AbstractPosts for MongoDb {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()> {
        query!(self, insert_one, COL, &post).map(|_| ())
    }

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Update a post with new information
    async fn update_post(&self, id: &str, partial: &PartialPost) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }
}
