use agora_result::Result;

use crate::{PartialPostComment, PostComment};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractPostComments: Sync + Send {
    /// Insert a new comment into the database
    async fn insert_post_comment(&self, comment: &PostComment) -> Result<()>;

    /// Fetch a comment by its id
    async fn fetch_post_comment(&self, id: &str) -> Result<PostComment>;

    /// Update a comment with new information
    async fn update_post_comment(&self, id: &str, partial: &PartialPostComment) -> Result<()>;
}
