use agora_result::Result;

use crate::MongoDb;
use crate::{PartialPostComment, PostComment};

use super::AbstractPostComments;

static COL: &str = "post_comments";

#[async_trait]
impl AbstractPostComments for MongoDb {
    /// Insert a new comment into the database
    async fn insert_post_comment(&self, comment: &PostComment) -> Result<()> {
        query!(self, insert_one, COL, &comment).map(|_| ())
    }

    /// Fetch a comment by its id
    async fn fetch_post_comment(&self, id: &str) -> Result<PostComment> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Update a comment with new information
    async fn update_post_comment(&self, id: &str, partial: &PartialPostComment) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }
}
