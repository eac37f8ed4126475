use agora_result::Result;

use crate::ReferenceDb;
use crate::{PartialPostComment, PostComment};

use super::AbstractPostComments;

#[async_trait]
impl AbstractPostComments for ReferenceDb {
    /// Insert a new comment into the database
    async fn insert_post_comment(&self, comment: &PostComment) -> Result<()> {
        let mut comments = self.post_comments.lock().await;
        if comments.contains_key(&comment.id) {
            Err(create_database_error!("insert", "post_comment"))
        } else {
            comments.insert(comment.id.to_string(), comment.clone());
            Ok(())
        }
    }

    /// Fetch a comment by its id
    async fn fetch_post_comment(&self, id: &str) -> Result<PostComment> {
        let comments = self.post_comments.lock().await;
        comments
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Update a comment with new information
    async fn update_post_comment(&self, id: &str, partial: &PartialPostComment) -> Result<()> {
        let mut comments = self.post_comments.lock().await;
        if let Some(comment) = comments.get_mut(id) {
            comment.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
