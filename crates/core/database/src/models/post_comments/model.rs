use agora_result::Result;

use crate::{Database, Post, User};

auto_derived_partial!(
    /// # Post Comment
    pub struct PostComment {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the post this comment was left on
        pub post: String,
        /// Id of the user who wrote this comment
        pub author: String,
        /// Comment content
        pub text: String,

        /// Whether this comment has been hidden by a moderation verdict
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub hidden: bool,
    },
    "PartialPostComment"
);

impl PostComment {
    /// Create a new comment on a post
    pub async fn create(
        db: &Database,
        post: &Post,
        author: &User,
        text: String,
    ) -> Result<PostComment> {
        let comment = PostComment {
            id: ulid::Ulid::new().to_string(),
            post: post.id.to_string(),
            author: author.id.to_string(),
            text,
            hidden: false,
        };

        db.insert_post_comment(&comment).await?;
        Ok(comment)
    }

    /// Update comment data
    pub async fn update(&mut self, db: &Database, partial: PartialPostComment) -> Result<()> {
        self.apply_options(partial.clone());
        db.update_post_comment(&self.id, &partial).await
    }
}
