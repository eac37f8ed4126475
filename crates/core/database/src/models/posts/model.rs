use agora_result::Result;

use crate::{Community, Database, User};

auto_derived_partial!(
    /// # Post
    pub struct Post {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who wrote this post
        pub author: String,
        /// Id of the community this post was made in
        #[serde(skip_serializing_if = "Option::is_none")]
        pub community: Option<String>,
        /// Post content
        pub text: String,

        /// Whether this post has been hidden by a moderation verdict
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub hidden: bool,
    },
    "PartialPost"
);

impl Post {
    /// Create a new post, optionally inside of a community
    pub async fn create(
        db: &Database,
        author: &User,
        community: Option<&Community>,
        text: String,
    ) -> Result<Post> {
        let post = Post {
            id: ulid::Ulid::new().to_string(),
            author: author.id.to_string(),
            community: community.map(|community| community.id.to_string()),
            text,
            hidden: false,
        };

        db.insert_post(&post).await?;
        Ok(post)
    }

    /// Update post data
    pub async fn update(&mut self, db: &Database, partial: PartialPost) -> Result<()> {
        self.apply_options(partial.clone());
        db.update_post(&self.id, &partial).await
    }
}
