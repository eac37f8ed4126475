use agora_models::v0::{ModeratedObjectStatus, ModeratedObjectType};
use agora_result::{Error, ErrorType, Result};

use crate::{
    Community, Database, PartialCommunity, PartialPost, PartialPostComment, PartialUser, Post,
    PostComment, User,
};

/// Object which can be reported and moderated
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ModerationTarget {
    Post(Post),
    PostComment { comment: PostComment, post: Post },
    User(User),
    Community(Community),
}

/// Missing targets are reported as invalid rather than not found
fn invalid_target(error: Error) -> Error {
    if matches!(error.error_type, ErrorType::NotFound) {
        create_error!(InvalidTarget)
    } else {
        error
    }
}

impl ModerationTarget {
    /// Look up a target by its type and id
    pub async fn resolve(
        db: &Database,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<ModerationTarget> {
        Ok(match object_type {
            ModeratedObjectType::Post => {
                ModerationTarget::Post(db.fetch_post(object_id).await.map_err(invalid_target)?)
            }
            ModeratedObjectType::PostComment => {
                let comment = db
                    .fetch_post_comment(object_id)
                    .await
                    .map_err(invalid_target)?;

                let post = db.fetch_post(&comment.post).await.map_err(invalid_target)?;
                ModerationTarget::PostComment { comment, post }
            }
            ModeratedObjectType::User => {
                ModerationTarget::User(db.fetch_user(object_id).await.map_err(invalid_target)?)
            }
            ModeratedObjectType::Community => ModerationTarget::Community(
                db.fetch_community(object_id)
                    .await
                    .map_err(invalid_target)?,
            ),
        })
    }

    /// Look up a community by its unique name
    pub async fn resolve_community_by_name(
        db: &Database,
        name: &str,
    ) -> Result<ModerationTarget> {
        db.fetch_community_by_name(name)
            .await
            .map(ModerationTarget::Community)
            .map_err(invalid_target)
    }

    /// Look up a comment which must belong to the given post
    pub async fn resolve_post_comment(
        db: &Database,
        post_id: &str,
        comment_id: &str,
    ) -> Result<ModerationTarget> {
        let target = ModerationTarget::resolve(db, ModeratedObjectType::PostComment, comment_id)
            .await?;

        match &target {
            ModerationTarget::PostComment { post, .. } if post.id == post_id => Ok(target),
            _ => Err(create_error!(InvalidTarget)),
        }
    }

    /// Type of this target
    pub fn object_type(&self) -> ModeratedObjectType {
        match self {
            ModerationTarget::Post(_) => ModeratedObjectType::Post,
            ModerationTarget::PostComment { .. } => ModeratedObjectType::PostComment,
            ModerationTarget::User(_) => ModeratedObjectType::User,
            ModerationTarget::Community(_) => ModeratedObjectType::Community,
        }
    }

    /// Id of this target
    pub fn object_id(&self) -> &str {
        match self {
            ModerationTarget::Post(post) => &post.id,
            ModerationTarget::PostComment { comment, .. } => &comment.id,
            ModerationTarget::User(user) => &user.id,
            ModerationTarget::Community(community) => &community.id,
        }
    }

    /// Community a moderation case about this target is scoped to
    ///
    /// Users and communities are only moderated globally.
    pub fn community(&self) -> Option<String> {
        match self {
            ModerationTarget::Post(post) => post.community.clone(),
            ModerationTarget::PostComment { post, .. } => post.community.clone(),
            ModerationTarget::User(_) | ModerationTarget::Community(_) => None,
        }
    }

    /// Id of the user responsible for this target
    pub fn owner_id(&self) -> &str {
        match self {
            ModerationTarget::Post(post) => &post.author,
            ModerationTarget::PostComment { comment, .. } => &comment.author,
            ModerationTarget::User(user) => &user.id,
            ModerationTarget::Community(community) => &community.owner,
        }
    }

    /// Apply the consequence of a verdict
    ///
    /// Approved content is hidden and approved users are suspended,
    /// any other verdict lifts these again.
    pub async fn apply_verdict(
        &mut self,
        db: &Database,
        status: ModeratedObjectStatus,
    ) -> Result<()> {
        let enforce = status == ModeratedObjectStatus::Approved;

        match self {
            ModerationTarget::Post(post) if post.hidden != enforce => {
                post.update(
                    db,
                    PartialPost {
                        hidden: Some(enforce),
                        ..Default::default()
                    },
                )
                .await
            }
            ModerationTarget::PostComment { comment, .. } if comment.hidden != enforce => {
                comment
                    .update(
                        db,
                        PartialPostComment {
                            hidden: Some(enforce),
                            ..Default::default()
                        },
                    )
                    .await
            }
            ModerationTarget::User(user) if user.suspended != enforce => {
                user.update(
                    db,
                    PartialUser {
                        suspended: Some(enforce),
                        ..Default::default()
                    },
                )
                .await
            }
            ModerationTarget::Community(community) if community.hidden != enforce => {
                community
                    .update(
                        db,
                        PartialCommunity {
                            hidden: Some(enforce),
                            ..Default::default()
                        },
                    )
                    .await
            }
            _ => Ok(()),
        }
    }
}
