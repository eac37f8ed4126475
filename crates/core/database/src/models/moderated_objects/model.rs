use agora_config::config;
use agora_models::v0::{ModeratedObjectStatus, ModeratedObjectType};
use agora_permissions::{calculate_moderator_role, ModerationScope};
use agora_result::{ErrorType, Result};
use iso8601_timestamp::Timestamp;

use crate::{
    util::permissions::DatabasePermissionQuery, Community, Database, ModeratedObjectFilter,
    ModeratedObjectLog, ModeratedObjectQuery, ModerationTarget, Post, PostComment, Report,
    ReportCategory, User,
};

auto_derived_partial!(
    /// Moderation case aggregating every report made against one object
    pub struct ModeratedObject {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the reported object
        pub object_id: String,
        /// Type of the reported object
        pub object_type: ModeratedObjectType,
        /// Current verdict
        pub status: ModeratedObjectStatus,
        /// Id of the category of the report that opened this case
        pub category: String,
        /// Id of the community this case is scoped to
        #[serde(skip_serializing_if = "Option::is_none")]
        pub community: Option<String>,
        /// When this case was opened
        pub created_at: Timestamp,
        /// When this case was last changed
        pub updated_at: Timestamp,
    },
    "PartialModeratedObject"
);

impl ModeratedObject {
    /// Fetch the case of a target or open a new one
    ///
    /// A new case starts out pending under the given category and is
    /// scoped to the community the target lives in.
    pub async fn get_or_create(
        db: &Database,
        target: &ModerationTarget,
        category_id: &str,
    ) -> Result<ModeratedObject> {
        let object_type = target.object_type();
        let object_id = target.object_id();

        if let Some(object) = db
            .fetch_moderated_object_by_object(object_type, object_id)
            .await?
        {
            return Ok(object);
        }

        let category = ReportCategory::fetch_for_report(db, category_id).await?;
        let now = Timestamp::now_utc();
        let object = ModeratedObject {
            id: ulid::Ulid::new().to_string(),
            object_id: object_id.to_string(),
            object_type,
            status: ModeratedObjectStatus::Pending,
            category: category.id,
            community: target.community(),
            created_at: now,
            updated_at: now,
        };

        match db.insert_moderated_object(&object).await {
            Ok(()) => {
                info!(
                    "Opened moderation case {} for {} {}.",
                    object.id, object.object_type, object.object_id
                );

                Ok(object)
            }
            // Lost a race against another report on the same object
            Err(error) if matches!(error.error_type, ErrorType::Conflict) => db
                .fetch_moderated_object_by_object(object_type, object_id)
                .await?
                .ok_or_else(|| create_error!(InternalError)),
            Err(error) => Err(error),
        }
    }

    /// Fetch or open the case of a post
    pub async fn get_or_create_for_post(
        db: &Database,
        post: &Post,
        category_id: &str,
    ) -> Result<ModeratedObject> {
        ModeratedObject::get_or_create(db, &ModerationTarget::Post(post.clone()), category_id).await
    }

    /// Fetch or open the case of a comment left on the given post
    pub async fn get_or_create_for_post_comment(
        db: &Database,
        comment: &PostComment,
        post: &Post,
        category_id: &str,
    ) -> Result<ModeratedObject> {
        if comment.post != post.id {
            return Err(create_error!(InvalidTarget));
        }

        ModeratedObject::get_or_create(
            db,
            &ModerationTarget::PostComment {
                comment: comment.clone(),
                post: post.clone(),
            },
            category_id,
        )
        .await
    }

    /// Fetch or open the case of a user
    pub async fn get_or_create_for_user(
        db: &Database,
        user: &User,
        category_id: &str,
    ) -> Result<ModeratedObject> {
        ModeratedObject::get_or_create(db, &ModerationTarget::User(user.clone()), category_id).await
    }

    /// Fetch or open the case of a community
    pub async fn get_or_create_for_community(
        db: &Database,
        community: &Community,
        category_id: &str,
    ) -> Result<ModeratedObject> {
        ModeratedObject::get_or_create(
            db,
            &ModerationTarget::Community(community.clone()),
            category_id,
        )
        .await
    }

    /// List cases visible within a scope
    ///
    /// Only global moderators may list the global scope, a community
    /// scope is also open to the staff of that community.
    pub async fn list(
        db: &Database,
        actor: &User,
        scope: ModerationScope,
        filter: ModeratedObjectFilter,
    ) -> Result<Vec<ModeratedObject>> {
        let mut query = DatabasePermissionQuery::new(db, actor)
            .community_id(scope.community())
            .preload()
            .await?;
        calculate_moderator_role(&mut query)
            .await
            .throw_if_cannot_view_scope(&scope)?;

        let max_limit = config().await.moderation.max_listing_limit;
        let limit = filter
            .limit
            .map_or(max_limit, |limit| limit.min(max_limit))
            .max(1);

        db.fetch_moderated_objects(&ModeratedObjectQuery {
            community: scope.community().map(str::to_string),
            statuses: filter.statuses,
            object_types: filter.object_types,
            before: filter.before,
            limit,
        })
        .await
    }

    /// Throw an error if the given user may not moderate this case
    pub async fn throw_if_cannot_moderate(&self, db: &Database, actor: &User) -> Result<()> {
        let mut query = DatabasePermissionQuery::new(db, actor)
            .moderated_object(self)
            .preload()
            .await?;
        calculate_moderator_role(&mut query)
            .await
            .throw_if_cannot_view(self.community.as_deref())
    }

    /// Fetch the object this case is about
    pub async fn fetch_target(&self, db: &Database) -> Result<ModerationTarget> {
        ModerationTarget::resolve(db, self.object_type, &self.object_id).await
    }

    /// Fetch every report made against the object of this case
    pub async fn fetch_reports(&self, db: &Database) -> Result<Vec<Report>> {
        db.fetch_reports_for_object(self.object_type, &self.object_id)
            .await
    }

    /// Fetch the verdicts given on this case
    pub async fn fetch_logs(&self, db: &Database) -> Result<Vec<ModeratedObjectLog>> {
        db.fetch_moderated_object_logs(&self.id).await
    }

    /// Approve this case, hiding or suspending its object
    pub async fn approve(&mut self, db: &Database, actor: &User) -> Result<()> {
        self.set_status(db, actor, ModeratedObjectStatus::Approved)
            .await
    }

    /// Reject this case, lifting any earlier approval
    pub async fn reject(&mut self, db: &Database, actor: &User) -> Result<()> {
        self.set_status(db, actor, ModeratedObjectStatus::Rejected)
            .await
    }

    async fn set_status(
        &mut self,
        db: &Database,
        actor: &User,
        status: ModeratedObjectStatus,
    ) -> Result<()> {
        self.throw_if_cannot_moderate(db, actor).await?;

        let previous_status = self.status;
        let mut target = self.fetch_target(db).await?;
        target.apply_verdict(db, status).await?;

        if let Err(error) = self.record_status(db, actor, status).await {
            // The verdict on record still applies to the target
            target.apply_verdict(db, previous_status).await?;
            return Err(error);
        }

        info!(
            "{} moved moderation case {} from {} to {}.",
            actor.id, self.id, previous_status, status
        );

        Ok(())
    }

    /// Store the new status together with its log entry
    async fn record_status(
        &mut self,
        db: &Database,
        actor: &User,
        status: ModeratedObjectStatus,
    ) -> Result<()> {
        let previous_status = self.status;
        let previous = PartialModeratedObject {
            status: Some(previous_status),
            updated_at: Some(self.updated_at),
            ..Default::default()
        };

        let partial = PartialModeratedObject {
            status: Some(status),
            updated_at: Some(Timestamp::now_utc()),
            ..Default::default()
        };

        db.update_moderated_object(&self.id, &partial).await?;
        self.apply_options(partial);

        if let Err(error) = ModeratedObjectLog::create(db, self, actor, previous_status).await {
            db.update_moderated_object(&self.id, &previous).await?;
            self.apply_options(previous);
            return Err(error);
        }

        Ok(())
    }
}
