use agora_config::config;
use agora_models::v0::{DataReportObject, ModeratedObjectType};
use agora_result::{ErrorType, Result};
use iso8601_timestamp::Timestamp;

use crate::{Database, ModeratedObject, ModerationTarget, ReportCategory, User};

auto_derived!(
    /// Complaint made by one user against one object
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who made this report
        pub reporter_id: String,
        /// Type of the reported object
        pub object_type: ModeratedObjectType,
        /// Id of the reported object
        pub object_id: String,
        /// Id of the report category
        pub category_id: String,
        /// Additional context given by the reporter
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// When this report was made
        pub created_at: Timestamp,
    }
);

impl Report {
    /// Persist a report against a target
    ///
    /// A reporter holds at most one report per target and category,
    /// repeating a report returns the one already on record.
    pub async fn create(
        db: &Database,
        reporter: &User,
        target: &ModerationTarget,
        category_id: &str,
        description: Option<String>,
    ) -> Result<Report> {
        let object_type = target.object_type();
        let object_id = target.object_id();

        if let Some(existing) = db
            .fetch_report_by_reporter(&reporter.id, object_type, object_id, category_id)
            .await?
        {
            return Ok(existing);
        }

        let report = Report {
            id: ulid::Ulid::new().to_string(),
            reporter_id: reporter.id.to_string(),
            object_type,
            object_id: object_id.to_string(),
            category_id: category_id.to_string(),
            description,
            created_at: Timestamp::now_utc(),
        };

        match db.insert_report(&report).await {
            Ok(()) => {
                info!(
                    "User {} reported {} {} under category {}.",
                    report.reporter_id, report.object_type, report.object_id, report.category_id
                );

                Ok(report)
            }
            Err(error) if matches!(error.error_type, ErrorType::Conflict) => db
                .fetch_report_by_reporter(&reporter.id, object_type, object_id, category_id)
                .await?
                .ok_or_else(|| create_error!(InternalError)),
            Err(error) => Err(error),
        }
    }

    /// Submit a report against a target
    ///
    /// The first report made against a target opens its moderation case.
    pub async fn submit(
        db: &Database,
        reporter: &User,
        target: &ModerationTarget,
        data: DataReportObject,
    ) -> Result<Report> {
        if target.owner_id() == reporter.id {
            return Err(create_error!(CannotReportYourself));
        }

        let description = data
            .description
            .map(|description| description.trim().to_string())
            .filter(|description| !description.is_empty());

        if let Some(description) = &description {
            let max_length = config().await.api.report_description_length;
            if description.chars().count() > max_length {
                return Err(create_error!(FailedValidation {
                    error: format!("description must be at most {max_length} characters")
                }));
            }
        }

        let category = ReportCategory::fetch_for_report(db, &data.category_id).await?;
        let report = Report::create(db, reporter, target, &category.id, description).await?;
        ModeratedObject::get_or_create(db, target, &category.id).await?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use agora_models::v0::{DataReportObject, ModeratedObjectType};
    use agora_result::ErrorType;

    use crate::{fixture, ModerationTarget, Report};

    fn data(category_id: &str) -> DataReportObject {
        DataReportObject {
            category_id: category_id.to_string(),
            description: None,
        }
    }

    #[async_std::test]
    async fn submit_opens_case() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                reporter user 3
                post post 5
                category category 8);

            let target = ModerationTarget::Post(post.clone());
            let report = Report::submit(&db, &reporter, &target, data(&category.id))
                .await
                .unwrap();

            assert_eq!(report.object_type, ModeratedObjectType::Post);
            assert_eq!(report.object_id, post.id);

            let case = db
                .fetch_moderated_object_by_object(ModeratedObjectType::Post, &post.id)
                .await
                .unwrap()
                .expect("case should be opened by the first report");
            assert_eq!(case.category, category.id);
            assert_eq!(case.community, post.community);
        });
    }

    #[async_std::test]
    async fn duplicate_report_is_idempotent() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                reporter user 3
                post post 5
                category category 8);

            let target = ModerationTarget::Post(post.clone());
            let first = Report::submit(&db, &reporter, &target, data(&category.id))
                .await
                .unwrap();
            let second = Report::submit(&db, &reporter, &target, data(&category.id))
                .await
                .unwrap();

            assert_eq!(first.id, second.id);
            assert_eq!(
                db.fetch_reports_for_object(ModeratedObjectType::Post, &post.id)
                    .await
                    .unwrap()
                    .len(),
                1
            );
        });
    }

    #[async_std::test]
    async fn many_reporters_share_one_case() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                moderator user 0
                staff user 1
                reporter user 3
                post post 5
                category category 8);

            let target = ModerationTarget::Post(post.clone());
            for user in [&moderator, &staff, &reporter] {
                Report::submit(&db, user, &target, data(&category.id))
                    .await
                    .unwrap();
            }

            let case = db
                .fetch_moderated_object_by_object(ModeratedObjectType::Post, &post.id)
                .await
                .unwrap()
                .unwrap();

            assert_eq!(case.fetch_reports(&db).await.unwrap().len(), 3);
        });
    }

    #[async_std::test]
    async fn cannot_report_own_content() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                author user 2
                post post 5
                category category 8);

            let error = Report::submit(
                &db,
                &author,
                &ModerationTarget::Post(post),
                data(&category.id),
            )
            .await
            .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::CannotReportYourself));

            let error = Report::submit(
                &db,
                &author,
                &ModerationTarget::User(author.clone()),
                data(&category.id),
            )
            .await
            .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::CannotReportYourself));
        });
    }

    #[async_std::test]
    async fn unknown_category_is_rejected() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                reporter user 3
                post post 5);

            let error = Report::submit(
                &db,
                &reporter,
                &ModerationTarget::Post(post.clone()),
                data("01ARZ3NDEKTSV4RRFFQ69G5FAV"),
            )
            .await
            .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::InvalidCategory));

            assert!(db
                .fetch_moderated_object_by_object(ModeratedObjectType::Post, &post.id)
                .await
                .unwrap()
                .is_none());
        });
    }

    #[async_std::test]
    async fn description_is_trimmed() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                reporter user 3
                post post 5
                category category 8);

            let report = Report::submit(
                &db,
                &reporter,
                &ModerationTarget::Post(post),
                DataReportObject {
                    category_id: category.id.clone(),
                    description: Some("   ".to_string()),
                },
            )
            .await
            .unwrap();

            assert_eq!(report.description, None);
        });
    }
}
