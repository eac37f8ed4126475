use agora_config::ModerationCategory;
use agora_result::{ErrorType, Result};

use crate::Database;

auto_derived!(
    /// Reason a user may give when reporting something
    pub struct ReportCategory {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Unique machine readable name
        pub name: String,
        /// Human readable title
        pub title: String,
        /// Description of what falls under this category
        pub description: String,
    }
);

impl ReportCategory {
    /// Create a new report category
    pub async fn create(
        db: &Database,
        name: String,
        title: String,
        description: String,
    ) -> Result<ReportCategory> {
        let category = ReportCategory {
            id: ulid::Ulid::new().to_string(),
            name,
            title,
            description,
        };

        db.insert_report_category(&category).await?;
        Ok(category)
    }

    /// Fetch a category a report is being filed under
    pub async fn fetch_for_report(db: &Database, id: &str) -> Result<ReportCategory> {
        db.fetch_report_category(id).await.map_err(|error| {
            if matches!(error.error_type, ErrorType::NotFound) {
                create_error!(InvalidCategory)
            } else {
                error
            }
        })
    }

    /// Insert every configured category which does not exist yet
    ///
    /// Categories are matched by name so seeding is safe to repeat.
    pub async fn seed(db: &Database, categories: &[ModerationCategory]) -> Result<usize> {
        let mut created = 0;
        for category in categories {
            match db.fetch_report_category_by_name(&category.name).await {
                Ok(_) => continue,
                Err(error) if !matches!(error.error_type, ErrorType::NotFound) => {
                    return Err(error)
                }
                Err(_) => {}
            }

            match ReportCategory::create(
                db,
                category.name.clone(),
                category.title.clone(),
                category.description.clone(),
            )
            .await
            {
                Ok(_) => created += 1,
                Err(error) if matches!(error.error_type, ErrorType::Conflict) => {}
                Err(error) => return Err(error),
            }
        }

        if created > 0 {
            info!("Seeded {created} report categories.");
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use agora_config::ModerationCategory;
    use agora_result::ErrorType;

    use crate::ReportCategory;

    fn categories() -> Vec<ModerationCategory> {
        vec![
            ModerationCategory {
                name: "spam".to_string(),
                title: "Spam".to_string(),
                description: "Unsolicited advertising".to_string(),
            },
            ModerationCategory {
                name: "harassment".to_string(),
                title: "Harassment".to_string(),
                description: "Targeted abuse".to_string(),
            },
        ]
    }

    #[async_std::test]
    async fn seed_is_repeatable() {
        database_test!(|db| async move {
            assert_eq!(ReportCategory::seed(&db, &categories()).await.unwrap(), 2);
            assert_eq!(ReportCategory::seed(&db, &categories()).await.unwrap(), 0);

            let stored = db.fetch_report_categories().await.unwrap();
            assert_eq!(stored.len(), 2);
            assert!(stored.iter().any(|category| category.name == "spam"));
        });
    }

    #[async_std::test]
    async fn unknown_category_is_invalid() {
        database_test!(|db| async move {
            let error = ReportCategory::fetch_for_report(&db, "01ARZ3NDEKTSV4RRFFQ69G5FAV")
                .await
                .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::InvalidCategory));
        });
    }
}
