use agora_models::v0::ModeratedObjectType;
use agora_result::Result;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::Report;

use super::AbstractReports;

static COL: &str = "reports";

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        self.insert_one_unique(COL, report).await
    }

    /// Fetch the report a user made against an object under a category
    async fn fetch_report_by_reporter(
        &self,
        reporter_id: &str,
        object_type: ModeratedObjectType,
        object_id: &str,
        category_id: &str,
    ) -> Result<Option<Report>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "reporter_id": reporter_id,
                "object_type": object_type.as_str(),
                "object_id": object_id,
                "category_id": category_id
            }
        )
    }

    /// Fetch every report made against an object, oldest first
    async fn fetch_reports_for_object(
        &self,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<Vec<Report>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "object_type": object_type.as_str(),
                "object_id": object_id
            },
            FindOptions::builder()
                .sort(doc! {
                    "_id": 1_i32
                })
                .build()
        )
    }
}
