use agora_models::v0::ModeratedObjectType;
use agora_result::Result;

use crate::Report;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    ///
    /// Fails with `Conflict` if the reporter already reported
    /// the same object under the same category.
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch the report a user made against an object under a category
    async fn fetch_report_by_reporter(
        &self,
        reporter_id: &str,
        object_type: ModeratedObjectType,
        object_id: &str,
        category_id: &str,
    ) -> Result<Option<Report>>;

    /// Fetch every report made against an object, oldest first
    async fn fetch_reports_for_object(
        &self,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<Vec<Report>>;
}
