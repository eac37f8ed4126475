use agora_result::Result;

use crate::ReportCategory;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReportCategories: Sync + Send {
    /// Insert a new report category into the database
    ///
    /// Fails with `Conflict` if the name is already taken.
    async fn insert_report_category(&self, category: &ReportCategory) -> Result<()>;

    /// Fetch a report category by its id
    async fn fetch_report_category(&self, id: &str) -> Result<ReportCategory>;

    /// Fetch a report category by its unique name
    async fn fetch_report_category_by_name(&self, name: &str) -> Result<ReportCategory>;

    /// Fetch all report categories ordered by name
    async fn fetch_report_categories(&self) -> Result<Vec<ReportCategory>>;
}
