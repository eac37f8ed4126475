use agora_result::Result;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::ReportCategory;

use super::AbstractReportCategories;

static COL: &str = "report_categories";

#[async_trait]
impl AbstractReportCategories for MongoDb {
    /// Insert a new report category into the database
    async fn insert_report_category(&self, category: &ReportCategory) -> Result<()> {
        self.insert_one_unique(COL, category).await
    }

    /// Fetch a report category by its id
    async fn fetch_report_category(&self, id: &str) -> Result<ReportCategory> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a report category by its unique name
    async fn fetch_report_category_by_name(&self, name: &str) -> Result<ReportCategory> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "name": name
            }
        )?
        .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all report categories ordered by name
    async fn fetch_report_categories(&self) -> Result<Vec<ReportCategory>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder()
                .sort(doc! {
                    "name": 1_i32
                })
                .build()
        )
    }
}
