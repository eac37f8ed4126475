use agora_result::Result;

use crate::ReferenceDb;
use crate::ReportCategory;

use super::AbstractReportCategories;

#[async_trait]
impl AbstractReportCategories for ReferenceDb {
    /// Insert a new report category into the database
    async fn insert_report_category(&self, category: &ReportCategory) -> Result<()> {
        let mut categories = self.report_categories.lock().await;
        if categories.contains_key(&category.id) {
            Err(create_database_error!("insert", "report_category"))
        } else if categories
            .values()
            .any(|existing| existing.name == category.name)
        {
            Err(create_error!(Conflict))
        } else {
            categories.insert(category.id.to_string(), category.clone());
            Ok(())
        }
    }

    /// Fetch a report category by its id
    async fn fetch_report_category(&self, id: &str) -> Result<ReportCategory> {
        let categories = self.report_categories.lock().await;
        categories
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a report category by its unique name
    async fn fetch_report_category_by_name(&self, name: &str) -> Result<ReportCategory> {
        let categories = self.report_categories.lock().await;
        categories
            .values()
            .find(|category| category.name == name)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all report categories ordered by name
    async fn fetch_report_categories(&self) -> Result<Vec<ReportCategory>> {
        let categories = self.report_categories.lock().await;
        let mut categories: Vec<ReportCategory> = categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}
