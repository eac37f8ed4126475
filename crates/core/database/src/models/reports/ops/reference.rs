use agora_models::v0::ModeratedObjectType;
use agora_result::Result;

use crate::ReferenceDb;
use crate::Report;

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_database_error!("insert", "report"))
        } else if reports.values().any(|existing| {
            existing.reporter_id == report.reporter_id
                && existing.object_type == report.object_type
                && existing.object_id == report.object_id
                && existing.category_id == report.category_id
        }) {
            Err(create_error!(Conflict))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch the report a user made against an object under a category
    async fn fetch_report_by_reporter(
        &self,
        reporter_id: &str,
        object_type: ModeratedObjectType,
        object_id: &str,
        category_id: &str,
    ) -> Result<Option<Report>> {
        let reports = self.reports.lock().await;
        Ok(reports
            .values()
            .find(|report| {
                report.reporter_id == reporter_id
                    && report.object_type == object_type
                    && report.object_id == object_id
                    && report.category_id == category_id
            })
            .cloned())
    }

    /// Fetch every report made against an object, oldest first
    async fn fetch_reports_for_object(
        &self,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| report.object_type == object_type && report.object_id == object_id)
            .cloned()
            .collect();

        reports.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(reports)
    }
}
