use agora_result::Result;

use crate::ModeratedObjectLog;
use crate::ReferenceDb;

use super::AbstractModeratedObjectLogs;

#[async_trait]
impl AbstractModeratedObjectLogs for ReferenceDb {
    /// Insert a new log entry into the database
    async fn insert_moderated_object_log(&self, log: &ModeratedObjectLog) -> Result<()> {
        let mut logs = self.moderated_object_logs.lock().await;
        if logs.contains_key(&log.id) {
            Err(create_database_error!("insert", "moderated_object_log"))
        } else {
            logs.insert(log.id.to_string(), log.clone());
            Ok(())
        }
    }

    /// Fetch every log entry of a moderation case, oldest first
    async fn fetch_moderated_object_logs(
        &self,
        moderated_object_id: &str,
    ) -> Result<Vec<ModeratedObjectLog>> {
        let logs = self.moderated_object_logs.lock().await;
        let mut logs: Vec<ModeratedObjectLog> = logs
            .values()
            .filter(|log| log.moderated_object_id == moderated_object_id)
            .cloned()
            .collect();

        logs.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(logs)
    }
}
