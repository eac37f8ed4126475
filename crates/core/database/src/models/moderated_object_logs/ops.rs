use agora_result::Result;

use crate::ModeratedObjectLog;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractModeratedObjectLogs: Sync + Send {
    /// Insert a new log entry into the database
    async fn insert_moderated_object_log(&self, log: &ModeratedObjectLog) -> Result<()>;

    /// Fetch every log entry of a moderation case, oldest first
    async fn fetch_moderated_object_logs(
        &self,
        moderated_object_id: &str,
    ) -> Result<Vec<ModeratedObjectLog>>;
}
