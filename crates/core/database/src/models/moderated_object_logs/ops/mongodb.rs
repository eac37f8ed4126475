use agora_result::Result;
use mongodb::options::FindOptions;

use crate::ModeratedObjectLog;
use crate::MongoDb;

use super::AbstractModeratedObjectLogs;

static COL: &str = "moderated_object_logs";

#[async_trait]
impl AbstractModeratedObjectLogs for MongoDb {
    /// Insert a new log entry into the database
    async fn insert_moderated_object_log(&self, log: &ModeratedObjectLog) -> Result<()> {
        query!(self, insert_one, COL, &log).map(|_| ())
    }

    /// Fetch every log entry of a moderation case, oldest first
    async fn fetch_moderated_object_logs(
        &self,
        moderated_object_id: &str,
    ) -> Result<Vec<ModeratedObjectLog>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "moderated_object_id": moderated_object_id
            },
            FindOptions::builder()
                .sort(doc! {
                    "created_at": 1_i32,
                    "_id": 1_i32
                })
                .build()
        )
    }
}
