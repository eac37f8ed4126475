auto_derived!(
    /// Document representing migration information
    pub struct MigrationInfo {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: i32,
        /// Current database revision
        pub revision: i32,
    }
);

#[cfg(test)]
mod tests {
    #[async_std::test]
    async fn migrate() {
        database_test!(|db| async move {
            // Migrate the freshly initialised database
            db.migrate_database().await.unwrap();
        });
    }

    #[cfg(feature = "mongodb")]
    #[async_std::test]
    async fn upgrade_from_first_revision() {
        use crate::mongodb::bson::{doc, Document};
        use crate::{Database, MigrationInfo};

        database_test!(|db| async move {
            // Only MongoDB keeps a revision
            if let Database::MongoDb(mongo) = &db {
                mongo
                    .col::<Document>("moderated_objects")
                    .drop_index("status_id_compound")
                    .await
                    .unwrap();

                mongo
                    .col::<Document>("migrations")
                    .update_one(doc! { "_id": 0_i32 }, doc! { "$set": { "revision": 0_i32 } })
                    .await
                    .unwrap();

                db.migrate_database().await.unwrap();

                let info = mongo
                    .col::<MigrationInfo>("migrations")
                    .find_one(doc! {})
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(info.revision, crate::LATEST_REVISION);

                let indexes = mongo
                    .col::<Document>("moderated_objects")
                    .list_index_names()
                    .await
                    .unwrap();
                assert!(indexes.iter().any(|name| name == "status_id_compound"));
            }
        });
    }
}
