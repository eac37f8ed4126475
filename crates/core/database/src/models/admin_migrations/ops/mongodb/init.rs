use agora_result::Result;

use super::scripts::LATEST_REVISION;

use crate::mongodb::bson::doc;
use crate::{MigrationInfo, MongoDb};

static COLLECTIONS: [&str; 10] = [
    "users",
    "sessions",
    "communities",
    "posts",
    "post_comments",
    "report_categories",
    "reports",
    "moderated_objects",
    "moderated_object_logs",
    "migrations",
];

pub async fn create_database(db: &MongoDb) -> Result<()> {
    info!("Creating database.");
    let database = db.db();

    for collection in COLLECTIONS {
        database
            .create_collection(collection)
            .await
            .map_err(|_| create_database_error!("create_collection", collection))?;
    }

    database
        .run_command(doc! {
            "createIndexes": "sessions",
            "indexes": [
                {
                    "key": {
                        "token": 1_i32
                    },
                    "name": "token",
                    "unique": true
                }
            ]
        })
        .await
        .map_err(|_| create_database_error!("create_index", "sessions"))?;

    database
        .run_command(doc! {
            "createIndexes": "communities",
            "indexes": [
                {
                    "key": {
                        "name": 1_i32
                    },
                    "name": "name",
                    "unique": true
                }
            ]
        })
        .await
        .map_err(|_| create_database_error!("create_index", "communities"))?;

    database
        .run_command(doc! {
            "createIndexes": "report_categories",
            "indexes": [
                {
                    "key": {
                        "name": 1_i32
                    },
                    "name": "name",
                    "unique": true
                }
            ]
        })
        .await
        .map_err(|_| create_database_error!("create_index", "report_categories"))?;

    database
        .run_command(doc! {
            "createIndexes": "reports",
            "indexes": [
                {
                    "key": {
                        "reporter_id": 1_i32,
                        "object_type": 1_i32,
                        "object_id": 1_i32,
                        "category_id": 1_i32
                    },
                    "name": "reporter_object_category",
                    "unique": true
                },
                {
                    "key": {
                        "object_type": 1_i32,
                        "object_id": 1_i32
                    },
                    "name": "object"
                }
            ]
        })
        .await
        .map_err(|_| create_database_error!("create_index", "reports"))?;

    database
        .run_command(doc! {
            "createIndexes": "moderated_objects",
            "indexes": [
                {
                    "key": {
                        "object_type": 1_i32,
                        "object_id": 1_i32
                    },
                    "name": "object",
                    "unique": true
                },
                {
                    "key": {
                        "community": 1_i32,
                        "_id": -1_i32
                    },
                    "name": "community_id_compound"
                },
                {
                    "key": {
                        "status": 1_i32,
                        "_id": -1_i32
                    },
                    "name": "status_id_compound"
                }
            ]
        })
        .await
        .map_err(|_| create_database_error!("create_index", "moderated_objects"))?;

    database
        .run_command(doc! {
            "createIndexes": "moderated_object_logs",
            "indexes": [
                {
                    "key": {
                        "moderated_object_id": 1_i32
                    },
                    "name": "moderated_object_id"
                }
            ]
        })
        .await
        .map_err(|_| create_database_error!("create_index", "moderated_object_logs"))?;

    db.col::<MigrationInfo>("migrations")
        .insert_one(MigrationInfo {
            id: 0,
            revision: LATEST_REVISION,
        })
        .await
        .map_err(|_| create_database_error!("insert_one", "migrations"))?;

    info!("Created database.");
    Ok(())
}
