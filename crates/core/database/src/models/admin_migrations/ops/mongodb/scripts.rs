use agora_result::Result;

use crate::mongodb::bson::doc;
use crate::{MigrationInfo, MongoDb};

pub const LATEST_REVISION: i32 = 1; // MUST BE +1 to last migration

pub async fn migrate_database(db: &MongoDb) -> Result<()> {
    let migrations = db.col::<MigrationInfo>("migrations");
    let info = migrations
        .find_one(doc! {})
        .await
        .map_err(|_| create_database_error!("find_one", "migrations"))?
        .ok_or_else(|| {
            error!("Database was configured incorrectly, possibly because initialisation failed.");
            create_error!(InternalError)
        })?;

    let revision = run_migrations(db, info.revision).await?;

    migrations
        .update_one(
            doc! {
                "_id": info.id
            },
            doc! {
                "$set": {
                    "revision": revision
                }
            },
        )
        .await
        .map_err(|_| create_database_error!("update_one", "migrations"))?;

    info!("Migration complete. Currently at revision {}.", revision);
    Ok(())
}

pub async fn run_migrations(db: &MongoDb, revision: i32) -> Result<i32> {
    info!("Starting database migration.");

    if revision <= 0 {
        info!("Running migration [revision 0]: Add moderated object status index.");

        db.db()
            .run_command(doc! {
                "createIndexes": "moderated_objects",
                "indexes": [
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
    }

    // Reminder to update LATEST_REVISION when adding new migrations.
    Ok(LATEST_REVISION.max(revision))
}
