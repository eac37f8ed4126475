use agora_models::v0::ModeratedObjectType;
use agora_result::Result;
use bson::Document;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::{ModeratedObject, ModeratedObjectQuery, PartialModeratedObject};

use super::AbstractModeratedObjects;

static COL: &str = "moderated_objects";

#[async_trait]
impl AbstractModeratedObjects for MongoDb {
    /// Insert a new moderation case into the database
    async fn insert_moderated_object(&self, object: &ModeratedObject) -> Result<()> {
        self.insert_one_unique(COL, object).await
    }

    /// Fetch a moderation case by its id
    async fn fetch_moderated_object(&self, id: &str) -> Result<ModeratedObject> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch the moderation case of an object, if one was opened
    async fn fetch_moderated_object_by_object(
        &self,
        object_type: ModeratedObjectType,
        object_id: &str,
    ) -> Result<Option<ModeratedObject>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "object_type": object_type.as_str(),
                "object_id": object_id
            }
        )
    }

    /// Update a moderation case with new information
    async fn update_moderated_object(
        &self,
        id: &str,
        partial: &PartialModeratedObject,
    ) -> Result<()> {
        let result = query!(self, update_one_by_id, COL, id, partial)?;
        if result.matched_count == 0 {
            return Err(create_error!(NotFound));
        }

        Ok(())
    }

    /// Fetch moderation cases matching a query, newest first
    async fn fetch_moderated_objects(
        &self,
        query: &ModeratedObjectQuery,
    ) -> Result<Vec<ModeratedObject>> {
        let mut filter = Document::new();

        if let Some(community) = &query.community {
            filter.insert("community", community.as_str());
        }

        if let Some(statuses) = query.statuses() {
            let statuses: Vec<&str> = statuses.iter().map(|status| status.as_str()).collect();
            filter.insert("status", doc! { "$in": statuses });
        }

        if let Some(object_types) = query.object_types() {
            let object_types: Vec<&str> = object_types
                .iter()
                .map(|object_type| object_type.as_str())
                .collect();
            filter.insert("object_type", doc! { "$in": object_types });
        }

        if let Some(before) = &query.before {
            filter.insert("_id", doc! { "$lt": before.as_str() });
        }

        query!(
            self,
            find_with_options,
            COL,
            filter,
            FindOptions::builder()
                .sort(doc! {
                    "_id": -1_i32
                })
                .limit(query.limit)
                .build()
        )
    }
}
