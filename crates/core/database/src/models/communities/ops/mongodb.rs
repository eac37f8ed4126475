use agora_result::Result;

use crate::MongoDb;
use crate::{Community, PartialCommunity};

use super::AbstractCommunities;

static COL: &str = "communities";

#[async_trait]
impl AbstractCommunities for MongoDb {
    /// Insert a new community into the database
    async fn insert_community(&self, community: &Community) -> Result<()> {
        self.insert_one_unique(COL, community).await
    }

    /// Fetch a community by its id
    async fn fetch_community(&self, id: &str) -> Result<Community> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a community by its unique name
    async fn fetch_community_by_name(&self, name: &str) -> Result<Community> {
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

    /// Update a community with new information
    async fn update_community(&self, id: &str, partial: &PartialCommunity) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }
}
