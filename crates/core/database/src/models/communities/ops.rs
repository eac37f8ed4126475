use agora_result::Result;

use crate::{Community, PartialCommunity};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractCommunities: Sync + Send {
    /// Insert a new community into the database
    ///
    /// Fails with `Conflict` if the name is already taken.
    async fn insert_community(&self, community: &Community) -> Result<()>;

    /// Fetch a community by its id
    async fn fetch_community(&self, id: &str) -> Result<Community>;

    /// Fetch a community by its unique name
    async fn fetch_community_by_name(&self, name: &str) -> Result<Community>;

    /// Update a community with new information
    async fn update_community(&self, id: &str, partial: &PartialCommunity) -> Result<()>;
}
