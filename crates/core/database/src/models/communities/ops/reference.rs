use agora_result::Result;

use crate::ReferenceDb;
use crate::{Community, PartialCommunity};

use super::AbstractCommunities;

#[async_trait]
impl AbstractCommunities for ReferenceDb {
    /// Insert a new community into the database
    async fn insert_community(&self, community: &Community) -> Result<()> {
        let mut communities = self.communities.lock().await;
        if communities.contains_key(&community.id) {
            Err(create_database_error!("insert", "community"))
        } else if communities
            .values()
            .any(|existing| existing.name == community.name)
        {
            Err(create_error!(Conflict))
        } else {
            communities.insert(community.id.to_string(), community.clone());
            Ok(())
        }
    }

    /// Fetch a community by its id
    async fn fetch_community(&self, id: &str) -> Result<Community> {
        let communities = self.communities.lock().await;
        communities
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a community by its unique name
    async fn fetch_community_by_name(&self, name: &str) -> Result<Community> {
        let communities = self.communities.lock().await;
        communities
            .values()
            .find(|community| community.name == name)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Update a community with new information
    async fn update_community(&self, id: &str, partial: &PartialCommunity) -> Result<()> {
        let mut communities = self.communities.lock().await;
        if let Some(community) = communities.get_mut(id) {
            community.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}
