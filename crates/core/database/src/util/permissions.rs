use agora_permissions::ModerationQuery;
use agora_result::{ErrorType, Result};

use crate::{Community, Database, ModeratedObject, User};

/// Moderation access calculator backed by the database
pub struct DatabasePermissionQuery<'a> {
    database: &'a Database,
    perspective: &'a User,

    community_id: Option<String>,
    cached_community: Option<Community>,
    community_loaded: bool,
}

#[async_trait]
impl ModerationQuery for DatabasePermissionQuery<'_> {
    // * For calculating moderator role

    /// Is our perspective user a global moderator?
    async fn are_we_global_moderator(&mut self) -> bool {
        self.perspective.global_moderator
    }

    /// Get the community currently selected, if any
    async fn get_selected_community(&mut self) -> Option<String> {
        self.community_id.clone()
    }

    /// Is our perspective user staff of the currently selected community?
    async fn are_we_community_staff(&mut self) -> bool {
        if !self.community_loaded {
            if let Some(id) = &self.community_id {
                match self.database.fetch_community(id).await {
                    Ok(community) => self.cached_community = Some(community),
                    Err(error) if !matches!(error.error_type, ErrorType::NotFound) => {
                        warn!("Failed to fetch community {id} for a moderation check: {error}");
                    }
                    Err(_) => {}
                }
            }

            self.community_loaded = true;
        }

        self.cached_community
            .as_ref()
            .map(|community| community.is_staff(&self.perspective.id))
            .unwrap_or_default()
    }
}

impl<'a> DatabasePermissionQuery<'a> {
    /// Create a new permission calculator
    pub fn new(database: &'a Database, perspective: &'a User) -> DatabasePermissionQuery<'a> {
        DatabasePermissionQuery {
            database,
            perspective,

            community_id: None,
            cached_community: None,
            community_loaded: false,
        }
    }

    /// Use community
    pub fn community(self, community: &Community) -> DatabasePermissionQuery<'a> {
        DatabasePermissionQuery {
            community_id: Some(community.id.to_string()),
            cached_community: Some(community.clone()),
            community_loaded: true,
            ..self
        }
    }

    /// Use community by its id, `None` selects the global scope
    pub fn community_id(self, community_id: Option<&str>) -> DatabasePermissionQuery<'a> {
        DatabasePermissionQuery {
            community_id: community_id.map(str::to_string),
            cached_community: None,
            community_loaded: false,
            ..self
        }
    }

    /// Use the community a moderation case is scoped to
    pub fn moderated_object(self, object: &ModeratedObject) -> DatabasePermissionQuery<'a> {
        self.community_id(object.community.as_deref())
    }

    /// Fetch the selected community now, returning storage failures
    ///
    /// A community which no longer exists has no staff.
    pub async fn preload(mut self) -> Result<DatabasePermissionQuery<'a>> {
        if !self.community_loaded {
            if let Some(id) = &self.community_id {
                match self.database.fetch_community(id).await {
                    Ok(community) => self.cached_community = Some(community),
                    Err(error) if !matches!(error.error_type, ErrorType::NotFound) => {
                        return Err(error)
                    }
                    Err(_) => {}
                }
            }

            self.community_loaded = true;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use agora_permissions::{calculate_moderator_role, ModeratorRole};

    use crate::{fixture, util::permissions::DatabasePermissionQuery};

    #[async_std::test]
    async fn roles() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                moderator user 0
                staff user 1
                reporter user 3
                community community 4);

            let mut query = DatabasePermissionQuery::new(&db, &moderator).community(&community);
            assert_eq!(
                calculate_moderator_role(&mut query).await,
                ModeratorRole::GlobalModerator
            );

            let mut query =
                DatabasePermissionQuery::new(&db, &staff).community_id(Some(&community.id));
            assert_eq!(
                calculate_moderator_role(&mut query).await,
                ModeratorRole::CommunityStaff(community.id.clone())
            );

            let mut query = DatabasePermissionQuery::new(&db, &staff);
            assert_eq!(calculate_moderator_role(&mut query).await, ModeratorRole::None);

            let mut query = DatabasePermissionQuery::new(&db, &reporter).community(&community);
            assert_eq!(calculate_moderator_role(&mut query).await, ModeratorRole::None);
        });
    }

    #[async_std::test]
    async fn preload_tolerates_missing_community() {
        database_test!(|db| async move {
            fixture!(db, "moderation",
                moderator user 0
                staff user 1);

            let mut query = DatabasePermissionQuery::new(&db, &staff)
                .community_id(Some("01HZZZZZZZZZZZZZZZZZZZZZZZ"))
                .preload()
                .await
                .unwrap();
            assert_eq!(calculate_moderator_role(&mut query).await, ModeratorRole::None);

            let mut query = DatabasePermissionQuery::new(&db, &moderator)
                .community_id(Some("01HZZZZZZZZZZZZZZZZZZZZZZZ"))
                .preload()
                .await
                .unwrap();
            assert_eq!(
                calculate_moderator_role(&mut query).await,
                ModeratorRole::GlobalModerator
            );
        });
    }
}
