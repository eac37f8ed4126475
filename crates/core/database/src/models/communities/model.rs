use agora_result::Result;

use crate::{Database, User};

auto_derived_partial!(
    /// # Community
    pub struct Community {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Unique name used in routes
        pub name: String,
        /// Display title
        pub title: String,

        /// Id of the user who owns this community
        pub owner: String,
        /// Ids of community administrators
        #[serde(default)]
        pub administrators: Vec<String>,
        /// Ids of community moderators
        #[serde(default)]
        pub moderators: Vec<String>,

        /// Whether this community has been hidden by a moderation verdict
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub hidden: bool,
    },
    "PartialCommunity"
);

impl Community {
    /// Create a new community owned by the given user
    pub async fn create(
        db: &Database,
        owner: &User,
        name: String,
        title: String,
    ) -> Result<Community> {
        let community = Community {
            id: ulid::Ulid::new().to_string(),
            name,
            title,
            owner: owner.id.to_string(),
            administrators: vec![],
            moderators: vec![],
            hidden: false,
        };

        db.insert_community(&community).await?;
        Ok(community)
    }

    /// Whether the given user is the owner, an administrator or a moderator
    pub fn is_staff(&self, user_id: &str) -> bool {
        self.owner == user_id
            || self.administrators.iter().any(|id| id == user_id)
            || self.moderators.iter().any(|id| id == user_id)
    }

    /// Update community data
    pub async fn update(&mut self, db: &Database, partial: PartialCommunity) -> Result<()> {
        self.apply_options(partial.clone());
        db.update_community(&self.id, &partial).await
    }
}

#[cfg(test)]
mod tests {
    use agora_result::ErrorType;

    use crate::{Community, PartialCommunity, User};

    #[async_std::test]
    async fn staff_membership() {
        database_test!(|db| async move {
            let owner = User::create(&db, "owner".to_string()).await.unwrap();
            let moderator = User::create(&db, "moderator".to_string()).await.unwrap();
            let member = User::create(&db, "member".to_string()).await.unwrap();

            let mut community = Community::create(
                &db,
                &owner,
                "rustaceans".to_string(),
                "Rustaceans".to_string(),
            )
            .await
            .unwrap();

            community
                .update(
                    &db,
                    PartialCommunity {
                        moderators: Some(vec![moderator.id.clone()]),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();

            let community = db.fetch_community_by_name("rustaceans").await.unwrap();
            assert!(community.is_staff(&owner.id));
            assert!(community.is_staff(&moderator.id));
            assert!(!community.is_staff(&member.id));
        });
    }

    #[async_std::test]
    async fn name_is_unique() {
        database_test!(|db| async move {
            let owner = User::create(&db, "owner".to_string()).await.unwrap();
            Community::create(&db, &owner, "unique".to_string(), "One".to_string())
                .await
                .unwrap();

            let error = Community::create(&db, &owner, "unique".to_string(), "Two".to_string())
                .await
                .unwrap_err();
            assert!(matches!(error.error_type, ErrorType::Conflict));
        });
    }
}
