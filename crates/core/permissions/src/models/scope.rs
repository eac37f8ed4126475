use agora_result::{create_error, Result};

/// Authorization boundary a listing or action is evaluated under
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemas", derive(schemars::JsonSchema))]
pub enum ModerationScope {
    /// Every case on the platform
    Global,
    /// Cases scoped to the community with the given id
    Community(String),
}

impl ModerationScope {
    /// Community id of this scope, `None` for the global scope
    pub fn community(&self) -> Option<&str> {
        match self {
            ModerationScope::Global => None,
            ModerationScope::Community(id) => Some(id),
        }
    }
}

/// Moderation capability of a user
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemas", derive(schemars::JsonSchema))]
pub enum ModeratorRole {
    /// May view and act on every case
    GlobalModerator,
    /// May view and act on cases scoped to the given community
    CommunityStaff(String),
    /// No moderation capability
    None,
}

impl ModeratorRole {
    /// Whether this role may view and act on a case with the given community scope
    ///
    /// A case without a community is global and only visible to global moderators.
    pub fn can_view(&self, community: Option<&str>) -> bool {
        match self {
            ModeratorRole::GlobalModerator => true,
            ModeratorRole::CommunityStaff(id) => community == Some(id.as_str()),
            ModeratorRole::None => false,
        }
    }

    /// Whether this role may list cases within the given scope
    pub fn can_view_scope(&self, scope: &ModerationScope) -> bool {
        match (self, scope) {
            (ModeratorRole::GlobalModerator, _) => true,
            (ModeratorRole::CommunityStaff(id), ModerationScope::Community(community)) => {
                id == community
            }
            _ => false,
        }
    }

    /// Throw an error if this role may not view the case with the given community scope
    pub fn throw_if_cannot_view(&self, community: Option<&str>) -> Result<()> {
        if self.can_view(community) {
            Ok(())
        } else {
            Err(create_error!(Forbidden))
        }
    }

    /// Throw an error if this role may not list cases within the given scope
    pub fn throw_if_cannot_view_scope(&self, scope: &ModerationScope) -> Result<()> {
        if self.can_view_scope(scope) {
            Ok(())
        } else {
            Err(create_error!(Forbidden))
        }
    }
}
