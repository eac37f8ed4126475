use agora_models::v0::{ModeratedObjectStatus, ModeratedObjectType};

use crate::ModeratedObject;

/// Filter requested when listing moderation cases
///
/// A filter left as `None` does not restrict the listing.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ModeratedObjectFilter {
    /// Statuses to include
    pub statuses: Option<Vec<ModeratedObjectStatus>>,
    /// Object types to include
    pub object_types: Option<Vec<ModeratedObjectType>>,
    /// Only include cases older than the case with this id
    pub before: Option<String>,
    /// Maximum number of cases to return
    pub limit: Option<i64>,
}

/// Storage query for moderation cases
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ModeratedObjectQuery {
    /// Community the cases must be scoped to, `None` for any scope
    pub community: Option<String>,
    /// Statuses to include
    pub statuses: Option<Vec<ModeratedObjectStatus>>,
    /// Object types to include
    pub object_types: Option<Vec<ModeratedObjectType>>,
    /// Only include cases with an id below this one
    pub before: Option<String>,
    /// Maximum number of cases to return
    pub limit: i64,
}

impl ModeratedObjectQuery {
    /// Statuses restriction, empty sets are treated as absent
    pub fn statuses(&self) -> Option<&[ModeratedObjectStatus]> {
        self.statuses.as_deref().filter(|statuses| !statuses.is_empty())
    }

    /// Object types restriction, empty sets are treated as absent
    pub fn object_types(&self) -> Option<&[ModeratedObjectType]> {
        self.object_types
            .as_deref()
            .filter(|object_types| !object_types.is_empty())
    }

    /// Whether a case satisfies every restriction of this query
    pub fn matches(&self, object: &ModeratedObject) -> bool {
        if let Some(community) = &self.community {
            if object.community.as_ref() != Some(community) {
                return false;
            }
        }

        if let Some(statuses) = self.statuses() {
            if !statuses.contains(&object.status) {
                return false;
            }
        }

        if let Some(object_types) = self.object_types() {
            if !object_types.contains(&object.object_type) {
                return false;
            }
        }

        if let Some(before) = &self.before {
            if object.id.as_str() >= before.as_str() {
                return false;
            }
        }

        true
    }
}
