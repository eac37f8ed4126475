use std::fmt;
use std::str::FromStr;

use iso8601_timestamp::Timestamp;

#[cfg(feature = "rocket")]
use rocket::FromForm;

auto_derived!(
    /// Type of object a moderation case is about
    #[derive(Copy, Hash)]
    #[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
    pub enum ModeratedObjectType {
        /// Post
        Post,
        /// Comment on a post
        PostComment,
        /// User profile
        User,
        /// Community
        Community,
    }

    /// Status of a moderation case
    #[derive(Copy, Hash)]
    #[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
    pub enum ModeratedObjectStatus {
        /// Waiting for a moderator verdict
        Pending,
        /// Moderators agreed the object violates policy
        Approved,
        /// Moderators found no violation
        Rejected,
    }

    /// # Moderated Object
    ///
    /// Moderation case aggregating every report made against one object
    pub struct ModeratedObject {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the reported object
        pub object_id: String,
        /// Type of the reported object
        pub object_type: ModeratedObjectType,
        /// Current verdict
        pub status: ModeratedObjectStatus,
        /// Id of the category of the report that opened this case
        pub category: String,
        /// Id of the community this case is scoped to
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub community: Option<String>,
        /// When this case was opened
        pub created_at: Timestamp,
        /// When this case was last changed
        pub updated_at: Timestamp,
    }

    /// # Moderated Object Log
    ///
    /// Record of a verdict given on a moderation case
    pub struct ModeratedObjectLog {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the moderation case
        pub moderated_object_id: String,
        /// Id of the moderator who gave the verdict
        pub actor_id: String,
        /// Status before the verdict
        pub previous_status: ModeratedObjectStatus,
        /// Status after the verdict
        pub status: ModeratedObjectStatus,
        /// When the verdict was given
        pub created_at: Timestamp,
    }

    /// # Query Parameters
    ///
    /// Both filters accept comma separated or repeated values,
    /// leaving a filter out does not restrict the listing.
    #[cfg_attr(feature = "rocket", derive(FromForm))]
    #[derive(Default)]
    pub struct OptionsFetchModeratedObjects {
        /// Statuses to include (PENDING, APPROVED, REJECTED)
        #[cfg_attr(feature = "serde", serde(default))]
        pub statuses: Vec<String>,
        /// Object types to include (POST, POST_COMMENT, USER, COMMUNITY)
        #[cfg_attr(feature = "serde", serde(default))]
        pub types: Vec<String>,
        /// Only return cases created before the case with this id
        pub before: Option<String>,
        /// Maximum number of cases to return
        pub limit: Option<i64>,
    }
);

impl ModeratedObjectType {
    /// All object types that can be moderated
    pub const ALL: [ModeratedObjectType; 4] = [
        ModeratedObjectType::Post,
        ModeratedObjectType::PostComment,
        ModeratedObjectType::User,
        ModeratedObjectType::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeratedObjectType::Post => "POST",
            ModeratedObjectType::PostComment => "POST_COMMENT",
            ModeratedObjectType::User => "USER",
            ModeratedObjectType::Community => "COMMUNITY",
        }
    }
}

impl ModeratedObjectStatus {
    /// All possible case statuses
    pub const ALL: [ModeratedObjectStatus; 3] = [
        ModeratedObjectStatus::Pending,
        ModeratedObjectStatus::Approved,
        ModeratedObjectStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeratedObjectStatus::Pending => "PENDING",
            ModeratedObjectStatus::Approved => "APPROVED",
            ModeratedObjectStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ModeratedObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ModeratedObjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeratedObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeratedObjectType::ALL
            .into_iter()
            .find(|object_type| object_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown moderated object type `{s}`"))
    }
}

impl FromStr for ModeratedObjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModeratedObjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown moderated object status `{s}`"))
    }
}

/// Parse a list of filter values which may each hold several comma separated entries
///
/// Returns `None` when no values were given, meaning the filter does not apply.
pub fn parse_filter_values<T: FromStr<Err = String> + PartialEq>(
    values: &[String],
) -> Result<Option<Vec<T>>, String> {
    let mut parsed = Vec::new();
    for value in values.iter().flat_map(|value| value.split(',')) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let value = value.parse()?;
        if !parsed.contains(&value) {
            parsed.push(value);
        }
    }

    if parsed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parsed))
    }
}

impl OptionsFetchModeratedObjects {
    /// Requested statuses, `None` if any status is accepted
    pub fn statuses(&self) -> Result<Option<Vec<ModeratedObjectStatus>>, String> {
        parse_filter_values(&self.statuses)
    }

    /// Requested object types, `None` if any type is accepted
    pub fn types(&self) -> Result<Option<Vec<ModeratedObjectType>>, String> {
        parse_filter_values(&self.types)
    }
}
