use iso8601_timestamp::Timestamp;

use super::ModeratedObjectType;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// # Report Category
    ///
    /// Reason a user may give when reporting something
    pub struct ReportCategory {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Unique machine readable name
        pub name: String,
        /// Human readable title
        pub title: String,
        /// Description of what falls under this category
        pub description: String,
    }

    /// # Report
    ///
    /// Complaint made by one user against one object
    pub struct Report {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Id of the user who made this report
        pub reporter_id: String,
        /// Type of the reported object
        pub object_type: ModeratedObjectType,
        /// Id of the reported object
        pub object_id: String,
        /// Id of the report category
        pub category_id: String,
        /// Additional context given by the reporter
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub description: Option<String>,
        /// When this report was made
        pub created_at: Timestamp,
    }

    /// # Report Data
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataReportObject {
        /// Id of the report category
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub category_id: String,
        /// Additional report context
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 1000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub description: Option<String>,
    }
);
