mod admin_migrations;
mod communities;
mod moderated_object_logs;
mod moderated_objects;
mod post_comments;
mod posts;
mod report_categories;
mod reports;
mod sessions;
mod users;

pub use admin_migrations::*;
pub use communities::*;
pub use moderated_object_logs::*;
pub use moderated_objects::*;
pub use post_comments::*;
pub use posts::*;
pub use report_categories::*;
pub use reports::*;
pub use sessions::*;
pub use users::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + admin_migrations::AbstractMigrations
    + communities::AbstractCommunities
    + moderated_object_logs::AbstractModeratedObjectLogs
    + moderated_objects::AbstractModeratedObjects
    + post_comments::AbstractPostComments
    + posts::AbstractPosts
    + report_categories::AbstractReportCategories
    + reports::AbstractReports
    + sessions::AbstractSessions
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
