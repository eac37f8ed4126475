use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{
    Community, ModeratedObject, ModeratedObjectLog, Post, PostComment, Report, ReportCategory,
    Session, User,
};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,
        pub communities: Arc<Mutex<HashMap<String, Community>>>,
        pub posts: Arc<Mutex<HashMap<String, Post>>>,
        pub post_comments: Arc<Mutex<HashMap<String, PostComment>>>,

        pub report_categories: Arc<Mutex<HashMap<String, ReportCategory>>>,
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
        pub moderated_objects: Arc<Mutex<HashMap<String, ModeratedObject>>>,
        pub moderated_object_logs: Arc<Mutex<HashMap<String, ModeratedObjectLog>>>,
    }
);
