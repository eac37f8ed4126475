use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::from_str;

use crate::{Community, Database, Post, PostComment, ReportCategory, User};

static RE_ID: Lazy<Regex> = Lazy::new(|| Regex::new("__ID:(\\d+)__").unwrap());

#[derive(Debug, Deserialize)]
#[serde(tag = "_object_type")]
enum LoadedFixture {
    User(User),
    Community(Community),
    Post(Post),
    PostComment(PostComment),
    ReportCategory(ReportCategory),
}

pub async fn load_fixture(db: &Database, input: &str) -> HashMap<String, String> {
    let mut ids = HashMap::<String, String>::new();
    let input = RE_ID.replace_all(input, |cap: &Captures| {
        let d = cap.get(1).unwrap().as_str();

        if !ids.contains_key(d) {
            ids.insert(d.to_string(), ulid::Ulid::new().to_string());
        }

        ids.get(d).unwrap().clone()
    });

    // Deserialise the fixtures
    let items: Vec<LoadedFixture> = from_str(&input).expect("Failed to deserialise fixture");

    // Load all of the items within
    for item in items {
        #[allow(clippy::disallowed_methods)]
        match item {
            LoadedFixture::User(user) => db.insert_user(&user).await.unwrap(),
            LoadedFixture::Community(community) => db.insert_community(&community).await.unwrap(),
            LoadedFixture::Post(post) => db.insert_post(&post).await.unwrap(),
            LoadedFixture::PostComment(comment) => db.insert_post_comment(&comment).await.unwrap(),
            LoadedFixture::ReportCategory(category) => {
                db.insert_report_category(&category).await.unwrap()
            }
        }
    }

    // Return IDs for ease of use
    ids
}

#[async_trait]
pub trait FetchFixture {
    async fn user(&self, db: &Database, d: usize) -> User;
    async fn community(&self, db: &Database, d: usize) -> Community;
    async fn post(&self, db: &Database, d: usize) -> Post;
    async fn post_comment(&self, db: &Database, d: usize) -> PostComment;
    async fn category(&self, db: &Database, d: usize) -> ReportCategory;
}

#[async_trait]
impl FetchFixture for HashMap<String, String> {
    async fn user(&self, db: &Database, d: usize) -> User {
        db.fetch_user(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }

    async fn community(&self, db: &Database, d: usize) -> Community {
        db.fetch_community(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }

    async fn post(&self, db: &Database, d: usize) -> Post {
        db.fetch_post(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }

    async fn post_comment(&self, db: &Database, d: usize) -> PostComment {
        db.fetch_post_comment(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }

    async fn category(&self, db: &Database, d: usize) -> ReportCategory {
        db.fetch_report_category(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }
}

#[macro_export]
macro_rules! fixture {
    ( $database:expr, $name:expr, $( $variable:ident $type:ident $id: expr )+ ) => {
        use $crate::util::test_fixtures::FetchFixture;

        let fixtures = $crate::util::test_fixtures::load_fixture(
            &$database,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/", $name, ".json")),
        )
        .await;

        $(
            let $variable = fixtures.$type(&$database, $id).await;
        )+
    };
}
