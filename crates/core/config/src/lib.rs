use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Agora.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Agora.toml").exists() {
            builder = builder.add_source(File::new("Agora.toml", FileFormat::Toml));
        }

        builder.build().expect("Agora.toml should be valid configuration")
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub report_description_length: usize,
}

/// Report category seeded on start up
#[derive(Deserialize, Debug, Clone)]
pub struct ModerationCategory {
    pub name: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Moderation {
    pub max_listing_limit: i64,
    pub categories: Vec<ModerationCategory>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub api: Api,
    pub moderation: Moderation,
}

/// Configure logging and common Rust variables
pub fn setup_logging() {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if std::env::var("ROCKET_ADDRESS").is_err() {
        std::env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    pretty_env_logger::init();
}

pub async fn init() {
    log::info!(":: Agora Configuration ::\n\x1b[32m{:?}\x1b[0m", config().await);
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read()
        .await
        .try_deserialize::<Settings>()
        .expect("Agora.toml should match the settings schema")
}
