#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate serde_json;

pub mod routes;
pub mod util;

use std::str::FromStr;

use agora_database::{DatabaseInfo, ReportCategory};
use log::info;
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;

#[launch]
async fn rocket() -> _ {
    agora_config::setup_logging();

    info!(
        "Starting Agora moderation server [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    web().await
}

/// Build the Rocket instance serving the API
pub async fn web() -> Rocket<Build> {
    agora_config::init().await;
    let config = agora_config::config().await;

    // Setup database
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Failed to connect to the database.");

    db.migrate_database()
        .await
        .expect("Failed to migrate the database.");

    ReportCategory::seed(&db, &config.moderation.categories)
        .await
        .expect("Failed to seed report categories.");

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Put", "Post", "Delete", "Options", "Head", "Patch"]
            .iter()
            .filter_map(|s| FromStr::from_str(s).ok())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Configure Rocket
    let rocket = rocket::build();
    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .register("/", util::catchers::all_catchers())
        .manage(db)
        .manage(cors.clone())
        .attach(cors)
}
