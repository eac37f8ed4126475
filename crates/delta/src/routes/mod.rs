use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod communities;
mod moderation;
mod posts;
mod root;
mod users;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root, root::ping],
        "/moderation" => moderation::routes(),
        "/communities" => communities::routes(),
        "/posts" => posts::routes(),
        "/users" => users::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    let mut extensions = schemars::Map::new();
    extensions.insert(
        "x-tagGroups".to_owned(),
        json!([
          {
            "name": "Agora",
            "tags": [
              "Core"
            ]
          },
          {
            "name": "Moderation",
            "tags": [
              "Moderated Objects",
              "Community Moderation",
              "Reports"
            ]
          }
        ]),
    );

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Agora Moderation API".to_owned(),
            description: Some(
                "Report content and review moderation cases across the platform.".to_owned(),
            ),
            license: Some(License {
                name: "AGPLv3".to_owned(),
                ..Default::default()
            }),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        servers: vec![Server {
            url: "http://localhost:8000".to_owned(),
            description: Some("Local Agora Environment".to_owned()),
            ..Default::default()
        }],
        extensions,
        tags: vec![
            Tag {
                name: "Core".to_owned(),
                description: Some("Information about this Agora node".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Moderated Objects".to_owned(),
                description: Some("Review moderation cases as a global moderator".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Community Moderation".to_owned(),
                description: Some("Review moderation cases within a community".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Reports".to_owned(),
                description: Some("Report posts, comments, users and communities".to_owned()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
