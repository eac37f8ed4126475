use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3;
use rocket_okapi::response::OpenApiResponderInner;

use crate::Error;

impl OpenApiResponderInner for Error {
    fn responses(gen: &mut OpenApiGenerator) -> rocket_okapi::Result<openapi3::Responses> {
        let mut content = rocket_okapi::okapi::Map::new();

        content.insert(
            "application/json".to_string(),
            openapi3::MediaType {
                schema: Some(gen.json_schema::<Error>()),
                ..Default::default()
            },
        );

        Ok(openapi3::Responses {
            default: Some(openapi3::RefOr::Object(openapi3::Response {
                content,
                description: "An error occurred.".to_string(),
                ..Default::default()
            })),
            ..Default::default()
        })
    }
}
