use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_moderated_objects;
mod report;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        fetch_moderated_objects::fetch_community_moderated_objects,
        report::report_community,
    ]
}
