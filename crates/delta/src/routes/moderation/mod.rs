use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod approve;
mod fetch_categories;
mod fetch_logs;
mod fetch_moderated_object;
mod fetch_moderated_objects;
mod fetch_reports;
mod reject;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        fetch_moderated_objects::fetch_moderated_objects,
        fetch_moderated_object::fetch_moderated_object,
        fetch_reports::fetch_reports,
        fetch_logs::fetch_logs,
        approve::approve_moderated_object,
        reject::reject_moderated_object,
        fetch_categories::fetch_categories,
    ]
}
