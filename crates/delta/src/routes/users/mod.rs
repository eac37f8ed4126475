use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod report;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![report::report_user]
}
