use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod report;
mod report_comment;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![report::report_post, report_comment::report_post_comment]
}
