use agora_database::{Database, User};
use agora_models::v0;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Report Categories
///
/// Fetch the categories a report can be filed under.
#[openapi(tag = "Reports")]
#[get("/categories")]
pub async fn fetch_categories(
    db: &State<Database>,
    _user: User,
) -> Result<Json<Vec<v0::ReportCategory>>> {
    db.fetch_report_categories()
        .await
        .map(|categories| Json(categories.into_iter().map(Into::into).collect()))
}
