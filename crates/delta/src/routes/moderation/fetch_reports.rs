use agora_database::{util::reference::Reference, Database, User};
use agora_models::v0;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Reports
///
/// Fetch every report made against the object of a moderation case.
#[openapi(tag = "Moderated Objects")]
#[get("/moderated-objects/<target>/reports")]
pub async fn fetch_reports(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<Vec<v0::Report>>> {
    let object = target.as_moderated_object(db).await?;
    object.throw_if_cannot_moderate(db, &user).await?;

    object
        .fetch_reports(db)
        .await
        .map(|reports| Json(reports.into_iter().map(Into::into).collect()))
}
