use agora_database::{util::reference::Reference, Database, User};
use agora_models::v0;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Moderation Logs
///
/// Fetch the verdicts given on a moderation case, oldest first.
#[openapi(tag = "Moderated Objects")]
#[get("/moderated-objects/<target>/logs")]
pub async fn fetch_logs(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<Vec<v0::ModeratedObjectLog>>> {
    let object = target.as_moderated_object(db).await?;
    object.throw_if_cannot_moderate(db, &user).await?;

    object
        .fetch_logs(db)
        .await
        .map(|logs| Json(logs.into_iter().map(Into::into).collect()))
}
