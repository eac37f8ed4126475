use agora_database::{util::reference::Reference, Database, User};
use agora_models::v0;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Moderated Object
///
/// Fetch a single moderation case by its id.
#[openapi(tag = "Moderated Objects")]
#[get("/moderated-objects/<target>")]
pub async fn fetch_moderated_object(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<v0::ModeratedObject>> {
    let object = target.as_moderated_object(db).await?;
    object.throw_if_cannot_moderate(db, &user).await?;

    Ok(Json(object.into()))
}
