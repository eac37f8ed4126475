use agora_database::{util::reference::Reference, Database, User};
use agora_models::v0;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Reject Moderated Object
///
/// Dismiss the reports made against an object, lifting any earlier approval.
#[openapi(tag = "Moderated Objects")]
#[post("/moderated-objects/<target>/reject")]
pub async fn reject_moderated_object(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<v0::ModeratedObject>> {
    let mut object = target.as_moderated_object(db).await?;
    object.reject(db, &user).await?;

    Ok(Json(object.into()))
}
