use agora_database::{Database, ModeratedObject, ModeratedObjectFilter, User};
use agora_models::v0;
use agora_permissions::ModerationScope;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Moderated Objects
///
/// Fetch moderation cases from across the platform, newest first.
///
/// Only global moderators may use this route.
#[openapi(tag = "Moderated Objects")]
#[get("/moderated-objects?<options..>")]
pub async fn fetch_moderated_objects(
    db: &State<Database>,
    user: User,
    options: v0::OptionsFetchModeratedObjects,
) -> Result<Json<Vec<v0::ModeratedObject>>> {
    let filter = ModeratedObjectFilter::try_from(options)?;

    ModeratedObject::list(db, &user, ModerationScope::Global, filter)
        .await
        .map(|objects| Json(objects.into_iter().map(Into::into).collect()))
}
