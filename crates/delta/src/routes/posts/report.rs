use agora_database::{util::reference::Reference, Database, ModerationTarget, Report, User};
use agora_models::v0;
use agora_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Report Post
///
/// Report a post. The first report against a post opens its moderation case.
#[openapi(tag = "Reports")]
#[post("/<target>/report", data = "<data>")]
pub async fn report_post(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
    data: Json<v0::DataReportObject>,
) -> Result<Json<v0::Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let target = ModerationTarget::resolve(db, v0::ModeratedObjectType::Post, target.id).await?;
    Report::submit(db, &user, &target, data)
        .await
        .map(|report| Json(report.into()))
}
