use agora_database::{util::reference::Reference, Database, ModerationTarget, Report, User};
use agora_models::v0;
use agora_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Report User
///
/// Report a user to the platform moderators.
#[openapi(tag = "Reports")]
#[post("/<target>/report", data = "<data>")]
pub async fn report_user(
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

    let target = ModerationTarget::resolve(db, v0::ModeratedObjectType::User, target.id).await?;
    Report::submit(db, &user, &target, data)
        .await
        .map(|report| Json(report.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use agora_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn report_user() {
        let harness = TestHarness::new().await;
        let (_, target) = harness.new_user().await;
        let (session, _) = harness.new_user().await;
        let harassment = harness.category("harassment").await;

        let response = harness
            .report(&session, format!("/users/{}/report", target.id), &harassment)
            .await;

        assert_eq!(response.status(), Status::Ok);
        let report = response
            .into_json::<v0::Report>()
            .await
            .expect("`Report`");
        assert_eq!(report.object_type, v0::ModeratedObjectType::User);
        assert_eq!(report.object_id, target.id);
    }

    #[rocket::async_test]
    async fn cannot_report_yourself() {
        let harness = TestHarness::new().await;
        let (session, user) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let response = harness
            .report(&session, format!("/users/{}/report", user.id), &spam)
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        drop(response);

        let object = harness
            .db
            .fetch_moderated_object_by_object(v0::ModeratedObjectType::User, &user.id)
            .await
            .expect("query");
        assert!(object.is_none());
    }

    #[rocket::async_test]
    async fn unknown_user() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let response = harness
            .report(&session, "/users/01HZZZZZZZZZZZZZZZZZZZZZZZ/report".to_string(), &spam)
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
