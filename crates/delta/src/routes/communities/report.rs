use agora_database::{util::reference::Reference, Database, ModerationTarget, Report, User};
use agora_models::v0;
use agora_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Report Community
///
/// Report a community to the platform moderators.
#[openapi(tag = "Reports")]
#[post("/<target>/report", data = "<data>")]
pub async fn report_community(
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

    let target = ModerationTarget::resolve_community_by_name(db, target.id).await?;

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
    async fn report_community() {
        let harness = TestHarness::new().await;
        let (owner_session, owner) = harness.new_user().await;
        let (session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let community = harness.new_community(&owner).await;
        let path = format!("/communities/{}/report", community.name);

        let response = harness.report(&session, path.clone(), &spam).await;
        assert_eq!(response.status(), Status::Ok);

        let report = response
            .into_json::<v0::Report>()
            .await
            .expect("`Report`");
        assert_eq!(report.object_type, v0::ModeratedObjectType::Community);
        assert_eq!(report.object_id, community.id);

        let object = harness
            .db
            .fetch_moderated_object_by_object(v0::ModeratedObjectType::Community, &community.id)
            .await
            .expect("query")
            .expect("`ModeratedObject`");
        assert_eq!(object.community, None);

        let response = harness.report(&owner_session, path, &spam).await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn unknown_community() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let response = harness
            .report(&session, "/communities/does-not-exist/report".to_string(), &spam)
            .await;

        assert_eq!(response.status(), Status::NotFound);
        let error = response
            .into_json::<serde_json::Value>()
            .await
            .expect("`Error`");
        assert_eq!(error["type"], "InvalidTarget");
    }
}
