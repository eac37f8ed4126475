use agora_database::{util::reference::Reference, Database, ModerationTarget, Report, User};
use agora_models::v0;
use agora_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use validator::Validate;

/// # Report Post Comment
///
/// Report a comment left on a post.
#[openapi(tag = "Reports")]
#[post("/<target>/comments/<comment>/report", data = "<data>")]
pub async fn report_post_comment(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
    comment: Reference<'_>,
    data: Json<v0::DataReportObject>,
) -> Result<Json<v0::Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let target = ModerationTarget::resolve_post_comment(db, target.id, comment.id).await?;
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
    async fn report_comment() {
        let harness = TestHarness::new().await;
        let (_, owner) = harness.new_user().await;
        let (_, author) = harness.new_user().await;
        let (session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let community = harness.new_community(&owner).await;
        let post = harness.new_post(&owner, Some(&community)).await;
        let comment = harness.new_comment(&post, &author).await;

        let response = harness
            .report(
                &session,
                format!("/posts/{}/comments/{}/report", post.id, comment.id),
                &spam,
            )
            .await;

        assert_eq!(response.status(), Status::Ok);
        let report = response
            .into_json::<v0::Report>()
            .await
            .expect("`Report`");
        assert_eq!(report.object_type, v0::ModeratedObjectType::PostComment);
        assert_eq!(report.object_id, comment.id);

        let object = harness
            .db
            .fetch_moderated_object_by_object(v0::ModeratedObjectType::PostComment, &comment.id)
            .await
            .expect("query")
            .expect("`ModeratedObject`");
        assert_eq!(object.community.as_deref(), Some(community.id.as_str()));
    }

    #[rocket::async_test]
    async fn comment_must_belong_to_post() {
        let harness = TestHarness::new().await;
        let (_, author) = harness.new_user().await;
        let (session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let post = harness.new_post(&author, None).await;
        let other_post = harness.new_post(&author, None).await;
        let comment = harness.new_comment(&post, &author).await;

        let response = harness
            .report(
                &session,
                format!("/posts/{}/comments/{}/report", other_post.id, comment.id),
                &spam,
            )
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
