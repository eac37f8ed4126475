use agora_database::{util::reference::Reference, Database, User};
use agora_models::v0;
use agora_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Approve Moderated Object
///
/// Agree with the reports made against an object. Posts, comments and
/// communities are hidden while users are suspended.
#[openapi(tag = "Moderated Objects")]
#[post("/moderated-objects/<target>/approve")]
pub async fn approve_moderated_object(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
) -> Result<Json<v0::ModeratedObject>> {
    let mut object = target.as_moderated_object(db).await?;
    object.approve(db, &user).await?;

    Ok(Json(object.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use agora_database::{ModeratedObject, ModerationTarget, PartialCommunity};
    use agora_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn approve_hides_post() {
        let harness = TestHarness::new().await;
        let (moderator_session, moderator) = harness.new_global_moderator().await;
        let (_, author) = harness.new_user().await;
        let (reporter_session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let post = harness.new_post(&author, None).await;
        harness.report_post(&reporter_session, &post, &spam).await;

        let object = harness
            .db
            .fetch_moderated_object_by_object(v0::ModeratedObjectType::Post, &post.id)
            .await
            .expect("query")
            .expect("`ModeratedObject`");

        let response = harness
            .client
            .post(format!("/moderation/moderated-objects/{}/approve", object.id))
            .header(TestHarness::session_header(&moderator_session))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let approved = response
            .into_json::<v0::ModeratedObject>()
            .await
            .expect("`ModeratedObject`");
        assert_eq!(approved.status, v0::ModeratedObjectStatus::Approved);

        let post = harness.db.fetch_post(&post.id).await.expect("`Post`");
        assert!(post.hidden);

        let logs = harness
            .db
            .fetch_moderated_object_logs(&object.id)
            .await
            .expect("`Vec<ModeratedObjectLog>`");
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].actor_id, moderator.id);
        assert_eq!(logs[0].previous_status, v0::ModeratedObjectStatus::Pending);
        assert_eq!(logs[0].status, v0::ModeratedObjectStatus::Approved);
    }

    #[rocket::async_test]
    async fn community_staff_approve_within_community() {
        let harness = TestHarness::new().await;
        let (owner_session, owner) = harness.new_user().await;
        let (staff_session, staff) = harness.new_user().await;
        let (outsider_session, _) = harness.new_user().await;
        let (_, author) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let mut community = harness.new_community(&owner).await;
        community
            .update(
                &harness.db,
                PartialCommunity {
                    moderators: Some(vec![staff.id.clone()]),
                    ..Default::default()
                },
            )
            .await
            .expect("`Community` update");

        let post = harness.new_post(&author, Some(&community)).await;
        let object =
            ModeratedObject::get_or_create(&harness.db, &ModerationTarget::Post(post), &spam.id)
                .await
                .expect("`ModeratedObject`");
        assert_eq!(object.community.as_deref(), Some(community.id.as_str()));

        let response = harness
            .client
            .post(format!("/moderation/moderated-objects/{}/approve", object.id))
            .header(TestHarness::session_header(&outsider_session))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Forbidden);
        drop(response);

        for session in [&staff_session, &owner_session] {
            let response = harness
                .client
                .post(format!("/moderation/moderated-objects/{}/approve", object.id))
                .header(TestHarness::session_header(session))
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Ok);
        }
    }

    #[rocket::async_test]
    async fn approve_unknown_case() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_user().await;

        let response = harness
            .client
            .post("/moderation/moderated-objects/01HZZZZZZZZZZZZZZZZZZZZZZZ/approve")
            .header(TestHarness::session_header(&session))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
