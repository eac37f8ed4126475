use agora_database::{
    util::reference::Reference, Database, ModeratedObject, ModeratedObjectFilter, User,
};
use agora_models::v0;
use agora_permissions::ModerationScope;
use agora_result::{ErrorType, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Community Moderated Objects
///
/// Fetch moderation cases about posts and comments of a community, newest first.
///
/// Users who are not staff of the community receive an empty list.
#[openapi(tag = "Community Moderation")]
#[get("/<target>/moderated-objects?<options..>")]
pub async fn fetch_community_moderated_objects(
    db: &State<Database>,
    user: User,
    target: Reference<'_>,
    options: v0::OptionsFetchModeratedObjects,
) -> Result<Json<Vec<v0::ModeratedObject>>> {
    let community = target.as_community(db).await?;
    let filter = ModeratedObjectFilter::try_from(options)?;

    match ModeratedObject::list(db, &user, ModerationScope::Community(community.id), filter).await
    {
        Ok(objects) => Ok(Json(objects.into_iter().map(Into::into).collect())),
        Err(error) if matches!(error.error_type, ErrorType::Forbidden) => Ok(Json(vec![])),
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use agora_database::PartialCommunity;
    use agora_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn scoped_to_community() {
        let harness = TestHarness::new().await;
        let (owner_session, owner) = harness.new_user().await;
        let (staff_session, staff) = harness.new_user().await;
        let (member_session, _) = harness.new_user().await;
        let (moderator_session, _) = harness.new_global_moderator().await;
        let (_, author) = harness.new_user().await;
        let (reporter_session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let mut community = harness.new_community(&owner).await;
        community
            .update(
                &harness.db,
                PartialCommunity {
                    administrators: Some(vec![staff.id.clone()]),
                    ..Default::default()
                },
            )
            .await
            .expect("`Community` update");

        let other_community = harness.new_community(&author).await;

        let inside = harness.new_post(&author, Some(&community)).await;
        harness.report_post(&reporter_session, &inside, &spam).await;

        let comment = harness.new_comment(&inside, &author).await;
        let response = harness
            .report(
                &reporter_session,
                format!("/posts/{}/comments/{}/report", inside.id, comment.id),
                &spam,
            )
            .await;
        assert_eq!(response.status(), Status::Ok);
        drop(response);

        let elsewhere = harness.new_post(&author, Some(&other_community)).await;
        harness.report_post(&reporter_session, &elsewhere, &spam).await;

        let unscoped = harness.new_post(&author, None).await;
        harness.report_post(&reporter_session, &unscoped, &spam).await;

        let path = format!("/communities/{}/moderated-objects", community.name);
        for session in [&owner_session, &staff_session, &moderator_session] {
            let objects = harness.list(session, path.clone()).await;

            assert_eq!(objects.len(), 2);
            assert!(objects
                .iter()
                .all(|object| object.community.as_deref() == Some(community.id.as_str())));
        }

        let objects = harness.list(&member_session, path.clone()).await;
        assert!(objects.is_empty());

        let objects = harness
            .list(&owner_session, format!("{path}?types=POST_COMMENT"))
            .await;
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].object_id, comment.id);
    }

    #[rocket::async_test]
    async fn filters_by_status() {
        let harness = TestHarness::new().await;
        let (owner_session, owner) = harness.new_user().await;
        let (moderator_session, _) = harness.new_global_moderator().await;
        let (_, author) = harness.new_user().await;
        let (reporter_session, _) = harness.new_user().await;
        let spam = harness.category("spam").await;

        let community = harness.new_community(&owner).await;
        let other_community = harness.new_community(&author).await;

        let mut post_ids = Vec::new();
        for _ in 0..3 {
            let post = harness.new_post(&author, Some(&community)).await;
            harness.report_post(&reporter_session, &post, &spam).await;
            post_ids.push(post.id);
        }

        // Cases of every status in another community
        for verdict in ["approve", "reject", ""] {
            let post = harness.new_post(&author, Some(&other_community)).await;
            harness.report_post(&reporter_session, &post, &spam).await;

            if !verdict.is_empty() {
                let case = harness
                    .db
                    .fetch_moderated_object_by_object(v0::ModeratedObjectType::Post, &post.id)
                    .await
                    .expect("query")
                    .expect("`ModeratedObject`");
                harness.decide(&moderator_session, &case.id, verdict).await;
            }
        }

        let path = format!("/communities/{}/moderated-objects", community.name);
        let objects = harness.list(&owner_session, path.clone()).await;
        assert_eq!(objects.len(), 3);

        let approved = objects
            .iter()
            .find(|object| object.object_id == post_ids[0])
            .expect("case of the first post");
        let rejected = objects
            .iter()
            .find(|object| object.object_id == post_ids[1])
            .expect("case of the second post");

        harness.decide(&owner_session, &approved.id, "approve").await;
        harness.decide(&owner_session, &rejected.id, "reject").await;

        for (status, object_id) in [
            ("APPROVED", &post_ids[0]),
            ("REJECTED", &post_ids[1]),
            ("PENDING", &post_ids[2]),
        ] {
            let objects = harness
                .list(&owner_session, format!("{path}?statuses={status}"))
                .await;

            assert_eq!(objects.len(), 1);
            assert_eq!(&objects[0].object_id, object_id);
            assert_eq!(objects[0].community.as_deref(), Some(community.id.as_str()));
        }
    }

    #[rocket::async_test]
    async fn unknown_community() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_user().await;

        let response = harness
            .client
            .get("/communities/does-not-exist/moderated-objects")
            .header(TestHarness::session_header(&session))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::NotFound);
    }
}
