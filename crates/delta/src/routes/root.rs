use agora_models::v0::ApiInfo;
use agora_result::Result;
use rocket::http::Status;
use rocket::serde::json::Json;

/// # Query Node
///
/// Fetch information about this Agora instance.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Result<Json<ApiInfo>> {
    Ok(Json(ApiInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Health check
#[openapi(skip)]
#[get("/ping")]
pub async fn ping() -> Status {
    Status::Ok
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use agora_models::v0::ApiInfo;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn reports_version() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let info = response.into_json::<ApiInfo>().await.expect("`ApiInfo`");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }
}
