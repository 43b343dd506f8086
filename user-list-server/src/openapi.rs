use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const USERS_TAG: &str = "Users API";
pub(crate) const LOCALES_TAG: &str = "Locales API";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health_check,
        crate::api::health::ready_check,
        crate::api::users::list_users,
        crate::api::locales::list_locales,
        crate::api::locales::get_locale,
    ),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = USERS_TAG, description = "Paginated user directory"),
        (name = LOCALES_TAG, description = "Display labels per language"),
    ),
    info(
        title = "User List API",
        description = "Paginated user directory service",
        version = "1.0.0"
    )
)]
pub(crate) struct ApiDoc;

#[cfg(test)]
mod tests {
    use crate::test_utils::TestFixture;

    #[tokio::test]
    async fn test_openapi_document_lists_users_endpoint() {
        let fixture = TestFixture::new().await;
        let response = fixture.get("/openapi.json").await;
        response.assert_ok();
        assert!(response.json["paths"]["/api/1.0/users"]["get"].is_object());
        assert!(response.json["components"]["schemas"]["Page"].is_object());
    }
}
