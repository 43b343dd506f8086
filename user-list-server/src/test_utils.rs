use crate::config::Settings;
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tower::ServiceExt;
use user_list::{InMemoryPageSource, Item};

/// Test fixture wrapping the full application router over a seeded user list.
///
/// The fixture serves seven users, `user1` to `user7`, with ids 1 to 7.
///
/// # Examples
///
/// ```rust
/// use user_list::Page;
///
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///
///     let page = fixture
///         .get("/api/1.0/users?page=1&size=3")
///         .await
///         .assert_ok()
///         .json_as::<Page>();
///     assert_eq!(page.content[0].username, "user4");
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration settings
    pub settings: Settings,
}

impl TestFixture {
    /// Creates a new fixture with default settings and the seeded users.
    pub async fn new() -> Self {
        Self::with_users(Self::seed_users()).await
    }

    /// Creates a new fixture serving `users`.
    pub async fn with_users(users: Vec<Item>) -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let settings = Settings {
            port: 0, // Let the OS choose a port
            ..Settings::default()
        };
        let users = InMemoryPageSource::new(users).expect("Seed users must have unique ids");
        let state = AppState::with_users(settings.clone(), users);
        let app = create_app(state);

        Self { app, settings }
    }

    /// The users every default fixture serves
    pub fn seed_users() -> Vec<Item> {
        (1..=7)
            .map(|id| Item::new(id, format!("user{id}"), format!("user{id}@mail.com")))
            .collect()
    }

    /// Sends a GET request to the specified URI.
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri.as_ref())
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a request and returns a TestResponse.
    ///
    /// This is a lower-level method used by `get()`. Use it when you need more
    /// control over the request details.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Try to parse as JSON, defaulting to empty object if parsing fails or empty body
        let json = if !body.is_empty() {
            serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({}))
        } else {
            serde_json::json!({})
        };

        TestResponse { status, json }
    }
}

/// Response from a test request that provides convenient access to status and JSON body.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON (if present and valid JSON)
    pub json: Value,
}

impl TestResponse {
    /// Asserts that the response has the expected status code.
    ///
    /// # Panics
    ///
    /// Panics if the status code doesn't match the expected value.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {} with body: {}",
            expected,
            self.status,
            serde_json::to_string_pretty(&self.json).unwrap_or_default()
        );
        self
    }

    /// Asserts that the response status is OK (200).
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }

    /// Converts the response body to the specified type.
    ///
    /// # Panics
    ///
    /// Panics if deserialization fails.
    pub fn json_as<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.json.clone()).expect("Failed to deserialize response JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_list::Page;

    #[tokio::test]
    async fn test_fixture_with_custom_users() {
        let fixture = TestFixture::with_users(vec![Item::new(42, "solo", "solo@mail.com")]).await;
        let page = fixture
            .get("/api/1.0/users")
            .await
            .assert_ok()
            .json_as::<Page>();
        assert_eq!(page.content, [Item::new(42, "solo", "solo@mail.com")]);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let fixture = TestFixture::new().await;
        let response = fixture.get("/api/1.0/unknown").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}
