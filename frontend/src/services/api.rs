use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::api::{
    failure_message, user_events_path, ApiError, LoginRequest, LoginResponse, LOGIN_PATH,
};
use shared::models::Event;

/// Client for the FamCal REST API.
///
/// The base URL is injected at construction and the client is handed to
/// pages through a `ContextProvider`, so no call site depends on a
/// module-level endpoint constant.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = Request::post(&self.url(LOGIN_PATH))
            .json(&body)
            .map_err(|e| ApiError::new(format!("Failed to serialize request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {:?}", e)))?;

        decode(response).await
    }

    pub async fn user_events(&self, user_id: &str) -> Result<Vec<Event>, ApiError> {
        let response = Request::get(&self.url(&user_events_path(user_id)))
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {:?}", e)))?;

        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Shared response contract for every endpoint: a 2xx body decodes into the
/// endpoint's typed response; anything else collapses into an [`ApiError`]
/// carrying the server's `message` field or the fixed fallback text.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::new(failure_message(&body)));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::new(format!("Failed to parse response: {:?}", e)))
}
