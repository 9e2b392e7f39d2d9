use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Attaches credentials, executes the request and maps transport failures.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .headers(auth_headers())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(mocked) = mock_response(&request) {
            return mocked;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by API, returning to login");
            Self::clear_auth_session();
            Self::redirect_to_login_if_needed();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn clear_auth_session() {
        crate::state::auth::clear_stored_session();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn clear_auth_session() {}

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}
}

#[cfg(target_arch = "wasm32")]
use crate::utils::storage;

#[cfg(target_arch = "wasm32")]
fn auth_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(token) = storage::read_item(storage::ACCESS_TOKEN_KEY) {
        match format!("Bearer {}", token).parse() {
            Ok(value) => {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            Err(_) => log::warn!("ignoring malformed access token"),
        }
    }
    headers
}

#[cfg(not(target_arch = "wasm32"))]
fn auth_headers() -> HeaderMap {
    HeaderMap::new()
}

pub(crate) async fn map_error_response(response: Response) -> ApiError {
    let status = response.status();
    let payload = response.json::<ErrorPayload>().await.unwrap_or_default();
    ApiError::from_payload(status.as_u16(), payload)
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(map_error_response(response).await)
    }
}

pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    ApiClient::handle_unauthorized_status(status);
    if status.is_success() {
        Ok(())
    } else {
        Err(map_error_response(response).await)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::mock_response;
