//! HTTP gateway to the school REST API.
//!
//! The client holds no credential. Every authenticated call takes the
//! token as an argument and sends it as `Authorization: Token <token>` on
//! that request only.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use shared_types::{
    ApiConfig, AppError, AuthResponse, Collection, DashboardStats, Entity, Identity,
    LoginRequest, RegisterRequest,
};
use tracing::{debug, info, warn};

use crate::error_convert::{JsonErrorExt, ReqwestErrorExt};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
const PROFILE_FAILED: &str = "Could not load profile";
const LOGOUT_FAILED: &str = "Logout failed";
const DASHBOARD_FAILED: &str = "Could not load dashboard";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let builder = reqwest::Client::builder();
        // The browser owns request lifetimes on wasm; reqwest has no timeout there.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_secs));
        let http = builder.build().map_err(|e| e.into_app_error())?;

        info!(base_url = %config.base_url, "created API client");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            match HeaderValue::from_str(&format!("Token {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => {
                    warn!(error = %e, "token is not a valid header value, sending without it");
                }
            }
        }

        headers
    }

    /// Send a request and decode a JSON success body. Error bodies are
    /// turned into an [`AppError`] with `fallback` as the default message.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.into_app_error())?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "API request failed");
            return Err(AppError::from_response(status.as_u16(), &body, fallback));
        }

        serde_json::from_str(&body).map_err(|e| e.into_app_error())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        fallback: &str,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let request = self.http.get(&url).headers(Self::headers(Some(token)));
        self.send_json(request, fallback).await
    }

    /// `POST /auth/login/`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AppError> {
        let request = self
            .http
            .post(self.url("/auth/login/"))
            .headers(Self::headers(None))
            .json(credentials);
        self.send_json(request, LOGIN_FAILED).await
    }

    /// `POST /auth/register/`
    pub async fn register(&self, details: &RegisterRequest) -> Result<AuthResponse, AppError> {
        let request = self
            .http
            .post(self.url("/auth/register/"))
            .headers(Self::headers(None))
            .json(details);
        self.send_json(request, REGISTRATION_FAILED).await
    }

    /// `POST /auth/logout/`. The response body is ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        let response = self
            .http
            .post(self.url("/auth/logout/"))
            .headers(Self::headers(Some(token)))
            .send()
            .await
            .map_err(|e| e.into_app_error())?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_response(status.as_u16(), &body, LOGOUT_FAILED))
    }

    /// `GET /users/profile/`
    pub async fn profile(&self, token: &str) -> Result<Identity, AppError> {
        self.get("/users/profile/", token, PROFILE_FAILED).await
    }

    /// `GET /{entity}/`, accepting both the paginated envelope and a bare array.
    pub async fn collection<T: DeserializeOwned>(
        &self,
        entity: Entity,
        token: &str,
    ) -> Result<Vec<T>, AppError> {
        let fallback = format!("Could not load {}", entity.noun());
        let items: Collection<T> = self.get(entity.path(), token, &fallback).await?;
        Ok(items.into_vec())
    }

    /// `GET /dashboard/`
    pub async fn dashboard(&self, token: &str) -> Result<DashboardStats, AppError> {
        self.get("/dashboard/", token, DASHBOARD_FAILED).await
    }
}
