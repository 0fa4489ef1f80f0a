//! Backend HTTP client.

use std::sync::Arc;

use cbol_core::route::{Navigator, Route};
use cbol_core::session::Session;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::models::{
    ChangePasswordRequest, LoginRequest, ModifyUserRequest, RegisterRequest, TokenResponse,
    UpdateProfileRequest, User, VerifyPasswordRequest,
};
use crate::routes;

/// Gateway for every backend call.
///
/// Cheap to clone; clones share the connection pool, the session and the
/// navigator.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: Arc<Session>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        Ok(Self {
            http,
            base_url,
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// `POST /auth/login`.
    pub async fn login(&self, body: &LoginRequest) -> ApiResult<TokenResponse> {
        let req = self.request(Method::POST, routes::POST_AUTH_LOGIN)?.json(body);
        self.fetch(req).await
    }

    /// `GET /auth/me`.
    pub async fn me(&self) -> ApiResult<User> {
        let req = self.request(Method::GET, routes::GET_AUTH_ME)?;
        self.fetch(req).await
    }

    /// `PUT /auth/me`.
    pub async fn update_me(&self, body: &UpdateProfileRequest) -> ApiResult<()> {
        self.send_json(Method::PUT, routes::PUT_AUTH_ME, body).await
    }

    /// `DELETE /auth/me`.
    pub async fn delete_me(&self) -> ApiResult<()> {
        let req = self.request(Method::DELETE, routes::DELETE_AUTH_ME)?;
        self.execute(req).await.map(drop)
    }

    /// `POST /auth/me/verify`. `Ok` means the password matched.
    pub async fn verify_password(&self, password: &str) -> ApiResult<()> {
        let body = VerifyPasswordRequest {
            password: password.to_string(),
        };
        self.send_json(Method::POST, routes::POST_AUTH_ME_VERIFY, &body)
            .await
    }

    /// `PUT /auth/me/password`.
    pub async fn change_password(&self, body: &ChangePasswordRequest) -> ApiResult<()> {
        self.send_json(Method::PUT, routes::PUT_AUTH_ME_PASSWORD, body)
            .await
    }

    /// `GET /auth/users`.
    pub async fn users(&self) -> ApiResult<Vec<User>> {
        let req = self.request(Method::GET, routes::GET_AUTH_USERS)?;
        self.fetch(req).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, body: &RegisterRequest) -> ApiResult<()> {
        self.send_json(Method::POST, routes::POST_AUTH_REGISTER, body)
            .await
    }

    /// `PUT /auth/modify/{username}`.
    pub async fn modify_user(&self, username: &str, body: &ModifyUserRequest) -> ApiResult<()> {
        let mut url = self.endpoint(routes::PUT_AUTH_MODIFY)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(username);
        let req = self.http.request(Method::PUT, url).json(body);
        self.execute(req).await.map(drop)
    }

    /// `PUT /auth/resign` with the usernames to deactivate.
    pub async fn resign(&self, usernames: &[String]) -> ApiResult<()> {
        self.send_json(Method::PUT, routes::PUT_AUTH_RESIGN, usernames)
            .await
    }

    // -----------------------------------------------------------------------
    // Plumbing
    // -----------------------------------------------------------------------

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        Ok(Url::parse(&format!("{}{path}", self.base_url.as_str().trim_end_matches('/')))?)
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        Ok(self.http.request(method, self.endpoint(path)?))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let req = self.request(method, path)?.json(body);
        self.execute(req).await.map(drop)
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> ApiResult<T> {
        let resp = self.execute(req).await?;
        Ok(resp.json::<T>().await?)
    }

    /// Attach the bearer token when one exists.
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send, then map the status: 2xx passes through, 401 ends the session,
    /// everything else becomes [`ApiError::Backend`].
    async fn execute(&self, req: RequestBuilder) -> ApiResult<Response> {
        let resp = self.authorize(req).send().await?;
        let status = resp.status();
        debug!(%status, url = %resp.url(), "backend response");

        if status.is_success() {
            return Ok(resp);
        }

        let raw = match resp.bytes().await {
            Ok(raw) => raw,
            Err(e) => {
                debug!(%status, error = %e, "failed to read error body");
                Default::default()
            }
        };
        let body = ErrorBody::parse(&raw);
        if status == StatusCode::UNAUTHORIZED {
            self.on_unauthorized();
            return Err(ApiError::Unauthorized(body));
        }
        Err(ApiError::Backend {
            status: status.as_u16(),
            body,
        })
    }

    /// Drop the session and force the login view. Safe to run repeatedly.
    fn on_unauthorized(&self) {
        warn!("backend rejected the session token, logging out");
        if let Err(e) = self.session.clear_token() {
            warn!(error = %e, "failed to clear persisted session token");
        }
        self.navigator.navigate(Route::Login);
    }
}
