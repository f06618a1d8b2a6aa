use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::{CreateAccountRequest, CreateEmailSessionRequest, RemoteErrorBody};
use shared::config::Conf;
use shared::error::AuthError;
use shared::gateway::AuthBackend;
use shared::models::{Account, Session, User};
use web_sys::RequestCredentials;

/// REST client for the backend's account API.
///
/// Sessions live in cookies set by the backend, so every request is sent
/// with credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct AppwriteClient {
    endpoint: String,
    project_id: String,
}

impl AppwriteClient {
    pub fn new(conf: &Conf) -> Self {
        Self {
            endpoint: conf.appwrite_url.trim_end_matches('/').to_string(),
            project_id: conf.appwrite_project_id.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-Appwrite-Project", &self.project_id)
            .credentials(RequestCredentials::Include)
    }

    async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, AuthError> {
        request
            .map_err(|e| AuthError::Transport(format!("Failed to serialize request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Transport(format!("{:?}", e)))
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
        if !response.ok() {
            return Err(Self::remote_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AuthError::Decode(format!("{:?}", e)))
    }

    async fn remote_error(response: Response) -> AuthError {
        let status = response.status();
        match response.json::<RemoteErrorBody>().await {
            Ok(body) => body.into(),
            Err(_) => AuthError::Remote {
                code: status,
                kind: String::new(),
                message: format!("HTTP error: {}", status),
            },
        }
    }
}

impl AuthBackend for AppwriteClient {
    async fn account_create(&self, request: &CreateAccountRequest) -> Result<Account, AuthError> {
        let builder = self.prepare(Request::post(&self.url("/account")));
        let response = Self::send(builder.json(request)).await?;
        Self::parse(response).await
    }

    async fn session_create(
        &self,
        request: &CreateEmailSessionRequest,
    ) -> Result<Session, AuthError> {
        let builder = self.prepare(Request::post(&self.url("/account/sessions/email")));
        let response = Self::send(builder.json(request)).await?;
        Self::parse(response).await
    }

    async fn account_get(&self) -> Result<User, AuthError> {
        let builder = self.prepare(Request::get(&self.url("/account")));
        let response = Self::send(builder.build()).await?;
        Self::parse(response).await
    }

    async fn sessions_delete_all(&self) -> Result<(), AuthError> {
        let builder = self.prepare(Request::delete(&self.url("/account/sessions")));
        let response = Self::send(builder.build()).await?;

        if !response.ok() {
            return Err(Self::remote_error(response).await);
        }
        Ok(())
    }
}
