use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::Session;

/// Body shape shared by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub result: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not reach the server")]
    Network(#[source] reqwest::Error),
    #[error("server response could not be read")]
    MalformedResponse,
    #[error("not signed in")]
    Unauthenticated,
    #[error("not allowed")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("request rejected: {message}")]
    BadClientData { message: String },
    #[error("unexpected status code {0}")]
    UnexpectedStatusCode(StatusCode),
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub(crate) struct BaseClient {
    address: String,
    session: Session,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String, session: Session) -> Self {
        Self {
            address: address.trim_end_matches('/').to_string(),
            session,
            client: Client::new(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{method} {url}");
        let builder = self.client.request(method, url);

        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResponse<ApiEnvelope<T>> {
        let res = builder.send().await.map_err(ApiError::Network)?;
        handle_response(res).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<ApiEnvelope<T>> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<ApiEnvelope<T>> {
        self.send(self.request(Method::DELETE, path)).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: &S,
        path: &str,
    ) -> ApiResponse<ApiEnvelope<T>> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: &S,
        path: &str,
    ) -> ApiResponse<ApiEnvelope<T>> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }
}

async fn handle_response<T: DeserializeOwned>(res: Response) -> ApiResponse<ApiEnvelope<T>> {
    let status = res.status();
    let body = res.bytes().await.map_err(ApiError::Network)?;

    if !status.is_success() {
        return Err(error_for_status(status, &body));
    }

    parse_envelope(&body)
}

pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> ApiResponse<ApiEnvelope<T>> {
    serde_json::from_slice(body).map_err(|error| {
        log::warn!("Could not parse server response: {error}");
        ApiError::MalformedResponse
    })
}

pub(crate) fn error_for_status(status: StatusCode, body: &[u8]) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
        StatusCode::FORBIDDEN => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let message = serde_json::from_slice::<ErrorBody>(body)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.to_string());
            ApiError::BadClientData { message }
        }
        other => ApiError::UnexpectedStatusCode(other),
    }
}
