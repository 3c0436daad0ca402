use crate::{client::model::error::ProviderError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parse a JSON response, turning non-2xx statuses into [`ProviderError::Api`]
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ProviderError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    } else {
        let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
            error_dto.error
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        Err(ProviderError::Api { status, message })
    }
}

/// Create a POST request with credentials and JSON content type
pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub async fn send_request(request: Request) -> Result<Response, ProviderError> {
    request
        .send()
        .await
        .map_err(|e| ProviderError::Request(e.to_string()))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ProviderError> {
    serde_json::to_string(payload).map_err(|e| ProviderError::Request(e.to_string()))
}
