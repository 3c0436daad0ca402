use crate::{
    client::{
        model::error::ProviderError,
        provider::access_control::{AccessControlProvider, CanFuture},
    },
    model::access::{CanRequest, CanResponse},
};

use super::helper::{parse_response, post, send_request, serialize_json};

/// Ask a backend endpoint whether an action is allowed
pub async fn check_access(url: &str, request: &CanRequest) -> Result<CanResponse, ProviderError> {
    let body = serialize_json(request)?;

    let response = send_request(post(url).body(body)).await?;
    parse_response(response).await
}

/// Access control backed by an HTTP endpoint that accepts a JSON
/// [`CanRequest`] and answers with a JSON [`CanResponse`].
#[derive(Clone, Debug)]
pub struct HttpAccessControl {
    url: String,
}

impl HttpAccessControl {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl AccessControlProvider for HttpAccessControl {
    fn can(&self, request: CanRequest) -> CanFuture {
        let url = self.url.clone();
        Box::pin(async move { check_access(&url, &request).await })
    }
}
