// Request layer: one fetch, fail on non-2xx, decode JSON

use crate::errors::ApiError;
use reqwest::multipart::{Form, Part};
use wellbeing_core::{FileUpload, Method, RequestBody, RequestOptions};

/// Thin wrapper around `reqwest::Client`
///
/// No retries, no timeout and no cancellation: each call performs exactly
/// one round trip and resolves once.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured reqwest client (e.g. without proxy in tests)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Perform a request and decode the JSON response
    ///
    /// # Arguments
    /// * `url` - Absolute or same-origin URL
    /// * `options` - Method, headers and body
    ///
    /// # Returns
    /// Parsed JSON value on a success status, `ApiError::Http` carrying the
    /// raw body text otherwise
    pub async fn request(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ApiError> {
        tracing::debug!(method = %options.method, url, "sending request");

        let mut builder = match options.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match options.body {
            RequestBody::None => builder,
            RequestBody::Json(payload) => {
                let bytes =
                    serde_json::to_vec(&payload).map_err(|e| ApiError::Encode(e.to_string()))?;
                builder.body(bytes)
            }
            RequestBody::Multipart {
                field,
                file,
                file_name,
            } => builder.multipart(single_file_form(field, file, file_name)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url, "request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Build a multipart form holding one file part
fn single_file_form(field: String, file: FileUpload, file_name: String) -> Result<Form, ApiError> {
    let mut part = Part::bytes(file.bytes).file_name(file_name);
    if let Some(mime_type) = file.mime_type.as_deref().filter(|m| !m.is_empty()) {
        part = part
            .mime_str(mime_type)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
    }
    Ok(Form::new().part(field, part))
}
