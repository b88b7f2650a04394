//! The request pipeline for Ecomail API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Sends requests with the API key header attached
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response as returned by the transport
//! - [`ApiResult`]: The classified, decoded outcome of a call
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`classify`]: The pure status/content-type/format decision
//!
//! # Pipeline
//!
//! 1. Default query parameters are merged with call-site parameters (call-site wins)
//! 2. The URL is `{base_url}/{path}?{query}`
//! 3. The JSON body, if any, is encoded by [`encode_body`] before anything is sent;
//!    `NaN` and infinite floats are rejected
//! 4. `key` and `Content-Type: application/json` headers are attached
//! 5. The request is sent once; transport failures are returned as errors
//! 6. Non-2xx responses become [`ApiResult::Error`]
//! 7. 2xx bodies are decoded according to the [`ResponseFormat`](crate::ResponseFormat)

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod json_body;

pub use errors::{ErrorMessage, HttpError, InvalidHttpRequestError, RemoteError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    classify, decode_success, is_json_content_type, is_success, ApiResult, HttpResponse, Record,
    JSON_CONTENT_TYPE,
};
pub use json_body::encode_body;
