use async_trait::async_trait;
use gloo::net::http::Request;
use workout_planner::{ApiClient, ApiRequest, ApiResponse, ClientError, HttpTransport, Method};

/// API client for communicating with the planner server
pub type PlannerApi = ApiClient<GlooTransport>;

/// Sends requests with the browser's `fetch` through `gloo::net`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json");

        let response = match request.body {
            Some(body) => builder.body(body).map_err(network_error)?.send().await,
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        Ok(ApiResponse::new(status, body))
    }
}

fn network_error(err: gloo::net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}
