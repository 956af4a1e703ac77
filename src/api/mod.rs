//! HTTP API
//!
//! Routes:
//! - `GET /` health
//! - `/api/flights/*`, `/api/hotels/*`: provider searches, returning
//!   [`SearchResult`](crate::amadeus::SearchResult) with HTTP 200 even when
//!   the provider failed
//! - `POST /api/agent/hotels`, `POST /api/openai/chat`: LLM-backed, 503
//!   without an API key

mod agent;
mod error;
mod flights;
mod hotels;
mod openai;
mod state;

pub use error::AppError;
pub use state::AppState;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::Result;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .merge(flights::routes())
        .merge(hotels::routes())
        .merge(agent::routes())
        .merge(openai::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "message": "Service is running normally"}))
}

/// Bind `0.0.0.0:port` and serve until the process stops.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use tower::ServiceExt;

    use crate::agent::llm::FakeLlmClient;
    use crate::agent::LlmClient;
    use crate::amadeus::AmadeusClient;
    use crate::config::AmadeusConfig;

    fn state_for(server: &MockServer, llm: Option<Arc<dyn LlmClient>>) -> AppState {
        let config = AmadeusConfig {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            base_url: Some(server.base_url()),
            ..AmadeusConfig::default()
        };
        AppState {
            amadeus: Arc::new(AmadeusClient::new(&config).unwrap()),
            llm,
            max_iterations: 5,
        }
    }

    async fn mock_token(server: &MockServer) {
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/security/oauth2/token");
                then.status(200).body(r#"{"access_token": "tok", "expires_in": 1799}"#);
            })
            .await;
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start_async().await;
        let (status, body) = send(app(state_for(&server, None)), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "message": "Service is running normally"}));
    }

    #[tokio::test]
    async fn test_provider_error_is_200_with_error() {
        let server = MockServer::start_async().await;
        mock_token(&server).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v2/shopping/flight-offers");
                then.status(400).body("bad request from provider");
            })
            .await;

        let (status, body) = send(
            app(state_for(&server, None)),
            get_req("/api/flights/search?origin=MAD&destination=BCN&departure_date=2025-07-01"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"data": [], "error": "bad request from provider"}));
    }

    #[tokio::test]
    async fn test_auth_failure_is_200_with_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/security/oauth2/token");
                then.status(401).body("invalid_client");
            })
            .await;

        let (status, body) =
            send(app(state_for(&server, None)), get_req("/api/flights/airports?keyword=LON")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "Unable to get access token");
    }

    #[tokio::test]
    async fn test_hotel_offers_route() {
        let server = MockServer::start_async().await;
        mock_token(&server).await;
        let offers = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v3/shopping/hotel-offers")
                    .query_param("hotelIds", "MCLONGHM,HSLONROT")
                    .query_param("checkOutDate", "2025-07-02")
                    .query_param("boardType", "ALL_INCLUSIVE");
                then.status(200).body(r#"{"data": [{"hotel": {"name": "A"}}]}"#);
            })
            .await;

        let (status, body) = send(
            app(state_for(&server, None)),
            get_req("/api/hotels/offers?hotel_ids=MCLONGHM,HSLONROT&check_in_date=2025-07-01&board_type=all%20inclusive"),
        )
        .await;

        offers.assert_async().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["hotel"]["name"], "A");
    }

    #[tokio::test]
    async fn test_missing_query_param_is_400() {
        let server = MockServer::start_async().await;
        let response = app(state_for(&server, None))
            .oneshot(get_req("/api/hotels/by-city?radius=5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cities_route() {
        let server = MockServer::start_async().await;
        let (status, body) =
            send(app(state_for(&server, None)), get_req("/api/hotels/cities")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cities"][0], json!({"name": "london", "code": "LON", "has_hotels": true}));
        assert_eq!(body["board_types"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_llm_routes_without_key_are_503() {
        let server = MockServer::start_async().await;
        let (status, body) = send(
            app(state_for(&server, None)),
            post_json("/api/agent/hotels", json!({"query": "hotel in Paris"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["error"].as_str().unwrap().contains("not configured"));

        let (status, _) = send(
            app(state_for(&server, None)),
            post_json("/api/openai/chat", json!({"message": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_agent_route() {
        let server = MockServer::start_async().await;
        let llm: Arc<dyn LlmClient> = Arc::new(FakeLlmClient::with_tool_call(
            "search_hotels",
            json!({"city": "Berlin", "check_in_date": "2025-07-01"}),
            "No hotels known in Berlin",
        ));

        let (status, body) = send(
            app(state_for(&server, Some(llm))),
            post_json("/api/agent/hotels", json!({"query": "hotel in Berlin"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["query"], "hotel in Berlin");
        assert_eq!(body["response"], "No hotels known in Berlin");
    }

    #[tokio::test]
    async fn test_openai_chat_route() {
        let server = MockServer::start_async().await;
        let llm: Arc<dyn LlmClient> = Arc::new(FakeLlmClient::new(vec!["Bonjour"]));

        let (status, body) = send(
            app(state_for(&server, Some(llm))),
            post_json("/api/openai/chat", json!({"message": "hello"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "Bonjour"}));
    }

    #[tokio::test]
    async fn test_openai_chat_llm_failure_is_502() {
        let server = MockServer::start_async().await;
        let llm: Arc<dyn LlmClient> = Arc::new(FakeLlmClient::new(vec![]));

        let (status, body) = send(
            app(state_for(&server, Some(llm))),
            post_json("/api/openai/chat", json!({"message": "hello"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body["error"].as_str().unwrap().contains("No more fake responses"));
    }
}
