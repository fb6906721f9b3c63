//! # Banter HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Axum server around a shared `Engine`:
//! - JSON chat endpoint and health probe
//! - Port availability checking with automatic fallback
//! - CORS configuration
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! 1. Find an available port if the requested one is in use
//! 2. Build the router with the engine as shared state, plus trace/CORS layers
//! 3. Serve until Ctrl+C or SIGTERM
//!
use super::ServerConfig;
use crate::core::error::{BanterError, Result};
use crate::engine::{Engine, Intent};
use anyhow::{anyhow, Context};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, info, warn, Level};

/// Body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply to `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub intent: Intent,
}

/// # Run HTTP Server (`run_server`)
///
/// ## Errors
///
/// Fails if no port is free within the fallback range, if binding fails, or
/// if the server loop itself errors.
pub async fn run_server(engine: Arc<Engine>, config: ServerConfig) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let corpus_size = engine.corpus().len();
    let app = create_app(engine, config.enable_cors);

    println!("\n=================================================================");
    println!("💬 Banter listening on: http://{}", addr);
    println!("📮 Chat endpoint:       POST http://{}/chat", addr);
    println!("📚 Corpus sentences:    {}", corpus_size);
    println!("🔒 CORS enabled:        {}", config.enable_cors);
    println!("=================================================================\n");
    println!("Server starting! Press Ctrl+C to stop.");
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port`, then each following port, up to `max_attempts` ports.
async fn find_available_port(
    req_host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable ({}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(port) => port,
                    None => break,
                };
            }
        }
    }

    Err(anyhow!(BanterError::Server(format!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host, start_port, max_attempts
    ))))
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router with the engine as shared state.
fn create_app(engine: Arc<Engine>, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .with_state(engine)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

async fn chat(
    State(engine): State<Arc<Engine>>,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            warn!("Rejected chat request body: {}", rejection.body_text());
            return bad_request(rejection.body_text());
        }
    };
    let message = request.message.trim();
    if message.is_empty() {
        return bad_request(BanterError::EmptyUtterance.to_string());
    }

    let reply = engine.respond(message);
    debug!("Answered HTTP chat via {} branch", reply.intent);
    Json(ChatResponse {
        reply: reply.text,
        intent: reply.intent,
    })
    .into_response()
}

async fn health(State(engine): State<Arc<Engine>>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "corpus_size": engine.corpus().len() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::engine::ResponseSelector;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use std::net::Ipv4Addr;
    use tower::ServiceExt;

    fn app() -> Router {
        let engine = ResponseSelector::seeded(&Config::default(), 7);
        create_app(Arc::new(engine), true)
    }

    async fn post_chat(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_chat_math() {
        let (status, body) = post_chat(app(), r#"{"message": "what is 2+2"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"], "The result is: 4");
        assert_eq!(body["intent"], "math");
    }

    #[tokio::test]
    async fn test_chat_plain_match() {
        let (status, body) = post_chat(app(), r#"{"message": "basic programming"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["reply"],
            "I can help with basic programming, general queries, and more."
        );
        assert_eq!(body["intent"], "plain");
    }

    #[tokio::test]
    async fn test_chat_blank_message_rejected() {
        let (status, body) = post_chat(app(), r#"{"message": "   "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_chat_malformed_body_gets_json_error() {
        let (status, body) = post_chat(app(), r#"{"message": "#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = post_chat(app(), r#"{"text": "hello"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("message"));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["corpus_size"], 8);
    }

    #[tokio::test]
    async fn test_find_available_port_start_is_free() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 50100;
        let addr = find_available_port(host, start_port, 5).await?;
        assert_eq!(addr.port(), start_port);
        assert_eq!(addr.ip(), host);
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_start_occupied() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let start_port = 51100;
        let _listener = TcpListener::bind(SocketAddr::new(host, start_port)).await?;

        let addr = find_available_port(host, start_port, 5).await?;
        assert!(addr.port() > start_port);
        assert!(addr.port() < start_port + 5);
        Ok(())
    }
}
