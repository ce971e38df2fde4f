#![allow(dead_code)]

use std::{env, net::SocketAddr, sync::Arc};

use axum::{
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{
    app::env::Envy,
    diagnostics::sink::{DiagnosticSink, TracingSink},
};

mod app;
mod diagnostics;
mod payments;

#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn DiagnosticSink>,
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    let state = Arc::new(AppState {
        sink: Arc::new(TracingSink),
        envy: Arc::new(envy),
    });

    // app
    let app = Router::new()
        .route("/", get(app::controller::get_root))
        // diagnostics
        .route("/log-error", post(diagnostics::controller::log_error))
        // layers
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
