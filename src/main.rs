mod answer;
mod routes;
mod state;

use std::sync::Arc;

use answer::{AnswerClient, AnswerSource};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    // Non-fatal: the widget is still served, every ask just gets a 503.
    let answer: Option<Arc<dyn AnswerSource>> = match AnswerClient::from_env() {
        Ok(client) => {
            tracing::info!(url = client.service_url(), "answer relay initialized");
            Some(Arc::new(client) as Arc<dyn AnswerSource>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "answer relay not configured, asks will fail");
            None
        }
    };

    let state = state::AppState::new(answer);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "freshman-chat listening");
    axum::serve(listener, app).await.expect("server failed");
}
