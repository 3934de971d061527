// File: services/keurplan_backend/src/main.rs
use axum::{routing::get, Router};
use keurplan_config::load_config;
use keurplan_gcal::handlers::CalendarApiState;
use keurplan_gcal::routes as gcal_routes;
use keurplan_mailer::handlers::MailerApiState;
use keurplan_mailer::routes as mailer_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

mod app_state;
mod service_factory;

use app_state::AppState;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    keurplan_common::logging::init();

    let state = AppState::new(config.clone()).await;

    let mut app = Router::new().route("/", get(|| async { "Welcome to the Keurplan API!" }));

    // The calendar routes need both the directory (username -> calendar id)
    // and the calendar client itself.
    match (
        state.service_factory.directory_service(),
        state.service_factory.calendar_service(),
    ) {
        (Some(directory), Some(calendar)) => {
            let calendar_state = Arc::new(CalendarApiState { directory, calendar });
            app = app.merge(gcal_routes::routes(calendar_state));
        }
        _ => warn!("Calendar routes disabled: directory or calendar service not configured"),
    }

    match state.service_factory.mailer_service() {
        Some(mailer) => {
            let mailer_state = Arc::new(MailerApiState { mailer });
            app = app.merge(mailer_routes::routes(mailer_state));
        }
        None => warn!("Mail routes disabled: mail service not configured"),
    }

    // CORS is open to all origins for every route
    let app = app.layer(CorsLayer::permissive());

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
