use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    response::Html,
    routing::{get, post, put},
    Json, Router,
};
use futures::Stream;
use serde_json::json;

use crate::controllers::intake_controller::IntakeController;
use crate::controllers::status_controller::StatusController;
use crate::dto::vehicle_dto::{
    ApiResponse, CreatedVehicleResponse, IntakeRequest, StatusUpdateRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::views;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(render_dashboard_page))
        .route("/events", get(board_events))
        .route("/health", get(health))
        .route("/api/vehicles", post(create_vehicle))
        .route("/api/vehicles/:id/status", put(update_vehicle_status))
}

/// Router for the terminal `Unconfigured` state: every path renders the
/// fixed configuration-error page. No subscription, no write endpoints.
pub fn create_unconfigured_router() -> Router {
    Router::new().fallback(get(unconfigured_page))
}

async fn render_dashboard_page(State(state): State<AppState>) -> Html<String> {
    Html(views::dashboard::render_dashboard(&state.current_board()))
}

async fn unconfigured_page() -> Html<String> {
    Html(views::dashboard::render_unconfigured())
}

/// Relay every board snapshot to the page as a rendered grid fragment.
/// The current state is sent immediately, then one event per change.
async fn board_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream = futures::stream::unfold((state.board.clone(), true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let board = rx.borrow_and_update().clone();
        let fragment = views::cards::render_board(&board);
        Some((Event::default().json_data(fragment), (rx, false)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "workshop-board",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<IntakeRequest>,
) -> Result<Json<ApiResponse<CreatedVehicleResponse>>, AppError> {
    let controller = IntakeController::new(state.writer.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = StatusController::new(state.writer.clone());
    let response = controller.change_status(&id, request).await?;
    Ok(Json(response))
}
