//! Handler for the service root.

use axum::Json;

use crate::api::dto::message::MessageResponse;

/// `GET /`
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "hello world",
    })
}
