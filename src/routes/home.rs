//! Greeting endpoint handler.

use axum::Json;
use serde::Serialize;

use crate::config::GREETING_MESSAGE;

/// Static greeting payload returned by the root route.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Root handler.
///
/// Returns the fixed greeting body. Takes no inputs and has no side effects;
/// repeated calls always produce the same response.
pub async fn index() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING_MESSAGE,
    })
}
