//! Handler functions for forwarded requests.

use axum::{
    extract::{Request, State},
    response::Response,
};

use crate::{errors::AppError, state::AppState};

pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, AppError> {
    state.upstream.forward(request).await
}
