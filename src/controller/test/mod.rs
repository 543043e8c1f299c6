use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::state::AppState;


/// Builds an application state over a fresh in-memory database with the
/// inventory schema installed.
async fn test_state() -> AppState {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();

    AppState::new(test.db.unwrap())
}

/// Splits a handler response into its status code and decoded JSON body.
///
/// Bodiless responses (204, for instance) decode to `Value::Null`.
async fn response_parts(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
