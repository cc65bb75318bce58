use axum::{Json, extract::State};
use tracing::info;

use crate::db::{Row, TRANSACTIONS_TABLE};
use crate::{BackendError, router::AppState};

/// GET /api/transactions -> every row of the `transactions` table, unfiltered.
pub async fn list_transactions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Row>>, BackendError> {
    let client = state.database.client()?;
    let rows = client.select_all(TRANSACTIONS_TABLE).await?;
    info!(count = rows.len(), "fetched transactions");
    Ok(Json(rows))
}
