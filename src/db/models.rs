use serde_json::{Map, Value};

/// Table read by `GET /api/transactions`.
pub const TRANSACTIONS_TABLE: &str = "transactions";

/// One row as returned by Supabase. Column order is preserved.
pub type Row = Map<String, Value>;
