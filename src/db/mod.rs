//! Database module: the remote Supabase table store.
//!
//! Layout:
//! - `models.rs`: row type and table names
//! - `supabase.rs`: REST client and the configured/missing state wrapper

pub mod models;
pub mod supabase;

pub use models::{Row, TRANSACTIONS_TABLE};
pub use supabase::{DatabaseState, SupabaseClient};
