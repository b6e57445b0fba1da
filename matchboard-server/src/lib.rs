//! matchboard-server: HTTP leaderboard service backed by PostgreSQL
//!
//! Exposes the leaderboard page, player stat lookups, and match recording
//! over HTTP. Schema creation and roster seeding run once at startup,
//! before the listener binds.

pub mod config;
pub mod db;
pub mod http;

pub use config::resolve_database_url;
pub use db::{create_pool, migrations};
pub use http::{run_server, ServerConfig};
