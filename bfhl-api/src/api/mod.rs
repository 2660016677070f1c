//! HTTP API handlers for bfhl-api

pub mod bfhl;
pub mod buildinfo;
pub mod health;
pub mod ui;

pub use bfhl::process_bfhl;
pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use ui::{not_found, serve_index};
