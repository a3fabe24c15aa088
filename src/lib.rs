// src/lib.rs

pub mod answers;
pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod state;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export specific items for convenience if needed
pub use routes::create_router;
