// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod query;
pub mod routes;
pub mod seed;
pub mod state;
pub mod stats;
pub mod store;

pub use routes::create_router;
