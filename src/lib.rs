pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod storage;
pub mod store;
pub mod ui;
