pub mod api;
pub mod backend;
pub mod config;
pub mod courier;
pub mod error;
pub mod models;
pub mod observability;
pub mod phone;
pub mod signing;
pub mod state;
