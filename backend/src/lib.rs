pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod routes;
pub mod state;
