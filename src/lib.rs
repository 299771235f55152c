pub mod app;
pub mod config;
pub mod domain;
pub mod signup;
pub mod store;
pub mod telemetry;
