pub mod config;
pub mod error;
pub mod intake;
pub mod redirects;
pub mod telemetry;
