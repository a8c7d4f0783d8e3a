mod cli;
mod commands;
mod infra;
mod routes;
mod server;

pub use infra::AppState;
pub use routes::build_router;

use lead_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
