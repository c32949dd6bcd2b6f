mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use ecoscan::error::AppError;

pub use routes::with_service_routes;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
