mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use ayurveda_shop::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
