mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use estate_scope::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
