use storehub::server::{config::ServiceKind, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    startup::run(ServiceKind::Order).await
}
