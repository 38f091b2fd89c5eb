use logctl::error::ControlError;

#[tokio::main]
async fn main() -> Result<(), ControlError> {
    logctl::app::run().await
}
