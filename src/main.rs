use shiftbook::commands::Cli;
use shiftbook::libs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    Cli::menu().await
}
