use anyhow::Result;
use trivia_quiz::utils::logging;
use trivia_quiz::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(&config.log_filter);

    // 初始化并运行应用
    let stats = App::initialize(config).await?.run().await?;
    tracing::info!("{:?}", stats);

    Ok(())
}
