#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trackside::app::run().await
}
