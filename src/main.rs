#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kleinanzeigen_scraper::run().await
}
