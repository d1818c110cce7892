#[tokio::main]
async fn main() -> anyhow::Result<()> {
    animdna_server::start().await
}
