#[tokio::main]
async fn main() -> anyhow::Result<()> {
    docqa_server::start().await
}
