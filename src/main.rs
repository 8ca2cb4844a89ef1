#[tokio::main]
async fn main() -> anyhow::Result<()> {
    assistbot::run().await
}
