#[tokio::main]
async fn main() -> eyre::Result<()> {
    vote_gateway::gateway::run().await
}
