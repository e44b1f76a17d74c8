#[tokio::main]
async fn main() {
    dashboard_client::run().await;
}
