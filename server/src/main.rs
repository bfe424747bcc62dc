#[tokio::main]
async fn main() {
    sentiment::start_server().await;
}
