#[tokio::main]
async fn main() {
    household_scheduler::run().await;
}
