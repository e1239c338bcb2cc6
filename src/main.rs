#[tokio::main]
async fn main() {
    class_booking_backend::run().await;
}
