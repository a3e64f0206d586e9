use hotel_booking::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    hotel_booking::run().await
}
