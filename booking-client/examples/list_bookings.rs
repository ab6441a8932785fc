//! Fetch the admin booking list and print a short summary.
//!
//! ```bash
//! BOOKING_API_URL=http://localhost:8889 BOOKING_API_TOKEN=... \
//!     cargo run --example list_bookings
//! ```

use anyhow::Result;
use booking_client::ClientConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base_url =
        std::env::var("BOOKING_API_URL").unwrap_or_else(|_| "http://localhost:8889".to_string());

    let mut config = ClientConfig::new(base_url);
    if let Ok(token) = std::env::var("BOOKING_API_TOKEN") {
        config = config.with_token(token);
    }

    let client = config.build_client();
    let bookings = client.bookings().await?;

    println!("fetched {} bookings", bookings.len());
    for booking in &bookings {
        println!(
            "#{} {} table={} customer={} status={}",
            booking.booking_id,
            booking.booking_datatime,
            booking.table.table_name,
            booking.user.firstname,
            booking.status_booking,
        );
    }

    Ok(())
}
