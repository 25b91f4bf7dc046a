use reqwest::Method;
use tracing::info;

use super::{ApiClient, ApiError, Booking, BookingReceipt, Id, NewBooking};

impl ApiClient {
    /// Any rejection comes back as [`ApiError::Booking`].
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<BookingReceipt, ApiError> {
        let req = self.request(Method::POST, "/bookings").json(booking);
        let receipt: BookingReceipt = self.fetch(req).await.map_err(ApiError::into_booking)?;
        info!(
            "Booking {} created for session {} ({} seats)",
            receipt.id,
            booking.session_id,
            booking.seats.len()
        );
        Ok(receipt)
    }

    pub async fn get_booking(&self, id: Id) -> Result<Booking, ApiError> {
        self.fetch(self.request(Method::GET, &format!("/bookings/{}", id)))
            .await
    }

    pub async fn user_bookings(&self, user_id: Id) -> Result<Vec<Booking>, ApiError> {
        let req = self.request(Method::GET, &format!("/users/{}/bookings", user_id));
        self.fetch(req).await
    }
}
