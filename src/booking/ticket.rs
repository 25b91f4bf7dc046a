use crate::api::{ApiError, Booking, Id};

/// What the confirmation screen shows, taken from the booking as the server
/// recorded it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub booking_id: Id,
    pub seat_count: usize,
    pub status: String,
}

impl Ticket {
    /// `expected` is the id returned when the booking was created. A fetched
    /// booking carrying any other id is rejected.
    pub fn from_booking(expected: Id, booking: Booking) -> Result<Self, ApiError> {
        if booking.id != expected {
            return Err(ApiError::Validation(format!(
                "Booking {} was requested but the server returned booking {}",
                expected, booking.id
            )));
        }
        Ok(Self {
            booking_id: booking.id,
            seat_count: booking.seats.len(),
            status: booking.status.unwrap_or_else(|| "confirmed".to_string()),
        })
    }

    /// Text encoded in the ticket's QR code.
    pub fn qr_payload(&self) -> String {
        self.booking_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{BookingReceipt, Seat, Session};
    use crate::booking::{BookingPhase, BookingWorkflow};

    fn session() -> Session {
        Session {
            id: 42,
            film_id: Some(3),
            start_time: "2026-10-19 20:30:00".to_string(),
            kind: "standard".to_string(),
            language: "VO".to_string(),
            price: 9.5,
            seats: vec![
                Seat { id: 11, number: 4, is_available: true, price: 9.5, is_couple: false },
                Seat { id: 12, number: 5, is_available: true, price: 9.5, is_couple: false },
            ],
            available_seats: 2,
        }
    }

    #[test]
    fn test_created_id_is_echoed_on_the_ticket() {
        let receipt: BookingReceipt = serde_json::from_str(r#"{"id":1234}"#).unwrap();
        let booking: Booking = serde_json::from_str(
            r#"{"id":1234,"session_id":42,"seats":[11,12],"user_id":5,"status":"paid"}"#,
        )
        .unwrap();

        let mut wf = BookingWorkflow::new(900);
        wf.session_loaded(Ok(session()));
        wf.select_seat(&session().seats[0]);
        wf.proceed_to_payment().unwrap();
        wf.confirm(receipt).unwrap();

        let BookingPhase::Confirmed(confirmed_id) = wf.phase() else {
            panic!("booking not confirmed");
        };
        let ticket = Ticket::from_booking(confirmed_id, booking).unwrap();
        assert_eq!(confirmed_id, 1234);
        assert_eq!(ticket.booking_id, 1234);
        assert_eq!(ticket.qr_payload(), "1234");
        assert_eq!(ticket.seat_count, 2);
        assert_eq!(ticket.status, "paid");
    }

    #[test]
    fn test_mismatched_booking_is_rejected() {
        let booking: Booking = serde_json::from_str(r#"{"id":77,"seats":[]}"#).unwrap();
        assert!(matches!(
            Ticket::from_booking(1234, booking),
            Err(ApiError::Validation(m)) if m.contains("1234") && m.contains("77")
        ));
    }

    #[test]
    fn test_missing_status_reads_confirmed() {
        let booking: Booking = serde_json::from_str(r#"{"id":9}"#).unwrap();
        let ticket = Ticket::from_booking(9, booking).unwrap();
        assert_eq!(ticket.status, "confirmed");
        assert_eq!(ticket.seat_count, 0);
    }
}
