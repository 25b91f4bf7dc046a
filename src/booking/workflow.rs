use tracing::info;

use super::countdown::Countdown;
use crate::api::{ApiError, BookingReceipt, Id, NewBooking, Seat, Session};

#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    /// Session detail not fetched yet.
    Loading,
    /// Session could not be loaded.
    Unavailable(ApiError),
    SelectingSeats {
        session: Session,
        selection: Vec<Seat>,
    },
    AwaitingPayment {
        session: Session,
        selection: Vec<Seat>,
        countdown: Countdown,
    },
    Confirmed {
        session: Session,
        selection: Vec<Seat>,
        booking_id: Id,
    },
}

/// Which screen of the workflow is showing, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPhase {
    Loading,
    Unavailable,
    SelectingSeats,
    AwaitingPayment,
    Confirmed(Id),
}

/// Seat selection → payment → confirmation for one screening.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWorkflow {
    state: BookingState,
    payment_window_secs: u32,
}

impl BookingWorkflow {
    pub fn new(payment_window_secs: u32) -> Self {
        Self {
            state: BookingState::Loading,
            payment_window_secs,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn phase(&self) -> BookingPhase {
        match &self.state {
            BookingState::Loading => BookingPhase::Loading,
            BookingState::Unavailable(_) => BookingPhase::Unavailable,
            BookingState::SelectingSeats { .. } => BookingPhase::SelectingSeats,
            BookingState::AwaitingPayment { .. } => BookingPhase::AwaitingPayment,
            BookingState::Confirmed { booking_id, .. } => BookingPhase::Confirmed(*booking_id),
        }
    }

    pub fn load_error(&self) -> Option<&ApiError> {
        match &self.state {
            BookingState::Unavailable(e) => Some(e),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            BookingState::SelectingSeats { session, .. }
            | BookingState::AwaitingPayment { session, .. }
            | BookingState::Confirmed { session, .. } => Some(session),
            BookingState::Loading | BookingState::Unavailable(_) => None,
        }
    }

    pub fn selection(&self) -> &[Seat] {
        match &self.state {
            BookingState::SelectingSeats { selection, .. }
            | BookingState::AwaitingPayment { selection, .. }
            | BookingState::Confirmed { selection, .. } => selection,
            BookingState::Loading | BookingState::Unavailable(_) => &[],
        }
    }

    pub fn countdown(&self) -> Option<Countdown> {
        match &self.state {
            BookingState::AwaitingPayment { countdown, .. } => Some(*countdown),
            _ => None,
        }
    }

    pub fn is_awaiting_payment(&self) -> bool {
        matches!(self.state, BookingState::AwaitingPayment { .. })
    }

    /// Sum of the selected seats' unit prices.
    pub fn total_price(&self) -> f64 {
        self.selection().iter().map(|s| s.price).sum()
    }

    /// Outcome of the entry fetch. Ignored once past `Loading`.
    pub fn session_loaded(&mut self, result: Result<Session, ApiError>) {
        if !matches!(self.state, BookingState::Loading) {
            return;
        }
        self.state = match result {
            Ok(session) => BookingState::SelectingSeats {
                session,
                selection: Vec::new(),
            },
            Err(e) => BookingState::Unavailable(e),
        };
    }

    /// Replace the selection with `seat`. A couple seat also brings along a
    /// synthesized partner numbered one higher; the partner is not looked up
    /// in the seat map. Unavailable seats, and a couple seat already at the
    /// highest number, leave the selection alone.
    pub fn select_seat(&mut self, seat: &Seat) -> bool {
        let BookingState::SelectingSeats { selection, .. } = &mut self.state else {
            return false;
        };
        if !seat.is_available {
            return false;
        }

        *selection = if seat.is_couple {
            let Some(number) = seat.number.checked_add(1) else {
                return false;
            };
            let partner = Seat {
                number,
                ..seat.clone()
            };
            vec![seat.clone(), partner]
        } else {
            vec![seat.clone()]
        };
        true
    }

    /// Start the payment window. Requires a selection.
    pub fn proceed_to_payment(&mut self) -> Result<(), ApiError> {
        match std::mem::replace(&mut self.state, BookingState::Loading) {
            BookingState::SelectingSeats { session, selection } if !selection.is_empty() => {
                info!(
                    "Holding {} seat(s) for session {}, {}s to pay",
                    selection.len(),
                    session.id,
                    self.payment_window_secs
                );
                self.state = BookingState::AwaitingPayment {
                    session,
                    selection,
                    countdown: Countdown::new(self.payment_window_secs),
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(ApiError::Validation("Select a seat first".to_string()))
            }
        }
    }

    /// Back to the seat map, keeping the current selection.
    pub fn change_seats(&mut self) -> bool {
        match std::mem::replace(&mut self.state, BookingState::Loading) {
            BookingState::AwaitingPayment {
                session, selection, ..
            } => {
                self.state = BookingState::SelectingSeats { session, selection };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// One second of the payment window. Reaching zero changes nothing else.
    pub fn tick(&mut self) {
        if let BookingState::AwaitingPayment { countdown, .. } = &mut self.state {
            countdown.tick();
        }
    }

    /// Payload for `POST /bookings`.
    pub fn booking_request(&self, user_id: Id) -> Result<NewBooking, ApiError> {
        match &self.state {
            BookingState::AwaitingPayment {
                session, selection, ..
            } => Ok(NewBooking {
                session_id: session.id,
                seats: selection.iter().map(|s| s.id).collect(),
                user_id,
            }),
            _ => Err(ApiError::Validation(
                "No booking is awaiting payment".to_string(),
            )),
        }
    }

    pub fn confirm(&mut self, receipt: BookingReceipt) -> Result<(), ApiError> {
        match std::mem::replace(&mut self.state, BookingState::Loading) {
            BookingState::AwaitingPayment {
                session, selection, ..
            } => {
                info!("Booking {} confirmed", receipt.id);
                self.state = BookingState::Confirmed {
                    session,
                    selection,
                    booking_id: receipt.id,
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(ApiError::Validation(
                    "No booking is awaiting payment".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(id: Id, number: u32, is_available: bool, is_couple: bool) -> Seat {
        Seat {
            id,
            number,
            is_available,
            price: if is_couple { 18.0 } else { 9.5 },
            is_couple,
        }
    }

    fn session() -> Session {
        Session {
            id: 42,
            film_id: Some(3),
            start_time: "2026-10-19 20:30:00".to_string(),
            kind: "standard".to_string(),
            language: "VO".to_string(),
            price: 9.5,
            seats: vec![
                seat(1, 1, true, false),
                seat(2, 2, false, false),
                seat(3, 7, true, true),
            ],
            available_seats: 2,
        }
    }

    fn selecting() -> BookingWorkflow {
        let mut wf = BookingWorkflow::new(900);
        wf.session_loaded(Ok(session()));
        wf
    }

    fn numbers(wf: &BookingWorkflow) -> Vec<u32> {
        wf.selection().iter().map(|s| s.number).collect()
    }

    #[test]
    fn test_starts_loading() {
        let wf = BookingWorkflow::new(900);
        assert_eq!(wf.state(), &BookingState::Loading);
        assert_eq!(wf.phase(), BookingPhase::Loading);
        assert!(wf.selection().is_empty());
    }

    #[test]
    fn test_missing_session_is_unavailable() {
        let mut wf = BookingWorkflow::new(900);
        wf.session_loaded(Err(ApiError::NotFound("Session not found".to_string())));
        assert!(matches!(wf.state(), BookingState::Unavailable(e) if e.is_not_found()));
    }

    #[test]
    fn test_single_seat_replaces_selection() {
        let mut wf = selecting();
        assert!(wf.select_seat(&seat(1, 1, true, false)));
        assert!(wf.select_seat(&seat(3, 7, true, true)));
        assert!(wf.select_seat(&seat(1, 1, true, false)));
        assert_eq!(numbers(&wf), vec![1]);
    }

    #[test]
    fn test_unavailable_seat_is_ignored() {
        let mut wf = selecting();
        wf.select_seat(&seat(1, 1, true, false));
        let before = wf.clone();

        assert!(!wf.select_seat(&seat(2, 2, false, false)));
        assert!(!wf.select_seat(&seat(9, 20, false, true)));
        assert_eq!(wf, before);
    }

    #[test]
    fn test_couple_seat_selects_pair() {
        let mut wf = selecting();
        assert!(wf.select_seat(&seat(3, 7, true, true)));
        assert_eq!(numbers(&wf), vec![7, 8]);
        // partner is synthesized from the clicked seat
        assert_eq!(wf.selection()[1].id, 3);
        assert_eq!(wf.total_price(), 36.0);
    }

    #[test]
    fn test_couple_seat_at_highest_number_is_refused() {
        let mut wf = selecting();
        wf.select_seat(&seat(1, 1, true, false));
        let before = wf.clone();

        assert!(!wf.select_seat(&seat(4, u32::MAX, true, true)));
        assert_eq!(wf, before);
    }

    #[test]
    fn test_payment_requires_selection() {
        let mut wf = selecting();
        assert!(matches!(wf.proceed_to_payment(), Err(ApiError::Validation(_))));
        assert!(matches!(wf.state(), BookingState::SelectingSeats { .. }));
    }

    #[test]
    fn test_countdown_only_runs_while_awaiting_payment() {
        let mut wf = selecting();
        wf.tick();
        assert!(wf.countdown().is_none());

        wf.select_seat(&seat(1, 1, true, false));
        wf.proceed_to_payment().unwrap();
        for _ in 0..65 {
            wf.tick();
        }
        assert_eq!(wf.countdown().map(|c| c.remaining()), Some(835));
        assert_eq!(wf.countdown().map(|c| c.display()), Some("13:55".to_string()));
    }

    #[test]
    fn test_expiry_keeps_payment_open() {
        let mut wf = BookingWorkflow::new(2);
        wf.session_loaded(Ok(session()));
        wf.select_seat(&seat(1, 1, true, false));
        wf.proceed_to_payment().unwrap();
        for _ in 0..5 {
            wf.tick();
        }
        assert!(wf.countdown().is_some_and(|c| c.is_expired()));
        assert!(wf.is_awaiting_payment());
        assert!(wf.booking_request(5).is_ok());
    }

    #[test]
    fn test_booking_request_carries_selected_seat_ids() {
        let mut wf = selecting();
        wf.select_seat(&seat(3, 7, true, true));
        assert!(wf.booking_request(5).is_err());

        wf.proceed_to_payment().unwrap();
        let request = wf.booking_request(5).unwrap();
        assert_eq!(
            request,
            NewBooking {
                session_id: 42,
                seats: vec![3, 3],
                user_id: 5
            }
        );
    }

    #[test]
    fn test_change_seats_returns_to_selection() {
        let mut wf = selecting();
        wf.select_seat(&seat(1, 1, true, false));
        wf.proceed_to_payment().unwrap();

        assert!(wf.change_seats());
        assert!(!wf.is_awaiting_payment());
        assert_eq!(numbers(&wf), vec![1]);
        assert!(!wf.change_seats());
    }

    #[test]
    fn test_confirmation_is_final() {
        let mut wf = selecting();
        wf.select_seat(&seat(1, 1, true, false));
        wf.proceed_to_payment().unwrap();
        wf.confirm(BookingReceipt { id: 1234 }).unwrap();

        assert_eq!(wf.phase(), BookingPhase::Confirmed(1234));
        assert!(!wf.select_seat(&seat(1, 1, true, false)));
        assert!(!wf.change_seats());
        assert!(wf.proceed_to_payment().is_err());
        assert!(wf.confirm(BookingReceipt { id: 99 }).is_err());
        assert!(matches!(wf.state(), BookingState::Confirmed { booking_id: 1234, .. }));
    }
}
