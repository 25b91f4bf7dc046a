mod countdown;
mod ticket;
mod timer;
mod workflow;

pub use countdown::Countdown;
pub use ticket::Ticket;
pub use timer::PaymentTimer;
pub use workflow::{BookingPhase, BookingState, BookingWorkflow};
