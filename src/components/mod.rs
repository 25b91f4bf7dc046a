pub mod confirmation;
pub mod film_card;
pub mod form_field;
pub mod navbar;
pub mod protected;
pub mod seat_map;
pub mod status_badge;
pub mod ticket_qr;
