use serde::{Deserialize, Deserializer, Serialize};

pub type Id = u64;

// -- Accounts --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    #[serde(default, alias = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

/// Body of `POST /login`. Both fields are optional on the wire so that a
/// malformed success can be reported instead of failing to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

// -- Catalog --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Film {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default, alias = "image_url")]
    pub poster_url: String,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub min_age: Option<u8>,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Create/update payload for a film.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmInput {
    pub title: String,
    pub description: String,
    pub duration: u32,
    pub release_date: String,
    pub genre: String,
    pub director: String,
    pub cast: String,
    pub poster_url: String,
    pub trailer_url: Option<String>,
    pub min_age: Option<u8>,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_films: u32,
    #[serde(default)]
    pub active_films: u32,
    #[serde(default)]
    pub total_bookings: u32,
}

// -- Screenings --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Seat {
    pub id: Id,
    pub number: u32,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_couple: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Session {
    pub id: Id,
    #[serde(default)]
    pub film_id: Option<Id>,
    #[serde(default)]
    pub start_time: String,
    /// "standard", "VIP", ...
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub seats: Vec<Seat>,
    #[serde(default)]
    pub available_seats: u32,
}

impl Session {
    pub fn is_vip(&self) -> bool {
        self.kind.eq_ignore_ascii_case("vip")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSession {
    pub film_id: Id,
    pub start_time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub language: String,
    pub price: f64,
}

// -- Bookings --

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub session_id: Id,
    pub seats: Vec<Id>,
    pub user_id: Id,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BookingReceipt {
    pub id: Id,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Booking {
    pub id: Id,
    #[serde(default)]
    pub session_id: Option<Id>,
    #[serde(default, deserialize_with = "seat_ids")]
    pub seats: Vec<Id>,
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Seats come back either as bare ids or as seat objects.
fn seat_ids<'de, D>(deserializer: D) -> Result<Vec<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SeatRef {
        Id(Id),
        Object { id: Id },
    }

    let refs = Vec::<SeatRef>::deserialize(deserializer)?;
    Ok(refs
        .into_iter()
        .map(|r| match r {
            SeatRef::Id(id) | SeatRef::Object { id } => id,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_camel_case_admin_flag() {
        let user: User =
            serde_json::from_str(r#"{"id":3,"name":"Ana","email":"ana@x.io","isAdmin":true}"#).unwrap();
        assert!(user.is_admin);

        let plain: User = serde_json::from_str(r#"{"id":4,"name":"Bo","email":"bo@x.io"}"#).unwrap();
        assert!(!plain.is_admin);
    }

    #[test]
    fn test_film_image_url_alias_and_defaults() {
        let film: Film = serde_json::from_str(
            r#"{"id":1,"title":"Metropolis","image_url":"https://img/m.jpg","min_age":12}"#,
        )
        .unwrap();
        assert_eq!(film.poster_url, "https://img/m.jpg");
        assert_eq!(film.min_age, Some(12));
        assert!(film.is_active);
        assert!(film.trailer_url.is_none());
    }

    #[test]
    fn test_admin_stats_camel_case() {
        let stats: AdminStats =
            serde_json::from_str(r#"{"totalFilms":5,"activeFilms":3,"totalBookings":42}"#).unwrap();
        assert_eq!(
            stats,
            AdminStats {
                total_films: 5,
                active_films: 3,
                total_bookings: 42
            }
        );
    }

    #[test]
    fn test_session_type_field() {
        let session: Session = serde_json::from_str(
            r#"{"id":9,"start_time":"2026-10-19 20:30:00","type":"VIP","language":"FR","price":14.5,
                "seats":[{"id":1,"number":1,"is_available":true,"price":14.5,"is_couple":false}],
                "available_seats":1}"#,
        )
        .unwrap();
        assert!(session.is_vip());
        assert_eq!(session.seats.len(), 1);
    }

    #[test]
    fn test_booking_seats_as_ids_or_objects() {
        let by_id: Booking = serde_json::from_str(r#"{"id":77,"seats":[4,5]}"#).unwrap();
        assert_eq!(by_id.seats, vec![4, 5]);

        let by_object: Booking =
            serde_json::from_str(r#"{"id":77,"seats":[{"id":4,"number":10},{"id":5,"number":11}]}"#).unwrap();
        assert_eq!(by_object.seats, vec![4, 5]);
    }

    #[test]
    fn test_new_booking_wire_shape() {
        let body = NewBooking {
            session_id: 3,
            seats: vec![10, 11],
            user_id: 8,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"session_id": 3, "seats": [10, 11], "user_id": 8})
        );
    }
}
