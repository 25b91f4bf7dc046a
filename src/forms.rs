//! Raw form input and its validation into request payloads.

use chrono::NaiveDate;

use crate::api::{ApiError, Credentials, Film, FilmInput, Id, NewSession, Registration, User, UserUpdate};

fn required(value: &str, field: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn secret(value: &str, field: &str) -> Result<String, ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

fn email(value: &str) -> Result<String, ApiError> {
    let value = required(value, "Email")?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(value),
        _ => Err(ApiError::Validation("Email is not a valid address".to_string())),
    }
}

fn price(value: &str) -> Result<f64, ApiError> {
    let Some(raw) = optional(value) else {
        return Ok(0.0);
    };
    match raw.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(ApiError::Validation("Price must be a non-negative number".to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ApiError> {
        Ok(Credentials {
            email: email(&self.email)?,
            password: secret(&self.password, "Password")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, ApiError> {
        let password = self.password.clone();
        if password.chars().count() < 8 {
            return Err(ApiError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        if self.password_confirmation != password {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }
        Ok(Registration {
            name: required(&self.name, "Name")?,
            email: email(&self.email)?,
            password_confirmation: password.clone(),
            password,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn validate(&self) -> Result<UserUpdate, ApiError> {
        Ok(UserUpdate {
            name: required(&self.name, "Name")?,
            email: email(&self.email)?,
        })
    }
}

/// Second step of account deletion: credentials typed again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteAccountForm {
    pub email: String,
    pub password: String,
}

impl DeleteAccountForm {
    pub fn validate(&self) -> Result<Credentials, ApiError> {
        Ok(Credentials {
            email: required(&self.email, "Email")?,
            password: secret(&self.password, "Password")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilmForm {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub release_date: String,
    pub genre: String,
    pub director: String,
    pub cast: String,
    pub poster_url: String,
    pub trailer_url: String,
    pub min_age: String,
    pub price: String,
    pub is_active: bool,
}

impl Default for FilmForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration: String::new(),
            release_date: String::new(),
            genre: String::new(),
            director: String::new(),
            cast: String::new(),
            poster_url: String::new(),
            trailer_url: String::new(),
            min_age: String::new(),
            price: String::new(),
            is_active: true,
        }
    }
}

impl FilmForm {
    pub fn from_film(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
            description: film.description.clone(),
            duration: film.duration.to_string(),
            release_date: film.release_date.clone(),
            genre: film.genre.clone(),
            director: film.director.clone(),
            cast: film.cast.clone(),
            poster_url: film.poster_url.clone(),
            trailer_url: film.trailer_url.clone().unwrap_or_default(),
            min_age: film.min_age.map(|a| a.to_string()).unwrap_or_default(),
            price: if film.price > 0.0 {
                film.price.to_string()
            } else {
                String::new()
            },
            is_active: film.is_active,
        }
    }

    pub fn validate(&self) -> Result<FilmInput, ApiError> {
        let duration = match required(&self.duration, "Duration")?.parse::<u32>() {
            Ok(d) if d > 0 => d,
            _ => {
                return Err(ApiError::Validation(
                    "Duration must be a positive number of minutes".to_string(),
                ))
            }
        };

        let release_date = required(&self.release_date, "Release date")?;
        if NaiveDate::parse_from_str(&release_date, "%Y-%m-%d").is_err() {
            return Err(ApiError::Validation(
                "Release date must be YYYY-MM-DD".to_string(),
            ));
        }

        let min_age = match optional(&self.min_age) {
            None => None,
            Some(raw) => Some(raw.parse::<u8>().map_err(|_| {
                ApiError::Validation("Minimum age must be between 0 and 255".to_string())
            })?),
        };

        Ok(FilmInput {
            title: required(&self.title, "Title")?,
            description: required(&self.description, "Description")?,
            duration,
            release_date,
            genre: required(&self.genre, "Genre")?,
            director: required(&self.director, "Director")?,
            cast: required(&self.cast, "Cast")?,
            poster_url: required(&self.poster_url, "Poster URL")?,
            trailer_url: optional(&self.trailer_url),
            min_age,
            price: price(&self.price)?,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionForm {
    pub film_id: String,
    pub start_time: String,
    pub kind: String,
    pub language: String,
    pub price: String,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self {
            film_id: String::new(),
            start_time: String::new(),
            kind: "standard".to_string(),
            language: String::new(),
            price: String::new(),
        }
    }
}

impl SessionForm {
    pub fn validate(&self) -> Result<NewSession, ApiError> {
        let film_id = required(&self.film_id, "Film")?
            .parse::<Id>()
            .map_err(|_| ApiError::Validation("Film is required".to_string()))?;

        // <input type="datetime-local"> yields "2026-10-19T20:30"
        let raw_start = required(&self.start_time, "Start time")?;
        let start = chrono::NaiveDateTime::parse_from_str(&raw_start, "%Y-%m-%dT%H:%M")
            .map_err(|_| ApiError::Validation("Start time is not a valid date and time".to_string()))?;

        Ok(NewSession {
            film_id,
            start_time: start.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: required(&self.kind, "Type")?,
            language: required(&self.language, "Language")?,
            price: price(&self.price)?,
        })
    }
}
