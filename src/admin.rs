use crate::api::{AdminStats, Film, Id};

/// Films table plus the stats cards shown above it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmBoard {
    pub films: Vec<Film>,
    pub stats: AdminStats,
}

impl FilmBoard {
    pub fn new(films: Vec<Film>, stats: AdminStats) -> Self {
        Self { films, stats }
    }

    /// Drop a deleted film from the table and adjust the counters locally.
    /// The active count only moves when the film was active.
    pub fn remove(&mut self, id: Id) -> Option<Film> {
        let idx = self.films.iter().position(|f| f.id == id)?;
        let film = self.films.remove(idx);
        self.stats.total_films = self.stats.total_films.saturating_sub(1);
        if film.is_active {
            self.stats.active_films = self.stats.active_films.saturating_sub(1);
        }
        Some(film)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(id: Id, is_active: bool) -> Film {
        Film {
            id,
            title: format!("Film {}", id),
            description: String::new(),
            duration: 100,
            release_date: "2024-05-01".to_string(),
            genre: "Drama".to_string(),
            director: "A. Director".to_string(),
            cast: String::new(),
            poster_url: String::new(),
            trailer_url: None,
            min_age: None,
            price: 10.0,
            is_active,
        }
    }

    fn board() -> FilmBoard {
        let films = vec![
            film(1, true),
            film(2, true),
            film(3, false),
            film(4, true),
            film(5, false),
        ];
        FilmBoard::new(
            films,
            AdminStats {
                total_films: 5,
                active_films: 3,
                total_bookings: 12,
            },
        )
    }

    #[test]
    fn test_remove_active_film() {
        let mut board = board();
        let removed = board.remove(2).unwrap();

        assert_eq!(removed.id, 2);
        assert_eq!(board.films.len(), 4);
        assert_eq!(board.stats.total_films, 4);
        assert_eq!(board.stats.active_films, 2);
        assert_eq!(board.stats.total_bookings, 12);
    }

    #[test]
    fn test_remove_inactive_film_keeps_active_count() {
        let mut board = board();
        board.remove(3).unwrap();

        assert_eq!(board.films.len(), 4);
        assert_eq!(board.stats.total_films, 4);
        assert_eq!(board.stats.active_films, 3);
    }

    #[test]
    fn test_remove_unknown_film_is_noop() {
        let mut board = board();
        assert!(board.remove(99).is_none());
        assert_eq!(board, self::board());
    }
}
