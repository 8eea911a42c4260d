//! Wire and view-model types for the CineBase catalog

use chrono::Datelike;
use serde::Deserialize;

/// Movie record as returned by the `allMovies` GraphQL query
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub poster_url: String,
    pub released: String,
    pub genres: Vec<String>,
    pub user_rating: f64,
    pub critic_rating: i32,
}

/// View model used by every page and component
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub poster_url: String,
    pub released: String,
    pub genres: Vec<String>,
    pub user_rating: f64,
    pub critic_rating: i32,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            synopsis: record.synopsis,
            poster_url: record.poster_url,
            released: record.released,
            genres: record.genres,
            user_rating: record.user_rating,
            critic_rating: record.critic_rating,
        }
    }
}

impl Movie {
    /// Release year parsed from the raw date string ("16 Jul 2010")
    pub fn release_year(&self) -> Option<i32> {
        chrono::NaiveDate::parse_from_str(&self.released, "%d %b %Y")
            .ok()
            .map(|date| date.year())
    }
}

/// Authenticated user session, persisted across reloads
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub token: String,
}

impl Session {
    /// Initials derived from the email local part ("tony.alberti" -> "TA")
    pub fn initials(&self) -> String {
        let local = self.email.split('@').next().unwrap_or("");
        local
            .split(['.', '_', '-', ' '])
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_record_maps_to_view_model() {
        let json = r#"{
            "id": "tt1375666",
            "title": "Inception",
            "synopsis": "A thief who steals corporate secrets.",
            "poster_url": "https://example.com/inception.jpg",
            "released": "16 Jul 2010",
            "genres": ["Action", "Sci-Fi", "Thriller"],
            "user_rating": 8.8,
            "critic_rating": 74
        }"#;
        let record: MovieRecord = serde_json::from_str(json).unwrap();
        let movie = Movie::from(record);

        assert_eq!(movie.id, "tt1375666");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.genres.len(), 3);
        assert_eq!(movie.user_rating, 8.8);
        assert_eq!(movie.critic_rating, 74);
    }

    #[test]
    fn release_year_parses_omdb_dates() {
        let movie = Movie {
            id: "1".into(),
            title: "Inception".into(),
            synopsis: String::new(),
            poster_url: String::new(),
            released: "16 Jul 2010".into(),
            genres: vec![],
            user_rating: 0.0,
            critic_rating: 0,
        };
        assert_eq!(movie.release_year(), Some(2010));
    }

    #[test]
    fn release_year_is_none_for_unparseable_dates() {
        let movie = Movie {
            id: "1".into(),
            title: "Unknown".into(),
            synopsis: String::new(),
            poster_url: String::new(),
            released: "N/A".into(),
            genres: vec![],
            user_rating: 0.0,
            critic_rating: 0,
        };
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn initials_come_from_the_email_local_part() {
        let session = Session {
            name: "Tony".into(),
            email: "tony.alberti@example.com".into(),
            token: "jwt".into(),
        };
        assert_eq!(session.initials(), "TA");

        let single = Session {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            token: "jwt".into(),
        };
        assert_eq!(single.initials(), "A");
    }
}
