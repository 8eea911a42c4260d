//! Genre-overlap recommendation ranking
//!
//! Pure functions: the pages feed them the current catalog and genre
//! selection and render whatever comes back.

use unicode_normalization::UnicodeNormalization;

use crate::types::Movie;

/// Maximum number of titles returned by the ranking
pub const MAX_PICKS: usize = 5;

/// Lower-case a genre tag and strip diacritics so that catalog strings
/// like "Ação" compare equal to their plain-ASCII selection tags
pub fn normalize_tag(tag: &str) -> String {
    tag.to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect()
}

/// Count of the movie's normalized genre tags present in the selection
pub fn genre_overlap(movie: &Movie, selected: &[String]) -> usize {
    movie
        .genres
        .iter()
        .map(|g| normalize_tag(g))
        .filter(|g| selected.iter().any(|s| s == g))
        .count()
}

/// Rank the catalog by genre overlap with the current selection.
///
/// Movies sharing no genre with the selection are dropped, the rest are
/// sorted by descending overlap (ties keep catalog order), and at most
/// [`MAX_PICKS`] titles are returned.
pub fn rank_by_genres(catalog: &[Movie], selected: &[String]) -> Vec<Movie> {
    let mut scored: Vec<(usize, &Movie)> = catalog
        .iter()
        .map(|movie| (genre_overlap(movie, selected), movie))
        .filter(|(score, _)| *score > 0)
        .collect();
    // Stable sort, so equal scores stay in catalog order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_PICKS)
        .map(|(_, movie)| movie.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, genres: &[&str]) -> Movie {
        Movie {
            id: id.to_string(),
            title: format!("Movie {id}"),
            synopsis: String::new(),
            poster_url: String::new(),
            released: String::new(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            user_rating: 0.0,
            critic_rating: 0,
        }
    }

    fn tags(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn normalize_strips_case_and_diacritics() {
        assert_eq!(normalize_tag("Ação"), "acao");
        assert_eq!(normalize_tag("Comédia"), "comedia");
        assert_eq!(normalize_tag("Sci-Fi"), "sci-fi");
    }

    #[test]
    fn zero_overlap_movies_are_excluded() {
        let catalog = vec![
            movie("a", &["Action"]),
            movie("b", &["Romance"]),
            movie("c", &["Action", "Comedy"]),
        ];
        let picks = rank_by_genres(&catalog, &tags(&["action", "comedy"]));
        let ids: Vec<&str> = picks.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn ranking_sorts_by_descending_overlap() {
        let catalog = vec![
            movie("one", &["Drama"]),
            movie("three", &["Drama", "Horror", "Mystery"]),
            movie("two", &["Drama", "Horror"]),
        ];
        let selected = tags(&["drama", "horror", "mystery"]);
        let picks = rank_by_genres(&catalog, &selected);
        let ids: Vec<&str> = picks.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["three", "two", "one"]);
    }

    #[test]
    fn at_most_five_movies_are_returned() {
        let catalog: Vec<Movie> = (0..8)
            .map(|i| movie(&i.to_string(), &["Thriller"]))
            .collect();
        let picks = rank_by_genres(&catalog, &tags(&["thriller"]));
        assert_eq!(picks.len(), MAX_PICKS);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = vec![
            movie("first", &["Comedy"]),
            movie("second", &["Comedy"]),
            movie("third", &["Comedy"]),
        ];
        let picks = rank_by_genres(&catalog, &tags(&["comedy"]));
        let ids: Vec<&str> = picks.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_selection_yields_no_picks() {
        let catalog = vec![movie("a", &["Action"])];
        assert!(rank_by_genres(&catalog, &[]).is_empty());
    }

    #[test]
    fn accented_catalog_genres_match_plain_tags() {
        let catalog = vec![movie("a", &["Ação"]), movie("b", &["Ficção"])];
        let picks = rank_by_genres(&catalog, &tags(&["acao"]));
        let ids: Vec<&str> = picks.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }
}
