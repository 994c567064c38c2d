//! Movie search filters.
//!
//! Each filter is a pure predicate over one field. Present filters are
//! combined with AND, and the relative order of the catalog is kept.

use crate::{error::AppError, models::movie::Movie};
use serde::Deserialize;

/// Query string of `GET /movie`.
///
/// Empty values are treated the same as absent ones.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MovieQuery {
    pub genre: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "avgVote")]
    pub avg_vote: Option<String>,
}

/// Validated form of [`MovieQuery`], with search terms already lowercased.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MovieFilter {
    genre: Option<String>,
    country: Option<String>,
    min_vote: Option<f64>,
}

impl TryFrom<MovieQuery> for MovieFilter {
    type Error = AppError;

    fn try_from(query: MovieQuery) -> Result<Self, Self::Error> {
        let min_vote = non_empty(query.avg_vote)
            .map(|raw| parse_min_vote(&raw))
            .transpose()?;

        Ok(Self {
            genre: non_empty(query.genre).map(|g| g.to_lowercase()),
            country: non_empty(query.country).map(|c| c.to_lowercase()),
            min_vote,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse the `avgVote` threshold. Anything that is not a finite number is a
/// client error.
fn parse_min_vote(raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::InvalidQuery("avgVote must be a number".to_string()))
}

impl MovieFilter {
    /// Case-insensitive substring match on the genre field.
    pub fn matches_genre(&self, movie: &Movie) -> bool {
        self.genre
            .as_deref()
            .is_none_or(|g| movie.genre.to_lowercase().contains(g))
    }

    /// Case-insensitive substring match on the country field.
    pub fn matches_country(&self, movie: &Movie) -> bool {
        self.country
            .as_deref()
            .is_none_or(|c| movie.country.to_lowercase().contains(c))
    }

    /// Inclusive lower bound on the average vote. Non-numeric votes never match.
    pub fn matches_vote(&self, movie: &Movie) -> bool {
        self.min_vote.is_none_or(|min| movie.avg_vote.value() >= min)
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        self.matches_genre(movie) && self.matches_country(movie) && self.matches_vote(movie)
    }

    /// Movies that pass every present filter, in catalog order.
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        movies.iter().filter(|m| self.matches(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::AvgVote;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("A", "Comedy", "USA", 6.0),
            Movie::new("B", "Drama", "France", 8.0),
            Movie::new("C", "Action, Drama", "United States of America", 7.5),
            Movie::new("D", "Horror", "Germany", AvgVote::Text("n/a".into())),
        ]
    }

    fn filter(genre: Option<&str>, country: Option<&str>, avg_vote: Option<&str>) -> MovieFilter {
        MovieFilter::try_from(MovieQuery {
            genre: genre.map(String::from),
            country: country.map(String::from),
            avg_vote: avg_vote.map(String::from),
        })
        .unwrap()
    }

    fn titles(movies: Vec<&Movie>) -> Vec<&str> {
        movies.into_iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn no_parameters_returns_everything() {
        let movies = catalog();
        assert_eq!(titles(MovieFilter::default().apply(&movies)), ["A", "B", "C", "D"]);
    }

    #[test]
    fn empty_parameters_are_ignored() {
        let movies = catalog();
        let f = filter(Some(""), Some(""), Some(""));
        assert_eq!(f, MovieFilter::default());
        assert_eq!(f.apply(&movies).len(), movies.len());
    }

    #[test]
    fn genre_is_case_insensitive_substring() {
        let movies = catalog();
        assert_eq!(titles(filter(Some("action"), None, None).apply(&movies)), ["C"]);
        assert_eq!(titles(filter(Some("DRAMA"), None, None).apply(&movies)), ["B", "C"]);
        assert_eq!(titles(filter(Some("ram"), None, None).apply(&movies)), ["B", "C"]);
    }

    #[test]
    fn country_is_case_insensitive_substring() {
        let movies = catalog();
        assert_eq!(titles(filter(None, Some("usa"), None).apply(&movies)), ["A"]);
        assert_eq!(titles(filter(None, Some("united"), None).apply(&movies)), ["C"]);
    }

    #[test]
    fn vote_threshold_is_inclusive() {
        let movies = catalog();
        assert_eq!(titles(filter(None, None, Some("7.5")).apply(&movies)), ["B", "C"]);
        assert_eq!(titles(filter(None, None, Some("7.6")).apply(&movies)), ["B"]);
        assert_eq!(titles(filter(None, None, Some(" 7 ")).apply(&movies)), ["B", "C"]);
    }

    #[test]
    fn non_numeric_votes_never_match_a_threshold() {
        let movies = catalog();
        let f = filter(None, None, Some("-100"));
        assert_eq!(titles(f.apply(&movies)), ["A", "B", "C"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        let movies = catalog();
        let f = filter(Some("drama"), Some("united"), Some("7"));
        assert_eq!(titles(f.apply(&movies)), ["C"]);

        let f = filter(Some("drama"), Some("usa"), None);
        assert!(f.apply(&movies).is_empty());
    }

    #[test]
    fn invalid_vote_threshold_is_rejected() {
        for raw in ["abc", "NaN", "inf", "7,5"] {
            let err = MovieFilter::try_from(MovieQuery {
                avg_vote: Some(raw.to_string()),
                ..MovieQuery::default()
            })
            .unwrap_err();
            assert!(matches!(err, AppError::InvalidQuery(_)), "{raw}");
        }
    }
}
