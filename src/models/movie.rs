//! Movie record as stored in the catalog and returned by the API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single catalog entry.
///
/// The four fields the API filters on are typed. Every other field of the
/// stored record (year, duration, vote count, ...) is kept in `extra` and
/// serialized back untouched, so responses have the same shape as the data
/// they were loaded from.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "The Kid",
///   "year": 1921,
///   "genre": "Comedy, Drama, Family",
///   "country": "United States",
///   "avg_vote": 8.3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,

    /// Comma separated list of genres, kept as one string
    pub genre: String,

    /// Country (or comma separated countries) of production
    pub country: String,

    pub avg_vote: AvgVote,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Average vote, stored either as a JSON number or as a string.
///
/// It is written back in the form it was read in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AvgVote {
    Number(Number),
    Text(String),
}

impl AvgVote {
    /// Numeric value of the vote. Text that does not parse yields NaN, which
    /// compares false against every threshold.
    pub fn value(&self) -> f64 {
        match self {
            AvgVote::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            AvgVote::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl From<f64> for AvgVote {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(AvgVote::Number)
            .unwrap_or_else(|| AvgVote::Text(value.to_string()))
    }
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        country: impl Into<String>,
        avg_vote: impl Into<AvgVote>,
    ) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            country: country.into(),
            avg_vote: avg_vote.into(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_text_votes_parse() {
        assert_eq!(AvgVote::from(7.5).value(), 7.5);
        assert_eq!(AvgVote::Text("6.1".into()).value(), 6.1);
        assert!(AvgVote::Text("n/a".into()).value().is_nan());
    }

    #[test]
    fn stored_shape_is_preserved() {
        let stored = json!({
            "title": "Metropolis",
            "year": 1927,
            "genre": "Drama, Sci-Fi",
            "country": "Germany",
            "avg_vote": "8.3",
            "votes": 162_000
        });

        let movie: Movie = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(movie.avg_vote, AvgVote::Text("8.3".into()));
        assert_eq!(movie.extra.get("year"), Some(&json!(1927)));

        assert_eq!(serde_json::to_value(&movie).unwrap(), stored);
    }

    #[test]
    fn integer_votes_stay_integers() {
        let movie: Movie = serde_json::from_value(json!({
            "title": "A",
            "genre": "Comedy",
            "country": "USA",
            "avg_vote": 7
        }))
        .unwrap();

        assert_eq!(movie.avg_vote.value(), 7.0);
        assert_eq!(serde_json::to_value(&movie).unwrap()["avg_vote"], json!(7));
    }
}
