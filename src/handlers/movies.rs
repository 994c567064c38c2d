//! Movie search HTTP handler.
//!
//! - GET /movie - Search the catalog by genre, country and minimum average vote

use crate::{
    error::AppError,
    services::movie_filter::{MovieFilter, MovieQuery},
    state::AppState,
};
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};

/// Search movies.
///
/// # Endpoint
///
/// `GET /movie`
///
/// # Authentication
///
/// Requires `Authorization: Bearer <API_TOKEN>` (checked by the auth middleware).
///
/// # Query Parameters
///
/// - `genre` - case-insensitive substring of the genre field
/// - `country` - case-insensitive substring of the country field
/// - `avgVote` - minimum average vote, inclusive
///
/// All are optional; with none the whole catalog is returned.
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of matching movies, in catalog order
/// - **Error (400)**: `avgVote` is not a number
/// - **Error (401)**: Missing or wrong bearer token
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<MovieQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    // Step 1: Parse the query string; malformed input is a client error
    let Query(query) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;

    // Step 2: Validate parameters (avgVote must be a finite number)
    let filter = MovieFilter::try_from(query)?;

    // Step 3: Narrow the catalog, keeping catalog order
    let movies = filter.apply(state.catalog.movies());
    tracing::debug!(?filter, matched = movies.len(), "movie search");

    // Step 4: Serialize here so a failure surfaces as a server fault
    let body = serde_json::to_vec(&movies)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
