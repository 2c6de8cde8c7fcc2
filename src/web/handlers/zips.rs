//! City lookup handlers

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Response,
};
use tracing::debug;

use crate::web::{
    AppState,
    responses::{handle_error, json_bytes},
};

/// Last segment of the path suffix following the route prefix
///
/// The transport has already percent-decoded the suffix.
pub fn city_segment(suffix: &str) -> &str {
    suffix.rsplit('/').next().unwrap_or_default()
}

/// `GET /zips/city/{city}`
///
/// A suffix that cannot be decoded as UTF-8 cannot name any indexed city,
/// so it is answered like an empty key.
pub async fn city_lookup(
    State(state): State<AppState>,
    suffix: Result<Path<String>, PathRejection>,
) -> Response {
    match suffix {
        Ok(Path(suffix)) => respond(&state, city_segment(&suffix)),
        Err(rejection) => {
            debug!("undecodable city segment: {}", rejection.body_text());
            respond(&state, "")
        }
    }
}

/// `GET /zips/city/` with nothing after the prefix
pub async fn city_root(State(state): State<AppState>) -> Response {
    respond(&state, "")
}

fn respond(state: &AppState, city: &str) -> Response {
    match state.zip_lookup.render_city(city) {
        Ok(body) => json_bytes(body),
        Err(e) => handle_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("seattle", "seattle")]
    #[case("new york", "new york")]
    #[case("wa/seattle", "seattle")]
    #[case("seattle/", "")]
    #[case("", "")]
    fn test_city_segment(#[case] suffix: &str, #[case] expected: &str) {
        assert_eq!(city_segment(suffix), expected);
    }
}
