use axum::{extract::Query, response::Response};

use crate::{services::greet, web::responses::plain_text};

/// First `name` value in the query, if any
///
/// Repeated keys are allowed; later values are ignored.
pub fn first_name(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
}

/// Plain-text greeting used as a smoke endpoint
pub async fn hello(Query(pairs): Query<Vec<(String, String)>>) -> Response {
    plain_text(greet(first_name(&pairs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_name_wins() {
        let query = pairs(&[("name", "Ada"), ("name", "Bob")]);
        assert_eq!(first_name(&query), Some("Ada"));
    }

    #[test]
    fn test_first_name_ignores_other_keys() {
        let query = pairs(&[("lang", "en"), ("name", "Ada")]);
        assert_eq!(first_name(&query), Some("Ada"));
        assert_eq!(first_name(&pairs(&[("lang", "en")])), None);
    }
}
