/// Name used when the caller does not supply one
pub const DEFAULT_NAME: &str = "World";

/// Build the greeting for `name`, falling back to [`DEFAULT_NAME`] when
/// the name is absent or empty
pub fn greet(name: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_NAME);
    format!("Hello {name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Dave"), "Hello Dave")]
    #[case(Some(""), "Hello World")]
    #[case(None, "Hello World")]
    #[case(Some("Ada Lovelace"), "Hello Ada Lovelace")]
    fn test_greet(#[case] name: Option<&str>, #[case] expected: &str) {
        assert_eq!(greet(name), expected);
    }
}
