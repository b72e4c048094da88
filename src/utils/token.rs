use scraper::{Html, Selector};

use crate::error::Error;

// Pulls the hidden CSRF token out of the login page markup: the first
// <input name="_token"> inside a <form>. This is the one place that depends
// on the remote page's structure, so it stays isolated here.
pub fn extract_csrf_token(html: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("form input[name=_token]").unwrap();

    let input = document
        .select(&selector)
        .next()
        .ok_or(Error::TokenNotFound)?;
    let value = input.value().attr("value").ok_or(Error::TokenEmpty)?;

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_value() {
        let html = r#"
            <html><body>
            <form method="POST" action="/login">
                <input type="hidden" name="_token" value="abc123">
                <input type="text" name="username">
            </form>
            </body></html>
        "#;
        assert_eq!(extract_csrf_token(html).unwrap(), "abc123");
    }

    #[test]
    fn first_token_wins() {
        let html = r#"
            <form><input name="_token" value="first"></form>
            <form><input name="_token" value="second"></form>
        "#;
        assert_eq!(extract_csrf_token(html).unwrap(), "first");
    }

    #[test]
    fn missing_input_is_token_not_found() {
        let html = "<form><input type=\"text\" name=\"username\"></form>";
        assert!(matches!(extract_csrf_token(html), Err(Error::TokenNotFound)));
    }

    #[test]
    fn input_without_value_is_token_empty() {
        let html = "<form><input type=\"hidden\" name=\"_token\"></form>";
        assert!(matches!(extract_csrf_token(html), Err(Error::TokenEmpty)));
    }

    #[test]
    fn token_outside_form_is_not_found() {
        let html = "<div><input name=\"_token\" value=\"loose\"></div>";
        assert!(matches!(extract_csrf_token(html), Err(Error::TokenNotFound)));
    }
}
