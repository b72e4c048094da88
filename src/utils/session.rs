use std::time::Duration;

use log::info;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use crate::error::Error;
use crate::models::{CourseGrading, Student, StudentsResponse};
use crate::utils::token::extract_csrf_token;

pub const BASE_URL: &str = "https://moj.esdnevnik.rs";

// One logical portal session: a single cookie jar for the lifetime of the
// process, redirects disabled so the login handshake can read the raw
// Location header. Calls are strictly sequential; each later request depends
// on cookies accumulated by login().
pub struct Session {
    client: Client,
    base: Url,
}

impl Session {
    pub fn new() -> Result<Self, Error> {
        Self::with_base(Url::parse(BASE_URL)?)
    }

    // Separate constructor so tests and forks can point the session at a
    // different host.
    pub fn with_base(base: Url) -> Result<Self, Error> {
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(Error::ClientSetup)?;

        Ok(Session { client, base })
    }

    // Performs the login handshake: GET the form, lift the CSRF token out of
    // it, POST the credentials form-encoded. Success or failure is decided
    // by login_rejected() below, nothing in the response body is inspected.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), Error> {
        let login_url = self.base.join("login")?;

        let page = self
            .client
            .get(login_url.clone())
            .send()
            .await
            .map_err(Error::LoginPage)?
            .text()
            .await
            .map_err(Error::LoginPage)?;
        let token = extract_csrf_token(&page)?;

        let form = [
            ("_token", token.as_str()),
            ("username", username),
            ("password", password),
        ];
        let response = self
            .client
            .post(login_url)
            .form(&form)
            .send()
            .await
            .map_err(Error::LoginPage)?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok());
        if login_rejected(location) {
            return Err(Error::LoginRejected);
        }

        info!("Logged in as {}", username);
        Ok(())
    }

    pub async fn fetch_students(&self) -> Result<Vec<Student>, Error> {
        let body = self.get_text("api/students", "students").await?;
        let response: StudentsResponse = serde_json::from_str(&body).map_err(|e| Error::Decode {
            what: "students",
            source: e,
        })?;
        Ok(response.data)
    }

    pub async fn fetch_grades(&self, class_id: i64) -> Result<Vec<CourseGrading>, Error> {
        let body = self
            .get_text(&format!("api/grades/{}", class_id), "grades")
            .await?;
        serde_json::from_str(&body).map_err(|e| Error::Decode {
            what: "grades",
            source: e,
        })
    }

    async fn get_text(&self, path: &str, what: &'static str) -> Result<String, Error> {
        let url = self.base.join(path)?;
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch { what, source: e })?
            .text()
            .await
            .map_err(|e| Error::Fetch { what, source: e })
    }
}

// Login outcome heuristic inherited from the portal's behavior: a failed
// login redirects back to the login page, a successful one redirects
// anywhere else (or not at all). Only the Location header suffix is checked;
// an unrelated redirect would be misread as success.
pub fn login_rejected(location: Option<&str>) -> bool {
    location.is_some_and(|target| target.ends_with("login"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_back_to_login_is_rejected() {
        assert!(login_rejected(Some("/login")));
        assert!(login_rejected(Some("https://moj.esdnevnik.rs/login")));
    }

    #[test]
    fn redirect_elsewhere_is_accepted() {
        assert!(!login_rejected(Some("/dashboard")));
        assert!(!login_rejected(Some("https://moj.esdnevnik.rs/pocetna")));
    }

    #[test]
    fn missing_location_is_accepted() {
        assert!(!login_rejected(None));
    }
}
