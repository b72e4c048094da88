use std::fmt;
use std::io;

use thiserror::Error;

// Which level of the enrollment tree a resolution failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Students,
    Schools,
    SchoolYears,
    Classes,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Students => "students",
            Level::Schools => "schools",
            Level::SchoolYears => "school years",
            Level::Classes => "classes",
        };
        f.write_str(name)
    }
}

// Everything that can stop a run. None of these are retried; each one is
// reported once and ends the process (with exit status 0 unless the failure
// happened before any network activity).
#[derive(Debug, Error)]
pub enum Error {
    #[error("user is required")]
    MissingUsername,

    #[error("failed to build the http client: {0}")]
    ClientSetup(#[source] reqwest::Error),

    #[error("invalid portal url: {0}")]
    Url(#[from] url::ParseError),

    #[error("login page request failed: {0}")]
    LoginPage(#[source] reqwest::Error),

    #[error("login form has no _token input")]
    TokenNotFound,

    #[error("login form _token input has no value")]
    TokenEmpty,

    #[error("login failed, check your credentials and try again")]
    LoginRejected,

    #[error("failed to fetch {what}: {source}")]
    Fetch {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {0} found")]
    NoCandidates(Level),

    #[error("multiple {0} not supported")]
    Unsupported(Level),

    #[error("selection prompt failed: {0}")]
    Prompt(#[from] io::Error),
}
