// Terminal client for the moj.esdnevnik.rs school-records portal: logs in
// through the CSRF-protected form, walks the enrollment tree down to a
// single class, and reports concluded grades with an overall average.

pub mod error;
pub mod models;
pub mod utils;
