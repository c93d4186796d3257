//! Outbound HTTP helpers.
//!
//! Every upstream call goes through these functions so that failures always come
//! back as a typed `FetchError`:
//! - transport problems (connect, timeout, body read) → `FetchError::Network`
//! - a status other than 200 → `FetchError::Status`
//! - a body that is not valid JSON → `FetchError::Decode`

mod request;

pub use request::{get_json, get_text};
