//! Client-side form models and the checks run before a request is sent.
//!
//! These guards only spare the API obviously doomed round-trips; the server
//! stays authoritative for every rule.

pub mod car;
pub mod draft;
pub mod image;
pub mod payment;
