//! Types and logic shared between the browser front-end and the host binary.
//!
//! Everything here is target-independent so it can be unit tested on the host:
//! the wire models of the car and payment APIs, request/endpoint builders, form
//! validation, the list controller driving both car list screens, and the
//! error taxonomy the services report.

pub mod error;
pub mod forms;
pub mod listing;
pub mod model;
pub mod requests;
