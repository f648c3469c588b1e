//! Search and pagination bookkeeping shared by the listing and management
//! screens.
//!
//! Both screens run the same [`ListController`]; they differ only in the
//! [`PagingMode`] they pick. Keystrokes in their search boxes go through a
//! [`SearchDebouncer`] before they reach the controller.

pub mod controller;
pub mod debounce;

pub use controller::{FetchTicket, ListController, PagingMode};
pub use debounce::SearchDebouncer;
