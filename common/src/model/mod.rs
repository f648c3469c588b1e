pub mod car;
pub mod paged;
pub mod payment;
