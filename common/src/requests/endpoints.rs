//! Paths of the remote API, relative to the configured base URL.
//!
//! Text segments are interpolated as given; callers encode them first.

pub const CARS: &str = "/Cars";
pub const PAYMENT_DETAILS: &str = "/PaymentDetails";

pub fn car_info(id: u64) -> String {
    format!("{CARS}/CarInfo-{id}")
}

pub fn add_car(company: &str, model: &str) -> String {
    format!("{CARS}/AddCar-{company}-{model}")
}

pub fn update_car(id: u64, company: &str, model: &str) -> String {
    format!("{CARS}/UpdateCar-{id}-{company}-{model}")
}

pub fn delete_car(id: u64) -> String {
    format!("{CARS}/DeleteCar-{id}")
}

pub fn payment_detail(id: u64) -> String {
    format!("{PAYMENT_DETAILS}/{id}")
}
