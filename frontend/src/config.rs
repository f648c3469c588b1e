//! Build-time settings of the front-end.
//!
//! The API base URL is baked in at compile time from `CAR_MARKET_API_BASE`
//! (e.g. `CAR_MARKET_API_BASE=https://cars.example.com/api trunk build`). The
//! default points at the `/api` proxy of the bundled host.

pub const DEFAULT_API_BASE: &str = "/api";

/// Cars per "load more" batch on the listing screen.
pub const LISTING_BATCH_SIZE: u32 = 9;

/// Initial rows per page on the management screen.
pub const MANAGE_PAGE_SIZE: u32 = 10;

pub const PAGE_SIZE_CHOICES: [u32; 4] = [5, 10, 20, 50];

/// Quiet period before a typed search term is sent.
pub const SEARCH_QUIET_MS: u32 = 1_000;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Car";

pub fn api_base() -> &'static str {
    option_env!("CAR_MARKET_API_BASE")
        .map(|base| base.trim_end_matches('/'))
        .unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL of an API path such as `/Cars`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
