//! Shared networking constants and helpers used by gateway and client.

/// Path of the single quote endpoint.
pub const STOCK_PATH: &str = "/api/stock";
/// Query parameter carrying the requested symbol.
pub const SYMBOL_PARAM: &str = "symbol";
/// Port the gateway listens on unless configured otherwise.
pub const GATEWAY_PORT: u16 = 8888;

/// Helper to format an IPv4 address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Builds the absolute quote endpoint URL from a gateway base URL.
///
/// A trailing slash on `base` is tolerated.
pub fn stock_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), STOCK_PATH)
}
