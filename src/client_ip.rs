//! Client identification for rate-limit keys.

/// Proxy-appended client chain; the left-most entry is the originating client.
pub const FORWARDED_FOR: &str = "x-forwarded-for";
/// Single-address header set by some reverse proxies.
pub const REAL_IP: &str = "x-real-ip";
/// Identifier used when no header names the client.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Derives the client identifier from request headers.
///
/// `header` looks up a lower-case header name. The first `x-forwarded-for` entry wins, then
/// `x-real-ip`; both are trimmed and ignored when blank.
pub fn client_ip<'a, F>(header: F) -> String
where
	F: Fn(&str) -> Option<&'a str>,
{
	header(FORWARDED_FOR)
		.and_then(|chain| chain.split(',').next())
		.map(str::trim)
		.filter(|ip| !ip.is_empty())
		.or_else(|| header(REAL_IP).map(str::trim).filter(|ip| !ip.is_empty()))
		.unwrap_or(UNKNOWN_CLIENT)
		.to_owned()
}
