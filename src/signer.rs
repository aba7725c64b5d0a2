//! Request authentication for the DNS Made Easy API.
//!
//! Every request carries the time it was sent and an HMAC-SHA1 of that exact
//! string, keyed with the secret key.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac, digest::InvalidLength};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-dnsme-apiKey";
/// Header carrying the request date the signature was computed over.
pub const REQUEST_DATE_HEADER: &str = "x-dnsme-requestDate";
/// Header carrying the hex encoded signature.
pub const HMAC_HEADER: &str = "x-dnsme-hmac";

/// Formats the given time as an RFC 2616 HTTP-date, e.g.
/// `Mon, 02 Jan 2006 15:04:05 GMT`.
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Signs `message` with HMAC-SHA1 keyed by `secret`, returning lowercase hex.
///
/// # Errors
/// - `InvalidLength` if the key is rejected. HMAC accepts keys of any length,
///   so this doesn't happen in practice.
pub fn sign(secret: &str, message: &str) -> Result<String, InvalidLength> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// The authentication values for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub request_date: String,
    pub hmac: String,
}

impl Signature {
    /// Signs the given time.
    pub fn at(secret: &str, time: DateTime<Utc>) -> Result<Self, InvalidLength> {
        let request_date = http_date(time);
        let hmac = sign(secret, &request_date)?;
        Ok(Self { request_date, hmac })
    }

    /// Signs the current time.
    pub fn now(secret: &str) -> Result<Self, InvalidLength> {
        Self::at(secret, Utc::now())
    }
}
