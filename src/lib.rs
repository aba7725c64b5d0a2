//! # Simple and type-safe client for the DNS Made Easy API.
//!
//! Implements a blocking client for the managed DNS part of the
//! [DNS Made Easy API], covering domains and their records.
//!
//! Every request is authenticated with the API key and an HMAC-SHA1 of the
//! request date, keyed with the secret key. Server errors and rejected
//! credentials are reported the same way for every operation, while status
//! codes such as 404 are given a meaning specific to the operation.
//!
//! ## Examples
//!
//! ```no_run
//! use dnsme::Client;
//! use dnsme::record::{NewRecord, RecordType};
//!
//! let client = Client::builder()
//!     .apikey("<APIKEY>")
//!     .secretkey("<SECRETKEY>")
//!     .build()
//!     .unwrap();
//!
//! let domain = client.get_domain_by_name("example.com").unwrap();
//! let record = NewRecord::new("www", RecordType::A, "192.0.2.1", 1800);
//! let record = client.add_record(domain.id, &record).unwrap();
//! ```
//!
//! [DNS Made Easy API]: https://api-docs.dnsmadeeasy.com/

mod client;
pub mod domain;
mod errors;
pub mod record;
mod request;
pub mod signer;

pub use client::*;
pub use errors::*;
pub use request::*;
