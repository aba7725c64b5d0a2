//! DNS records of a managed domain.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Global traffic director location used when none is given.
pub const DEFAULT_GTD_LOCATION: &str = "DEFAULT";

/// Possible types a DNS record can have.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Aname,
    Cname,
    Httpred,
    Mx,
    Ns,
    Ptr,
    Srv,
    Txt,
    Spf,
    Soa,
    Caa,
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// A DNS record.
///
/// The type is kept as sent by the provider, so listings that contain types
/// not covered by [`RecordType`] still decode. Use [`Record::record_type`]
/// to get the typed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
    pub ttl: u32,
    #[serde(default)]
    pub gtd_location: String,
    #[serde(default)]
    pub source: i64,
    #[serde(default)]
    pub source_id: u64,
    #[serde(default)]
    pub failover: bool,
    #[serde(default)]
    pub monitor: bool,
    #[serde(default)]
    pub hard_link: bool,
    #[serde(default)]
    pub dynamic_dns: bool,
    #[serde(default)]
    pub failed: bool,
}

impl Record {
    /// Parses the record's type.
    ///
    /// # Errors
    /// Fails for types the provider added after [`RecordType`] was written.
    pub fn record_type(&self) -> Result<RecordType, strum::ParseError> {
        self.type_.parse()
    }
}

/// A page of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordsList {
    pub total_records: u64,
    pub total_pages: u64,
    pub page: u64,
    pub data: Vec<Record>,
}

/// Body for creating a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: RecordType,
    pub value: String,
    pub gtd_location: String,
    pub ttl: u32,
}

impl NewRecord {
    /// Creates a record body in the default GTD location.
    pub fn new(name: &str, type_: RecordType, value: &str, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            type_,
            value: value.to_string(),
            gtd_location: DEFAULT_GTD_LOCATION.to_string(),
            ttl,
        }
    }

    /// Sets the GTD location.
    pub fn gtd_location(mut self, gtd_location: &str) -> Self {
        self.gtd_location = gtd_location.to_string();
        self
    }
}

/// Body for replacing an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: RecordType,
    pub value: String,
    pub gtd_location: String,
    pub ttl: u32,
}

impl UpdateRecord {
    /// Creates an update of the record with the given id.
    pub fn new(id: u64, record: NewRecord) -> Self {
        Self {
            id,
            name: record.name,
            type_: record.type_,
            value: record.value,
            gtd_location: record.gtd_location,
            ttl: record.ttl,
        }
    }
}

impl TryFrom<&Record> for UpdateRecord {
    type Error = strum::ParseError;

    fn try_from(value: &Record) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            name: value.name.clone(),
            type_: value.record_type()?,
            value: value.value.clone(),
            gtd_location: value.gtd_location.clone(),
            ttl: value.ttl,
        })
    }
}

/// Optional filters for record listings, applied by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub name: Option<String>,
    pub type_: Option<RecordType>,
}
