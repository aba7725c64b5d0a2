//! Managed domains.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// A name server assigned to a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameServer {
    pub ipv4: String,
    pub ipv6: String,
    pub fqdn: String,
}

/// A vanity name server assigned to a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VanityNameServer {
    pub fqdn: String,
}

/// A managed domain, as returned by the single domain endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub created: i64,
    pub updated: i64,
    pub delegate_name_servers: Vec<String>,
    pub folder_id: u64,
    pub gtd_enabled: bool,
    pub name_servers: Vec<NameServer>,
    pub process_multi: bool,
    pub active_third_parties: Vec<String>,
    pub pending_action_id: u64,
    pub vanity_id: u64,
    pub vanity_name_servers: Vec<VanityNameServer>,
}

/// The summary of a domain that is included in a [`DomainsList`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainShort {
    pub id: u64,
    pub name: String,
    pub created: i64,
    pub updated: i64,
    pub folder_id: u64,
    pub gtd_enabled: bool,
    pub process_multi: bool,
    pub active_third_parties: Vec<String>,
    pub pending_action_id: u64,
}

/// A page of domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomainsList {
    pub total_records: u64,
    #[serde(alias = "totalPackages")]
    pub total_pages: u64,
    pub page: u64,
    pub data: Vec<DomainShort>,
}

/// Body for creating a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDomain {
    pub name: String,
}

/// Field to sort domain listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum SortIndex {
    Name,
    Updated,
    Id,
    Folder,
}

impl SortIndex {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Direction to sort domain listings in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
