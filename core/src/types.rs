//! Domain models for the Bootcamp API.
//!
//! # Design
//! Each entity has a read shape (`Engineer`, `Dev`) that always carries the
//! server-assigned `id`, and a write shape (`EngineerFields`, `DevFields`)
//! sent on create/update. The write shape never carries the entity's own id;
//! that travels in the URL.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An engineer as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A dev group as returned by the API. `engineers` keeps server order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dev {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub engineers: Vec<Engineer>,
}

/// Request payload for creating or replacing an engineer.
///
/// `id` is only set when the engineer is embedded in a `DevFields` and
/// already exists remotely. It is left out of the JSON otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineerFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl EngineerFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<Engineer> for EngineerFields {
    fn from(engineer: Engineer) -> Self {
        Self {
            id: Some(engineer.id),
            name: engineer.name,
            email: engineer.email,
        }
    }
}

/// Request payload for creating or replacing a dev group. The engineer list
/// is sent in full; an empty list clears it on the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DevFields {
    pub name: String,
    #[serde(default)]
    pub engineers: Vec<EngineerFields>,
}

impl DevFields {
    pub fn new(name: impl Into<String>, engineers: Vec<EngineerFields>) -> Self {
        Self {
            name: name.into(),
            engineers,
        }
    }
}

impl From<Dev> for DevFields {
    fn from(dev: Dev) -> Self {
        Self {
            name: dev.name,
            engineers: dev.engineers.into_iter().map(EngineerFields::from).collect(),
        }
    }
}

/// An entity kind exposed by the API under its own path segment.
pub trait RemoteObject: DeserializeOwned {
    /// Write shape sent on create and update.
    type Fields: Serialize;

    /// Path segment under the endpoint, e.g. `engineers`.
    const SEGMENT: &'static str;
    /// Singular noun used in messages.
    const SINGULAR: &'static str;
    /// Plural noun used in messages.
    const PLURAL: &'static str;

    fn id(&self) -> &str;
}

impl RemoteObject for Engineer {
    type Fields = EngineerFields;

    const SEGMENT: &'static str = "engineers";
    const SINGULAR: &'static str = "engineer";
    const PLURAL: &'static str = "engineers";

    fn id(&self) -> &str {
        &self.id
    }
}

impl RemoteObject for Dev {
    type Fields = DevFields;

    const SEGMENT: &'static str = "dev";
    const SINGULAR: &'static str = "dev";
    const PLURAL: &'static str = "Devs";

    fn id(&self) -> &str {
        &self.id
    }
}
