//! Typed client and resource reconcilers for the DevOps Bootcamp API.
//!
//! # Overview
//! The API manages two kinds: engineers and dev groups (a dev embeds an
//! ordered list of engineers). This crate is the core a declarative
//! infrastructure provider calls into:
//!
//! - `BootcampClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network.
//! - `ApiClient` runs those through a `Transport` (blocking `ureq`, fixed
//!   10 second timeout) with one attempt per call.
//! - `Resource` exposes Create/Read/Update/Delete/Import per kind and
//!   `DataSource` lists a whole collection.
//! - `Provider` resolves the endpoint once and lends the client to every
//!   handle.
//!
//! # Example
//!
//! ```no_run
//! use bootcamp_core::{EngineerFields, Provider, ProviderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! bootcamp_core::try_init_logging();
//! let provider = Provider::configure("dev", &ProviderConfig::default())?;
//!
//! let engineers = provider.engineer_resource();
//! let ryan = engineers.create(&EngineerFields::new("Ryan", "ryan@ferrets.com"))?;
//! let refreshed = engineers.read(&ryan.id)?;
//! assert_eq!(refreshed, ryan);
//! engineers.delete(&ryan.id)?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod data_source;
pub mod error;
pub mod http;
pub mod logging;
pub mod provider;
pub mod resource;
pub mod testing;
pub mod types;

pub use api::ApiClient;
pub use client::BootcampClient;
pub use config::{ProviderConfig, ENDPOINT_ENV};
pub use data_source::{DataSource, DevDataSource, EngineerDataSource, ListedObject};
pub use error::{ApiError, ResourceError};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport, MAX_BODY_SIZE, REQUEST_TIMEOUT,
};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use provider::{Provider, ProviderMetadata, PROVIDER_TYPE};
pub use resource::{DevResource, EngineerResource, ImportedState, ManagedObject, Resource};
pub use types::{Dev, DevFields, Engineer, EngineerFields, RemoteObject};
