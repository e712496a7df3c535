//! Provider bootstrap: configuration in, one shared client out.
//!
//! The host configures the provider once, then asks it for resource and data
//! source handles. Every handle borrows the same `ApiClient`.

use tracing::info;

use crate::api::ApiClient;
use crate::config::ProviderConfig;
use crate::data_source::{DevDataSource, EngineerDataSource, ListedObject};
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::resource::{DevResource, EngineerResource, ManagedObject};
use crate::types::{Dev, Engineer};

/// Name the provider registers under.
pub const PROVIDER_TYPE: &str = "devops-bootcamp";

/// Type names of everything the provider offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub type_name: &'static str,
    pub version: String,
    pub resources: Vec<&'static str>,
    pub data_sources: Vec<&'static str>,
}

#[derive(Debug)]
pub struct Provider<T = UreqTransport> {
    version: String,
    client: ApiClient<T>,
}

impl Provider<UreqTransport> {
    /// Resolve the endpoint and build the client. Fails before any request
    /// is made when no endpoint is available.
    pub fn configure(version: &str, config: &ProviderConfig) -> Result<Self, ApiError> {
        let client = ApiClient::configure(config)?;
        info!(
            devops_api_endpoint = client.endpoint(),
            version, "configured DevOps API client"
        );
        Ok(Self::with_client(version, client))
    }
}

impl<T: Transport> Provider<T> {
    pub fn with_client(version: &str, client: ApiClient<T>) -> Self {
        Self {
            version: version.to_string(),
            client,
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE,
            version: self.version.clone(),
            resources: vec![Engineer::RESOURCE_TYPE, Dev::RESOURCE_TYPE],
            data_sources: vec![Engineer::DATA_SOURCE_TYPE, Dev::DATA_SOURCE_TYPE],
        }
    }

    pub fn engineer_resource(&self) -> EngineerResource<'_, T> {
        EngineerResource::new(&self.client)
    }

    pub fn dev_resource(&self) -> DevResource<'_, T> {
        DevResource::new(&self.client)
    }

    pub fn engineer_data_source(&self) -> EngineerDataSource<'_, T> {
        EngineerDataSource::new(&self.client)
    }

    pub fn dev_data_source(&self) -> DevDataSource<'_, T> {
        DevDataSource::new(&self.client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::types::EngineerFields;

    #[test]
    fn configure_without_endpoint_fails_before_network() {
        let config = ProviderConfig::with_endpoint("");
        let err = Provider::configure("test", &config).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn configure_with_explicit_endpoint() {
        let config = ProviderConfig::with_endpoint("http://localhost:8080/");
        let provider = Provider::configure("dev", &config).unwrap();
        assert_eq!(provider.client().endpoint(), "http://localhost:8080");
    }

    #[test]
    fn metadata_lists_all_types() {
        let client =
            ApiClient::with_transport("http://localhost:8080", ScriptedTransport::new()).unwrap();
        let metadata = Provider::with_client("test", client).metadata();
        assert_eq!(metadata.type_name, "devops-bootcamp");
        assert_eq!(metadata.version, "test");
        assert_eq!(
            metadata.resources,
            ["devops-bootcamp_engineer-resource", "devops-bootcamp_dev_resource"]
        );
        assert_eq!(
            metadata.data_sources,
            ["devops-bootcamp_engineer", "devops-bootcamp_dev"]
        );
    }

    #[test]
    fn handles_share_one_client() {
        let transport = ScriptedTransport::new()
            .respond(201, r#"{"id":"UCS24","name":"Ryan","email":"ryan@ferrets.com"}"#)
            .respond(200, r#"[{"id":"UCS24","name":"Ryan","email":"ryan@ferrets.com"}]"#);
        let client = ApiClient::with_transport("http://localhost:8080", transport).unwrap();
        let provider = Provider::with_client("test", client);

        provider
            .engineer_resource()
            .create(&EngineerFields::new("Ryan", "ryan@ferrets.com"))
            .unwrap();
        let listed = provider.engineer_data_source().read().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(provider.client().transport().requests().len(), 2);
    }
}
