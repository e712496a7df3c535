//! Executing client: `BootcampClient` requests sent through a `Transport`.
//!
//! Every call is one attempt with no retry. The client holds only the
//! endpoint and the transport, so a single instance can be lent by reference
//! to every resource and data source.

use tracing::debug;

use crate::client::BootcampClient;
use crate::config::ProviderConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::types::{Dev, DevFields, Engineer, EngineerFields, RemoteObject};

#[derive(Debug, Clone)]
pub struct ApiClient<T = UreqTransport> {
    requests: BootcampClient,
    transport: T,
}

impl ApiClient<UreqTransport> {
    /// Client over the default blocking transport with the fixed timeout.
    pub fn new(endpoint: &str) -> Result<Self, ApiError> {
        Self::with_transport(endpoint, UreqTransport::new())
    }

    /// Resolve the endpoint from `config` (or the environment) and build a
    /// client. Fails before any network call when no endpoint is available.
    pub fn configure(config: &ProviderConfig) -> Result<Self, ApiError> {
        let endpoint = config.resolve_endpoint()?;
        Self::new(&endpoint)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(endpoint: &str, transport: T) -> Result<Self, ApiError> {
        if endpoint.trim().is_empty() {
            return Err(ApiError::Configuration(
                "the Bootcamp API endpoint is empty".to_string(),
            ));
        }
        Ok(Self {
            requests: BootcampClient::new(endpoint),
            transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.requests.endpoint()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        self.transport.execute(request)
    }

    pub fn list<R: RemoteObject>(&self) -> Result<Vec<R>, ApiError> {
        let response = self.send(self.requests.build_list::<R>())?;
        self.requests.parse_list(response)
    }

    pub fn get_by_id<R: RemoteObject>(&self, id: &str) -> Result<R, ApiError> {
        let response = self.send(self.requests.build_get::<R>(id))?;
        self.requests.parse_object(response)
    }

    pub fn create<R: RemoteObject>(&self, fields: &R::Fields) -> Result<R, ApiError> {
        let request = self.requests.build_create::<R>(fields)?;
        debug!(kind = R::SINGULAR, body = request.body.as_deref(), "create payload");
        let response = self.send(request)?;
        debug!(kind = R::SINGULAR, status = response.status, body = %response.text(), "create response");
        self.requests.parse_object(response)
    }

    /// Full replacement of the mutable fields.
    pub fn update<R: RemoteObject>(&self, id: &str, fields: &R::Fields) -> Result<R, ApiError> {
        let request = self.requests.build_update::<R>(id, fields)?;
        let response = self.send(request)?;
        self.requests.parse_object(response)
    }

    pub fn delete<R: RemoteObject>(&self, id: &str) -> Result<(), ApiError> {
        let response = self.send(self.requests.build_delete::<R>(id))?;
        self.requests.parse_delete(response)
    }

    // Engineer

    pub fn list_engineers(&self) -> Result<Vec<Engineer>, ApiError> {
        self.list()
    }

    pub fn get_engineer_by_id(&self, id: &str) -> Result<Engineer, ApiError> {
        self.get_by_id(id)
    }

    pub fn create_engineer(&self, name: &str, email: &str) -> Result<Engineer, ApiError> {
        self.create::<Engineer>(&EngineerFields::new(name, email))
    }

    pub fn update_engineer(&self, id: &str, name: &str, email: &str) -> Result<Engineer, ApiError> {
        self.update::<Engineer>(id, &EngineerFields::new(name, email))
    }

    pub fn delete_engineer(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<Engineer>(id)
    }

    // Dev

    pub fn list_devs(&self) -> Result<Vec<Dev>, ApiError> {
        self.list()
    }

    pub fn get_dev_by_id(&self, id: &str) -> Result<Dev, ApiError> {
        self.get_by_id(id)
    }

    pub fn create_dev(&self, name: &str, engineers: Vec<EngineerFields>) -> Result<Dev, ApiError> {
        self.create::<Dev>(&DevFields::new(name, engineers))
    }

    pub fn update_dev(
        &self,
        id: &str,
        name: &str,
        engineers: Vec<EngineerFields>,
    ) -> Result<Dev, ApiError> {
        self.update::<Dev>(id, &DevFields::new(name, engineers))
    }

    pub fn delete_dev(&self, id: &str) -> Result<(), ApiError> {
        self.delete::<Dev>(id)
    }
}
