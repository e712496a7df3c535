//! Resource reconcilers: the Create/Read/Update/Delete/Import entry points a
//! plugin host drives for each managed kind.
//!
//! Each entry point is one round-trip. Output state is always taken from the
//! server's response, never from the desired fields that were sent.

use std::marker::PhantomData;

use tracing::debug;

use crate::api::ApiClient;
use crate::error::ResourceError;
use crate::http::{Transport, UreqTransport};
use crate::types::{Dev, Engineer, RemoteObject};

/// A `RemoteObject` the provider manages as a resource.
pub trait ManagedObject: RemoteObject {
    /// Resource type name registered with the host.
    const RESOURCE_TYPE: &'static str;
}

impl ManagedObject for Engineer {
    const RESOURCE_TYPE: &'static str = "devops-bootcamp_engineer-resource";
}

impl ManagedObject for Dev {
    const RESOURCE_TYPE: &'static str = "devops-bootcamp_dev_resource";
}

/// Stored state produced by an import: only the id is known until the
/// host's next Read fills in everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedState {
    pub resource_type: &'static str,
    pub id: String,
}

/// Reconciler for one resource kind, borrowing the provider's client.
pub struct Resource<'a, R, T = UreqTransport> {
    client: &'a ApiClient<T>,
    kind: PhantomData<fn() -> R>,
}

pub type EngineerResource<'a, T = UreqTransport> = Resource<'a, Engineer, T>;
pub type DevResource<'a, T = UreqTransport> = Resource<'a, Dev, T>;

impl<'a, R: ManagedObject, T: Transport> Resource<'a, R, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    pub fn type_name(&self) -> &'static str {
        R::RESOURCE_TYPE
    }

    pub fn create(&self, desired: &R::Fields) -> Result<R, ResourceError> {
        let created = self.client.create::<R>(desired).map_err(|e| {
            ResourceError::new(
                format!("Unable to create {}", R::SINGULAR),
                &format!("creating the {}", R::SINGULAR),
                e,
            )
        })?;
        debug!(resource = R::RESOURCE_TYPE, id = created.id(), "created");
        Ok(created)
    }

    /// Refresh stored state. A vanished object is reported as an error; the
    /// host decides whether to drop it.
    pub fn read(&self, id: &str) -> Result<R, ResourceError> {
        self.client.get_by_id::<R>(id).map_err(|e| {
            ResourceError::new(
                format!("Unable to fetch {}", R::SINGULAR),
                &format!("fetching the {}", R::SINGULAR),
                e,
            )
        })
    }

    /// Replace every mutable field of `id` with `desired`.
    pub fn update(&self, id: &str, desired: &R::Fields) -> Result<R, ResourceError> {
        let updated = self.client.update::<R>(id, desired).map_err(|e| {
            ResourceError::new(
                format!("Unable to update {}", R::SINGULAR),
                &format!("updating the {}", R::SINGULAR),
                e,
            )
        })?;
        debug!(resource = R::RESOURCE_TYPE, id, "updated");
        Ok(updated)
    }

    /// `Ok` tells the host to drop the resource from its state.
    pub fn delete(&self, id: &str) -> Result<(), ResourceError> {
        self.client.delete::<R>(id).map_err(|e| {
            ResourceError::new(
                format!("Unable to delete {}", R::SINGULAR),
                &format!("deleting the {}", R::SINGULAR),
                e,
            )
        })?;
        debug!(resource = R::RESOURCE_TYPE, id, "deleted");
        Ok(())
    }

    pub fn import(&self, id: &str) -> ImportedState {
        ImportedState {
            resource_type: R::RESOURCE_TYPE,
            id: id.to_string(),
        }
    }
}
