//! Read-only data sources listing a whole collection.

use std::marker::PhantomData;

use crate::api::ApiClient;
use crate::error::ResourceError;
use crate::http::{Transport, UreqTransport};
use crate::types::{Dev, Engineer, RemoteObject};

/// A `RemoteObject` exposed as a list data source.
pub trait ListedObject: RemoteObject {
    /// Data source type name registered with the host.
    const DATA_SOURCE_TYPE: &'static str;
}

impl ListedObject for Engineer {
    const DATA_SOURCE_TYPE: &'static str = "devops-bootcamp_engineer";
}

impl ListedObject for Dev {
    const DATA_SOURCE_TYPE: &'static str = "devops-bootcamp_dev";
}

pub struct DataSource<'a, R, T = UreqTransport> {
    client: &'a ApiClient<T>,
    kind: PhantomData<fn() -> R>,
}

pub type EngineerDataSource<'a, T = UreqTransport> = DataSource<'a, Engineer, T>;
pub type DevDataSource<'a, T = UreqTransport> = DataSource<'a, Dev, T>;

impl<'a, R: ListedObject, T: Transport> DataSource<'a, R, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    pub fn type_name(&self) -> &'static str {
        R::DATA_SOURCE_TYPE
    }

    /// The full collection, in server order.
    pub fn read(&self) -> Result<Vec<R>, ResourceError> {
        self.client.list::<R>().map_err(|e| {
            ResourceError::new(
                format!("Unable to fetch {}", R::PLURAL),
                &format!("fetching {}", R::PLURAL),
                e,
            )
        })
    }
}
