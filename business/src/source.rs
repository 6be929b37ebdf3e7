//! Where a view's collection comes from.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use crate::error::FetchFailure;
use crate::http::Client;
use crate::record::Collection;

pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Collection, FetchFailure>> + Send>>;

/// Reads a collection from an endpoint.
pub trait CollectionSource: Send + Sync + Debug {
    fn fetch(&self, endpoint: &str) -> FetchFuture;
}

/// Production source: `GET <endpoint>`, expecting a JSON array of objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpSource;

impl CollectionSource for HttpSource {
    fn fetch(&self, endpoint: &str) -> FetchFuture {
        let request = Client::get(endpoint);

        Box::pin(async move {
            let response = request.send().await?;

            if !response.is_success() {
                return Err(FetchFailure::Status(response.status));
            }

            Ok(response.json::<Collection>()?)
        })
    }
}

/// Source that answers every fetch with the same canned result.
///
/// Lets views be exercised without a network.
#[derive(Debug, Clone)]
pub struct StaticSource {
    result: Result<Collection, FetchFailure>,
}

impl StaticSource {
    pub fn ok(collection: Collection) -> Self {
        Self {
            result: Ok(collection),
        }
    }

    pub fn failing(failure: FetchFailure) -> Self {
        Self {
            result: Err(failure),
        }
    }
}

impl CollectionSource for StaticSource {
    fn fetch(&self, _endpoint: &str) -> FetchFuture {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}
