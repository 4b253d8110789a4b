use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use super::model::OptionItem;
use crate::shared::api_utils::{api_url, get_json, FetchError};

/// Where the dependent options of a parent value come from
#[async_trait(?Send)]
pub trait OptionSource {
    type Item: OptionItem;

    async fn fetch(&self, parent: &str) -> Result<Vec<Self::Item>, FetchError>;
}

/// Path template of an option-list endpoint; `{id}` is replaced by the
/// percent-encoded parent value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint(&'static str);

impl Endpoint {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    pub fn path_for(&self, parent: &str) -> String {
        self.0.replace("{id}", &urlencoding::encode(parent.trim()))
    }
}

/// Fetches a JSON array of `T` from an [`Endpoint`]
pub struct HttpOptionSource<T> {
    endpoint: Endpoint,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpOptionSource<T> {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            _item: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T> OptionSource for HttpOptionSource<T>
where
    T: OptionItem + DeserializeOwned + 'static,
{
    type Item = T;

    async fn fetch(&self, parent: &str) -> Result<Vec<T>, FetchError> {
        let url = api_url(&self.endpoint.path_for(parent));
        log::debug!("GET {}", url);
        get_json::<Vec<T>>(&url).await
    }
}
