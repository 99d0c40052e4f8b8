//! Company API methods for [`HubSpotClient`].
//!
//! # What this module handles:
//! - Reading, listing and searching company records
//! - Creating, updating and archiving company records
//!
//! # What this module does NOT handle:
//! - Low-level object endpoint HTTP calls (in [`crate::endpoints`])
//!
//! Every method is generic over the property struct. Use [`Company`] for the
//! well-known properties, or a struct embedding it with `#[serde(flatten)]`
//! to carry custom properties.
//!
//! [`Company`]: crate::models::Company

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::HubSpotClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    COMPANY_OBJECT_TYPE, DEFAULT_COMPANY_PROPERTIES, GetResponse, RequestQueryOption,
    RequestSearchOption, ResponseResource, ResponseResourceMulti,
};

impl HubSpotClient {
    /// Get a company by ID, or its associations when the option names one.
    pub async fn get_company<T: DeserializeOwned>(
        &mut self,
        id: &str,
        option: &RequestQueryOption,
    ) -> Result<GetResponse<T>> {
        crate::retry_call!(
            self,
            __token,
            endpoints::get_object(
                &self.http,
                &self.base_url,
                &__token,
                COMPANY_OBJECT_TYPE,
                id,
                option,
                DEFAULT_COMPANY_PROPERTIES,
                self.max_retries,
            )
            .await
        )
    }

    /// List one page of companies. Pass [`ResponseResourceMulti::next_after`]
    /// back as `option.after` for the next page.
    pub async fn list_companies<T: DeserializeOwned>(
        &mut self,
        option: &RequestQueryOption,
    ) -> Result<ResponseResourceMulti<T>> {
        crate::retry_call!(
            self,
            __token,
            endpoints::list_objects(
                &self.http,
                &self.base_url,
                &__token,
                COMPANY_OBJECT_TYPE,
                option,
                DEFAULT_COMPANY_PROPERTIES,
                self.max_retries,
            )
            .await
        )
    }

    /// Search companies.
    pub async fn search_companies<T: DeserializeOwned>(
        &mut self,
        option: &RequestSearchOption,
    ) -> Result<ResponseResourceMulti<T>> {
        crate::retry_call!(
            self,
            __token,
            endpoints::search_objects(
                &self.http,
                &self.base_url,
                &__token,
                COMPANY_OBJECT_TYPE,
                option,
                self.max_retries,
            )
            .await
        )
    }

    /// Create a company.
    ///
    /// `properties` is only borrowed. The server's view of the record comes
    /// back as an owned [`ResponseResource<T>`]: the assigned ID is in
    /// `resource.id` and, for a [`Company`](crate::models::Company), also in
    /// `resource.properties.id`, together with any computed properties
    /// HubSpot returns, such as `hs_createdate`.
    ///
    /// A create is retried on 429 only. A 502/503/504 may have been applied
    /// server-side, so it is returned as an error instead of replayed.
    pub async fn create_company<T>(&mut self, properties: &T) -> Result<ResponseResource<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        crate::retry_call!(
            self,
            __token,
            endpoints::create_object(
                &self.http,
                &self.base_url,
                &__token,
                COMPANY_OBJECT_TYPE,
                properties,
                self.max_retries,
            )
            .await
        )
    }

    /// Update a company. Absent properties are not sent.
    ///
    /// Returns an owned [`ResponseResource<T>`] holding the record after the
    /// update; `properties` is left untouched. Read the ID and refreshed
    /// values from `resource.properties`.
    pub async fn update_company<T>(
        &mut self,
        id: &str,
        properties: &T,
    ) -> Result<ResponseResource<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        crate::retry_call!(
            self,
            __token,
            endpoints::update_object(
                &self.http,
                &self.base_url,
                &__token,
                COMPANY_OBJECT_TYPE,
                id,
                properties,
                self.max_retries,
            )
            .await
        )
    }

    /// Archive a company.
    pub async fn delete_company(&mut self, id: &str) -> Result<()> {
        crate::retry_call!(
            self,
            __token,
            endpoints::delete_object(
                &self.http,
                &self.base_url,
                &__token,
                COMPANY_OBJECT_TYPE,
                id,
                self.max_retries,
            )
            .await
        )
    }
}
