//! CRM object endpoints, generic over the object type and property struct.
//!
//! Every resource type shares these six calls; a resource module only
//! supplies its object type segment and default property list. Property
//! structs are encoded and decoded through the envelopes in
//! [`crate::models::envelope`].

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints::{send_create_request_with_retry, send_request_with_retry};
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::envelope::{decode_associations, decode_resource, decode_resource_multi};
use crate::models::{
    GetResponse, RequestPayload, RequestQueryOption, RequestSearchOption, ResponseResource,
    ResponseResourceMulti,
};

/// Root of the CRM v3 object API.
pub const CRM_OBJECTS_PATH: &str = "/crm/v3/objects";

/// Base path of an object type, e.g. `/crm/v3/objects/companies`.
pub fn object_path(object_type: &str) -> String {
    format!("{}/{}", CRM_OBJECTS_PATH, encode_path_segment(object_type))
}

/// Read one record.
///
/// When the option names an association type, the first one is read
/// instead and the result is [`GetResponse::Associations`]. That request
/// carries no query parameters; properties, archived and paging in the
/// option apply to record reads only.
#[allow(clippy::too_many_arguments)]
pub async fn get_object<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    id: &str,
    option: &RequestQueryOption,
    default_properties: &[&str],
    max_retries: usize,
) -> Result<GetResponse<T>> {
    let record_path = format!("{}/{}", object_path(object_type), encode_path_segment(id));

    if let Some(association) = option.association() {
        let url = format!(
            "{}{}/associations/{}",
            base_url,
            record_path,
            encode_path_segment(association)
        );
        debug!("Fetching {} associations of {} {}", association, object_type, id);

        let builder = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", auth_token));
        let response = send_request_with_retry(builder, max_retries).await?;
        let body = response.text().await?;
        return Ok(GetResponse::Associations(decode_associations(&body)?));
    }

    let url = format!("{}{}", base_url, record_path);
    let option = option.setup_properties(default_properties);
    debug!("Fetching {} {}", object_type, id);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&option.to_query_params());
    let response = send_request_with_retry(builder, max_retries).await?;
    let body = response.text().await?;

    Ok(GetResponse::Resource(decode_resource(&body)?))
}

/// List one page of records.
#[allow(clippy::too_many_arguments)]
pub async fn list_objects<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    option: &RequestQueryOption,
    default_properties: &[&str],
    max_retries: usize,
) -> Result<ResponseResourceMulti<T>> {
    let url = format!("{}{}", base_url, object_path(object_type));
    let option = option.setup_properties(default_properties);
    debug!("Listing {} (after: {:?})", object_type, option.after);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&option.to_query_params());
    let response = send_request_with_retry(builder, max_retries).await?;
    let body = response.text().await?;

    decode_resource_multi(&body)
}

/// Search records. The option is sent as the body unchanged.
pub async fn search_objects<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    option: &RequestSearchOption,
    max_retries: usize,
) -> Result<ResponseResourceMulti<T>> {
    let url = format!("{}{}/search", base_url, object_path(object_type));
    debug!("Searching {}", object_type);

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(option);
    let response = send_request_with_retry(builder, max_retries).await?;
    let body = response.text().await?;

    decode_resource_multi(&body)
}

/// Create a record from a property struct.
///
/// Retried on 429 only; see [`send_create_request_with_retry`].
pub async fn create_object<P, T>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    properties: &P,
    max_retries: usize,
) -> Result<ResponseResource<T>>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = format!("{}{}", base_url, object_path(object_type));
    debug!("Creating {}", object_type);

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&RequestPayload::new(properties));
    let response = send_create_request_with_retry(builder, max_retries).await?;
    let body = response.text().await?;

    decode_resource(&body)
}

/// Update a record. Absent properties are left out of the body and keep
/// their stored values.
#[allow(clippy::too_many_arguments)]
pub async fn update_object<P, T>(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    id: &str,
    properties: &P,
    max_retries: usize,
) -> Result<ResponseResource<T>>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = format!(
        "{}{}/{}",
        base_url,
        object_path(object_type),
        encode_path_segment(id)
    );
    debug!("Updating {} {}", object_type, id);

    let builder = client
        .patch(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&RequestPayload::new(properties));
    let response = send_request_with_retry(builder, max_retries).await?;
    let body = response.text().await?;

    decode_resource(&body)
}

/// Archive a record.
pub async fn delete_object(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    object_type: &str,
    id: &str,
    max_retries: usize,
) -> Result<()> {
    let url = format!(
        "{}{}/{}",
        base_url,
        object_path(object_type),
        encode_path_segment(id)
    );
    debug!("Deleting {} {}", object_type, id);

    let builder = client
        .delete(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    send_request_with_retry(builder, max_retries).await?;

    Ok(())
}
