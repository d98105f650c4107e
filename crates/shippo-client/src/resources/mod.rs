//! Entity operations, one module per remote resource.
//!
//! Every operation is one of a few shapes layered on [`ShippoClient::request`]: list, get,
//! create, update, delete, or an action on a single entity.

mod addresses;
mod batches;
mod carrier_accounts;
mod customs;
mod live_rates;
mod manifests;
mod orders;
mod parcel_templates;
mod parcels;
mod pickups;
mod service_groups;
mod shipments;
mod tracking;
mod transactions;

pub use carrier_accounts::CarrierAccountFilter;
pub use orders::OrderFilter;
pub use shipments::ShipmentFilter;
pub use transactions::TransactionFilter;

use crate::client::{RequestOptions, ShippoClient};
use crate::error::{Result, ShippoError};
use crate::query::{QueryBuilder, encode_component};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A remote record, returned verbatim. Its shape belongs to the provider.
pub type Entity = Value;

/// Pagination parameters accepted by every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<u32>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListParams {
    #[must_use]
    pub fn new(results: Option<u32>, page: Option<u32>) -> Self {
        Self { results, page }
    }

    #[must_use]
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .param("results", self.results)
            .param("page", self.page)
    }
}

/// The `{count, next, previous, results}` envelope returned by list endpoints.
///
/// The remote document is kept as-is so it can be re-emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Paginated(Value);

impl Paginated {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.0.get("count").and_then(Value::as_u64)
    }

    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.0.get("next").and_then(Value::as_str)
    }

    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.0.get("previous").and_then(Value::as_str)
    }

    /// The page's entities. A few collections answer with a bare array instead of the
    /// envelope; that array is returned as-is.
    #[must_use]
    pub fn results(&self) -> &[Value] {
        let items = match &self.0 {
            Value::Array(items) => Some(items),
            other => other.get("results").and_then(Value::as_array),
        };
        items.map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Percent-encode a caller-supplied path segment (ids, carrier tokens, currencies).
pub(crate) fn segment(raw: &str) -> String {
    encode_component(raw)
}

pub(crate) fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ShippoError::Decode(format!("request body: {e}")))
}

impl ShippoClient {
    pub(crate) async fn list_at(&self, path: &str, query: &QueryBuilder) -> Result<Paginated> {
        let path = format!("{path}{}", query.build());
        Ok(self
            .request::<Paginated>(&path, RequestOptions::get())
            .await?
            .unwrap_or_default())
    }

    pub(crate) async fn get_at(&self, path: &str) -> Result<Entity> {
        self.fetch(path, RequestOptions::get()).await
    }

    pub(crate) async fn post_at(&self, path: &str, body: Option<Value>) -> Result<Entity> {
        self.fetch(path, RequestOptions::post(body)).await
    }

    pub(crate) async fn put_at(&self, path: &str, body: Value) -> Result<Entity> {
        self.fetch(path, RequestOptions::put(body)).await
    }

    pub(crate) async fn delete_at(&self, path: &str) -> Result<()> {
        self.request::<Value>(path, RequestOptions::delete())
            .await
            .map(|_| ())
    }

    async fn fetch(&self, path: &str, options: RequestOptions) -> Result<Entity> {
        Ok(self
            .request::<Value>(path, options)
            .await?
            .unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::{ListParams, Paginated, segment};
    use serde_json::json;

    #[test]
    fn list_params_query() {
        assert_eq!(ListParams::new(Some(20), None).query().build(), "?results=20");
        assert_eq!(ListParams::default().query().build(), "");
        assert_eq!(
            ListParams::new(Some(5), Some(3)).query().build(),
            "?results=5&page=3"
        );
    }

    #[test]
    fn paginated_accessors_tolerate_missing_fields() {
        let page = Paginated::from_value(json!({
            "count": 5,
            "next": "https://api.goshippo.com/addresses/?page=2",
            "previous": null,
            "results": [{"object_id": "addr_1"}]
        }));
        assert_eq!(page.count(), Some(5));
        assert!(page.next().is_some());
        assert_eq!(page.previous(), None);
        assert_eq!(page.results().len(), 1);

        let empty = Paginated::default();
        assert_eq!(empty.count(), None);
        assert!(empty.results().is_empty());

        let bare = Paginated::from_value(json!([{"object_id": "sg_1"}, {"object_id": "sg_2"}]));
        assert_eq!(bare.results().len(), 2);
        assert_eq!(bare.count(), None);
    }

    #[test]
    fn segments_are_encoded() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
