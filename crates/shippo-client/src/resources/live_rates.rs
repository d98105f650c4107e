use super::{Entity, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

const LIVE_RATES: &str = "/live-rates";
const DEFAULT_TEMPLATE: &str = "/live-rates/settings/parcel-template";

impl ShippoClient {
    /// Quote rates for a cart, as shown at checkout.
    ///
    /// Returns the `results` array of the response; a response without one yields no rates.
    pub async fn create_live_rate<B: Serialize + ?Sized>(&self, request: &B) -> Result<Vec<Value>> {
        let envelope = self.post_at(LIVE_RATES, Some(to_body(request)?)).await?;
        Ok(unwrap_results(envelope))
    }

    /// The account's default parcel template for live rates, or `None` when none is set.
    ///
    /// A 404 is how the remote reports "not configured"; every other failure propagates.
    pub async fn get_default_parcel_template(&self) -> Result<Option<Entity>> {
        match self.get_at(DEFAULT_TEMPLATE).await {
            Ok(template) => Ok(Some(template)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn update_default_parcel_template<B: Serialize + ?Sized>(
        &self,
        template: &B,
    ) -> Result<Entity> {
        self.put_at(DEFAULT_TEMPLATE, to_body(template)?).await
    }

    pub async fn delete_default_parcel_template(&self) -> Result<()> {
        self.delete_at(DEFAULT_TEMPLATE).await
    }
}

fn unwrap_results(envelope: Value) -> Vec<Value> {
    match envelope {
        Value::Object(mut obj) => match obj.remove("results") {
            Some(Value::Array(results)) => results,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
