use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const TRANSACTIONS: &str = "/transactions/";
const REFUNDS: &str = "/refunds/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// e.g. `SUCCESS`, `ERROR`, `QUEUED`.
    pub object_status: Option<String>,
    /// e.g. `DELIVERED`, `TRANSIT`.
    pub tracking_status: Option<String>,
    /// Only transactions purchased for this rate.
    pub rate: Option<String>,
}

impl ShippoClient {
    pub async fn list_transactions(
        &self,
        params: &ListParams,
        filter: &TransactionFilter,
    ) -> Result<Paginated> {
        let query = params
            .query()
            .param("object_status", filter.object_status.as_deref())
            .param("tracking_status", filter.tracking_status.as_deref())
            .param("rate", filter.rate.as_deref());
        self.list_at(TRANSACTIONS, &query).await
    }

    /// Purchase a label, either for an existing rate or as a one-call instalabel.
    pub async fn create_transaction<B: Serialize + ?Sized>(
        &self,
        transaction: &B,
    ) -> Result<Entity> {
        self.post_at(TRANSACTIONS, Some(to_body(transaction)?)).await
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Entity> {
        self.get_at(&format!("{TRANSACTIONS}{}", segment(transaction_id)))
            .await
    }

    pub async fn list_refunds(&self, params: &ListParams) -> Result<Paginated> {
        self.list_at(REFUNDS, &params.query()).await
    }

    pub async fn create_refund<B: Serialize + ?Sized>(&self, refund: &B) -> Result<Entity> {
        self.post_at(REFUNDS, Some(to_body(refund)?)).await
    }

    pub async fn get_refund(&self, refund_id: &str) -> Result<Entity> {
        self.get_at(&format!("{REFUNDS}{}", segment(refund_id))).await
    }
}
