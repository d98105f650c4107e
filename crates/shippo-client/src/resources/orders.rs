use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const ORDERS: &str = "/orders/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// e.g. `PAID`, `SHIPPED`.
    pub order_status: Option<String>,
    /// ISO 8601 lower bound on `placed_at`.
    pub start_date: Option<String>,
    /// ISO 8601 upper bound on `placed_at`.
    pub end_date: Option<String>,
}

impl ShippoClient {
    pub async fn list_orders(&self, params: &ListParams, filter: &OrderFilter) -> Result<Paginated> {
        let query = params
            .query()
            .param("order_status[]", filter.order_status.as_deref())
            .param("start_date", filter.start_date.as_deref())
            .param("end_date", filter.end_date.as_deref());
        self.list_at(ORDERS, &query).await
    }

    pub async fn create_order<B: Serialize + ?Sized>(&self, order: &B) -> Result<Entity> {
        self.post_at(ORDERS, Some(to_body(order)?)).await
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Entity> {
        self.get_at(&format!("{ORDERS}{}", segment(order_id))).await
    }
}
