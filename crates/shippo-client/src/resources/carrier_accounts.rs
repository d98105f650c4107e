use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const CARRIER_ACCOUNTS: &str = "/carrier_accounts/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierAccountFilter {
    /// Include the service levels of each account.
    pub service_levels: Option<bool>,
    /// Carrier token, e.g. `usps`.
    pub carrier: Option<String>,
    pub account_id: Option<String>,
}

impl ShippoClient {
    pub async fn list_carrier_accounts(
        &self,
        params: &ListParams,
        filter: &CarrierAccountFilter,
    ) -> Result<Paginated> {
        let query = params
            .query()
            .param("service_levels", filter.service_levels)
            .param("carrier", filter.carrier.as_deref())
            .param("account_id", filter.account_id.as_deref());
        self.list_at(CARRIER_ACCOUNTS, &query).await
    }

    pub async fn get_carrier_account(&self, account_id: &str) -> Result<Entity> {
        self.get_at(&format!("{CARRIER_ACCOUNTS}{}", segment(account_id)))
            .await
    }

    pub async fn create_carrier_account<B: Serialize + ?Sized>(
        &self,
        account: &B,
    ) -> Result<Entity> {
        self.post_at(CARRIER_ACCOUNTS, Some(to_body(account)?)).await
    }

    pub async fn update_carrier_account<B: Serialize + ?Sized>(
        &self,
        account_id: &str,
        update: &B,
    ) -> Result<Entity> {
        self.put_at(
            &format!("{CARRIER_ACCOUNTS}{}", segment(account_id)),
            to_body(update)?,
        )
        .await
    }
}
