use super::{Entity, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use serde::Serialize;

const CARRIER_TEMPLATES: &str = "/parcel-templates";
const USER_TEMPLATES: &str = "/user-parcel-templates";

impl ShippoClient {
    /// Carrier-defined parcel templates, optionally narrowed to one carrier.
    ///
    /// `include` is one of `all`, `user` or `enabled`.
    pub async fn list_carrier_parcel_templates(
        &self,
        carrier: Option<&str>,
        include: Option<&str>,
    ) -> Result<Paginated> {
        let query = QueryBuilder::new()
            .param("carrier", carrier)
            .param("include", include);
        self.list_at(CARRIER_TEMPLATES, &query).await
    }

    pub async fn get_carrier_parcel_template(&self, token: &str) -> Result<Entity> {
        self.get_at(&format!("{CARRIER_TEMPLATES}/{}", segment(token)))
            .await
    }

    pub async fn list_user_parcel_templates(&self) -> Result<Paginated> {
        self.list_at(USER_TEMPLATES, &QueryBuilder::new()).await
    }

    pub async fn create_user_parcel_template<B: Serialize + ?Sized>(
        &self,
        template: &B,
    ) -> Result<Entity> {
        self.post_at(USER_TEMPLATES, Some(to_body(template)?)).await
    }

    pub async fn get_user_parcel_template(&self, template_id: &str) -> Result<Entity> {
        self.get_at(&format!("{USER_TEMPLATES}/{}", segment(template_id)))
            .await
    }

    pub async fn update_user_parcel_template<B: Serialize + ?Sized>(
        &self,
        template_id: &str,
        template: &B,
    ) -> Result<Entity> {
        self.put_at(
            &format!("{USER_TEMPLATES}/{}", segment(template_id)),
            to_body(template)?,
        )
        .await
    }

    pub async fn delete_user_parcel_template(&self, template_id: &str) -> Result<()> {
        self.delete_at(&format!("{USER_TEMPLATES}/{}", segment(template_id)))
            .await
    }
}
