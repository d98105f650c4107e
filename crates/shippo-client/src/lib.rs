//! Credential-scoped client for the Shippo REST API.
//!
//! Every operation funnels through [`ShippoClient::request`], which injects the
//! `ShippoToken` authorization header, performs exactly one HTTP call, and classifies the
//! outcome into a [`ShippoError`] or a decoded JSON value.
//!
//! A client holds the credentials of one caller. Build a fresh one per request; nothing in
//! this crate caches credentials or responses.

pub mod client;
pub mod credentials;
pub mod error;
pub mod query;
pub mod resources;

pub use client::{RequestOptions, ShippoClient};
pub use credentials::{Credentials, DEFAULT_BASE_URL};
pub use error::{DEFAULT_RETRY_AFTER_SECS, ErrorKind, Result, ShippoError};
pub use query::{QueryBuilder, QueryValue};
pub use resources::{
    CarrierAccountFilter, Entity, ListParams, OrderFilter, Paginated, ShipmentFilter,
    TransactionFilter,
};
