//! # domain-inventory-store
//!
//! Remote store contract for the domain inventory, plus an HTTP client for
//! the `/api/domains` endpoint.
//!
//! ## Endpoints
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | List | `GET /api/domains?depth=0&limit=250&sort=-createdAt` | `200 {"docs": [...]}` |
//! | Create | `POST /api/domains` with `{"name": "..."}` | `201 {"id","name","status"}` |
//! | Delete | `DELETE /api/domains/{id}` | `204` |
//!
//! `401` means no authenticated user; `400` and `5xx` carry a text body that
//! is surfaced through [`StoreError::server_message`].
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_inventory_store::{
//!     CreateDomainRequest, DomainStore, HttpDomainStore, HttpStoreConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpDomainStore::new(HttpStoreConfig {
//!         base_url: "http://localhost:3000".to_string(),
//!         ..HttpStoreConfig::default()
//!     })?;
//!
//!     let created = store
//!         .create_domain(&CreateDomainRequest::new(" Example.COM "))
//!         .await?;
//!     println!("{} ({})", created.name, created.status.label());
//!
//!     store.delete_domain(&created.id).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http_client;
mod traits;
mod types;

pub use client::{HttpDomainStore, HttpStoreConfig};
pub use error::{Result, StoreError};
pub use traits::DomainStore;
pub use types::{
    CreateDomainRequest, DomainRecord, DomainStatus, ListDomainsParams, normalize_domain_name,
};
