//! Domain Inventory Core Library
//!
//! Provides core business logic for the domain inventory, including:
//! - Inventory state machine (records, search, selection, delete progress)
//! - Add-domain dialog state machine
//! - View-model projection for presentation surfaces
//! - Services that execute remote effects (Domain / Support / Inventory Service)
//!
//! This library is platform-independent; the remote store is injected through
//! the [`DomainStore`] trait.

pub mod error;
pub mod inventory;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use domain_inventory_store::DomainStore;
pub use error::{CoreError, CoreResult};
pub use inventory::{Effect, Inventory, InventoryMessage, InventoryView};
pub use services::{InventoryService, ServiceContext};
