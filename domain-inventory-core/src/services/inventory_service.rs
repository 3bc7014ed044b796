//! 库存副作用执行服务

use std::sync::Arc;

use crate::error::{log_failure, CoreResult};
use crate::inventory::{CreateFailure, Effect, Inventory, InventoryMessage};
use crate::services::{DomainService, ServiceContext, SupportService};

/// Runs the [`Effect`]s produced by [`Inventory::dispatch`] against the
/// store and turns their outcomes into completion messages.
///
/// Failures never escape: each one is logged here and reported back as a
/// completion so the matching busy flag is cleared.
pub struct InventoryService {
    domains: DomainService,
    support: SupportService,
}

impl InventoryService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            domains: DomainService::new(ctx.clone()),
            support: SupportService::new(ctx),
        }
    }

    /// Initial listing.
    pub async fn load(&self) -> CoreResult<Inventory> {
        match self.domains.list_domains().await {
            Ok(records) => {
                log::info!(
                    "Loaded {} domains from the {} store",
                    records.len(),
                    self.domains.store_id()
                );
                Ok(Inventory::new(records))
            }
            Err(e) => {
                log_failure("Failed to load domains", &e);
                Err(e)
            }
        }
    }

    /// Execute one effect. Returns the completion to dispatch, or `None`
    /// for fire-and-forget effects.
    pub async fn run(&self, effect: Effect) -> Option<InventoryMessage> {
        match effect {
            Effect::DeleteDomain { id } => {
                let result = self.domains.delete_domain(&id).await.map_err(|e| {
                    log_failure(&format!("Failed to delete domain {id}"), &e);
                    e.to_string()
                });
                Some(InventoryMessage::DeleteFinished { id, result })
            }
            Effect::DeleteDomains { ids } => {
                let result = self.domains.delete_domains(&ids).await;
                if result.is_complete() {
                    log::info!("Selected domains deleted");
                } else {
                    log::error!(
                        "Failed to delete selected domains: {} of {} failed",
                        result.failures.len(),
                        result.requested.len()
                    );
                }
                Some(InventoryMessage::BulkDeleteFinished(result))
            }
            Effect::CreateDomain { name } => {
                let result = self.domains.create_domain(&name).await.map_err(|e| {
                    log_failure("Failed to add domain", &e);
                    CreateFailure::from(&e)
                });
                Some(InventoryMessage::CreateFinished(result))
            }
            Effect::QueueVerification { record } => {
                self.support.queue_verification(&record);
                None
            }
            Effect::ValidateBySupport => {
                self.support.validate_by_support().await;
                Some(InventoryMessage::SupportValidationFinished)
            }
        }
    }

    /// Dispatch `msg` and run any resulting effect to completion before
    /// returning. For callers that do not need overlapping operations.
    pub async fn process(&self, inventory: &mut Inventory, msg: InventoryMessage) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            if let Some(effect) = inventory.dispatch(msg) {
                next = self.run(effect).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::error::StoreError;
    use crate::inventory::{DialogPhase, CREATE_FAILED_FALLBACK, EMPTY_NAME_ERROR};
    use crate::test_utils::{create_test_context, seed_records};
    use crate::types::{DomainRecord, DomainStatus};

    #[tokio::test]
    async fn load_builds_inventory() {
        let (ctx, _store) = create_test_context(seed_records());
        let inventory = InventoryService::new(ctx).load().await.unwrap();
        assert_eq!(inventory.domains.records(), seed_records().as_slice());
    }

    #[tokio::test]
    async fn load_failure_is_returned() {
        let (ctx, store) = create_test_context(seed_records());
        store
            .set_list_error(Some(StoreError::Unauthorized {
                raw_message: Some("Unauthorized".into()),
            }))
            .await;
        let err = InventoryService::new(ctx).load().await.unwrap_err();
        assert!(err.is_expected());
    }

    #[tokio::test]
    async fn add_round_trip() {
        let (ctx, store) = create_test_context(seed_records());
        store
            .set_next_created(DomainRecord::new("d4", "delta.com", DomainStatus::Pending))
            .await;
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());
        inv.dispatch(InventoryMessage::ToggleSelection("d2".into()));

        service.process(&mut inv, InventoryMessage::OpenAddDialog).await;
        service
            .process(&mut inv, InventoryMessage::UpdateDialogName(" Delta.COM ".into()))
            .await;
        service.process(&mut inv, InventoryMessage::SubmitAddDialog).await;

        assert_eq!(store.create_calls().await, vec!["delta.com".to_string()]);
        assert_eq!(
            inv.domains.records()[0],
            DomainRecord::new("d4", "delta.com", DomainStatus::Pending)
        );
        assert_eq!(inv.domains.records().len(), 4);
        assert!(inv.domains.selected_ids().is_empty());
        assert_eq!(inv.dialog.phase(), DialogPhase::Closed);
    }

    #[tokio::test]
    async fn whitespace_submit_makes_no_call() {
        let (ctx, store) = create_test_context(seed_records());
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());

        service.process(&mut inv, InventoryMessage::OpenAddDialog).await;
        service
            .process(&mut inv, InventoryMessage::UpdateDialogName("   ".into()))
            .await;
        service.process(&mut inv, InventoryMessage::SubmitAddDialog).await;

        assert!(store.create_calls().await.is_empty());
        assert_eq!(inv.dialog.error(), Some(EMPTY_NAME_ERROR));
        assert_eq!(inv.dialog.phase(), DialogPhase::Editing);
    }

    #[tokio::test]
    async fn create_failure_shows_server_message() {
        let (ctx, store) = create_test_context(seed_records());
        store
            .set_create_error(Some(StoreError::ServerError {
                status: 500,
                raw_message: Some("Failed to create domain".into()),
            }))
            .await;
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());

        service.process(&mut inv, InventoryMessage::OpenAddDialog).await;
        service
            .process(&mut inv, InventoryMessage::UpdateDialogName("alpha2.com".into()))
            .await;
        service.process(&mut inv, InventoryMessage::SubmitAddDialog).await;

        assert_eq!(inv.dialog.error(), Some("Failed to create domain"));
        assert!(!inv.dialog.is_submitting());
        assert_eq!(inv.domains.records().len(), 3);
    }

    #[tokio::test]
    async fn transport_failure_uses_fallback() {
        let (ctx, store) = create_test_context(seed_records());
        store
            .set_create_error(Some(StoreError::NetworkError {
                detail: "connection refused".into(),
            }))
            .await;
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());

        service.process(&mut inv, InventoryMessage::OpenAddDialog).await;
        service
            .process(&mut inv, InventoryMessage::UpdateDialogName("alpha2.com".into()))
            .await;
        service.process(&mut inv, InventoryMessage::SubmitAddDialog).await;

        assert_eq!(inv.dialog.error(), Some(CREATE_FAILED_FALLBACK));
    }

    #[tokio::test]
    async fn failed_single_delete_keeps_row() {
        let (ctx, store) = create_test_context(seed_records());
        store.fail_delete("d2").await;
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());

        service
            .process(&mut inv, InventoryMessage::DeleteDomain("d2".into()))
            .await;

        assert_eq!(inv.domains.records().len(), 3);
        assert!(inv.domains.pending_deletes().is_empty());
    }

    #[tokio::test]
    async fn bulk_delete_is_all_or_nothing() {
        let (ctx, store) = create_test_context(seed_records());
        store.fail_delete("d2").await;
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());

        inv.dispatch(InventoryMessage::SelectAllVisible(true));
        service
            .process(&mut inv, InventoryMessage::DeleteSelected)
            .await;

        assert_eq!(inv.domains.records(), seed_records().as_slice());
        let mut selected: Vec<_> = inv.domains.selected_ids().iter().cloned().collect();
        selected.sort();
        assert_eq!(selected, vec!["d1", "d2", "d3"]);
        assert!(!inv.domains.is_bulk_deleting());

        // d1 and d3 are gone remotely until the next listing
        let remote: Vec<_> = store.domains().await.into_iter().map(|d| d.id).collect();
        assert_eq!(remote, vec!["d2"]);
    }

    fn spawn_effect(
        service: &Arc<InventoryService>,
        effect: Effect,
        tx: &mpsc::UnboundedSender<InventoryMessage>,
    ) {
        let service = service.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(msg) = service.run(effect).await {
                let _ = tx.send(msg);
            }
        });
    }

    fn ids(inv: &Inventory) -> Vec<&str> {
        inv.domains.records().iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn single_delete_independent_of_concurrent_bulk() {
        let (ctx, store) = create_test_context(seed_records());
        let gate = store.hold_delete("d1").await;
        store.fail_delete("d3").await;
        let service = Arc::new(InventoryService::new(ctx));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut inv = Inventory::new(seed_records());

        let single = inv
            .dispatch(InventoryMessage::DeleteDomain("d1".into()))
            .unwrap();
        inv.dispatch(InventoryMessage::ToggleSelection("d2".into()));
        inv.dispatch(InventoryMessage::ToggleSelection("d3".into()));
        let bulk = inv.dispatch(InventoryMessage::DeleteSelected).unwrap();
        spawn_effect(&service, single, &tx);
        spawn_effect(&service, bulk, &tx);

        // bulk resolves first and fails as a whole
        let first = rx.recv().await.unwrap();
        assert!(matches!(first, InventoryMessage::BulkDeleteFinished(_)));
        inv.dispatch(first);
        assert_eq!(ids(&inv), vec!["d1", "d2", "d3"]);
        assert!(inv.domains.is_deleting("d1"));

        gate.notify_one();
        let second = rx.recv().await.unwrap();
        inv.dispatch(second);
        assert_eq!(ids(&inv), vec!["d2", "d3"]);
        assert!(inv.domains.pending_deletes().is_empty());
    }

    #[tokio::test]
    async fn completions_apply_in_resolution_order() {
        let (ctx, store) = create_test_context(seed_records());
        let gate_d1 = store.hold_delete("d1").await;
        let gate_d2 = store.hold_delete("d2").await;
        let service = Arc::new(InventoryService::new(ctx));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut inv = Inventory::new(seed_records());

        for id in ["d1", "d2"] {
            let effect = inv
                .dispatch(InventoryMessage::DeleteDomain(id.into()))
                .unwrap();
            spawn_effect(&service, effect, &tx);
        }

        gate_d2.notify_one();
        inv.dispatch(rx.recv().await.unwrap());
        assert_eq!(ids(&inv), vec!["d1", "d3"]);
        assert!(inv.domains.is_deleting("d1"));

        gate_d1.notify_one();
        inv.dispatch(rx.recv().await.unwrap());
        assert_eq!(ids(&inv), vec!["d3"]);
    }

    #[tokio::test]
    async fn search_and_verify_stay_available_during_bulk() {
        let (ctx, store) = create_test_context(seed_records());
        let gate = store.hold_delete("d1").await;
        let service = Arc::new(InventoryService::new(ctx));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut inv = Inventory::new(seed_records());

        inv.dispatch(InventoryMessage::ToggleSelection("d1".into()));
        let bulk = inv.dispatch(InventoryMessage::DeleteSelected).unwrap();
        spawn_effect(&service, bulk, &tx);

        inv.dispatch(InventoryMessage::SetSearchTerm("gam".into()));
        assert_eq!(inv.view().rows.len(), 1);
        assert!(inv
            .dispatch(InventoryMessage::VerifyDomain("d3".into()))
            .is_some());
        assert_eq!(inv.dispatch(InventoryMessage::DeleteSelected), None);

        gate.notify_one();
        inv.dispatch(rx.recv().await.unwrap());
        assert_eq!(ids(&inv), vec!["d2", "d3"]);
        assert!(!inv.domains.is_bulk_deleting());
    }

    #[tokio::test]
    async fn verify_is_fire_and_forget() {
        let (ctx, store) = create_test_context(seed_records());
        let service = InventoryService::new(ctx);
        let mut inv = Inventory::new(seed_records());

        service
            .process(&mut inv, InventoryMessage::VerifyDomain("d1".into()))
            .await;

        assert_eq!(inv.domains.records(), seed_records().as_slice());
        assert!(store.delete_calls().await.is_empty());
        assert!(store.create_calls().await.is_empty());
    }
}
