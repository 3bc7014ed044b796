use std::sync::Arc;

use anyhow::Result;
use domain_inventory_core::{
    CoreResult, DomainStore, Effect, Inventory, InventoryMessage, InventoryService, ServiceContext,
};
use domain_inventory_core::types::InventorySettings;
use domain_inventory_store::HttpDomainStore;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::config_service::AppConfig;

/// TUI 核心服务
///
/// 在 tokio 运行时上执行库存副作用，完成消息经 channel 送回主循环。
pub struct CoreService {
    runtime: Handle,
    inventory: Arc<InventoryService>,
    completions_tx: UnboundedSender<InventoryMessage>,
    completions_rx: UnboundedReceiver<InventoryMessage>,
}

impl CoreService {
    /// 按配置创建 HTTP 存储并组装服务
    pub fn new(runtime: Handle, config: &AppConfig) -> Result<Self> {
        let store = HttpDomainStore::new(config.store_config())?;
        Ok(Self::with_store(
            runtime,
            Arc::new(store),
            config.inventory_settings(),
        ))
    }

    pub fn with_store(
        runtime: Handle,
        store: Arc<dyn DomainStore>,
        settings: InventorySettings,
    ) -> Self {
        let ctx = Arc::new(ServiceContext::new(store, settings));
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            inventory: Arc::new(InventoryService::new(ctx)),
            completions_tx,
            completions_rx,
        }
    }

    /// 初始加载
    pub async fn load(&self) -> CoreResult<Inventory> {
        self.inventory.load().await
    }

    /// 后台执行副作用，不阻塞 UI
    pub fn spawn(&self, effect: Effect) {
        let service = self.inventory.clone();
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            if let Some(done) = service.run(effect).await {
                // 接收端只在退出时关闭
                if tx.send(done).is_err() {
                    log::debug!("Completion dropped: UI already closed");
                }
            }
        });
    }

    /// 取出一条已完成的消息
    pub fn try_recv(&mut self) -> Option<InventoryMessage> {
        self.completions_rx.try_recv().ok()
    }
}
