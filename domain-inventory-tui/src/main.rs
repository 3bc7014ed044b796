//! Domain Inventory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与业务服务 (`backend/`)
//!
//! 启动顺序：
//!
//!     LocalConfigService::load()      // 配置文件 + 环境变量
//!     init_logging()                  // 日志写入文件，stdout 留给界面
//!     Runtime::new()                  // 后台执行远程调用的 tokio 运行时
//!     CoreService::load()             // 初始列表；未登录时显示登录提示
//!     init_terminal()                 // raw mode + 备用屏幕
//!     app::run()                      // 主循环
//!     restore_terminal()              // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{AppConfig, ConfigService, CoreService, LocalConfigService};
use model::App;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 加载配置
    let config_service = LocalConfigService::new();
    let config: AppConfig = config_service.load()?;

    // 2. 初始化日志
    init_logging(&config.log_file_path())?;
    tracing::info!(
        "Starting Domain Inventory TUI (config: {}, store: {})",
        config_service.path().display(),
        config.base_url
    );
    view::theme::set_theme(config.theme);

    // 3. 创建运行时与核心服务
    let runtime = tokio::runtime::Runtime::new()?;
    let mut core = CoreService::new(runtime.handle().clone(), &config)?;

    // 4. 初始加载
    let mut app = runtime.block_on(initial_state(&core));

    // 5. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut core);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("Domain Inventory TUI stopped");
    result
}

/// 首次列表决定初始界面
async fn initial_state(core: &CoreService) -> App {
    match core.load().await {
        Ok(inventory) => App::new(inventory),
        Err(e) => App::load_failed(&e),
    }
}
