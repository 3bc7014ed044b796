//! 工具模块
//!
//!     terminal.rs     终端进入 / 退出 raw mode 与备用屏幕
//!     logging.rs      tracing 订阅者，写入日志文件

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
