//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!
//!     while let Some(done) = core.try_recv() {        // 取回后台完成的副作用
//!         update::update(&mut app, Completed(done))       // 按到达顺序交给状态机
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询输入，最长等待 100ms
//!         let msg = handle_event(event, &app);            // 原始事件 → 消息
//!         if let Some(effect) = update::update(&mut app, msg) {
//!             core.spawn(effect)                          // 远程调用放到 tokio 上执行
//!         }
//!     }
//! }
//!
//! 副作用在后台并发执行，UI 不等待；删除、批量删除、添加、支持验证
//! 互相独立，完成顺序任意。

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, core: &mut CoreService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台完成的副作用
        while let Some(done) = core.try_recv() {
            if let Some(effect) = update::update(app, AppMessage::Completed(done)) {
                core.spawn(effect);
            }
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            if let Some(effect) = update::update(app, msg) {
                core.spawn(effect);
            }
        }
    }

    Ok(())
}
