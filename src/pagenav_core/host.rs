//! 导航核心依赖的外部协作方。
//!
//! 宿主原语、会话 store、提示服务都以 trait 注入，核心层不持有任何全局单例。

use async_trait::async_trait;

use crate::pagenav_core::error::HostError;
use crate::pagenav_core::gate::GateContext;
use crate::pagenav_core::state::{HostCommand, PageStack};
use crate::pagenav_core::types::{ConfirmOutcome, SelectionSideEffect};

/// 宿主运行时的页面栈原语。
///
/// 调用是同步的；非法路径、栈下溢等失败由宿主定义并原样返回。
pub trait NavigationHost: Send + Sync {
    /// 执行一条导航指令。
    fn apply(&self, command: HostCommand) -> Result<(), HostError>;

    /// 读取当前页面栈（getCurrentPages）。
    fn page_stack(&self) -> PageStack;

    /// 是否运行在完整 App 壳中（而非嵌入式的小程序/H5 形态）。
    ///
    /// App 壳下切 tab 前需要先把 tabBar 显示出来。
    fn is_app_shell(&self) -> bool;
}

/// 全局会话 store 的读写视图。
pub trait SessionStore: Send + Sync {
    /// 读取门禁所需的会话快照，每次调用都是最新值。
    fn gate_context(&self) -> GateContext;

    /// 写入导航附带的选择状态。
    fn write(&self, effect: SelectionSideEffect);
}

/// 提示 / 确认弹窗服务。
#[async_trait]
pub trait Prompter: Send + Sync {
    /// 轻提示（toast）。
    fn hint(&self, message: &str);

    /// 提示用户需要先登录。
    fn prompt_login(&self);

    /// 提示用户需要先绑定手机号。
    fn prompt_bind_phone(&self);

    /// 确认弹窗，等待用户作答。
    async fn confirm(&self, message: &str) -> ConfirmOutcome;
}
