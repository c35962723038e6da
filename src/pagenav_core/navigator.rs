use std::sync::Arc;

use tracing::{debug, warn};

use crate::pagenav_core::error::NavError;
use crate::pagenav_core::host::NavigationHost;
use crate::pagenav_core::route::PathTable;
use crate::pagenav_core::state::{HostCommand, PageFrame};
use crate::pagenav_core::types::{PageRoute, QueryParams};

/// 宿主导航原语的统一入口。
///
/// 只负责"怎么跳"：拼接查询串、选择原语、切 tab 前显示 tabBar。
/// "能不能跳"由 `DestinationResolver` 决定。
pub struct Navigator {
    host: Arc<dyn NavigationHost>,
    table: Arc<PathTable>,
}

impl Navigator {
    pub fn new(host: Arc<dyn NavigationHost>, table: Arc<PathTable>) -> Self {
        Self { host, table }
    }

    pub fn table(&self) -> &PathTable {
        &self.table
    }

    /// 保留当前页面并打开 `path`。
    ///
    /// `params` 非空时按插入顺序编码并以 `?` 拼接到路径后。
    pub fn push_with_params(
        &self,
        path: &str,
        params: Option<&QueryParams>,
    ) -> Result<(), NavError> {
        let url = match params {
            Some(params) if !params.is_empty() => format!("{path}?{}", params.encode()),
            _ => path.to_string(),
        };
        self.issue(HostCommand::Push { url })
    }

    pub fn push(&self, path: &str) -> Result<(), NavError> {
        self.push_with_params(path, None)
    }

    /// 关闭当前页面并打开 `path`，不做参数编码。
    pub fn replace(&self, path: &str) -> Result<(), NavError> {
        self.issue(HostCommand::Replace {
            url: path.to_string(),
        })
    }

    /// 清空页面栈，以 `path` 作为唯一页面。
    pub fn reset_to_root(&self, path: &str) -> Result<(), NavError> {
        self.issue(HostCommand::Relaunch {
            url: path.to_string(),
        })
    }

    /// 切换到 tabBar 根页面。
    ///
    /// App 壳下 tabBar 可能被页面隐藏，隐藏状态下切 tab 用户看不到变化，所以先显示。
    pub fn switch_root_tab(&self, path: &str) -> Result<(), NavError> {
        if self.host.is_app_shell() {
            self.issue(HostCommand::ShowTabBar)?;
        }
        self.issue(HostCommand::SwitchTab {
            url: path.to_string(),
        })
    }

    /// 返回上一页。
    pub fn go_back(&self) -> Result<(), NavError> {
        self.issue(HostCommand::Back)
    }

    /// 打开另一个小程序，`path` 为其入口页。
    pub fn open_mini_program(&self, app_id: &str, path: Option<&str>) -> Result<(), NavError> {
        self.issue(HostCommand::OpenMiniProgram {
            app_id: app_id.to_string(),
            path: path.map(str::to_string),
        })
    }

    /// 按具名路由跳转：tab 页走 switchTab，其余走 push。
    pub fn open(&self, route: PageRoute) -> Result<(), NavError> {
        let meta = self.table.meta(route);
        if meta.is_tab() {
            self.switch_root_tab(&meta.path)
        } else {
            self.push(&meta.path)
        }
    }

    /// 栈顶页面。
    pub fn current_page(&self) -> Option<PageFrame> {
        self.host.page_stack().frames.pop()
    }

    /// 栈顶页面的绝对路径（带前导 `/`）。
    pub fn current_page_path(&self) -> Result<String, NavError> {
        match self.current_page() {
            Some(frame) => Ok(frame.absolute_path()),
            None => {
                warn!(target: "pagenav", "current page requested on an empty page stack");
                Err(NavError::EmptyStack)
            }
        }
    }

    /// 栈顶页面对应的具名路由，未注册的页面返回 None。
    pub fn current_route(&self) -> Option<PageRoute> {
        self.current_page()
            .and_then(|frame| self.table.route_of(&frame.route))
    }

    fn issue(&self, command: HostCommand) -> Result<(), NavError> {
        debug!(
            target: "pagenav",
            command = command.name(),
            url = command.url().unwrap_or_default(),
            "issuing host command"
        );
        self.host.apply(command)?;
        Ok(())
    }
}
