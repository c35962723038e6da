use crate::pagenav_core::types::{PageRoute, RouteKind};

/// 单条页面路由的元信息。
///
/// 描述"这是哪个页面"、"路径是什么"、"用 push 还是 switchTab 打开"。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// 对应的具名路由。
    pub route: PageRoute,

    /// 绝对路径（带前导 `/`，不带查询串）。
    ///
    /// 例如：
    /// - "/pages/talk/talk"
    /// - "/pages/user/vip"
    pub path: String,

    /// Stack 页面 / Tab 根页面。
    pub kind: RouteKind,
}

impl PageMeta {
    pub fn new(route: PageRoute, path: impl Into<String>) -> Self {
        Self {
            route,
            path: path.into(),
            kind: route.kind(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.route.name()
    }

    pub fn is_tab(&self) -> bool {
        self.kind == RouteKind::Tab
    }
}
