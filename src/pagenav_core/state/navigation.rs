//
// ========== 宿主页面栈快照与导航指令 ==========
//

/// 页面栈中的一页，对应宿主 `getCurrentPages()` 返回的一个元素。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFrame {
    /// 宿主给出的页面 route，没有前导 `/`，例如 "pages/talk/talk"。
    pub route: String,

    /// 打开此页面时携带的查询参数（已解码）。
    pub query: Vec<(String, String)>,
}

impl PageFrame {
    pub fn new(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            query: Vec::new(),
        }
    }

    /// 由 push 时使用的 url 还原页面帧：拆出 route 与查询串。
    pub fn from_url(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        Self {
            route: path.trim_start_matches('/').to_string(),
            query: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// 带前导 `/` 的绝对路径。
    pub fn absolute_path(&self) -> String {
        format!("/{}", self.route.trim_start_matches('/'))
    }
}

/// 宿主页面栈的快照（从底到顶）。
///
/// 与宿主自身的栈不同，这里允许为空：稳态下不会出现，但查询方必须能处理。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStack {
    pub frames: Vec<PageFrame>,
}

impl PageStack {
    pub fn new(frames: Vec<PageFrame>) -> Self {
        Self { frames }
    }

    /// 栈顶页面。
    pub fn top(&self) -> Option<&PageFrame> {
        self.frames.last()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// 交给宿主执行的一条导航指令。
///
/// 每个宿主原语对应一个变体，Navigator 只通过它与宿主交互。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// 保留当前页面，打开新页面（navigateTo）。
    Push { url: String },

    /// 关闭当前页面，打开新页面（redirectTo）。
    Replace { url: String },

    /// 关闭所有页面，打开新页面（reLaunch）。
    Relaunch { url: String },

    /// 切换到 tabBar 根页面（switchTab），url 不能带参数。
    SwitchTab { url: String },

    /// 返回上一页（navigateBack），固定只退一层。
    Back,

    /// 显示 tabBar。
    ShowTabBar,

    /// 打开另一个小程序。
    OpenMiniProgram {
        app_id: String,
        path: Option<String>,
    },
}

impl HostCommand {
    /// 宿主原语名，用于日志与错误信息。
    pub fn name(&self) -> &'static str {
        match self {
            HostCommand::Push { .. } => "navigateTo",
            HostCommand::Replace { .. } => "redirectTo",
            HostCommand::Relaunch { .. } => "reLaunch",
            HostCommand::SwitchTab { .. } => "switchTab",
            HostCommand::Back => "navigateBack",
            HostCommand::ShowTabBar => "showTabBar",
            HostCommand::OpenMiniProgram { .. } => "navigateToMiniProgram",
        }
    }

    /// 指令携带的目标 url（没有目标的指令返回 None）。
    pub fn url(&self) -> Option<&str> {
        match self {
            HostCommand::Push { url }
            | HostCommand::Replace { url }
            | HostCommand::Relaunch { url }
            | HostCommand::SwitchTab { url } => Some(url.as_str()),
            HostCommand::Back | HostCommand::ShowTabBar | HostCommand::OpenMiniProgram { .. } => {
                None
            }
        }
    }
}
