use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 页面路由的类型：
/// - Stack：常规 push/replace 的页面，会在页面栈中累积
/// - Tab：tabBar 根页面，只能通过 switchTab 切换，不会增长页面栈
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Stack,
    Tab,
}

/// 业务中所有具名目的地的闭集合。
///
/// 调用方只通过这个枚举表达"要去哪"，具体路径由 `PathTable` 提供。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageRoute {
    /// 动态广场（tab，同时也是 go_home 的落点）
    Talk,
    /// 我的（tab）
    Mine,
    /// 应用主页，未知类型的 deep link 会落到这里
    Home,
    UserVip,
    UserShell,
    LoveValue,
    TalkAdd,
    UserPhone,
    IdentityAuth,
    UserMatch,
    Message,
    FaceValueInfo,
    /// 承载外部网页的 web-view 包装页
    WebView,
}

impl PageRoute {
    /// 全部路由，顺序即 `PathTable` 内部的存储顺序。
    pub const ALL: [PageRoute; 13] = [
        PageRoute::Talk,
        PageRoute::Mine,
        PageRoute::Home,
        PageRoute::UserVip,
        PageRoute::UserShell,
        PageRoute::LoveValue,
        PageRoute::TalkAdd,
        PageRoute::UserPhone,
        PageRoute::IdentityAuth,
        PageRoute::UserMatch,
        PageRoute::Message,
        PageRoute::FaceValueInfo,
        PageRoute::WebView,
    ];

    /// 人类可读的路由名，也是配置文件里 `[paths]` 的键。
    pub fn name(self) -> &'static str {
        match self {
            PageRoute::Talk => "talk",
            PageRoute::Mine => "mine",
            PageRoute::Home => "home",
            PageRoute::UserVip => "user_vip",
            PageRoute::UserShell => "user_shell",
            PageRoute::LoveValue => "love_value",
            PageRoute::TalkAdd => "talk_add",
            PageRoute::UserPhone => "user_phone",
            PageRoute::IdentityAuth => "identity_auth",
            PageRoute::UserMatch => "user_match",
            PageRoute::Message => "message",
            PageRoute::FaceValueInfo => "face_value_info",
            PageRoute::WebView => "web_view",
        }
    }

    pub fn from_name(name: &str) -> Option<PageRoute> {
        PageRoute::ALL.into_iter().find(|route| route.name() == name)
    }

    pub fn kind(self) -> RouteKind {
        match self {
            PageRoute::Talk | PageRoute::Mine => RouteKind::Tab,
            _ => RouteKind::Stack,
        }
    }

    /// 宿主 `pages.json` 中注册的默认路径。
    pub fn default_path(self) -> &'static str {
        match self {
            PageRoute::Talk => "/pages/talk/talk",
            PageRoute::Mine => "/pages/user/mine",
            PageRoute::Home => "/pages/home/home",
            PageRoute::UserVip => "/pages/user/vip",
            PageRoute::UserShell => "/pages/user/shell",
            PageRoute::LoveValue => "/pages/user/loveValue",
            PageRoute::TalkAdd => "/pages/talk/talkAdd",
            PageRoute::UserPhone => "/pages/user/phone",
            PageRoute::IdentityAuth => "/pages/user/identityAuth",
            PageRoute::UserMatch => "/pages/match/userMatch",
            PageRoute::Message => "/pages/message/message",
            PageRoute::FaceValueInfo => "/pages/user/faceValueInfo",
            PageRoute::WebView => "/pages/common/webView",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// push 时携带的查询参数。
///
/// 保留插入顺序，编码时按顺序输出；顺序本身没有语义。
/// 值使用 serde_json::Value，编码前统一转成字符串。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, Value)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数。
    ///
    /// 标量按 JS `String()` 的规则转成字符串；数组与对象输出为紧凑 JSON（`[1,2]`），
    /// 而 `URLSearchParams` 会输出 `1,2` 与 `[object Object]`。
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// 按插入顺序返回 (key, 字符串化后的 value)。
    pub fn string_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), coerce_to_string(value)))
    }

    /// 以 `application/x-www-form-urlencoded` 编码（空格编码为 `+`）。
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.string_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        // 非标量参数按紧凑 JSON 输出
        other => other.to_string(),
    }
}

fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => js_number_string(f),
        _ => n.to_string(),
    }
}

/// 按 JS `String(number)` 输出浮点数：整值不带小数部分，`-0` 为 `0`，
/// 十进制指数不在 [-6, 20] 内时写成 `1e+21` / `1e-7`。
fn js_number_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{f:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    match exp.parse::<i32>() {
        Ok(exp) if (-6..21).contains(&exp) => format!("{f}"),
        Ok(exp) if exp > 0 => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

/// 会话中的当前用户。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub phone_num: Option<String>,
}

impl User {
    /// 是否已绑定手机号（空字符串视为未绑定）。
    pub fn has_bound_phone(&self) -> bool {
        self.phone_num.as_deref().is_some_and(|num| !num.is_empty())
    }
}

/// 一个会话（私聊）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    /// 对方用户 id
    pub peer: String,
    #[serde(default)]
    pub unread_num: u32,
}

/// 导航之后写回 store 的选择状态。
///
/// 写入发生在导航调用返回之后，两者不是事务性的。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSideEffect {
    /// 设置当前聊天会话
    ActiveChat(Chat),
    /// 设置匹配页的候选用户
    MatchCandidate(User),
}

/// 确认弹窗的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Dismissed,
}
