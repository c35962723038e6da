use std::collections::BTreeMap;

use serde::Deserialize;

use crate::pagenav_core::error::ConfigError;

/// 导航层的可配置项。
///
/// 所有字段都有默认值，空配置即可工作；宿主可以通过 TOML 覆盖：
///
/// ```toml
/// web_view_path = "/pages/common/webView"
///
/// [paths]
/// user_vip = "/pages/vip/index"
///
/// [messages]
/// platform_restricted = "..."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// 路由名 -> 路径 的覆盖表，键见 `PageRoute::name`。
    pub paths: BTreeMap<String, String>,

    /// web-view 包装页的路径，外部网页通过它打开。
    ///
    /// 若 `[paths]` 中同时给了 `web_view`，以 `[paths]` 为准。
    pub web_view_path: Option<String>,

    /// 提示与确认文案。
    pub messages: Messages,
}

impl NavConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// 面向用户的文案。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// 受限平台（iOS）访问付费功能时的提示。
    pub platform_restricted: String,

    /// 打开颜值分介绍前的确认文案。
    pub face_value_confirm: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            platform_restricted: "由于ios相关规则限制，ios系统被禁止支持此类付费功能".to_string(),
            face_value_confirm: "是否查看颜值分介绍".to_string(),
        }
    }
}
