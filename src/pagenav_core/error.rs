use thiserror::Error;

use crate::pagenav_core::types::PageRoute;

/// 宿主导航原语返回的失败。
///
/// 这些都属于编程错误（路径写错、栈下溢等），核心层不捕获也不重试，原样向上抛。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("invalid page path `{path}`")]
    InvalidPath { path: String },

    #[error("page stack underflow")]
    StackUnderflow,

    #[error("host rejected `{command}`: {reason}")]
    Rejected {
        command: &'static str,
        reason: String,
    },
}

/// 导航调用的错误。
///
/// 门禁未通过不是错误，见 `NavOutcome::Fallback`。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NavError {
    #[error(transparent)]
    Host(#[from] HostError),

    /// 查询当前页面时页面栈为空。
    #[error("page stack is empty")]
    EmptyStack,
}

/// 加载或校验导航配置时的错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse navigation config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown route `{name}` in [paths]")]
    UnknownRoute { name: String },

    #[error("invalid path `{path}` for route {route:?}: {reason}")]
    InvalidPath {
        route: PageRoute,
        path: String,
        reason: &'static str,
    },

    #[error("path `{path}` is registered twice")]
    Conflict {
        path: String,
        #[source]
        source: matchit::InsertError,
    },
}
