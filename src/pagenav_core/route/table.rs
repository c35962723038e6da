use matchit::Router as MatchitRouter;
use tracing::debug;

use super::meta::PageMeta;
use crate::pagenav_core::config::NavConfig;
use crate::pagenav_core::error::ConfigError;
use crate::pagenav_core::types::{PageRoute, QueryParams};

/// 路径表：
///
/// - 所有 PageMeta（Vec，下标即 `PageRoute` 的序号）
/// - path -> PageRoute 的反查（基于 matchit），用于识别当前页面
#[derive(Debug)]
pub struct PathTable {
    metas: Vec<PageMeta>,

    /// 例如：
    ///     "/pages/talk/talk" -> PageRoute::Talk
    ///     "/pages/user/vip"  -> PageRoute::UserVip
    path_router: MatchitRouter<PageRoute>,
}

impl PathTable {
    /// 由配置构建路径表，未覆盖的路由使用默认路径。
    ///
    /// 路径必须以 `/` 开头、不能带查询串，且互不重复。
    pub fn from_config(config: &NavConfig) -> Result<Self, ConfigError> {
        if let Some(name) = config
            .paths
            .keys()
            .find(|name| PageRoute::from_name(name).is_none())
        {
            return Err(ConfigError::UnknownRoute { name: name.clone() });
        }

        let mut metas = Vec::with_capacity(PageRoute::ALL.len());
        let mut path_router = MatchitRouter::new();
        for route in PageRoute::ALL {
            let path = match config.paths.get(route.name()) {
                Some(path) => path.clone(),
                None if route == PageRoute::WebView => config
                    .web_view_path
                    .clone()
                    .unwrap_or_else(|| route.default_path().to_string()),
                None => route.default_path().to_string(),
            };
            validate_path(route, &path)?;
            path_router
                .insert(path.clone(), route)
                .map_err(|source| ConfigError::Conflict {
                    path: path.clone(),
                    source,
                })?;
            metas.push(PageMeta::new(route, path));
        }

        debug!(target: "pagenav", routes = metas.len(), "path table built");
        Ok(Self { metas, path_router })
    }

    pub fn meta(&self, route: PageRoute) -> &PageMeta {
        &self.metas[route.index()]
    }

    pub fn path(&self, route: PageRoute) -> &str {
        &self.meta(route).path
    }

    pub fn metas(&self) -> &[PageMeta] {
        &self.metas
    }

    /// 应用主页路径，未知 deep link 与 `to_web_home` 都落在这里。
    pub fn home_path(&self) -> &str {
        self.path(PageRoute::Home)
    }

    /// 根据页面路径反查具名路由。
    ///
    /// 查询串会被忽略；缺少前导 `/` 的路径（宿主页面栈里的 `route` 字段就是这样）会被补齐。
    pub fn route_of(&self, path: &str) -> Option<PageRoute> {
        let bare = path.split_once('?').map_or(path, |(bare, _)| bare);
        let absolute;
        let lookup = if bare.starts_with('/') {
            bare
        } else {
            absolute = format!("/{bare}");
            absolute.as_str()
        };
        self.path_router
            .at(lookup)
            .ok()
            .map(|matched| *matched.value)
    }

    /// 外部网页的包装页路径：`<web_view>?url=<url>[&title=<title>]`。
    pub fn web_wrapper_path(&self, url: &str, title: Option<&str>) -> String {
        let mut params = QueryParams::new().with("url", url);
        if let Some(title) = title {
            params.insert("title", title);
        }
        format!("{}?{}", self.path(PageRoute::WebView), params.encode())
    }
}

fn validate_path(route: PageRoute, path: &str) -> Result<(), ConfigError> {
    let reason = if !path.starts_with('/') {
        Some("must start with `/`")
    } else if path.len() == 1 {
        Some("must name a page")
    } else if path.contains(['?', '#']) {
        Some("must not carry a query or fragment")
    } else if path.contains(['{', '}']) || path.chars().any(char::is_whitespace) {
        Some("contains reserved characters")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::InvalidPath {
            route,
            path: path.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table() -> PathTable {
        PathTable::from_config(&NavConfig::default()).unwrap()
    }

    #[test]
    fn defaults_cover_every_route() {
        let table = default_table();
        for route in PageRoute::ALL {
            assert_eq!(table.path(route), route.default_path());
            assert_eq!(table.meta(route).route, route);
        }
    }

    #[test]
    fn route_of_accepts_stack_style_paths() {
        let table = default_table();
        assert_eq!(table.route_of("/pages/talk/talk"), Some(PageRoute::Talk));
        assert_eq!(table.route_of("pages/user/vip"), Some(PageRoute::UserVip));
        assert_eq!(
            table.route_of("/pages/message/message?id=3"),
            Some(PageRoute::Message)
        );
        assert_eq!(table.route_of("/pages/unknown"), None);
    }

    #[test]
    fn overrides_replace_default_paths() {
        let mut config = NavConfig::default();
        config
            .paths
            .insert("user_vip".into(), "/pages/vip/index".into());
        config.web_view_path = Some("/pages/web/index".into());
        let table = PathTable::from_config(&config).unwrap();
        assert_eq!(table.path(PageRoute::UserVip), "/pages/vip/index");
        assert_eq!(table.route_of("/pages/vip/index"), Some(PageRoute::UserVip));
        assert_eq!(table.route_of("/pages/user/vip"), None);
        assert_eq!(table.path(PageRoute::WebView), "/pages/web/index");
    }

    #[test]
    fn unknown_route_name_is_rejected() {
        let mut config = NavConfig::default();
        config.paths.insert("vip".into(), "/pages/vip".into());
        let err = PathTable::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRoute { name } if name == "vip"));
    }

    #[test]
    fn malformed_paths_are_rejected() {
        for bad in ["pages/no/slash", "/", "/pages/a?b=1", "/pages/{id}", "/pages/a b"] {
            let mut config = NavConfig::default();
            config.paths.insert("love_value".into(), bad.into());
            let err = PathTable::from_config(&config).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidPath { route: PageRoute::LoveValue, .. }),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn duplicate_paths_conflict() {
        let mut config = NavConfig::default();
        config
            .paths
            .insert("love_value".into(), "/pages/user/vip".into());
        let err = PathTable::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Conflict { path, .. } if path == "/pages/user/vip"));
    }

    #[test]
    fn web_wrapper_path_encodes_url_and_title() {
        let table = default_table();
        assert_eq!(
            table.web_wrapper_path("https://example.com", Some("Example")),
            "/pages/common/webView?url=https%3A%2F%2Fexample.com&title=Example"
        );
        assert_eq!(
            table.web_wrapper_path("https://example.com/a?b=c", None),
            "/pages/common/webView?url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc"
        );
    }
}
