use serde::{Deserialize, Serialize};

/// 站内外跳转链接的描述。
///
/// 线上格式是 `{ kind, target, title? }`，`target` 的含义随 `kind` 变化；
/// 这里拆成各自带字段的变体，未识别的 kind 统一落到 `Unknown`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDeepLink", into = "RawDeepLink")]
pub enum DeepLinkDescriptor {
    /// 跳转到另一个小程序；`path` 为其入口页。
    MiniProgram { app_id: String, path: Option<String> },

    /// 在 web-view 包装页中打开网页。
    Web { url: String, title: Option<String> },

    /// 站内页面路径，可自带查询串。
    Local { path: String },

    /// 无法识别的链接，回到应用主页。
    Unknown,
}

impl DeepLinkDescriptor {
    /// 由线上的 (kind, target, title) 三元组构造。
    ///
    /// kind 取值：`mp` / `miniProgram`、`web`、`local`，其余都视为 `Unknown`。
    pub fn from_parts(kind: &str, target: impl Into<String>, title: Option<String>) -> Self {
        match kind {
            "mp" | "miniProgram" => DeepLinkDescriptor::MiniProgram {
                app_id: target.into(),
                path: title,
            },
            "web" => DeepLinkDescriptor::Web {
                url: target.into(),
                title,
            },
            "local" => DeepLinkDescriptor::Local {
                path: target.into(),
            },
            _ => DeepLinkDescriptor::Unknown,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DeepLinkDescriptor::MiniProgram { .. } => "miniProgram",
            DeepLinkDescriptor::Web { .. } => "web",
            DeepLinkDescriptor::Local { .. } => "local",
            DeepLinkDescriptor::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDeepLink {
    kind: String,
    #[serde(default)]
    target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl From<RawDeepLink> for DeepLinkDescriptor {
    fn from(raw: RawDeepLink) -> Self {
        DeepLinkDescriptor::from_parts(&raw.kind, raw.target, raw.title)
    }
}

impl From<DeepLinkDescriptor> for RawDeepLink {
    fn from(descriptor: DeepLinkDescriptor) -> Self {
        let kind = descriptor.kind().to_string();
        let (target, title) = match descriptor {
            DeepLinkDescriptor::MiniProgram { app_id, path } => (app_id, path),
            DeepLinkDescriptor::Web { url, title } => (url, title),
            DeepLinkDescriptor::Local { path } => (path, None),
            DeepLinkDescriptor::Unknown => (String::new(), None),
        };
        RawDeepLink {
            kind,
            target,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parts_map_target_by_kind() {
        assert_eq!(
            DeepLinkDescriptor::from_parts("mp", "wx123", Some("pages/index".into())),
            DeepLinkDescriptor::MiniProgram {
                app_id: "wx123".into(),
                path: Some("pages/index".into())
            }
        );
        assert_eq!(
            DeepLinkDescriptor::from_parts("web", "https://example.com", None),
            DeepLinkDescriptor::Web {
                url: "https://example.com".into(),
                title: None
            }
        );
        assert_eq!(
            DeepLinkDescriptor::from_parts("local", "/pages/a?b=1", Some("ignored".into())),
            DeepLinkDescriptor::Local {
                path: "/pages/a?b=1".into()
            }
        );
        assert_eq!(
            DeepLinkDescriptor::from_parts("app", "x", None),
            DeepLinkDescriptor::Unknown
        );
    }

    #[test]
    fn deserializes_wire_form() {
        let descriptor: DeepLinkDescriptor = serde_json::from_value(json!({
            "kind": "miniProgram",
            "target": "wx123",
        }))
        .unwrap();
        assert_eq!(
            descriptor,
            DeepLinkDescriptor::MiniProgram {
                app_id: "wx123".into(),
                path: None
            }
        );

        let descriptor: DeepLinkDescriptor =
            serde_json::from_value(json!({ "kind": "banner" })).unwrap();
        assert_eq!(descriptor, DeepLinkDescriptor::Unknown);
    }

    #[test]
    fn serializes_wire_form() {
        let value = serde_json::to_value(DeepLinkDescriptor::Web {
            url: "https://example.com".into(),
            title: Some("Example".into()),
        })
        .unwrap();
        assert_eq!(
            value,
            json!({ "kind": "web", "target": "https://example.com", "title": "Example" })
        );
    }
}
