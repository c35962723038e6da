use std::sync::Arc;

use tracing::{debug, info};

use super::deep_link::DeepLinkDescriptor;
use crate::pagenav_core::config::{Messages, NavConfig};
use crate::pagenav_core::error::{ConfigError, NavError};
use crate::pagenav_core::gate::{Fallback, GatePolicy, GateResult, default_gate_policy};
use crate::pagenav_core::host::{NavigationHost, Prompter, SessionStore};
use crate::pagenav_core::navigator::Navigator;
use crate::pagenav_core::route::PathTable;
use crate::pagenav_core::types::{Chat, ConfirmOutcome, PageRoute, SelectionSideEffect, User};

/// 一次具名导航的结果。
///
/// 门禁拦截不是错误：调用方拿到 `Fallback` 时兜底动作已经执行过了。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// 已向宿主发出导航指令。
    Navigated,

    /// 门禁未通过，已执行对应的兜底动作。
    Fallback(Fallback),

    /// 用户在确认弹窗中取消。
    Declined,

    /// 只更新了 store，按约定不发导航指令。
    Suppressed,
}

/// 具名目的地与 deep link 的分发层。
///
/// 流程：读会话快照 → 按目的地的门禁链检查 → 通过则交给 Navigator，未通过则执行兜底。
pub struct DestinationResolver {
    navigator: Navigator,
    store: Arc<dyn SessionStore>,
    prompter: Arc<dyn Prompter>,
    policy: GatePolicy,
    messages: Messages,
}

impl DestinationResolver {
    pub fn new(
        host: Arc<dyn NavigationHost>,
        store: Arc<dyn SessionStore>,
        prompter: Arc<dyn Prompter>,
        config: &NavConfig,
    ) -> Result<Self, ConfigError> {
        let table = Arc::new(PathTable::from_config(config)?);
        Ok(Self {
            navigator: Navigator::new(host, table),
            store,
            prompter,
            policy: default_gate_policy(),
            messages: config.messages.clone(),
        })
    }

    /// 替换默认门禁策略。
    pub fn with_policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    //
    // ========== deep link ==========
    //

    /// 按链接类型分发，每个描述恰好产生一次导航。
    pub fn dispatch(&self, descriptor: &DeepLinkDescriptor) -> Result<(), NavError> {
        debug!(target: "pagenav", kind = descriptor.kind(), "dispatching deep link");
        match descriptor {
            DeepLinkDescriptor::MiniProgram { app_id, path } => {
                self.navigator.open_mini_program(app_id, path.as_deref())
            }
            DeepLinkDescriptor::Web { url, title } => self.to_web(url, title.as_deref()),
            DeepLinkDescriptor::Local { path } => self.navigator.push(path),
            DeepLinkDescriptor::Unknown => self.to_web_home(),
        }
    }

    /// 线上三元组形式的 `dispatch`。
    pub fn dispatch_parts(
        &self,
        kind: &str,
        target: &str,
        title: Option<&str>,
    ) -> Result<(), NavError> {
        let descriptor =
            DeepLinkDescriptor::from_parts(kind, target, title.map(str::to_string));
        self.dispatch(&descriptor)
    }

    /// 在 web-view 包装页中打开网页。
    pub fn to_web(&self, url: &str, title: Option<&str>) -> Result<(), NavError> {
        let path = self.navigator.table().web_wrapper_path(url, title);
        self.navigator.push(&path)
    }

    /// 打开应用主页。
    pub fn to_web_home(&self) -> Result<(), NavError> {
        self.navigator.push(self.navigator.table().home_path())
    }

    //
    // ========== 具名目的地 ==========
    //

    /// 经门禁检查后打开任意具名路由。
    pub fn to_route(&self, route: PageRoute) -> Result<NavOutcome, NavError> {
        if self.policy.is_gated(route) {
            let ctx = self.store.gate_context();
            if let GateResult::Fallback(fallback) = self.policy.evaluate(route, &ctx) {
                self.run_fallback(route, fallback);
                return Ok(NavOutcome::Fallback(fallback));
            }
        }
        self.navigator.open(route)?;
        Ok(NavOutcome::Navigated)
    }

    /// 会员页（付费功能）。
    pub fn to_vip_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::UserVip)
    }

    /// 贝壳页（付费功能）。
    pub fn to_shell_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::UserShell)
    }

    /// 发布动态，需要已绑定手机号。
    pub fn to_talk_add_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::TalkAdd)
    }

    pub fn to_love_value_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::LoveValue)
    }

    pub fn to_phone_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::UserPhone)
    }

    pub fn to_identity_auth_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::IdentityAuth)
    }

    pub fn to_mine_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::Mine)
    }

    pub fn to_talk_page(&self) -> Result<NavOutcome, NavError> {
        self.to_route(PageRoute::Talk)
    }

    /// 回到首页，首页即动态 tab。
    pub fn go_home(&self) -> Result<NavOutcome, NavError> {
        self.to_talk_page()
    }

    /// 记录匹配候选用户。
    ///
    /// 匹配页的跳转目前是关闭的：只写 store，不发导航指令。
    pub fn to_user_match_page(&self, user: User) -> NavOutcome {
        self.store.write(SelectionSideEffect::MatchCandidate(user));
        NavOutcome::Suppressed
    }

    /// 打开聊天页，并在导航指令发出之后设置当前会话。
    pub fn to_message_page(&self, chat: Chat) -> Result<NavOutcome, NavError> {
        let outcome = self.to_route(PageRoute::Message)?;
        if outcome == NavOutcome::Navigated {
            self.store.write(SelectionSideEffect::ActiveChat(chat));
        }
        Ok(outcome)
    }

    /// 先弹确认框，用户确认后才打开颜值分介绍。
    pub async fn to_face_value_page(&self) -> Result<NavOutcome, NavError> {
        let answer = self
            .prompter
            .confirm(&self.messages.face_value_confirm)
            .await;
        match answer {
            ConfirmOutcome::Confirmed => self.to_route(PageRoute::FaceValueInfo),
            ConfirmOutcome::Dismissed => {
                debug!(target: "pagenav", route = PageRoute::FaceValueInfo.name(), "confirmation dismissed");
                Ok(NavOutcome::Declined)
            }
        }
    }

    fn run_fallback(&self, route: PageRoute, fallback: Fallback) {
        info!(
            target: "pagenav",
            route = route.name(),
            fallback = fallback.as_str(),
            "navigation gated"
        );
        match fallback {
            Fallback::PlatformRestricted => self.prompter.hint(&self.messages.platform_restricted),
            Fallback::LoginRequired => self.prompter.prompt_login(),
            Fallback::PhoneBindingRequired => self.prompter.prompt_bind_phone(),
        }
    }
}
