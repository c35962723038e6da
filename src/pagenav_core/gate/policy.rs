use std::collections::HashMap;
use std::sync::Arc;

use super::builtin::{BoundPhoneGate, LoginGate, PlatformGate};
use super::types::{Gate, GateContext, GateResult};
use crate::pagenav_core::types::PageRoute;

/// 链上的一个门禁及其优先级。
pub struct GateEntry {
    pub gate: Arc<dyn Gate>,

    /// 数值越小越先执行。
    pub priority: i32,
}

impl std::fmt::Debug for GateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateEntry")
            .field("gate", &self.gate.name())
            .field("priority", &self.priority)
            .finish()
    }
}

impl Clone for GateEntry {
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
            priority: self.priority,
        }
    }
}

/// 一个目的地对应的门禁链。
///
/// 按 priority 升序执行，第一个拦截的门禁决定兜底动作；同优先级按加入顺序执行。
#[derive(Debug, Clone, Default)]
pub struct GateChain {
    entries: Vec<GateEntry>,
}

impl GateChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, gate: impl Gate + 'static, priority: i32) -> Self {
        self.push(Arc::new(gate), priority);
        self
    }

    pub fn push(&mut self, gate: Arc<dyn Gate>, priority: i32) {
        let at = self
            .entries
            .partition_point(|entry| entry.priority <= priority);
        self.entries.insert(at, GateEntry { gate, priority });
    }

    /// 付费功能：先判平台，再判登录。
    pub fn paid_feature() -> Self {
        Self::new().with(PlatformGate, 0).with(LoginGate, 10)
    }

    /// 发布内容：需要登录且绑定手机号。
    pub fn bound_phone() -> Self {
        Self::new().with(BoundPhoneGate, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按执行顺序返回门禁名。
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.gate.name()).collect()
    }

    pub fn evaluate(&self, ctx: &GateContext) -> GateResult {
        self.entries
            .iter()
            .map(|entry| entry.gate.check(ctx))
            .find(|result| *result != GateResult::Pass)
            .unwrap_or(GateResult::Pass)
    }
}

/// 目的地 -> 门禁链 的集中配置。
///
/// 没有配置门禁链的目的地直接放行。
#[derive(Debug, Clone, Default)]
pub struct GatePolicy {
    chains: HashMap<PageRoute, GateChain>,
}

impl GatePolicy {
    /// 空策略：所有目的地放行。
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_chain(mut self, route: PageRoute, chain: GateChain) -> Self {
        self.chains.insert(route, chain);
        self
    }

    pub fn chain(&self, route: PageRoute) -> Option<&GateChain> {
        self.chains.get(&route)
    }

    pub fn evaluate(&self, route: PageRoute, ctx: &GateContext) -> GateResult {
        self.chain(route)
            .map_or(GateResult::Pass, |chain| chain.evaluate(ctx))
    }

    /// 是否需要读取会话快照才能决定。
    pub fn is_gated(&self, route: PageRoute) -> bool {
        self.chain(route).is_some_and(|chain| !chain.is_empty())
    }
}

/// 默认策略：VIP 与贝壳页为付费功能，发布动态需要绑定手机号。
pub fn default_gate_policy() -> GatePolicy {
    GatePolicy::empty()
        .with_chain(PageRoute::UserVip, GateChain::paid_feature())
        .with_chain(PageRoute::UserShell, GateChain::paid_feature())
        .with_chain(PageRoute::TalkAdd, GateChain::bound_phone())
}
