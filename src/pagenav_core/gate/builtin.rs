use super::types::{Fallback, Gate, GateContext, GateResult};

/// 受限平台（iOS）不允许进入付费功能。
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformGate;

impl Gate for PlatformGate {
    fn check(&self, ctx: &GateContext) -> GateResult {
        if ctx.platform_restricted {
            GateResult::Fallback(Fallback::PlatformRestricted)
        } else {
            GateResult::Pass
        }
    }

    fn name(&self) -> &str {
        "platform"
    }
}

/// 必须已登录。
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginGate;

impl Gate for LoginGate {
    fn check(&self, ctx: &GateContext) -> GateResult {
        if ctx.is_logged_in() {
            GateResult::Pass
        } else {
            GateResult::Fallback(Fallback::LoginRequired)
        }
    }

    fn name(&self) -> &str {
        "login"
    }
}

/// 必须已登录且绑定了手机号。
///
/// 未登录同样走绑定手机号的兜底，由绑定流程负责引导登录。
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundPhoneGate;

impl Gate for BoundPhoneGate {
    fn check(&self, ctx: &GateContext) -> GateResult {
        if ctx.user_has_bound_phone() {
            GateResult::Pass
        } else {
            GateResult::Fallback(Fallback::PhoneBindingRequired)
        }
    }

    fn name(&self) -> &str {
        "bound_phone"
    }
}
