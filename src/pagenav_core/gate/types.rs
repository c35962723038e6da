use crate::pagenav_core::types::User;

/// 门禁执行时看到的会话快照。
///
/// 每次门禁调用都从 store 重新读取，不缓存。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateContext {
    /// 当前登录用户，未登录时为 None。
    pub current_user: Option<User>,

    /// 当前平台是否禁止付费功能（iOS）。
    pub platform_restricted: bool,
}

impl GateContext {
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn user_has_bound_phone(&self) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(User::has_bound_phone)
    }
}

/// 门禁未通过时要执行的兜底动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fallback {
    /// 平台受限：弹出提示文案。
    PlatformRestricted,

    /// 未登录：提示登录。
    LoginRequired,

    /// 未绑定手机号：提示绑定。
    PhoneBindingRequired,
}

impl Fallback {
    pub fn as_str(self) -> &'static str {
        match self {
            Fallback::PlatformRestricted => "platform_restricted",
            Fallback::LoginRequired => "login_required",
            Fallback::PhoneBindingRequired => "phone_binding_required",
        }
    }
}

/// 门禁执行结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResult {
    /// 放行，继续执行后续门禁。
    Pass,

    /// 拦截，不再执行后续门禁，改走兜底动作。
    Fallback(Fallback),
}

/// Gate trait：导航前对会话状态做的一次前置检查。
pub trait Gate: Send + Sync {
    fn check(&self, ctx: &GateContext) -> GateResult;

    /// 可选：返回一个描述性名称，用于日志。
    fn name(&self) -> &str {
        "unnamed_gate"
    }
}

/// 用闭包创建 Gate 的便捷结构。
pub struct FnGate<F> {
    name: String,
    func: F,
}

impl<F> FnGate<F>
where
    F: Fn(&GateContext) -> GateResult + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Gate for FnGate<F>
where
    F: Fn(&GateContext) -> GateResult + Send + Sync,
{
    fn check(&self, ctx: &GateContext) -> GateResult {
        (self.func)(ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
