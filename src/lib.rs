//! pagenav：小程序宿主的页面导航分发层。
//!
//! - `Navigator` 把宿主的 push / replace / reLaunch / switchTab / back 原语收拢为统一入口；
//! - `DestinationResolver` 在其上做 deep link 分发与具名目的地的门禁（平台、登录、绑定手机号）。
//!
//! 宿主、会话 store 与提示服务都通过 trait 注入，见 [`NavigationHost`]、[`SessionStore`]、[`Prompter`]。

mod pagenav_core;

pub use pagenav_core::*;
