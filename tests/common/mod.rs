//! 测试用的宿主 / store / 提示服务替身。
//!
//! 三者共享同一份 `Journal`，按调用先后记录事件，用来断言调用顺序。

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pagenav::{
    Chat, ConfirmOutcome, DestinationResolver, GateContext, HostCommand, HostError, NavConfig,
    NavigationHost, PageFrame, PageStack, Prompter, SelectionSideEffect, SessionStore, User,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Host(HostCommand),
    Store(SelectionSideEffect),
    Hint(String),
    PromptLogin,
    PromptBindPhone,
    Confirm(String),
}

#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Event>>>);

impl Journal {
    pub fn record(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn host_commands(&self) -> Vec<HostCommand> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Host(command) => Some(command),
                _ => None,
            })
            .collect()
    }
}

/// 模拟宿主页面栈：push 入栈、redirect 替换栈顶、reLaunch/switchTab 清栈、back 出栈。
pub struct FakeHost {
    journal: Journal,
    stack: Mutex<Vec<PageFrame>>,
    app_shell: bool,
    fail_next: Mutex<Option<HostError>>,
}

impl FakeHost {
    pub fn new(journal: Journal, app_shell: bool) -> Self {
        Self {
            journal,
            stack: Mutex::new(vec![PageFrame::new("pages/talk/talk")]),
            app_shell,
            fail_next: Mutex::new(None),
        }
    }

    pub fn set_stack(&self, frames: Vec<PageFrame>) {
        *self.stack.lock().unwrap() = frames;
    }

    pub fn fail_next(&self, error: HostError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }
}

impl NavigationHost for FakeHost {
    fn apply(&self, command: HostCommand) -> Result<(), HostError> {
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        let mut stack = self.stack.lock().unwrap();
        match &command {
            HostCommand::Push { url } => stack.push(PageFrame::from_url(url)),
            HostCommand::Replace { url } => {
                stack.pop();
                stack.push(PageFrame::from_url(url));
            }
            HostCommand::Relaunch { url } | HostCommand::SwitchTab { url } => {
                stack.clear();
                stack.push(PageFrame::from_url(url));
            }
            HostCommand::Back => {
                if stack.len() <= 1 {
                    return Err(HostError::StackUnderflow);
                }
                stack.pop();
            }
            HostCommand::ShowTabBar | HostCommand::OpenMiniProgram { .. } => {}
        }
        drop(stack);
        self.journal.record(Event::Host(command));
        Ok(())
    }

    fn page_stack(&self) -> PageStack {
        PageStack::new(self.stack.lock().unwrap().clone())
    }

    fn is_app_shell(&self) -> bool {
        self.app_shell
    }
}

pub struct FakeStore {
    journal: Journal,
    ctx: Mutex<GateContext>,
}

impl FakeStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            ctx: Mutex::new(GateContext::default()),
        }
    }

    pub fn login(&self, user: User) {
        self.ctx.lock().unwrap().current_user = Some(user);
    }

    pub fn logout(&self) {
        self.ctx.lock().unwrap().current_user = None;
    }

    pub fn set_platform_restricted(&self, restricted: bool) {
        self.ctx.lock().unwrap().platform_restricted = restricted;
    }
}

impl SessionStore for FakeStore {
    fn gate_context(&self) -> GateContext {
        self.ctx.lock().unwrap().clone()
    }

    fn write(&self, effect: SelectionSideEffect) {
        self.journal.record(Event::Store(effect));
    }
}

pub struct FakePrompter {
    journal: Journal,
    answer: Mutex<ConfirmOutcome>,
}

impl FakePrompter {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            answer: Mutex::new(ConfirmOutcome::Confirmed),
        }
    }

    pub fn answer_with(&self, outcome: ConfirmOutcome) {
        *self.answer.lock().unwrap() = outcome;
    }
}

#[async_trait]
impl Prompter for FakePrompter {
    fn hint(&self, message: &str) {
        self.journal.record(Event::Hint(message.to_string()));
    }

    fn prompt_login(&self) {
        self.journal.record(Event::PromptLogin);
    }

    fn prompt_bind_phone(&self) {
        self.journal.record(Event::PromptBindPhone);
    }

    async fn confirm(&self, message: &str) -> ConfirmOutcome {
        self.journal.record(Event::Confirm(message.to_string()));
        *self.answer.lock().unwrap()
    }
}

pub struct Harness {
    pub journal: Journal,
    pub host: Arc<FakeHost>,
    pub store: Arc<FakeStore>,
    pub prompter: Arc<FakePrompter>,
    pub resolver: DestinationResolver,
}

impl Harness {
    pub fn new(app_shell: bool) -> Self {
        Self::with_config(app_shell, &NavConfig::default())
    }

    pub fn with_config(app_shell: bool, config: &NavConfig) -> Self {
        init_tracing();
        let journal = Journal::default();
        let host = Arc::new(FakeHost::new(journal.clone(), app_shell));
        let store = Arc::new(FakeStore::new(journal.clone()));
        let prompter = Arc::new(FakePrompter::new(journal.clone()));
        let resolver =
            DestinationResolver::new(host.clone(), store.clone(), prompter.clone(), config)
                .unwrap();
        Self {
            journal,
            host,
            store,
            prompter,
            resolver,
        }
    }
}

/// `RUST_LOG=pagenav=debug cargo test` 可以看到导航日志。
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn user(phone: Option<&str>) -> User {
    User {
        id: "u-1".to_string(),
        nickname: "阿青".to_string(),
        phone_num: phone.map(str::to_string),
    }
}

pub fn chat() -> Chat {
    Chat {
        id: "c-9".to_string(),
        peer: "u-2".to_string(),
        unread_num: 2,
    }
}

pub fn push(url: &str) -> Event {
    Event::Host(HostCommand::Push {
        url: url.to_string(),
    })
}
