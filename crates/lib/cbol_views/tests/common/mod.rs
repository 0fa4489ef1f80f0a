//! Shared fixtures for the view tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cbol_api_client::{ApiClient, ClientConfig};
use cbol_core::session::Session;
use cbol_testing::{FakeBackend, RecordingNavigator, make_token};
use cbol_views::{ConfirmDialog, ConfirmPrompt, Notice, NoticeLevel, Notifier, ViewContext};
use serde_json::{Value, json};

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices().into_iter().map(|n| n.level).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Answers every prompt with a fixed reply and remembers what was asked.
pub struct ScriptedConfirm {
    answer: AtomicBool,
    asked: AtomicUsize,
    prompts: Mutex<Vec<ConfirmPrompt>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: AtomicBool::new(answer),
            asked: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmDialog for ScriptedConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answer.load(Ordering::SeqCst)
    }
}

pub struct Harness {
    pub backend: FakeBackend,
    pub session: Arc<Session>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirm: Arc<ScriptedConfirm>,
    pub ctx: ViewContext,
}

pub async fn harness() -> Harness {
    let backend = FakeBackend::start().await;
    let session = Arc::new(Session::in_memory());
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let confirm = Arc::new(ScriptedConfirm::new(true));

    let config = ClientConfig::default().with_base_url(backend.base_url());
    let api = ApiClient::new(&config, session.clone(), navigator.clone()).expect("client");
    let ctx = ViewContext::new(api, navigator.clone(), notifier.clone(), confirm.clone());

    Harness {
        backend,
        session,
        navigator,
        notifier,
        confirm,
        ctx,
    }
}

impl Harness {
    pub fn login_as(&self, role: &str) {
        let token = make_token(&json!({
            "sub": "admin",
            "name": "관리자",
            "englishname": "Admin",
            "position": "부장",
            "role": role
        }));
        self.session.set_token(&token).unwrap();
    }
}

pub fn user_json(id: i64, username: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": format!("User {id}"),
        "englishname": "",
        "username": username,
        "role": role,
        "position": "사원",
        "phoneNumber": "010-1234-5678",
        "email": format!("{username}@cbol.com")
    })
}
