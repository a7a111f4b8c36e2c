//! Test doubles for the prompt and HTTP seams.

use anyhow::{bail, Result};
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::client::{HttpResponse, Transport};
use crate::config::ServerProfile;
use crate::interactive::Prompter;

pub fn profile() -> ServerProfile {
    ServerProfile {
        server_url: "https://jenkins.example.com/".to_string(),
        user: "testuser".to_string(),
        api_token: "testtoken".to_string(),
    }
}

/// Replays queued answers and records every question asked
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    multi_selects: RefCell<VecDeque<Vec<String>>>,
    selects: RefCell<VecDeque<Option<String>>>,
    texts: RefCell<VecDeque<String>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.borrow_mut().push_back(answer);
        self
    }

    pub fn with_multi_select(self, checked: &[&str]) -> Self {
        self.multi_selects
            .borrow_mut()
            .push_back(checked.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_select(self, answer: Option<&str>) -> Self {
        self.selects.borrow_mut().push_back(answer.map(str::to_string));
        self
    }

    pub fn with_text(self, answer: &str) -> Self {
        self.texts.borrow_mut().push_back(answer.to_string());
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    fn record(&self, message: &str, help: Option<&str>) {
        let line = match help {
            Some(help) => format!("{} ({})", message, help),
            None => message.to_string(),
        };
        self.asked.borrow_mut().push(line);
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.record(message, None);
        match self.confirms.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("unexpected confirm prompt: {}", message),
        }
    }

    fn multi_select(&self, message: &str, _options: &[String]) -> Result<Vec<String>> {
        self.record(message, None);
        match self.multi_selects.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("unexpected multi-select prompt: {}", message),
        }
    }

    fn select(&self, message: &str, options: &[String]) -> Result<Option<String>> {
        self.record(message, None);
        let answer = match self.selects.borrow_mut().pop_front() {
            Some(answer) => answer,
            None => bail!("unexpected select prompt: {}", message),
        };
        if let Some(ref choice) = answer {
            if !options.contains(choice) {
                bail!("'{}' is not one of the offered options", choice);
            }
        }
        Ok(answer)
    }

    fn text(&self, message: &str, help: Option<&str>) -> Result<String> {
        self.record(message, help);
        match self.texts.borrow_mut().pop_front() {
            Some(answer) => Ok(answer),
            None => bail!("unexpected text prompt: {}", message),
        }
    }

    fn secret(&self, message: &str, help: Option<&str>) -> Result<String> {
        self.text(message, help)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub user: String,
    pub body: Option<String>,
}

/// Serves queued responses in order and records the requests made
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: StatusCode, body: &str) -> Self {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        });
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next(&self, request: RecordedRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(response) => Ok(response),
            None => bail!("no response queued for {}", url),
        }
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, profile: &ServerProfile) -> Result<HttpResponse> {
        self.next(RecordedRequest {
            method: "GET",
            url: url.to_string(),
            user: profile.user.clone(),
            body: None,
        })
    }

    fn post_form(&self, url: &str, profile: &ServerProfile, body: String) -> Result<HttpResponse> {
        self.next(RecordedRequest {
            method: "POST",
            url: url.to_string(),
            user: profile.user.clone(),
            body: Some(body),
        })
    }
}
