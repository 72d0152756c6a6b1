//! In-process producer used by the cache tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::cache::Producer;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("stub failure: {0}")]
pub struct StubError(pub String);

/// Shared view of how many times a [`StubProducer`] ran.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Replays scripted results, then falls back to `"{key}@{call}"`.
#[derive(Debug, Default)]
pub struct StubProducer {
    calls: CallCounter,
    script: Mutex<VecDeque<Result<String, StubError>>>,
}

impl StubProducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripted(script: Vec<Result<String, StubError>>) -> Self {
        Self {
            calls: CallCounter::default(),
            script: Mutex::new(script.into()),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl Producer for StubProducer {
    type Key = String;
    type Value = String;
    type Error = StubError;

    async fn produce(&self, key: &String) -> Result<String, StubError> {
        let call = self.calls.0.fetch_add(1, Ordering::SeqCst) + 1;
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(format!("{}@{}", key, call)))
    }
}
