//! Bounded wait around any strategy.
//!
//! Each decision runs on its own worker thread and the answer comes back over
//! a channel. A strategy that misses the deadline yields `AiError::Timeout`;
//! its worker is detached and its late answer dropped.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::warn;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::{BidView, PlayView};
use crate::domain::{Card, Suit};

pub struct TimeBoxed {
    inner: Arc<dyn AiPlayer>,
    limit: Duration,
}

impl TimeBoxed {
    pub fn new(inner: Arc<dyn AiPlayer>, limit: Duration) -> Self {
        Self { inner, limit }
    }

    fn run<T, F>(&self, action: &'static str, decide: F) -> Result<T, AiError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn AiPlayer) -> Result<T, AiError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name(format!("ai-{action}"))
            .spawn(move || {
                // Receiver may be gone after a timeout.
                let _ = tx.send(decide(inner.as_ref()));
            })
            .map_err(|e| AiError::Internal(format!("failed to spawn decision worker: {e}")))?;

        match rx.recv_timeout(self.limit) {
            Ok(answer) => answer,
            Err(RecvTimeoutError::Timeout) => {
                warn!(action, limit = ?self.limit, "AI decision timed out");
                Err(AiError::Timeout)
            }
            Err(RecvTimeoutError::Disconnected) => Err(AiError::Internal(format!(
                "decision worker for {action} exited without answering"
            ))),
        }
    }
}

impl AiPlayer for TimeBoxed {
    fn decide_order_up(&self, view: &BidView) -> Result<bool, AiError> {
        let view = view.clone();
        self.run("order_up", move |ai| ai.decide_order_up(&view))
    }

    fn decide_discard(&self, view: &BidView) -> Result<Card, AiError> {
        let view = view.clone();
        self.run("discard", move |ai| ai.decide_discard(&view))
    }

    fn decide_call_suit(&self, view: &BidView) -> Result<Option<Suit>, AiError> {
        let view = view.clone();
        self.run("call_suit", move |ai| ai.decide_call_suit(&view))
    }

    fn decide_go_alone(&self, view: &BidView) -> Result<bool, AiError> {
        let view = view.clone();
        self.run("go_alone", move |ai| ai.decide_go_alone(&view))
    }

    fn decide_play(&self, view: &PlayView) -> Result<Card, AiError> {
        let view = view.clone();
        self.run("play", move |ai| ai.decide_play(&view))
    }
}
