//! Query orchestration: provider selection and the request lifecycle.
//!
//! [`QueryOrchestrator`] is the only writer of [`RequestState`]. Readers get a
//! snapshot through [`QueryOrchestrator::state`] or follow transitions
//! through a watch channel from [`QueryOrchestrator::subscribe`].
//!
//! Overlapping submissions are not de-duplicated or cancelled. Each one
//! runs to completion and writes its terminal state, so the submission
//! that resolves last decides what is observed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::errors::SearchError;
use crate::providers::Provider;
use crate::query::Query;
use crate::request;
use crate::transport::SearchTransport;
use crate::types::SearchPayload;

/// Lifecycle of the most recent submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded(SearchPayload),
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// True for `Succeeded` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Succeeded(_) | RequestState::Failed(_))
    }
}

/// Owns the active provider and the request state.
#[derive(Debug)]
pub struct QueryOrchestrator {
    transport: Arc<dyn SearchTransport>,
    active: RwLock<Provider>,
    state: watch::Sender<RequestState>,
    submissions: AtomicU64,
}

impl QueryOrchestrator {
    /// Creates an idle orchestrator with the default provider selected.
    pub fn new(transport: Arc<dyn SearchTransport>) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            transport,
            active: RwLock::new(Provider::default()),
            state,
            submissions: AtomicU64::new(0),
        }
    }

    /// Currently selected provider.
    pub fn active_provider(&self) -> Provider {
        *self.active.read()
    }

    /// Switches the active provider. Never touches the network or the state.
    pub fn select_provider(&self, provider: Provider) {
        let previous = std::mem::replace(&mut *self.active.write(), provider);
        if previous != provider {
            tracing::debug!("Active provider {} -> {}", previous, provider);
        }
    }

    /// Snapshot of the current request state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Selects `provider` and submits `query` to it.
    ///
    /// Returns `None` without any effect when the query text is blank.
    /// Otherwise the state goes to `Pending`, exactly one request is sent,
    /// and the terminal state this submission wrote is returned. A later
    /// submission may already have replaced it in the shared state.
    pub async fn submit(&self, provider: Provider, query: &Query) -> Option<RequestState> {
        if query.is_blank() {
            tracing::debug!("Ignoring blank query for {}", provider);
            return None;
        }

        self.select_provider(provider);
        Some(self.dispatch(provider, query).await)
    }

    /// Submits `query` to whichever provider is currently selected.
    pub async fn submit_active(&self, query: &Query) -> Option<RequestState> {
        let provider = self.active_provider();
        self.submit(provider, query).await
    }

    async fn dispatch(&self, provider: Provider, query: &Query) -> RequestState {
        let submission = self.submissions.fetch_add(1, Ordering::Relaxed) + 1;
        self.state.send_replace(RequestState::Pending);

        let request = request::build(provider, query);
        tracing::debug!(
            "Submission #{} -> {} {:?}",
            submission,
            request.path,
            request.params
        );

        let outcome = self
            .transport
            .fetch(&request)
            .await
            .and_then(|body| SearchPayload::decode(provider, &body));

        let terminal = match outcome {
            Ok(payload) => {
                tracing::info!("Submission #{} to {} succeeded", submission, provider);
                RequestState::Succeeded(payload)
            }
            Err(error) => {
                tracing::warn!("Submission #{} to {} failed: {}", submission, provider, error);
                RequestState::Failed(failure_message(provider, &error))
            }
        };

        self.state.send_replace(terminal.clone());
        terminal
    }
}

/// Message surfaced for a failed submission.
///
/// Wire failures collapse to the provider's fixed text; decoding failures
/// keep the decoder's message.
fn failure_message(provider: Provider, error: &SearchError) -> String {
    if error.is_transport() {
        provider.failure_message().to_string()
    } else {
        error.to_string()
    }
}
