//! Funding submission workflow.
//!
//! One submission at a time per form: the state guard refuses overlap
//! while a request is in flight, and there is no cancellation once a
//! request has been dispatched. Nothing is ever retried automatically;
//! re-submission is the user clicking again.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{info, warn};

use aluma_core::errors::{Error, Result};
use aluma_core::funding::{build, classify, FundingError, FundingForm, FundingKind, Outcome};

use crate::accounts::SnapshotRefresher;
use crate::session::{clear_session, SessionStore};
use crate::transport::{Method, Transport};

/// Delay between a successful submission and the follow-up account
/// refresh, giving the backend time to post the movement.
pub const POST_SUCCESS_REFRESH_DELAY_SECS: u64 = 2;

/// UI-observable lifecycle of one funding form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight; further submissions are refused.
    Submitting,
    /// Terminal; returns to `Idle` once the follow-up refresh has run.
    Succeeded,
    /// Terminal; cleared by the next submission attempt.
    Failed,
}

/// What a submission attempt came to.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The form failed validation; nothing was sent.
    Invalid(FundingError),
    /// The request was dispatched and the reply classified.
    Completed(Outcome),
}

/// Report handed back to the form glue.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub outcome: SubmissionOutcome,
    /// The PIN field is wiped after any failed attempt.
    pub clear_pin: bool,
}

impl SubmissionReport {
    pub fn succeeded(&self) -> bool {
        matches!(&self.outcome, SubmissionOutcome::Completed(outcome) if outcome.is_success())
    }
}

/// Drives funding submissions end to end: validate, dispatch, classify,
/// tear down the session on auth expiry, and schedule the post-success
/// account refresh.
pub struct FundingService {
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    refresher: Option<Arc<SnapshotRefresher>>,
    state: Arc<Mutex<SubmissionState>>,
}

impl FundingService {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionStore>,
        refresher: Option<Arc<SnapshotRefresher>>,
    ) -> Self {
        Self {
            transport,
            session,
            refresher,
            state: Arc::new(Mutex::new(SubmissionState::default())),
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock().unwrap()
    }

    /// Submits one funding operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubmissionInFlight`] when a previous submission
    /// has not reached a terminal state yet. Every other path produces a
    /// [`SubmissionReport`].
    pub async fn submit(&self, kind: FundingKind, form: &FundingForm) -> Result<SubmissionReport> {
        self.begin()?;

        let request = match build(kind, form) {
            Ok(request) => request,
            Err(err) => {
                self.set_state(SubmissionState::Failed);
                return Ok(SubmissionReport {
                    outcome: SubmissionOutcome::Invalid(err),
                    clear_pin: true,
                });
            }
        };

        let body = match serde_json::to_value(&request) {
            Ok(body) => body,
            Err(err) => {
                self.set_state(SubmissionState::Failed);
                return Err(err.into());
            }
        };

        let endpoint = request.endpoint();
        let outcome = match self.transport.send(Method::Post, endpoint, Some(body)).await {
            Ok(reply) => classify(reply.status, &reply.body),
            Err(err) => Outcome::transport_failure(err.to_string()),
        };

        if outcome == Outcome::AuthExpired {
            clear_session(self.session.as_ref());
            warn!("[Funding] Session expired during submission; credentials cleared");
        }

        if outcome.is_success() {
            info!("[Funding] {} accepted", endpoint);
            self.set_state(SubmissionState::Succeeded);
            self.schedule_refresh();
            Ok(SubmissionReport {
                outcome: SubmissionOutcome::Completed(outcome),
                clear_pin: false,
            })
        } else {
            self.set_state(SubmissionState::Failed);
            Ok(SubmissionReport {
                outcome: SubmissionOutcome::Completed(outcome),
                clear_pin: true,
            })
        }
    }

    fn begin(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if *state == SubmissionState::Submitting {
            return Err(Error::SubmissionInFlight);
        }
        *state = SubmissionState::Submitting;
        Ok(())
    }

    fn set_state(&self, next: SubmissionState) {
        *self.state.lock().unwrap() = next;
    }

    /// After a success, refresh the account lists once and fall back to
    /// `Idle`. Without a refresher the state falls back immediately.
    fn schedule_refresh(&self) {
        let Some(refresher) = self.refresher.clone() else {
            self.set_state(SubmissionState::Idle);
            return;
        };
        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(POST_SUCCESS_REFRESH_DELAY_SECS)).await;
            if let Err(err) = refresher.refresh().await {
                warn!("[Funding] Post-submission refresh failed: {}", err);
            }
            let mut state = state.lock().unwrap();
            if *state == SubmissionState::Succeeded {
                *state = SubmissionState::Idle;
            }
        });
    }
}
