//! Query session - the request lifecycle as seen by a front-end.
//!
//! A session moves `Idle -> Pending -> Succeeded | Failed`, and from either
//! outcome a new submission may start. Entering `Pending` drops the previous
//! results and error; every resolution leaves `Pending`.

use crate::api::{DeskRecommendation, QueryOccupancy};
use crate::error::QueryError;

/// Context prepended to failure messages shown to the user.
pub const FAILURE_PREFIX: &str = "Failed to get recommendations: ";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Pending,
    Succeeded(Vec<DeskRecommendation>),
    Failed(String),
}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewState::Pending)
    }

    pub fn results(&self) -> Option<&[DeskRecommendation]> {
        match self {
            ViewState::Succeeded(desks) => Some(desks),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub struct QuerySession<Q: QueryOccupancy> {
    api: Q,
    state: ViewState,
}

impl<Q: QueryOccupancy> QuerySession<Q> {
    pub fn new(api: Q) -> Self {
        Self {
            api,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Moves to `Pending` if the query may be sent.
    ///
    /// Blank text and a second submission while one is outstanding are
    /// rejected and leave the state untouched.
    pub fn begin(&mut self, query_text: &str) -> Result<(), QueryError> {
        if query_text.trim().is_empty() {
            return Err(QueryError::Validation(
                "Query text must not be empty".to_string(),
            ));
        }
        if self.state.is_pending() {
            return Err(QueryError::Validation(
                "A query is already in progress".to_string(),
            ));
        }
        self.state = ViewState::Pending;
        Ok(())
    }

    /// Records the outcome of the outstanding query.
    pub fn resolve(&mut self, outcome: Result<Vec<DeskRecommendation>, QueryError>) {
        self.state = outcome_state(outcome);
    }

    /// Runs one full query. Validation failures are returned as errors;
    /// backend and transport failures end up in [`ViewState::Failed`].
    ///
    /// Dropping the returned future mid-flight puts the session back to
    /// `Idle`.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self, query_text: &str) -> Result<&ViewState, QueryError> {
        self.begin(query_text)?;
        {
            let mut guard = PendingGuard {
                state: &mut self.state,
            };
            let outcome = self.api.submit_query(query_text).await;
            *guard.state = outcome_state(outcome);
        }
        Ok(&self.state)
    }

    /// Discards results and error.
    pub fn reset(&mut self) {
        self.state = ViewState::Idle;
    }
}

fn outcome_state(outcome: Result<Vec<DeskRecommendation>, QueryError>) -> ViewState {
    match outcome {
        Ok(desks) => ViewState::Succeeded(desks),
        Err(e) => ViewState::Failed(format!("{}{}", FAILURE_PREFIX, e)),
    }
}

/// Resets a still-pending state when a query is abandoned.
struct PendingGuard<'a> {
    state: &'a mut ViewState,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.state.is_pending() {
            *self.state = ViewState::Idle;
        }
    }
}
