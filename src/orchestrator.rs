use colored::*;

use crate::api::{QueryBackend, QueryRequest};
use crate::session::SessionState;

/// Answer text stored when the backend returns no usable answer.
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer returned.";

const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// What became of one `submit` call. `Skipped` covers the silent guards
/// (blank draft, request already in flight); callers use this only to
/// decide what to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Skipped,
    Answered,
    Failed,
}

/// The only stateful control logic in the system: builds each request from
/// the current session state, enforces at most one request in flight, and
/// reconciles the settled outcome back into the session.
pub struct Orchestrator<B: QueryBackend> {
    backend: B,
    verbose: bool,
}

impl<B: QueryBackend> Orchestrator<B> {
    pub fn new(backend: B, verbose: bool) -> Self {
        Self { backend, verbose }
    }

    /// Submit the current draft question.
    ///
    /// A blank draft or an in-flight request makes this a no-op: nothing is
    /// dispatched, nothing is mutated, no error surfaces. Otherwise exactly
    /// one request goes out; on success the turn is committed to history,
    /// on failure only `last_error` is set. The draft is cleared before the
    /// outcome is known, so a failed turn does not restore it. `in_flight`
    /// is dropped on settle either way.
    pub async fn submit(&self, state: &mut SessionState) -> Submission {
        let question = state.draft_question().trim().to_string();
        if question.is_empty() || state.in_flight() {
            return Submission::Skipped;
        }

        state.begin_request();
        state.clear_stale_outcome();
        let snapshot = state.snapshot();
        state.set_draft_question("");

        let request = QueryRequest::from_snapshot(question.clone(), snapshot);

        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[bi] Sending question with {} prior turns",
                    request.history.len()
                )
                .dimmed()
            );
        }

        let outcome = match self.backend.query(&request).await {
            Ok(response) => {
                let answer = response
                    .answer
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| NO_ANSWER_PLACEHOLDER.to_string());

                if self.verbose && response.trace.is_none() {
                    eprintln!("{}", "[bi] Response carried no trace payload".dimmed());
                }

                state.commit_turn(question, answer, response.trace);
                Submission::Answered
            }
            Err(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    UNEXPECTED_ERROR.to_string()
                } else {
                    message
                };
                state.commit_error(message);
                Submission::Failed
            }
        };

        state.end_request();
        outcome
    }
}
