use chrono::{DateTime, Local};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::models::ConversationTurn;

/// Per-session configuration. All fields are blank-tolerant; values live in
/// process memory for the lifetime of the session and are never written to
/// disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub monday_api_key: String,
    pub gemini_api_key: String,
    pub deals_board_id: String,
    pub work_orders_board_id: String,
}

/// Addressable fields of [`SessionConfig`], used by the `/set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    MondayApiKey,
    GeminiApiKey,
    DealsBoardId,
    WorkOrdersBoardId,
}

impl ConfigField {
    /// True for fields whose values should be masked when displayed.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigField::MondayApiKey | ConfigField::GeminiApiKey)
    }
}

impl FromStr for ConfigField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday-key" | "monday-api-key" => Ok(ConfigField::MondayApiKey),
            "gemini-key" | "gemini-api-key" => Ok(ConfigField::GeminiApiKey),
            "deals-board" | "deals-board-id" => Ok(ConfigField::DealsBoardId),
            "work-orders-board" | "work-orders-board-id" => Ok(ConfigField::WorkOrdersBoardId),
            other => Err(format!(
                "Unknown config field '{}' (expected monday-key, gemini-key, deals-board or work-orders-board)",
                other
            )),
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigField::MondayApiKey => "monday-key",
            ConfigField::GeminiApiKey => "gemini-key",
            ConfigField::DealsBoardId => "deals-board",
            ConfigField::WorkOrdersBoardId => "work-orders-board",
        };
        write!(f, "{}", name)
    }
}

/// Consistent pairing of config and history taken at submit time. Later
/// edits to the live session do not show through.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub config: SessionConfig,
    pub history: Vec<ConversationTurn>,
}

/// The ephemeral state of one conversation session. Single instance per
/// session, destroyed on process exit with nothing persisted.
///
/// History is appended strictly in user/assistant pairs via
/// [`SessionState::commit_turn`]; a failed turn appends nothing, so the
/// history length is always even.
#[derive(Debug)]
pub struct SessionState {
    session_id: String,
    started_at: DateTime<Local>,
    config: SessionConfig,
    history: Vec<ConversationTurn>,
    draft_question: String,
    in_flight: bool,
    last_answer: String,
    last_trace: Option<Value>,
    last_error: Option<String>,
}

impl SessionState {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            started_at: Local::now(),
            config,
            history: Vec::new(),
            draft_question: String::new(),
            in_flight: false,
            last_answer: String::new(),
            last_trace: None,
            last_error: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn draft_question(&self) -> &str {
        &self.draft_question
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_answer(&self) -> &str {
        &self.last_answer
    }

    pub fn last_trace(&self) -> Option<&Value> {
        self.last_trace.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Update one config field. No constraints; blank values are allowed,
    /// and edits may land while a request is in flight (the in-flight
    /// request already holds its own snapshot).
    pub fn set_config_field(&mut self, field: ConfigField, value: &str) {
        let slot = match field {
            ConfigField::MondayApiKey => &mut self.config.monday_api_key,
            ConfigField::GeminiApiKey => &mut self.config.gemini_api_key,
            ConfigField::DealsBoardId => &mut self.config.deals_board_id,
            ConfigField::WorkOrdersBoardId => &mut self.config.work_orders_board_id,
        };
        *slot = value.to_string();
    }

    pub fn set_draft_question(&mut self, text: &str) {
        self.draft_question = text.to_string();
    }

    /// Owned copy of config and history as they stand right now, for
    /// request construction.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            history: self.history.clone(),
        }
    }

    /// Record a completed turn: the user question and the assistant answer
    /// are appended together, so no reader ever observes a half-committed
    /// pair.
    pub fn commit_turn(&mut self, question: String, answer: String, trace: Option<Value>) {
        self.history.push(ConversationTurn::user(question));
        self.history.push(ConversationTurn::assistant(answer.clone()));
        self.last_answer = answer;
        self.last_trace = trace;
        self.last_error = None;
        self.draft_question.clear();
    }

    /// Record a failed turn. History, answer, trace and draft are left
    /// untouched.
    pub fn commit_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    /// Drop diagnostics left over from the previous turn so they never
    /// linger into a new in-flight one. The last answer stays until a
    /// successful turn replaces it.
    pub fn clear_stale_outcome(&mut self) {
        self.last_error = None;
        self.last_trace = None;
    }

    pub fn begin_request(&mut self) {
        self.in_flight = true;
    }

    pub fn end_request(&mut self) {
        self.in_flight = false;
    }
}
