use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ConversationTurn;
use crate::session::Snapshot;

/// Body of `POST /query`. The history is the pre-turn history: the current
/// question is carried separately and is not part of it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub question: String,
    pub monday_api_key: String,
    pub gemini_api_key: String,
    pub deals_board_id: String,
    pub work_orders_board_id: String,
    pub history: Vec<ConversationTurn>,
}

impl QueryRequest {
    pub fn from_snapshot(question: String, snapshot: Snapshot) -> Self {
        Self {
            question,
            monday_api_key: snapshot.config.monday_api_key,
            gemini_api_key: snapshot.config.gemini_api_key,
            deals_board_id: snapshot.config.deals_board_id,
            work_orders_board_id: snapshot.config.work_orders_board_id,
            history: snapshot.history,
        }
    }
}

/// Success body. Both fields are optional; the trace is an opaque payload
/// owned by the backend and is stored and rendered verbatim, never parsed.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub answer: Option<String>,
    pub trace: Option<Value>,
}
