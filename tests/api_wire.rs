use monday_bi::api::{QueryRequest, QueryResponse};
use monday_bi::models::ConversationTurn;
use monday_bi::session::{SessionConfig, Snapshot};
use serde_json::json;

fn sample_snapshot() -> Snapshot {
    Snapshot {
        config: SessionConfig {
            monday_api_key: "mk".to_string(),
            gemini_api_key: "gk".to_string(),
            deals_board_id: "111".to_string(),
            work_orders_board_id: "222".to_string(),
        },
        history: vec![
            ConversationTurn::user("earlier question"),
            ConversationTurn::assistant("earlier answer"),
        ],
    }
}

#[test]
fn test_request_serializes_camel_case_fields() {
    let request = QueryRequest::from_snapshot("current question".to_string(), sample_snapshot());
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "question": "current question",
            "mondayApiKey": "mk",
            "geminiApiKey": "gk",
            "dealsBoardId": "111",
            "workOrdersBoardId": "222",
            "history": [
                {"role": "user", "content": "earlier question"},
                {"role": "assistant", "content": "earlier answer"}
            ]
        })
    );
}

#[test]
fn test_request_history_matches_snapshot_exactly() {
    let snapshot = sample_snapshot();
    let expected = snapshot.history.clone();

    let request = QueryRequest::from_snapshot("q".to_string(), snapshot);

    assert_eq!(request.history, expected);
}

#[test]
fn test_response_tolerates_empty_body() {
    let response: QueryResponse = serde_json::from_value(json!({})).unwrap();

    assert_eq!(response.answer, None);
    assert!(response.trace.is_none());
}

#[test]
fn test_response_parses_answer_and_trace() {
    let response: QueryResponse = serde_json::from_value(json!({
        "answer": "$1.2M across 14 deals",
        "trace": {"rows": 14}
    }))
    .unwrap();

    assert_eq!(response.answer.as_deref(), Some("$1.2M across 14 deals"));
    assert_eq!(response.trace, Some(json!({"rows": 14})));
}

#[test]
fn test_trace_shape_is_preserved_verbatim() {
    // The trace is owned by the backend; whatever shape arrives is stored
    // untouched.
    let trace = json!({
        "monday_api_called": true,
        "deals_fetched": 14,
        "nested": {"columns": ["status", "revenue"], "empty": null},
        "list": [1, "two", {"three": 3}]
    });

    let response: QueryResponse =
        serde_json::from_value(json!({"answer": "ok", "trace": trace.clone()})).unwrap();

    assert_eq!(response.trace, Some(trace));
}
