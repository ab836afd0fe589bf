use super::*;

#[test]
fn ask_request_serializes_query_field() {
    let body = serde_json::to_value(AskRequest { query: "When is move-in?".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "query": "When is move-in?" }));
}

#[test]
fn ask_response_ignores_extra_fields() {
    let resp: AskResponse = serde_json::from_str(r#"{"answer":"Soon.","sources":[]}"#).unwrap();
    assert_eq!(resp.answer, "Soon.");
}

#[test]
fn ask_response_requires_string_answer() {
    assert!(serde_json::from_str::<AskResponse>(r#"{"answer":42}"#).is_err());
    assert!(serde_json::from_str::<AskResponse>(r#"{"reply":"x"}"#).is_err());
}
