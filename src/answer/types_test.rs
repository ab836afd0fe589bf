use super::*;

#[test]
fn ask_request_round_trips_query() {
    let req: AskRequest = serde_json::from_str(r#"{"query":"Where do I park?"}"#).unwrap();
    assert_eq!(req.query, "Where do I park?");
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"query":"Where do I park?"}"#);
}

#[test]
fn ask_response_serializes_answer_field() {
    let body = serde_json::to_value(AskResponse { answer: "Lot C3.".into() }).unwrap();
    assert_eq!(body, serde_json::json!({ "answer": "Lot C3." }));
}

#[test]
fn error_messages_name_the_failure() {
    let err = AnswerError::MissingServiceUrl { var: "ANSWER_SERVICE_URL".into() };
    assert_eq!(err.to_string(), "missing answer service url: env var ANSWER_SERVICE_URL not set");
    let err = AnswerError::Response { status: 500, body: "boom".into() };
    assert_eq!(err.to_string(), "answer response error: status 500");
}
