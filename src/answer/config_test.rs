use super::*;
use serial_test::serial;

/// # Safety
/// Callers are `#[serial]`, so no other test touches the environment concurrently.
unsafe fn clear_answer_env() {
    unsafe {
        std::env::remove_var("ANSWER_SERVICE_URL");
        std::env::remove_var("ANSWER_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("ANSWER_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
#[serial]
fn from_env_requires_service_url() {
    unsafe { clear_answer_env() };

    let err = AnswerConfig::from_env().unwrap_err();
    assert!(matches!(err, AnswerError::MissingServiceUrl { ref var } if var == "ANSWER_SERVICE_URL"));
}

#[test]
#[serial]
fn from_env_applies_default_timeouts() {
    unsafe {
        clear_answer_env();
        std::env::set_var("ANSWER_SERVICE_URL", "http://127.0.0.1:8000/api/ask");
    }

    let cfg = AnswerConfig::from_env().unwrap();
    assert_eq!(cfg.service_url, "http://127.0.0.1:8000/api/ask");
    assert_eq!(cfg.timeouts, AnswerTimeouts::default());
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(120));
    assert_eq!(cfg.timeouts.connect(), Duration::from_secs(10));

    unsafe { clear_answer_env() };
}

#[test]
#[serial]
fn from_env_parses_timeout_overrides() {
    unsafe {
        clear_answer_env();
        std::env::set_var("ANSWER_SERVICE_URL", " https://answers.example.test/api/ask ");
        std::env::set_var("ANSWER_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("ANSWER_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = AnswerConfig::from_env().unwrap();
    assert_eq!(cfg.service_url, "https://answers.example.test/api/ask");
    assert_eq!(cfg.timeouts, AnswerTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_answer_env() };
}

#[test]
#[serial]
fn from_env_bad_timeout_falls_back_to_default() {
    unsafe {
        clear_answer_env();
        std::env::set_var("ANSWER_SERVICE_URL", "http://localhost:8000/api/ask");
        std::env::set_var("ANSWER_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = AnswerConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_ANSWER_REQUEST_TIMEOUT_SECS);

    unsafe { clear_answer_env() };
}

#[test]
fn parse_service_url_rejects_garbage() {
    let err = parse_service_url("not a url").unwrap_err().to_string();
    assert!(err.contains("invalid ANSWER_SERVICE_URL"));
}

#[test]
fn parse_service_url_rejects_non_http_scheme() {
    let err = parse_service_url("ftp://example.test/ask").unwrap_err().to_string();
    assert!(err.contains("unsupported ANSWER_SERVICE_URL scheme 'ftp'"));
}
