use std::error::Error;
use webtldr::errors::SummarizeError;

#[test]
fn test_summarize_error_implements_error_trait() {
    // Verify SummarizeError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    // Verify Display implementation works correctly
    let error = SummarizeError::ConfigError("OPENAI_API_KEY is empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to load configuration: OPENAI_API_KEY is empty"
    );

    let error = SummarizeError::FetchError("connection refused".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to fetch page: connection refused"
    );

    let error = SummarizeError::ParseError("document is not valid UTF-8".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to parse HTML: document is not valid UTF-8"
    );

    let error = SummarizeError::ApiError("status 429".to_string());
    assert_eq!(format!("{error}"), "Failed to access OpenAI API: status 429");
}

#[test]
fn test_summarize_error_is_send_and_sync() {
    // Errors cross await points in the pipeline
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SummarizeError>();
}
