use threadlens_core::{AnalysisError, CoreError, ErrorExt, FetchError};

#[test]
fn test_error_codes() {
    let input_error = CoreError::Input {
        message: "not a URL".to_string(),
    };
    assert_eq!(input_error.error_code(), "INPUT");

    let fetch_error = CoreError::Fetch(FetchError::Status {
        page: 3,
        status: 503,
    });
    assert_eq!(fetch_error.error_code(), "FETCH");

    let analysis_error = CoreError::Analysis(AnalysisError::AuthRejected);
    assert_eq!(analysis_error.error_code(), "ANALYSIS");

    let config_error = CoreError::Analysis(AnalysisError::MissingConfig {
        field: "credential".to_string(),
    });
    assert_eq!(config_error.error_code(), "ANALYSIS");
    assert_eq!(
        AnalysisError::MissingConfig {
            field: "credential".to_string()
        }
        .error_code(),
        "ANALYSIS_MISSING_CONFIG"
    );
}

#[test]
fn test_user_friendly_messages() {
    let fetch_error = CoreError::Fetch(FetchError::Status {
        page: 2,
        status: 500,
    });
    let message = fetch_error.user_friendly_message();
    assert!(message.contains("500"));
    assert!(message.contains("page 2"));

    let config_error = AnalysisError::MissingConfig {
        field: "endpoint_url".to_string(),
    };
    let message = config_error.user_friendly_message();
    assert!(message.contains("endpoint_url"));

    // The 404 message must point at the missing completions path suffix
    let path_error = AnalysisError::EndpointPath;
    assert!(path_error
        .user_friendly_message()
        .contains("/v1/chat/completions"));

    let auth_error = AnalysisError::AuthRejected;
    assert!(auth_error.user_friendly_message().contains("401"));
}

#[test]
fn test_request_error_carries_status_and_snippet() {
    let error = AnalysisError::Request {
        status: 500,
        snippet: "oops".to_string(),
    };
    let message = error.user_friendly_message();
    assert!(message.contains("500"));
    assert!(message.contains("oops"));
}

#[test]
fn test_error_conversions() {
    let error: CoreError = FetchError::Network {
        page: 1,
        details: "connection refused".to_string(),
    }
    .into();
    assert!(matches!(error, CoreError::Fetch(_)));

    let error: CoreError = AnalysisError::EndpointPath.into();
    assert!(matches!(error, CoreError::Analysis(_)));
}

#[test]
fn test_logging_does_not_panic() {
    let error = CoreError::Analysis(AnalysisError::AuthRejected);
    error.log_error();
    error.log_warn();
}
