use std::sync::Once;
use std::time::Duration;

use jobmatch_engine::{
    AnalysisReport, AnalyzeBackend, AnalyzeError, AnalyzeRequest, BackendSettings,
    HttpAnalyzeBackend,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(match_logging::initialize_for_tests);
}

fn backend_for(server: &MockServer) -> HttpAnalyzeBackend {
    HttpAnalyzeBackend::new(BackendSettings {
        base_url: server.uri(),
        ..BackendSettings::default()
    })
}

fn request() -> AnalyzeRequest {
    AnalyzeRequest {
        resume_name: "candidate.pdf".to_string(),
        resume_bytes: b"%PDF-1.4 candidate".to_vec(),
        job_description: "Senior Rust engineer, Tokio experience required".to_string(),
    }
}

#[tokio::test]
async fn analyze_parses_a_success_report() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "match_percentage": 75,
            "matching_skills": ["Python", "Machine Learning"],
            "missing_skills": ["TensorFlow"],
            "explanation": "Good match. Your Python and ML skills are strong.",
            "analysis_type": "Basic Analysis",
        })))
        .mount(&server)
        .await;

    let report = backend_for(&server)
        .analyze(request())
        .await
        .expect("analyze ok");

    assert_eq!(
        report,
        AnalysisReport {
            match_percentage: 75,
            matching_skills: vec!["Python".to_string(), "Machine Learning".to_string()],
            missing_skills: vec!["TensorFlow".to_string()],
            explanation: "Good match. Your Python and ML skills are strong.".to_string(),
            analysis_type: Some("Basic Analysis".to_string()),
        }
    );
}

#[tokio::test]
async fn analyze_tolerates_missing_optional_fields() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "match_percentage": 0,
        })))
        .mount(&server)
        .await;

    let report = backend_for(&server)
        .analyze(request())
        .await
        .expect("analyze ok");

    assert_eq!(report.match_percentage, 0);
    assert!(report.matching_skills.is_empty());
    assert!(report.missing_skills.is_empty());
    assert_eq!(report.analysis_type, None);
}

#[tokio::test]
async fn analyze_sends_multipart_resume_and_job_description() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "match_percentage": 1 })),
        )
        .mount(&server)
        .await;

    backend_for(&server)
        .analyze(request())
        .await
        .expect("analyze ok");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let content_type = received[0]
        .headers
        .get("content-type")
        .expect("content-type present")
        .to_str()
        .expect("ascii header");
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"resume\""));
    assert!(body.contains("filename=\"candidate.pdf\""));
    assert!(body.contains("name=\"job_description\""));
    assert!(body.contains("Senior Rust engineer, Tokio experience required"));
}

#[tokio::test]
async fn structured_error_body_is_surfaced_verbatim() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "model unavailable" })),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server).analyze(request()).await.unwrap_err();

    assert_eq!(err, AnalyzeError::Service("model unavailable".to_string()));
    assert_eq!(err.to_string(), "model unavailable");
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_the_status_code() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = backend_for(&server).analyze(request()).await.unwrap_err();

    assert_eq!(
        err,
        AnalyzeError::Service("analysis failed (HTTP 502)".to_string())
    );
}

#[tokio::test]
async fn malformed_success_body_is_rejected() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>not json</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server).analyze(request()).await.unwrap_err();

    assert_eq!(err, AnalyzeError::MalformedResponse);
}

#[tokio::test]
async fn unreachable_service_reports_connectivity() {
    init_logging();
    // Nothing listens on the discard port.
    let backend = HttpAnalyzeBackend::new(BackendSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..BackendSettings::default()
    });

    let err = backend.analyze(request()).await.unwrap_err();

    assert!(matches!(err, AnalyzeError::Connectivity(_)));
}

#[tokio::test]
async fn slow_service_reports_connectivity_via_timeout() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "match_percentage": 1 })),
        )
        .mount(&server)
        .await;

    let backend = HttpAnalyzeBackend::new(BackendSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..BackendSettings::default()
    });

    let err = backend.analyze(request()).await.unwrap_err();

    assert!(matches!(err, AnalyzeError::Connectivity(_)));
}

#[tokio::test]
async fn health_accepts_any_parseable_json_body() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "message": "Server is running",
            "ml_modules": "available",
        })))
        .mount(&server)
        .await;

    backend_for(&server).health().await.expect("health ok");
}

#[tokio::test]
async fn health_rejects_a_non_json_body() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let err = backend_for(&server).health().await.unwrap_err();

    assert_eq!(err, AnalyzeError::MalformedResponse);
}

#[tokio::test]
async fn health_fails_on_error_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = backend_for(&server).health().await.unwrap_err();

    assert_eq!(
        err,
        AnalyzeError::Service("health probe failed (HTTP 503)".to_string())
    );
}
