//! Header API key strategy tests.
//!
//! Drives `HeaderApiKeyStrategy` directly and records which of the three
//! outcome channels it reports to.


use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;

use actix_header_apikey_core::http::security::{
    AuthCallbacks, AuthenticationStrategy, Failure, HeaderApiKeyStrategy, HeaderKeySpec,
    VerifyError,
};

use common::{api_key, test_strategy, TestUser};

/// Records every call on each channel.
#[derive(Default)]
struct Channels {
    success: Vec<(TestUser, Option<String>)>,
    fail: Vec<(String, Option<StatusCode>)>,
    error: Vec<String>,
}

impl AuthCallbacks<TestUser, String> for Channels {
    fn success(&mut self, user: TestUser, info: Option<String>) {
        self.success.push((user, info));
    }

    fn fail(&mut self, reason: Failure<String>, status: Option<StatusCode>) {
        self.fail.push((reason.to_string(), status));
    }

    fn error(&mut self, cause: VerifyError) {
        self.error.push(cause.to_string());
    }
}

async fn run<S>(strategy: &S, header: Option<&str>) -> Channels
where
    S: AuthenticationStrategy<User = TestUser, Info = String>,
{
    let mut req = TestRequest::default();
    if let Some(value) = header {
        req = req.insert_header(("Authorization", value));
    }
    let mut channels = Channels::default();
    strategy
        .authenticate(&req.to_srv_request())
        .await
        .report(&mut channels);
    channels
}

#[actix_web::test]
async fn test_error_if_verify_errors() {
    let (strategy, _) = test_strategy();
    let channels = run(&strategy, Some(&api_key("erroringKey"))).await;

    assert!(channels.success.is_empty());
    assert!(channels.fail.is_empty());
    assert_eq!(channels.error, vec!["something went wrong".to_string()]);
}

#[actix_web::test]
async fn test_fail_if_verify_yields_no_user() {
    let (strategy, _) = test_strategy();
    let channels = run(&strategy, Some(&api_key("unknown"))).await;

    assert_eq!(channels.fail, vec![("faily".to_string(), None)]);
    assert!(channels.success.is_empty());
    assert!(channels.error.is_empty());
}

#[actix_web::test]
async fn test_succeed_if_verify_succeeds() {
    let (strategy, _) = test_strategy();
    let channels = run(&strategy, Some(&api_key("topSecretApiKey"))).await;

    assert_eq!(
        channels.success,
        vec![(
            TestUser {
                username: "testuser".into()
            },
            Some("success".to_string())
        )]
    );
    assert!(channels.fail.is_empty());
    assert!(channels.error.is_empty());
}

#[actix_web::test]
async fn test_gets_the_correct_api_key_from_the_headers() {
    let (strategy, seen) = test_strategy();
    run(&strategy, Some("Api-Key topSecretApiKey")).await;

    assert_eq!(seen.lock().unwrap().last().map(String::as_str), Some("topSecretApiKey"));
}

#[actix_web::test]
async fn test_fail_if_no_api_key_set() {
    let (strategy, seen) = test_strategy();
    let channels = run(&strategy, None).await;

    assert_eq!(channels.fail, vec![("Missing API Key".to_string(), None)]);
    assert!(channels.success.is_empty());
    assert!(channels.error.is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_fail_if_empty_api_key_set() {
    let (strategy, seen) = test_strategy();
    let channels = run(&strategy, Some("")).await;

    assert_eq!(channels.fail, vec![("Missing API Key".to_string(), None)]);
    assert!(seen.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_fail_if_api_key_is_prefixed_in_a_false_manner() {
    let (strategy, seen) = test_strategy();
    let channels = run(&strategy, Some("WrongPrefix mySuperduperApiKey")).await;

    assert_eq!(
        channels.fail,
        vec![(
            "Invalid API Key prefix, authorization header should start with \"Api-Key \""
                .to_string(),
            None
        )]
    );
    assert!(channels.success.is_empty());
    assert!(channels.error.is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_repeated_prefix_is_kept_in_key() {
    let (strategy, seen) = test_strategy();
    run(&strategy, Some("Api-Key Api-Key nested")).await;

    assert_eq!(seen.lock().unwrap().as_slice(), &["Api-Key nested".to_string()]);
}

#[actix_web::test]
async fn test_empty_prefix_passes_value_verbatim() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);
    let strategy: HeaderApiKeyStrategy<TestUser, String> =
        HeaderApiKeyStrategy::new(move |key, verified, req| {
            recorded.lock().unwrap().push((key, req.is_some()));
            verified.reject(None);
        })
        .header_spec(HeaderKeySpec::from_options(Some("Authorization"), None));

    run(&strategy, Some("Api-Key topSecretApiKey")).await;

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[("Api-Key topSecretApiKey".to_string(), false)]
    );
}

#[actix_web::test]
async fn test_each_attempt_reports_exactly_once() {
    let (strategy, _) = test_strategy();

    for header in [
        None,
        Some(""),
        Some("Bearer x"),
        Some("Api-Key topSecretApiKey"),
        Some("Api-Key unknown"),
        Some("Api-Key erroringKey"),
    ] {
        let channels = run(&strategy, header).await;
        let reports = channels.success.len() + channels.fail.len() + channels.error.len();
        assert_eq!(reports, 1, "header {:?}", header);
    }
}
