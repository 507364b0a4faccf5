//! Correlation ids through settings and the request log context.

use tiqr_gssp::correlation::{CookieJar, RequestCookies};
use tiqr_gssp::{log_context, Settings};

#[test]
fn correlation_id_from_cookie_header() {
    let settings = Settings::from_json_str(
        r#"{"correlation": {"session_cookie_name": "session", "salt": "Mr6LpJYtuWRDdVR2_7VgTChFhzQ"}}"#,
    )
    .unwrap();
    let service = settings.correlation_service();
    let jar = CookieJar::parse("theme=dark; session=session-id");

    let id = service.generate_correlation_id(&jar).unwrap();
    assert_eq!(id.to_string(), "f02614d0");
    assert_eq!(service.generate_correlation_id(&jar).unwrap(), id);
}

#[test]
fn short_salt_disables_correlation() {
    let settings = Settings::from_json_str(
        r#"{"correlation": {"salt": "fifteen-chars!!"}}"#,
    )
    .unwrap();
    let jar = CookieJar::parse("session=session-id");
    assert_eq!(jar.cookie("session"), Some("session-id"));
    assert!(settings.correlation_service().generate_correlation_id(&jar).is_none());
}

#[test]
fn log_context_works_with_and_without_session() {
    let service = Settings::default().correlation_service();
    let _without = log_context(&service, &CookieJar::new()).entered();

    let settings = Settings::from_json_str(
        r#"{"correlation": {"salt": "Mr6LpJYtuWRDdVR2_7VgTChFhzQ"}}"#,
    )
    .unwrap();
    let _with = log_context(&settings.correlation_service(), &CookieJar::parse("session=x"));
}
