//! Trusted device round trips through `StepUpBridge`.

use std::sync::Arc;

use tiqr_gssp::correlation::CookieJar;
use tiqr_gssp::cookie::TrustedDeviceError;
use tiqr_gssp::{FixedClock, GsspError, Settings, StepUpBridge};

// ============================================================================
// Helpers
// ============================================================================

const KEY: &str = "4ac4d0a4f24c0fe4ee2cd2ed2a3ff1e8f7cbcdd2b6b18e4a3c3d2f0e4ea0c1d9";
const ISSUED_AT: i64 = 1_700_000_000;
const LIFETIME: i64 = 30 * 24 * 60 * 60;
const GRACE: i64 = 60;

fn settings() -> Settings {
    Settings::from_json_str(&format!(
        r#"{{
            "trusted_device": {{
                "lifetime_seconds": {LIFETIME},
                "grace_period_seconds": {GRACE},
                "encryption_key": "{KEY}",
                "same_site": "none"
            }},
            "correlation": {{ "salt": "Mr6LpJYtuWRDdVR2_7VgTChFhzQ" }}
        }}"#
    ))
    .expect("parse settings")
}

fn bridge_at(now: i64) -> StepUpBridge {
    StepUpBridge::with_clock(&settings(), Arc::new(FixedClock(now))).expect("build bridge")
}

/// Simulates the browser echoing the `Set-Cookie` back on the next request.
fn browser_after_step_up() -> CookieJar {
    let cookie = bridge_at(ISSUED_AT)
        .remember_device("alice", "apns:device-1")
        .expect("remember device")
        .expect("feature enabled");
    let header = cookie.header_value();
    let pair = header.split(';').next().expect("name=value pair");
    CookieJar::parse(&format!("session=session-id; {pair}"))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn step_up_required_without_cookie() {
    let bridge = bridge_at(ISSUED_AT);
    assert!(bridge.trusted_device_enabled());
    assert!(bridge.requires_step_up(&CookieJar::new(), "alice", "apns:device-1"));
}

#[test]
fn remembered_device_skips_step_up_until_grace_ends() {
    let jar = browser_after_step_up();
    let boundary = ISSUED_AT + LIFETIME + GRACE;

    assert!(!bridge_at(ISSUED_AT).requires_step_up(&jar, "alice", "apns:device-1"));
    assert!(!bridge_at(boundary).requires_step_up(&jar, "alice", "apns:device-1"));
    assert!(bridge_at(boundary + 1).requires_step_up(&jar, "alice", "apns:device-1"));
}

#[test]
fn clock_behind_issuer_requires_step_up() {
    let jar = browser_after_step_up();
    assert!(bridge_at(ISSUED_AT - 1).requires_step_up(&jar, "alice", "apns:device-1"));
}

#[test]
fn cookie_is_bound_to_user_and_device() {
    let jar = browser_after_step_up();
    let bridge = bridge_at(ISSUED_AT + 10);
    assert!(bridge.requires_step_up(&jar, "bob", "apns:device-1"));
    assert!(bridge.requires_step_up(&jar, "alice", "apns:device-2"));
}

#[test]
fn tampered_cookie_requires_step_up() {
    let cookie = bridge_at(ISSUED_AT)
        .remember_device("alice", "apns:device-1")
        .unwrap()
        .unwrap();
    let mut jar = CookieJar::new();
    jar.insert(cookie.name.clone(), format!("{}A", cookie.value));
    assert!(bridge_at(ISSUED_AT).requires_step_up(&jar, "alice", "apns:device-1"));
}

#[test]
fn outbound_cookie_attributes() {
    let cookie = bridge_at(ISSUED_AT)
        .remember_device("alice", "apns:device-1")
        .unwrap()
        .unwrap();
    let header = cookie.header_value();
    assert!(header.starts_with("tiqr-trusted-device="));
    assert!(header.contains(&format!("Max-Age={LIFETIME}")));
    assert!(header.contains("; Secure"));
    assert!(header.contains("; HttpOnly"));
    assert!(header.ends_with("; SameSite=None"));
}

#[test]
fn disabled_feature_always_requires_step_up() {
    let settings = Settings::from_json_str("{}").unwrap();
    let bridge = StepUpBridge::with_clock(&settings, Arc::new(FixedClock(ISSUED_AT))).unwrap();
    assert!(!bridge.trusted_device_enabled());
    assert!(bridge.remember_device("alice", "apns:device-1").unwrap().is_none());
    assert!(bridge.requires_step_up(&browser_after_step_up(), "alice", "apns:device-1"));
}

#[test]
fn bad_key_aborts_startup() {
    let settings = Settings::from_json_str(
        r#"{"trusted_device": {"lifetime_seconds": 60, "encryption_key": "secret"}}"#,
    )
    .unwrap();
    let err = StepUpBridge::from_settings(&settings).err().expect("startup fails");
    match err {
        GsspError::TrustedDevice(e) => {
            assert!(matches!(e, TrustedDeviceError::InvalidEncryptionKey(_)));
            assert!(e.is_configuration_error());
        }
        other => panic!("unexpected error: {other}"),
    }
}
