use serde_json::Value;

use super::fixture::TestFixture;

#[test]
fn test_full_offer_funnel() {
    let fixture = TestFixture::new("test_full_offer_funnel");

    // Fresh state: offer allowed, nothing written.
    let out = fixture.run(&["should-offer", "--user", "alice", "--cooldown-hours", "24"]);
    assert!(out.success);
    assert_eq!(out.code, Some(0));
    let json = out.json();
    assert_eq!(json["should_offer"], Value::Bool(true));
    assert_eq!(json["reason"], "no_history");
    assert_eq!(json["cooldown_hours"], 24);
    assert_eq!(json["user"], "alice");
    assert_eq!(
        json["state_file"],
        fixture.state.path().display().to_string()
    );
    assert!(fixture.state.read_raw().is_none());

    // Record the offer.
    let out = fixture.run(&["record", "--user", "alice", "--event", "shown"]);
    assert!(out.success);
    assert_eq!(out.code, Some(0));
    let json = out.json();
    assert_eq!(json["ok"], Value::Bool(true));
    assert_eq!(json["event"], "shown");
    assert_eq!(json["stats"]["shown"], 1);

    let saved = fixture.state.read_json();
    assert_eq!(saved["version"], 1);
    assert_eq!(saved["users"]["alice"]["stats"]["shown"], 1);
    assert!(saved["users"]["alice"]["last_offer_at"].is_string());

    // Immediately after: on cooldown.
    let out = fixture.run(&["should-offer", "--user", "alice", "--cooldown-hours", "24"]);
    let json = out.json();
    assert_eq!(json["should_offer"], Value::Bool(false));
    assert_eq!(json["reason"], "cooldown");

    // Three declines.
    for _ in 0..3 {
        assert!(fixture
            .run(&["record", "--user", "alice", "--event", "declined"])
            .success);
    }
    let saved = fixture.state.read_json();
    assert_eq!(saved["users"]["alice"]["stats"]["declined"], 3);
    assert_eq!(saved["users"]["alice"]["stats"]["shown"], 1);
}

#[test]
fn test_default_cooldown_is_24_hours() {
    let fixture = TestFixture::new("test_default_cooldown_is_24_hours");
    let out = fixture.run(&["should-offer", "--user", "carol"]);
    assert_eq!(out.json()["cooldown_hours"], 24);
}

#[test]
fn test_negative_cooldown_reoffers_immediately() {
    let fixture = TestFixture::new("test_negative_cooldown_reoffers_immediately");
    assert!(fixture
        .run(&["record", "--user", "alice", "--event", "shown"])
        .success);

    let out = fixture.run(&["should-offer", "--user", "alice", "--cooldown-hours", "-5"]);
    let json = out.json();
    assert_eq!(json["should_offer"], Value::Bool(true));
    assert_eq!(json["reason"], "cooldown_expired");
    assert_eq!(json["cooldown_hours"], -5);
}

#[test]
fn test_expired_offer_from_state_file() {
    let fixture = TestFixture::new("test_expired_offer_from_state_file");
    fixture.state.write_raw(
        r#"{"version": 1, "users": {"dave": {"stats": {"shown": 1, "accepted": 0, "declined": 0}, "last_offer_at": "2000-01-01T00:00:00+00:00"}}}"#,
    );
    let json = fixture
        .run(&["should-offer", "--user", "dave"])
        .json();
    assert_eq!(json["reason"], "cooldown_expired");
}

#[test]
fn test_corrupt_state_file_is_recovered() {
    let fixture = TestFixture::new("test_corrupt_state_file_is_recovered");
    fixture.state.write_raw("[\"not\", \"an\", \"object\"]");

    let out = fixture.run(&["should-offer", "--user", "alice"]);
    assert!(out.success);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.json()["reason"], "no_history");
    assert!(!out.stderr.contains("ERROR"));

    let out = fixture.run(&["record", "--user", "alice", "--event", "accepted"]);
    assert!(out.success);
    assert_eq!(out.code, Some(0));
    let saved = fixture.state.read_json();
    assert_eq!(saved["users"]["alice"]["stats"]["accepted"], 1);
    assert!(saved["users"]["alice"]["last_accept_at"].is_string());
}

#[test]
fn test_users_are_independent_and_file_is_sorted() {
    let fixture = TestFixture::new("test_users_are_independent_and_file_is_sorted");
    assert!(fixture.run(&["record", "--user", "zoe", "--event", "shown"]).success);
    assert!(fixture.run(&["record", "--user", "adam", "--event", "accepted"]).success);

    let out = fixture.run(&["should-offer", "--user", "adam"]);
    assert_eq!(out.json()["reason"], "no_history");

    let raw = fixture.state.read_raw().unwrap();
    let adam = raw.find("\"adam\"").unwrap();
    let zoe = raw.find("\"zoe\"").unwrap();
    assert!(adam < zoe);
    assert!(raw.find("\"users\"").unwrap() < raw.find("\"version\"").unwrap());
    assert!(raw.contains("\n  \"users\": {"));
}

#[test]
fn test_record_reports_full_stats() {
    let fixture = TestFixture::new("test_record_reports_full_stats");
    for event in ["shown", "accepted", "declined"] {
        assert!(fixture.run(&["record", "--user", "eve", "--event", event]).success);
    }
    let out = fixture.run(&["record", "--user", "eve", "--event", "shown"]);
    let stats = &out.json()["stats"];
    assert_eq!(stats["shown"], 2);
    assert_eq!(stats["accepted"], 1);
    assert_eq!(stats["declined"], 1);
}
