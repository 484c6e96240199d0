//! Coercing getters over loosely typed stash contents.

use crate::common::*;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

// ============================================================================
// get_bool
// ============================================================================

#[test]
fn bool_from_string_is_exact_match_only() {
    let mut stash = Stash::new();
    stash.add("lower", "true");
    stash.add("upper", "TRUE");
    stash.add("one", "1");

    assert!(stash.get_bool("lower", false));
    assert!(!stash.get_bool("upper", true));
    assert!(!stash.get_bool("one", true));
}

#[test]
fn bool_from_numbers_requires_one() {
    let mut stash = Stash::new();
    stash.add("int_one", 1);
    stash.add("int_two", 2);
    stash.add("float_one", 1.0);
    stash.add("float_half", 0.5);

    assert!(stash.get_bool("int_one", false));
    assert!(!stash.get_bool("int_two", true));
    assert!(stash.get_bool("float_one", false));
    assert!(!stash.get_bool("float_half", true));
}

#[test]
fn bool_falls_back_to_default_for_other_shapes() {
    let mut stash = Stash::new();
    stash.add("list", vec![Value::Bool(true)]);
    stash.add("nothing", Value::Null);

    assert!(stash.get_bool("list", true));
    assert!(!stash.get_bool("list", false));
    assert!(stash.get_bool("nothing", true));
    assert!(stash.get_bool("absent", true));
}

// ============================================================================
// get_int / get_str
// ============================================================================

#[test]
fn int_parses_strings_and_truncates_floats() {
    let mut stash = Stash::new();
    stash.add(keys::CALLBACK_COUNTER, "42");
    stash.add("ratio", 9.99);
    stash.add("negative", -2.7);
    stash.add("word", "forty-two");

    assert_eq!(stash.get_int(&keys::CALLBACK_COUNTER, 0), 42);
    assert_eq!(stash.get_int("ratio", 0), 9);
    assert_eq!(stash.get_int("negative", 0), -2);
    assert_eq!(stash.get_int("word", -1), -1);
    assert_eq!(stash.get_int("absent", 5), 5);
}

#[test]
fn str_renders_every_scalar() {
    let mut stash = Stash::new();
    stash.add("s", "text");
    stash.add("i", 12);
    stash.add("b", false);
    stash.add("f", 3.0);

    assert_eq!(stash.get_str("s"), "text");
    assert_eq!(stash.get_str("i"), "12");
    assert_eq!(stash.get_str("b"), "false");
    assert_eq!(stash.get_str("f"), "3");
}

#[test]
fn str_absent_and_empty_are_indistinguishable() {
    let mut stash = Stash::new();
    stash.add("empty", "");

    assert_eq!(stash.get_str("empty"), stash.get_str("absent"));
    assert!(stash.has("empty"));
    assert!(!stash.has("absent"));
}

// ============================================================================
// get_struct / get_url / get_uuid
// ============================================================================

#[derive(Debug, PartialEq, Deserialize)]
struct GatewayPoint {
    host: String,
    port: u16,
}

#[test]
fn struct_decodes_from_json_text_and_objects() {
    let mut stash = Stash::new();
    stash.add(keys::GM_API_POINT, r#"{"host":"gw.test","port":8443}"#);

    let from_text: Option<GatewayPoint> = stash.get_struct(&keys::GM_API_POINT).unwrap();
    assert_eq!(
        from_text,
        Some(GatewayPoint {
            host: "gw.test".to_string(),
            port: 8443
        })
    );

    let json: Stash = serde_json::from_str(r#"{"point":{"host":"gw.test","port":80}}"#).unwrap();
    let from_object: Option<GatewayPoint> = json.get_struct("point").unwrap();
    assert_eq!(from_object.map(|p| p.port), Some(80));
}

#[test]
fn struct_reports_mismatch_and_ignores_scalars() {
    let mut stash = Stash::new();
    stash.add("bad", r#"{"host":"gw.test"}"#);
    stash.add("number", 3);

    assert!(stash.get_struct::<GatewayPoint>("bad").is_err());
    assert_eq!(stash.get_struct::<GatewayPoint>("number").unwrap(), None);
    assert_eq!(stash.get_struct::<GatewayPoint>("absent").unwrap(), None);
}

#[test]
fn url_requires_absolute_string() {
    let mut stash = Stash::new();
    stash.add(keys::GM_API_URL, "https://gateway.test/v1/");
    stash.add("relative", "/v1/pay");
    stash.add("number", 80);

    let url = stash.get_url(&keys::GM_API_URL).unwrap();
    assert_eq!(url, Url::parse("https://gateway.test/v1/").unwrap());
    assert_eq!(url.host_str(), Some("gateway.test"));
    assert_eq!(url.join("pay").unwrap().path(), "/v1/pay");
    assert!(stash.get_url("relative").is_none());
    assert!(stash.get_url("number").is_none());
    assert!(stash.get_url("absent").is_none());
}

#[test]
fn uuid_defaults_to_nil() {
    let id = Uuid::new_v4();
    let mut stash = Stash::new();
    stash.add(keys::API_ACCESS_KEY_REF, id.to_string());
    stash.add("garbage", "not-a-uuid");

    assert_eq!(stash.get_uuid(&keys::API_ACCESS_KEY_REF), id);
    assert_eq!(stash.get_uuid("garbage"), Uuid::nil());
    assert_eq!(stash.get_uuid("absent"), Uuid::nil());
}
