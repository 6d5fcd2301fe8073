//! Wire-level tests for the colour-operation boundary.

use roomtint::api::{ApiConfig, ColorApi, ColorRequest};

fn api() -> ColorApi {
    ColorApi::new(&ApiConfig::new("integration-secret"))
}

fn handle_json(api: &ColorApi, request_json: &str) -> serde_json::Value {
    let request: ColorRequest = serde_json::from_str(request_json).unwrap();
    let response = api.handle(&request).unwrap();
    serde_json::to_value(&response).unwrap()
}

#[test]
fn envelope_shape_matches_the_contract() {
    let value = handle_json(
        &api(),
        r##"{"operation": "harmony", "baseColor": "#dc143c", "harmonyType": "complementary"}"##,
    );

    assert_eq!(value["success"], true);
    assert_eq!(value["operation"], "harmony");
    assert!(value["timestamp"].as_u64().unwrap() > 0);
    let set = value["data"].as_array().unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set[0], "#dc143c");
    assert!(value.get("encrypted").is_none());
}

#[test]
fn process_palette_reports_explicit_nulls() {
    let value = handle_json(
        &api(),
        r##"{"operation": "process-palette", "colors": ["#dc143c"]}"##,
    );

    let data = &value["data"];
    assert!(data["contrasts"].is_null());
    assert!(!data["harmonies"].is_null());
    assert_eq!(data["temperatures"][0]["temperature"], "warm");
    // Crimson alone is saturated and dark, and dramatic outranks energetic
    assert_eq!(data["mood"], "dramatic");
}

#[test]
fn process_palette_with_two_colors_fills_contrasts() {
    let value = handle_json(
        &api(),
        r##"{"operation": "process-palette", "colors": ["#000000", "#ffffff"]}"##,
    );

    let contrast = value["data"]["contrasts"].as_f64().unwrap();
    assert!((contrast - 21.0).abs() < 0.01);
}

#[test]
fn encrypted_request_and_response_round_trip() {
    let api = api();
    let colors = vec!["#3a7bd5".to_string(), "#4a90d9".to_string()];
    let token = api.seal_colors(&colors).unwrap();

    let request_json = format!(
        r#"{{"operation": "mood", "encrypted": "{}", "encryptResponse": true}}"#,
        token
    );
    let value = handle_json(&api, &request_json);

    assert_eq!(value["success"], true);
    assert!(value.get("data").is_none());
    assert!(value["encrypted"].is_string());
}

#[test]
fn validation_and_decrypt_failures_are_client_errors() {
    let api = api();

    let missing: ColorRequest =
        serde_json::from_str(r#"{"operation": "harmony"}"#).unwrap();
    assert_eq!(api.handle(&missing).unwrap_err().status(), 400);

    let unknown: ColorRequest =
        serde_json::from_str(r#"{"operation": "sparkle"}"#).unwrap();
    assert_eq!(api.handle(&unknown).unwrap_err().status(), 400);

    let undecryptable: ColorRequest =
        serde_json::from_str(r#"{"operation": "mood", "encrypted": "garbage"}"#).unwrap();
    let err = api.handle(&undecryptable).unwrap_err();
    assert_eq!(err.status(), 400);
    // The public message never echoes the payload
    assert!(!err.message(false).contains("garbage"));
}
