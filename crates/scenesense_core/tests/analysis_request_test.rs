//! Analysis request construction and deserialization tests.

use scenesense_core::{AnalysisRequest, Mode};
use serde_json::json;

fn request_json(mode: &str) -> serde_json::Value {
    json!({
        "scene_text": "INT. GARAGE - NIGHT",
        "mode": mode,
        "model": "llama-3.1-8b-instant",
        "temperature": 0.4,
        "max_tokens": 1200
    })
}

#[test]
fn test_unknown_mode_deserializes_as_director() {
    let request: AnalysisRequest =
        serde_json::from_value(request_json("cinematographer")).expect("lenient mode");
    assert_eq!(*request.mode(), Mode::Director);
}

#[test]
fn test_writer_mode_deserializes() {
    let request: AnalysisRequest =
        serde_json::from_value(request_json("writer")).expect("writer mode");
    assert_eq!(*request.mode(), Mode::Writer);
}

#[test]
fn test_builder_accepts_mode_names() {
    let request = AnalysisRequest::builder()
        .scene_text("INT. GARAGE - NIGHT")
        .mode("storyboard")
        .model("llama-3.1-8b-instant")
        .build()
        .expect("request builds");
    assert_eq!(*request.mode(), Mode::Director);
}
