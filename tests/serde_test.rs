// serde_test.rs - Serialization of spans, captures and matches.

#![cfg(feature = "serde")]

use patina::prelude::*;
use serde_json::json;

#[test]
fn span_serializes_as_bounds() {
    let value = serde_json::to_value(Span::new(1, 3)).unwrap();
    assert_eq!(value, json!({"start": 1, "end": 3}));
}

#[test]
fn span_set_serializes_as_bare_span_list() {
    let mut set = SpanSet::new(Span::new(1, 2));
    set.insert(Span::new(4, 6));
    let value = serde_json::to_value(&set).unwrap();
    assert_eq!(
        value,
        json!([
            {"start": 4, "end": 6},
            {"start": 1, "end": 2},
        ])
    );
}

#[test]
fn captures_serialize_as_a_name_map() {
    let caps = Captures::new()
        .capture("head", Span::new(0, 1))
        .capture("tail", Span::new(2, 3));
    let value = serde_json::to_value(&caps).unwrap();
    assert_eq!(
        value,
        json!({
            "head": [{"start": 0, "end": 1}],
            "tail": [{"start": 2, "end": 3}],
        })
    );
}

#[test]
fn match_serializes_with_its_captures() {
    let hay: Vec<char> = "ab".chars().collect();
    let m = Capture::new("head", One::eq('a')).search(&hay).unwrap();
    let value = serde_json::to_value(&m).unwrap();
    assert_eq!(
        value,
        json!({
            "start": 0,
            "end": 1,
            "captures": {"head": [{"start": 0, "end": 1}]},
        })
    );
}

#[test]
fn repeated_capture_serializes_every_span() {
    let hay: Vec<char> = "aba".chars().collect();
    let pattern = Sequence::new()
        .then(Capture::new("x", One::eq('a')))
        .then(One::eq('b'))
        .then(Capture::new("x", One::eq('a')));
    let m = pattern.match_anchored(&hay).unwrap();
    let value = serde_json::to_value(&m).unwrap();
    assert_eq!(
        value,
        json!({
            "start": 0,
            "end": 3,
            "captures": {
                "x": [
                    {"start": 2, "end": 3},
                    {"start": 0, "end": 1},
                ],
            },
        })
    );
}
