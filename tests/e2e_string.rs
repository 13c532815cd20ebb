//! End-to-end tests for `/string/{algo}`.

mod common;

use algo_catalog::text::RabinKarp;
use algo_catalog::ServiceConfig;
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{app, app_with, error_message, post};

const TEXT: &str = "the quick brown fox jumps over the lazy dog";
const ALGORITHMS: [&str; 3] = ["naive", "kmp", "rabin"];

#[tokio::test]
async fn test_first_occurrence() {
    for algo in ALGORITHMS {
        for (pattern, expected) in [("jumps", 20), ("the", 0), ("lazy", 35), ("dog", 40), ("cat", -1)] {
            let (status, body) = post(app(), &format!("/string/{algo}"), json!({"text": TEXT, "pattern": pattern})).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body,
                json!({"algorithm": algo, "index": expected, "found": expected >= 0}),
                "{algo} looking for {pattern:?}"
            );
        }
    }
}

#[tokio::test]
async fn test_empty_pattern_matches_at_zero() {
    for algo in ALGORITHMS {
        for text in [TEXT, ""] {
            let (_, body) = post(app(), &format!("/string/{algo}"), json!({"text": text, "pattern": ""})).await;
            assert_eq!(body["index"], json!(0), "{algo} on {text:?}");
            assert_eq!(body["found"], json!(true));
        }
    }
}

#[tokio::test]
async fn test_pattern_longer_than_text() {
    for algo in ALGORITHMS {
        let (_, body) = post(app(), &format!("/string/{algo}"), json!({"text": "ab", "pattern": "abc"})).await;
        assert_eq!(body["index"], json!(-1), "{algo}");
    }
}

#[tokio::test]
async fn test_indices_count_characters() {
    for algo in ALGORITHMS {
        let (_, body) = post(app(), &format!("/string/{algo}"), json!({"text": "naïve café crème", "pattern": "crème"})).await;
        assert_eq!(body["index"], json!(11), "{algo}");
    }
}

#[tokio::test]
async fn test_overlapping_prefixes() {
    for algo in ALGORITHMS {
        let (_, body) = post(app(), &format!("/string/{algo}"), json!({"text": "aaaaab", "pattern": "aab"})).await;
        assert_eq!(body["index"], json!(3), "{algo}");
    }
}

#[tokio::test]
async fn test_configured_rabin_karp_parameters() {
    let config = ServiceConfig {
        rabin_karp: RabinKarp::new(31, 1_000_000_007).unwrap(),
        ..ServiceConfig::default()
    };
    let (_, body) = post(app_with(config), "/string/rabin", json!({"text": TEXT, "pattern": "jumps"})).await;
    assert_eq!(body["index"], json!(20));
}

#[tokio::test]
async fn test_string_rejections() {
    let (status, body) = post(app(), "/string/kmp", json!({"text": TEXT})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Please provide 'text' and 'pattern' fields");

    let (status, body) = post(app(), "/string/kmp", json!({"text": TEXT, "pattern": 5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("Invalid 'pattern' field"));

    let (status, body) = post(app(), "/string/boyer-moore", json!({"text": TEXT, "pattern": "a"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Unknown string algorithm 'boyer-moore'");
}
