//! End-to-end tests for `/sort/{algo}`.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{app, error_message, post};

const ALGORITHMS: [&str; 6] = ["bubble", "selection", "insertion", "merge", "quick", "heap"];

#[tokio::test]
async fn test_every_algorithm_sorts_fixture() {
    for algo in ALGORITHMS {
        let (status, body) = post(app(), &format!("/sort/{algo}"), json!({"array": [64, 34, 25, 12, 22, 11, 90]})).await;
        assert_eq!(status, StatusCode::OK, "{algo}");
        assert_eq!(body, json!({"algorithm": algo, "sorted": [11, 12, 22, 25, 34, 64, 90]}));
    }
}

#[tokio::test]
async fn test_algorithms_agree_on_duplicates_and_negatives() {
    let input = json!({"array": [5, -3, 5, 0, -3, 12, 7, 7, 7, -40]});
    let expected = json!([-40, -3, -3, 0, 5, 5, 7, 7, 7, 12]);
    for algo in ALGORITHMS {
        let (_, body) = post(app(), &format!("/sort/{algo}"), input.clone()).await;
        assert_eq!(body["sorted"], expected, "{algo}");
    }
}

#[tokio::test]
async fn test_edge_shapes() {
    for algo in ALGORITHMS {
        for (input, expected) in [
            (json!([]), json!([])),
            (json!([1]), json!([1])),
            (json!([2, 1]), json!([1, 2])),
            (json!([9, 8, 7, 6, 5]), json!([5, 6, 7, 8, 9])),
        ] {
            let (_, body) = post(app(), &format!("/sort/{algo}"), json!({"array": input})).await;
            assert_eq!(body["sorted"], expected, "{algo}");
        }
    }
}

#[tokio::test]
async fn test_sorted_input_is_a_fixed_point() {
    let sorted = json!([2, 5, 8, 12, 16, 23, 38, 56, 72, 91]);
    for algo in ALGORITHMS {
        let (_, body) = post(app(), &format!("/sort/{algo}"), json!({"array": sorted.clone()})).await;
        assert_eq!(body["sorted"], sorted, "{algo}");
    }
}

#[tokio::test]
async fn test_strings_and_mixed_numbers() {
    let (_, body) = post(app(), "/sort/merge", json!({"array": ["pear", "apple", "fig"]})).await;
    assert_eq!(body["sorted"], json!(["apple", "fig", "pear"]));

    let (_, body) = post(app(), "/sort/quick", json!({"array": [3, 1.5, -2, 0.25]})).await;
    assert_eq!(body["sorted"], json!([-2, 0.25, 1.5, 3]));
}

#[tokio::test]
async fn test_mixed_kinds_follow_total_order() {
    // booleans < numbers < strings
    let (_, body) = post(app(), "/sort/heap", json!({"array": ["b", 2, true, "a", 1, false]})).await;
    assert_eq!(body["sorted"], json!([false, true, 1, 2, "a", "b"]));
}

#[tokio::test]
async fn test_rejections() {
    let (status, body) = post(app(), "/sort/merge", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Please provide 'array' field");

    let (status, body) = post(app(), "/sort/merge", json!({"array": [1, {"nested": true}]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("Invalid 'array' field"));

    let (status, body) = post(app(), "/sort/bogo", json!({"array": [2, 1]})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Unknown sort algorithm 'bogo'");
}
