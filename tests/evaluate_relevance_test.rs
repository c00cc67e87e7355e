//! End-to-end tests driving the public API against a stub evaluator

#![cfg(unix)]

mod common;

use relevance::{
    BatchCoordinator, BatchMode, Evaluator, EvaluatorConfig, Query, RelevanceError, Transport,
    parse_answers,
};
use serial_test::serial;
use std::time::Duration;

fn evaluator(path: relevance::EvaluatorPath) -> Evaluator {
    Evaluator::new()
        .with_path(path)
        .with_timeout(Duration::from_secs(10))
}

#[tokio::test]
#[serial]
async fn test_combined_marker_answers() {
    let (_dir, path) = common::install_stub();
    let answers = evaluator(path)
        .evaluate_array(&Query::new("Q: \"result1\""))
        .await
        .unwrap();
    assert_eq!(answers, vec!["\"result1\""]);
}

#[tokio::test]
#[serial]
async fn test_batch_strings_and_arrays() {
    let (_dir, path) = common::install_stub();
    let coordinator = BatchCoordinator::new(evaluator(path));

    let arrays = coordinator
        .evaluate_many(["result1", "result2"], BatchMode::Array)
        .await
        .unwrap();
    assert_eq!(arrays, vec![vec!["result1"], vec!["result2"]]);

    let joined = coordinator
        .evaluate_many(["result1", "result2"], BatchMode::Joined)
        .await
        .unwrap();
    assert_eq!(joined, vec![vec!["result1"], vec!["result2"]]);
}

#[tokio::test]
#[serial]
async fn test_batch_error_discards_results() {
    let (_dir, path) = common::install_stub();
    let coordinator = BatchCoordinator::new(evaluator(path).with_transport(Transport::File));

    let err = coordinator
        .evaluate_many(["ok-0", "broken", "ok-2", "ok-3"], BatchMode::Array)
        .await
        .unwrap_err();
    assert!(matches!(err, RelevanceError::ProcessExit { code: Some(1), .. }));
}

#[tokio::test]
#[serial]
async fn test_batch_timeout_reported() {
    let (_dir, path) = common::install_stub();
    let coordinator =
        BatchCoordinator::new(evaluator(path).with_timeout(Duration::from_millis(300)));

    let err = coordinator
        .evaluate_many(["fast", "slow"], BatchMode::Array)
        .await
        .unwrap_err();
    assert_eq!(err, RelevanceError::Timeout(Duration::from_millis(300)));
}

#[tokio::test]
#[serial]
async fn test_config_driven_evaluation() {
    let (_dir, path) = common::install_stub();
    let config = EvaluatorConfig {
        qna_path: Some(path.into_path_buf()),
        transport: Transport::File,
        max_concurrency: Some(1),
        ..Default::default()
    };

    let results = BatchCoordinator::from_config(&config)
        .unwrap()
        .evaluate_many(["a", "b", "c"], BatchMode::Array)
        .await
        .unwrap();
    assert_eq!(results, vec![vec!["a"], vec!["b"], vec!["c"]]);
}

#[test]
fn test_parse_crlf_output() {
    let raw = "Q: x\r\nQ: A: 1\r\nA: \r\nT: integer\r\n";
    assert_eq!(parse_answers(raw), vec!["1", ""]);
}
