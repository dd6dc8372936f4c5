//! End-to-end broadcast tests: a registered peer observes exactly the
//! relayed payload.

use std::time::Duration;

use relay_tests::{signed_transaction, spawn_capture_peer, TestNode};
use relay_types::Transaction;

/// Polls the capture buffer until it holds `expected` deliveries or the
/// deadline passes.
async fn wait_for_deliveries(captured: &relay_tests::CapturedBodies, expected: usize) {
    for _ in 0..40 {
        if captured.lock().len() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!(
        "expected {expected} deliveries, saw {}",
        captured.lock().len()
    );
}

#[tokio::test]
async fn registered_peer_receives_ingested_transaction() {
    let (peer_url, captured) = spawn_capture_peer().await;
    let node = TestNode::spawn().await;

    reqwest::Client::new()
        .post(node.url("nodes"))
        .json(&serde_json::json!({ "address": peer_url }))
        .send()
        .await
        .unwrap();

    let tx = signed_transaction(10, "recipient");
    reqwest::Client::new()
        .post(node.url("transactions"))
        .json(&tx)
        .send()
        .await
        .unwrap();

    wait_for_deliveries(&captured, 1).await;

    let bodies = captured.lock();
    assert_eq!(bodies.len(), 1, "exactly one delivery per peer");

    let relayed: Transaction = serde_json::from_slice(&bodies[0]).unwrap();
    assert_eq!(relayed, tx);
}

#[tokio::test]
async fn every_registered_peer_is_reached() {
    let (peer_a_url, captured_a) = spawn_capture_peer().await;
    let (peer_b_url, captured_b) = spawn_capture_peer().await;
    let node = TestNode::spawn().await;

    let client = reqwest::Client::new();
    for peer in [&peer_a_url, &peer_b_url] {
        client
            .post(node.url("nodes"))
            .json(&serde_json::json!({ "address": peer }))
            .send()
            .await
            .unwrap();
    }

    let tx = signed_transaction(10, "recipient");
    client
        .post(node.url("transactions"))
        .json(&tx)
        .send()
        .await
        .unwrap();

    wait_for_deliveries(&captured_a, 1).await;
    wait_for_deliveries(&captured_b, 1).await;
}

#[tokio::test]
async fn unreachable_peer_does_not_block_the_rest() {
    let (reachable_url, captured) = spawn_capture_peer().await;
    let node = TestNode::spawn().await;

    let client = reqwest::Client::new();
    // The dead peer comes first in registration order.
    for peer in ["http://127.0.0.1:1", reachable_url.as_str()] {
        client
            .post(node.url("nodes"))
            .json(&serde_json::json!({ "address": peer }))
            .send()
            .await
            .unwrap();
    }

    let response = client
        .post(node.url("transactions"))
        .json(&signed_transaction(10, "recipient"))
        .send()
        .await
        .unwrap();

    // The caller still gets its acknowledgement.
    assert_eq!(response.status(), 200);
    wait_for_deliveries(&captured, 1).await;
}

#[tokio::test]
async fn rejected_transaction_is_never_broadcast() {
    let (peer_url, captured) = spawn_capture_peer().await;
    let node = TestNode::spawn().await;

    let client = reqwest::Client::new();
    client
        .post(node.url("nodes"))
        .json(&serde_json::json!({ "address": peer_url }))
        .send()
        .await
        .unwrap();

    let mut tx = signed_transaction(10, "recipient");
    tx.signature[0] ^= 0xFF;
    client
        .post(node.url("transactions"))
        .json(&tx)
        .send()
        .await
        .unwrap();

    // Give a stray delivery time to arrive before asserting.
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(captured.lock().is_empty());
}
