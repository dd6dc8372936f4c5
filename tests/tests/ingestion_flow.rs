//! End-to-end ingestion tests: HTTP in, pool state out.
//!
//! Each test drives a freshly spawned node through its public HTTP surface
//! and then inspects the runtime's pool directly.

use relay_tests::{signed_transaction, TestNode};
use relay_types::Transaction;

async fn post_transaction(node: &TestNode, tx: &Transaction) -> reqwest::Response {
    reqwest::Client::new()
        .post(node.url("transactions"))
        .json(tx)
        .send()
        .await
        .unwrap()
}

fn pool_len(node: &TestNode) -> usize {
    use relay_mempool::Pool;
    node.runtime.app_state().pool.transactions().len()
}

#[tokio::test]
async fn valid_transaction_returns_200() {
    let node = TestNode::spawn().await;
    let tx = signed_transaction(10, "recipient");

    let response = post_transaction(&node, &tx).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn valid_transaction_enters_memory_pool() {
    let node = TestNode::spawn().await;
    let tx = signed_transaction(10, "recipient");

    post_transaction(&node, &tx).await;

    assert_eq!(pool_len(&node), 1);
}

#[tokio::test]
async fn malformed_body_returns_400_with_error() {
    let node = TestNode::spawn().await;

    let response = reqwest::Client::new()
        .post(node.url("transactions"))
        .header("content-type", "application/json")
        .body("{definitely not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
    assert_eq!(pool_len(&node), 0);
}

#[tokio::test]
async fn tampered_signature_is_dropped_silently() {
    let node = TestNode::spawn().await;
    let mut tx = signed_transaction(10, "recipient");
    tx.signature = b"invalid".to_vec();

    let response = post_transaction(&node, &tx).await;

    // Pipeline rejection is invisible to the HTTP caller.
    assert_eq!(response.status(), 200);
    assert_eq!(pool_len(&node), 0);
}

#[tokio::test]
async fn negative_amount_is_dropped() {
    let node = TestNode::spawn().await;
    let tx = signed_transaction(-10, "recipient");

    post_transaction(&node, &tx).await;

    assert_eq!(pool_len(&node), 0);
}

#[tokio::test]
async fn empty_recipient_is_dropped() {
    let node = TestNode::spawn().await;
    let tx = signed_transaction(10, "");

    post_transaction(&node, &tx).await;

    assert_eq!(pool_len(&node), 0);
}

#[tokio::test]
async fn missing_public_key_is_dropped() {
    let node = TestNode::spawn().await;
    let mut tx = signed_transaction(10, "recipient");
    tx.public_key.clear();

    post_transaction(&node, &tx).await;

    assert_eq!(pool_len(&node), 0);
}

#[tokio::test]
async fn future_timestamp_is_dropped() {
    let node = TestNode::spawn().await;
    let mut tx = signed_transaction(10, "recipient");
    tx.timestamp += 3600;

    post_transaction(&node, &tx).await;

    assert_eq!(pool_len(&node), 0);
}

#[tokio::test]
async fn empty_pool_lists_no_transactions() {
    let node = TestNode::spawn().await;

    let response = reqwest::get(node.url("transactions")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Vec<Transaction> = response.json().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn listed_transactions_preserve_insertion_order() {
    let node = TestNode::spawn().await;
    post_transaction(&node, &signed_transaction(1, "alice")).await;
    post_transaction(&node, &signed_transaction(2, "bob")).await;

    let listed: Vec<Transaction> = reqwest::get(node.url("transactions"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let recipients: Vec<_> = listed.iter().map(|tx| tx.recipient.as_str()).collect();
    assert_eq!(recipients, ["alice", "bob"]);
}

#[tokio::test]
async fn concurrent_submissions_lose_nothing() {
    let node = TestNode::spawn().await;
    let n = 16;

    let mut handles = Vec::new();
    for i in 0..n {
        let url = node.url("transactions");
        handles.push(tokio::spawn(async move {
            let tx = signed_transaction(i + 1, &format!("recipient-{i}"));
            reqwest::Client::new()
                .post(url)
                .json(&tx)
                .send()
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().status(), 200);
    }

    assert_eq!(pool_len(&node), n as usize);
}
