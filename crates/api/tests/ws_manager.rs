//! Tests for `WsManager` and the inbound frame dispatcher.
//!
//! These exercise room membership and fan-out directly, without performing
//! any HTTP upgrades.

use axum::extract::ws::Message;
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use uwrap_api::ws::{handle_text, Room, WsManager};

fn next_json(rx: &mut UnboundedReceiver<Message>) -> serde_json::Value {
    match rx.try_recv() {
        Ok(Message::Text(text)) => serde_json::from_str(text.as_str()).unwrap(),
        other => panic!("expected a text frame, got {other:?}"),
    }
}

#[tokio::test]
async fn add_with_user_joins_user_room() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string(), Some(7)).await;

    assert_eq!(manager.connection_count().await, 1);
    assert!(manager.is_member("conn-1", Room::User(7)).await);
}

#[tokio::test]
async fn anonymous_connection_joins_no_room() {
    let manager = WsManager::new();

    let _rx = manager.add("conn-1".to_string(), None).await;

    assert_eq!(manager.room_count().await, 0);
}

#[tokio::test]
async fn remove_leaves_every_room() {
    let manager = WsManager::new();
    let _rx = manager.add("conn-1".to_string(), Some(7)).await;
    manager.join("conn-1", Room::Project(3)).await;

    let removed = manager.remove("conn-1").await.unwrap();

    assert_eq!(removed.user_id, Some(7));
    assert!(removed.connected_at <= chrono::Utc::now());
    assert_eq!(manager.connection_count().await, 0);
    assert_eq!(manager.room_count().await, 0);
    assert!(manager.remove("conn-1").await.is_none());
}

#[tokio::test]
async fn join_ignores_unknown_connection() {
    let manager = WsManager::new();

    assert!(!manager.join("ghost", Room::Project(1)).await);
    assert_eq!(manager.room_count().await, 0);
}

#[tokio::test]
async fn notify_user_reaches_only_that_user() {
    let manager = WsManager::new();
    let mut alice = manager.add("a".to_string(), Some(1)).await;
    let mut bob = manager.add("b".to_string(), Some(2)).await;

    let delivered = manager.notify_user(1, &json!({ "title": "hi" })).await;

    assert_eq!(delivered, 1);
    let frame = next_json(&mut alice);
    assert_eq!(frame["event"], "notification");
    assert_eq!(frame["data"]["title"], "hi");
    assert!(bob.try_recv().is_err());
}

#[tokio::test]
async fn notify_project_reaches_subscribers_on_every_connection() {
    let manager = WsManager::new();
    let mut first = manager.add("a".to_string(), Some(1)).await;
    let mut second = manager.add("b".to_string(), Some(1)).await;
    let mut outsider = manager.add("c".to_string(), None).await;
    manager.join("a", Room::Project(5)).await;
    manager.join("b", Room::Project(5)).await;

    let delivered = manager
        .notify_project(5, "script.locked", &json!({ "id": 9 }))
        .await;

    assert_eq!(delivered, 2);
    assert_eq!(next_json(&mut first)["event"], "script.locked");
    assert_eq!(next_json(&mut second)["data"]["id"], 9);
    assert!(outsider.try_recv().is_err());
}

#[tokio::test]
async fn subscribe_frame_joins_room_and_acks() {
    let manager = WsManager::new();
    let mut rx = manager.add("conn-1".to_string(), None).await;

    handle_text(&manager, "conn-1", r#"{"event":"subscribe:project","data":"42"}"#).await;

    assert!(manager.is_member("conn-1", Room::Project(42)).await);
    let ack = next_json(&mut rx);
    assert_eq!(ack["event"], "subscribe:project");
    assert_eq!(ack["data"], json!({ "status": "subscribed", "projectId": 42 }));
}

#[tokio::test]
async fn unsubscribe_frame_leaves_room_and_acks() {
    let manager = WsManager::new();
    let mut rx = manager.add("conn-1".to_string(), None).await;
    manager.join("conn-1", Room::Project(42)).await;

    handle_text(&manager, "conn-1", r#"{"event":"unsubscribe:project","data":42}"#).await;

    assert!(!manager.is_member("conn-1", Room::Project(42)).await);
    let ack = next_json(&mut rx);
    assert_eq!(ack["data"]["status"], "unsubscribed");
}

#[tokio::test]
async fn malformed_frame_gets_error_event() {
    let manager = WsManager::new();
    let mut rx = manager.add("conn-1".to_string(), None).await;

    handle_text(&manager, "conn-1", "not json").await;

    let frame = next_json(&mut rx);
    assert_eq!(frame["event"], "error");
    assert!(frame["data"]["message"].is_string());
}

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let manager = WsManager::new();
    let mut rx1 = manager.add("conn-1".to_string(), Some(1)).await;
    let mut rx2 = manager.add("conn-2".to_string(), None).await;

    manager.shutdown_all().await;

    assert_eq!(manager.connection_count().await, 0);
    assert_eq!(manager.room_count().await, 0);
    assert!(matches!(rx1.recv().await, Some(Message::Close(None))));
    assert!(matches!(rx2.recv().await, Some(Message::Close(None))));
}

#[tokio::test]
async fn ping_all_sends_ping() {
    let manager = WsManager::new();
    let mut rx = manager.add("conn-1".to_string(), None).await;

    manager.ping_all().await;

    assert!(matches!(rx.recv().await, Some(Message::Ping(_))));
}
