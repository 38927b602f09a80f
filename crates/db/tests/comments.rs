//! Integration tests for proposal comment threads:
//! - Typed payloads round-trip through the thread
//! - The thread stores arbitrary shapes without validating them
//! - Paging walks the thread in the store's default order

mod common;

use std::sync::Arc;

use chrono::Utc;
use common::{mem_store, test_user};
use questboard_core::Timestamp;
use questboard_db::models::proposal::ProposalDraft;
use questboard_db::repositories::{CommentThread, ProposalRepo};
use questboard_db::is_last_page;
use questboard_events::{EntityKind, EventBus};
use questboard_store::StoreHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The comment shape the board UI writes today. The thread itself does
/// not require it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentPayload {
    uid: String,
    text: String,
    created_at: Timestamp,
}

fn new_comment(uid: &str, text: &str) -> CommentPayload {
    CommentPayload {
        uid: uid.to_string(),
        text: text.to_string(),
        created_at: Utc::now(),
    }
}

async fn board_with_proposal(store: StoreHandle) -> (CommentThread, String) {
    let proposals = ProposalRepo::new(store.clone());
    let thread = CommentThread::new(store);
    let doc_ref = proposals
        .create(&ProposalDraft {
            title: "Community garden".to_string(),
            details: "Use the empty lot".to_string(),
            author: test_user("author-1"),
            status: None,
        })
        .await
        .unwrap();
    (thread, doc_ref.id().to_string())
}

// ---------------------------------------------------------------------------
// Test: A typed comment round-trips through the thread
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_comment_round_trips() {
    let (thread, id) = board_with_proposal(mem_store()).await;
    let comment = new_comment("commenter-1", "Great idea");

    thread.create(&id, &comment).await.unwrap();

    let page = thread.next_page(&id, None, 10).await.unwrap();
    assert_eq!(page.len(), 1);
    let decoded: CommentPayload = page[0].decode().unwrap().expect("comment should exist");
    assert_eq!(decoded, comment);
}

// ---------------------------------------------------------------------------
// Test: The thread stores shapes it has never seen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_thread_accepts_arbitrary_shapes() {
    let (thread, id) = board_with_proposal(mem_store()).await;

    thread
        .create(
            &id,
            &json!({
                "kind": "sticker",
                "stickerId": 7,
                "meta": { "pinned": true },
            }),
        )
        .await
        .unwrap();

    let page = thread.next_page(&id, None, 10).await.unwrap();
    assert_eq!(page.len(), 1);
    let fields = page[0].fields().expect("comment should exist");
    assert_eq!(fields["kind"], "sticker");
    assert_eq!(fields["stickerId"], 7);
    assert_eq!(fields["meta"]["pinned"], true);
}

// ---------------------------------------------------------------------------
// Test: Paging walks the thread in insertion order and terminates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_thread_pages_in_insertion_order() {
    let (thread, id) = board_with_proposal(mem_store()).await;
    for i in 0..5 {
        thread
            .create(&id, &new_comment("commenter-1", &format!("Comment {i}")))
            .await
            .unwrap();
    }

    let mut texts = Vec::new();
    let mut page_sizes = Vec::new();
    let mut cursor = None;
    loop {
        let page = thread.next_page(&id, cursor.clone(), 2).await.unwrap();
        page_sizes.push(page.len());
        for snapshot in &page {
            let comment: CommentPayload = snapshot.decode().unwrap().expect("should decode");
            texts.push(comment.text);
        }
        if is_last_page(page.len(), 2) {
            break;
        }
        cursor = page.last().map(|snapshot| snapshot.cursor());
    }

    assert_eq!(page_sizes, [2, 2, 1]);
    assert_eq!(
        texts,
        ["Comment 0", "Comment 1", "Comment 2", "Comment 3", "Comment 4"]
    );
}

// ---------------------------------------------------------------------------
// Test: Commenting publishes comment.created
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_comment_publishes_created_event() {
    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();

    let store = mem_store();
    let (_, id) = board_with_proposal(store.clone()).await;
    let thread = CommentThread::new(store).with_events(bus);

    thread
        .create(&id, &new_comment("commenter-1", "When does this start?"))
        .await
        .unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.event_type, "comment.created");
    let source = event.source.expect("comment event should name its proposal");
    assert_eq!(source.kind, EntityKind::Proposal);
    assert_eq!(source.id, id);
}
