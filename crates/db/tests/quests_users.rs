//! Integration tests for quests and user profiles:
//! - Quest creation stamps version and creation time
//! - Quest paging walks the store's default order
//! - Profile upsert keeps an existing role across overwrites
//! - Documents written before role tracking decode with the default role

mod common;

use std::sync::Arc;

use common::{admin_user, mem_store, test_user};
use questboard_core::{QuestUrgency, Role};
use questboard_db::is_last_page;
use questboard_db::models::quest::{Quest, QuestDraft};
use questboard_db::names::USERS;
use questboard_db::repositories::{QuestRepo, UserRepo};
use questboard_events::{EntityKind, EventBus};
use questboard_store::{CollectionPath, DocumentStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_quest(title: &str, urgency: QuestUrgency) -> QuestDraft {
    QuestDraft {
        title: title.to_string(),
        details: format!("{title} details"),
        urgency,
        assigned_to: None,
    }
}

async fn fetch(repo: &QuestRepo, id: &str) -> Quest {
    repo.get(id)
        .await
        .unwrap()
        .decode()
        .unwrap()
        .expect("quest should exist")
}

// ---------------------------------------------------------------------------
// Test: Quest creation stamps version and creation time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_quest_create_stamps_fields() {
    let repo = QuestRepo::new(mem_store());
    let doc_ref = repo
        .create(&new_quest("Fix the fountain", QuestUrgency::High))
        .await
        .unwrap();

    let quest = fetch(&repo, doc_ref.id()).await;
    assert_eq!(quest.schema_version, 1);
    assert_eq!(quest.title, "Fix the fountain");
    assert_eq!(quest.urgency, QuestUrgency::High);
    assert!(quest.assigned_to.is_none());
}

// ---------------------------------------------------------------------------
// Test: An assignee survives the round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_quest_with_assignee_round_trips() {
    let repo = QuestRepo::new(mem_store());
    let mut draft = new_quest("Patrol the market", QuestUrgency::Low);
    draft.assigned_to = Some(test_user("helper-1"));

    let doc_ref = repo.create(&draft).await.unwrap();

    let quest = fetch(&repo, doc_ref.id()).await;
    let assignee = quest.assigned_to.expect("assignee should round-trip");
    assert_eq!(assignee.uid, "helper-1");
}

// ---------------------------------------------------------------------------
// Test: Quest paging walks insertion order and terminates
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_quest_pages_in_default_order() {
    let repo = QuestRepo::new(mem_store());
    for i in 0..4 {
        repo.create(&new_quest(&format!("Quest {i}"), QuestUrgency::Medium))
            .await
            .unwrap();
    }

    let mut titles = Vec::new();
    let mut page_sizes = Vec::new();
    let mut cursor = None;
    loop {
        let page = repo.next_page(cursor.clone(), 3).await.unwrap();
        page_sizes.push(page.len());
        for snapshot in &page {
            let quest: Quest = snapshot.decode().unwrap().expect("should decode");
            titles.push(quest.title);
        }
        if is_last_page(page.len(), 3) {
            break;
        }
        cursor = page.last().map(|snapshot| snapshot.cursor());
    }

    assert_eq!(page_sizes, [3, 1]);
    assert_eq!(titles, ["Quest 0", "Quest 1", "Quest 2", "Quest 3"]);
}

// ---------------------------------------------------------------------------
// Test: Quest creation publishes quest.created
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_quest_create_publishes_event() {
    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();
    let repo = QuestRepo::new(mem_store()).with_events(bus);

    let doc_ref = repo
        .create(&new_quest("Clear the trail", QuestUrgency::High))
        .await
        .unwrap();

    let event = rx.recv().await.unwrap();
    assert_eq!(event.event_type, "quest.created");
    let source = event.source.expect("quest event should name its quest");
    assert_eq!(source.kind, EntityKind::Quest);
    assert_eq!(source.id, doc_ref.id());
    assert_eq!(event.payload["title"], "Clear the trail");
    assert_eq!(event.payload["urgency"], "high");
}

// ---------------------------------------------------------------------------
// Test: Upsert keeps the role an earlier write established
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_upsert_keeps_existing_role() {
    let users = UserRepo::new(mem_store());
    users.upsert(&admin_user("u1")).await.unwrap();

    // Sign-in always supplies the default role; the stored one wins.
    let mut fresh = test_user("u1");
    fresh.display_name = "New Name".to_string();
    users.upsert(&fresh).await.unwrap();

    let found = users.find("u1").await.unwrap().expect("user should exist");
    assert_eq!(found.role, Role::Admin);
    assert_eq!(found.display_name, "New Name");
}

// ---------------------------------------------------------------------------
// Test: First upsert creates the profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_upsert_then_find_round_trips() {
    let users = UserRepo::new(mem_store());
    assert!(users.find("u9").await.unwrap().is_none());

    users.upsert(&test_user("u9")).await.unwrap();

    let found = users.find("u9").await.unwrap().expect("user should exist");
    assert_eq!(found.uid, "u9");
    assert_eq!(found.display_name, "User u9");
    assert_eq!(found.role, Role::User);
}

// ---------------------------------------------------------------------------
// Test: Profiles written before role tracking get the default role
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_role_decodes_as_default() {
    let store = mem_store();
    let users = UserRepo::new(store.clone());

    let path = CollectionPath::new(USERS).doc("legacy-1");
    let fields = json!({
        "uid": "legacy-1",
        "displayName": "Legacy",
        "photoUrl": "https://avatars.example/legacy-1.png",
    })
    .as_object()
    .unwrap()
    .clone();
    store.set_document(&path, fields).await.unwrap();

    let found = users
        .find("legacy-1")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.role, Role::User);
    assert_eq!(found.schema_version, 1);
}
