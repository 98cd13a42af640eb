//! Integration Tests
//!
//! Full workflows: journal entries flowing through the classifier into the
//! key-value store, and companion transcripts persisted the way the shell
//! does it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use sqlx::sqlite::SqlitePool;
use tempfile::tempdir;

use crate::brain::Mood;
use crate::companion::Companion;
use crate::journal::Journal;
use crate::models::{ChatMessage, NewJournalEntry};
use crate::storage::kv;

async fn create_test_pool() -> SqlitePool {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");
    let pool = kv::init_db(&db_path).await.expect("Failed to init db");
    std::mem::forget(dir);
    pool
}

#[tokio::test]
async fn test_journal_entry_is_tagged_and_persisted() {
    let pool = create_test_pool().await;
    let journal = Journal::new();
    let mut rng = StdRng::seed_from_u64(21);

    let entry = journal
        .add_entry(
            &pool,
            "demo",
            NewJournalEntry {
                title: "Finals week".to_string(),
                content: "I'm so worried about my exams".to_string(),
            },
            &mut rng,
        )
        .await
        .expect("Failed to add entry");

    assert_eq!(entry.mood, Mood::Anxious);
    assert!(!entry.mood_tag.is_empty());

    let entries = journal.entries(&pool, "demo").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, entry.id);
}

#[tokio::test]
async fn test_journal_newest_entry_first() {
    let pool = create_test_pool().await;
    let journal = Journal::new();
    let mut rng = StdRng::seed_from_u64(22);

    for (title, content) in [("one", "feeling sad"), ("two", "feeling happy")] {
        journal
            .add_entry(
                &pool,
                "demo",
                NewJournalEntry {
                    title: title.to_string(),
                    content: content.to_string(),
                },
                &mut rng,
            )
            .await
            .unwrap();
    }

    let entries = journal.entries(&pool, "demo").await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "two");
    assert_eq!(entries[0].mood, Mood::Happy);
    assert_eq!(entries[1].mood, Mood::Sad);
}

#[tokio::test]
async fn test_journal_rejects_blank_entries() {
    let pool = create_test_pool().await;
    let journal = Journal::new();
    let mut rng = StdRng::seed_from_u64(23);

    let result = journal
        .add_entry(
            &pool,
            "demo",
            NewJournalEntry {
                title: "".to_string(),
                content: "text".to_string(),
            },
            &mut rng,
        )
        .await;

    assert!(result.is_err());
    assert!(journal.entries(&pool, "demo").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_users_do_not_see_each_other_entries() {
    let pool = create_test_pool().await;
    let journal = Journal::new();
    let mut rng = StdRng::seed_from_u64(24);

    journal
        .add_entry(
            &pool,
            "alice",
            NewJournalEntry {
                title: "mine".to_string(),
                content: "grateful for today".to_string(),
            },
            &mut rng,
        )
        .await
        .unwrap();

    assert!(journal.entries(&pool, "bob").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_companion_transcript_persists_through_store() {
    let pool = create_test_pool().await;
    let companion = Companion::new();
    let mut rng = StdRng::seed_from_u64(25);

    // The shell's flow: greeting, user message, companion reply, persist.
    let mut transcript = vec![companion.greeting()];
    transcript.push(ChatMessage {
        id: "user-1".to_string(),
        sender: "user".to_string(),
        message: "I've been stressed about work".to_string(),
        timestamp: chrono::Utc::now(),
    });
    let reply = companion
        .reply_message("I've been stressed about work", &mut rng)
        .unwrap();
    transcript.push(reply);

    let serialized = serde_json::to_value(&transcript).unwrap();
    kv::set(&pool, "chat_messages_demo", &serialized).await.unwrap();

    let stored = kv::get(&pool, "chat_messages_demo").await.unwrap().unwrap();
    let restored: Vec<ChatMessage> = serde_json::from_value(stored).unwrap();

    assert_eq!(restored.len(), 3);
    assert_eq!(restored[0].sender, "companion");
    assert_eq!(restored[1].sender, "user");
    assert_eq!(restored[2].sender, "companion");
}

#[tokio::test]
async fn test_puzzle_completion_flag_round_trip() {
    let pool = create_test_pool().await;

    kv::set(
        &pool,
        "puzzle_completed_demo",
        &json!({ "game": "calming_words", "completed": true }),
    )
    .await
    .unwrap();

    let flags = kv::scan_by_prefix(&pool, "puzzle_completed_").await.unwrap();
    assert_eq!(flags.len(), 1);
    assert_eq!(flags["puzzle_completed_demo"]["completed"], true);
}
