//! Integration tests for passvault-store
//!
//! These tests verify the full add/list/delete cycle through the
//! RecordStore trait.

use passvault_domain::traits::RecordStore;
use passvault_domain::{CredentialRecord, NewRecord, RecordDetails, RecordId, RecordKind};
use passvault_store::{MemoryStore, StoreError};
use proptest::prelude::*;

fn github_only() -> MemoryStore {
    MemoryStore::with_records([CredentialRecord {
        id: RecordId::new(),
        title: "GitHub".to_string(),
        secret: "gh_secure123".to_string(),
        details: RecordDetails::Website {
            username: Some("john_doe".to_string()),
            website_url: Some("https://github.com".to_string()),
        },
        created_at: 1_705_276_800_000,
    }])
}

#[test]
fn test_seeded_store() {
    let store = MemoryStore::seeded();
    let titles: Vec<String> = store.list().into_iter().map(|r| r.title).collect();

    assert_eq!(titles, ["GitHub", "Visa Credit Card", "Personal Gmail"]);
    assert_eq!(store.count_by_kind(RecordKind::Website), 1);
    assert_eq!(store.count_by_kind(RecordKind::Card), 1);
    assert_eq!(store.count_by_kind(RecordKind::Email), 1);
}

#[test]
fn test_add_to_github_store() {
    let mut store = github_only();

    store
        .add(NewRecord::new("Gmail", "x", RecordDetails::email()))
        .unwrap();

    assert_eq!(store.list().len(), 2);
    assert_eq!(store.list_by_kind(RecordKind::Email).len(), 1);
    assert_eq!(store.count_by_kind(RecordKind::Website), 1);
}

#[test]
fn test_add_preserves_fields_verbatim() {
    let mut store = MemoryStore::new();
    let details = RecordDetails::Card {
        card_holder_name: Some("Jane Roe".to_string()),
        card_number: Some("4111 1111 1111 1111".to_string()),
        expiry_date: Some("01/30".to_string()),
        cvv: Some("999".to_string()),
    };

    let added = store
        .add(NewRecord::new("  Work Card ", "0000", details.clone()))
        .unwrap();

    let listed = store.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], added);
    assert_eq!(listed[0].title, "  Work Card ");
    assert_eq!(listed[0].secret, "0000");
    assert_eq!(listed[0].details, details);
}

#[test]
fn test_add_rejects_empty_title() {
    let mut store = MemoryStore::seeded();
    let before = store.list();

    let result = store.add(NewRecord::new("", "secret", RecordDetails::website()));
    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(store.list(), before);
}

#[test]
fn test_with_records_skips_records_missing_required_fields() {
    let valid = CredentialRecord {
        id: RecordId::new(),
        title: "Personal Gmail".to_string(),
        secret: "email_pass456".to_string(),
        details: RecordDetails::email(),
        created_at: 0,
    };
    let untitled = CredentialRecord {
        id: RecordId::new(),
        title: String::new(),
        ..valid.clone()
    };
    let no_secret = CredentialRecord {
        id: RecordId::new(),
        secret: String::new(),
        ..valid.clone()
    };

    let store = MemoryStore::with_records([untitled, valid.clone(), no_secret]);

    assert_eq!(store.list(), vec![valid]);
    assert!(store
        .list()
        .iter()
        .all(|r| !r.title.is_empty() && !r.secret.is_empty()));
}

#[test]
fn test_list_by_kind_keeps_insertion_order() {
    let mut store = MemoryStore::new();
    for title in ["a", "b", "c"] {
        store
            .add(NewRecord::new(title, "pw", RecordDetails::website()))
            .unwrap();
        store
            .add(NewRecord::new(format!("{title}-mail"), "pw", RecordDetails::email()))
            .unwrap();
    }

    let websites: Vec<String> = store
        .list_by_kind(RecordKind::Website)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(websites, ["a", "b", "c"]);
    assert!(store.list_by_kind(RecordKind::Card).is_empty());
}

#[test]
fn test_delete_removes_exactly_one() {
    let mut store = MemoryStore::seeded();
    let before = store.list();
    let target = before[1].id;

    let removed = store.delete(target).unwrap();
    assert_eq!(removed, before[1]);

    let after = store.list();
    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after, vec![before[0].clone(), before[2].clone()]);
    assert!(store.get(target).is_none());
}

#[test]
fn test_delete_twice_reports_not_found() {
    let mut store = MemoryStore::seeded();
    let id = store.list()[0].id;

    assert!(store.delete(id).is_ok());
    assert_eq!(store.delete(id), Err(StoreError::NotFound(id)));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_summary_matches_counts() {
    let store = MemoryStore::seeded();
    let summary = store.summary();

    for kind in RecordKind::ALL {
        assert_eq!(summary.count(kind), store.count_by_kind(kind));
    }
    assert_eq!(summary.total(), store.len());
}

#[derive(Debug, Clone)]
enum Op {
    Add(RecordKind, String, String),
    DeleteExisting(usize),
    DeleteMissing,
}

fn kind_strategy() -> impl Strategy<Value = RecordKind> {
    prop_oneof![
        Just(RecordKind::Website),
        Just(RecordKind::Email),
        Just(RecordKind::Card),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (kind_strategy(), "[a-zA-Z ]{0,8}", "[a-z0-9]{0,8}")
            .prop_map(|(kind, title, secret)| Op::Add(kind, title, secret)),
        any::<usize>().prop_map(Op::DeleteExisting),
        Just(Op::DeleteMissing),
    ]
}

proptest! {
    /// Property: every operation keeps the store consistent with a plain
    /// model vector, and counts stay derived from the listing
    #[test]
    fn test_store_matches_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = MemoryStore::new();
        let mut model: Vec<CredentialRecord> = Vec::new();

        for op in ops {
            match op {
                Op::Add(kind, title, secret) => {
                    let valid = !title.is_empty() && !secret.is_empty();
                    let result = store.add(NewRecord::new(title, secret, RecordDetails::empty(kind)));
                    prop_assert_eq!(result.is_ok(), valid);
                    if let Ok(record) = result {
                        model.push(record);
                    }
                }
                Op::DeleteExisting(n) => {
                    if !model.is_empty() {
                        let idx = n % model.len();
                        let removed = store.delete(model[idx].id);
                        prop_assert_eq!(removed, Ok(model.remove(idx)));
                    }
                }
                Op::DeleteMissing => {
                    let missing = RecordId::new();
                    prop_assert_eq!(store.delete(missing), Err(StoreError::NotFound(missing)));
                }
            }

            prop_assert_eq!(store.list(), model.clone());

            let mut total = 0;
            for kind in RecordKind::ALL {
                let by_kind = store.list_by_kind(kind);
                prop_assert_eq!(store.count_by_kind(kind), by_kind.len());
                prop_assert!(by_kind.iter().all(|r| r.kind() == kind));
                total += store.count_by_kind(kind);
            }
            prop_assert_eq!(total, store.list().len());
        }
    }
}
