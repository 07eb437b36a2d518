use solana_wallet_gen::history::{ClearHistoryGate, MemorySlot};
use solana_wallet_gen::{
    encoding, export_batch, generate_batch, parse_count_text, ExportFormat, KeyPair, KeySelection,
    SessionHistoryStore, WalletError,
};
use tempfile::tempdir;

fn is_base58(s: &str) -> bool {
    !s.is_empty() && encoding::decode(s).is_ok()
}

#[tokio::test]
async fn generate_export_save_delete() {
    let batch = generate_batch(3, true).await.unwrap();

    let csv = export_batch(&batch, ExportFormat::Csv, KeySelection::Both);
    let lines: Vec<&str> = csv.split('\n').collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let (secret, public) = line.split_once(", ").unwrap();
        assert!(is_base58(secret) && is_base58(public), "{line}");
        let kp = KeyPair::from_base58_secret(secret).unwrap();
        assert_eq!(kp.public_base58(), public);
    }

    let store = SessionHistoryStore::new(MemorySlot::new());
    let session = store.save_batch(batch).await.unwrap();
    let listed = store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].count(), 3);

    store.delete_one(session.id()).await.unwrap();
    assert!(store.list().await.is_empty());
}

#[tokio::test]
async fn stored_session_re_exports_identically() {
    let dir = tempdir().unwrap();
    let batch = generate_batch(5, false).await.unwrap();
    let before = export_batch(&batch, ExportFormat::Json, KeySelection::Both);

    let id = {
        let store = SessionHistoryStore::open(dir.path());
        store.save_batch(batch).await.unwrap().id().to_string()
    };

    let store = SessionHistoryStore::open(dir.path());
    let session = store.get(&id).await.unwrap();
    let after = export_batch(session.batch(), ExportFormat::Json, KeySelection::Both);
    assert_eq!(before, after);
}

#[tokio::test]
async fn lenient_text_then_strict_bound() {
    let b = generate_batch(parse_count_text("not a number"), false).await.unwrap();
    assert_eq!(b.len(), 10);

    let err = generate_batch(parse_count_text("1001"), false).await.unwrap_err();
    assert!(matches!(err, WalletError::InvalidCount(1001)));
}

#[tokio::test]
async fn clear_fires_only_after_both_confirmations() {
    let store = SessionHistoryStore::new(MemorySlot::new());
    store.save_batch(generate_batch(1, false).await.unwrap()).await.unwrap();

    let mut gate = ClearHistoryGate::new();
    gate.request();
    gate.confirm();
    gate.decline();
    if gate.is_cleared() {
        store.delete_all().await.unwrap();
    }
    assert_eq!(store.list().await.len(), 1);

    gate.request();
    gate.confirm();
    gate.confirm();
    if gate.is_cleared() {
        store.delete_all().await.unwrap();
    }
    assert!(store.list().await.is_empty());
}
