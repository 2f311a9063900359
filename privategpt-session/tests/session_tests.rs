use privategpt_crypto::SessionKey;
use privategpt_session::{
    Attachment, AttachmentKind, EncryptedObjectStore, Message, SessionError, SessionManager,
};

fn text_attachment(name: &str, content: &str) -> Attachment {
    Attachment {
        name: name.into(),
        kind: AttachmentKind::Text,
        content: content.into(),
        mime_type: None,
        size: content.len() as u64,
    }
}

#[test]
fn store_get_remove_attachment() {
    let mut session = SessionManager::new();
    let attachment = text_attachment("notes.txt", "hello");

    session.store_attachment("a1", &attachment).unwrap();
    assert_eq!(session.get_attachment("a1").unwrap(), Some(attachment));

    session.remove_attachment("a1");
    assert_eq!(session.get_attachment("a1").unwrap(), None);
}

#[test]
fn get_all_returns_every_attachment_with_its_id() {
    let mut session = SessionManager::new();
    let x = text_attachment("x.txt", "first");
    let y = text_attachment("y.txt", "second");

    session.store_attachment("x", &x).unwrap();
    session.store_attachment("y", &y).unwrap();

    let mut all = session.attachments().unwrap();
    all.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(all, vec![("x".to_string(), x), ("y".to_string(), y)]);
}

#[test]
fn message_round_trip() {
    let mut session = SessionManager::new();
    let message = Message {
        role: "user".into(),
        content: "what's in my attachment?".into(),
    };

    session.store_message("m1", &message).unwrap();
    assert_eq!(session.get_message("m1").unwrap(), Some(message));
    assert_eq!(session.get_message("m2").unwrap(), None);
}

#[test]
fn restore_under_same_id_overwrites() {
    let mut session = SessionManager::new();
    session
        .store_attachment("a1", &text_attachment("v1.txt", "old"))
        .unwrap();
    session
        .store_attachment("a1", &text_attachment("v2.txt", "new"))
        .unwrap();

    let got = session.get_attachment("a1").unwrap().unwrap();
    assert_eq!(got.name, "v2.txt");
    assert_eq!(session.attachment_ids().len(), 1);
}

#[test]
fn remove_of_absent_id_is_a_noop() {
    let mut session = SessionManager::new();
    session
        .store_attachment("keep", &text_attachment("keep.txt", "data"))
        .unwrap();

    session.remove_attachment("never-existed");
    assert_eq!(session.attachment_ids(), vec!["keep".to_string()]);
}

#[test]
fn clear_attachments_scrubs_only_attachments() {
    let mut session = SessionManager::new();
    session
        .store_message("m1", &Message { role: "user".into(), content: "hi".into() })
        .unwrap();
    session
        .store_attachment("a1", &text_attachment("a.txt", "data"))
        .unwrap();

    session.clear_attachments();

    assert!(session.attachment_ids().is_empty());
    assert_eq!(session.message_ids(), vec!["m1".to_string()]);
}

#[test]
fn purge_empties_both_stores() {
    for (n, m) in [(0usize, 0usize), (1, 0), (0, 1), (5, 3), (20, 10)] {
        let mut session = SessionManager::new();
        for i in 0..n {
            let msg = Message { role: "user".into(), content: format!("turn {i}") };
            session.store_message(&format!("m{i}"), &msg).unwrap();
        }
        for i in 0..m {
            let att = text_attachment(&format!("f{i}.txt"), "payload");
            session.store_attachment(&format!("a{i}"), &att).unwrap();
        }

        session.purge();

        assert!(session.message_ids().is_empty(), "messages left for n={n}");
        assert!(session.attachment_ids().is_empty(), "attachments left for m={m}");
    }
}

#[test]
fn session_stays_usable_after_purge() {
    let mut session = SessionManager::new();
    session
        .store_attachment("a1", &text_attachment("old.txt", "gone"))
        .unwrap();

    session.purge();

    // New key, fresh stores — storing and reading must work as before.
    let attachment = text_attachment("new.txt", "fresh");
    session.store_attachment("a2", &attachment).unwrap();
    assert_eq!(session.get_attachment("a2").unwrap(), Some(attachment));
}

#[test]
fn record_held_across_a_key_change_fails_with_crypto_error() {
    let k1 = SessionKey::generate();
    let k2 = SessionKey::generate();
    let mut store = EncryptedObjectStore::<Attachment>::new();

    store
        .store(&k1, "a1", &text_attachment("a.txt", "sealed under k1"))
        .unwrap();

    // Wrong key must surface as an integrity failure, never as a
    // silent miss or altered payload.
    assert!(matches!(
        store.get(&k2, "a1"),
        Err(SessionError::Crypto(_))
    ));
    assert!(matches!(
        store.get_all(&k2),
        Err(SessionError::Crypto(_))
    ));

    // The record itself is intact: the original key still opens it.
    assert!(store.get(&k1, "a1").unwrap().is_some());
}

#[test]
fn record_does_not_survive_rotation() {
    let mut key = SessionKey::generate();
    let mut store = EncryptedObjectStore::<Message>::new();
    let message = Message { role: "user".into(), content: "ephemeral".into() };
    store.store(&key, "m1", &message).unwrap();

    key.rotate();

    assert!(matches!(
        store.get(&key, "m1"),
        Err(SessionError::Crypto(_))
    ));
}

#[test]
fn image_attachment_round_trip() {
    let mut session = SessionManager::new();
    let attachment = Attachment {
        name: "photo.png".into(),
        kind: AttachmentKind::Image,
        content: "iVBORw0KGgoAAAANSUhEUg==".into(),
        mime_type: Some("image/png".into()),
        size: 16,
    };

    session.store_attachment("img", &attachment).unwrap();
    assert_eq!(session.get_attachment("img").unwrap(), Some(attachment));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_utf8_content_roundtrips(content in ".{0,512}") {
            let mut session = SessionManager::new();
            let attachment = text_attachment("fuzz.txt", &content);
            session.store_attachment("fuzz", &attachment).unwrap();
            prop_assert_eq!(
                session.get_attachment("fuzz").unwrap(),
                Some(attachment)
            );
        }
    }
}
