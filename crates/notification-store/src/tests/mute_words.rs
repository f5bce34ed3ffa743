use super::test_db;
use crate::StoreError;

#[test]
fn test_mute_words() {
    let db = test_db();
    let w = db.add_mute_word("  spoiler ").unwrap();
    assert_eq!(w.word, "spoiler");

    let again = db.add_mute_word("spoiler").unwrap();
    assert_eq!(again.id, w.id);

    db.bulk_insert_mute_words(&[
        "politics".to_string(),
        String::new(),
        "spoiler".to_string(),
    ])
    .unwrap();
    let words: Vec<String> = db
        .list_mute_words()
        .unwrap()
        .into_iter()
        .map(|w| w.word)
        .collect();
    assert_eq!(words, vec!["spoiler", "politics"]);

    assert!(db.delete_mute_word(w.id).unwrap());
    assert!(!db.delete_mute_word(w.id).unwrap());
    assert_eq!(db.list_mute_words().unwrap().len(), 1);
}

#[test]
fn test_blank_mute_word_rejected() {
    let db = test_db();
    assert!(matches!(
        db.add_mute_word("   "),
        Err(StoreError::InvalidData(_))
    ));
}
