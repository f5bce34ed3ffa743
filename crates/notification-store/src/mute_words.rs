//! User-configured mute words.

use crate::{Database, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuteWord {
    pub id: i64,
    pub word: String,
}

impl Database {
    /// Adds `word` (trimmed). Adding an existing word returns the stored row.
    pub fn add_mute_word(&self, word: &str) -> Result<MuteWord, StoreError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(StoreError::InvalidData("mute word is empty".into()));
        }
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO mute_words (word) VALUES (?1)",
                [word],
            )?;
            let id = conn.query_row("SELECT id FROM mute_words WHERE word = ?1", [word], |row| {
                row.get(0)
            })?;
            Ok(MuteWord {
                id,
                word: word.to_string(),
            })
        })
    }

    pub fn bulk_insert_mute_words(&self, words: &[String]) -> Result<(), StoreError> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare("INSERT OR IGNORE INTO mute_words (word) VALUES (?1)")?;
                for w in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
                    stmt.execute([w])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
    }

    pub fn list_mute_words(&self) -> Result<Vec<MuteWord>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, word FROM mute_words ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(MuteWord {
                    id: row.get(0)?,
                    word: row.get(1)?,
                })
            })?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        })
    }

    /// Returns `false` when no word had this id.
    pub fn delete_mute_word(&self, id: i64) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let removed = conn.execute("DELETE FROM mute_words WHERE id = ?1", [id])?;
            Ok(removed > 0)
        })
    }
}
