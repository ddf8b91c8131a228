//! Atomic application of a preference set to the store.
//!
//! The unit of work clears the prior preference rows, interns each new
//! value into the `data` dictionary table and links one `preferences` row
//! per `pictures` row, then commits. Any failure rolls the whole unit back,
//! so an external reader observes the old rows or the new rows, never a
//! mixture.

use deskwall_core::pref::{PrefSet, PrefValue};
use rusqlite::types::Value;
use rusqlite::{params, Connection, Transaction};

use crate::errors::{Result, StoreError};

const CLEAR_PREFERENCES: &str = "DELETE FROM preferences";

const CLEAR_DATA: &str = "DELETE FROM data";

const INTERN_VALUE: &str = "INSERT INTO data (value)
     SELECT ?1
     WHERE NOT EXISTS (SELECT value FROM data WHERE value = ?1)";

const INSERT_PREFERENCE: &str = "INSERT INTO preferences (key, data_id, picture_id)
     SELECT ?1, data.ROWID, pictures.ROWID
     FROM pictures
     INNER JOIN data ON data.value = ?2";

/// Atomically replace the store's preference rows with `prefs`.
///
/// # Errors
///
/// - `Write` — a statement inside the unit of work failed; prior state was
///   restored by rollback
/// - `Rollback` — the rollback after a failed write itself failed; the
///   store's state is unknown
pub fn apply(conn: &mut Connection, prefs: &PrefSet) -> Result<()> {
    let tx = conn.transaction().map_err(StoreError::write)?;

    match write_all(&tx, prefs) {
        Ok(()) => {
            tx.commit().map_err(StoreError::write)?;
            tracing::debug!(entries = prefs.len(), "preference store updated");
            Ok(())
        }
        Err(err) => {
            // The transaction's drop guard would also roll back, but an
            // explicit rollback makes its own failure observable.
            match tx.rollback() {
                Ok(()) => Err(err),
                Err(source) => Err(StoreError::Rollback { source }),
            }
        }
    }
}

fn write_all(tx: &Transaction, prefs: &PrefSet) -> Result<()> {
    clear(tx)?;
    for (key, value) in prefs.iter() {
        insert(tx, key.code(), sql_value(value))?;
    }
    Ok(())
}

/// Clear the prior preference rows.
///
/// `preferences` references `data` by rowid, so the referencing table goes
/// first.
fn clear(tx: &Transaction) -> Result<()> {
    tx.execute(CLEAR_PREFERENCES, [])
        .map_err(StoreError::write)?;
    tx.execute(CLEAR_DATA, []).map_err(StoreError::write)?;
    Ok(())
}

/// Intern `value` into the dictionary table, then link one preference row
/// per picture row to it.
fn insert(tx: &Transaction, key: u8, value: Value) -> Result<()> {
    tx.execute(INTERN_VALUE, params![value])
        .map_err(StoreError::write)?;
    tx.execute(INSERT_PREFERENCE, params![key, value])
        .map_err(StoreError::write)?;
    Ok(())
}

/// SQLite representation of a preference value.
fn sql_value(value: &PrefValue) -> Value {
    match value {
        PrefValue::Path(path) => Value::Text(path.to_string_lossy().into_owned()),
        PrefValue::Position(position) => Value::Integer(i64::from(position.code())),
        PrefValue::Event(event) => Value::Integer(i64::from(event.code())),
        PrefValue::Flag(flag) => Value::Integer(i64::from(*flag)),
        PrefValue::Seconds(seconds) => Value::Integer(*seconds as i64),
        PrefValue::Channel(channel) => Value::Real(*channel),
    }
}
