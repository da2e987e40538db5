//! Store verbs.
//!
//! Each verb works on an explicit [`Store`] value and an [`Operator`]. The
//! password gate always runs before anything is decrypted or mutated, and a
//! failed gate leaves the store untouched. Persisting the result is the
//! caller's job (see [`crate::vault::Vault`]).

use std::fs;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::crypto::{
    decrypt, encrypt, hash_password, validate_password, verify_password, DigestParams, Scheme,
};
use crate::error::{CryptError, Result};
use crate::prompt::{Operator, SecretPrompt};
use crate::store::{Listing, Record, Store};

/// What to do when a rename targets a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenamePolicy {
    /// Replace the existing record (last write wins)
    #[default]
    Overwrite,
    /// Fail with `InvalidInput` and change nothing
    Refuse,
}

/// Knobs for operations that write new ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Scheme for newly written records
    pub scheme: Scheme,
    /// Argon2 cost for new digests
    pub digest: DigestParams,
    /// Minimum length of a new password, in characters
    pub min_password_length: usize,
    pub rename_policy: RenamePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scheme: Scheme::CURRENT,
            digest: DigestParams::default(),
            min_password_length: 1,
            rename_policy: RenamePolicy::default(),
        }
    }
}

/// Result of [`upgrade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// Record was re-encrypted under the current scheme
    Upgraded { from: Scheme },
    /// Record already used the current scheme
    AlreadyCurrent,
}

/// Read the bytes of a file that is about to be added.
///
/// # Errors
///
/// Returns `CryptError::InvalidInput` if the file cannot be read.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        CryptError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// List `(name, hint)` rows sorted by name. No password required.
pub fn list(store: &Store) -> Vec<Listing> {
    store.list()
}

/// Encrypt `plaintext` under a new password and store it as `name`.
///
/// Encryption finishes before the store is touched, so a failure never
/// leaves a partial record behind. Returns the record that previously held
/// `name`, if any.
pub fn add(
    store: &mut Store,
    name: &str,
    plaintext: &[u8],
    operator: &mut dyn Operator,
    settings: &Settings,
) -> Result<Option<Record>> {
    if name.trim().is_empty() {
        return Err(CryptError::InvalidInput(
            "Record name cannot be empty".to_string(),
        ));
    }

    let password = operator.secret(&SecretPrompt::Create { name })?;
    validate_password(password.expose_secret(), settings.min_password_length)?;
    let hint = operator.hint(name)?;

    let data = encrypt(plaintext, &password, settings.scheme)?;
    let pass_hash = hash_password(&password, settings.scheme, &settings.digest)?;
    let displaced = store.put(name, Record::new(data, hint, pass_hash, settings.scheme));

    info!(
        record = name,
        scheme = %settings.scheme,
        bytes = plaintext.len(),
        replaced = displaced.is_some(),
        "stored record"
    );
    Ok(displaced)
}

/// Verify the operator's password for `name` and return the plaintext.
///
/// # Errors
///
/// - `NotFound` before any prompt if `name` is absent
/// - `AuthFailure` if the password does not match; nothing is decrypted
pub fn read(store: &Store, name: &str, operator: &mut dyn Operator) -> Result<Zeroizing<Vec<u8>>> {
    let record = store.get(name)?;
    let password = unlock(record, name, operator)?;
    open_payload(record, &password)
}

/// Verify the operator's password for `name` and remove the record.
pub fn delete(store: &mut Store, name: &str, operator: &mut dyn Operator) -> Result<Record> {
    let record = store.get(name)?;
    unlock(record, name, operator)?;

    let removed = store.remove(name)?;
    info!(record = name, "deleted record");
    Ok(removed)
}

/// Verify the operator's password for `old` and move the record to `new`.
///
/// Ciphertext, digest, hint and scheme carry over unchanged. Under
/// [`RenamePolicy::Overwrite`] an existing record at `new` is replaced and
/// returned.
pub fn rename(
    store: &mut Store,
    old: &str,
    new: &str,
    operator: &mut dyn Operator,
    policy: RenamePolicy,
) -> Result<Option<Record>> {
    if new.trim().is_empty() {
        return Err(CryptError::InvalidInput(
            "Record name cannot be empty".to_string(),
        ));
    }
    if old == new {
        return Err(CryptError::InvalidInput(format!(
            "Source and destination are both {}",
            old
        )));
    }

    let record = store.get(old)?;
    if policy == RenamePolicy::Refuse && store.contains(new) {
        return Err(CryptError::InvalidInput(format!("{} already exists", new)));
    }
    unlock(record, old, operator)?;

    let displaced = store.rename(old, new)?;
    if displaced.is_some() {
        warn!(from = old, to = new, "rename replaced an existing record");
    }
    info!(from = old, to = new, "renamed record");
    Ok(displaced)
}

/// Re-encrypt a legacy record under the current scheme.
///
/// The password is verified first. The plaintext is recovered and written
/// back with a fresh digest; the hint is kept.
pub fn upgrade(
    store: &mut Store,
    name: &str,
    operator: &mut dyn Operator,
    settings: &Settings,
) -> Result<UpgradeOutcome> {
    let record = store.get(name)?;
    let password = unlock(record, name, operator)?;

    let from = record.scheme;
    if from == Scheme::CURRENT {
        return Ok(UpgradeOutcome::AlreadyCurrent);
    }

    let plaintext = open_payload(record, &password)?;
    let data = encrypt(&plaintext, &password, Scheme::CURRENT)?;
    let pass_hash = hash_password(&password, Scheme::CURRENT, &settings.digest)?;
    let upgraded = Record::new(data, record.hint.clone(), pass_hash, Scheme::CURRENT);
    store.put(name, upgraded);

    info!(record = name, from = %from, to = %Scheme::CURRENT, "upgraded record");
    Ok(UpgradeOutcome::Upgraded { from })
}

/// Ask for the record's password and check it against the stored digest.
fn unlock(record: &Record, name: &str, operator: &mut dyn Operator) -> Result<SecretString> {
    let password = operator.secret(&SecretPrompt::Unlock {
        name,
        hint: record.hint(),
    })?;
    if !verify_password(&record.pass_hash, &password, record.scheme) {
        warn!(record = name, "password verification failed");
        return Err(CryptError::AuthFailure);
    }
    Ok(password)
}

/// Decrypt a record whose password has already been verified.
fn open_payload(record: &Record, password: &SecretString) -> Result<Zeroizing<Vec<u8>>> {
    decrypt(&record.data, password, record.scheme).map_err(|e| match e {
        // The digest matched, so the payload itself is inconsistent
        CryptError::AuthFailure => {
            CryptError::Crypto("Record payload does not match its password".to_string())
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Answers prompts from a fixed script and records what was asked.
    #[derive(Default)]
    struct Scripted {
        secrets: VecDeque<&'static str>,
        hint: &'static str,
        asked: Vec<String>,
    }

    impl Scripted {
        fn new(secrets: &[&'static str]) -> Self {
            Self {
                secrets: secrets.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn with_hint(mut self, hint: &'static str) -> Self {
            self.hint = hint;
            self
        }
    }

    impl Operator for Scripted {
        fn secret(&mut self, prompt: &SecretPrompt<'_>) -> Result<SecretString> {
            self.asked.push(prompt.label());
            self.secrets
                .pop_front()
                .map(|s| SecretString::from(s.to_string()))
                .ok_or_else(|| CryptError::Prompt("script exhausted".to_string()))
        }

        fn hint(&mut self, _name: &str) -> Result<String> {
            Ok(self.hint.to_string())
        }
    }

    fn settings(scheme: Scheme) -> Settings {
        Settings {
            scheme,
            digest: DigestParams {
                memory_kib: 8 * 1024,
                iterations: 1,
                parallelism: 1,
            },
            ..Settings::default()
        }
    }

    fn store_with(name: &str, body: &[u8], password: &'static str, scheme: Scheme) -> Store {
        let mut store = Store::new();
        add(
            &mut store,
            name,
            body,
            &mut Scripted::new(&[password]).with_hint("my favorite"),
            &settings(scheme),
        )
        .unwrap();
        store
    }

    #[test]
    fn test_add_then_read_scenario() {
        let store = store_with("notes.txt", b"hello", "abc123", Scheme::Legacy);

        let mut operator = Scripted::new(&["abc123"]);
        let plaintext = read(&store, "notes.txt", &mut operator).unwrap();

        assert_eq!(plaintext.as_slice(), b"hello");
        assert_eq!(operator.asked, vec!["Password (my favorite)"]);
    }

    #[test]
    fn test_read_wrong_password_is_auth_failure() {
        let store = store_with("notes.txt", b"hello", "abc123", Scheme::Legacy);

        let result = read(&store, "notes.txt", &mut Scripted::new(&["wrong"]));
        assert!(matches!(result, Err(CryptError::AuthFailure)));
    }

    #[test]
    fn test_read_missing_fails_before_prompting() {
        let store = Store::new();
        let mut operator = Scripted::new(&["abc123"]);

        let result = read(&store, "x", &mut operator);

        assert!(matches!(result, Err(CryptError::NotFound(_))));
        assert!(operator.asked.is_empty());
    }

    #[test]
    fn test_add_records_scheme_and_hint() {
        let store = store_with("a", b"hello", "abc123", Scheme::Age);
        let record = store.get("a").unwrap();

        assert_eq!(record.scheme, Scheme::Age);
        assert_eq!(record.hint, "my favorite");
        assert!(record.pass_hash.starts_with("$argon2id$"));
        assert!(!record.data.contains("hello"));
    }

    #[test]
    fn test_add_rejects_empty_password_without_touching_store() {
        let mut store = Store::new();
        let result = add(
            &mut store,
            "a",
            b"hello",
            &mut Scripted::new(&["   "]),
            &settings(Scheme::Legacy),
        );

        assert!(matches!(result, Err(CryptError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_enforces_min_length() {
        let mut store = Store::new();
        let strict = Settings {
            min_password_length: 8,
            ..settings(Scheme::Legacy)
        };

        let result = add(&mut store, "a", b"x", &mut Scripted::new(&["abc123"]), &strict);
        assert!(matches!(result, Err(CryptError::InvalidInput(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut store = Store::new();
        let mut operator = Scripted::new(&["abc123"]);

        let result = add(&mut store, " ", b"x", &mut operator, &settings(Scheme::Legacy));

        assert!(matches!(result, Err(CryptError::InvalidInput(_))));
        assert!(operator.asked.is_empty());
    }

    #[test]
    fn test_add_over_existing_replaces() {
        let mut store = store_with("a", b"first", "abc123", Scheme::Legacy);

        let displaced = add(
            &mut store,
            "a",
            b"second",
            &mut Scripted::new(&["other"]),
            &settings(Scheme::Legacy),
        )
        .unwrap();

        assert!(displaced.is_some());
        let plaintext = read(&store, "a", &mut Scripted::new(&["other"])).unwrap();
        assert_eq!(plaintext.as_slice(), b"second");
    }

    #[test]
    fn test_delete_then_read_is_not_found() {
        let mut store = store_with("x", b"bye", "abc123", Scheme::Legacy);
        let copy = store.get("x").unwrap().clone();
        store.put("keep", copy);

        delete(&mut store, "x", &mut Scripted::new(&["abc123"])).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.contains("keep"));
        let result = read(&store, "x", &mut Scripted::new(&["abc123"]));
        assert!(matches!(result, Err(CryptError::NotFound(_))));
    }

    #[test]
    fn test_delete_wrong_password_keeps_record() {
        let mut store = store_with("x", b"bye", "abc123", Scheme::Legacy);
        let snapshot = store.clone();

        let result = delete(&mut store, "x", &mut Scripted::new(&["nope"]));

        assert!(matches!(result, Err(CryptError::AuthFailure)));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_rename_preserves_payload() {
        let mut store = store_with("a", b"hello", "abc123", Scheme::Legacy);
        let before = store.get("a").unwrap().clone();

        let mut operator = Scripted::new(&["abc123"]);
        rename(&mut store, "a", "b", &mut operator, RenamePolicy::Overwrite).unwrap();

        assert_eq!(store.get("b").unwrap(), &before);
        assert!(matches!(store.get("a"), Err(CryptError::NotFound(_))));
        assert_eq!(operator.asked, vec!["Password (my favorite)"]);
    }

    #[test]
    fn test_rename_missing_source_leaves_store_unchanged() {
        let mut store = store_with("b", b"hello", "abc123", Scheme::Legacy);
        let snapshot = store.clone();

        let result = rename(
            &mut store,
            "a",
            "b",
            &mut Scripted::new(&["abc123"]),
            RenamePolicy::Overwrite,
        );

        assert!(matches!(result, Err(CryptError::NotFound(_))));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_rename_wrong_password_leaves_store_unchanged() {
        let mut store = store_with("a", b"hello", "abc123", Scheme::Legacy);
        let snapshot = store.clone();

        let result = rename(
            &mut store,
            "a",
            "b",
            &mut Scripted::new(&["wrong"]),
            RenamePolicy::Overwrite,
        );

        assert!(matches!(result, Err(CryptError::AuthFailure)));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_rename_overwrite_returns_displaced() {
        let mut store = store_with("a", b"from a", "abc123", Scheme::Legacy);
        let other = store_with("b", b"from b", "other", Scheme::Legacy);
        store.put("b", other.get("b").unwrap().clone());

        let displaced = rename(
            &mut store,
            "a",
            "b",
            &mut Scripted::new(&["abc123"]),
            RenamePolicy::Overwrite,
        )
        .unwrap();

        assert_eq!(displaced.as_ref(), other.get("b").ok());
        assert_eq!(store.len(), 1);
        let plaintext = read(&store, "b", &mut Scripted::new(&["abc123"])).unwrap();
        assert_eq!(plaintext.as_slice(), b"from a");
    }

    #[test]
    fn test_rename_refuse_policy_keeps_destination() {
        let mut store = store_with("a", b"from a", "abc123", Scheme::Legacy);
        let copy = store.get("a").unwrap().clone();
        store.put("b", copy);
        let snapshot = store.clone();
        let mut operator = Scripted::new(&["abc123"]);

        let result = rename(&mut store, "a", "b", &mut operator, RenamePolicy::Refuse);

        assert!(matches!(result, Err(CryptError::InvalidInput(_))));
        assert_eq!(store, snapshot);
        assert!(operator.asked.is_empty());
    }

    #[test]
    fn test_rename_onto_itself_rejected() {
        let mut store = store_with("a", b"hello", "abc123", Scheme::Legacy);

        let result = rename(
            &mut store,
            "a",
            "a",
            &mut Scripted::new(&["abc123"]),
            RenamePolicy::Overwrite,
        );

        assert!(matches!(result, Err(CryptError::InvalidInput(_))));
        assert!(store.contains("a"));
    }

    #[test]
    fn test_upgrade_legacy_record() {
        let mut store = store_with("a", b"hello", "abc123", Scheme::Legacy);

        let outcome = upgrade(
            &mut store,
            "a",
            &mut Scripted::new(&["abc123"]),
            &settings(Scheme::Legacy),
        )
        .unwrap();

        assert_eq!(
            outcome,
            UpgradeOutcome::Upgraded {
                from: Scheme::Legacy
            }
        );
        let record = store.get("a").unwrap();
        assert_eq!(record.scheme, Scheme::Age);
        assert_eq!(record.hint, "my favorite");
        let plaintext = read(&store, "a", &mut Scripted::new(&["abc123"])).unwrap();
        assert_eq!(plaintext.as_slice(), b"hello");
    }

    #[test]
    fn test_upgrade_current_record_is_noop() {
        let mut store = store_with("a", b"hello", "abc123", Scheme::Age);
        let snapshot = store.clone();

        let outcome = upgrade(
            &mut store,
            "a",
            &mut Scripted::new(&["abc123"]),
            &settings(Scheme::Age),
        )
        .unwrap();

        assert_eq!(outcome, UpgradeOutcome::AlreadyCurrent);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_upgrade_wrong_password_is_auth_failure() {
        let mut store = store_with("a", b"hello", "abc123", Scheme::Legacy);
        let snapshot = store.clone();

        let result = upgrade(
            &mut store,
            "a",
            &mut Scripted::new(&["wrong"]),
            &settings(Scheme::Legacy),
        );

        assert!(matches!(result, Err(CryptError::AuthFailure)));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_read_source_missing_file_is_invalid_input() {
        let result = read_source(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(CryptError::InvalidInput(_))));
    }

    #[test]
    fn test_list_needs_no_password() {
        let store = store_with("b", b"x", "abc123", Scheme::Legacy);
        let rows = list(&store);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "b");
        assert_eq!(rows[0].hint, "my favorite");
    }
}
