//! classical/attack.rs
//! Dictionary attack over classical ciphers.
//!
//! Summary: try every key from a key dictionary, decrypt, and keep the
//! outputs that read like the loaded language dictionary.

use std::fmt;
use std::io::BufRead;

use crate::classical::{ClassicalCipher, Transform};
use crate::constants::{DEFAULT_MATCH_DEPTH, MIN_WORD_LEN};
use crate::types::CipherError;

/// Which list(s) a dictionary file feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryType {
    Language,
    Key,
    Combined,
}

/// A key whose decryption passed the language check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackCandidate {
    pub key: String,
    pub output: String,
}

impl fmt::Display for AttackCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key: {} Output: {}", self.key, self.output)
    }
}

#[derive(Debug, Clone)]
pub struct DictionaryAttack {
    key_dictionary: Vec<String>,
    language_dictionary: Vec<String>,
    match_depth: usize,
}

impl Default for DictionaryAttack {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryAttack {
    pub fn new() -> Self {
        Self {
            key_dictionary: Vec::new(),
            language_dictionary: Vec::new(),
            match_depth: DEFAULT_MATCH_DEPTH,
        }
    }

    /// Maximum number of words peeled off before a text is rejected.
    pub fn with_match_depth(mut self, depth: usize) -> Self {
        self.match_depth = depth;
        self
    }

    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_dictionary.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language_dictionary.extend(words.into_iter().map(Into::into));
        self
    }

    /// Append one entry per line; loading stops at the first empty line.
    pub fn load<R: BufRead>(&mut self, reader: R, kind: DictionaryType) -> std::io::Result<()> {
        let mut added = 0usize;
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim_end_matches('\r');
            if entry.is_empty() {
                break;
            }

            if matches!(kind, DictionaryType::Key | DictionaryType::Combined) {
                self.key_dictionary.push(entry.to_owned());
            }
            if matches!(kind, DictionaryType::Language | DictionaryType::Combined) {
                self.language_dictionary.push(entry.to_owned());
            }
            added += 1;
        }
        log::debug!("loaded {} dictionary entries as {:?}", added, kind);
        Ok(())
    }

    pub fn keys(&self) -> &[String] {
        &self.key_dictionary
    }

    pub fn words(&self) -> &[String] {
        &self.language_dictionary
    }

    pub fn match_depth(&self) -> usize {
        self.match_depth
    }

    pub fn looks_like_language(&self, text: &str) -> bool {
        self.matches(text, self.match_depth)
    }

    // Greedy: the first dictionary word found in the text is removed and the
    // rest is checked again.
    fn matches(&self, text: &str, depth: usize) -> bool {
        if text.is_empty() {
            return true;
        }
        if depth == 0 {
            return false;
        }

        for word in &self.language_dictionary {
            if word.chars().count() < MIN_WORD_LEN {
                continue;
            }
            if text.contains(word.as_str()) {
                let rest = text.replace(word.as_str(), "");
                return rest.chars().count() < MIN_WORD_LEN || self.matches(&rest, depth - 1);
            }
        }
        false
    }

    fn try_key<F>(&self, input: &str, key: &str, factory: &F) -> Result<Option<AttackCandidate>, CipherError>
    where
        F: Fn(&str) -> Result<ClassicalCipher, CipherError>,
    {
        let cipher = match factory(key) {
            Ok(cipher) => cipher,
            Err(e) => {
                log::warn!("skipping key {:?}: {}", key, e);
                return Ok(None);
            }
        };

        let output = cipher.decrypt(input)?;
        if self.looks_like_language(&output) {
            Ok(Some(AttackCandidate { key: key.to_owned(), output }))
        } else {
            Ok(None)
        }
    }

    /// Try every key in order. Keys the factory rejects are skipped; input
    /// that does not fit the alphabet aborts the whole attack.
    pub fn hack<F>(&self, input: &str, factory: F) -> Result<Vec<AttackCandidate>, CipherError>
    where
        F: Fn(&str) -> Result<ClassicalCipher, CipherError>,
    {
        let mut found = Vec::new();
        for key in &self.key_dictionary {
            if let Some(candidate) = self.try_key(input, key, &factory)? {
                found.push(candidate);
            }
        }
        Ok(found)
    }

    /// Same result as `hack`, with the key dictionary split across scoped
    /// worker threads.
    pub fn hack_parallel<F>(
        &self,
        input: &str,
        factory: F,
        workers: usize,
    ) -> Result<Vec<AttackCandidate>, CipherError>
    where
        F: Fn(&str) -> Result<ClassicalCipher, CipherError> + Sync,
    {
        if self.key_dictionary.is_empty() {
            return Ok(Vec::new());
        }
        let workers = workers.max(1);
        let chunk = self.key_dictionary.len().div_ceil(workers);
        let factory = &factory;

        let batches = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = self
                .key_dictionary
                .chunks(chunk)
                .map(|keys| {
                    s.spawn(move |_| -> Result<Vec<AttackCandidate>, CipherError> {
                        let mut found = Vec::new();
                        for key in keys {
                            if let Some(candidate) = self.try_key(input, key, factory)? {
                                found.push(candidate);
                            }
                        }
                        Ok(found)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        })
        .unwrap_or_else(|e| std::panic::resume_unwind(e));

        let mut found = Vec::new();
        for batch in batches {
            found.extend(batch?);
        }
        Ok(found)
    }
}
