//! Tab completion with cycling
//!
//! Candidates are injected as immutable slices; the completer holds no
//! global state. Matches are returned in sorted order so cycling is
//! deterministic.

/// Return the sorted candidates starting with `prefix`.
pub fn matches<'a>(prefix: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    let mut found: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|c| c.starts_with(prefix))
        .collect();
    found.sort_unstable();
    found
}

/// Tab completion state
#[derive(Default)]
pub struct Completer {
    /// Prefix the user originally typed (cycling filters on this)
    prefix: String,
    /// Completion returned by the last call
    last: String,
    /// Current match index for cycling
    match_idx: usize,
    /// Whether we're actively cycling
    cycling: bool,
}

impl Completer {
    /// Create new completer
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete the current word, cycling through matches on repeated calls.
    ///
    /// `word` is whatever sits in the line; a repeated tab therefore passes
    /// the previous completion back in, which continues the cycle over the
    /// originally typed prefix.
    ///
    /// Returns the completed string, or None if no match.
    pub fn complete<'a>(&mut self, word: &str, candidates: &[&'a str]) -> Option<&'a str> {
        if self.cycling && word == self.last && word != self.prefix {
            // Tab on our own completion: advance within the original prefix
            self.match_idx += 1;
        } else if word == self.prefix {
            if self.cycling {
                self.match_idx += 1;
            }
        } else {
            // New prefix, start fresh
            self.prefix.clear();
            self.prefix.push_str(word);
            self.match_idx = 0;
            self.cycling = false;
        }

        let found = matches(&self.prefix, candidates);
        if found.is_empty() {
            self.cycling = false;
            return None;
        }

        // Wrap around
        if self.match_idx >= found.len() {
            self.match_idx = 0;
        }

        self.cycling = true;
        let m = found[self.match_idx];
        self.last.clear();
        self.last.push_str(m);
        Some(m)
    }

    /// Reset completion state (call when user types non-tab)
    pub fn reset(&mut self) {
        self.cycling = false;
        self.match_idx = 0;
    }
}
