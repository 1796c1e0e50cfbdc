//! Command history with ring buffer
//!
//! Fixed capacity chosen at construction. Three independent position
//! markers: `head` (next write), `tail` (oldest live entry) and `cursor`
//! (navigation), so browsing never disturbs appends. The markers are
//! monotonic logical indices; the slot a marker addresses is
//! `index % capacity`. `cursor == head` is the live-edit position,
//! meaning no history entry is currently selected.

use log::debug;

/// Bounded, cursor-addressable history of submitted command lines.
pub struct HistoryBuffer {
    /// Ring slots, addressed as `logical_index % capacity`
    slots: Vec<String>,
    capacity: usize,
    /// Logical index of the next slot to write
    head: usize,
    /// Logical index of the oldest live entry
    tail: usize,
    /// Logical navigation position, `tail..=head`
    cursor: usize,
}

impl HistoryBuffer {
    /// Create an empty history with room for `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            slots: vec![String::new(); capacity],
            capacity,
            head: 0,
            tail: 0,
            cursor: 0,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.head - self.tail
    }

    /// True if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True while the cursor addresses a stored entry rather than the
    /// live-edit position.
    pub fn is_browsing(&self) -> bool {
        self.cursor < self.head
    }

    /// Record `line` as the newest entry.
    ///
    /// On overflow the oldest entry is silently evicted; that is the
    /// defined behavior, not a failure. The cursor is left where it is,
    /// so a caller can append without disturbing an in-progress recall.
    /// Call [`cursor_to_end`](Self::cursor_to_end) after a submit.
    pub fn append(&mut self, line: &str) {
        let slot = self.head % self.capacity;
        self.slots[slot].clear();
        self.slots[slot].push_str(line);
        self.head += 1;
        if self.head - self.tail > self.capacity {
            debug!("history full, evicting oldest entry");
            self.tail += 1;
        }
    }

    /// Deselect any history entry: park the cursor at the live-edit
    /// position just past the newest entry.
    pub fn cursor_to_end(&mut self) {
        self.cursor = self.head;
    }

    /// Retract the most recently appended entry (undo of the last
    /// [`append`](Self::append)). No-op on an empty buffer.
    pub fn remove_last(&mut self) {
        if self.is_empty() {
            return;
        }
        self.head -= 1;
        self.slots[self.head % self.capacity].clear();
        if self.cursor > self.head {
            self.cursor = self.head;
        }
    }

    /// Replace the most recently appended entry with `line`, without
    /// creating a new slot. Used to finalize a draft entry on submit.
    /// No-op on an empty buffer.
    pub fn accept(&mut self, line: &str) {
        if self.is_empty() {
            return;
        }
        let slot = (self.head - 1) % self.capacity;
        self.slots[slot].clear();
        self.slots[slot].push_str(line);
    }

    /// Persist in-progress edited text at the entry the cursor addresses,
    /// so navigating away and back preserves the edit.
    ///
    /// At the live-edit position a non-empty `line` is inserted as a new
    /// entry instead of being dropped; the cursor then addresses the
    /// inserted draft. This is the one case where `update` changes the
    /// ring's fill state rather than only its contents.
    pub fn update(&mut self, line: &str) {
        if self.is_browsing() {
            let slot = self.cursor % self.capacity;
            self.slots[slot].clear();
            self.slots[slot].push_str(line);
        } else if !line.is_empty() {
            self.append(line);
        }
    }

    /// True iff an older entry exists to move to.
    pub fn previous_available(&self) -> bool {
        !self.is_empty() && self.cursor > self.tail
    }

    /// True iff a newer stored entry exists to move to.
    pub fn next_available(&self) -> bool {
        !self.is_empty() && self.cursor + 1 < self.head
    }

    /// Move the cursor one entry toward older history and return the
    /// entry now addressed. `None` means no older entry exists.
    pub fn previous(&mut self) -> Option<&str> {
        if !self.previous_available() {
            return None;
        }
        self.cursor -= 1;
        Some(self.slots[self.cursor % self.capacity].as_str())
    }

    /// Move the cursor one entry toward more recent history and return
    /// the entry now addressed. `None` means no newer entry exists.
    pub fn next(&mut self) -> Option<&str> {
        if !self.next_available() {
            return None;
        }
        self.cursor += 1;
        Some(self.slots[self.cursor % self.capacity].as_str())
    }

    /// Unconditionally advance the cursor one position.
    ///
    /// Low-level primitive for callers that manage the cursor outside the
    /// `previous`/`next` contract (e.g. realigning to the live-edit
    /// position after stepping past the newest entry). Performs no bounds
    /// validation beyond the slot wrap.
    pub fn increment_cursor(&mut self) {
        self.cursor += 1;
    }

    /// Erase all entries and reset every marker. Idempotent.
    pub fn clear(&mut self) {
        debug!("history cleared ({} entries dropped)", self.len());
        for slot in &mut self.slots {
            slot.clear();
        }
        self.head = 0;
        self.tail = 0;
        self.cursor = 0;
    }

    /// Walk the live entries oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        (self.tail..self.head).map(move |i| self.slots[i % self.capacity].as_str())
    }
}
