//! Identifier minting.
//!
//! Identifiers are `<kind>_<millis>`. Two mints inside the same millisecond
//! would collide, so the stamp is bumped until the candidate is free in the
//! document it will be inserted into.

use std::cell::Cell;

use tracing::trace;

use crate::document::Document;
use crate::types::{FieldId, FieldKind};

/// Source of millisecond timestamps for minting.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// A clock that advances by `step` milliseconds on every read.
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<i64>,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}

/// Mint a fresh identifier for a field of `kind` that is not taken in `doc`.
pub fn mint(kind: FieldKind, doc: &Document, clock: &dyn Clock) -> FieldId {
    first_free(kind.as_str(), clock.now_millis(), |id| doc.is_taken(id))
}

/// Append a timestamp suffix to `base` until it is free for the entry at
/// `index`.
pub fn unique_suffix(base: &str, doc: &Document, index: usize, clock: &dyn Clock) -> FieldId {
    first_free(base, clock.now_millis(), |id| doc.is_taken_except(id, index))
}

fn first_free(prefix: &str, start: i64, taken: impl Fn(&str) -> bool) -> FieldId {
    let mut stamp = Some(start);
    while let Some(current) = stamp {
        let candidate = format!("{prefix}_{current}");
        if !taken(&candidate) {
            return FieldId::from(candidate);
        }
        trace!(%candidate, "identifier taken, bumping stamp");
        stamp = current.checked_add(1);
    }

    // Every stamp up to i64::MAX is taken: count instead.
    let mut tiebreak: u64 = 1;
    loop {
        let candidate = format!("{prefix}_{start}_{tiebreak}");
        if !taken(&candidate) {
            return FieldId::from(candidate);
        }
        trace!(%candidate, "identifier taken, bumping tiebreak");
        tiebreak = tiebreak.saturating_add(1);
    }
}
