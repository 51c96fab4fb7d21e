//! Identifier generation for interactive components
//!
//! Interactive components (Accordion, Tabs, Collapse, Drawer, Modal,
//! Dropdown, Swap) need an id so that labels, toggles and close controls can
//! target each other. When the caller does not supply one, the constructor
//! calls [`generate_id`].
//!
//! # Sources
//!
//! - **Global counter**: process-wide `AtomicU64`, ids look like `g000001`.
//!   Unique for the life of the process, not reproducible across runs.
//! - **[`IdScope`]**: an injectable generator installed on the current thread
//!   with [`IdScope::enter`]. Each scope counts from 1 under its own prefix
//!   (`d` by default), so a page built inside a fresh scope always gets the
//!   same ids. Scope prefixes never overlap the global `g` namespace, so
//!   scoped and unscoped components can share one page.
//!
//! # Page seeds
//!
//! Pages rendered into one document can share a scope, or each use a
//! seeded scope whose prefix is derived from the page path:
//!
//! ```
//! use flyon_vdom::id::{IdScope, generate_id};
//!
//! let scope = IdScope::seeded("/blog/post.html");
//! let first = scope.enter(generate_id);
//! assert!(first.starts_with('p'));
//! assert!(first.ends_with("-000001"));
//! ```
//!
//! Ids always start with an ASCII letter so they work in `#id` selectors.

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use compact_str::CompactString;
use parking_lot::Mutex;

use crate::hash::seed_token;

static GLOBAL_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Prefix of ids drawn from the global counter.
const GLOBAL_PREFIX: char = 'g';

thread_local! {
    static ACTIVE: RefCell<Option<IdScope>> = const { RefCell::new(None) };
}

/// Return a fresh identifier from the active scope, or the global counter.
pub fn generate_id() -> String {
    let id = ACTIVE
        .with(|active| active.borrow().as_ref().map(IdScope::next_id))
        .unwrap_or_else(|| {
            let n = GLOBAL_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
            format!("{GLOBAL_PREFIX}{n:06}")
        });
    tracing::trace!(%id, "generated id");
    id
}

// =============================================================================
// IdGenerator
// =============================================================================

/// Monotonic counter with a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    prefix: CompactString,
    next: u64,
}

impl IdGenerator {
    /// Generator producing `<prefix>000001`, `<prefix>000002`, ...
    ///
    /// An empty prefix, one that does not start with a letter, or one
    /// that could reproduce a global id (`g` followed by digits only) is
    /// prefixed with `d`.
    pub fn new(prefix: &str) -> Self {
        let global_like = prefix
            .strip_prefix(GLOBAL_PREFIX)
            .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()));
        let prefix = if prefix.starts_with(|c: char| c.is_ascii_alphabetic()) && !global_like {
            CompactString::from(prefix)
        } else {
            compact_str::format_compact!("d{prefix}")
        };
        Self { prefix, next: 1 }
    }

    /// Produce the next id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{:06}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// The prefix every id starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("d")
    }
}

// =============================================================================
// IdScope
// =============================================================================

/// Shareable id generator that can be installed for the current thread.
///
/// Cloning a scope shares its counter, so one scope can be entered from
/// several threads rendering parts of the same page.
#[derive(Debug, Clone, Default)]
pub struct IdScope {
    inner: Arc<Mutex<IdGenerator>>,
}

impl IdScope {
    /// Scope with the default `d` prefix, counting from 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope with a literal prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(IdGenerator::new(prefix))),
        }
    }

    /// Scope whose prefix is derived from `seed` (for example a page path).
    pub fn seeded(seed: &str) -> Self {
        Self::with_prefix(&format!("p{}-", seed_token(seed)))
    }

    /// Produce the next id from this scope.
    pub fn next_id(&self) -> String {
        self.inner.lock().next_id()
    }

    /// Prefix shared by every id of this scope.
    pub fn prefix(&self) -> CompactString {
        CompactString::from(self.inner.lock().prefix())
    }

    /// Run `f` with this scope active on the current thread.
    ///
    /// Scopes nest; the previous scope is restored when `f` returns or
    /// unwinds.
    pub fn enter<R>(&self, f: impl FnOnce() -> R) -> R {
        tracing::debug!(prefix = %self.prefix(), "entering id scope");
        let previous = ACTIVE.with(|active| active.borrow_mut().replace(self.clone()));
        let _guard = RestoreGuard(Some(previous));
        f()
    }
}

struct RestoreGuard(Option<Option<IdScope>>);

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.0.take() {
            ACTIVE.with(|active| *active.borrow_mut() = previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(IdScope: Send, Sync);

    #[test]
    fn test_global_ids_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(a.starts_with('g'));
        assert_eq!(a.len(), 7);
    }

    #[test]
    fn test_scope_is_deterministic() {
        let first = IdScope::new().enter(|| (generate_id(), generate_id()));
        let second = IdScope::new().enter(|| (generate_id(), generate_id()));
        assert_eq!(first, second);
        assert_eq!(first.0, "d000001");
        assert_eq!(first.1, "d000002");
    }

    #[test]
    fn test_nested_scopes_restore() {
        let outer = IdScope::with_prefix("outer-");
        let inner = IdScope::with_prefix("inner-");
        let ids = outer.enter(|| {
            let a = generate_id();
            let b = inner.enter(generate_id);
            let c = generate_id();
            (a, b, c)
        });
        assert_eq!(ids.0, "outer-000001");
        assert_eq!(ids.1, "inner-000001");
        assert_eq!(ids.2, "outer-000002");
    }

    #[test]
    fn test_prefix_must_start_with_letter() {
        assert_eq!(IdGenerator::new("").next_id(), "d000001");
        assert_eq!(IdGenerator::new("9x").prefix(), "d9x");
        assert_eq!(IdGenerator::new("g").prefix(), "dg");
        assert_eq!(IdGenerator::new("g12").prefix(), "dg12");
        assert_eq!(IdGenerator::new("grid-").prefix(), "grid-");
        let seeded = IdScope::seeded("/index.html");
        assert_eq!(seeded.prefix(), IdScope::seeded("/index.html").prefix());
        assert_ne!(seeded.prefix(), IdScope::seeded("/about.html").prefix());
    }

    #[test]
    fn test_scoped_and_global_ids_differ() {
        let outside = generate_id();
        let inside = IdScope::new().enter(generate_id);
        assert_eq!(inside, "d000001");
        assert_ne!(outside, inside);
    }

    #[test]
    fn test_shared_scope_across_threads() {
        let scope = IdScope::with_prefix("t");
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let scope = scope.clone();
                std::thread::spawn(move || scope.enter(|| (0..10).map(|_| generate_id()).collect::<Vec<_>>()))
            })
            .collect();
        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 40);
    }
}
