//! Visit registry and recursion marker.
//!
//! A composite is registered the first time the renderer enters it and stays
//! registered until the top-level render call that created the registry
//! returns. Meeting a registered composite again, by a cycle or by a second
//! path through the same graph, renders a `Recursion` node instead.
//!
//! The registry is a side-table keyed by composite identity. Nothing is ever
//! written onto the inspected values themselves.

use std::collections::HashSet;
use std::sync::OnceLock;

use peek_api::Key;

/// Process-lifetime token naming the reserved member key.
///
/// Generated once and reused by every render. A member whose key equals the
/// marker is never rendered as a child.
#[derive(Debug)]
pub struct RecursionMarker(String);

impl RecursionMarker {
    /// The process-wide marker.
    pub fn get() -> &'static RecursionMarker {
        static MARKER: OnceLock<RecursionMarker> = OnceLock::new();
        MARKER.get_or_init(|| RecursionMarker(format!("peek{}", uuid::Uuid::new_v4().simple())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a container key is the reserved marker key.
    pub fn matches(&self, key: &Key) -> bool {
        matches!(key, Key::Name(name) if *name == self.0)
    }

    /// Whether a record property name is the reserved marker key.
    pub fn matches_name(&self, name: &str) -> bool {
        name == self.0
    }
}

/// Per-invocation set of composites currently being rendered.
///
/// Created by the outermost render call and passed by `&mut` through the
/// recursion. Dropping it sweeps every registration, on success and on
/// unwind alike.
#[derive(Debug, Default)]
pub struct VisitRegistry {
    active: HashSet<usize>,
    hits: usize,
}

impl VisitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a composite about to be rendered is already registered.
    /// A `true` answer is counted as a recursion.
    pub fn revisits(&mut self, id: usize) -> bool {
        if !self.active.contains(&id) {
            return false;
        }
        self.hits += 1;
        tracing::trace!(id, "recursion detected");
        true
    }

    /// Register a composite before rendering its members.
    pub fn enter(&mut self, id: usize) {
        self.active.insert(id);
    }

    /// Number of recursions detected so far.
    pub fn recursion_hits(&self) -> usize {
        self.hits
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Remove every registration. Returns how many were removed.
    pub fn sweep(&mut self) -> usize {
        let swept = self.active.len();
        self.active.clear();
        self.hits = 0;
        swept
    }
}

impl Drop for VisitRegistry {
    fn drop(&mut self) {
        let swept = self.sweep();
        if swept > 0 {
            tracing::trace!(swept, "visit registry swept");
        }
    }
}
