//! Struct context tracking across lines.

use indexmap::IndexSet;
use naming_check_core::SourceLine;
use tracing::debug;

/// Struct and typedef names discovered so far in one file.
///
/// Append-only: once registered, a name is treated as a type for every
/// later line of the scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTypeRegistry {
    names: IndexSet<String>,
}

impl StructTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a name. Empty names are ignored. Returns true if the
    /// name was not known before.
    pub fn register(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let added = self.names.insert(name.to_string());
        if added {
            debug!("Registered struct type: {}", name);
        }
        added
    }

    /// Returns true if `name` is a registered struct type.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Registered names in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Whether the scanner is inside a `typedef struct { ... } name;` body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StructContext {
    /// Not inside a typedef body.
    #[default]
    Idle,
    /// Waiting for the `}` line that names the typedef.
    WatchingBody,
}

/// Single-level tracker for multi-line typedef struct bodies.
///
/// Nested bodies are not modeled: the first `}` after the opening line
/// closes the context.
#[derive(Debug, Clone, Default)]
pub struct StructTracker {
    state: StructContext,
}

impl StructTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> StructContext {
        self.state
    }

    /// Returns true while waiting for a closing brace.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.state == StructContext::WatchingBody
    }

    /// Enters the body of a typedef whose name is still unknown.
    pub fn open_body(&mut self, line: &SourceLine<'_>) {
        if !self.is_watching() {
            debug!("Line {}: watching typedef struct body", line.number);
        }
        self.state = StructContext::WatchingBody;
    }

    /// On the first line containing `}` while watching, returns to idle
    /// and yields the typedef name found on that line (possibly empty).
    pub fn close(&mut self, line: &SourceLine<'_>) -> Option<String> {
        if !self.is_watching() || !line.text.contains('}') {
            return None;
        }
        self.state = StructContext::Idle;
        let name = closing_name(line.text);
        debug!("Line {}: typedef struct body closed as {:?}", line.number, name);
        Some(name)
    }
}

/// Name on a closing line: `}` and whitespace removed, trailing `;` dropped.
fn closing_name(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| *c != '}' && !c.is_whitespace())
        .collect();
    stripped.trim_end_matches(';').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_ordered_and_append_only() {
        let mut registry = StructTypeRegistry::new();
        assert!(registry.register("node"));
        assert!(registry.register("Point"));
        assert!(!registry.register("node"));
        assert!(!registry.register(""));
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["node", "Point"]);
        assert!(registry.contains("Point"));
        assert!(!registry.contains("point"));
    }

    #[test]
    fn tracker_transitions_idle_watching_idle() {
        let mut tracker = StructTracker::new();
        assert_eq!(tracker.state(), StructContext::Idle);
        assert_eq!(tracker.close(&SourceLine::new(1, "} stray;")), None);

        tracker.open_body(&SourceLine::new(2, "typedef struct {"));
        assert_eq!(tracker.state(), StructContext::WatchingBody);
        assert_eq!(tracker.close(&SourceLine::new(3, "    int x;")), None);
        assert!(tracker.is_watching());

        assert_eq!(
            tracker.close(&SourceLine::new(4, "} myStruct;")),
            Some("myStruct".to_string())
        );
        assert_eq!(tracker.state(), StructContext::Idle);
    }

    #[test]
    fn closing_name_handles_bare_brace() {
        assert_eq!(closing_name("};"), "");
        assert_eq!(closing_name("}\tpoint_t ;"), "point_t");
    }
}
