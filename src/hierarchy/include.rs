use serde_json::{json, Value};

/// Default materialization bound: how many levels of descendants are
/// eagerly loaded below each matched employee.
pub const DEFAULT_INCLUDE_DEPTH: u32 = 30;

/// Upper bound for a configured depth. Rendering and dropping a spec walk
/// every level recursively, so deeper values are refused.
pub const MAX_INCLUDE_DEPTH: u32 = 256;

/// Nested "include children" directive handed to the store.
///
/// Each level wraps the next; a level with `children: None` loads the direct
/// children of that level and stops there. An empty spec (`depth() == 0`)
/// loads no children at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncludeSpec {
    children: Option<Box<IncludeSpec>>,
    include_children: bool,
}

impl IncludeSpec {
    /// Build a spec that loads `depth` levels of descendants.
    ///
    /// Pure: the same depth always yields a structurally equal spec.
    pub fn build(depth: u32) -> Self {
        let mut spec = IncludeSpec::default();
        for _ in 0..depth {
            spec = if spec.include_children {
                IncludeSpec {
                    children: Some(Box::new(spec)),
                    include_children: true,
                }
            } else {
                IncludeSpec {
                    children: None,
                    include_children: true,
                }
            };
        }
        spec
    }

    /// Number of descendant levels this spec materializes.
    pub fn depth(&self) -> u32 {
        let mut depth = 0;
        let mut level = Some(self);
        while let Some(spec) = level {
            if !spec.include_children {
                break;
            }
            depth += 1;
            level = spec.children.as_deref();
        }
        depth
    }

    /// Render as the nested JSON directive form, e.g. depth 2 becomes
    /// `{"children": {"include": {"children": true}}}`.
    pub fn to_json(&self) -> Value {
        if !self.include_children {
            return json!({});
        }
        match self.children.as_deref() {
            Some(inner) => json!({ "children": { "include": inner.to_json() } }),
            None => json!({ "children": true }),
        }
    }
}
