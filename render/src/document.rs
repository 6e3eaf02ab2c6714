use std::collections::HashMap;

use crate::node::Node;

/// Minimal handle onto the host page: the pre-existing containers the
/// renderer populates. Implementations decide what content means — real
/// page elements, markup text, or an in-memory map for tests.
pub trait Document {
    /// Whether the page has a container with this id.
    fn has_container(&self, id: &str) -> bool;

    /// Throws away the container's current content and installs `nodes`.
    /// Unknown ids are ignored.
    fn replace_content(&mut self, id: &str, nodes: Vec<Node>);
}

/// Map-backed document for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    containers: HashMap<String, Vec<Node>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryDocument {
            containers: ids.into_iter().map(|id| (id.into(), Vec::new())).collect(),
        }
    }

    /// Current content of a container, `None` when the document has no
    /// such id.
    pub fn content(&self, id: &str) -> Option<&[Node]> {
        self.containers.get(id).map(Vec::as_slice)
    }
}

impl Document for MemoryDocument {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn replace_content(&mut self, id: &str, nodes: Vec<Node>) {
        if let Some(slot) = self.containers.get_mut(id) {
            *slot = nodes;
        }
    }
}
