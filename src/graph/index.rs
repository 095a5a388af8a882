//! Lookup set of every name a schedule may use to reference an action.

use std::collections::HashSet;

use super::types::{CompiledGraph, Target};

/// Readable and bare names of all tables, assertions, and targeted operations.
#[derive(Debug, Clone, Default)]
pub struct ActionIndex {
    names: HashSet<String>,
}

impl ActionIndex {
    pub fn from_graph(graph: &CompiledGraph) -> Self {
        let targets = graph
            .tables
            .iter()
            .map(|t| &t.target)
            .chain(graph.assertions.iter().map(|a| &a.target))
            .chain(graph.operations.iter().filter_map(|o| o.target.as_ref()));

        let mut names = HashSet::new();
        for target in targets {
            insert_target(&mut names, target);
        }

        ActionIndex { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// All reference names in lexical order.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn insert_target(names: &mut HashSet<String>, target: &Target) {
    names.insert(target.readable());
    names.insert(target.name.clone());
}
