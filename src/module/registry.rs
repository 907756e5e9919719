// src/module/registry.rs
//! Path-keyed registry over parsed modules.
//!
//! The registry borrows the ASTs it indexes; parsing owns them. Ordering
//! uses Kahn's algorithm with sorted tie-breaking so the result is
//! deterministic across runs.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::frontend::Module;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("module '{path}' is already registered")]
    DuplicateModule { path: String },

    #[error("dependency cycle among registered modules")]
    DependencyCycle,
}

/// Registry of parsed modules and the import edges between them.
pub struct ModuleRegistry<'a> {
    modules: FxHashMap<String, &'a Module>,
    /// from -> modules it imports
    dependencies: FxHashMap<String, Vec<String>>,
}

impl<'a> ModuleRegistry<'a> {
    pub fn new() -> Self {
        Self {
            modules: FxHashMap::default(),
            dependencies: FxHashMap::default(),
        }
    }

    /// Register a module AST under a dot-separated path. Registering the
    /// same path twice is an error.
    pub fn register(&mut self, path: &str, module: &'a Module) -> Result<(), RegistryError> {
        if self.modules.contains_key(path) {
            return Err(RegistryError::DuplicateModule {
                path: path.to_string(),
            });
        }
        self.modules.insert(path.to_string(), module);
        Ok(())
    }

    /// Record an import edge: `from` depends on `to`. Either side may be
    /// registered later; edges to paths that never get registered are
    /// ignored by the ordering.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        let deps = self.dependencies.entry(from.to_string()).or_default();
        if !deps.iter().any(|d| d == to) {
            deps.push(to.to_string());
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.modules.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&'a Module> {
        self.modules.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Produce a dependency-respecting ordering of all registered
    /// modules: every module appears after the modules it imports.
    ///
    /// Kahn's algorithm: repeatedly take a zero-in-degree module (the
    /// lexicographically smallest, for determinism) and release its
    /// dependents. Failing to place every module means a cycle.
    pub fn topological_order(&self) -> Result<Vec<String>, RegistryError> {
        let mut in_degree: FxHashMap<&str, usize> =
            self.modules.keys().map(|k| (k.as_str(), 0)).collect();
        // to -> registered modules that import it
        let mut dependents: FxHashMap<&str, Vec<&str>> = FxHashMap::default();

        for (from, deps) in &self.dependencies {
            if !self.modules.contains_key(from) {
                continue;
            }
            for to in deps {
                if !self.modules.contains_key(to) {
                    continue;
                }
                *in_degree
                    .get_mut(from.as_str())
                    .expect("registered module has an in-degree entry") += 1;
                dependents.entry(to.as_str()).or_default().push(from.as_str());
            }
        }

        let mut ready: Vec<&str> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&path, _)| path)
            .collect();
        ready.sort_unstable();

        let mut order = Vec::with_capacity(self.modules.len());
        while let Some(path) = ready.first().copied() {
            ready.remove(0);
            order.push(path.to_string());

            if let Some(deps) = dependents.get(path) {
                let mut released = Vec::new();
                for &dependent in deps {
                    let degree = in_degree
                        .get_mut(dependent)
                        .expect("dependent is a registered module");
                    *degree -= 1;
                    if *degree == 0 {
                        released.push(dependent);
                    }
                }
                for freed in released {
                    let idx = ready.partition_point(|&p| p < freed);
                    ready.insert(idx, freed);
                }
            }
        }

        if order.len() != self.modules.len() {
            return Err(RegistryError::DependencyCycle);
        }
        Ok(order)
    }
}

impl<'a> Default for ModuleRegistry<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::Parser;

    fn parse(source: &str) -> Module {
        Parser::new(source).parse_module().unwrap()
    }

    #[test]
    fn register_and_get() {
        let m = parse("fn main() { return; }");
        let mut registry = ModuleRegistry::new();
        registry.register("app.main", &m).unwrap();
        assert!(registry.contains("app.main"));
        assert!(registry.get("app.main").is_some());
        assert!(registry.get("app.other").is_none());
    }

    #[test]
    fn duplicate_registration_fails() {
        let m = parse("let x = 1;");
        let mut registry = ModuleRegistry::new();
        registry.register("lib", &m).unwrap();
        let err = registry.register("lib", &m).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateModule {
                path: "lib".to_string()
            }
        );
    }

    #[test]
    fn topological_order_respects_dependencies() {
        let m = parse("let x = 1;");
        let mut registry = ModuleRegistry::new();
        registry.register("app", &m).unwrap();
        registry.register("lib.core", &m).unwrap();
        registry.register("lib.util", &m).unwrap();
        registry.add_dependency("app", "lib.util");
        registry.add_dependency("lib.util", "lib.core");

        let order = registry.topological_order().unwrap();
        assert_eq!(order, vec!["lib.core", "lib.util", "app"]);
    }

    #[test]
    fn topological_order_is_deterministic() {
        let m = parse("let x = 1;");
        let mut registry = ModuleRegistry::new();
        for path in ["c", "a", "b"] {
            registry.register(path, &m).unwrap();
        }
        // No edges: ties break lexicographically.
        assert_eq!(registry.topological_order().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn cycle_is_an_error() {
        let m = parse("let x = 1;");
        let mut registry = ModuleRegistry::new();
        registry.register("a", &m).unwrap();
        registry.register("b", &m).unwrap();
        registry.add_dependency("a", "b");
        registry.add_dependency("b", "a");
        assert_eq!(
            registry.topological_order().unwrap_err(),
            RegistryError::DependencyCycle
        );
    }

    #[test]
    fn edges_to_unregistered_modules_are_ignored() {
        let m = parse("let x = 1;");
        let mut registry = ModuleRegistry::new();
        registry.register("app", &m).unwrap();
        registry.add_dependency("app", "never.registered");
        assert_eq!(registry.topological_order().unwrap(), vec!["app"]);
    }

    #[test]
    fn duplicate_edges_count_once() {
        let m = parse("let x = 1;");
        let mut registry = ModuleRegistry::new();
        registry.register("a", &m).unwrap();
        registry.register("b", &m).unwrap();
        registry.add_dependency("a", "b");
        registry.add_dependency("a", "b");
        assert_eq!(registry.topological_order().unwrap(), vec!["b", "a"]);
    }
}
