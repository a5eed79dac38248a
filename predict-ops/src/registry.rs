//! Operation Registry

use crate::operation::{difference, ratio, reciprocal, Operation, OperationKind};
use serde::Serialize;

/// Summary of a registered operation, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    pub description: &'static str,
    pub kind: OperationKind,
}

/// Ordered catalog of operations tried during search.
///
/// Order is significant: at every level the search commits to the first
/// operation whose branch reduces to a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRegistry {
    operations: Vec<Operation>,
}

impl OperationRegistry {
    /// An empty registry. Only constant sequences can be explained with it.
    pub fn new() -> Self {
        Self { operations: Vec::new() }
    }

    /// Difference, ratio, reciprocal, in that order
    pub fn standard() -> Self {
        Self::new()
            .with_operation(difference())
            .with_operation(ratio())
            .with_operation(reciprocal())
    }

    /// Append an operation, or replace the one sharing its description in place
    pub fn with_operation(mut self, op: Operation) -> Self {
        match self.operations.iter_mut().find(|existing| **existing == op) {
            Some(existing) => *existing = op,
            None => self.operations.push(op),
        }
        self
    }

    pub fn get(&self, description: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.description() == description)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// Operations allowed right after `previous`, in registry order
    pub fn eligible_after<'a>(
        &'a self,
        previous: Option<&'a Operation>,
    ) -> impl Iterator<Item = &'a Operation> + 'a {
        self.operations.iter().filter(move |op| op.can_follow(previous))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn list(&self) -> Vec<OperationInfo> {
        self.operations
            .iter()
            .map(|op| OperationInfo {
                description: op.description(),
                kind: op.kind(),
            })
            .collect()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptions(registry: &OperationRegistry) -> Vec<&'static str> {
        registry.iter().map(|op| op.description()).collect()
    }

    #[test]
    fn test_standard_order() {
        let registry = OperationRegistry::standard();
        assert_eq!(descriptions(&registry), vec!["a-b", "a/b", "1/a"]);
        assert_eq!(registry, OperationRegistry::default());
    }

    #[test]
    fn test_empty() {
        let registry = OperationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.eligible_after(None).count(), 0);
    }

    #[test]
    fn test_with_operation_appends() {
        let registry = OperationRegistry::standard()
            .with_operation(Operation::binary("a+b", |p, c| c + p, |l, s| s - l));
        assert_eq!(registry.len(), 4);
        assert_eq!(descriptions(&registry)[3], "a+b");
    }

    #[test]
    fn test_with_operation_replaces_in_place() {
        let registry = OperationRegistry::standard()
            .with_operation(Operation::binary("a-b", |p, c| p - c, |l, d| l - d));
        assert_eq!(descriptions(&registry), vec!["a-b", "a/b", "1/a"]);
        let replaced = registry.get("a-b").unwrap();
        assert_eq!(replaced.forward(&[1.0, 3.0]), vec![-2.0]);
    }

    #[test]
    fn test_eligible_after() {
        let registry = OperationRegistry::standard();
        let root: Vec<_> = registry.eligible_after(None).map(|op| op.description()).collect();
        assert_eq!(root, vec!["a-b", "a/b", "1/a"]);

        let inv = reciprocal();
        let after_inv: Vec<_> = registry.eligible_after(Some(&inv)).map(|op| op.description()).collect();
        assert_eq!(after_inv, vec!["a-b", "a/b"]);

        let diff = difference();
        assert_eq!(registry.eligible_after(Some(&diff)).count(), 3);
    }

    #[test]
    fn test_get_unknown() {
        assert!(OperationRegistry::standard().get("a*b").is_none());
    }

    #[test]
    fn test_list() {
        let list = OperationRegistry::standard().list();
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], OperationInfo { description: "1/a", kind: OperationKind::Unary });
    }
}
