//! Arena representation of recursive questionnaire item trees.
//!
//! Questionnaire and QuestionnaireResponse items nest arbitrarily deep. The
//! arena flattens them into a node vector with child-index lists so that
//! building and walking the tree never recurses on the call stack.

/// A node type that owns its child items.
pub trait TreeItem: Sized {
    /// Detaches and returns the children of this item, in document order.
    fn take_children(&mut self) -> Vec<Self>;
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    children: Vec<usize>,
}

/// Owned item tree stored as an arena.
///
/// Nodes are numbered in depth-first pre-order (children in original order),
/// so iterating the arena by index is a pre-order walk.
#[derive(Debug, Clone)]
pub struct ItemTree<T> {
    nodes: Vec<Node<T>>,
}

impl<T: TreeItem> ItemTree<T> {
    /// Builds the arena from top-level items with an explicit work stack.
    pub fn from_roots(roots: Vec<T>) -> Self {
        let mut tree = Self { nodes: Vec::new() };

        let mut pending: Vec<(T, Option<usize>)> =
            roots.into_iter().rev().map(|root| (root, None)).collect();

        while let Some((mut value, parent)) = pending.pop() {
            let children = value.take_children();
            let index = tree.nodes.len();
            tree.nodes.push(Node {
                value,
                children: Vec::with_capacity(children.len()),
            });

            if let Some(parent) = parent {
                tree.nodes[parent].children.push(index);
            }

            pending.extend(children.into_iter().rev().map(|child| (child, Some(index))));
        }

        tree
    }
}

impl<T> ItemTree<T> {
    /// Number of items in the tree, including inner nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Items without children, in depth-first pre-order.
    pub fn leaves(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.children.is_empty())
            .map(|node| &node.value)
    }

    /// First leaf (in pre-order) matching `predicate`.
    pub fn find_leaf(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.leaves().find(|item| predicate(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        name: &'static str,
        items: Vec<Item>,
    }

    impl TreeItem for Item {
        fn take_children(&mut self) -> Vec<Self> {
            std::mem::take(&mut self.items)
        }
    }

    fn item(name: &'static str, items: Vec<Item>) -> Item {
        Item { name, items }
    }

    fn leaf_names(tree: &ItemTree<Item>) -> Vec<&'static str> {
        tree.leaves().map(|item| item.name).collect()
    }

    #[test]
    fn test_parents_are_not_leaves() {
        let tree = ItemTree::from_roots(vec![item(
            "A",
            vec![item("A1", vec![]), item("A2", vec![item("A2a", vec![])])],
        )]);

        assert_eq!(tree.len(), 4);
        assert_eq!(leaf_names(&tree), vec!["A1", "A2a"]);
    }

    #[test]
    fn test_pre_order_across_roots() {
        let tree = ItemTree::from_roots(vec![
            item("A", vec![item("A1", vec![item("A1x", vec![])]), item("A2", vec![])]),
            item("B", vec![]),
            item("C", vec![item("C1", vec![])]),
        ]);

        assert_eq!(tree.len(), 7);
        assert_eq!(leaf_names(&tree), vec!["A1x", "A2", "B", "C1"]);
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let mut current = item("bottom", vec![]);
        for _ in 0..100_000 {
            current = item("inner", vec![current]);
        }

        // Building consumes the nested value level by level; the arena itself
        // is flat, so dropping it is not recursive either.
        let tree = ItemTree::from_roots(vec![current]);
        assert_eq!(tree.len(), 100_001);
        assert_eq!(leaf_names(&tree), vec!["bottom"]);
    }

    #[test]
    fn test_find_leaf() {
        let tree = ItemTree::from_roots(vec![
            item("group", vec![item("q1", vec![]), item("q2", vec![])]),
            item("q2", vec![]),
        ]);

        let found = tree.find_leaf(|item| item.name == "q2");
        assert!(found.is_some());
        assert!(tree.find_leaf(|item| item.name == "group").is_none());
        assert!(tree.find_leaf(|item| item.name == "missing").is_none());
    }

    #[test]
    fn test_empty_tree() {
        let tree: ItemTree<Item> = ItemTree::from_roots(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.leaves().count(), 0);
    }
}
