//! Traversal helpers shared by both tree variants.
//!
//! The two node representations differ (raw pointers with parent links vs.
//! boxed children with cached heights), so the walkers are generic over a
//! minimal read-only view of a node.

use std::cmp;

/// Read-only view of a tree node, just enough to walk a subtree.
pub(crate) trait TraverseNode: Sized {
    type Key;

    fn key(&self) -> &Self::Key;
    fn left_child(&self) -> Option<&Self>;
    fn right_child(&self) -> Option<&Self>;
}

#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

/// Returns all keys of the subtree in ascending order.
pub(crate) fn inorder<N: TraverseNode>(root: Option<&N>) -> Vec<&N::Key> {
    collect(root, Order::In)
}

/// Returns all keys of the subtree in root-left-right order.
pub(crate) fn preorder<N: TraverseNode>(root: Option<&N>) -> Vec<&N::Key> {
    collect(root, Order::Pre)
}

/// Returns all keys of the subtree in left-right-root order.
pub(crate) fn postorder<N: TraverseNode>(root: Option<&N>) -> Vec<&N::Key> {
    collect(root, Order::Post)
}

/// Recomputes the height of the subtree: number of nodes on the longest
/// path to a leaf, 0 for an absent subtree.
pub(crate) fn subtree_height<N: TraverseNode>(node: Option<&N>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            1 + cmp::max(
                subtree_height(node.left_child()),
                subtree_height(node.right_child()),
            )
        }
    }
}

fn collect<N: TraverseNode>(root: Option<&N>, order: Order) -> Vec<&N::Key> {
    let mut keys = Vec::new();
    walk(root, order, &mut keys);
    keys
}

// Recursion depth is bounded by the tree height, which only the AVL
// variant keeps logarithmic.
fn walk<'a, N: TraverseNode>(node: Option<&'a N>, order: Order, out: &mut Vec<&'a N::Key>) {
    if let Some(node) = node {
        if let Order::Pre = order {
            out.push(node.key());
        }
        walk(node.left_child(), order, out);
        if let Order::In = order {
            out.push(node.key());
        }
        walk(node.right_child(), order, out);
        if let Order::Post = order {
            out.push(node.key());
        }
    }
}
