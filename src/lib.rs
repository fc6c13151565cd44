//! Ordered sets backed by binary search trees.
//!
//! This crate provides two containers over a totally ordered key type:
//!
//! * [`BinarySearchTree`]: a plain, unbalanced binary search tree. Every
//!   operation runs in `O(h)` where `h` is the current height, and nothing
//!   bounds `h` below the number of elements (sorted insertion degenerates
//!   into a linked list).
//! * [`AvlTree`]: a height balanced search tree that restores the AVL
//!   condition with rotations after every insertion and deletion, keeping
//!   `h` in `O(log n)`.
//!
//! Both trees store each key exactly once: inserting a key that is already
//! present is rejected and reported with a `false` return, never an
//! overwrite. Removal of an absent key and `min`/`max` on an empty tree are
//! likewise ordinary results (`false` / `None`), not errors.
//!
//! The common operation set is captured by the [`OrderedTree`] trait so that
//! code indexing its records by key can be written once and instantiated
//! with either backing structure.
//!
//! ```
//! use ordtrees::{AvlTree, BinarySearchTree, OrderedTree};
//!
//! fn load<T: OrderedTree<i32> + Default>() -> T {
//!     let mut tree = T::default();
//!     for key in [50, 30, 70, 20, 40, 60, 80] {
//!         tree.insert(key);
//!     }
//!     tree
//! }
//!
//! let bst: BinarySearchTree<i32> = load();
//! let avl: AvlTree<i32> = load();
//! assert_eq!(bst.inorder(), avl.inorder());
//! ```

mod avl;
mod bst;
mod traverse;

pub use avl::AvlTree;
pub use bst::BinarySearchTree;

/// The operations shared by both tree variants.
///
/// Duplicate keys are rejected on insert, missing keys are reported on
/// remove, and an empty tree yields `None` for `min`/`max`. Inorder
/// traversal of a valid tree always produces the keys in strictly
/// ascending order.
pub trait OrderedTree<T: Ord> {
    /// Inserts a key. Returns whether the key was absent and a node was
    /// created.
    fn insert(&mut self, key: T) -> bool;

    /// Returns true if the tree contains the key.
    fn contains(&self, key: &T) -> bool;

    /// Removes a key. Returns whether the key was present.
    fn remove(&mut self, key: &T) -> bool;

    /// Returns the number of keys in the tree.
    fn len(&self) -> usize;

    /// Returns true if the tree contains no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    /// An empty tree has height 0, a single node height 1.
    fn height(&self) -> usize;

    /// Returns the smallest key, or `None` if the tree is empty.
    fn min(&self) -> Option<&T>;

    /// Returns the largest key, or `None` if the tree is empty.
    fn max(&self) -> Option<&T>;

    /// Returns all keys in ascending order.
    fn inorder(&self) -> Vec<&T>;

    /// Returns all keys in root-left-right order.
    fn preorder(&self) -> Vec<&T>;

    /// Returns all keys in left-right-root order.
    fn postorder(&self) -> Vec<&T>;
}

#[cfg(test)]
mod tests;
