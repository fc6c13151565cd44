//! An ordered set implemented with a height balanced AVL tree.

use std::cmp::{self, Ordering};
use std::fmt;

use crate::traverse::{self, TraverseNode};
use crate::OrderedTree;

/// An ordered set implemented with an AVL tree.
///
/// Every node caches the height of its subtree (1 for a leaf). Insertion
/// and deletion are recursive functions that hand the possibly new subtree
/// root back to their caller, recomputing the height and applying at most
/// one rotation step on each level of the unwind. The height difference of
/// the two subtrees of any node never leaves {-1, 0, 1}, so the tree height
/// stays within 1.45 * log2(n + 2).
///
/// ```
/// use ordtrees::AvlTree;
/// let mut tree = AvlTree::new();
/// for key in 1..=5 {
///     tree.insert(key);
/// }
/// // Ascending insertion would chain an unbalanced tree to height 5.
/// assert_eq!(tree.height(), 3);
/// ```
#[derive(Clone)]
pub struct AvlTree<T: Ord> {
    root: BoxLink<T>,
    num_nodes: usize,
}

#[derive(Clone)]
struct Node<T> {
    key: T,
    left: BoxLink<T>,
    right: BoxLink<T>,
    height: usize,
}

type BoxLink<T> = Option<Box<Node<T>>>;

/// An iterator over the keys of an `AvlTree` in ascending order.
pub struct Iter<'a, T> {
    // Stack of nodes whose key and right subtree are still pending,
    // deepest (smallest) last.
    stack: Vec<&'a Node<T>>,
}

impl<T: Ord> AvlTree<T> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of nodes on the longest root-to-leaf path,
    /// 0 for an empty tree. O(1), read from the root's cached height.
    pub fn height(&self) -> usize {
        height_of(&self.root)
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns a reference to the stored key equal to the given key.
    pub fn get(&self, key: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            }
        }
        None
    }

    /// Returns true if the tree contains the key.
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key into the tree, rebalancing along the insertion path.
    /// Returns false without modifying the tree if the key is already
    /// present.
    pub fn insert(&mut self, key: T) -> bool {
        let (root, inserted) = Self::insert_node(self.root.take(), key);
        self.root = Some(root);
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Removes a key from the tree, rebalancing along the removal path.
    /// Returns whether the key was previously present.
    pub fn remove(&mut self, key: &T) -> bool {
        let (root, removed) = Self::remove_node(self.root.take(), key);
        self.root = root;
        if removed {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
            debug_assert!(self.get(key).is_none());
        }
        removed
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Returns all keys in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        traverse::inorder(self.root.as_deref())
    }

    /// Returns all keys in root-left-right order.
    pub fn preorder(&self) -> Vec<&T> {
        traverse::preorder(self.root.as_deref())
    }

    /// Returns all keys in left-right-root order.
    pub fn postorder(&self) -> Vec<&T> {
        traverse::postorder(self.root.as_deref())
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        Iter { stack }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let num_nodes = match self.root.as_deref() {
            None => 0,
            Some(root) => Self::check_node(root),
        };

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);

        // Check search order over the whole tree
        let keys = self.inorder();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn check_node(node: &Node<T>) -> usize {
        let mut num_nodes = 1;
        let mut left_height = 0;
        let mut right_height = 0;

        if let Some(left) = node.left.as_deref() {
            assert!(left.key < node.key);
            left_height = left.height;
            num_nodes += Self::check_node(left);
        }
        if let Some(right) = node.right.as_deref() {
            assert!(right.key > node.key);
            right_height = right.height;
            num_nodes += Self::check_node(right);
        }

        // Check stored height against the true height
        assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

        // Check AVL condition (near balance)
        assert!(left_height <= right_height + 1);
        assert!(right_height <= left_height + 1);

        num_nodes
    }

    /// Inserts into the subtree and returns its new root.
    fn insert_node(link: BoxLink<T>, key: T) -> (Box<Node<T>>, bool) {
        let mut node = match link {
            None => return (Box::new(Node::new(key)), true),
            Some(node) => node,
        };
        let inserted = match key.cmp(&node.key) {
            Ordering::Equal => return (node, false),
            Ordering::Less => {
                let (new_left, inserted) = Self::insert_node(node.left.take(), key);
                node.left = Some(new_left);
                inserted
            }
            Ordering::Greater => {
                let (new_right, inserted) = Self::insert_node(node.right.take(), key);
                node.right = Some(new_right);
                inserted
            }
        };
        if inserted {
            node.update_height();
            node = Self::rebalance(node);
        }
        (node, inserted)
    }

    /// Removes from the subtree and returns its new root.
    fn remove_node(link: BoxLink<T>, key: &T) -> (BoxLink<T>, bool) {
        let mut node = match link {
            None => return (None, false),
            Some(node) => node,
        };
        let removed = match key.cmp(&node.key) {
            Ordering::Less => {
                let (new_left, removed) = Self::remove_node(node.left.take(), key);
                node.left = new_left;
                removed
            }
            Ordering::Greater => {
                let (new_right, removed) = Self::remove_node(node.right.take(), key);
                node.right = new_right;
                removed
            }
            Ordering::Equal => {
                return match (node.left.take(), node.right.take()) {
                    (None, right) => (right, true),
                    (left, None) => (left, true),
                    (left, Some(right)) => {
                        // Two children: the in-order successor's key moves
                        // up into this node and the successor leaves the
                        // right subtree, which rebalances on the way out.
                        let (new_right, successor_key) = Self::take_min(right);
                        node.key = successor_key;
                        node.left = left;
                        node.right = new_right;
                        node.update_height();
                        (Some(Self::rebalance(node)), true)
                    }
                };
            }
        };
        if removed {
            node.update_height();
            node = Self::rebalance(node);
        }
        (Some(node), removed)
    }

    /// Unlinks the leftmost node of the subtree, returning the remaining
    /// subtree and the smallest key.
    fn take_min(mut node: Box<Node<T>>) -> (BoxLink<T>, T) {
        match node.left.take() {
            None => (node.right.take(), node.key),
            Some(left) => {
                let (new_left, min_key) = Self::take_min(left);
                node.left = new_left;
                node.update_height();
                (Some(Self::rebalance(node)), min_key)
            }
        }
    }

    /// Restores the AVL condition at this node if necessary and returns the
    /// new subtree root. The incoming height difference never exceeds 2,
    /// which always holds after a single insert or remove further down.
    fn rebalance(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let balance = node.balance_factor();
        debug_assert!((-2..=2).contains(&balance));
        if balance > 1 {
            // Left heavy; resolve the left-right case first
            if node.left.as_ref().unwrap().balance_factor() < 0 {
                node.left = Some(Self::rotate_left(node.left.take().unwrap()));
            }
            Self::rotate_right(node)
        } else if balance < -1 {
            // Right heavy; resolve the right-left case first
            if node.right.as_ref().unwrap().balance_factor() > 0 {
                node.right = Some(Self::rotate_right(node.right.take().unwrap()));
            }
            Self::rotate_left(node)
        } else {
            node
        }
    }

    /// Re-parents the right child as the subtree root; this node becomes
    /// its left child and takes over the child's former left subtree.
    /// Heights are recomputed lower node first.
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut pivot = node.right.take().unwrap();
        node.right = pivot.left.take();
        node.update_height();
        pivot.left = Some(node);
        pivot.update_height();
        pivot
    }

    /// Mirror image of [`Self::rotate_left`].
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut pivot = node.left.take().unwrap();
        node.left = pivot.right.take();
        node.update_height();
        pivot.right = Some(node);
        pivot.update_height();
        pivot
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> OrderedTree<T> for AvlTree<T> {
    fn insert(&mut self, key: T) -> bool {
        Self::insert(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        Self::contains(self, key)
    }

    fn remove(&mut self, key: &T) -> bool {
        Self::remove(self, key)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn height(&self) -> usize {
        Self::height(self)
    }

    fn min(&self) -> Option<&T> {
        Self::min(self)
    }

    fn max(&self) -> Option<&T> {
        Self::max(self)
    }

    fn inorder(&self) -> Vec<&T> {
        Self::inorder(self)
    }

    fn preorder(&self) -> Vec<&T> {
        Self::preorder(self)
    }

    fn postorder(&self) -> Vec<&T> {
        Self::postorder(self)
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        let mut current = node.right.as_deref();
        while let Some(next) = current {
            self.stack.push(next);
            current = next.left.as_deref();
        }
        Some(&node.key)
    }
}

impl<T> TraverseNode for Node<T> {
    type Key = T;

    fn key(&self) -> &T {
        &self.key
    }

    fn left_child(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    fn right_child(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

impl<T> Node<T> {
    fn new(key: T) -> Self {
        Node {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(height_of(&self.left), height_of(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height_of(&self.left) as isize - height_of(&self.right) as isize
    }
}

fn height_of<T>(link: &BoxLink<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}
