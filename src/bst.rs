//! An ordered set implemented with a plain (unbalanced) binary search tree.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::traverse::{self, TraverseNode};
use crate::OrderedTree;

/// An ordered set implemented with an unbalanced binary search tree.
///
/// Nodes carry a non-owning back-reference to their parent, kept in sync
/// with the child links at every mutation. Deletion replaces the removed
/// node by transplanting subtrees in its parent's slot; no rebalancing ever
/// takes place, so the height is bounded only by the number of keys.
///
/// ```
/// use ordtrees::BinarySearchTree;
/// let mut tree = BinarySearchTree::new();
/// assert!(tree.insert(2));
/// assert!(tree.insert(1));
/// assert!(!tree.insert(2));
/// assert!(tree.contains(&1));
/// tree.remove(&1);
/// assert!(!tree.contains(&1));
/// ```
pub struct BinarySearchTree<T: Ord> {
    root: Link<T>,
    num_nodes: usize,
}

struct Node<T> {
    key: T,
    left: Link<T>,
    right: Link<T>,
    parent: Link<T>,
}

type NodePtr<T> = NonNull<Node<T>>;
type Link<T> = Option<NodePtr<T>>;
type LinkPtr<T> = NonNull<Link<T>>;

#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

/// An iterator over the keys of a `BinarySearchTree` in ascending order.
pub struct Iter<'a, T> {
    next: Link<T>,
    marker: PhantomData<&'a Node<T>>,
}

impl<T: Ord> BinarySearchTree<T> {
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
    /// 0 for an empty tree.
    ///
    /// The unbalanced tree has no incremental invariant that would keep a
    /// cached height correct, so this recomputes in O(n).
    pub fn height(&self) -> usize {
        traverse::subtree_height(self.root_ref())
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        self.postorder_nodes(|node_ptr| unsafe { Node::destroy(node_ptr) });
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns a reference to the stored key equal to the given key.
    pub fn get(&self, key: &T) -> Option<&T> {
        if let Some(node_ptr) = self.find(key) {
            return Some(&unsafe { &*node_ptr.as_ptr() }.key);
        }
        None
    }

    /// Returns true if the tree contains the key.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Inserts a key into the tree.
    /// Returns false without modifying the tree if the key is already
    /// present.
    pub fn insert(&mut self, key: T) -> bool {
        if let Some((parent, mut link_ptr)) = self.find_insert_pos(&key) {
            unsafe {
                *link_ptr.as_mut() = Some(Node::create(parent, key));
            }
            self.num_nodes += 1;
            return true;
        }
        false
    }

    /// Removes a key from the tree.
    /// Returns whether the key was previously present.
    pub fn remove(&mut self, key: &T) -> bool {
        if let Some(node_ptr) = self.find(key) {
            debug_assert!(self.num_nodes >= 1);
            self.unlink_node(node_ptr);
            unsafe { Node::destroy(node_ptr) };
            self.num_nodes -= 1;
            debug_assert!(self.get(key).is_none());
            return true;
        }
        false
    }

    /// Returns the smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root?;
        unsafe {
            while let Some(left_ptr) = current.as_ref().left {
                current = left_ptr;
            }
            Some(&(*current.as_ptr()).key)
        }
    }

    /// Returns the largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root?;
        unsafe {
            while let Some(right_ptr) = current.as_ref().right {
                current = right_ptr;
            }
            Some(&(*current.as_ptr()).key)
        }
    }

    /// Returns all keys in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        traverse::inorder(self.root_ref())
    }

    /// Returns all keys in root-left-right order.
    pub fn preorder(&self) -> Vec<&T> {
        traverse::preorder(self.root_ref())
    }

    /// Returns all keys in left-right-root order.
    pub fn postorder(&self) -> Vec<&T> {
        traverse::postorder(self.root_ref())
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut next = self.root;
        unsafe {
            while let Some(node_ptr) = next {
                if node_ptr.as_ref().left.is_none() {
                    break;
                }
                next = node_ptr.as_ref().left;
            }
        }
        Iter {
            next,
            marker: PhantomData,
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        unsafe {
            // Check root link
            if let Some(root_node_ptr) = self.root {
                assert!(root_node_ptr.as_ref().parent.is_none());
            }

            // Check tree nodes
            let mut num_nodes = 0;
            self.preorder_nodes(|node_ptr| {
                // Check link for left child node
                if let Some(left_ptr) = node_ptr.as_ref().left {
                    assert!(left_ptr.as_ref().parent == Some(node_ptr));
                    assert!(left_ptr.as_ref().key < node_ptr.as_ref().key);
                }

                // Check link for right child node
                if let Some(right_ptr) = node_ptr.as_ref().right {
                    assert!(right_ptr.as_ref().parent == Some(node_ptr));
                    assert!(right_ptr.as_ref().key > node_ptr.as_ref().key);
                }

                num_nodes += 1;
            });

            // Check number of nodes
            assert_eq!(num_nodes, self.num_nodes);
        }

        // Check search order over the whole tree, not just parent/child pairs
        let keys = self.inorder();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    fn root_ref(&self) -> Option<&Node<T>> {
        self.root.map(|node_ptr| unsafe { &*node_ptr.as_ptr() })
    }

    fn find(&self, key: &T) -> Link<T> {
        let mut current = self.root;
        while let Some(node_ptr) = current {
            current = unsafe {
                match key.cmp(&node_ptr.as_ref().key) {
                    Ordering::Equal => break,
                    Ordering::Less => node_ptr.as_ref().left,
                    Ordering::Greater => node_ptr.as_ref().right,
                }
            }
        }
        current
    }

    fn find_insert_pos(&mut self, key: &T) -> Option<(Link<T>, LinkPtr<T>)> {
        let mut parent: Link<T> = None;
        let mut link_ptr: LinkPtr<T> = unsafe { LinkPtr::new_unchecked(&mut self.root) };
        unsafe {
            while let Some(mut node_ptr) = *link_ptr.as_ref() {
                match key.cmp(&node_ptr.as_ref().key) {
                    Ordering::Equal => return None,
                    Ordering::Less => {
                        parent = *link_ptr.as_ref();
                        link_ptr = LinkPtr::new_unchecked(&mut node_ptr.as_mut().left);
                    }
                    Ordering::Greater => {
                        parent = *link_ptr.as_ref();
                        link_ptr = LinkPtr::new_unchecked(&mut node_ptr.as_mut().right);
                    }
                }
            }
        }
        Some((parent, link_ptr))
    }

    /// Unlinks a node, branching on its shape: leaf, single child, or two
    /// children (replace by the in-order successor). Every child pointer
    /// update is paired with the matching parent back-reference update.
    fn unlink_node(&mut self, node_ptr: NodePtr<T>) {
        unsafe {
            let left = node_ptr.as_ref().left;
            let right = node_ptr.as_ref().right;
            match (left, right) {
                // At most one child, transplant it into our slot
                (None, _) => self.transplant(node_ptr, right),
                (Some(_), None) => self.transplant(node_ptr, left),
                (Some(mut left_ptr), Some(mut right_ptr)) => {
                    // In-order successor is the leftmost node of the right
                    // subtree and has no left child of its own
                    let mut succ_ptr = right_ptr;
                    while let Some(succ_left_ptr) = succ_ptr.as_ref().left {
                        succ_ptr = succ_left_ptr;
                    }
                    debug_assert!(succ_ptr.as_ref().left.is_none());

                    if succ_ptr.as_ref().parent != Some(node_ptr) {
                        // Detach the successor from its own position first,
                        // then take over the right subtree
                        self.transplant(succ_ptr, succ_ptr.as_ref().right);
                        succ_ptr.as_mut().right = Some(right_ptr);
                        right_ptr.as_mut().parent = Some(succ_ptr);
                    }

                    self.transplant(node_ptr, Some(succ_ptr));
                    succ_ptr.as_mut().left = Some(left_ptr);
                    left_ptr.as_mut().parent = Some(succ_ptr);
                }
            }
        }
    }

    /// Replaces the subtree rooted at `node_ptr` with `replacement` in its
    /// parent's slot (or at the root) and updates the replacement's parent
    /// back-reference.
    fn transplant(&mut self, node_ptr: NodePtr<T>, replacement: Link<T>) {
        unsafe {
            let parent = node_ptr.as_ref().parent;
            match parent {
                None => self.root = replacement,
                Some(mut parent_ptr) => {
                    if parent_ptr.as_ref().left == Some(node_ptr) {
                        parent_ptr.as_mut().left = replacement;
                    } else {
                        parent_ptr.as_mut().right = replacement;
                    }
                }
            }
            if let Some(mut replacement_ptr) = replacement {
                replacement_ptr.as_mut().parent = parent;
            }
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn preorder_nodes<F: FnMut(NodePtr<T>)>(&self, f: F) {
        self.traverse_nodes(f, |_| {}, |_| {});
    }

    fn postorder_nodes<F: FnMut(NodePtr<T>)>(&self, f: F) {
        self.traverse_nodes(|_| {}, |_| {}, f);
    }

    // Iterative walk over the raw node pointers using the parent links.
    // Destruction must not recurse: the tree is unbalanced and a key-ordered
    // insertion sequence makes the depth equal to the number of keys.
    fn traverse_nodes<Pre, In, Post>(&self, mut preorder: Pre, mut inorder: In, mut postorder: Post)
    where
        Pre: FnMut(NodePtr<T>),
        In: FnMut(NodePtr<T>),
        Post: FnMut(NodePtr<T>),
    {
        if let Some(mut node_ptr) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(node_ptr);
                        if let Some(left_ptr) = unsafe { node_ptr.as_ref().left } {
                            node_ptr = left_ptr;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        inorder(node_ptr);
                        if let Some(right_ptr) = unsafe { node_ptr.as_ref().right } {
                            node_ptr = right_ptr;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        // Post order traversal is used for node destruction,
                        // so make sure not to use node pointer after postorder call.
                        if let Some(parent_ptr) = unsafe { node_ptr.as_ref().parent } {
                            if Some(node_ptr) == unsafe { parent_ptr.as_ref().left } {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            postorder(node_ptr);
                            node_ptr = parent_ptr;
                        } else {
                            postorder(node_ptr);
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl<T: Ord> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> OrderedTree<T> for BinarySearchTree<T> {
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

impl<T: Ord + fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node_ptr = self.next?;
        self.next = successor(node_ptr);
        Some(&unsafe { &*node_ptr.as_ptr() }.key)
    }
}

/// Next node in key order: leftmost node of the right subtree if there is
/// one, otherwise the first ancestor reached from a left child.
fn successor<T>(node_ptr: NodePtr<T>) -> Link<T> {
    unsafe {
        if let Some(mut current) = node_ptr.as_ref().right {
            while let Some(left_ptr) = current.as_ref().left {
                current = left_ptr;
            }
            return Some(current);
        }
        let mut child = node_ptr;
        let mut current = node_ptr.as_ref().parent;
        while let Some(parent_ptr) = current {
            if parent_ptr.as_ref().left == Some(child) {
                break;
            }
            child = parent_ptr;
            current = parent_ptr.as_ref().parent;
        }
        current
    }
}

impl<T> TraverseNode for Node<T> {
    type Key = T;

    fn key(&self) -> &T {
        &self.key
    }

    fn left_child(&self) -> Option<&Self> {
        self.left.map(|node_ptr| unsafe { &*node_ptr.as_ptr() })
    }

    fn right_child(&self) -> Option<&Self> {
        self.right.map(|node_ptr| unsafe { &*node_ptr.as_ptr() })
    }
}

impl<T> Node<T> {
    fn create(parent: Link<T>, key: T) -> NodePtr<T> {
        let boxed = Box::new(Node {
            key,
            parent,
            left: None,
            right: None,
        });
        unsafe { NodePtr::new_unchecked(Box::into_raw(boxed)) }
    }

    unsafe fn destroy(node_ptr: NodePtr<T>) {
        drop(Box::from_raw(node_ptr.as_ptr()));
    }
}
