//! AVL tree module for ordered, duplicate-free key storage.
//!
//! This module provides:
//! - [AvlTree]: a self-balancing binary search tree, rebalanced by rotations
//!   after every insertion and deletion.
//! - [TreeNode]: read-only view on a node (key, height, children).
//! - [InOrderIter]: lazy in-order (ascending) traversal.
//!
//! Each node owns its children outright (`Option<Box<TreeNode>>`), so
//! dropping the root releases the whole node graph. Recursion depth of all
//! algorithms is bounded by the tree height, which the balance invariant
//! keeps logarithmic.

use crate::model::container::Container;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Owned link to a subtree, `None` for an absent child.
type Link<K> = Option<Box<TreeNode<K>>>;

// =#========================================================================#=
// TREE NODE
// =#========================================================================#=
/// A node of an [AvlTree].
///
/// # Invariants
/// - `height` is `1 + max(height(left), height(right))`, absent child counts as 0
/// - `|height(left) - height(right)| <= 1`
/// - all keys in `left` are smaller, all keys in `right` larger than `key`
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<K> {
    key: K,
    height: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> TreeNode<K> {
    fn leaf(key: K) -> Box<Self> {
        Box::new(TreeNode {
            key,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the height of the subtree rooted at this node (a leaf has height 1).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&TreeNode<K>> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&TreeNode<K>> {
        self.right.as_deref()
    }

    /// Returns `height(left) - height(right)`.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }
}

fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

// ============================================================================
// Rotations & Rebalancing (private)
// ============================================================================
/// Rotates the subtree right around `node`, returning the new local root.
///
/// The left child becomes the root; its right subtree is re-parented as the
/// left subtree of `node`. Without a left child, `node` is returned unchanged.
fn rotate_right<K>(mut node: Box<TreeNode<K>>) -> Box<TreeNode<K>> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            node.update_height();
            pivot.right = Some(node);
            pivot.update_height();
            pivot
        }
        None => node,
    }
}

/// Rotates the subtree left around `node`, returning the new local root.
///
/// Mirror image of [rotate_right].
fn rotate_left<K>(mut node: Box<TreeNode<K>>) -> Box<TreeNode<K>> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            node.update_height();
            pivot.left = Some(node);
            pivot.update_height();
            pivot
        }
        None => node,
    }
}

/// Recomputes the height of `node` and restores the balance invariant with
/// at most two rotations, returning the new local root.
fn rebalance<K>(mut node: Box<TreeNode<K>>) -> Box<TreeNode<K>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // Left-heavy; left-right case first turns the left child
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        // Right-heavy; right-left case first turns the right child
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Rebalances the subtree behind `link` in place.
fn rebalance_link<K>(link: &mut Link<K>) {
    if let Some(node) = link.take() {
        *link = Some(rebalance(node));
    }
}

// ============================================================================
// Structural Changes (private)
// ============================================================================
/// Inserts `key` below `link`, returning whether the key was new.
///
/// Ancestors are only rebalanced when a node was actually added, so a
/// duplicate insert leaves every height untouched.
fn insert_at<K: Ord>(link: &mut Link<K>, key: K) -> bool {
    let Some(node) = link else {
        *link = Some(TreeNode::leaf(key));
        return true;
    };

    let inserted = match key.cmp(&node.key) {
        Ordering::Less => insert_at(&mut node.left, key),
        Ordering::Greater => insert_at(&mut node.right, key),
        Ordering::Equal => false,
    };

    if inserted {
        rebalance_link(link);
    }
    inserted
}

/// Removes `key` below `link`, returning whether it was found.
///
/// On a miss nothing below `link` is touched.
fn delete_at<K, Q>(link: &mut Link<K>, key: &Q) -> bool
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    let Some(node) = link else {
        return false;
    };

    let deleted = match key.cmp(node.key.borrow()) {
        Ordering::Less => delete_at(&mut node.left, key),
        Ordering::Greater => delete_at(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                // Two children: take over the in-order successor's key
                if let Some(successor) = pop_min(&mut node.right) {
                    node.key = successor;
                }
            } else {
                // At most one child: splice the node out
                let child = node.left.take().or_else(|| node.right.take());
                *link = child;
            }
            true
        }
    };

    if deleted {
        rebalance_link(link);
    }
    deleted
}

/// Detaches the leftmost node below `link` and returns its key,
/// rebalancing every node on the way back up.
fn pop_min<K>(link: &mut Link<K>) -> Option<K> {
    let node = link.as_mut()?;

    if node.left.is_some() {
        let key = pop_min(&mut node.left);
        rebalance_link(link);
        return key;
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.key)
}

// =#========================================================================#=
// AVL TREE
// =#========================================================================#=
/// An ordered, duplicate-free, self-balancing binary search tree.
///
/// After every structural change all ancestors of the changed position are
/// rebalanced bottom-up, so the height stays in `O(log n)`.
///
/// # Example
/// ```
/// use dsbox::model::AvlTree;
///
/// let mut tree: AvlTree<String> = AvlTree::new();
/// for key in ["kea", "kaka", "kakapo"] {
///     tree.insert(key.to_string());
/// }
///
/// assert!(tree.contains("kaka"));
/// assert!(tree.delete("kea"));
/// assert!(!tree.delete("kea"));
///
/// let keys: Vec<_> = tree.iter().collect();
/// assert_eq!(keys, ["kaka", "kakapo"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        AvlTree { root: None, len: 0 }
    }
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<K> AvlTree<K> {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree; 0 when empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Returns the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&TreeNode<K>> {
        self.root.as_deref()
    }

    /// Removes all keys, releasing the whole node graph.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns a lazy iterator over the keys in ascending order.
    ///
    /// The iterator borrows the tree; calling `iter()` again restarts the
    /// traversal from the smallest key.
    pub fn iter(&self) -> InOrderIter<'_, K> {
        InOrderIter::new(self)
    }
}

impl<K: Ord> AvlTree<K> {
    /// Inserts a key into the tree.
    ///
    /// # Returns
    /// `true` if the key was added, `false` if it was already present
    /// (in which case the tree is left unchanged).
    pub fn insert(&mut self, key: K) -> bool {
        let inserted = insert_at(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes a key from the tree.
    ///
    /// # Returns
    /// `true` if the key was found and removed, `false` otherwise
    /// (in which case no node is modified).
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let deleted = delete_at(&mut self.root, key);
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Returns `true` if the tree contains the key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Validates the tree structure.
    ///
    /// Checks:
    /// - Each stored height matches the heights of its children
    /// - Each node satisfies the balance invariant
    /// - In-order keys are strictly ascending
    /// - The tracked length matches the number of nodes
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        // Returns height of the checked subtree, or None on violation
        fn check<K>(link: &Link<K>) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            let expected = 1 + left.max(right);
            if node.height != expected || left.abs_diff(right) > 1 {
                return None;
            }
            Some(expected)
        }

        if check(&self.root).is_none() {
            return false;
        }

        let mut count = 0;
        let mut previous: Option<&K> = None;
        for key in self.iter() {
            if previous.is_some_and(|prev| prev >= key) {
                return false;
            }
            previous = Some(key);
            count += 1;
        }

        count == self.len
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = InOrderIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Container for AvlTree<String> {
    fn len(&self) -> usize {
        self.len
    }

    fn is_member(&self, value: &str) -> bool {
        self.contains(value)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }

    fn restore(&mut self, value: String) {
        self.insert(value);
    }

    fn clear(&mut self) {
        AvlTree::clear(self);
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl<K: fmt::Display> AvlTree<K> {
    /// Returns a visual, indented representation of the tree.
    ///
    /// # Example Output
    /// ```text
    /// AVL tree with 3 keys (height 2):
    /// 2 (h=2)
    ///   ├─ 1 (h=1)
    ///   └─ 3 (h=1)
    /// ```
    pub fn to_pretty_string(&self) -> String {
        fn render<K: fmt::Display>(out: &mut String, node: &TreeNode<K>, prefix: &str, is_last: bool) {
            let connector = if prefix.is_empty() { "" } else if is_last { "└─ " } else { "├─ " };
            out.push_str(&format!("{}{}{} (h={})\n", prefix, connector, node.key, node.height));

            let children: Vec<&TreeNode<K>> = node.left().into_iter().chain(node.right()).collect();
            let new_prefix = if prefix.is_empty() {
                "  ".to_string()
            } else {
                format!("{}{}  ", prefix, if is_last { " " } else { "│" })
            };
            for (i, child) in children.iter().enumerate() {
                render(out, child, &new_prefix, i + 1 == children.len());
            }
        }

        let mut out = format!("AVL tree with {} keys (height {}):\n", self.len, self.height());
        match self.root() {
            Some(root) => render(&mut out, root, "", true),
            None => out.push_str("(empty)\n"),
        }
        out
    }
}

// =#========================================================================#=
// ITERATOR
// =#========================================================================#=
/// Iterator for in-order traversal (ascending keys).
///
/// Uses an explicit stack of pending ancestors instead of recursion;
/// the stack never holds more than `height` nodes.
pub struct InOrderIter<'a, K> {
    stack: Vec<&'a TreeNode<K>>,
}

impl<'a, K> InOrderIter<'a, K> {
    fn new(tree: &'a AvlTree<K>) -> Self {
        let mut iter = InOrderIter {
            stack: Vec::with_capacity(tree.height()),
        };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<K>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrderIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations_keep_in_order_sequence() {
        let mut root = TreeNode::leaf(2);
        root.left = Some(TreeNode::leaf(1));
        root.right = Some(TreeNode::leaf(3));
        root.update_height();

        let rotated = rotate_right(root);
        assert_eq!(*rotated.key(), 1);
        assert_eq!(rotated.height(), 3);

        let back = rotate_left(rotated);
        assert_eq!(*back.key(), 2);
        assert_eq!(back.height(), 2);
    }

    #[test]
    fn test_rotation_without_child_is_identity() {
        let leaf = TreeNode::leaf("solo");
        let same = rotate_right(leaf.clone());
        assert_eq!(same, leaf);
    }

    #[test]
    fn test_pop_min_returns_smallest() {
        let mut tree: AvlTree<u32> = (1..=10).collect();
        assert_eq!(pop_min(&mut tree.root), Some(1));
        tree.len -= 1;
        assert!(tree.is_valid());
    }
}
