//! Binomial heap engine.
//!
//! A binomial heap is a singly linked list of binomial trees held in
//! strictly increasing degree order, at most one tree per degree. The shape
//! mirrors the binary representation of the element count: a heap of *n*
//! elements has one tree for every set bit of *n*, and linking two trees of
//! equal degree is the carry of binary addition.
//!
//! Every mutating operation reduces to two primitives plus one pass:
//!
//! - [`link_trees`]: join two equal-degree trees into one of the next degree
//! - [`merge_root_lists`]: merge-sort two degree-ordered root lists
//! - consolidation: fold duplicate degrees until each appears at most once
//!
//! Insert, extract-min and union all end by consolidating, which is what
//! keeps the root list at O(log n) trees and every operation logarithmic.
//! Decrease-key and delete instead move keys (never nodes) up a single tree,
//! so the tree shapes are untouched.

use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::error::HeapError;
use crate::node::{Node, NodePtr, NodeRef};

/// Bucket count for consolidation, indexed by tree degree.
///
/// A degree-d tree holds 2ᵈ nodes, so 32 buckets cover any heap whose
/// element count fits in 32 bits. Consolidation grows the array instead of
/// indexing out of bounds if a link ever carries past the last bucket.
const MAX_DEGREE: usize = 32;

/// Links two binomial trees of equal degree into one tree of degree d+1.
///
/// The root with the smaller key wins; the loser becomes the winner's new
/// first child, which keeps heap order and the child-degree sequence
/// d−1, …, 0. Runs in O(1) and allocates nothing.
///
/// When the keys are equal the first argument wins. That makes the result
/// deterministic for a given call sequence, but callers must not rely on
/// which root survives, only on heap order.
fn link_trees<K: Ord>(a: NodeRef<K>, b: NodeRef<K>) -> NodeRef<K> {
    debug_assert_eq!(a.borrow().degree, b.borrow().degree);

    let a_wins = a.borrow().key <= b.borrow().key;
    let (parent, child) = if a_wins { (a, b) } else { (b, a) };

    {
        let mut c = child.borrow_mut();
        let mut p = parent.borrow_mut();

        c.parent = Some(Rc::downgrade(&parent));
        c.sibling = p.child.take();
        p.child = Some(Rc::clone(&child));
        p.degree += 1;
    }

    parent
}

/// Builds a root list front to back.
///
/// Plays the role of the classic dummy-head sentinel: appends never have to
/// special-case an empty list. `finish` hands back the real head and can
/// attach an entire remaining list behind the tail in one step.
struct RootListBuilder<K> {
    head: NodePtr<K>,
    tail: NodePtr<K>,
}

impl<K> RootListBuilder<K> {
    fn new() -> Self {
        RootListBuilder {
            head: None,
            tail: None,
        }
    }

    /// Appends one detached tree; its `sibling` must already be cleared.
    fn push(&mut self, node: NodeRef<K>) {
        debug_assert!(node.borrow().sibling.is_none());
        match self.tail.take() {
            Some(tail) => tail.borrow_mut().sibling = Some(Rc::clone(&node)),
            None => self.head = Some(Rc::clone(&node)),
        }
        self.tail = Some(node);
    }

    /// Attaches `rest` after the current tail and returns the list head.
    fn finish(self, rest: NodePtr<K>) -> NodePtr<K> {
        match self.tail {
            Some(tail) => {
                tail.borrow_mut().sibling = rest;
                self.head
            }
            None => rest,
        }
    }
}

/// Merges two root lists, each sorted by strictly increasing degree, into
/// one degree-sorted list containing every input tree exactly once.
///
/// Standard two-cursor merge. When both heads share a degree the pair is
/// folded with [`link_trees`] and the single result appended, so the output
/// stays merge-sorted across the seam between the inputs. Duplicate degrees
/// that only become adjacent after this merge are left alone; eliminating
/// those takes the full consolidation pass.
///
/// Runs in O(log n₁ + log n₂): a root list has at most O(log n) trees.
fn merge_root_lists<K: Ord>(a: NodePtr<K>, b: NodePtr<K>) -> NodePtr<K> {
    let mut a = a;
    let mut b = b;
    let mut out = RootListBuilder::new();

    loop {
        match (a, b) {
            (Some(x), Some(y)) => {
                let dx = x.borrow().degree;
                let dy = y.borrow().degree;
                if dx < dy {
                    a = x.borrow_mut().sibling.take();
                    b = Some(y);
                    out.push(x);
                } else if dy < dx {
                    b = y.borrow_mut().sibling.take();
                    a = Some(x);
                    out.push(y);
                } else {
                    a = x.borrow_mut().sibling.take();
                    b = y.borrow_mut().sibling.take();
                    out.push(link_trees(x, y));
                }
            }
            (rest, None) | (None, rest) => return out.finish(rest),
        }
    }
}

/// Depth-first search for the first node holding `key`, visiting each node's
/// child list before its sibling.
///
/// O(n): the heap keeps no key index, so the key-addressed operations pay a
/// full traversal to locate their target.
fn find_node<K: Ord>(list: &NodePtr<K>, key: &K) -> NodePtr<K> {
    let node = list.as_ref()?;
    if node.borrow().key == *key {
        return Some(Rc::clone(node));
    }
    let child = node.borrow().child.clone();
    if let Some(found) = find_node(&child, key) {
        return Some(found);
    }
    let sibling = node.borrow().sibling.clone();
    find_node(&sibling, key)
}

/// Restores heap order above `node` by repeated parent-child key swaps.
///
/// Keys move, nodes do not: tree shapes and degrees are untouched, so no
/// relinking or consolidation is needed afterwards.
fn bubble_up<K: Ord>(node: NodeRef<K>) {
    let mut curr = node;
    loop {
        let parent = curr.borrow().parent.as_ref().and_then(|weak| weak.upgrade());
        let parent = match parent {
            Some(p) => p,
            None => break,
        };
        if curr.borrow().key >= parent.borrow().key {
            break;
        }
        {
            let mut c = curr.borrow_mut();
            let mut p = parent.borrow_mut();
            mem::swap(&mut c.key, &mut p.key);
        }
        curr = parent;
    }
}

/// Swaps `node`'s key upward until it sits at the root of its tree,
/// regardless of ordering, and returns that root.
///
/// This is the motion a decrease to "minus infinity" would cause, without
/// reserving a sentinel key. Each displaced parent key moves down into a
/// subtree it already bounded, so heap order holds everywhere except at the
/// raised key itself, which the caller is about to remove.
fn raise_to_root<K: Ord>(node: NodeRef<K>) -> NodeRef<K> {
    let mut curr = node;
    loop {
        let parent = curr.borrow().parent.as_ref().and_then(|weak| weak.upgrade());
        let parent = match parent {
            Some(p) => p,
            None => return curr,
        };
        {
            let mut c = curr.borrow_mut();
            let mut p = parent.borrow_mut();
            mem::swap(&mut c.key, &mut p.key);
        }
        curr = parent;
    }
}

/// Preorder walk over a list of trees: key, then child list, then sibling.
fn walk_preorder<K, F: FnMut(&K)>(list: &NodePtr<K>, visit: &mut F) {
    let mut curr = list.clone();
    while let Some(node) = curr {
        visit(&node.borrow().key);
        let child = node.borrow().child.clone();
        walk_preorder(&child, visit);
        curr = node.borrow().sibling.clone();
    }
}

/// A mergeable min-priority queue over totally ordered keys.
///
/// Supports insert, find-min, extract-min, union of two heaps, decrease-key
/// and delete, all in O(log n) once a node is in hand. Locating a node *by
/// key* (`decrease_key`, `delete`) is O(n), since the heap keeps no
/// auxiliary key index; see [`BinomialHeap::decrease_key`].
///
/// Duplicate keys are allowed. Key-addressed operations affect the first
/// match in preorder (child before sibling).
///
/// A heap exclusively owns its nodes. [`BinomialHeap::union`] consumes the
/// donor heap, transferring every node into the receiver.
///
/// # Example
///
/// ```rust
/// use binomial_heap::BinomialHeap;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(10);
/// heap.insert(5);
/// heap.insert(20);
///
/// heap.decrease_key(&20, 1).unwrap();
/// assert_eq!(heap.find_min(), Some(&1));
///
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.extract_min(), Some(5));
/// assert_eq!(heap.extract_min(), Some(10));
/// assert_eq!(heap.extract_min(), None);
/// ```
pub struct BinomialHeap<K: Ord> {
    /// First tree of the root list, in strictly increasing degree order.
    head: NodePtr<K>,
    /// Number of elements currently stored.
    len: usize,
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> BinomialHeap<K> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        BinomialHeap { head: None, len: 0 }
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts a key.
    ///
    /// Wraps the key in a fresh degree-0 tree and merges it into the root
    /// list. Merging a single B₀ into a canonical heap is binary increment:
    /// the seam fold in [`merge_root_lists`] handles the first collision and
    /// the closing consolidation pass propagates any remaining carry.
    ///
    /// O(log n).
    pub fn insert(&mut self, key: K) {
        let node = Node::new(key);
        let roots = self.head.take();
        self.head = merge_root_lists(roots, Some(node));
        self.consolidate();
        self.len += 1;
    }

    /// Returns a reference to the smallest key, or `None` if the heap is
    /// empty.
    ///
    /// Heap order puts the minimum at some root, so this is a linear scan of
    /// the root list: O(log n), and the heap is unchanged.
    pub fn find_min(&self) -> Option<&K> {
        let mut best: NodePtr<K> = None;
        let mut curr = self.head.clone();
        while let Some(node) = curr {
            let better = match &best {
                Some(b) => node.borrow().key < b.borrow().key,
                None => true,
            };
            if better {
                best = Some(Rc::clone(&node));
            }
            curr = node.borrow().sibling.clone();
        }
        let min = best?;

        // SAFETY: the node is owned by the root list, which keeps it alive
        // while `self` is borrowed; no `&mut self` method can run while the
        // returned borrow exists, and `RefCell` contents do not move. The
        // reference is therefore valid for the `&self` lifetime.
        let ptr = min.as_ptr();
        unsafe { Some(&(*ptr).key) }
    }

    /// Removes and returns the smallest key, or `None` if the heap is empty.
    ///
    /// Scans the root list for the minimum root, then removes that root via
    /// [`BinomialHeap::remove_root`].
    ///
    /// O(log n) amortized.
    pub fn extract_min(&mut self) -> Option<K> {
        let mut min = self.head.clone()?;
        let mut curr = min.borrow().sibling.clone();
        while let Some(node) = curr {
            if node.borrow().key < min.borrow().key {
                min = Rc::clone(&node);
            }
            curr = node.borrow().sibling.clone();
        }
        Some(self.remove_root(min))
    }

    /// Merges `other` into this heap, consuming it.
    ///
    /// Two individually consolidated heaps can still collide pairwise at
    /// every shared degree, so the merged list always gets a full
    /// consolidation pass. Taking the donor by value transfers ownership of
    /// every node; the donor cannot be used again.
    ///
    /// O(log n).
    pub fn union(&mut self, mut other: BinomialHeap<K>) {
        let mine = self.head.take();
        let theirs = other.head.take();
        self.head = merge_root_lists(mine, theirs);
        self.len += other.len;
        other.len = 0;
        self.consolidate();
    }

    /// Lowers the key of the first node found holding `old_key` to
    /// `new_key`, then bubbles it up until heap order holds again.
    ///
    /// The node is located by depth-first traversal, which is O(n); the
    /// bubble-up itself is O(log n) key swaps with no structural change.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyNotFound`] if no node holds `old_key`, and
    /// [`HeapError::KeyNotDecreased`] if `new_key` is greater than
    /// `old_key`. The heap is unchanged in either case.
    pub fn decrease_key(&mut self, old_key: &K, new_key: K) -> Result<(), HeapError> {
        let node = find_node(&self.head, old_key).ok_or(HeapError::KeyNotFound)?;
        if new_key > node.borrow().key {
            return Err(HeapError::KeyNotDecreased);
        }
        node.borrow_mut().key = new_key;
        bubble_up(node);
        Ok(())
    }

    /// Removes the first node found holding `key` and returns its key.
    ///
    /// The target's key is raised to the root of its tree with
    /// [`raise_to_root`], and that root is then spliced out exactly like the
    /// minimum in [`BinomialHeap::extract_min`].
    ///
    /// O(n) to locate the node, O(log n) to remove it.
    ///
    /// # Errors
    ///
    /// [`HeapError::KeyNotFound`] if no node holds `key`; the heap is
    /// unchanged.
    pub fn delete(&mut self, key: &K) -> Result<K, HeapError> {
        let node = find_node(&self.head, key).ok_or(HeapError::KeyNotFound)?;
        let root = raise_to_root(node);
        Ok(self.remove_root(root))
    }

    /// Visits every key in preorder, child list before sibling, tree by
    /// tree. Diagnostic traversal: the order exposes tree shape, it is not
    /// sorted.
    pub fn for_each_preorder<F: FnMut(&K)>(&self, mut visit: F) {
        walk_preorder(&self.head, &mut visit);
    }

    /// Collects the preorder traversal into a `Vec`.
    pub fn preorder_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        self.for_each_preorder(|key| keys.push(key.clone()));
        keys
    }

    /// Detaches `target`, a tree on the root list, and returns its key.
    ///
    /// Shared tail of `extract_min` and `delete`: splice the root out of the
    /// list, reverse its child list into a standalone root list (clearing
    /// the parent links), merge the two lists and consolidate.
    fn remove_root(&mut self, target: NodeRef<K>) -> K {
        // Find the predecessor so the list can be spliced around the target.
        let mut prev: NodePtr<K> = None;
        let mut curr = self.head.clone();
        while let Some(node) = curr {
            if Rc::ptr_eq(&node, &target) {
                break;
            }
            curr = node.borrow().sibling.clone();
            prev = Some(node);
        }

        let after = target.borrow_mut().sibling.take();
        match prev {
            Some(p) => p.borrow_mut().sibling = after,
            None => self.head = after,
        }

        // A degree-d root's children have degrees d−1, …, 0, so reversing
        // the child list yields a valid root list in increasing order.
        let mut reversed: NodePtr<K> = None;
        let mut child = target.borrow_mut().child.take();
        while let Some(node) = child {
            child = node.borrow_mut().sibling.take();
            {
                let mut n = node.borrow_mut();
                n.sibling = reversed.take();
                n.parent = None;
            }
            reversed = Some(node);
        }

        let roots = self.head.take();
        self.head = merge_root_lists(roots, reversed);
        self.consolidate();
        self.len -= 1;

        // The splice above released every other strong reference.
        let cell = Rc::try_unwrap(target)
            .ok()
            .expect("detached root still referenced");
        cell.into_inner().key
    }

    /// Rewrites the root list into canonical one-tree-per-degree form.
    ///
    /// Walks the list once with a bucket per degree: while a bucket is
    /// occupied the two trees are linked and the result retried one degree
    /// up, exactly like carry propagation in binary addition. The buckets
    /// are then drained in increasing degree order to rebuild the list.
    /// This is the only place duplicate degrees are eliminated.
    fn consolidate(&mut self) {
        if self.head.is_none() {
            return;
        }

        let mut buckets: Vec<NodePtr<K>> = vec![None; MAX_DEGREE];
        let mut curr = self.head.take();
        while let Some(node) = curr {
            curr = node.borrow_mut().sibling.take();

            let mut tree = node;
            let mut degree = tree.borrow().degree;
            loop {
                if degree == buckets.len() {
                    buckets.push(None);
                }
                match buckets[degree].take() {
                    Some(other) => {
                        tree = link_trees(other, tree);
                        degree += 1;
                    }
                    None => {
                        buckets[degree] = Some(tree);
                        break;
                    }
                }
            }
        }

        let mut out = RootListBuilder::new();
        for slot in buckets {
            if let Some(tree) = slot {
                out.push(tree);
            }
        }
        self.head = out.finish(None);
    }
}

impl<K: Ord + fmt::Debug> fmt::Debug for BinomialHeap<K> {
    /// Formats the heap as its preorder key sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each_preorder(|key| {
            list.entry(key);
        });
        list.finish()
    }
}
