//! Tree node for the binomial heap.
//!
//! A binomial tree of degree *k* has a root with exactly *k* children whose
//! degrees, read along the first child's sibling chain, are *k−1, k−2, …, 0*.
//! The subtree therefore holds exactly 2ᵏ nodes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Strong reference to a node.
pub(crate) type NodeRef<K> = Rc<RefCell<Node<K>>>;

/// Optional strong reference; `None` terminates a list.
pub(crate) type NodePtr<K> = Option<NodeRef<K>>;

/// Weak reference, used only for parent back-edges.
pub(crate) type WeakNodeRef<K> = Weak<RefCell<Node<K>>>;

/// A single node in a binomial tree.
///
/// Strong references flow from the roots downward (`child`, `sibling`); the
/// `parent` back-edge is weak to avoid reference cycles. Reassigning a child
/// or sibling can therefore never leave a dangling owner elsewhere.
pub(crate) struct Node<K> {
    /// The ordering key.
    pub key: K,
    /// Number of children. A tree rooted at a degree-k node has 2ᵏ nodes.
    pub degree: usize,
    /// Parent node, `None` for roots. Read only by upward key bubbling.
    pub parent: Option<WeakNodeRef<K>>,
    /// First child in this node's child list.
    pub child: NodePtr<K>,
    /// Next node in the current list (root list or a child list).
    pub sibling: NodePtr<K>,
}

impl<K> Node<K> {
    /// Creates a fresh degree-0 root holding `key`.
    pub fn new(key: K) -> NodeRef<K> {
        Rc::new(RefCell::new(Node {
            key,
            degree: 0,
            parent: None,
            child: None,
            sibling: None,
        }))
    }
}
