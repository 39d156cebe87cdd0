//! Positional ordered multiway tree.
//!
//! The tree is backed by an arena: nodes live in a `Vec` and refer to each
//! other by index, so parent back-references do not create ownership cycles
//! and positions stay stable across structural edits. A [`Position`] is a
//! cheap copyable handle carrying the owning tree's id; handles from a
//! different tree instance are rejected instead of silently resolving.
//!
//! Removal detaches a subtree from its parent but keeps the nodes in the
//! arena. This is deliberate: the command layer undoes a removal by moving
//! the same position back under its old parent. A detached position is
//! still dereferenceable, it is just unreachable from the root, and
//! traversals never yield it.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

fn fresh_tree_id() -> u64 {
    NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Opaque handle to one node of a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    tree: u64,
    // creation order of the node; used by facade queries to break
    // timestamp ties deterministically
    pub(crate) index: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("invalid position")]
    InvalidPosition,
    #[error("order {order} out of bounds for a node with {degree} children")]
    BoundaryViolation { order: usize, degree: usize },
    #[error("tree is empty")]
    EmptyTree,
    #[error("tree already has a root")]
    RootExists,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Node<E> {
    element: E,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// An ordered multiway tree with positional access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree<E> {
    // Process-local identity, never serialized: a deserialized tree mints
    // a fresh id so handles cannot cross between copies of one blob.
    #[serde(skip, default = "fresh_tree_id")]
    id: u64,
    nodes: Vec<Node<E>>,
    root: Option<usize>,
}

impl<E> Default for Tree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Tree<E> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Tree {
            id: fresh_tree_id(),
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Create a tree with a single root element.
    pub fn with_root(element: E) -> Self {
        let mut tree = Self::new();
        tree.nodes.push(Node {
            element,
            parent: None,
            children: Vec::new(),
        });
        tree.root = Some(0);
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root position, if the tree is non-empty.
    pub fn root(&self) -> Option<Position> {
        self.root.map(|index| self.position(index))
    }

    fn position(&self, index: usize) -> Position {
        Position {
            tree: self.id,
            index,
        }
    }

    /// Resolve a position to an arena index, rejecting foreign handles.
    fn check(&self, position: Position) -> Result<usize, TreeError> {
        if position.tree != self.id || position.index >= self.nodes.len() {
            return Err(TreeError::InvalidPosition);
        }
        Ok(position.index)
    }

    /// Borrow the element at a position.
    pub fn get(&self, position: Position) -> Result<&E, TreeError> {
        let index = self.check(position)?;
        Ok(&self.nodes[index].element)
    }

    /// Mutably borrow the element at a position.
    pub fn get_mut(&mut self, position: Position) -> Result<&mut E, TreeError> {
        let index = self.check(position)?;
        Ok(&mut self.nodes[index].element)
    }

    /// Replace the element at a position, returning the previous one.
    pub fn replace(&mut self, position: Position, element: E) -> Result<E, TreeError> {
        let index = self.check(position)?;
        Ok(std::mem::replace(&mut self.nodes[index].element, element))
    }

    /// Insert an element as the last child of `parent`.
    ///
    /// When the tree is empty, `parent` must be `None` and the new node
    /// becomes the root. When it is not, `parent` must be a valid position.
    pub fn insert(&mut self, parent: Option<Position>, element: E) -> Result<Position, TreeError> {
        match parent {
            None if self.is_empty() => {
                self.nodes.push(Node {
                    element,
                    parent: None,
                    children: Vec::new(),
                });
                let index = self.nodes.len() - 1;
                self.root = Some(index);
                Ok(self.position(index))
            }
            None => Err(TreeError::RootExists),
            Some(_) if self.is_empty() => Err(TreeError::InvalidPosition),
            Some(parent) => {
                let parent_index = self.check(parent)?;
                let index = self.push_child(parent_index, element);
                self.nodes[parent_index].children.push(index);
                Ok(self.position(index))
            }
        }
    }

    /// Insert an element at child slot `order` (0..=degree) of `parent`.
    pub fn insert_at(
        &mut self,
        parent: Option<Position>,
        element: E,
        order: usize,
    ) -> Result<Position, TreeError> {
        if self.is_empty() {
            if order != 0 {
                return Err(TreeError::BoundaryViolation { order, degree: 0 });
            }
            return self.insert(parent, element);
        }
        let parent = parent.ok_or(TreeError::RootExists)?;
        let parent_index = self.check(parent)?;
        let degree = self.nodes[parent_index].children.len();
        if order > degree {
            return Err(TreeError::BoundaryViolation { order, degree });
        }
        let index = self.push_child(parent_index, element);
        self.nodes[parent_index].children.insert(order, index);
        Ok(self.position(index))
    }

    fn push_child(&mut self, parent_index: usize, element: E) -> usize {
        self.nodes.push(Node {
            element,
            parent: Some(parent_index),
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Detach the subtree rooted at `position` and return its element.
    ///
    /// Removing the root empties the tree. The detached nodes stay in the
    /// arena and keep their shape, so the position can later be re-attached
    /// with [`move_to`](Self::move_to).
    pub fn remove(&mut self, position: Position) -> Result<E, TreeError>
    where
        E: Clone,
    {
        let index = self.check(position)?;
        let element = self.nodes[index].element.clone();
        if self.root == Some(index) {
            self.root = None;
            return Ok(element);
        }
        self.detach(index);
        Ok(element)
    }

    /// Remove `index` from its parent's child list, if it is attached.
    fn detach(&mut self, index: usize) {
        if let Some(parent_index) = self.nodes[index].parent {
            self.nodes[parent_index]
                .children
                .retain(|&child| child != index);
        }
    }

    /// Re-parent the subtree at `position` under `new_parent`, appended as
    /// its last child.
    ///
    /// The root cannot be moved. Cycle prevention is the caller's
    /// responsibility; the tree only performs the structural edit.
    pub fn move_to(&mut self, position: Position, new_parent: Position) -> Result<(), TreeError> {
        let index = self.check(position)?;
        let parent_index = self.check(new_parent)?;
        if self.root == Some(index) {
            return Err(TreeError::InvalidPosition);
        }
        self.detach(index);
        self.nodes[parent_index].children.push(index);
        self.nodes[index].parent = Some(parent_index);
        Ok(())
    }

    /// The parent of a position, or `None` for the root.
    pub fn parent(&self, position: Position) -> Result<Option<Position>, TreeError> {
        let index = self.check(position)?;
        Ok(self.nodes[index].parent.map(|p| self.position(p)))
    }

    /// The ordered children of a position.
    pub fn children(&self, position: Position) -> Result<Vec<Position>, TreeError> {
        let index = self.check(position)?;
        Ok(self.nodes[index]
            .children
            .iter()
            .map(|&child| self.position(child))
            .collect())
    }

    /// Number of direct children.
    pub fn degree(&self, position: Position) -> Result<usize, TreeError> {
        let index = self.check(position)?;
        Ok(self.nodes[index].children.len())
    }

    pub fn is_root(&self, position: Position) -> Result<bool, TreeError> {
        let index = self.check(position)?;
        Ok(self.root == Some(index))
    }

    /// A node is internal when it has at least one child.
    pub fn is_internal(&self, position: Position) -> Result<bool, TreeError> {
        Ok(self.degree(position)? > 0)
    }

    pub fn is_external(&self, position: Position) -> Result<bool, TreeError> {
        Ok(self.degree(position)? == 0)
    }

    /// True iff following parent links from `descendant` reaches
    /// `ancestor`. A position is never its own ancestor, and the root has
    /// no ancestors.
    pub fn is_ancestor(
        &self,
        descendant: Position,
        ancestor: Position,
    ) -> Result<bool, TreeError> {
        let mut current = self.check(descendant)?;
        let ancestor = self.check(ancestor)?;
        while let Some(parent) = self.nodes[current].parent {
            if parent == ancestor {
                return Ok(true);
            }
            current = parent;
        }
        Ok(false)
    }

    /// Lazy post-order traversal of the positions reachable from the root.
    ///
    /// Children are yielded before their parent. One-shot: restart by
    /// calling again.
    pub fn positions(&self) -> Positions<'_, E> {
        Positions {
            tree: self,
            stack: self.root.map(|root| vec![(root, 0)]).unwrap_or_default(),
        }
    }

    /// Lazy post-order traversal of the elements reachable from the root.
    pub fn elements(&self) -> impl Iterator<Item = &E> {
        self.positions().map(move |position| {
            // positions() only yields indices it resolved itself
            &self.nodes[position.index].element
        })
    }

    /// Number of nodes reachable from the root.
    pub fn size(&self) -> usize {
        self.positions().count()
    }

    /// Max depth of any leaf: -1 for an empty tree, 0 for a singleton.
    pub fn height(&self) -> i64 {
        match self.root {
            None => -1,
            Some(root) => self.height_of(root),
        }
    }

    fn height_of(&self, index: usize) -> i64 {
        self.nodes[index]
            .children
            .iter()
            .map(|&child| 1 + self.height_of(child))
            .max()
            .unwrap_or(0)
    }
}

/// Iterator over a tree's positions in post-order. See
/// [`Tree::positions`].
pub struct Positions<'a, E> {
    tree: &'a Tree<E>,
    // (arena index, next child cursor)
    stack: Vec<(usize, usize)>,
}

impl<'a, E> Iterator for Positions<'a, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            let (index, cursor) = self.stack.last_mut()?;
            let node = &self.tree.nodes[*index];
            if *cursor < node.children.len() {
                let child = node.children[*cursor];
                *cursor += 1;
                self.stack.push((child, 0));
            } else {
                let index = *index;
                self.stack.pop();
                return Some(self.tree.position(index));
            }
        }
    }
}
