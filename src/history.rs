//! Record of every state reached by committed moves
//!
//! The tree is rooted at a puzzle's initial state. Each committed move adds a
//! node (or revisits an existing sibling with an equal state), so a session's
//! whole exploration can be undone and reviewed. Nodes are never deleted;
//! the tree only grows.

use crate::puzzle::Puzzle;

/// Identifies a node within its [`HistoryTree`]
pub type NodeId = usize;

struct Node {
    state: Puzzle,
    /// The move that produced this state; `None` only for the root
    move_text: Option<String>,
    /// Non-owning back-reference, making undo a constant-time lookup
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree of visited puzzle states
pub struct HistoryTree {
    nodes: Vec<Node>,
}

impl HistoryTree {
    /// Creates a tree holding only the given initial state
    pub fn new(root: Puzzle) -> Self {
        Self {
            nodes: vec![Node {
                state: root,
                move_text: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The id of the root node
    pub fn root(&self) -> NodeId {
        0
    }

    /// The state recorded at a node
    pub fn state(&self, node: NodeId) -> &Puzzle {
        &self.nodes[node].state
    }

    /// The move that produced a node's state; `None` for the root
    pub fn move_text(&self, node: NodeId) -> Option<&str> {
        self.nodes[node].move_text.as_deref()
    }

    /// Record a committed move below `node`.
    ///
    /// If `node` already has a child holding an equal state, that child is
    /// returned and nothing is added; otherwise a new child is attached.
    /// Dedup is local to a node - the same state elsewhere in the tree still
    /// gets a fresh node here.
    pub fn add_or_reuse_child(
        &mut self,
        node: NodeId,
        move_text: &str,
        state: Puzzle,
    ) -> NodeId {
        if let Some(existing) = self.find_child(node, &state) {
            return existing;
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            state,
            move_text: Some(move_text.to_string()),
            parent: Some(node),
            children: Vec::new(),
        });
        self.nodes[node].children.push(id);
        id
    }

    /// Find the child of `node` holding a state equal to `state`
    pub fn find_child(&self, node: NodeId, state: &Puzzle) -> Option<NodeId> {
        let display = state.to_string();
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].state.to_string() == display)
    }

    /// The parent of a node and its state, or `None` for the root
    pub fn parent(&self, node: NodeId) -> Option<(NodeId, &Puzzle)> {
        let parent = self.nodes[node].parent?;
        Some((parent, &self.nodes[parent].state))
    }

    /// The states reached from `node` so far and the moves that reached them,
    /// as parallel sequences in insertion order
    pub fn attempts(&self, node: NodeId) -> (Vec<&Puzzle>, Vec<&str>) {
        self.nodes[node]
            .children
            .iter()
            .map(|&child| {
                let child = &self.nodes[child];
                let move_text = child
                    .move_text
                    .as_deref()
                    .expect("non-root node without move text");
                (&child.state, move_text)
            })
            .unzip()
    }

    /// Total number of recorded states, the root included (never zero)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
