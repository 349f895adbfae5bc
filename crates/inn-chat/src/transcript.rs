//! The conversation as an ordered arena of nodes.
//!
//! Nodes live in a map keyed by [`NodeId`]; `order` holds display order.
//! Summaries are additionally indexed by [`SummaryKey`] so an upsert can find
//! and replace the existing node without scanning. Summaries are never
//! removed, so the index never dangles.

use std::collections::HashMap;

use inn_core::SummaryKey;
use serde::ser::{Serialize, Serializer};

use crate::summary::SummaryCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Message { author: Author, text: String },
    /// Transient "bot is typing" bubble for an in-flight request.
    Typing,
    /// Transient missing-field line; at most one exists.
    Progress { text: String },
    Summary(SummaryCard),
}

/// Where a new summary goes when no node exists for its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    After(NodeId),
    End,
}

/// Lines scrolled up from the bottom; zero follows the tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
}

impl Viewport {
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn is_following(self) -> bool {
        self.offset == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    nodes: HashMap<NodeId, Node>,
    order: Vec<NodeId>,
    summaries: HashMap<SummaryKey, NodeId>,
    next_id: u64,
    viewport: Viewport,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in display order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|node| (*id, node)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.order.iter().position(|candidate| *candidate == id)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Node> {
        self.order.last().and_then(|id| self.nodes.get(id))
    }

    /// Append a chat bubble and follow the tail.
    pub fn push_message(&mut self, author: Author, text: impl Into<String>) -> NodeId {
        let id = self.append(Node::Message {
            author,
            text: text.into(),
        });
        self.follow_tail();
        id
    }

    pub fn push_typing(&mut self) -> NodeId {
        let id = self.append(Node::Typing);
        self.follow_tail();
        id
    }

    /// Remove every typing bubble, returning how many were removed.
    pub fn remove_typing(&mut self) -> usize {
        self.remove_where(|node| matches!(node, Node::Typing))
    }

    /// Replace any progress line with a new one at the end.
    pub fn set_progress(&mut self, text: impl Into<String>) -> NodeId {
        self.clear_progress();
        let id = self.append(Node::Progress { text: text.into() });
        self.follow_tail();
        id
    }

    pub fn clear_progress(&mut self) -> usize {
        self.remove_where(|node| matches!(node, Node::Progress { .. }))
    }

    #[must_use]
    pub fn progress(&self) -> Option<&str> {
        self.iter().find_map(|(_, node)| match node {
            Node::Progress { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// First bubble written by `author`, in display order.
    #[must_use]
    pub fn first_message_by(&self, author: Author) -> Option<NodeId> {
        self.iter().find_map(|(id, node)| match node {
            Node::Message { author: a, .. } if *a == author => Some(id),
            _ => None,
        })
    }

    #[must_use]
    pub fn summary_node(&self, key: &SummaryKey) -> Option<NodeId> {
        self.summaries.get(key).copied()
    }

    #[must_use]
    pub fn summary(&self, key: &SummaryKey) -> Option<&SummaryCard> {
        match self.summary_node(key).and_then(|id| self.nodes.get(&id)) {
            Some(Node::Summary(card)) => Some(card),
            _ => None,
        }
    }

    /// Number of summary nodes currently in the transcript.
    #[must_use]
    pub fn summary_count(&self) -> usize {
        self.summaries.len()
    }

    /// Swap the content of the summary node for `card.key` in place.
    ///
    /// Returns `false` if no node exists for that key.
    pub fn replace_summary(&mut self, card: SummaryCard) -> bool {
        let Some(id) = self.summary_node(&card.key) else {
            return false;
        };
        self.nodes.insert(id, Node::Summary(card));
        true
    }

    /// Insert a summary for a key that has no node yet.
    ///
    /// An `After` anchor that is no longer present falls back to the end.
    pub fn insert_summary(&mut self, card: SummaryCard, at: InsertAt) -> NodeId {
        let key = card.key.clone();
        let id = self.allocate();
        self.nodes.insert(id, Node::Summary(card));
        let index = match at {
            InsertAt::After(anchor) => self.position(anchor).map_or(self.order.len(), |p| p + 1),
            InsertAt::End => self.order.len(),
        };
        self.order.insert(index, id);
        self.summaries.insert(key, id);
        id
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn follow_tail(&mut self) {
        self.viewport.offset = 0;
    }

    pub const fn scroll_up(&mut self, lines: usize) {
        self.viewport.offset = self.viewport.offset.saturating_add(lines);
    }

    pub const fn scroll_down(&mut self, lines: usize) {
        self.viewport.offset = self.viewport.offset.saturating_sub(lines);
    }

    fn allocate(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    fn append(&mut self, node: Node) -> NodeId {
        let id = self.allocate();
        self.nodes.insert(id, node);
        self.order.push(id);
        id
    }

    fn remove_where(&mut self, predicate: impl Fn(&Node) -> bool) -> usize {
        let doomed = self
            .order
            .iter()
            .copied()
            .filter(|id| self.nodes.get(id).is_some_and(&predicate))
            .collect::<Vec<_>>();
        for id in &doomed {
            self.nodes.remove(id);
        }
        self.order.retain(|id| !doomed.contains(id));
        doomed.len()
    }
}

impl Serialize for Transcript {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|(_, node)| node))
    }
}
