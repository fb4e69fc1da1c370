//! Arena-backed doubly-linked symbol sequence.
//!
//! Rewriting splices a variable-length replacement over a single symbol in the middle of
//! the sequence. Nodes live in a flat arena and refer to their neighbours by index, so a
//! splice only touches the replaced node and its two neighbours.

use std::fmt;

/// Sentinel for "no neighbour".
const NIL: usize = usize::MAX;

/// Stable handle to a node of a [`SymbolSequence`].
///
/// Handles stay valid across [`SymbolSequence::replace`] but are invalidated by
/// [`SymbolSequence::compact`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Copy, Debug)]
struct Node {
    symbol: char,
    prev: usize,
    next: usize,
    live: bool,
}

/// An ordered sequence of single-character symbols.
///
/// The empty sequence is a valid value: `head()` and `tail()` both return `None`.
#[derive(Clone, Debug)]
pub struct SymbolSequence {
    nodes: Vec<Node>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for SymbolSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Builds a sequence with one node per character of `text`, in order.
    pub fn parse(text: &str) -> Self {
        text.chars().collect()
    }

    /// Number of live symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of detached nodes still occupying the arena.
    pub fn detached(&self) -> usize {
        self.nodes.len() - self.len
    }

    pub fn head(&self) -> Option<NodeId> {
        link(self.head)
    }

    pub fn tail(&self) -> Option<NodeId> {
        link(self.tail)
    }

    /// Returns the symbol stored at `id`, or `None` if the handle is stale.
    pub fn symbol(&self, id: NodeId) -> Option<char> {
        self.live_node(id).map(|n| n.symbol)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.live_node(id).and_then(|n| link(n.next))
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.live_node(id).and_then(|n| link(n.prev))
    }

    /// Appends `symbol` at the end and returns its handle.
    pub fn push(&mut self, symbol: char) -> NodeId {
        let idx = self.alloc(symbol, self.tail, NIL);
        match self.tail {
            NIL => self.head = idx,
            t => self.nodes[t].next = idx,
        }
        self.tail = idx;
        NodeId(idx)
    }

    /// Replaces the node at `id` with one node per character of `replacement`.
    ///
    /// The new nodes take the place of the old one between its predecessor and
    /// successor; an empty `replacement` simply unlinks the node. Returns the handle of
    /// the node that followed the replaced one, which is where a left-to-right walk
    /// resumes without revisiting the inserted symbols. Stale handles are ignored.
    pub fn replace(&mut self, id: NodeId, replacement: &str) -> Option<NodeId> {
        let node = *self.live_node(id)?;
        let (prev, next) = (node.prev, node.next);

        let mut first = NIL;
        let mut last = NIL;
        for symbol in replacement.chars() {
            let idx = self.alloc(symbol, last, NIL);
            match last {
                NIL => first = idx,
                l => self.nodes[l].next = idx,
            }
            last = idx;
        }

        let (entry, exit) = if first == NIL {
            (next, prev)
        } else {
            self.nodes[first].prev = prev;
            self.nodes[last].next = next;
            (first, last)
        };
        match prev {
            NIL => self.head = entry,
            p => self.nodes[p].next = entry,
        }
        match next {
            NIL => self.tail = exit,
            n => self.nodes[n].prev = exit,
        }

        let old = &mut self.nodes[id.0];
        old.live = false;
        old.prev = NIL;
        old.next = NIL;
        self.len -= 1;

        link(next)
    }

    /// Rebuilds the arena in sequence order, dropping detached nodes.
    pub fn compact(&mut self) {
        let mut fresh = Self {
            nodes: Vec::with_capacity(self.len),
            ..Self::new()
        };
        fresh.extend(self.iter());
        *self = fresh;
    }

    /// Iterates over the symbols from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            sequence: self,
            cursor: self.head,
        }
    }

    fn alloc(&mut self, symbol: char, prev: usize, next: usize) -> usize {
        self.nodes.push(Node {
            symbol,
            prev,
            next,
            live: true,
        });
        self.len += 1;
        self.nodes.len() - 1
    }

    fn live_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).filter(|n| n.live)
    }
}

fn link(idx: usize) -> Option<NodeId> {
    (idx != NIL).then_some(NodeId(idx))
}

/// Iterator over the symbols of a [`SymbolSequence`].
pub struct Iter<'a> {
    sequence: &'a SymbolSequence,
    cursor: usize,
}

impl Iterator for Iter<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let node = self.sequence.nodes.get(self.cursor)?;
        self.cursor = node.next;
        Some(node.symbol)
    }
}

impl<'a> IntoIterator for &'a SymbolSequence {
    type Item = char;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<char> for SymbolSequence {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for symbol in iter {
            self.push(symbol);
        }
    }
}

impl FromIterator<char> for SymbolSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl fmt::Display for SymbolSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
