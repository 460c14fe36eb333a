//! # Prefix tree
//!
//! The dictionary is stored as a prefix tree of single-character edges. Nodes
//! live in an arena owned by the [`Trie`] and are addressed by [`NodeId`]. A
//! parent owns its children through its child map; each child keeps a
//! non-owning [`NodeId`] back to its parent, which is used only to spell out
//! the word that a node denotes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                   Nodes.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The address of a node within its [`Trie`].
#[derive(
	Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
	Serialize, Deserialize
)]
pub struct NodeId(usize);

/// One character position of some dictionary word(s).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct TrieNode
{
	/// The character on the edge leading into this node. `None` only for the
	/// root.
	value: Option<char>,

	/// The parent node. `None` only for the root.
	parent: Option<NodeId>,

	/// The children, keyed by character.
	children: BTreeMap<char, NodeId>,

	/// Whether the path from the root to this node spells a complete word.
	terminal: bool
}

impl TrieNode
{
	/// The character on the edge leading into this node, or `None` for the
	/// root.
	#[inline]
	#[must_use]
	pub fn value(&self) -> Option<char> { self.value }

	/// The parent of this node, or `None` for the root.
	#[inline]
	#[must_use]
	pub fn parent(&self) -> Option<NodeId> { self.parent }

	/// Check if the path from the root to this node spells a complete word.
	#[inline]
	#[must_use]
	pub fn is_terminal(&self) -> bool { self.terminal }

	/// Get the child reached by following the given character, if any.
	#[inline]
	#[must_use]
	pub fn child(&self, c: char) -> Option<NodeId>
	{
		self.children.get(&c).copied()
	}

	/// Iterate over the outgoing edges, in ascending order of character.
	#[inline]
	pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_
	{
		self.children.iter().map(|(&c, &id)| (c, id))
	}

	/// Check if this node has no children.
	#[inline]
	#[must_use]
	pub fn is_leaf(&self) -> bool { self.children.is_empty() }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tries.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A prefix tree of words. Built once, then only read. There is no deletion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Trie
{
	/// The node arena. The root is always at index 0.
	nodes: Vec<TrieNode>,

	/// The number of distinct words.
	words: usize
}

impl Default for Trie
{
	fn default() -> Self { Self::new() }
}

impl Trie
{
	/// Construct an empty trie, consisting only of the root.
	pub fn new() -> Self
	{
		Self { nodes: vec![TrieNode::default()], words: 0 }
	}

	/// The root node, which corresponds to the empty prefix.
	#[inline]
	#[must_use]
	pub const fn root(&self) -> NodeId { NodeId(0) }

	/// Get the node with the given address.
	///
	/// # Panics
	///
	/// If `id` was not issued by this trie.
	#[inline]
	pub fn node(&self, id: NodeId) -> &TrieNode { &self.nodes[id.0] }

	/// The number of distinct words in the trie.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.words }

	/// Check if the trie holds no words.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.words == 0 }

	/// The number of nodes in the trie, including the root.
	#[inline]
	#[must_use]
	pub fn node_count(&self) -> usize { self.nodes.len() }

	/// Insert a word, creating any missing nodes along its path. Inserting a
	/// word that is already present changes nothing.
	///
	/// # Arguments
	///
	/// * `word` - The word to insert.
	///
	/// # Returns
	///
	/// `true` if the word was not previously present, `false` otherwise.
	pub fn insert(&mut self, word: &str) -> bool
	{
		let mut id = self.root();
		for c in word.chars()
		{
			id = match self.nodes[id.0].child(c)
			{
				Some(child) => child,
				None =>
				{
					let child = NodeId(self.nodes.len());
					self.nodes.push(TrieNode {
						value: Some(c),
						parent: Some(id),
						..Default::default()
					});
					self.nodes[id.0].children.insert(c, child);
					child
				}
			};
		}
		let node = &mut self.nodes[id.0];
		let added = !node.terminal;
		node.terminal = true;
		if added
		{
			self.words += 1;
		}
		added
	}

	/// Follow the given prefix from the root.
	///
	/// # Returns
	///
	/// The node reached, or `None` if no word begins with `prefix`.
	#[must_use]
	pub fn find(&self, prefix: &str) -> Option<NodeId>
	{
		prefix.chars().try_fold(self.root(), |id, c| self.node(id).child(c))
	}

	/// Check if the trie contains the given word.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool
	{
		self.find(word).is_some_and(|id| self.node(id).is_terminal())
	}

	/// Check if the trie contains a word with the given prefix.
	#[inline]
	#[must_use]
	pub fn contains_prefix(&self, prefix: &str) -> bool
	{
		self.find(prefix).is_some()
	}

	/// Spell out the path from the root to the given node by walking parent
	/// links.
	///
	/// # Arguments
	///
	/// * `id` - The node.
	///
	/// # Returns
	///
	/// The prefix denoted by `id`; a complete word if the node is terminal.
	#[must_use]
	pub fn word(&self, id: NodeId) -> String
	{
		let mut reversed = Vec::new();
		let mut current = Some(id);
		while let Some(id) = current
		{
			let node = self.node(id);
			reversed.extend(node.value);
			current = node.parent;
		}
		reversed.into_iter().rev().collect()
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::trie::Trie;

	/// Test basic functionality of [`Trie`]:
	///
	/// * [`Trie::new`]
	/// * [`Trie::insert`]
	/// * [`Trie::contains`]
	/// * [`Trie::contains_prefix`]
	#[test]
	fn test_insert()
	{
		let mut trie = Trie::new();
		assert!(trie.is_empty());
		assert!(!trie.contains("fare"));
		assert!(trie.insert("fares"));
		assert!(trie.insert("fare"));
		assert!(trie.insert("fears"));
		assert_eq!(trie.len(), 3);
		assert!(trie.contains("fare"));
		assert!(trie.contains("fares"));
		assert!(!trie.contains("far"));
		assert!(trie.contains_prefix("far"));
		assert!(trie.contains_prefix(""));
		assert!(!trie.contains_prefix("fx"));
	}

	/// Reinserting a word leaves the trie unchanged.
	#[test]
	fn test_insert_idempotent()
	{
		let mut once = Trie::new();
		once.insert("fares");
		let mut twice = once.clone();
		assert!(!twice.insert("fares"));
		assert_eq!(once, twice);
		assert_eq!(twice.len(), 1);
		assert_eq!(twice.node_count(), 6);
	}

	/// Ensure that walking parent links reproduces each inserted word, and
	/// that children are exposed in character order.
	#[test]
	fn test_word()
	{
		let mut trie = Trie::new();
		for word in ["scum", "scrum", "scrap"]
		{
			trie.insert(word);
		}
		for word in ["scum", "scrum", "scrap"]
		{
			let id = trie.find(word).unwrap();
			assert!(trie.node(id).is_terminal());
			assert!(trie.node(id).is_leaf());
			assert_eq!(trie.word(id), word);
		}
		assert_eq!(trie.word(trie.root()), "");
		assert_eq!(trie.node(trie.root()).value(), None);
		assert_eq!(trie.node(trie.root()).parent(), None);
		let sc = trie.find("sc").unwrap();
		assert_eq!(trie.node(sc).value(), Some('c'));
		let edges = trie.node(sc).children().map(|(c, _)| c).collect::<String>();
		assert_eq!(edges, "ru");
	}
}
