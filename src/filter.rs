//! # Puzzle word filter
//!
//! Enumerate the dictionary words that can be spelled on a puzzle, by walking
//! the [`Trie`] under the rule that consecutive letters come from different
//! sides. Only branches that stay on the puzzle are ever visited, so the cost
//! is bounded by the playable prefixes rather than by the dictionary size.

use log::trace;

use crate::{
	puzzle::Puzzle,
	trie::{NodeId, Trie}
};

/// Find every word in the trie that is playable on the given puzzle.
///
/// Sides are tried in puzzle order and letters in side order; a word is
/// recorded before any longer word that extends it. Each spelling has exactly
/// one path through the trie, so no word is reported twice.
///
/// # Arguments
///
/// * `trie` - The dictionary.
/// * `puzzle` - The puzzle.
///
/// # Returns
///
/// The playable words, in discovery order.
#[must_use]
pub fn playable_words(trie: &Trie, puzzle: &Puzzle) -> Vec<String>
{
	let root = trie.node(trie.root());
	let mut terminals = Vec::new();
	for (index, side) in puzzle.sides().iter().enumerate()
	{
		for letter in side.letters().chars()
		{
			if let Some(child) = root.child(letter)
			{
				collect_terminals(trie, puzzle, child, index, &mut terminals);
			}
		}
	}
	// Only spell out the nodes that are actually words.
	let words = terminals.into_iter()
		.map(|id| trie.word(id))
		.collect::<Vec<_>>();
	trace!("playable words on {}: {}", puzzle, words.len());
	words
}

/// Depth-first walk from `id`, whose letter lies on side `last_side`.
fn collect_terminals(
	trie: &Trie,
	puzzle: &Puzzle,
	id: NodeId,
	last_side: usize,
	terminals: &mut Vec<NodeId>
)
{
	let node = trie.node(id);
	if node.is_terminal()
	{
		terminals.push(id);
	}
	if node.is_leaf()
	{
		return
	}
	for (index, side) in puzzle.sides().iter().enumerate()
	{
		if index == last_side
		{
			continue
		}
		for letter in side.letters().chars()
		{
			if let Some(child) = node.child(letter)
			{
				collect_terminals(trie, puzzle, child, index, terminals);
			}
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
