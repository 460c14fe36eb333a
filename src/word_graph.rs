//! # Word graph
//!
//! Playable words indexed by first letter, last letter, and letter set. Words
//! that agree on all three are interchangeable for the purposes of the chain
//! search, so they share a single [`EdgeGroup`]: the search explores the
//! transition once, and the choice of word is deferred to the caller.

use std::collections::BTreeMap;

use log::trace;

use crate::letter_set::{LetterSet, ALPHABET_SIZE};

////////////////////////////////////////////////////////////////////////////////
//                                Edge groups.                                //
////////////////////////////////////////////////////////////////////////////////

/// A non-empty list of words that share a first letter, a last letter, and a
/// set of distinct letters. Words keep the order in which they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct EdgeGroup
{
	/// The first letter of every word.
	first: char,

	/// The last letter of every word.
	last: char,

	/// The distinct letters of every word.
	letters: LetterSet,

	/// The words, in insertion order.
	words: Vec<String>
}

impl EdgeGroup
{
	#[inline]
	#[must_use]
	pub fn first(&self) -> char { self.first }

	#[inline]
	#[must_use]
	pub fn last(&self) -> char { self.last }

	#[inline]
	pub fn letters(&self) -> LetterSet { self.letters }

	#[inline]
	#[must_use]
	pub fn words(&self) -> &[String] { &self.words }

	/// The number of interchangeable words.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.words.len() }

	/// Always `false`; a group is created with its first word.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

////////////////////////////////////////////////////////////////////////////////
//                                Word graphs.                                //
////////////////////////////////////////////////////////////////////////////////

/// Index of [edge groups](EdgeGroup). The top two levels are a dense
/// 26 × 26 table addressed by first and last letter; each cell maps letter
/// sets to groups.
///
/// Iteration is deterministic: first letter ascending, then last letter
/// ascending, then letter set in ascending [mask order](LetterSet).
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct WordGraph
{
	/// Cell `first * 26 + last` holds the groups for that pair of letters.
	cells: Vec<BTreeMap<LetterSet, EdgeGroup>>,

	/// The number of edge groups.
	groups: usize,

	/// The number of words.
	words: usize
}

impl Default for WordGraph
{
	fn default() -> Self { Self::new() }
}

impl WordGraph
{
	/// Construct an empty word graph.
	pub fn new() -> Self
	{
		Self {
			cells: vec![BTreeMap::new(); ALPHABET_SIZE * ALPHABET_SIZE],
			groups: 0,
			words: 0
		}
	}

	/// Add a word to the group keyed by its first letter, last letter, and
	/// letter set, creating the group if necessary.
	///
	/// # Arguments
	///
	/// * `word` - The word to add.
	///
	/// # Returns
	///
	/// `true` if the word was added, `false` if it was rejected because it is
	/// empty or contains something other than `a..=z`.
	pub fn insert(&mut self, word: String) -> bool
	{
		let (Some(first), Some(last)) = (word.chars().next(), word.chars().last())
		else
		{
			trace!("rejected empty word");
			return false
		};
		if !word.chars().all(|c| c.is_ascii_lowercase())
		{
			trace!("rejected word with non-letters: {}", word);
			return false
		}
		let Some(index) = Self::checked_cell(first, last) else { return false };
		let letters = LetterSet::from_word(&word);
		let cell = &mut self.cells[index];
		match cell.get_mut(&letters)
		{
			Some(group) => group.words.push(word),
			None =>
			{
				cell.insert(letters, EdgeGroup {
					first,
					last,
					letters,
					words: vec![word]
				});
				self.groups += 1;
			}
		}
		self.words += 1;
		true
	}

	/// The number of edge groups.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.groups }

	/// Check if the graph holds no words.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.groups == 0 }

	/// The number of words across all groups.
	#[inline]
	#[must_use]
	pub fn word_count(&self) -> usize { self.words }

	/// Look up the group for the given key.
	#[must_use]
	pub fn group(
		&self,
		first: char,
		last: char,
		letters: LetterSet
	) -> Option<&EdgeGroup>
	{
		self.cells
			.get(Self::checked_cell(first, last)?)
			.and_then(|cell| cell.get(&letters))
	}

	/// Iterate over the groups whose words run from `first` to `last`.
	pub fn edges(
		&self,
		first: char,
		last: char
	) -> impl Iterator<Item = &EdgeGroup> + '_
	{
		Self::checked_cell(first, last)
			.into_iter()
			.flat_map(move |index| self.cells[index].values())
	}

	/// Iterate over the groups whose words start with `first`, whatever their
	/// last letter.
	pub fn edges_from(&self, first: char) -> impl Iterator<Item = &EdgeGroup> + '_
	{
		let cells = match LetterSet::index(first)
		{
			Some(i) => &self.cells[i * ALPHABET_SIZE..(i + 1) * ALPHABET_SIZE],
			None => &[]
		};
		cells.iter().flat_map(|cell| cell.values())
	}

	/// Iterate over every group.
	pub fn groups(&self) -> impl Iterator<Item = &EdgeGroup> + '_
	{
		self.cells.iter().flat_map(|cell| cell.values())
	}

	/// The cell index for a pair of letters, if both are in `a..=z`.
	#[inline]
	fn checked_cell(first: char, last: char) -> Option<usize>
	{
		Some(LetterSet::index(first)? * ALPHABET_SIZE + LetterSet::index(last)?)
	}
}

impl FromIterator<String> for WordGraph
{
	fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self
	{
		let mut graph = Self::new();
		for word in iter
		{
			graph.insert(word);
		}
		graph
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
