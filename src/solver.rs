//! # Solver
//!
//! Herein is the solver for the Letter Boxed game. Solving happens in three
//! phases, all performed up front by [`Solver::new`] except the last:
//!
//! 1. Filter the dictionary down to the words playable on the puzzle.
//! 2. Group the playable words into a [`WordGraph`].
//! 3. Search the graph for chains of [edge groups](EdgeGroup) that cover
//!    every letter of the puzzle, up to a maximum chain length.

use std::{
	fmt::{self, Display, Formatter},
	num::NonZeroUsize,
	time::Instant
};

use log::{debug, trace};
use rayon::prelude::*;

use crate::{
	dictionary::Dictionary,
	filter::playable_words,
	letter_set::LetterSet,
	puzzle::Puzzle,
	word_graph::{EdgeGroup, WordGraph}
};

////////////////////////////////////////////////////////////////////////////////
//                                  Solver.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete context of the Letter Boxed solver: the puzzle, the graph of
/// its playable words, and the maximum number of words in a solution. The
/// graph is never modified after construction, so searches may run on many
/// threads at once.
#[derive(Clone, Debug)]
#[must_use]
pub struct Solver
{
	/// The puzzle to solve.
	puzzle: Puzzle,

	/// The playable words of the puzzle, grouped for the chain search.
	graph: WordGraph,

	/// The maximum number of edge groups in a solution.
	threshold: NonZeroUsize
}

impl Solver
{
	/// Construct a new solver for the given puzzle and dictionary.
	///
	/// # Arguments
	///
	/// * `puzzle` - The puzzle to solve.
	/// * `dictionary` - The dictionary to draw words from.
	/// * `threshold` - The maximum number of words in a solution.
	///
	/// # Returns
	///
	/// A solver, ready to [search](Self::find_all_solutions).
	pub fn new(
		puzzle: Puzzle,
		dictionary: &Dictionary,
		threshold: NonZeroUsize
	) -> Self
	{
		let start_time = Instant::now();
		let words = playable_words(dictionary.trie(), &puzzle);
		debug!(
			"found {} playable words in {:?}",
			words.len(),
			start_time.elapsed()
		);
		Self::with_words(puzzle, words, threshold)
	}

	/// Construct a new solver from an already filtered word list. The words are
	/// assumed to be playable on the puzzle; their order fixes the order of
	/// words within each edge group.
	///
	/// # Arguments
	///
	/// * `puzzle` - The puzzle to solve.
	/// * `words` - The playable words, in discovery order.
	/// * `threshold` - The maximum number of words in a solution.
	///
	/// # Returns
	///
	/// A solver, ready to [search](Self::find_all_solutions).
	pub fn with_words(
		puzzle: Puzzle,
		words: Vec<String>,
		threshold: NonZeroUsize
	) -> Self
	{
		let start_time = Instant::now();
		let graph = words.into_iter().collect::<WordGraph>();
		debug!(
			"grouped {} words into {} edge groups in {:?}",
			graph.word_count(),
			graph.len(),
			start_time.elapsed()
		);
		Self { puzzle, graph, threshold }
	}

	/// The puzzle being solved.
	#[inline]
	pub fn puzzle(&self) -> &Puzzle { &self.puzzle }

	/// The word graph being searched.
	#[inline]
	pub fn graph(&self) -> &WordGraph { &self.graph }

	/// The maximum number of words in a solution.
	#[inline]
	#[must_use]
	pub fn threshold(&self) -> NonZeroUsize { self.threshold }

	/// Find every solution with at most [`threshold`](Self::threshold) edge
	/// groups. Solutions are ordered by their seed group, in
	/// [graph order](WordGraph), and then by the graph order of each
	/// subsequent group. An empty result means that the puzzle has no solution
	/// within the threshold; it is not an error.
	///
	/// # Returns
	///
	/// The solutions, borrowing their edge groups from this solver.
	#[must_use]
	pub fn find_all_solutions(&self) -> Vec<Solution<'_>>
	{
		let start_time = Instant::now();
		let solutions = self.graph.groups()
			.flat_map(|seed| self.solutions_from(seed))
			.collect::<Vec<_>>();
		debug!(
			"found {} solutions in {:?}",
			solutions.len(),
			start_time.elapsed()
		);
		solutions
	}

	/// As [`find_all_solutions`](Self::find_all_solutions), but each seed
	/// group is searched as an independent task on the global thread pool.
	/// The results are merged in seed order, so the answer is identical.
	#[must_use]
	pub fn find_all_solutions_parallel(&self) -> Vec<Solution<'_>>
	{
		let start_time = Instant::now();
		let seeds = self.graph.groups().collect::<Vec<_>>();
		let solutions = seeds
			.into_par_iter()
			.flat_map_iter(|seed| self.solutions_from(seed))
			.collect::<Vec<_>>();
		debug!(
			"found {} solutions in {:?} (parallel)",
			solutions.len(),
			start_time.elapsed()
		);
		solutions
	}

	/// Find every solution that begins with the given edge group.
	fn solutions_from<'a>(&'a self, seed: &'a EdgeGroup) -> Vec<Solution<'a>>
	{
		let mut chain = vec![seed];
		let mut solutions = Vec::new();
		self.extend(&mut chain, seed.letters(), &mut solutions);
		solutions
	}

	/// Extend a non-empty partial chain in every way that adds at least one
	/// new letter, recording each chain that covers the whole puzzle.
	///
	/// # Arguments
	///
	/// * `chain` - The partial chain. Restored to its original content on
	///   return.
	/// * `covered` - The letters covered by `chain`.
	/// * `solutions` - The accumulator for complete chains.
	fn extend<'a>(
		&'a self,
		chain: &mut Vec<&'a EdgeGroup>,
		covered: LetterSet,
		solutions: &mut Vec<Solution<'a>>
	)
	{
		if covered.is_superset(self.puzzle.letters())
		{
			trace!("solution: {}", Solution(chain.clone()));
			solutions.push(Solution(chain.clone()));
			return
		}
		if chain.len() >= self.threshold.get()
		{
			return
		}
		let Some(tail) = chain.last().map(|group| group.last()) else { return };
		for group in self.graph.edges_from(tail)
		{
			// A group that adds nothing new can never help.
			if group.letters().difference(covered).is_empty()
			{
				continue
			}
			chain.push(group);
			self.extend(chain, covered.union(group.letters()), solutions);
			chain.pop();
		}
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                 Solutions.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A chain of [edge groups](EdgeGroup) that covers every letter of the
/// puzzle. The last letter of each group is the first letter of the next.
///
/// A solution stands for every word chain obtained by picking one word from
/// each group; see [`word_chains`](Self::word_chains).
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Solution<'a>(Vec<&'a EdgeGroup>);

impl<'a> Solution<'a>
{
	/// The edge groups, in chain order.
	#[inline]
	#[must_use]
	pub fn groups(&self) -> &[&'a EdgeGroup] { &self.0 }

	/// The number of edge groups, i.e., words per chain.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Always `false` for solutions produced by a [`Solver`].
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// The letters covered by the chain.
	pub fn letters(&self) -> LetterSet
	{
		self.0.iter().fold(LetterSet::empty(), |acc, group| acc | group.letters())
	}

	/// The number of concrete word chains that this solution represents: the
	/// product of the group sizes.
	#[must_use]
	pub fn word_chain_count(&self) -> u64
	{
		self.0.iter().map(|group| group.len() as u64).product()
	}

	/// Expand the solution into its concrete word chains. The first group
	/// varies slowest.
	///
	/// # Returns
	///
	/// [`word_chain_count`](Self::word_chain_count) chains, each holding one
	/// word from every group.
	#[must_use]
	pub fn word_chains(&self) -> Vec<Vec<&'a str>>
	{
		let mut chains = vec![Vec::with_capacity(self.0.len())];
		for &group in &self.0
		{
			chains = chains.into_iter()
				.flat_map(|chain| {
					group.words().iter().map(move |word| {
						let mut chain = chain.clone();
						chain.push(word.as_str());
						chain
					})
				})
				.collect();
		}
		chains
	}
}

impl Display for Solution<'_>
{
	/// Write the groups separated by arrows, with the words of each group
	/// separated by slashes, e.g., `fares/fears -> sdhkbgjl`.
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for (index, group) in self.0.iter().enumerate()
		{
			if index > 0
			{
				write!(f, " -> ")?;
			}
			write!(f, "{}", group.words().join("/"))?;
		}
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
