//! # Puzzle
//!
//! A Letter Boxed puzzle is a square with three letters on each of its four
//! sides. Herein are the [`Side`] and [`Puzzle`] types, and the parser that
//! validates textual puzzles such as `mrf-sna-opu-gci`.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr
};

use fixedstr::str8;

use crate::letter_set::LetterSet;

////////////////////////////////////////////////////////////////////////////////
//                                 Constants.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The number of sides of a puzzle.
pub const SIDE_COUNT: usize = 4;

/// The number of letters on each side of a puzzle.
pub const SIDE_LENGTH: usize = 3;

/// The number of distinct letters in a puzzle.
pub const LETTER_COUNT: usize = SIDE_COUNT * SIDE_LENGTH;

////////////////////////////////////////////////////////////////////////////////
//                                   Sides.                                   //
////////////////////////////////////////////////////////////////////////////////

/// One side of the puzzle: three distinct lowercase letters. The letters keep
/// the order in which they were given, which fixes the order in which the
/// [filter](crate::filter) tries them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Side
{
	/// The letters, in input order.
	letters: str8,

	/// The letters, as a set.
	set: LetterSet
}

impl Side
{
	/// The letters of the side, in input order.
	#[inline]
	#[must_use]
	pub fn letters(&self) -> &str { self.letters.as_str() }

	/// The letters of the side, as a set.
	#[inline]
	pub fn letter_set(&self) -> LetterSet { self.set }

	/// Check if the given letter lies on this side.
	#[inline]
	#[must_use]
	pub fn contains(&self, letter: char) -> bool { self.set.contains(letter) }
}

impl Display for Side
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{}", self.letters())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Puzzles.                                  //
////////////////////////////////////////////////////////////////////////////////

/// A validated puzzle: four [sides](Side) holding twelve distinct letters
/// between them. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Puzzle
{
	/// The sides, in input order.
	sides: [Side; SIDE_COUNT],

	/// All twelve letters of the puzzle.
	letters: LetterSet
}

impl Puzzle
{
	/// Construct a puzzle from its four sides. Letters are normalized to
	/// lowercase.
	///
	/// # Arguments
	///
	/// * `sides` - The letters of each side.
	///
	/// # Returns
	///
	/// The puzzle.
	///
	/// # Errors
	///
	/// * [`PuzzleError::SideLength`] if a side does not hold exactly three
	///   letters.
	/// * [`PuzzleError::NotALetter`] if a side holds anything other than the
	///   letters `a` through `z`.
	/// * [`PuzzleError::RepeatedLetter`] if any letter appears more than once
	///   across the puzzle.
	pub fn new<T: AsRef<str>>(sides: [T; SIDE_COUNT]) -> Result<Self, PuzzleError>
	{
		let mut letters = LetterSet::empty();
		let mut parsed = [Side { letters: str8::default(), set: letters }; SIDE_COUNT];
		for (slot, side) in parsed.iter_mut().zip(sides.iter())
		{
			let side = side.as_ref().to_lowercase();
			let length = side.chars().count();
			if length != SIDE_LENGTH
			{
				return Err(PuzzleError::SideLength { side, length })
			}
			let mut set = LetterSet::empty();
			for letter in side.chars()
			{
				if LetterSet::index(letter).is_none()
				{
					return Err(PuzzleError::NotALetter { side: side.clone(), letter })
				}
				if letters.contains(letter)
				{
					return Err(PuzzleError::RepeatedLetter(letter))
				}
				set.insert(letter);
				letters.insert(letter);
			}
			*slot = Side { letters: str8::from(side.as_str()), set };
		}
		Ok(Self { sides: parsed, letters })
	}

	/// The sides of the puzzle, in input order.
	#[inline]
	#[must_use]
	pub fn sides(&self) -> &[Side; SIDE_COUNT] { &self.sides }

	/// All twelve letters of the puzzle.
	#[inline]
	pub fn letters(&self) -> LetterSet { self.letters }

	/// Find the side that holds the given letter.
	///
	/// # Returns
	///
	/// The index of the side, or `None` if the letter is not in the puzzle.
	#[must_use]
	pub fn side_of(&self, letter: char) -> Option<usize>
	{
		self.sides.iter().position(|side| side.contains(letter))
	}

	/// Check if a word can be spelled on this puzzle, i.e., every letter is in
	/// the puzzle and no two consecutive letters share a side.
	///
	/// # Arguments
	///
	/// * `word` - The candidate word.
	///
	/// # Returns
	///
	/// `true` if the word is playable, `false` otherwise.
	#[must_use]
	pub fn is_playable(&self, word: &str) -> bool
	{
		let mut last_side = None;
		for letter in word.chars()
		{
			match self.side_of(letter)
			{
				Some(side) if Some(side) != last_side => last_side = Some(side),
				_ => return false
			}
		}
		last_side.is_some()
	}
}

impl FromStr for Puzzle
{
	type Err = PuzzleError;

	/// Parse a puzzle of the form `abc-def-ghi-jkl`. Any single non-letter
	/// character may separate the sides.
	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let groups = s.trim().split(|c: char| !c.is_alphabetic()).collect::<Vec<_>>();
		match <[&str; SIDE_COUNT]>::try_from(groups.as_slice())
		{
			Ok(sides) => Self::new(sides),
			Err(_) => Err(PuzzleError::SideCount(groups.len()))
		}
	}
}

impl Display for Puzzle
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		let [a, b, c, d] = &self.sides;
		write!(f, "{}-{}-{}-{}", a, b, c, d)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of reasons that a puzzle can be rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError
{
	/// The puzzle does not have exactly four sides.
	SideCount(usize),

	/// A side does not have exactly three letters.
	SideLength { side: String, length: usize },

	/// A side contains something other than a lowercase ASCII letter.
	NotALetter { side: String, letter: char },

	/// A letter appears more than once in the puzzle.
	RepeatedLetter(char)
}

impl Display for PuzzleError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::SideCount(count) => write!(
				f,
				"expected {} sides, found {}",
				SIDE_COUNT,
				count
			),
			Self::SideLength { side, length } => write!(
				f,
				"side \"{}\" has {} letters, expected {}",
				side,
				length,
				SIDE_LENGTH
			),
			Self::NotALetter { side, letter } =>
				write!(f, "side \"{}\" contains non-letter {:?}", side, letter),
			Self::RepeatedLetter(letter) =>
				write!(f, "letter '{}' appears more than once", letter)
		}
	}
}

impl Error for PuzzleError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
