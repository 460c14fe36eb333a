//! # Letter sets
//!
//! A [`LetterSet`] is a set of lowercase ASCII letters, packed into a 26-bit
//! mask. Set algebra reduces to integer bitwise operations, and the mask is
//! trivially hashable and ordered, so it doubles as a map key.

use std::{
	fmt::{self, Display, Formatter},
	ops::BitOr
};

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Letter sets.                                //
////////////////////////////////////////////////////////////////////////////////

/// The number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// A set of letters drawn from `a..=z`. Bit `i` is set iff the `i`-th letter of
/// the alphabet is a member. Sets order by their numeric mask.
#[derive(
	Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
	Serialize, Deserialize
)]
#[must_use]
pub struct LetterSet(u32);

impl LetterSet
{
	/// Construct the empty set.
	#[inline]
	pub const fn empty() -> Self { Self(0) }

	/// Construct the set of distinct letters used by the given word. Characters
	/// outside `a..=z` are ignored.
	///
	/// # Arguments
	///
	/// * `word` - The word.
	///
	/// # Returns
	///
	/// The letters of the word.
	#[inline]
	pub fn from_word(word: &str) -> Self { word.chars().collect() }

	/// Compute the alphabet index of a letter.
	///
	/// # Arguments
	///
	/// * `letter` - The letter.
	///
	/// # Returns
	///
	/// The zero-based index of `letter` within `a..=z`, or `None` if `letter`
	/// is not a lowercase ASCII letter.
	#[inline]
	#[must_use]
	pub const fn index(letter: char) -> Option<usize>
	{
		if letter.is_ascii_lowercase()
		{
			Some(letter as usize - 'a' as usize)
		}
		else
		{
			None
		}
	}

	/// Insert a letter.
	///
	/// # Arguments
	///
	/// * `letter` - The letter to insert.
	///
	/// # Returns
	///
	/// `true` if `letter` is a lowercase ASCII letter (whether or not it was
	/// already present), `false` if it was rejected.
	#[inline]
	pub fn insert(&mut self, letter: char) -> bool
	{
		match Self::index(letter)
		{
			Some(index) =>
			{
				self.0 |= 1 << index;
				true
			}
			None => false
		}
	}

	/// Check if the set contains the given letter.
	#[inline]
	#[must_use]
	pub const fn contains(&self, letter: char) -> bool
	{
		match Self::index(letter)
		{
			Some(index) => self.0 & (1 << index) != 0,
			None => false
		}
	}

	/// The number of letters in the set.
	#[inline]
	#[must_use]
	pub const fn len(&self) -> usize { self.0.count_ones() as usize }

	/// Check if the set is empty.
	#[inline]
	#[must_use]
	pub const fn is_empty(&self) -> bool { self.0 == 0 }

	/// The letters present in either set.
	#[inline]
	pub const fn union(self, other: Self) -> Self { Self(self.0 | other.0) }

	/// The letters present in `self` but absent from `other`.
	#[inline]
	pub const fn difference(self, other: Self) -> Self
	{
		Self(self.0 & !other.0)
	}

	/// Check if every letter of `other` is also in `self`.
	#[inline]
	#[must_use]
	pub const fn is_superset(&self, other: Self) -> bool
	{
		other.0 & !self.0 == 0
	}

	/// Iterate over the members in alphabetical order.
	pub fn iter(&self) -> impl Iterator<Item = char> + '_
	{
		(b'a'..=b'z')
			.map(char::from)
			.filter(|&letter| self.contains(letter))
	}
}

impl FromIterator<char> for LetterSet
{
	fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self
	{
		let mut set = Self::empty();
		for letter in iter
		{
			set.insert(letter);
		}
		set
	}
}

impl BitOr for LetterSet
{
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self::Output { self.union(rhs) }
}

impl Display for LetterSet
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{{")?;
		for letter in self.iter()
		{
			write!(f, "{}", letter)?;
		}
		write!(f, "}}")
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::letter_set::LetterSet;

	/// Ensure that a word's letter set holds each distinct letter exactly once,
	/// and that non-letters are ignored.
	#[test]
	fn test_from_word()
	{
		let set = LetterSet::from_word("fares");
		assert_eq!(set.len(), 5);
		for letter in "fares".chars()
		{
			assert!(set.contains(letter));
		}
		assert!(!set.contains('x'));
		assert_eq!(LetterSet::from_word("fears"), set);
		assert_eq!(LetterSet::from_word("ssss").len(), 1);
		assert_eq!(LetterSet::from_word("it's"), LetterSet::from_word("its"));
		assert!(LetterSet::from_word("").is_empty());
	}

	#[test]
	fn test_insert()
	{
		let mut set = LetterSet::empty();
		assert!(set.insert('a'));
		assert!(set.insert('a'));
		assert!(set.insert('z'));
		assert!(!set.insert('A'));
		assert!(!set.insert('-'));
		assert!(!set.contains('A'));
		assert_eq!(set.len(), 2);
		assert_eq!(set.iter().collect::<String>(), "az");
	}

	/// Ensure that union, difference, and superset checks agree with their set
	/// theoretic definitions on a few representative inputs.
	#[test]
	fn test_algebra()
	{
		let abc = LetterSet::from_word("abc");
		let cde = LetterSet::from_word("cde");
		assert_eq!(abc.union(cde), LetterSet::from_word("abcde"));
		assert_eq!(abc | cde, abc.union(cde));
		assert_eq!(abc.difference(cde), LetterSet::from_word("ab"));
		assert!(abc.difference(abc).is_empty());
		assert!(abc.union(cde).is_superset(abc));
		assert!(abc.is_superset(LetterSet::empty()));
		assert!(!abc.is_superset(cde));
	}

	#[test]
	fn test_display()
	{
		assert_eq!(LetterSet::from_word("fears").to_string(), "{aefrs}");
		assert_eq!(LetterSet::empty().to_string(), "{}");
	}
}
