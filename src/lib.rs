//! # Letter Boxed Solver
//!
//! Letter Boxed is a word puzzle played on a square with three letters on each
//! side. The player spells words by moving from letter to letter, never taking
//! two consecutive letters from the same side. Each word must begin with the
//! last letter of the previous word, and the puzzle is solved once every letter
//! has been used, ideally in as few words as possible.
//!
//! The library finds every solution up to a given number of words:
//!
//! * [`dictionary`] loads a word list into a [`trie`].
//! * [`filter`] walks the trie to find the words playable on a [`puzzle`].
//! * [`word_graph`] groups the playable words by first letter, last letter,
//!   and [letter set](letter_set).
//! * [`solver`] searches the graph for letter-covering chains.

pub mod dictionary;
pub mod filter;
pub mod letter_set;
pub mod puzzle;
pub mod solver;
pub mod trie;
pub mod word_graph;
