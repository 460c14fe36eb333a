//! # Dictionary
//!
//! Herein is support for dictionary construction and persistence. All runtime
//! operations are performed against a [`Dictionary`], which wraps a [`Trie`]
//! of lowercase words.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::trie::Trie;

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`Trie`] of words.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(Trie);

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// The number of distinct words in the dictionary.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Check if the dictionary contains the given word.
	///
	/// # Arguments
	///
	/// * `word` - The word to check.
	///
	/// # Returns
	///
	/// `true` if the dictionary contains the word, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, word: &str) -> bool { self.0.contains(word) }

	/// The underlying prefix tree.
	#[inline]
	pub fn trie(&self) -> &Trie { &self.0 }

	/// Populate the dictionary with the given words. Each word is trimmed and
	/// lowercased; blank entries are skipped.
	///
	/// # Arguments
	///
	/// * `words` - The intended content of the dictionary.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = word.as_ref().trim();
			if !word.is_empty()
			{
				self.0.insert(&word.to_lowercase());
			}
		}
	}

	/// Open a dictionary with the given name. Only the specified directory will
	/// be searched. `name` denotes the dictionary file, sans the extension. If
	/// a binary dictionary (`<name>.dict`) exists _and_ is newer than the text
	/// file (`<name>.txt`), it will be read; otherwise, a text file will be
	/// read and a binary dictionary will be created (to optimize future reads).
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let dict_path = dir.as_ref().join(format!("{}.dict", name));
		let txt_path = dir.as_ref().join(format!("{}.txt", name));
		// Any failure to compare modification times (including a missing
		// binary dictionary) falls back to the text file.
		if dict_path
			.metadata()
			.and_then(|m| m.modified())
			.and_then(|dict_time| {
				txt_path
					.metadata()
					.and_then(|n| n.modified())
					.map(|txt_time| dict_time > txt_time)
			})
			.unwrap_or(false)
		{
			let dictionary = Self::deserialize_from_file(&dict_path)?;
			trace!("Read binary dictionary: {}", dict_path.display());
			Ok(dictionary)
		}
		else
		{
			let dictionary = Self::read_from_file(&txt_path)?;
			trace!("Read text dictionary: {}", txt_path.display());
			match dictionary.serialize_to_file(&dict_path)
			{
				Ok(_) =>
				{
					trace!("Wrote binary dictionary: {}", dict_path.display())
				},
				Err(e) => warn!(
					"Failed to write binary dictionary: {}: {}",
					dict_path.display(),
					e
				)
			}
			Ok(dictionary)
		}
	}

	/// Construct a dictionary from the contents of the given file. Each line
	/// in the file is considered a single word.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file. The file must contain a
	/// serialized dictionary in [`bincode`](bincode) format.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut content = Vec::new();
		reader.read_to_end(&mut content)?;
		let dictionary = bincode::deserialize(&content)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file. The dictionary is serialized
	/// in [`bincode`](bincode) format.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or written, an error is returned.
	/// * If the dictionary cannot be encoded, an [`ErrorKind::InvalidData`] is
	///   returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let content =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&content)?;
		Ok(())
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::{fs, io::ErrorKind};

	use crate::dictionary::Dictionary;
	use tempfile::{NamedTempFile, TempDir};

	/// The path to the dictionary file.
	#[inline]
	#[must_use]
	const fn test_path() -> &'static str { "dict/english.txt" }

	/// Test basic functionality of [`Dictionary`]:
	///
	/// * [`Dictionary::new`]
	/// * [`Dictionary::is_empty`]
	/// * [`Dictionary::populate`]
	/// * [`Dictionary::contains`]
	#[test]
	fn test_populate()
	{
		let mut dictionary = Dictionary::new();
		assert!(dictionary.is_empty());
		assert!(!dictionary.contains("focus"));
		dictionary.populate(&["Focus", "  gramp\t", "", "   ", "focus"]);
		assert!(dictionary.contains("focus"));
		assert!(dictionary.contains("gramp"));
		assert!(!dictionary.contains("Focus"));
		assert!(!dictionary.contains(""));
		assert_eq!(dictionary.len(), 2);
	}

	/// Test reading a dictionary from a file:
	///
	/// * [`Dictionary::read_from_file`]
	#[test]
	fn test_read_from_file()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		assert_eq!(dictionary.len(), 210);
		assert!(dictionary.contains("focusing"));
		assert!(dictionary.contains("gramp"));
		// Stored capitalized in the file.
		assert!(dictionary.contains("oscar"));
	}

	#[test]
	fn test_read_missing_file()
	{
		let dir = TempDir::new().unwrap();
		let err = Dictionary::read_from_file(dir.path().join("nope.txt"))
			.unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
		let err = Dictionary::open(dir.path(), "nope").unwrap_err();
		assert_eq!(err.kind(), ErrorKind::NotFound);
	}

	/// Test serializing and deserializing a dictionary:
	///
	/// * [`Dictionary::serialize_to_file`]
	/// * [`Dictionary::deserialize_from_file`]
	#[test]
	fn test_serialize_to_file()
	{
		let dictionary = Dictionary::read_from_file(test_path()).unwrap();
		let file = NamedTempFile::new().unwrap();
		dictionary.serialize_to_file(file.path()).unwrap();
		let deserialized =
			Dictionary::deserialize_from_file(file.path()).unwrap();
		assert_eq!(dictionary, deserialized);
	}

	#[test]
	fn test_deserialize_garbage()
	{
		let file = NamedTempFile::new().unwrap();
		fs::write(file.path(), [0xffu8; 3]).unwrap();
		let err = Dictionary::deserialize_from_file(file.path()).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::InvalidData);
	}

	/// Opening a dictionary writes the binary cache beside the text file, and
	/// the cache holds the same words.
	#[test]
	fn test_open()
	{
		let dir = TempDir::new().unwrap();
		fs::copy(test_path(), dir.path().join("english.txt")).unwrap();
		let dictionary = Dictionary::open(dir.path(), "english").unwrap();
		let cache = dir.path().join("english.dict");
		assert!(cache.exists());
		assert_eq!(Dictionary::deserialize_from_file(&cache).unwrap(), dictionary);
		assert_eq!(Dictionary::open(dir.path(), "english").unwrap(), dictionary);
	}
}
