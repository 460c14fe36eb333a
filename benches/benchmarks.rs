use std::{num::NonZeroUsize, time::Duration};

use const_format::concatcp;
use criterion::{measurement::Measurement, BenchmarkGroup, Criterion};
use letter_boxed_solver::{
	dictionary::Dictionary,
	filter::playable_words,
	puzzle::Puzzle,
	solver::Solver
};

/// The path of the directory containing the dictionaries.
#[inline]
#[must_use]
const fn dir() -> &'static str
{
	"dict"
}

/// The name of the dictionary file.
#[inline]
#[must_use]
const fn name() -> &'static str
{
	"english"
}

/// The path to the text file.
#[inline]
#[must_use]
const fn path_txt() -> &'static str
{
	concatcp!(dir(), "/", name(), ".txt")
}

/// The path to the binary file.
#[inline]
#[must_use]
const fn path_dict() -> &'static str
{
	concatcp!(dir(), "/", name(), ".dict")
}

/// The puzzle to benchmark against.
#[inline]
#[must_use]
fn puzzle() -> Puzzle
{
	"mrf-sna-opu-gci".parse().unwrap()
}

/// Benchmark reading a dictionary from a file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_read_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("read_from_file", |b| {
		b.iter(|| Dictionary::read_from_file(path_txt()).unwrap());
	});
}

/// Benchmark deserializing a dictionary from a file.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_deserialize_from_file<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	g.bench_function("deserialize_from_file", |b| {
		b.iter(|| Dictionary::deserialize_from_file(path_dict()).unwrap());
	});
}

/// Benchmark filtering the dictionary down to the playable words.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_filter<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let dictionary = Dictionary::open(dir(), name()).unwrap();
	let puzzle = puzzle();
	g.bench_function("playable_words", |b| {
		b.iter(|| playable_words(dictionary.trie(), &puzzle));
	});
}

/// Benchmark the sequential and parallel chain searches.
///
/// # Arguments
///
/// * `g` - The benchmark group.
fn bench_solver<M: Measurement>(g: &mut BenchmarkGroup<M>)
{
	let dictionary = Dictionary::open(dir(), name()).unwrap();
	let solver = Solver::new(
		puzzle(),
		&dictionary,
		NonZeroUsize::new(4).unwrap()
	);
	g.bench_function("solve", |b| {
		b.iter(|| assert!(!solver.find_all_solutions().is_empty()));
	});
	g.bench_function("solve_parallel", |b| {
		b.iter(|| assert!(!solver.find_all_solutions_parallel().is_empty()));
	});
}

/// Run all benchmarks.
fn main()
{
	// Ensure that both the text and binary files exist.
	let _ = Dictionary::open(dir(), name()).unwrap();

	// Run the benchmarks.
	let mut criterion = Criterion::default().configure_from_args();
	let mut group = criterion.benchmark_group("benchmarks");
	group.measurement_time(Duration::from_secs(10));
	bench_read_from_file(&mut group);
	bench_deserialize_from_file(&mut group);
	bench_filter(&mut group);
	bench_solver(&mut group);
	group.finish();

	// Generate the final summary.
	criterion.final_summary();
}
