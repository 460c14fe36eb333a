//! # Letter Boxed Solver
//!
//! Letter Boxed is a word puzzle in which the player must use every letter
//! around the edge of a square, chaining words so that each word begins with
//! the last letter of its predecessor, and never taking two consecutive
//! letters from the same side.
//!
//! This program finds every solution to a puzzle within a maximum number of
//! words. Via command line options, the user can specify the dictionary to use
//! for solving the puzzle, the puzzle itself (e.g., `mrf-sna-opu-gci`), and the
//! maximum number of words.

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, trace};

use letter_boxed_solver::{
	dictionary::Dictionary,
	puzzle::Puzzle,
	solver::{Solution, Solver}
};

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for solving Letter Boxed puzzles.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0")]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "english")]
	dictionary: String,

	/// Log at debug level unless `RUST_LOG` says otherwise.
	#[arg(short = 'v', long)]
	verbose: bool,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Find every solution to a puzzle and report how many there are.
	Solve {
		/// The puzzle: four groups of three letters, separated by any single
		/// non-letter character.
		#[arg(default_value = "mrf-sna-opu-gci")]
		puzzle: Puzzle,

		/// The maximum number of words in a solution.
		#[arg(short = 't', long, default_value = "2")]
		threshold: NonZeroUsize,

		/// Search on all available cores.
		#[arg(short = 'p', long)]
		parallel: bool,

		/// Also report the number of concrete word chains, counting every
		/// choice among interchangeable words.
		#[arg(short = 'e', long)]
		expand: bool,

		/// Print every solution.
		#[arg(short = 'l', long)]
		list: bool
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	// Parse the command line options. Malformed puzzles are rejected here.
	let opts = Opts::parse();
	let level = if opts.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(Env::default().default_filter_or(level))
		.init();
	debug!("Command line options: {:?}", opts);

	// Open the dictionary, creating the binary dictionary if necessary.
	let dictionary = Dictionary::open(&opts.directory, &opts.dictionary)
		.unwrap_or_else(|e|
			panic!("Failed to open dictionary: {}/{}.dict or {0}/{1}.txt: {}",
				opts.directory,
				opts.dictionary,
				e
			)
		);
	debug!("Dictionary holds {} words", dictionary.len());

	// Execute the appropriate subcommand.
	match opts.command
	{
		Command::Generate =>
		{
			trace!("Exiting after generating binary dictionary");
		},
		Command::Solve { puzzle, threshold, parallel, expand, list } =>
		{
			println!("solving puzzle {}", puzzle);
			let solver = Solver::new(puzzle, &dictionary, threshold);
			let solutions = if parallel
			{
				solver.find_all_solutions_parallel()
			}
			else
			{
				solver.find_all_solutions()
			};
			if list
			{
				print_solutions(&solutions);
			}
			println!("{} solutions", solutions.len());
			if expand
			{
				let chains = solutions.iter()
					.map(Solution::word_chain_count)
					.sum::<u64>();
				println!("{} word chains", chains);
			}
		}
	}
}

/// Print the solutions to standard output, one per line.
///
/// # Arguments
///
/// * `solutions` - The solutions to print.
fn print_solutions(solutions: &[Solution])
{
	for solution in solutions
	{
		println!("{}", solution);
	}
}
