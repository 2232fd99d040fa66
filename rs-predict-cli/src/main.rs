use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rs_predict_core::{NGramModel, Predictor, Report, query, tokenize_file};

#[derive(Parser)]
#[command(name = "rs-predict", version, about = "Predict the next word of a phrase from the n-grams of a corpus")]
struct Cli {
	/// Corpus file, or a directory whose `.txt` files are read
	corpus: PathBuf,

	/// Phrase to complete; its word count sets the n-gram order
	query: String,

	#[arg(short, long, help = "Seed for the tie-break between equally probable words")]
	seed: Option<u64>,

	#[arg(long, help = "Print the report as JSON")]
	json: bool,

	#[arg(short, long, help = "Log model statistics")]
	verbose: bool,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	let default_filter = if cli.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

	// Tokenize the whole corpus, then count with n = number of query words
	let tokens = tokenize_file(&cli.corpus)
		.with_context(|| format!("Failed to load corpus {}", cli.corpus.display()))?;
	info!("{} tokens in corpus", tokens.len());

	let model = NGramModel::for_phrase(&tokens, &cli.query)?;

	let report: Report = match cli.seed {
		Some(seed) => query(&model, &cli.query, &mut Predictor::seeded(seed))?,
		None => query(&model, &cli.query, &mut Predictor::new())?,
	};

	if cli.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("{report}");
	}

	Ok(())
}
