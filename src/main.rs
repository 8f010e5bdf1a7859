use std::io::{self, BufRead, Write};

use clap::Parser;

use promptsift::{query, Matcher};

/// Filter lines of prompt text with a boolean search query
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Query, e.g. 'robot & !"machine learning"' (NOT/AND/OR also accepted)
	query: String,

	/// Match terms case-sensitively
	#[arg(long)]
	case_sensitive: bool,

	/// Print the compiled inclusion/exclusion lists as JSON and exit
	#[arg(long)]
	compiled: bool,
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let args = Args::parse();

	let query_text = query::substitute_keywords(&args.query);
	if !query::well_formed(&query_text) {
		anyhow::bail!("query is not well-formed");
	}
	let queries = query::compile(&query_text)?;

	if args.compiled {
		println!("{}", serde_json::to_string_pretty(&queries)?);
		return Ok(());
	}

	let matcher = Matcher::new(queries, args.case_sensitive);
	let stdin = io::stdin();
	let mut stdout = io::stdout().lock();
	for line in stdin.lock().lines() {
		let line = line?;
		if matcher.matches(&line) {
			writeln!(stdout, "{line}")?;
		}
	}
	Ok(())
}
