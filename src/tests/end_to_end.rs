use crate::query::{compile, substitute_keywords, well_formed};
use crate::Matcher;

use super::run_with_logger;

const PROMPTS: &[&str] = &[
	"Translate the following sentence into French",
	"A robot may not injure a human being",
	"Solve for x: 2x + 3 = 11",
	"Classic machine learning benchmark question",
	"Which of the following best describes photosynthesis?",
];

fn surviving(query: &str, case_sensitive: bool) -> anyhow::Result<Vec<&'static str>> {
	let substituted = substitute_keywords(query);
	anyhow::ensure!(well_formed(&substituted), "query {query:?} should parse");
	let matcher = Matcher::new(compile(&substituted)?, case_sensitive);
	Ok(PROMPTS
		.iter()
		.copied()
		.filter(|prompt| matcher.matches(prompt))
		.collect())
}

#[test]
fn search_scenarios() -> anyhow::Result<()> {
	run_with_logger(|| {
		let cases = [
			// empty query matches every prompt
			("", PROMPTS.to_vec()),
			("robot", vec!["A robot may not injure a human being"]),
			(
				"robot OR following",
				vec![
					"Translate the following sentence into French",
					"A robot may not injure a human being",
					"Which of the following best describes photosynthesis?",
				],
			),
			(
				"following AND NOT translate",
				vec!["Which of the following best describes photosynthesis?"],
			),
			(
				"\"machine learning\"",
				vec!["Classic machine learning benchmark question"],
			),
			(
				"(robot | benchmark) & !injure",
				vec!["Classic machine learning benchmark question"],
			),
			("robot & injure", vec!["A robot may not injure a human being"]),
			("photosynthesis & !describes", vec![]),
		];
		for (query, expected) in cases {
			assert_eq!(surviving(query, false)?, expected, "query: {query:?}");
		}
		Ok(())
	})
}

#[test]
fn case_sensitivity_follows_the_flag() -> anyhow::Result<()> {
	run_with_logger(|| {
		assert_eq!(
			surviving("translate", true)?,
			Vec::<&str>::new(),
			"only the capitalized form appears in the prompts",
		);
		assert_eq!(
			surviving("translate", false)?,
			vec!["Translate the following sentence into French"],
		);
		Ok(())
	})
}

#[test]
fn malformed_queries_are_reported_not_compiled() -> anyhow::Result<()> {
	run_with_logger(|| {
		for query in ["(robot & dog", "robot &", "robot dog", "42"] {
			assert!(!well_formed(query), "query: {query:?}");
			assert!(compile(query).is_err(), "query: {query:?}");
		}
		Ok(())
	})
}
