use super::data::*;

/// Splits query text into a `Start`/`End` bracketed token stream. Never
/// fails: anything unrecognized comes out as an `Illegal` token and it is the
/// parser's job to reject it.
pub fn tokenize(input: &str) -> Vec<Token> {
	Tokenizer::default().run(input)
}

#[derive(Default)]
struct Tokenizer {
	tokens: Vec<Token>,
	pending: String,
	quoted: bool,
}

impl Tokenizer {
	fn run(mut self, input: &str) -> Vec<Token> {
		self.tokens.push(Token::sentinel(TokenKind::Start));
		for c in input.chars() {
			self.step(c);
		}
		self.flush_pending();
		self.tokens.push(Token::sentinel(TokenKind::End));
		self.tokens
	}

	fn step(&mut self, c: char) {
		if c == '"' {
			self.quoted = !self.quoted;
			return;
		}
		// inside quotes everything joins the pending identifier, so a
		// phrase like "machine learning" stays one token; an unpaired
		// quote swallows the rest of the input the same way
		if self.quoted || c.is_alphabetic() {
			self.pending.push(c);
			return;
		}
		self.flush_pending();
		match c {
			' ' => {}
			'(' => self.operator(c, TokenKind::LParen),
			')' => self.operator(c, TokenKind::RParen),
			'!' => self.operator(c, TokenKind::Not),
			'|' => self.operator(c, TokenKind::Or),
			'&' => self.operator(c, TokenKind::And),
			_ => self.operator(c, TokenKind::Illegal),
		}
	}

	fn flush_pending(&mut self) {
		if !self.pending.is_empty() {
			let text = std::mem::take(&mut self.pending);
			self.tokens.push(Token::new(text, TokenKind::Identifier));
		}
	}

	fn operator(&mut self, c: char, kind: TokenKind) {
		self.tokens.push(Token::new(c.to_string(), kind));
	}
}
