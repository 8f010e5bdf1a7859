use super::data::*;
use super::expr::Expr;
use super::lexer;

/// Recursive descent over the token stream:
///
/// ```text
/// sentence    := START disjunction END
/// disjunction := conjunction ( OR conjunction )*
/// conjunction := negation ( AND negation )*
/// negation    := IDENTIFIER | NOT negation | LPAREN disjunction RPAREN
/// ```
///
/// NOT binds tighter than AND, AND tighter than OR; AND/OR chains fold to the
/// left. The grammar is LL(1), so the cursor only ever moves forward.
pub fn parse(query: &str) -> Result<Expr> {
	Parser::new(lexer::tokenize(query)).sentence()
}

struct Parser {
	tokens: Vec<Token>,
	pos: usize,
}

impl Parser {
	fn new(tokens: Vec<Token>) -> Self {
		Self { tokens, pos: 0 }
	}

	fn current(&self) -> Option<TokenKind> {
		self.tokens.get(self.pos).map(|token| token.kind)
	}

	fn eat(&mut self, kind: TokenKind) -> bool {
		if self.current() == Some(kind) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	fn eat_identifier(&mut self) -> Option<String> {
		let token = self.tokens.get(self.pos)?;
		if token.kind != TokenKind::Identifier {
			return None;
		}
		let text = token.text.clone();
		self.pos += 1;
		Some(text)
	}

	fn expect(&mut self, kind: TokenKind) -> Result<()> {
		if self.eat(kind) {
			Ok(())
		} else {
			Err(MalformedQuery)
		}
	}

	fn sentence(mut self) -> Result<Expr> {
		self.expect(TokenKind::Start)?;
		let expr = self.disjunction()?;
		self.expect(TokenKind::End)?;
		// the lexer always puts End last, but reject leftovers anyway in
		// case the token stream came from somewhere else
		if self.pos != self.tokens.len() {
			return Err(MalformedQuery);
		}
		Ok(expr)
	}

	fn disjunction(&mut self) -> Result<Expr> {
		let mut expr = self.conjunction()?;
		while self.eat(TokenKind::Or) {
			expr = Expr::or(expr, self.conjunction()?);
		}
		Ok(expr)
	}

	fn conjunction(&mut self) -> Result<Expr> {
		let mut expr = self.negation()?;
		while self.eat(TokenKind::And) {
			expr = Expr::and(expr, self.negation()?);
		}
		Ok(expr)
	}

	fn negation(&mut self) -> Result<Expr> {
		if let Some(text) = self.eat_identifier() {
			return Ok(Expr::Literal(text));
		}
		if self.eat(TokenKind::Not) {
			return Ok(Expr::not(self.negation()?));
		}
		if self.eat(TokenKind::LParen) {
			let expr = self.disjunction()?;
			self.expect(TokenKind::RParen)?;
			return Ok(expr);
		}
		Err(MalformedQuery)
	}
}
