use log::{debug, warn};

use crate::expression::{Expression, Operator};
use crate::parser::constants::MAX_DEPTH;
use crate::parser::errors::ParseError;
use crate::parser::lexer::{Token, TokenKind};

/// Recursive-descent parser over a token slice.
///
/// ```text
/// expr   := term (('+' | '-') term)*
/// term   := factor (('*' | '/') factor)*
/// factor := '-' factor | number | '(' expr ')'
/// ```
///
/// Both the recursion depth and the depth of the built tree are capped at
/// [`MAX_DEPTH`], so hostile input fails with [`ParseError::TooDeep`]
/// rather than exhausting the stack here or in later tree walks.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    nesting: usize,
}

/// A parsed subtree together with its depth.
type Parsed = (Expression, usize);

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            nesting: 0,
        }
    }

    /// Parses the whole token stream as one expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokens do not form exactly one expression or
    /// nest deeper than [`MAX_DEPTH`].
    pub fn parse(mut self) -> Result<Expression, ParseError> {
        let (expr, _) = self.expression()?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(unexpected(token)),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Byte offset of the current token, or of the last one at end of input.
    fn position(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or(self.tokens.last())
            .map_or(0, |token| token.position)
    }

    fn too_deep(&self) -> ParseError {
        warn!("Expression nests deeper than {}", MAX_DEPTH);
        ParseError::TooDeep {
            limit: MAX_DEPTH,
            position: self.position(),
        }
    }

    fn peek_operator(&self, accepted: [Operator; 2]) -> Option<Operator> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) if accepted.contains(op) => Some(*op),
            _ => None,
        }
    }

    fn combine(&self, op: Operator, left: Parsed, right: Parsed) -> Result<Parsed, ParseError> {
        let depth = 1 + left.1.max(right.1);
        if depth > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok((Expression::binary(op, left.0, right.0), depth))
    }

    fn expression(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.term()?;
        while let Some(op) = self.peek_operator([Operator::Add, Operator::Subtract]) {
            self.pos += 1;
            let right = self.term()?;
            left = self.combine(op, left, right)?;
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.factor()?;
        while let Some(op) = self.peek_operator([Operator::Multiply, Operator::Divide]) {
            self.pos += 1;
            let right = self.factor()?;
            left = self.combine(op, left, right)?;
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Parsed, ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(self.too_deep());
        }
        self.nesting += 1;
        let result = self.nested_factor();
        self.nesting -= 1;
        result
    }

    fn nested_factor(&mut self) -> Result<Parsed, ParseError> {
        let token = self.advance().ok_or(ParseError::UnexpectedEnd)?;
        match &token.kind {
            TokenKind::Number(n) => Ok((Expression::number(*n), 1)),
            TokenKind::Operator(Operator::Subtract) => {
                let (inner, depth) = self.factor()?;
                if inner.is_leaf() {
                    return Ok((negate(inner), depth));
                }
                if depth + 1 > MAX_DEPTH {
                    return Err(self.too_deep());
                }
                Ok((negate(inner), depth + 1))
            }
            TokenKind::LeftParen => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Token {
                        kind: TokenKind::RightParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

/// A negated literal folds into the literal; anything else is scaled by -1.
fn negate(expr: Expression) -> Expression {
    match expr {
        Expression::Number(n) => Expression::number(-n),
        other => {
            debug!("Negating compound expression: {}", other);
            Expression::multiply(Expression::number(-1.0), other)
        }
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.to_string(),
        position: token.position,
    }
}
