//! Recursive-descent formula parser.
//!
//! Grammar, weakest binding first:
//!
//! ```text
//! iff     := implies (IFF implies)*        left-associative
//! implies := or (IMPLIES implies)?         right-associative
//! or      := and (OR and)*                 left-associative
//! and     := not (AND not)*                left-associative
//! not     := NOT not | atom
//! atom    := VAR | TRUE | FALSE | LPAREN iff RPAREN
//! ```
//!
//! Note the asymmetry: `p -> q -> r` is `p -> (q -> r)`, while `p <-> q <-> r` is
//! `(p <-> q) <-> r`. Both are intended.
//!
//! Nesting is capped at [`MAX_DEPTH`], both for parentheses and for the height of the resulting
//! tree, so every formula that comes out of the parser can be printed, evaluated and dropped
//! without exhausting the stack.

use std::fmt;

use log::debug;

use crate::formula::Formula;
use crate::render::RenderConfig;
use crate::token::{tokenize, LexError, Token, TokenKind};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A token that cannot start or continue the current production.
    UnexpectedToken { found: Token, expected: &'static str },
    /// Input ended where an operand was required.
    UnexpectedEnd { expected: &'static str },
    /// `(` without its `)`; `offset` points at the opening parenthesis.
    MissingClosingParen { offset: usize, found: Token },
    /// A complete formula followed by more tokens.
    TrailingInput { found: Token },
    /// Nesting beyond [`MAX_DEPTH`]; `offset` is where the limit was hit.
    TooDeep { offset: usize, limit: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { found, expected } => {
                write!(f, "Unexpected token {} at position {}, expected {}", found, found.offset, expected)
            }
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "Unexpected end of input, expected {}", expected)
            }
            ParseError::MissingClosingParen { offset, found } => {
                write!(
                    f,
                    "Missing ')' for '(' at position {}, found {}",
                    offset, found
                )
            }
            ParseError::TrailingInput { found } => {
                write!(f, "Unexpected token {} at position {} after complete formula", found, found.offset)
            }
            ParseError::TooDeep { offset, limit } => {
                write!(f, "Formula nested deeper than {} levels at position {}", limit, offset)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Any failure turning a string into a [`Formula`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FormulaError {
    Lex(LexError),
    Parse(ParseError),
}

impl From<LexError> for FormulaError {
    fn from(e: LexError) -> Self {
        FormulaError::Lex(e)
    }
}

impl From<ParseError> for FormulaError {
    fn from(e: ParseError) -> Self {
        FormulaError::Parse(e)
    }
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::Lex(e) => write!(f, "{}", e),
            FormulaError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormulaError::Lex(e) => Some(e),
            FormulaError::Parse(e) => Some(e),
        }
    }
}

/// Deepest nesting the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// A parsed subformula together with its height (leaves are 0).
type Parsed = (Formula, usize);

pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    end: Token,
    /// Open recursive productions: parentheses, negations, right sides of `->`.
    nesting: usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser over `tokens`. A missing trailing `End` is tolerated.
    pub fn new(tokens: &'t [Token]) -> Self {
        let end_offset = tokens.last().map_or(0, |t| t.offset + t.text.len());
        Self {
            tokens,
            pos: 0,
            end: Token::new(TokenKind::End, "", end_offset),
            nesting: 0,
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        let found = self.peek().clone();
        if found.is_end() {
            ParseError::UnexpectedEnd { expected }
        } else {
            ParseError::UnexpectedToken { found, expected }
        }
    }

    fn too_deep(&self) -> ParseError {
        ParseError::TooDeep {
            offset: self.peek().offset,
            limit: MAX_DEPTH,
        }
    }

    /// Enters a recursive production. Must be paired with [`Parser::leave`] on success.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.nesting >= MAX_DEPTH {
            return Err(self.too_deep());
        }
        self.nesting += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn binary(&self, op: fn(Formula, Formula) -> Formula, lhs: Parsed, rhs: Parsed) -> Result<Parsed, ParseError> {
        let height = lhs.1.max(rhs.1) + 1;
        if height > MAX_DEPTH {
            return Err(self.too_deep());
        }
        Ok((op(lhs.0, rhs.0), height))
    }

    /// Parses one complete formula; every token up to `End` must be consumed.
    pub fn parse(mut self) -> Result<Formula, ParseError> {
        let (formula, _) = self.parse_iff()?;
        if !self.at(TokenKind::End) {
            return Err(ParseError::TrailingInput {
                found: self.peek().clone(),
            });
        }
        Ok(formula)
    }

    fn parse_iff(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.parse_implies()?;
        while self.at(TokenKind::Iff) {
            self.bump();
            let right = self.parse_implies()?;
            left = self.binary(Formula::iff, left, right)?;
        }
        Ok(left)
    }

    fn parse_implies(&mut self) -> Result<Parsed, ParseError> {
        let left = self.parse_or()?;
        if self.at(TokenKind::Implies) {
            self.bump();
            self.enter()?;
            let right = self.parse_implies()?;
            self.leave();
            return self.binary(Formula::implies, left, right);
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.parse_and()?;
        while self.at(TokenKind::Or) {
            self.bump();
            let right = self.parse_and()?;
            left = self.binary(Formula::or, left, right)?;
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Parsed, ParseError> {
        let mut left = self.parse_not()?;
        while self.at(TokenKind::And) {
            self.bump();
            let right = self.parse_not()?;
            left = self.binary(Formula::and, left, right)?;
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Parsed, ParseError> {
        if self.at(TokenKind::Not) {
            self.bump();
            self.enter()?;
            let (inner, height) = self.parse_not()?;
            self.leave();
            if height + 1 > MAX_DEPTH {
                return Err(self.too_deep());
            }
            return Ok((Formula::not(inner), height + 1));
        }
        self.parse_atom()
    }

    fn parse_atom(&mut self) -> Result<Parsed, ParseError> {
        match self.peek().kind {
            TokenKind::Var => Ok((Formula::Var(self.bump().text), 0)),
            TokenKind::True => {
                self.bump();
                Ok((Formula::True, 0))
            }
            TokenKind::False => {
                self.bump();
                Ok((Formula::False, 0))
            }
            TokenKind::LParen => {
                let open = self.bump();
                self.enter()?;
                let inner = self.parse_iff()?;
                self.leave();
                if !self.at(TokenKind::RParen) {
                    return Err(ParseError::MissingClosingParen {
                        offset: open.offset,
                        found: self.peek().clone(),
                    });
                }
                self.bump();
                Ok(inner)
            }
            _ => Err(self.unexpected("a variable, a constant, '~' or '('")),
        }
    }
}

/// Parses a token stream produced by [`tokenize`].
pub fn parse(tokens: &[Token]) -> Result<Formula, ParseError> {
    Parser::new(tokens).parse()
}

/// Tokenizes and parses `input`.
pub fn parse_str(input: &str) -> Result<Formula, FormulaError> {
    debug!("parse_str(input = {:?})", input);
    let tokens = tokenize(input)?;
    let formula = parse(&tokens).inspect_err(|e| debug!("parse_str: {}", e))?;
    Ok(formula)
}

/// Result of [`parse_formula`]: display markup, or an error message.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct ParsedFormula {
    /// Rendered markup; empty when parsing failed.
    pub display: String,
    pub error: Option<String>,
}

impl ParsedFormula {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// UI-facing entry point: never fails, reports errors as text.
pub fn parse_formula(input: &str) -> ParsedFormula {
    parse_formula_with(input, &RenderConfig::default())
}

pub fn parse_formula_with(input: &str, config: &RenderConfig) -> ParsedFormula {
    match parse_str(input) {
        Ok(formula) => ParsedFormula {
            display: formula.to_display_with(config),
            error: None,
        },
        Err(e) => ParsedFormula {
            display: String::new(),
            error: Some(e.to_string()),
        },
    }
}
