//! Formula tokenizer.
//!
//! Turns a formula string into a flat stream of [`Token`]s terminated by [`TokenKind::End`].
//!
//! # Accepted spellings
//!
//! | Kind      | Spellings                  |
//! |-----------|----------------------------|
//! | `Iff`     | `<->`, `↔`                 |
//! | `Implies` | `->`, `→`                  |
//! | `And`     | `^`, `/\`, `&&`, `∧`       |
//! | `Or`      | `\|`, `\/`, `\|\|`, `∨`    |
//! | `Not`     | `~`, `!`, `¬`              |
//! | `True`    | `T`, `⊤`                   |
//! | `False`   | `F`, `⊥`                   |
//! | `Var`     | `[A-Za-z_][A-Za-z0-9_]*`   |
//!
//! Longer spellings win over shorter ones at the same position, so `||` is a single `Or`.
//! Constants are tried before identifiers, so a variable cannot start with `T` or `F`.
//!
//! ```
//! use fitch_rs::token::{tokenize, TokenKind};
//!
//! let tokens = tokenize("p -> ~q").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Var, TokenKind::Implies, TokenKind::Not, TokenKind::Var, TokenKind::End]
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    LParen,
    RParen,
    And,
    Or,
    Implies,
    Iff,
    Not,
    Var,
    True,
    False,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Implies => "IMPLIES",
            TokenKind::Iff => "IFF",
            TokenKind::Not => "NOT",
            TokenKind::Var => "VAR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::End => "END",
        };
        write!(f, "{}", s)
    }
}

/// A single lexeme.
///
/// `text` is the exact source spelling (empty for `End`), `offset` is its byte position.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "end of input")
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}

/// An unrecognized character.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LexError {
    pub character: char,
    /// Byte offset of `character` in the input.
    pub offset: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected character '{}' at position {}", self.character, self.offset)
    }
}

impl std::error::Error for LexError {}

const FIXED: &[(&str, TokenKind)] = &[
    // 3 chars
    ("<->", TokenKind::Iff),
    // 2 chars
    ("->", TokenKind::Implies),
    ("/\\", TokenKind::And),
    ("&&", TokenKind::And),
    ("\\/", TokenKind::Or),
    ("||", TokenKind::Or),
    // 1 char
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("^", TokenKind::And),
    ("∧", TokenKind::And),
    ("|", TokenKind::Or),
    ("∨", TokenKind::Or),
    ("~", TokenKind::Not),
    ("¬", TokenKind::Not),
    ("!", TokenKind::Not),
    ("→", TokenKind::Implies),
    ("↔", TokenKind::Iff),
    // constants, ahead of identifiers: `Tx` is `T` then `x`
    ("T", TokenKind::True),
    ("⊤", TokenKind::True),
    ("F", TokenKind::False),
    ("⊥", TokenKind::False),
];

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lazy tokenizer over a borrowed input.
///
/// Yields `Ok(token)` for every lexeme, then a single `End` token, then `None`.
/// After an `Err` the iterator is exhausted. A fresh `Tokenizer` is needed to start over.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            done: false,
        }
    }

    /// Current byte position of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = &self.input[start..];

        let Some(c) = rest.chars().next() else {
            return Ok(Token::new(TokenKind::End, "", start));
        };

        for &(spelling, kind) in FIXED {
            if rest.starts_with(spelling) {
                self.pos += spelling.len();
                return Ok(Token::new(kind, spelling, start));
            }
        }

        if is_ident_start(c) {
            let len = rest.find(|ch: char| !is_ident_continue(ch)).unwrap_or(rest.len());
            let word = &rest[..len];
            self.pos += len;
            return Ok(Token::new(TokenKind::Var, word, start));
        }

        Err(LexError {
            character: c,
            offset: start,
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if !token.is_end() => {}
            _ => self.done = true,
        }
        Some(result)
    }
}

/// Tokenizes the whole input. The returned vector always ends with an `End` token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(input).collect()
}
