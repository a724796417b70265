//! Tokenizer for the truth-table language.
//!
//! Built on [`logos`]. Whitespace and `#` line comments are skipped; every
//! produced [`Token`] carries the 1-based line and column of its first
//! character. The stream always ends with a [`TokenKind::Eof`] token.

use std::fmt;

use logos::Logos;

use crate::error::LexError;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    #[token("var")]
    Var,
    #[token("show")]
    Show,
    #[token("show_ones")]
    ShowOnes,
    #[token("not")]
    Not,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("True")]
    True,
    #[token("False")]
    False,
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_owned())]
    Ident(String),
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Equal,
    #[token(";")]
    Semicolon,
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
}

/// Kind of a token, with the identifier text where there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Var,
    Show,
    ShowOnes,
    Not,
    And,
    Or,
    True,
    False,
    Ident(String),
    LParen,
    RParen,
    Equal,
    Semicolon,
    Eof,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Var => TokenKind::Var,
            Lexeme::Show => TokenKind::Show,
            Lexeme::ShowOnes => TokenKind::ShowOnes,
            Lexeme::Not => TokenKind::Not,
            Lexeme::And => TokenKind::And,
            Lexeme::Or => TokenKind::Or,
            Lexeme::True => TokenKind::True,
            Lexeme::False => TokenKind::False,
            Lexeme::Ident(name) => TokenKind::Ident(name),
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::Equal => TokenKind::Equal,
            Lexeme::Semicolon => TokenKind::Semicolon,
            Lexeme::Comment => unreachable!("comments are skipped by the lexer"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Var => write!(f, "'var'"),
            TokenKind::Show => write!(f, "'show'"),
            TokenKind::ShowOnes => write!(f, "'show_ones'"),
            TokenKind::Not => write!(f, "'not'"),
            TokenKind::And => write!(f, "'and'"),
            TokenKind::Or => write!(f, "'or'"),
            TokenKind::True => write!(f, "'True'"),
            TokenKind::False => write!(f, "'False'"),
            TokenKind::Ident(name) => write!(f, "identifier '{}'", name),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Equal => write!(f, "'='"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Pull-based tokenizer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Lexeme>,
    source: &'src str,
    /// Byte offset up to which `line` and `line_start` are known.
    scanned: usize,
    line: usize,
    line_start: usize,
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Lexeme::lexer(source),
            source,
            scanned: 0,
            line: 1,
            line_start: 0,
            done: false,
        }
    }

    /// Line and column of the byte at `offset`.
    ///
    /// Offsets must be requested in non-decreasing order.
    fn position(&mut self, offset: usize) -> (usize, usize) {
        for (i, ch) in self.source[self.scanned..offset].char_indices() {
            if ch == '\n' {
                self.line += 1;
                self.line_start = self.scanned + i + 1;
            }
        }
        self.scanned = offset;
        let column = self.source[self.line_start..offset].chars().count() + 1;
        (self.line, column)
    }

    /// Produce the next token.
    ///
    /// After the end of input is reached, keeps returning [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.inner.next() {
            Some(Ok(lexeme)) => {
                let (line, column) = self.position(self.inner.span().start);
                Ok(Token {
                    kind: lexeme.into(),
                    line,
                    column,
                })
            }
            Some(Err(())) => {
                let (line, column) = self.position(self.inner.span().start);
                let ch = self.inner.slice().chars().next().unwrap_or('\0');
                Err(LexError::UnexpectedCharacter { ch, line, column })
            }
            None => {
                let (line, column) = self.position(self.source.len());
                Ok(Token {
                    kind: TokenKind::Eof,
                    line,
                    column,
                })
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including the end-of-input token, or up to the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_token();
        match &item {
            Ok(token) if !token.is_eof() => {}
            _ => self.done = true,
        }
        Some(item)
    }
}
