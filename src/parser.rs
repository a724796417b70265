//! Recursive-descent parser.
//!
//! Grammar:
//!
//! ```text
//! program     := instruction* EOF
//! instruction := "var" ids ";"
//!              | IDENT "=" expr ";"
//!              | "show" ids ";"
//!              | "show_ones" ids ";"
//! ids         := IDENT+
//! expr        := unary (("and" | "or") unary)*
//! unary       := "not" unary | atom
//! atom        := "(" expr ")" | "True" | "False" | IDENT
//! ```
//!
//! `and` and `or` share one precedence level and associate to the left, so
//! `a or b and c` is `(a or b) and c`.

use crate::ast::{ExprArena, ExprId, Instruction, Program};
use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Token, TokenKind};

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    arena: ExprArena,
}

impl<'src> Parser<'src> {
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            arena: ExprArena::new(),
        })
    }

    /// Parse the whole token stream into a [`Program`].
    pub fn parse(mut self) -> Result<Program> {
        let mut instructions = Vec::new();
        while !self.current.is_eof() {
            instructions.push(self.instruction()?);
        }
        log::debug!(
            "parsed {} instructions, {} expression nodes",
            instructions.len(),
            self.arena.len()
        );
        Ok(Program {
            arena: self.arena,
            instructions,
        })
    }

    /// Move to the next token, returning the current one.
    fn bump(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn error(&self, expected: &str) -> ParseError {
        ParseError::unexpected(
            expected,
            self.current.kind.to_string(),
            self.current.line,
            self.current.column,
        )
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if self.current.kind == kind {
            self.bump()?;
            Ok(())
        } else {
            Err(self.error(&kind.to_string()).into())
        }
    }

    fn ident(&mut self) -> Result<String> {
        if let TokenKind::Ident(_) = self.current.kind {
            if let TokenKind::Ident(name) = self.bump()?.kind {
                return Ok(name);
            }
        }
        Err(self.error("identifier").into())
    }

    fn instruction(&mut self) -> Result<Instruction> {
        match self.current.kind {
            TokenKind::Var => {
                self.bump()?;
                let names = self.ids()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Instruction::Declare(names))
            }
            TokenKind::Show => {
                self.bump()?;
                let outputs = self.ids()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Instruction::Show(outputs))
            }
            TokenKind::ShowOnes => {
                self.bump()?;
                let outputs = self.ids()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Instruction::ShowOnes(outputs))
            }
            TokenKind::Ident(_) => {
                let name = self.ident()?;
                self.expect(TokenKind::Equal)?;
                let expr = self.expr()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Instruction::Assign { name, expr })
            }
            _ => Err(self.error("'var', 'show', 'show_ones' or identifier").into()),
        }
    }

    fn ids(&mut self) -> Result<Vec<String>> {
        let mut names = vec![self.ident()?];
        while let TokenKind::Ident(_) = self.current.kind {
            names.push(self.ident()?);
        }
        Ok(names)
    }

    fn expr(&mut self) -> Result<ExprId> {
        let mut lhs = self.unary()?;
        loop {
            match self.current.kind {
                TokenKind::And => {
                    self.bump()?;
                    let rhs = self.unary()?;
                    lhs = self.arena.mk_and(lhs, rhs);
                }
                TokenKind::Or => {
                    self.bump()?;
                    let rhs = self.unary()?;
                    lhs = self.arena.mk_or(lhs, rhs);
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<ExprId> {
        if self.current.kind == TokenKind::Not {
            self.bump()?;
            let inner = self.unary()?;
            Ok(self.arena.mk_not(inner))
        } else {
            self.atom()
        }
    }

    fn atom(&mut self) -> Result<ExprId> {
        match self.current.kind {
            TokenKind::LParen => {
                self.bump()?;
                let inner = self.expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::True => {
                self.bump()?;
                Ok(self.arena.mk_const(true))
            }
            TokenKind::False => {
                self.bump()?;
                Ok(self.arena.mk_const(false))
            }
            TokenKind::Ident(_) => {
                let name = self.ident()?;
                Ok(self.arena.mk_var(name))
            }
            _ => Err(self.error("identifier, 'True', 'False' or '('").into()),
        }
    }
}

/// Tokenize and parse `source`.
pub fn parse(source: &str) -> Result<Program> {
    Parser::new(Lexer::new(source))?.parse()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::{Error, LexError};

    fn parse_expr(source: &str) -> String {
        let program = parse(&format!("x = {};", source)).unwrap();
        match &program.instructions[0] {
            Instruction::Assign { expr, .. } => program.arena.display(*expr).to_string(),
            other => panic!("unexpected instruction {:?}", other),
        }
    }

    #[test]
    fn test_instructions() {
        let program = parse("var a b;\nc = a and b;\nshow c;\nshow_ones c a;").unwrap();
        assert_eq!(program.instructions.len(), 4);
        assert_eq!(
            program.instructions[0],
            Instruction::Declare(vec!["a".to_string(), "b".to_string()])
        );
        assert!(matches!(&program.instructions[1], Instruction::Assign { name, .. } if name == "c"));
        assert_eq!(program.instructions[2], Instruction::Show(vec!["c".to_string()]));
        assert_eq!(
            program.instructions[3],
            Instruction::ShowOnes(vec!["c".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn test_empty_program() {
        let program = parse("  # nothing here\n").unwrap();
        assert!(program.instructions.is_empty());
        assert!(program.arena.is_empty());
    }

    #[test]
    fn test_left_associative_chain() {
        assert_eq!(parse_expr("a or b and c"), "((a or b) and c)");
        assert_eq!(parse_expr("a and b and c"), "((a and b) and c)");
    }

    #[test]
    fn test_not_binds_tightest() {
        assert_eq!(parse_expr("not a and b"), "(not a and b)");
        assert_eq!(parse_expr("a or not b"), "(a or not b)");
        assert_eq!(parse_expr("not not a"), "not not a");
        assert_eq!(parse_expr("not (a or b)"), "not (a or b)");
    }

    #[test]
    fn test_parentheses_and_constants() {
        assert_eq!(parse_expr("a and (b or True)"), "(a and (b or True))");
        assert_eq!(parse_expr("((False))"), "False");
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse("var a\nshow a;").unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::unexpected("';'", "'show'", 2, 1))
        );
    }

    #[test]
    fn test_empty_id_list() {
        let err = parse("var ;").unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::unexpected("identifier", "';'", 1, 5)));
    }

    #[test]
    fn test_bad_atom() {
        let err = parse("x = a and ;").unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::unexpected("identifier, 'True', 'False' or '('", "';'", 1, 11))
        );
    }

    #[test]
    fn test_unclosed_paren() {
        let err = parse("x = (a or b;").unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::unexpected("')'", "';'", 1, 12)));
    }

    #[test]
    fn test_bad_instruction_start() {
        let err = parse("= a;").unwrap_err();
        assert_eq!(
            err,
            Error::Parse(ParseError::unexpected(
                "'var', 'show', 'show_ones' or identifier",
                "'='",
                1,
                1
            ))
        );
    }

    #[test]
    fn test_lex_error_propagates() {
        let err = parse("var a;\nx = a | a;").unwrap_err();
        assert_eq!(
            err,
            Error::Lex(LexError::UnexpectedCharacter {
                ch: '|',
                line: 2,
                column: 7
            })
        );
    }
}
