//! Reading vectors back from their text form.
//!
//! Accepts exactly what `Display` and [`Expr::named`](crate::Expr::named)
//! produce, with free whitespace:
//!
//! ```text
//! literal   := ident? '(' component (',' component)* ')'
//! component := number | ident        (ident covers NaN, inf, true, false)
//! ```
//!
//! Each component is read with the scalar type's own `FromStr`.

use crate::scalar::Scalar;
use crate::vector::Vector;
use crate::{Error, ParseError};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Lexer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token<'a> {
    Ident(&'a str),
    Number(&'a str),
    LParen,
    RParen,
    Comma,
    Eof,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) | Token::Number(s) => f.write_str(s),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Comma => f.write_str(","),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a numeric literal, including a leading sign, exponents and
    /// words such as `inf` after a sign.
    fn read_number(&mut self) -> &'a str {
        let start = self.pos;
        if matches!(self.peek_char(), Some('+' | '-')) {
            self.next_char();
        }
        let mut prev = None;
        while let Some(c) = self.peek_char() {
            let exponent_sign = matches!(c, '+' | '-') && matches!(prev, Some('e' | 'E'));
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || exponent_sign {
                self.next_char();
                prev = Some(c);
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    fn read_ident(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                self.next_char();
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    fn next_token(&mut self) -> Result<Token<'a>, ParseError> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            return Ok(Token::Eof);
        };

        match c {
            '(' => {
                self.next_char();
                Ok(Token::LParen)
            }
            ')' => {
                self.next_char();
                Ok(Token::RParen)
            }
            ',' => {
                self.next_char();
                Ok(Token::Comma)
            }
            '0'..='9' | '.' | '+' | '-' => Ok(Token::Number(self.read_number())),
            c if c.is_alphabetic() || c == '_' => Ok(Token::Ident(self.read_ident())),
            _ => Err(ParseError::UnexpectedChar(c)),
        }
    }
}

// ============================================================================
// Parser
// ============================================================================

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, expected: Token<'a>) -> Result<(), ParseError> {
        if self.current == expected {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.current {
            Token::Eof => ParseError::UnexpectedEnd,
            token => ParseError::UnexpectedToken(token.to_string()),
        }
    }

    fn parse_literal<T, const N: usize>(&mut self) -> Result<(&'a str, Vector<T, N>), ParseError>
    where
        T: Scalar + FromStr,
    {
        let name = match self.current {
            Token::Ident(name) => {
                self.advance()?;
                name
            }
            _ => "",
        };
        self.expect(Token::LParen)?;

        let mut data = [T::ZERO; N];
        let mut got = 0;
        if self.current != Token::RParen {
            loop {
                let text = match self.current {
                    Token::Number(text) | Token::Ident(text) => text,
                    _ => return Err(self.unexpected()),
                };
                let value = text
                    .parse::<T>()
                    .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
                if let Some(slot) = data.get_mut(got) {
                    *slot = value;
                }
                got += 1;
                self.advance()?;

                match self.current {
                    Token::Comma => self.advance()?,
                    Token::RParen => break,
                    _ => return Err(self.unexpected()),
                }
            }
        }
        self.expect(Token::RParen)?;
        self.expect(Token::Eof)?;

        if got != N {
            return Err(ParseError::ComponentCount { expected: N, got });
        }
        Ok((name, Vector::new(data)))
    }
}

// ============================================================================
// Public API
// ============================================================================

impl<T: Scalar + FromStr, const N: usize> Vector<T, N> {
    /// Parses `name(v0, v1, ...)`, returning the name (empty if absent).
    ///
    /// ```
    /// use dandy_core::{Vector, vec3};
    ///
    /// let (name, v) = Vector::<i32, 3>::parse_named("Point(1, -2, 3)").unwrap();
    /// assert_eq!(name, "Point");
    /// assert_eq!(v, vec3(1, -2, 3));
    /// ```
    pub fn parse_named(input: &str) -> Result<(&str, Self), Error> {
        Parser::new(input)
            .and_then(|mut parser| parser.parse_literal())
            .map_err(|err| {
                tracing::trace!(input, %err, "rejected vector literal");
                Error::Parse(err)
            })
    }
}

impl<T: Scalar + FromStr, const N: usize> FromStr for Vector<T, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse_named(s).map(|(_, v)| v)
    }
}

// ============================================================================
// Tests
// ============================================================================
