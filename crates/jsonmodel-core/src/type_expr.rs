//! Type expressions: a compact text notation for [`TypeRef`] values.
//!
//! Model descriptions and test fixtures write type handles as text instead
//! of nested JSON objects.
//!
//! # Syntax
//!
//! - `int`, `boolean`, ...: primitive
//! - `com.acme.Person`: declared type
//! - `java.util.Map<java.lang.String, com.acme.Person>`: generic arguments
//! - `com.acme.Person[]`: array (repeatable, `int[][]`)
//! - `$T`, `$T extends com.acme.Base`: type variable with optional upper bound
//! - `?`, `? extends com.acme.Base`, `? super com.acme.Base`: wildcard
//!
//! # Example
//!
//! ```
//! use jsonmodel_core::{TypeRef, type_expr::parse};
//!
//! let ty = parse("java.util.List<com.acme.Person>").unwrap();
//! assert_eq!(
//!     ty,
//!     TypeRef::generic("java.util.List", [TypeRef::declared("com.acme.Person")])
//! );
//! ```

use std::ops::Range;

use logos::Logos;

use crate::{PrimitiveKind, TypeRef};

/// Deepest nesting of type arguments and bounds accepted.
pub const MAX_DEPTH: usize = 64;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum Token<'src> {
    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token(",")]
    Comma,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("?")]
    Question,

    #[token("extends")]
    Extends,

    #[token("super")]
    Super,

    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*", |lex| &lex.slice()[1..])]
    TypeVar(&'src str),

    #[regex(r"[A-Za-z_][A-Za-z0-9_$]*(\.[A-Za-z_][A-Za-z0-9_$]*)*", |lex| lex.slice())]
    Name(&'src str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub span: Range<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
    depth: usize,
    input: &'src str,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str) -> Result<Self, ParseError> {
        let lexer = Token::lexer(input);
        let mut tokens = Vec::new();

        for (result, span) in lexer.spanned() {
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(_) => {
                    return Err(ParseError {
                        message: format!("unexpected character: {:?}", &input[span.clone()]),
                        span,
                    });
                }
            }
        }

        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
            input,
        })
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, s)| s.clone())
            .unwrap_or(self.input.len()..self.input.len())
    }

    fn eat(&mut self, expected: &Token<'src>) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: Token<'src>) -> Result<(), ParseError> {
        let span = self.current_span();
        match self.advance() {
            Some(t) if t == expected => Ok(()),
            Some(t) => Err(ParseError {
                message: format!("expected {:?}, got {:?}", expected, t),
                span,
            }),
            None => Err(ParseError {
                message: format!("expected {:?}, got EOF", expected),
                span,
            }),
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(ParseError {
                message: format!("type nested deeper than {MAX_DEPTH} levels"),
                span: self.current_span(),
            });
        }
        self.depth += 1;
        let result = self.parse_type_inner();
        self.depth -= 1;
        result
    }

    fn parse_type_inner(&mut self) -> Result<TypeRef, ParseError> {
        if self.eat(&Token::Question) {
            return self.parse_wildcard_bounds();
        }

        let mut ty = self.parse_base()?;
        while self.eat(&Token::LBracket) {
            self.expect(Token::RBracket)?;
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    fn parse_wildcard_bounds(&mut self) -> Result<TypeRef, ParseError> {
        let mut extends = None;
        let mut super_ = None;
        if self.eat(&Token::Extends) {
            extends = Some(Box::new(self.parse_type()?));
        } else if self.eat(&Token::Super) {
            super_ = Some(Box::new(self.parse_type()?));
        }
        Ok(TypeRef::Wildcard { extends, super_ })
    }

    fn parse_base(&mut self) -> Result<TypeRef, ParseError> {
        let span = self.current_span();
        match self.advance() {
            Some(Token::TypeVar(name)) => {
                let bound = if self.eat(&Token::Extends) {
                    Some(Box::new(self.parse_type()?))
                } else {
                    None
                };
                Ok(TypeRef::TypeVar {
                    name: name.to_string(),
                    bound,
                })
            }
            Some(Token::Name(name)) => {
                if let Some(primitive) = PrimitiveKind::from_name(name) {
                    return Ok(TypeRef::Primitive(primitive));
                }
                let args = if self.eat(&Token::LAngle) {
                    self.parse_type_args()?
                } else {
                    Vec::new()
                };
                Ok(TypeRef::Declared {
                    name: name.to_string(),
                    args,
                })
            }
            Some(t) => Err(ParseError {
                message: format!("expected type, got {:?}", t),
                span,
            }),
            None => Err(ParseError {
                message: "expected type, got EOF".to_string(),
                span,
            }),
        }
    }

    fn parse_type_args(&mut self) -> Result<Vec<TypeRef>, ParseError> {
        let mut args = vec![self.parse_type()?];
        while self.eat(&Token::Comma) {
            args.push(self.parse_type()?);
        }
        self.expect(Token::RAngle)?;
        Ok(args)
    }

    fn finish(&self) -> Result<(), ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(ParseError {
                message: format!("unexpected trailing {:?}", t),
                span: self.current_span(),
            }),
        }
    }
}

/// Parse a single type expression.
pub fn parse(input: &str) -> Result<TypeRef, ParseError> {
    let mut parser = Parser::new(input)?;
    let ty = parser.parse_type()?;
    parser.finish()?;
    Ok(ty)
}
