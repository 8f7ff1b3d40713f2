use thiserror::Error;

use crate::options::ParseOptions;
use crate::tokenize::{Lexeme, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Members in source order, duplicates included.
    Object(Vec<ObjectAttr>),
    Array(Vec<SyntaxNode>),
    Literal(Literal),
}

/// A `key: value` member. The key is always a text [`Literal`] when built by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAttr {
    pub key: SyntaxNode,
    pub value: SyntaxNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    String(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected {expected} at position {position}, found {found}")]
    UnexpectedToken {
        position: usize,
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("expected a value at position {position}, found {found}")]
    ExpectedValue { position: usize, found: TokenKind },
    #[error("nesting deeper than {limit} levels at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::ExpectedValue { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => *position,
        }
    }
}

type ParseResult = Result<SyntaxNode, SyntaxError>;

/// Builds the syntax tree for a document. `end` is the position reported when
/// the token sequence runs out, normally the length of the source in characters.
///
/// The document must be exactly one object:
///
/// ```text
/// document := object
/// object   := '{' '}' | '{' member (',' member)* '}'
/// member   := string ':' value
/// array    := '[' ']' | '[' value (',' value)* ']'
/// value    := string | object | array | true | false | null
/// ```
pub fn parse(tokens: &[Lexeme], end: usize, options: &ParseOptions) -> ParseResult {
    let mut cursor = Cursor {
        tokens,
        index: 0,
        end,
        depth: 0,
        max_depth: options.max_depth,
    };

    let root = parse_object(&mut cursor)?;
    cursor.expect(TokenKind::EndOfInput)?;

    Ok(root)
}

/// Parser state local to one call.
struct Cursor<'t> {
    tokens: &'t [Lexeme],
    index: usize,
    end: usize,
    depth: usize,
    max_depth: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|lexeme| &lexeme.token)
    }

    fn kind(&self) -> TokenKind {
        self.peek().map_or(TokenKind::EndOfInput, Token::kind)
    }

    fn position(&self) -> usize {
        self.tokens
            .get(self.index)
            .map_or(self.end, |lexeme| lexeme.position)
    }

    fn advance(&mut self) {
        self.index += 1;
    }

    /// Consumes the current token if it has the `expected` kind.
    fn expect(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        let found = self.kind();
        if found != expected {
            return Err(SyntaxError::UnexpectedToken {
                position: self.position(),
                expected,
                found,
            });
        }
        if found != TokenKind::EndOfInput {
            self.advance();
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<(), SyntaxError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                position: self.position(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

fn parse_object(cursor: &mut Cursor) -> ParseResult {
    cursor.enter()?;
    cursor.expect(TokenKind::ObjectOpen)?;

    let mut attrs = Vec::new();
    if cursor.peek() == Some(&Token::ObjectClose) {
        cursor.advance();
        cursor.leave();
        return Ok(SyntaxNode::Object(attrs));
    }

    loop {
        let key = parse_string(cursor)?;
        cursor.expect(TokenKind::Colon)?;
        let value = parse_value(cursor)?;
        attrs.push(ObjectAttr { key, value });

        if cursor.peek() == Some(&Token::Comma) {
            cursor.advance();
            continue;
        }
        break;
    }

    cursor.expect(TokenKind::ObjectClose)?;
    cursor.leave();
    Ok(SyntaxNode::Object(attrs))
}

fn parse_array(cursor: &mut Cursor) -> ParseResult {
    cursor.enter()?;
    cursor.expect(TokenKind::ArrayOpen)?;

    let mut elements = Vec::new();
    if cursor.peek() == Some(&Token::ArrayClose) {
        cursor.advance();
        cursor.leave();
        return Ok(SyntaxNode::Array(elements));
    }

    loop {
        elements.push(parse_value(cursor)?);

        if cursor.peek() == Some(&Token::Comma) {
            cursor.advance();
            continue;
        }
        break;
    }

    cursor.expect(TokenKind::ArrayClose)?;
    cursor.leave();
    Ok(SyntaxNode::Array(elements))
}

fn parse_string(cursor: &mut Cursor) -> ParseResult {
    match cursor.peek() {
        Some(Token::StringLiteral(s)) => {
            let node = SyntaxNode::Literal(Literal::String(s.clone()));
            cursor.advance();
            Ok(node)
        }
        _ => Err(SyntaxError::UnexpectedToken {
            position: cursor.position(),
            expected: TokenKind::StringLiteral,
            found: cursor.kind(),
        }),
    }
}

fn parse_value(cursor: &mut Cursor) -> ParseResult {
    let literal = match cursor.peek() {
        Some(Token::StringLiteral(_)) => return parse_string(cursor),
        Some(Token::ObjectOpen) => return parse_object(cursor),
        Some(Token::ArrayOpen) => return parse_array(cursor),
        Some(Token::True) => Literal::Boolean(true),
        Some(Token::False) => Literal::Boolean(false),
        Some(Token::Null) => Literal::Null,
        _ => {
            return Err(SyntaxError::ExpectedValue {
                position: cursor.position(),
                found: cursor.kind(),
            })
        }
    };

    cursor.advance();
    Ok(SyntaxNode::Literal(literal))
}
