use std::fmt;

use thiserror::Error;

/// Characters of source shown on either side of a lexing failure.
const CONTEXT_RADIUS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    ObjectOpen,
    /// `}`
    ObjectClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// Key of the key/value pair or a string value, taken verbatim
    StringLiteral(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::ObjectOpen => TokenKind::ObjectOpen,
            Token::ObjectClose => TokenKind::ObjectClose,
            Token::ArrayOpen => TokenKind::ArrayOpen,
            Token::ArrayClose => TokenKind::ArrayClose,
            Token::Colon => TokenKind::Colon,
            Token::Comma => TokenKind::Comma,
            Token::Null => TokenKind::Null,
            Token::False => TokenKind::False,
            Token::True => TokenKind::True,
            Token::StringLiteral(_) => TokenKind::StringLiteral,
        }
    }
}

/// Payload-free discriminant of a [`Token`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Colon,
    Comma,
    Null,
    False,
    True,
    StringLiteral,
    /// No token: the sequence ran out.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::ObjectOpen => "`{`",
            TokenKind::ObjectClose => "`}`",
            TokenKind::ArrayOpen => "`[`",
            TokenKind::ArrayClose => "`]`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Null => "`null`",
            TokenKind::False => "`false`",
            TokenKind::True => "`true`",
            TokenKind::StringLiteral => "string literal",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A token together with the character offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {character:?} at position {position} near `{context}`")]
    UnexpectedCharacter {
        position: usize,
        character: char,
        context: String,
    },
    #[error("unterminated string starting at position {position} near `{context}`")]
    UnterminatedString {
        position: usize,
        character: char,
        context: String,
    },
    #[error("expected `{expected}` at position {position} near `{context}`")]
    InvalidKeyword {
        position: usize,
        character: char,
        expected: &'static str,
        context: String,
    },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::UnterminatedString { position, .. }
            | LexError::InvalidKeyword { position, .. } => *position,
        }
    }

    /// The character the failing token starts with.
    pub fn character(&self) -> char {
        match self {
            LexError::UnexpectedCharacter { character, .. }
            | LexError::UnterminatedString { character, .. }
            | LexError::InvalidKeyword { character, .. } => *character,
        }
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, LexError> {
    let chars: Vec<char> = input.chars().collect();
    let mut index = 0;

    let mut tokens = Vec::new();

    while index < chars.len() {
        let ch = chars[index];
        if matches!(ch, ' ' | '\t' | '\n' | '\r') {
            index += 1;
            continue;
        }

        let position = index;
        let token = make_token(&chars, &mut index)?;
        tracing::trace!(position, kind = %token.kind(), "token");
        tokens.push(Lexeme { token, position });
    }

    Ok(tokens)
}

/// Lexes the token starting at `index` and leaves `index` just past it.
fn make_token(chars: &[char], index: &mut usize) -> Result<Token, LexError> {
    let ch = chars[*index];

    let token = match ch {
        '{' => Token::ObjectOpen,
        '}' => Token::ObjectClose,
        '[' => Token::ArrayOpen,
        ']' => Token::ArrayClose,
        ':' => Token::Colon,
        ',' => Token::Comma,
        '"' => return tokenize_string(chars, index),
        't' => return tokenize_keyword("true", Token::True, chars, index),
        'f' => return tokenize_keyword("false", Token::False, chars, index),
        'n' => return tokenize_keyword("null", Token::Null, chars, index),
        _ => {
            return Err(LexError::UnexpectedCharacter {
                position: *index,
                character: ch,
                context: context(chars, *index),
            })
        }
    };

    *index += 1;
    Ok(token)
}

fn tokenize_keyword(
    keyword: &'static str,
    token: Token,
    chars: &[char],
    index: &mut usize,
) -> Result<Token, LexError> {
    let start = *index;
    let matches = keyword
        .chars()
        .enumerate()
        .all(|(offset, expected)| chars.get(start + offset) == Some(&expected));

    if !matches {
        return Err(LexError::InvalidKeyword {
            position: start,
            character: chars[start],
            expected: keyword,
            context: context(chars, start),
        });
    }

    *index += keyword.len();
    Ok(token)
}

fn tokenize_string(chars: &[char], index: &mut usize) -> Result<Token, LexError> {
    let start = *index;
    let mut string = String::new();

    // skip the opening quote
    *index += 1;
    loop {
        match chars.get(*index) {
            Some('"') => break,
            Some(&ch) => string.push(ch),
            None => {
                return Err(LexError::UnterminatedString {
                    position: start,
                    character: '"',
                    context: context(chars, start),
                })
            }
        }
        *index += 1;
    }
    // skip the closing quote
    *index += 1;

    Ok(Token::StringLiteral(string))
}

fn context(chars: &[char], position: usize) -> String {
    let start = position.saturating_sub(CONTEXT_RADIUS);
    let end = (position + CONTEXT_RADIUS + 1).min(chars.len());
    chars[start..end].iter().collect()
}
