use thiserror::Error;

use crate::materialize::{materialize, MaterializeError};
use crate::options::ParseOptions;
use crate::tokenize::{tokenize, LexError};
use crate::tree::{self, SyntaxError};
use crate::Value;

/// Parses a document with the default [`ParseOptions`].
pub fn parse_json(input: &str) -> Result<Value, ParseError> {
    parse_json_with(input, &ParseOptions::default())
}

pub fn parse_json_with(input: &str, options: &ParseOptions) -> Result<Value, ParseError> {
    let tokens = tokenize(input)?;
    tracing::debug!(tokens = tokens.len(), "tokenized");

    let root = tree::parse(&tokens, input.chars().count(), options)?;
    if let tree::SyntaxNode::Object(attrs) = &root {
        tracing::debug!(attrs = attrs.len(), "built syntax tree");
    }

    let value = materialize(root)?;
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid token: {0}")]
    Lex(#[from] LexError),
    #[error("invalid syntax: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("malformed syntax tree: {0}")]
    Materialize(#[from] MaterializeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::TokenKind;

    #[test]
    fn test_parse() {
        let input = r#"{"key": "value"}"#;
        let expected = Value::Object(
            vec![("key".to_string(), Value::String("value".to_string()))]
                .into_iter()
                .collect(),
        );

        assert_eq!(parse_json(input).unwrap(), expected);
    }

    #[test]
    fn test_lex_error_is_wrapped() {
        let err = parse_json("{\"a\": 1}").unwrap_err();
        assert!(matches!(err, ParseError::Lex(LexError::UnexpectedCharacter { .. })));
        assert!(err.to_string().starts_with("invalid token:"));
    }

    #[test]
    fn test_missing_close_reports_end_position() {
        let input = "{\"key1\":\"value1\"";
        let err = parse_json(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax(SyntaxError::UnexpectedToken {
                position: 16,
                expected: TokenKind::ObjectClose,
                found: TokenKind::EndOfInput,
            })
        );
    }

    #[test]
    fn test_depth_option() {
        let input = r#"{"a": {"b": {}}}"#;
        assert!(parse_json(input).is_ok());

        let options = ParseOptions::default().with_max_depth(2);
        let err = parse_json_with(input, &options).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Syntax(SyntaxError::NestingTooDeep { limit: 2, .. })
        ));
    }
}
