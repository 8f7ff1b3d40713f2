use indexmap::IndexMap;
use thiserror::Error;

use crate::tree::{Literal, ObjectAttr, SyntaxNode};
use crate::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializeError {
    /// An object member whose key is not a text literal. Trees built by
    /// [`tree::parse`](crate::tree::parse) never contain one.
    #[error("object key must be a string literal, found {0:?}")]
    NonTextKey(SyntaxNode),
}

/// Converts a syntax tree into a [`Value`].
///
/// Object members are assigned in source order, so a repeated key keeps the
/// last value while holding the position of its first occurrence.
pub fn materialize(node: SyntaxNode) -> Result<Value, MaterializeError> {
    match node {
        SyntaxNode::Object(attrs) => {
            let mut map = IndexMap::with_capacity(attrs.len());
            for ObjectAttr { key, value } in attrs {
                let key = match key {
                    SyntaxNode::Literal(Literal::String(key)) => key,
                    other => return Err(MaterializeError::NonTextKey(other)),
                };
                map.insert(key, materialize(value)?);
            }
            Ok(Value::Object(map))
        }
        SyntaxNode::Array(elements) => elements
            .into_iter()
            .map(materialize)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        SyntaxNode::Literal(Literal::String(s)) => Ok(Value::String(s)),
        SyntaxNode::Literal(Literal::Boolean(b)) => Ok(Value::Boolean(b)),
        SyntaxNode::Literal(Literal::Null) => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(s: &str) -> SyntaxNode {
        SyntaxNode::Literal(Literal::String(s.into()))
    }

    fn attr(key: SyntaxNode, value: SyntaxNode) -> ObjectAttr {
        ObjectAttr { key, value }
    }

    #[test]
    fn materializes_literals() {
        assert_eq!(materialize(string("x")), Ok(Value::String("x".into())));
        assert_eq!(
            materialize(SyntaxNode::Literal(Literal::Boolean(false))),
            Ok(Value::Boolean(false))
        );
        assert_eq!(materialize(SyntaxNode::Literal(Literal::Null)), Ok(Value::Null));
    }

    #[test]
    fn last_write_wins() {
        let node = SyntaxNode::Object(vec![
            attr(string("a"), string("x")),
            attr(string("b"), string("z")),
            attr(string("a"), string("y")),
        ]);
        let value = materialize(node).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::String("y".into())));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn preserves_array_order() {
        let node = SyntaxNode::Array(vec![
            SyntaxNode::Literal(Literal::Null),
            string("b"),
            SyntaxNode::Array(vec![]),
        ]);
        assert_eq!(
            materialize(node),
            Ok(Value::Array(vec![
                Value::Null,
                Value::String("b".into()),
                Value::Array(vec![]),
            ]))
        );
    }

    #[test]
    fn rejects_non_text_key() {
        let key = SyntaxNode::Literal(Literal::Boolean(true));
        let node = SyntaxNode::Object(vec![attr(key.clone(), string("v"))]);
        assert_eq!(materialize(node), Err(MaterializeError::NonTextKey(key)));
    }

    #[test]
    fn rejects_non_text_key_in_nested_object() {
        let inner = SyntaxNode::Object(vec![attr(SyntaxNode::Array(vec![]), string("v"))]);
        let node = SyntaxNode::Array(vec![inner]);
        assert_eq!(
            materialize(node),
            Err(MaterializeError::NonTextKey(SyntaxNode::Array(vec![])))
        );
    }
}
