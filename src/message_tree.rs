use serde_json::Value;

/// Message bundle document model
///
/// A message bundle is a nested JSON document whose leaves are the
/// translatable strings. This module models it as a closed tagged union
/// so the traversal in `translation::core` is exhaustively matched and
/// key/element order survives a round trip through translation.
/// A node in a message bundle tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageNode {
    /// A translatable string leaf
    Leaf(String),
    /// An ordered array of child nodes
    Sequence(Vec<MessageNode>),
    /// An object; entries keep their insertion order
    Mapping(Vec<(String, MessageNode)>),
    /// Number, boolean or null; carried through untouched
    Scalar(Value),
}

impl MessageNode {
    /// Build a tree from a parsed JSON value.
    ///
    /// Object key order is preserved (serde_json is built with the
    /// `preserve_order` feature, so `Value` iteration follows insertion
    /// order).
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Leaf(text),
            Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from_value).collect())
            },
            Value::Object(entries) => {
                Self::Mapping(
                    entries.into_iter()
                        .map(|(key, value)| (key, Self::from_value(value)))
                        .collect()
                )
            },
            other => Self::Scalar(other),
        }
    }

    /// Convert the tree back into a JSON value, keeping entry order.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Leaf(text) => Value::String(text.clone()),
            Self::Sequence(items) => {
                Value::Array(items.iter().map(|item| item.to_value()).collect())
            },
            Self::Mapping(entries) => {
                let mut map = serde_json::Map::new();
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_value());
                }
                Value::Object(map)
            },
            Self::Scalar(value) => value.clone(),
        }
    }

    /// Count the string leaves reachable from this node.
    ///
    /// Sizes the progress denominator before a walk begins. Scalars
    /// contribute zero.
    pub fn count_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Sequence(items) => items.iter().map(|item| item.count_leaves()).sum(),
            Self::Mapping(entries) => entries.iter().map(|(_, value)| value.count_leaves()).sum(),
            Self::Scalar(_) => 0,
        }
    }

    /// Whether two trees have the same shape: same node kinds, same keys
    /// in the same order, same sequence lengths, at every depth. Leaf
    /// contents are ignored.
    pub fn is_isomorphic_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(_), Self::Leaf(_)) => true,
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(x, y)| x.is_isomorphic_to(y))
            },
            (Self::Mapping(a), Self::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|((ka, va), (kb, vb))| {
                        ka == kb && va.is_isomorphic_to(vb)
                    })
            },
            _ => false,
        }
    }
}

impl From<Value> for MessageNode {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
