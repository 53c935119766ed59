use super::{CompareOp, Node, Predicate};
use crate::{Error, Result, Value};
use std::{cmp::Ordering, collections::BTreeMap};

/// An explicit field-to-value record a predicate can be evaluated against.
pub type Record = BTreeMap<String, Value>;

impl Predicate {
    /// Evaluate the tree against a concrete record.
    ///
    /// Comparisons involving NULL are false, numeric comparisons work across
    /// integer widths, `LIKE` understands `%` and `_`.
    pub fn evaluate(&self, record: &Record) -> Result<bool> {
        as_bool(&eval_node(&self.body, record)?)
    }
}

fn as_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Boolean(Some(v)) => Ok(*v),
        other => Err(Error::validation(format!(
            "expected a boolean predicate result, got {:?}",
            other
        ))),
    }
}

fn eval_node(node: &Node, record: &Record) -> Result<Value> {
    match node {
        Node::Member { path, .. } => {
            let name = path.join(".");
            record
                .get(&name)
                .cloned()
                .ok_or_else(|| Error::validation(format!("record has no field {:?}", name)))
        }
        Node::Literal(value) => Ok(value.clone()),
        Node::Compare { op, lhs, rhs } => {
            let lhs = eval_node(lhs, record)?;
            let rhs = eval_node(rhs, record)?;
            Ok(Value::Boolean(Some(compare(*op, &lhs, &rhs))))
        }
        Node::And(lhs, rhs) => {
            let value = as_bool(&eval_node(lhs, record)?)? && as_bool(&eval_node(rhs, record)?)?;
            Ok(Value::Boolean(Some(value)))
        }
        Node::Or(lhs, rhs) => {
            let value = as_bool(&eval_node(lhs, record)?)? || as_bool(&eval_node(rhs, record)?)?;
            Ok(Value::Boolean(Some(value)))
        }
        Node::Not(arg) => Ok(Value::Boolean(Some(!as_bool(&eval_node(arg, record)?)?))),
        Node::Conditional {
            test,
            then,
            otherwise,
        } => {
            if as_bool(&eval_node(test, record)?)? {
                eval_node(then, record)
            } else {
                eval_node(otherwise, record)
            }
        }
        Node::Call { name, args } => eval_call(name, args, record),
    }
}

fn compare(op: CompareOp, lhs: &Value, rhs: &Value) -> bool {
    match op {
        CompareOp::Equal => lhs.partial_cmp(rhs) == Some(Ordering::Equal),
        CompareOp::NotEqual => matches!(
            lhs.partial_cmp(rhs),
            Some(Ordering::Less) | Some(Ordering::Greater)
        ),
        CompareOp::Less => lhs.partial_cmp(rhs) == Some(Ordering::Less),
        CompareOp::LessEqual => matches!(
            lhs.partial_cmp(rhs),
            Some(Ordering::Less) | Some(Ordering::Equal)
        ),
        CompareOp::Greater => lhs.partial_cmp(rhs) == Some(Ordering::Greater),
        CompareOp::GreaterEqual => matches!(
            lhs.partial_cmp(rhs),
            Some(Ordering::Greater) | Some(Ordering::Equal)
        ),
        CompareOp::Like => like(lhs, rhs).unwrap_or(false),
        CompareOp::NotLike => like(lhs, rhs).map(|v| !v).unwrap_or(false),
    }
}

fn like(lhs: &Value, rhs: &Value) -> Option<bool> {
    match (lhs, rhs) {
        (Value::Varchar(Some(text)), Value::Varchar(Some(pattern))) => {
            Some(like_match(text.as_bytes(), pattern.as_bytes()))
        }
        _ => None,
    }
}

fn like_match(text: &[u8], pattern: &[u8]) -> bool {
    match pattern.first() {
        None => text.is_empty(),
        Some(b'%') => {
            (0..=text.len()).any(|skip| like_match(&text[skip..], &pattern[1..]))
        }
        Some(b'_') => !text.is_empty() && like_match(&text[1..], &pattern[1..]),
        Some(c) => text.first() == Some(c) && like_match(&text[1..], &pattern[1..]),
    }
}

fn eval_call(name: &str, args: &[Node], record: &Record) -> Result<Value> {
    let values = args
        .iter()
        .map(|a| eval_node(a, record))
        .collect::<Result<Vec<_>>>()?;
    match (name, values.as_slice()) {
        ("lower", [Value::Varchar(Some(v))]) => Ok(Value::Varchar(Some(v.to_lowercase()))),
        ("upper", [Value::Varchar(Some(v))]) => Ok(Value::Varchar(Some(v.to_uppercase()))),
        ("trim", [Value::Varchar(Some(v))]) => Ok(Value::Varchar(Some(v.trim().to_owned()))),
        ("length", [Value::Varchar(Some(v))]) => Ok(Value::Int64(Some(v.chars().count() as i64))),
        _ => Err(Error::validation(format!(
            "cannot evaluate call {:?} over {} arguments",
            name,
            values.len()
        ))),
    }
}
