use super::{Node, Predicate};
use crate::{Error, Result};

fn combine(lhs: Predicate, rhs: Predicate, merge: fn(Box<Node>, Box<Node>) -> Node) -> Predicate {
    // The left subject is canonical; the right tree is copied with its
    // subject references rewritten so both halves range over one record.
    let rewritten = rhs.body.rewrite_subject(lhs.subject);
    Predicate::new(
        lhs.subject,
        merge(Box::new(lhs.body), Box::new(rewritten)),
    )
}

/// Conjunction with null absorption: a missing side yields the other.
pub fn and(lhs: Option<Predicate>, rhs: Option<Predicate>) -> Option<Predicate> {
    match (lhs, rhs) {
        (None, rhs) => rhs,
        (lhs, None) => lhs,
        (Some(lhs), Some(rhs)) => Some(combine(lhs, rhs, Node::And)),
    }
}

/// Disjunction with null absorption: a missing side yields the other.
pub fn or(lhs: Option<Predicate>, rhs: Option<Predicate>) -> Option<Predicate> {
    match (lhs, rhs) {
        (None, rhs) => rhs,
        (lhs, None) => lhs,
        (Some(lhs), Some(rhs)) => Some(combine(lhs, rhs, Node::Or)),
    }
}

/// Negation. Unlike `and`/`or` there is nothing sensible to absorb a missing
/// operand into, so `None` is rejected.
pub fn not(expr: Option<Predicate>) -> Result<Predicate> {
    let expr = expr.ok_or_else(|| Error::validation("cannot negate a missing predicate"))?;
    Ok(Predicate::new(expr.subject, Node::Not(Box::new(expr.body))))
}

impl Predicate {
    pub fn and(self, rhs: Predicate) -> Predicate {
        combine(self, rhs, Node::And)
    }

    pub fn or(self, rhs: Predicate) -> Predicate {
        combine(self, rhs, Node::Or)
    }

    pub fn negate(self) -> Predicate {
        Predicate::new(self.subject, Node::Not(Box::new(self.body)))
    }
}

/// Every field path referenced anywhere in the tree, in traversal order.
///
/// Walks unary, binary, conditional and call nodes uniformly; consumed by
/// metadata driven planning upstream, not by the SQL writers.
pub fn extract_members(predicate: &Predicate) -> Vec<String> {
    let mut members = Vec::new();
    collect_members(&predicate.body, &mut members);
    members
}

fn collect_members(node: &Node, members: &mut Vec<String>) {
    match node {
        Node::Member { path, .. } => members.push(path.join(".")),
        Node::Literal(..) => {}
        Node::Compare { lhs, rhs, .. } => {
            collect_members(lhs, members);
            collect_members(rhs, members);
        }
        Node::And(lhs, rhs) | Node::Or(lhs, rhs) => {
            collect_members(lhs, members);
            collect_members(rhs, members);
        }
        Node::Not(arg) => collect_members(arg, members),
        Node::Call { args, .. } => {
            for arg in args {
                collect_members(arg, members);
            }
        }
        Node::Conditional {
            test,
            then,
            otherwise,
        } => {
            collect_members(test, members);
            collect_members(then, members);
            collect_members(otherwise, members);
        }
    }
}
