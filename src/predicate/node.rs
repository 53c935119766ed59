use crate::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of the implicit input record a predicate ranges over.
///
/// Two independently authored trees carry distinct subjects; composition
/// rewrites one side so the combined tree refers to a single subject, which
/// is the central invariant of the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subject(u64);

static NEXT_SUBJECT: AtomicU64 = AtomicU64::new(0);

impl Subject {
    pub fn fresh() -> Self {
        Subject(NEXT_SUBJECT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Like,
    NotLike,
}

/// One node of a boolean expression tree over a single subject.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Field access on the subject record.
    Member { subject: Subject, path: Vec<String> },
    Literal(Value),
    Compare {
        op: CompareOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
    Not(Box<Node>),
    Call { name: String, args: Vec<Node> },
    Conditional {
        test: Box<Node>,
        then: Box<Node>,
        otherwise: Box<Node>,
    },
}

impl Node {
    /// Structural copy with every subject reference retagged to `subject`.
    /// The input tree stays valid and reusable.
    pub fn rewrite_subject(&self, subject: Subject) -> Node {
        match self {
            Node::Member { path, .. } => Node::Member {
                subject,
                path: path.clone(),
            },
            Node::Literal(value) => Node::Literal(value.clone()),
            Node::Compare { op, lhs, rhs } => Node::Compare {
                op: *op,
                lhs: Box::new(lhs.rewrite_subject(subject)),
                rhs: Box::new(rhs.rewrite_subject(subject)),
            },
            Node::And(lhs, rhs) => Node::And(
                Box::new(lhs.rewrite_subject(subject)),
                Box::new(rhs.rewrite_subject(subject)),
            ),
            Node::Or(lhs, rhs) => Node::Or(
                Box::new(lhs.rewrite_subject(subject)),
                Box::new(rhs.rewrite_subject(subject)),
            ),
            Node::Not(arg) => Node::Not(Box::new(arg.rewrite_subject(subject))),
            Node::Call { name, args } => Node::Call {
                name: name.clone(),
                args: args.iter().map(|a| a.rewrite_subject(subject)).collect(),
            },
            Node::Conditional {
                test,
                then,
                otherwise,
            } => Node::Conditional {
                test: Box::new(test.rewrite_subject(subject)),
                then: Box::new(then.rewrite_subject(subject)),
                otherwise: Box::new(otherwise.rewrite_subject(subject)),
            },
        }
    }

    /// Operator precedence used to decide parenthesization when rendering.
    pub fn precedence(&self) -> i32 {
        match self {
            Node::Or(..) => 100,
            Node::And(..) => 200,
            Node::Not(..) => 250,
            Node::Compare { .. } => 300,
            Node::Conditional { .. } => 400,
            _ => 1000,
        }
    }
}

/// An immutable boolean expression tree over one subject record.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    pub subject: Subject,
    pub body: Node,
}

impl Predicate {
    pub fn new(subject: Subject, body: Node) -> Self {
        Self { subject, body }
    }

    /// Leaf comparison between a subject field and a literal value.
    pub fn compare(field: &str, op: CompareOp, value: impl Into<Value>) -> Self {
        let subject = Subject::fresh();
        Self {
            subject,
            body: Node::Compare {
                op,
                lhs: Box::new(Node::Member {
                    subject,
                    path: field.split('.').map(str::to_owned).collect(),
                }),
                rhs: Box::new(Node::Literal(value.into())),
            },
        }
    }

    pub fn equals(field: &str, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Equal, value)
    }

    pub fn like(field: &str, pattern: &str) -> Self {
        Self::compare(field, CompareOp::Like, pattern)
    }
}
