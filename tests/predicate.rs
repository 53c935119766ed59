#[cfg(test)]
mod tests {
    use keel::{
        CompareOp, Dialect, Error, Node, Predicate, Record, SqliteDialect, Value, and,
        extract_members, not, or,
    };

    fn render(predicate: &Predicate) -> String {
        let mut out = String::new();
        SqliteDialect.write_predicate(&mut out, predicate).unwrap();
        out
    }

    fn record(fields: &[(&str, Value)]) -> Record {
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn leaf_rendering() {
        let p = Predicate::equals("Name", "Ada");
        assert_eq!(render(&p), "[Name] = 'Ada'");
        let p = Predicate::compare("Age", CompareOp::GreaterEqual, 18);
        assert_eq!(render(&p), "[Age] >= 18");
        let p = Predicate::like("Name", "A%");
        assert_eq!(render(&p), "[Name] LIKE 'A%'");
    }

    #[test]
    fn dotted_paths_render_per_segment() {
        let p = Predicate::equals("Address.City", "Oslo");
        assert_eq!(render(&p), "[Address].[City] = 'Oslo'");
    }

    #[test]
    fn composition_renders_with_precedence() {
        let age = Predicate::compare("Age", CompareOp::Greater, 18);
        let name = Predicate::equals("Name", "Ada");
        let active = Predicate::equals("Active", true);

        let both = age.clone().and(name.clone());
        assert_eq!(render(&both), "[Age] > 18 AND [Name] = 'Ada'");

        // OR binds looser than AND, the right OR operand is parenthesized.
        let tree = age.clone().and(name.clone().or(active.clone()));
        assert_eq!(
            render(&tree),
            "[Age] > 18 AND ([Name] = 'Ada' OR [Active] = true)"
        );

        let negated = both.negate();
        assert_eq!(render(&negated), "NOT ([Age] > 18 AND [Name] = 'Ada')");

        // A bare comparison binds tighter than NOT and needs no parentheses.
        let single = name.negate();
        assert_eq!(render(&single), "NOT [Name] = 'Ada'");
    }

    #[test]
    fn null_absorption() {
        let p = Predicate::equals("Name", "Ada");
        assert_eq!(and(None, None), None);
        assert_eq!(and(Some(p.clone()), None), Some(p.clone()));
        assert_eq!(and(None, Some(p.clone())), Some(p.clone()));
        assert_eq!(or(Some(p.clone()), None), Some(p.clone()));
        assert_eq!(or(None, Some(p.clone())), Some(p.clone()));
        assert!(matches!(not(None), Err(Error::Validation(..))));
        assert!(not(Some(p)).is_ok());
    }

    #[test]
    fn composition_unifies_subjects() {
        let lhs = Predicate::equals("A", 1);
        let rhs = Predicate::equals("B", 2);
        let combined = lhs.and(rhs);
        let subject = combined.subject;
        let mut pending = vec![&combined.body];
        while let Some(node) = pending.pop() {
            match node {
                Node::Member { subject: s, .. } => assert_eq!(*s, subject),
                Node::Compare { lhs, rhs, .. } => pending.extend([lhs.as_ref(), rhs.as_ref()]),
                Node::And(l, r) | Node::Or(l, r) => pending.extend([l.as_ref(), r.as_ref()]),
                Node::Not(arg) => pending.push(arg),
                _ => {}
            }
        }
    }

    #[test]
    fn composition_does_not_consume_inputs_logically() {
        // Composing clones the right tree, the source stays usable.
        let rhs = Predicate::equals("B", 2);
        let lhs1 = Predicate::equals("A", 1);
        let lhs2 = Predicate::equals("C", 3);
        let first = lhs1.and(rhs.clone());
        let second = lhs2.and(rhs);
        assert_eq!(render(&first), "[A] = 1 AND [B] = 2");
        assert_eq!(render(&second), "[C] = 3 AND [B] = 2");
    }

    #[test]
    fn member_extraction() {
        let p = Predicate::equals("Name", "Ada")
            .and(Predicate::compare("Address.City", CompareOp::NotEqual, "Oslo"))
            .or(Predicate::like("Name", "B%").negate());
        assert_eq!(
            extract_members(&p),
            vec!["Name".to_string(), "Address.City".to_string(), "Name".to_string()]
        );
    }

    #[test]
    fn member_extraction_covers_calls_and_conditionals() {
        let subject = keel::Subject::fresh();
        let member = |path: &str| Node::Member {
            subject,
            path: vec![path.to_string()],
        };
        let body = Node::Conditional {
            test: Box::new(Node::Compare {
                op: CompareOp::Equal,
                lhs: Box::new(Node::Call {
                    name: "lower".to_string(),
                    args: vec![member("Name")],
                }),
                rhs: Box::new(Node::Literal(Value::from("ada"))),
            }),
            then: Box::new(member("Score")),
            otherwise: Box::new(member("Fallback")),
        };
        let p = Predicate::new(subject, body);
        assert_eq!(extract_members(&p), vec!["Name", "Score", "Fallback"]);
    }

    #[test]
    fn evaluation_basics() {
        let fields = record(&[
            ("Name", Value::from("Ada")),
            ("Age", Value::from(36)),
        ]);
        assert!(Predicate::equals("Name", "Ada").evaluate(&fields).unwrap());
        assert!(!Predicate::equals("Name", "Bob").evaluate(&fields).unwrap());
        assert!(
            Predicate::compare("Age", CompareOp::Greater, 18)
                .evaluate(&fields)
                .unwrap()
        );
        // Cross-width numerics compare by magnitude.
        assert!(
            Predicate::compare("Age", CompareOp::Equal, 36u8)
                .evaluate(&fields)
                .unwrap()
        );
        assert!(matches!(
            Predicate::equals("Missing", 1).evaluate(&fields),
            Err(Error::Validation(..))
        ));
    }

    #[test]
    fn evaluation_null_never_matches() {
        let fields = record(&[("Age", Value::Int32(None))]);
        for op in [
            CompareOp::Equal,
            CompareOp::NotEqual,
            CompareOp::Less,
            CompareOp::Greater,
        ] {
            assert!(!Predicate::compare("Age", op, 18).evaluate(&fields).unwrap());
        }
    }

    #[test]
    fn evaluation_like_patterns() {
        let fields = record(&[("Name", Value::from("Adaline"))]);
        assert!(Predicate::like("Name", "Ada%").evaluate(&fields).unwrap());
        assert!(Predicate::like("Name", "%line").evaluate(&fields).unwrap());
        assert!(Predicate::like("Name", "A_aline").evaluate(&fields).unwrap());
        assert!(Predicate::like("Name", "%dal%").evaluate(&fields).unwrap());
        assert!(!Predicate::like("Name", "Ada").evaluate(&fields).unwrap());
        assert!(
            Predicate::compare("Name", CompareOp::NotLike, "B%")
                .evaluate(&fields)
                .unwrap()
        );
    }

    #[test]
    fn evaluation_of_composed_trees() {
        let fields = record(&[
            ("Name", Value::from("Ada")),
            ("Age", Value::from(36)),
            ("Active", Value::from(false)),
        ]);
        let p = Predicate::equals("Name", "Ada")
            .and(Predicate::compare("Age", CompareOp::Less, 100));
        assert!(p.evaluate(&fields).unwrap());
        let p = Predicate::equals("Active", true).or(Predicate::equals("Name", "Ada"));
        assert!(p.evaluate(&fields).unwrap());
        let p = Predicate::equals("Active", true).negate();
        assert!(p.evaluate(&fields).unwrap());
    }

    #[test]
    fn evaluation_calls() {
        let fields = record(&[("Name", Value::from("  Ada  "))]);
        let subject = keel::Subject::fresh();
        let body = Node::Compare {
            op: CompareOp::Equal,
            lhs: Box::new(Node::Call {
                name: "lower".to_string(),
                args: vec![Node::Call {
                    name: "trim".to_string(),
                    args: vec![Node::Member {
                        subject,
                        path: vec!["Name".to_string()],
                    }],
                }],
            }),
            rhs: Box::new(Node::Literal(Value::from("ada"))),
        };
        assert!(Predicate::new(subject, body).evaluate(&fields).unwrap());
    }
}
