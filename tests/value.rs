#[cfg(test)]
mod tests {
    use keel::{
        DialectRegistry, Error, Provider, StorageType, Value, is_sql_keyword, validate_identifier,
    };
    use rust_decimal::Decimal;
    use std::cmp::Ordering;

    #[test]
    fn conversions_carry_the_option() {
        let value: Value = 7i32.into();
        assert_eq!(value, Value::Int32(Some(7)));
        let value: Value = Option::<i32>::None.into();
        assert_eq!(value, Value::Int32(None));
        assert!(value.is_null());
        let value: Value = "abc".into();
        assert_eq!(value, Value::Varchar(Some("abc".to_string())));
        let value: Value = Decimal::new(105, 1).into();
        assert!(matches!(value, Value::Decimal(Some(..), ..)));
    }

    #[test]
    fn storage_type_mapping() {
        assert_eq!(Value::from(true).storage_type().unwrap(), StorageType::Boolean);
        assert_eq!(Value::from(1i8).storage_type().unwrap(), StorageType::Int16);
        assert_eq!(Value::from(1u16).storage_type().unwrap(), StorageType::Int32);
        assert_eq!(Value::from(1u64).storage_type().unwrap(), StorageType::Int64);
        assert_eq!(Value::from(1.5f32).storage_type().unwrap(), StorageType::Double);
        assert_eq!(Value::from("x").storage_type().unwrap(), StorageType::String);
        assert!(matches!(
            Value::Null.storage_type(),
            Err(Error::TypeMapping(..))
        ));
        assert!(matches!(
            Value::List(Some(vec![])).storage_type(),
            Err(Error::TypeMapping(..))
        ));
        // A typed NULL still knows its storage type.
        assert_eq!(Value::Int64(None).storage_type().unwrap(), StorageType::Int64);
    }

    #[test]
    fn ordering_across_numeric_widths() {
        assert_eq!(
            Value::from(7i8).partial_cmp(&Value::from(7u64)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::from(2i32).partial_cmp(&Value::from(10u8)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::from(2.5f64).partial_cmp(&Value::from(2i32)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::Null.partial_cmp(&Value::from(1)), None);
        assert_eq!(Value::from(1).partial_cmp(&Value::Int32(None)), None);
        assert_eq!(Value::from("a").partial_cmp(&Value::from(1)), None);
        assert_eq!(
            Value::from("a").partial_cmp(&Value::from("b")),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn keyword_lookup_ignores_case() {
        assert!(is_sql_keyword("SELECT"));
        assert!(is_sql_keyword("select"));
        assert!(is_sql_keyword("Merge"));
        assert!(!is_sql_keyword("customer"));
        assert!(!is_sql_keyword(""));
    }

    #[test]
    fn identifier_validation_rules() {
        assert_eq!(validate_identifier("Users").unwrap(), "Users");
        assert_eq!(validate_identifier("_tmp9").unwrap(), "_tmp9");
        for bad in ["", "9lives", "user-name", "na me", "tab;le", "naïve"] {
            assert!(matches!(
                validate_identifier(bad),
                Err(Error::Validation(..))
            ));
        }
    }

    #[test]
    fn registry_resolves_every_provider() {
        let registry = DialectRegistry::new();
        for provider in [
            Provider::Sqlite,
            Provider::SqlServer,
            Provider::Postgres,
            Provider::Document,
            Provider::Other,
        ] {
            assert_eq!(registry.get(provider).provider(), provider);
        }
    }

    #[test]
    fn registry_accepts_replacements() {
        use keel::{Dialect, SqliteDialect};
        use std::sync::Arc;

        struct LooseSqlite;
        impl Dialect for LooseSqlite {
            fn as_dyn(&self) -> &dyn Dialect {
                self
            }
            fn provider(&self) -> Provider {
                Provider::Sqlite
            }
            fn max_parameters(&self) -> usize {
                32766
            }
        }

        let mut registry = DialectRegistry::new();
        assert_eq!(registry.get(Provider::Sqlite).max_parameters(), 999);
        registry.register(Arc::new(LooseSqlite));
        assert_eq!(registry.get(Provider::Sqlite).max_parameters(), 32766);
        // The stock dialect is unaffected elsewhere.
        assert_eq!(SqliteDialect.max_parameters(), 999);
    }
}
