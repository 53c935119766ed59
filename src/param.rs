use crate::{Dialect, Error, Result, StorageType, Value, validate_identifier};

/// Direction of a parameter within a command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Input,
    Output,
    InputOutput,
    ReturnValue,
}

/// A parameter descriptor owned by the command being built.
///
/// Created per call, discarded after execution; `name` is already prefixed
/// for the target dialect and unique within the command.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
    pub storage_type: Option<StorageType>,
    pub direction: Direction,
    pub size: Option<u32>,
    pub precision: Option<u8>,
    pub scale: Option<u8>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Value, direction: Direction) -> Self {
        Self {
            name: name.into(),
            value,
            storage_type: None,
            direction,
            size: None,
            precision: None,
            scale: None,
        }
    }

    pub fn input(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, value.into(), Direction::Input)
    }

    pub fn output(name: impl Into<String>, storage_type: StorageType) -> Self {
        Self::new(name, Value::Null, Direction::Output).with_storage_type(storage_type)
    }

    pub fn input_output(
        name: impl Into<String>,
        value: impl Into<Value>,
        storage_type: StorageType,
    ) -> Self {
        Self::new(name, value.into(), Direction::InputOutput).with_storage_type(storage_type)
    }

    pub fn return_value(name: impl Into<String>, storage_type: StorageType) -> Self {
        Self::new(name, Value::Null, Direction::ReturnValue).with_storage_type(storage_type)
    }

    pub fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = Some(storage_type);
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_precision(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }
}

/// Turn an explicit, ordered field list into the parameter list of a command.
///
/// Fields are visited in the order given (the caller's schema declares it,
/// there is no runtime introspection). Names are validated and prefixed for
/// the dialect, missing storage types are inferred from the value, NULLs stay
/// untyped. A name colliding with an earlier one, under the dialect's case
/// rules, fails before any command is built.
pub fn bind_parameters(dialect: &dyn Dialect, fields: &[(&str, Value)]) -> Result<Vec<Parameter>> {
    let mut parameters = Vec::with_capacity(fields.len());
    let mut seen: Vec<String> = Vec::with_capacity(fields.len());
    let case_sensitive = dialect.case_sensitive_parameters();
    for (name, value) in fields {
        validate_identifier(name)?;
        let name = dialect.parameter_name(name)?;
        let key = if case_sensitive {
            name.clone()
        } else {
            name.to_ascii_lowercase()
        };
        if seen.contains(&key) {
            return Err(Error::DuplicateParameter(name));
        }
        seen.push(key);
        let storage_type = if value.is_null() {
            None
        } else {
            Some(value.storage_type()?)
        };
        let mut parameter = Parameter::new(name, value.clone(), Direction::Input);
        parameter.storage_type = storage_type;
        parameters.push(parameter);
    }
    Ok(parameters)
}
