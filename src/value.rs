use crate::{Error, Result};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// A native value travelling towards a bound parameter.
///
/// Each variant carries an `Option` so that a typed NULL can still state its
/// storage type; `Value::Null` is the untyped database NULL marker.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>, /* prec: */ u8, /* scale: */ u8),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    Uuid(Option<Uuid>),
    /// Collection values have no scalar storage type and cannot be bound.
    List(Option<Vec<Value>>),
}

/// Enumerated database storage types a parameter can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageType {
    Boolean,
    Int16,
    Int32,
    Int64,
    Double,
    Decimal,
    String,
    Binary,
    Date,
    Time,
    DateTime,
    DateTimeOffset,
    Guid,
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int8(v) => v.is_none(),
            Value::Int16(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::UInt8(v) => v.is_none(),
            Value::UInt16(v) => v.is_none(),
            Value::UInt32(v) => v.is_none(),
            Value::UInt64(v) => v.is_none(),
            Value::Float32(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v, ..) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Date(v) => v.is_none(),
            Value::Time(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
            Value::TimestampWithTimezone(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
            Value::List(v) => v.is_none(),
        }
    }

    /// Default mapping from native variants to storage types.
    ///
    /// Narrow and unsigned integers widen to the nearest signed storage type,
    /// decimals map to the fixed point type. `Null` has no type of its own
    /// and collections have no scalar representation at all.
    pub fn storage_type(&self) -> Result<StorageType> {
        Ok(match self {
            Value::Boolean(..) => StorageType::Boolean,
            Value::Int8(..) | Value::Int16(..) => StorageType::Int16,
            Value::UInt8(..) | Value::UInt16(..) | Value::Int32(..) => StorageType::Int32,
            Value::UInt32(..) | Value::Int64(..) | Value::UInt64(..) => StorageType::Int64,
            Value::Float32(..) | Value::Float64(..) => StorageType::Double,
            Value::Decimal(..) => StorageType::Decimal,
            Value::Varchar(..) => StorageType::String,
            Value::Blob(..) => StorageType::Binary,
            Value::Date(..) => StorageType::Date,
            Value::Time(..) => StorageType::Time,
            Value::Timestamp(..) => StorageType::DateTime,
            Value::TimestampWithTimezone(..) => StorageType::DateTimeOffset,
            Value::Uuid(..) => StorageType::Guid,
            Value::Null | Value::List(..) => {
                return Err(Error::TypeMapping(format!("{:?}", self)));
            }
        })
    }

    fn as_i128(&self) -> Option<i128> {
        match self {
            Value::Int8(Some(v)) => Some(*v as i128),
            Value::Int16(Some(v)) => Some(*v as i128),
            Value::Int32(Some(v)) => Some(*v as i128),
            Value::Int64(Some(v)) => Some(*v as i128),
            Value::UInt8(Some(v)) => Some(*v as i128),
            Value::UInt16(Some(v)) => Some(*v as i128),
            Value::UInt32(Some(v)) => Some(*v as i128),
            Value::UInt64(Some(v)) => Some(*v as i128),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(Some(v)) => Some(*v as f64),
            Value::Float64(Some(v)) => Some(*v),
            other => other.as_i128().map(|v| v as f64),
        }
    }

    /// Ordering between two values for predicate evaluation. Numeric
    /// variants compare across widths; everything else compares only
    /// against the same variant. NULL never compares.
    pub fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        if self.is_null() || other.is_null() {
            return None;
        }
        match (self, other) {
            (Value::Boolean(Some(l)), Value::Boolean(Some(r))) => l.partial_cmp(r),
            (Value::Varchar(Some(l)), Value::Varchar(Some(r))) => l.partial_cmp(r),
            (Value::Blob(Some(l)), Value::Blob(Some(r))) => l.partial_cmp(r),
            (Value::Date(Some(l)), Value::Date(Some(r))) => l.partial_cmp(r),
            (Value::Time(Some(l)), Value::Time(Some(r))) => l.partial_cmp(r),
            (Value::Timestamp(Some(l)), Value::Timestamp(Some(r))) => l.partial_cmp(r),
            (Value::TimestampWithTimezone(Some(l)), Value::TimestampWithTimezone(Some(r))) => {
                l.partial_cmp(r)
            }
            (Value::Uuid(Some(l)), Value::Uuid(Some(r))) => l.partial_cmp(r),
            (Value::Decimal(Some(l), ..), Value::Decimal(Some(r), ..)) => l.partial_cmp(r),
            (l, r) => match (l.as_i128(), r.as_i128()) {
                (Some(l), Some(r)) => l.partial_cmp(&r),
                _ => match (l.as_f64(), r.as_f64()) {
                    (Some(l), Some(r)) => l.partial_cmp(&r),
                    _ => None,
                },
            },
        }
    }
}

macro_rules! impl_from {
    ($source:ty, $variant:ident) => {
        impl From<$source> for Value {
            fn from(value: $source) -> Self {
                Value::$variant(Some(value.into()))
            }
        }
        impl From<Option<$source>> for Value {
            fn from(value: Option<$source>) -> Self {
                Value::$variant(value.map(Into::into))
            }
        }
    };
}
impl_from!(bool, Boolean);
impl_from!(i8, Int8);
impl_from!(i16, Int16);
impl_from!(i32, Int32);
impl_from!(i64, Int64);
impl_from!(u8, UInt8);
impl_from!(u16, UInt16);
impl_from!(u32, UInt32);
impl_from!(u64, UInt64);
impl_from!(f32, Float32);
impl_from!(f64, Float64);
impl_from!(String, Varchar);
impl_from!(&str, Varchar);
impl_from!(Date, Date);
impl_from!(Time, Time);
impl_from!(PrimitiveDateTime, Timestamp);
impl_from!(OffsetDateTime, TimestampWithTimezone);
impl_from!(Uuid, Uuid);

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(Some(value), 0, 0)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(Some(value.into()))
    }
}
