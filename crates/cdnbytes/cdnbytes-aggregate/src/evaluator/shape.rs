//! Parameter shapes the host binds at setup time.

use std::fmt;

/// Scalar types the host can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Int,
    BigInt,
    Double,
    Boolean,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Double => "double",
            Self::Boolean => "boolean",
        }
    }
}

/// Declared shape of one aggregate argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamShape {
    Primitive(PrimitiveType),
    List(PrimitiveType),
    Map {
        key: PrimitiveType,
        value: PrimitiveType,
    },
}

impl ParamShape {
    /// `map<string,bigint>`: the only argument shape the aggregate accepts,
    /// and the shape of its result.
    pub const COUNTERS: ParamShape = ParamShape::Map {
        key: PrimitiveType::String,
        value: PrimitiveType::BigInt,
    };
}

impl fmt::Display for ParamShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::List(p) => write!(f, "array<{}>", p.as_str()),
            Self::Map { key, value } => write!(f, "map<{},{}>", key.as_str(), value.as_str()),
        }
    }
}
