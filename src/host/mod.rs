//! Host marshaling contract.
//!
//! Everything a scripting-language binding needs to expose the value types:
//! construction from loose positional arguments, component access by name and
//! index, pickling to ordered tuples, `repr` strings and nested-sequence grid
//! construction. Values cross the boundary as [`HostValue`]s and failures as
//! [`HostError`]s, so the glue for a concrete runtime only has to translate
//! those two types.

pub mod args;
pub mod components;
pub mod grid;
pub mod pickle;
pub mod repr;

pub use args::FromArgs;
pub use components::Components;
pub use grid::{build_grid, cell_at, set_cell_at, GridInit};
pub use pickle::Pickle;
pub use repr::Repr;

use std::fmt;

use oatmeal_geom::{GeomError, Point, Scalar, TVec2, TVec3};
use oatmeal_grid::GridError;

/// A primitive scalar as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostValue {
    /// Host integer.
    Int(i64),
    /// Host float.
    Float(f64),
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Int(v) => write!(f, "{}", v),
            HostValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for HostValue {
    fn from(v: i64) -> Self {
        HostValue::Int(v)
    }
}

impl From<i32> for HostValue {
    fn from(v: i32) -> Self {
        HostValue::Int(i64::from(v))
    }
}

impl From<f64> for HostValue {
    fn from(v: f64) -> Self {
        HostValue::Float(v)
    }
}

impl From<f32> for HostValue {
    fn from(v: f32) -> Self {
        HostValue::Float(f64::from(v))
    }
}

/// Error type for host-facing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// A value type rejected the operation.
    Geom(GeomError),
    /// A grid rejected the operation.
    Grid(GridError),
    /// More positional arguments than the type has components.
    TooManyArguments {
        /// Host type name.
        type_name: String,
        /// Number of components.
        expected: usize,
        /// Number of arguments given.
        found: usize,
    },
    /// Attribute name that is not a component of the type.
    UnknownAttribute {
        /// Host type name.
        type_name: String,
        /// The rejected name.
        name: String,
    },
    /// Pickled state with the wrong number of components.
    MalformedState {
        /// Host type name.
        type_name: String,
        /// Number of components.
        expected: usize,
        /// Length of the given state.
        found: usize,
    },
    /// A float given where an integer component is required.
    TypeMismatch {
        /// Description of the accepted values.
        expected: &'static str,
        /// The rejected value.
        found: HostValue,
    },
    /// An integer that does not fit the component type.
    Overflow {
        /// The rejected value.
        value: i64,
        /// Name of the component type.
        target: &'static str,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Geom(e) => write!(f, "{}", e),
            HostError::Grid(e) => write!(f, "{}", e),
            HostError::TooManyArguments {
                type_name,
                expected,
                found,
            } => write!(
                f,
                "{}() takes at most {} arguments ({} given)",
                type_name, expected, found
            ),
            HostError::UnknownAttribute { type_name, name } => {
                write!(f, "'{}' object has no attribute '{}'", type_name, name)
            }
            HostError::MalformedState {
                type_name,
                expected,
                found,
            } => write!(
                f,
                "{} state must be a tuple of {} components, got {}",
                type_name, expected, found
            ),
            HostError::TypeMismatch { expected, found } => {
                write!(f, "component value must be {}, got {}", expected, found)
            }
            HostError::Overflow { value, target } => {
                write!(f, "{} does not fit in {}", value, target)
            }
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Geom(e) => Some(e),
            HostError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GeomError> for HostError {
    fn from(e: GeomError) -> Self {
        HostError::Geom(e)
    }
}

impl From<GridError> for HostError {
    fn from(e: GridError) -> Self {
        HostError::Grid(e)
    }
}

/// A component type that can be converted to and from a [`HostValue`].
pub trait HostScalar: Scalar {
    /// Prefix of the host type name of vectors over this scalar, as in `IVec2`.
    const VECTOR_PREFIX: &'static str;

    /// Converts a host value, failing on floats for integer types and on
    /// integers outside the representable range.
    fn from_host(value: HostValue) -> Result<Self, HostError>;

    /// Converts to the host representation.
    fn to_host(self) -> HostValue;
}

macro_rules! host_int {
    ($t:ty, $prefix:expr) => {
        impl HostScalar for $t {
            const VECTOR_PREFIX: &'static str = $prefix;

            fn from_host(value: HostValue) -> Result<Self, HostError> {
                match value {
                    HostValue::Int(v) => <$t>::try_from(v).map_err(|_| HostError::Overflow {
                        value: v,
                        target: stringify!($t),
                    }),
                    found @ HostValue::Float(_) => Err(HostError::TypeMismatch {
                        expected: "an int",
                        found,
                    }),
                }
            }

            fn to_host(self) -> HostValue {
                HostValue::Int(i64::from(self))
            }
        }
    };
}

host_int!(i32, "I");
host_int!(i64, "I64");

macro_rules! host_float {
    ($t:ty, $prefix:expr) => {
        impl HostScalar for $t {
            const VECTOR_PREFIX: &'static str = $prefix;

            // Hosts accept ints wherever floats are expected.
            fn from_host(value: HostValue) -> Result<Self, HostError> {
                Ok(match value {
                    HostValue::Int(v) => v as $t,
                    HostValue::Float(v) => v as $t,
                })
            }

            fn to_host(self) -> HostValue {
                HostValue::Float(f64::from(self))
            }
        }
    };
}

host_float!(f32, "");
host_float!(f64, "D");

/// Fixed-arity value type whose components are exposed to the host.
///
/// Implemented by [`Point`], [`TVec2`] and [`TVec3`]; the marshaling traits in
/// this module build on it.
pub trait Fields: Copy + Default {
    /// Component type.
    type Component: HostScalar;

    /// Component names in declaration order.
    const NAMES: &'static [&'static str];

    /// Host type name without the module prefix.
    fn type_name() -> String;

    /// Reads component `index`.
    fn field(&self, index: usize) -> Result<Self::Component, GeomError>;

    /// Writes component `index`.
    fn set_field(&mut self, index: usize, value: Self::Component) -> Result<(), GeomError>;

    /// Position of the component called `name`.
    fn field_index(name: &str) -> Option<usize> {
        Self::NAMES.iter().position(|&n| n == name)
    }
}

impl Fields for Point {
    type Component = i32;
    const NAMES: &'static [&'static str] = &["x", "y"];

    fn type_name() -> String {
        "Point".to_string()
    }

    fn field(&self, index: usize) -> Result<i32, GeomError> {
        self.get(index)
    }

    fn set_field(&mut self, index: usize, value: i32) -> Result<(), GeomError> {
        self.set(index, value)
    }
}

impl<T: HostScalar + Default> Fields for TVec2<T> {
    type Component = T;
    const NAMES: &'static [&'static str] = &["x", "y"];

    fn type_name() -> String {
        format!("{}Vec2", T::VECTOR_PREFIX)
    }

    fn field(&self, index: usize) -> Result<T, GeomError> {
        self.get(index)
    }

    fn set_field(&mut self, index: usize, value: T) -> Result<(), GeomError> {
        self.set(index, value)
    }
}

impl<T: HostScalar + Default> Fields for TVec3<T> {
    type Component = T;
    const NAMES: &'static [&'static str] = &["x", "y", "z"];

    fn type_name() -> String {
        format!("{}Vec3", T::VECTOR_PREFIX)
    }

    fn field(&self, index: usize) -> Result<T, GeomError> {
        self.get(index)
    }

    fn set_field(&mut self, index: usize, value: T) -> Result<(), GeomError> {
        self.set(index, value)
    }
}
