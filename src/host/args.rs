//! Construction from loose positional arguments.

use oatmeal_geom::{Point, TVec2, TVec3};

use super::{Fields, HostError, HostScalar, HostValue};

/// Builds a value from up to one positional argument per component.
///
/// Missing trailing components default to zero, so `Point()` is the origin and
/// `Vec3(1, 2)` is `(1, 2, 0)`.
pub trait FromArgs: Fields {
    /// Converts `args` into a new value.
    ///
    /// # Errors
    ///
    /// Returns `Err(HostError::TooManyArguments)` if there are more arguments
    /// than components, or the conversion error of the first argument that
    /// does not fit the component type.
    fn from_args(args: &[HostValue]) -> Result<Self, HostError> {
        if args.len() > Self::NAMES.len() {
            return Err(HostError::TooManyArguments {
                type_name: Self::type_name(),
                expected: Self::NAMES.len(),
                found: args.len(),
            });
        }

        let mut value = Self::default();
        for (index, &arg) in args.iter().enumerate() {
            value.set_field(index, Self::Component::from_host(arg)?)?;
        }
        Ok(value)
    }
}

impl FromArgs for Point {}

impl<T: HostScalar + Default> FromArgs for TVec2<T> {}

impl<T: HostScalar + Default> FromArgs for TVec3<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use oatmeal_geom::{IVec3, Vec2, Vec3};

    #[test]
    fn test_missing_components_default_to_zero() {
        assert_eq!(Point::from_args(&[]), Ok(Point::new(0, 0)));
        assert_eq!(Point::from_args(&[HostValue::Int(4)]), Ok(Point::new(4, 0)));
        assert_eq!(
            Vec3::from_args(&[HostValue::Int(1), HostValue::Float(2.5)]),
            Ok(Vec3::new(1.0, 2.5, 0.0))
        );
    }

    #[test]
    fn test_all_components_given() {
        assert_eq!(
            Point::from_args(&[HostValue::Int(-4), HostValue::Int(-123)]),
            Ok(Point::new(-4, -123))
        );
        assert_eq!(
            IVec3::from_args(&[HostValue::Int(1), HostValue::Int(2), HostValue::Int(3)]),
            Ok(IVec3::new(1, 2, 3))
        );
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Vec2::from_args(&[HostValue::Int(1), HostValue::Int(2), HostValue::Int(3)]).unwrap_err();
        assert!(matches!(
            err,
            HostError::TooManyArguments {
                expected: 2,
                found: 3,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Vec2() takes at most 2 arguments (3 given)");
    }

    #[test]
    fn test_unconvertible_argument() {
        assert!(matches!(
            Point::from_args(&[HostValue::Float(1.5)]),
            Err(HostError::TypeMismatch { .. })
        ));
        assert!(matches!(
            Point::from_args(&[HostValue::Int(0), HostValue::Int(1 << 40)]),
            Err(HostError::Overflow { value, .. }) if value == 1 << 40
        ));
    }
}
