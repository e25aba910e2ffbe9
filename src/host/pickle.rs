//! Pickling support: values serialize to the ordered tuple of their components.

use oatmeal_geom::{Point, TVec2, TVec3};

use super::{Fields, HostError, HostScalar, HostValue};

/// `__getstate__` / `__setstate__` for the value types.
pub trait Pickle: Fields {
    /// Components in declaration order.
    fn get_state(&self) -> Vec<HostValue> {
        (0..Self::NAMES.len())
            .filter_map(|index| self.field(index).ok())
            .map(HostScalar::to_host)
            .collect()
    }

    /// Restores every component from `state`. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns `Err(HostError::MalformedState)` unless `state` holds exactly one
    /// value per component, or the conversion error of the first value that
    /// does not fit the component type.
    fn set_state(&mut self, state: &[HostValue]) -> Result<(), HostError> {
        *self = Self::from_state(state)?;
        Ok(())
    }

    /// Creates a value from pickled `state`.
    ///
    /// # Errors
    ///
    /// See [`Pickle::set_state`].
    fn from_state(state: &[HostValue]) -> Result<Self, HostError> {
        if state.len() != Self::NAMES.len() {
            return Err(HostError::MalformedState {
                type_name: Self::type_name(),
                expected: Self::NAMES.len(),
                found: state.len(),
            });
        }

        let mut value = Self::default();
        for (index, &component) in state.iter().enumerate() {
            value.set_field(index, Self::Component::from_host(component)?)?;
        }
        Ok(value)
    }
}

impl Pickle for Point {}

impl<T: HostScalar + Default> Pickle for TVec2<T> {}

impl<T: HostScalar + Default> Pickle for TVec3<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use oatmeal_geom::{IVec3, Vec2, Vec3};

    #[test]
    fn test_point_round_trip() {
        let p = Point::new(-4, -123);
        let state = p.get_state();
        assert_eq!(state, vec![HostValue::Int(-4), HostValue::Int(-123)]);

        let mut restored = Point::default();
        restored.set_state(&state).unwrap();
        assert_eq!(restored, p);
    }

    #[test]
    fn test_vector_round_trip() {
        let v = Vec3::new(1.5, -2.0, 0.25);
        assert_eq!(Vec3::from_state(&v.get_state()), Ok(v));

        let i = IVec3::new(7, 8, 9);
        assert_eq!(IVec3::from_state(&i.get_state()), Ok(i));
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let mut p = Point::new(1, 2);
        assert!(matches!(
            p.set_state(&[HostValue::Int(1)]),
            Err(HostError::MalformedState {
                expected: 2,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            p.set_state(&[HostValue::Int(1), HostValue::Int(2), HostValue::Int(3)]),
            Err(HostError::MalformedState { found: 3, .. })
        ));
        assert!(matches!(
            Vec2::from_state(&[]),
            Err(HostError::MalformedState { expected: 2, found: 0, .. })
        ));
        assert_eq!(p, Point::new(1, 2));
    }

    #[test]
    fn test_bad_component_leaves_value_unchanged() {
        let mut p = Point::new(1, 2);
        assert!(p.set_state(&[HostValue::Int(5), HostValue::Float(0.5)]).is_err());
        assert_eq!(p, Point::new(1, 2));
    }
}
