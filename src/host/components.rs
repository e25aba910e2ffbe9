//! Component access by attribute name and by index.

use oatmeal_geom::{Point, TVec2, TVec3};

use super::{Fields, HostError, HostScalar, HostValue};

/// Host view of a value's components: `v.x`, `v[0]`, `len(v)`.
pub trait Components: Fields {
    /// Number of components.
    fn len(&self) -> usize {
        Self::NAMES.len()
    }

    /// Always `false`; every value type has at least two components.
    fn is_empty(&self) -> bool {
        Self::NAMES.is_empty()
    }

    /// Reads the component called `name`.
    ///
    /// # Errors
    ///
    /// Returns `Err(HostError::UnknownAttribute)` if the type has no such component.
    fn get_attr(&self, name: &str) -> Result<HostValue, HostError> {
        let index = attr_index::<Self>(name)?;
        self.get_item(index)
    }

    /// Writes the component called `name`. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns `Err(HostError::UnknownAttribute)` for an unknown name, or the
    /// conversion error if `value` does not fit the component type.
    fn set_attr(&mut self, name: &str, value: HostValue) -> Result<(), HostError> {
        let index = attr_index::<Self>(name)?;
        self.set_item(index, value)
    }

    /// Reads component `index`.
    ///
    /// # Errors
    ///
    /// Returns `Err(HostError::Geom(GeomError::ComponentIndexOutOfRange))` if
    /// `index >= len()`.
    fn get_item(&self, index: usize) -> Result<HostValue, HostError> {
        Ok(self.field(index)?.to_host())
    }

    /// Writes component `index`. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns `Err(HostError::Geom(GeomError::ComponentIndexOutOfRange))` for a
    /// bad index, or the conversion error if `value` does not fit.
    fn set_item(&mut self, index: usize, value: HostValue) -> Result<(), HostError> {
        let value = Self::Component::from_host(value)?;
        Ok(self.set_field(index, value)?)
    }
}

fn attr_index<V: Fields>(name: &str) -> Result<usize, HostError> {
    V::field_index(name).ok_or_else(|| HostError::UnknownAttribute {
        type_name: V::type_name(),
        name: name.to_string(),
    })
}

impl Components for Point {}

impl<T: HostScalar + Default> Components for TVec2<T> {}

impl<T: HostScalar + Default> Components for TVec3<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use oatmeal_geom::{GeomError, IVec2, Vec3};

    #[test]
    fn test_get_by_name_and_index() {
        let p = Point::new(3, 8);
        assert_eq!(p.get_attr("x"), Ok(HostValue::Int(3)));
        assert_eq!(p.get_attr("y"), Ok(HostValue::Int(8)));
        assert_eq!(p.get_item(0), Ok(HostValue::Int(3)));
        assert_eq!(p.get_item(1), Ok(HostValue::Int(8)));
        assert_eq!(Components::len(&p), 2);

        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get_attr("z"), Ok(HostValue::Float(3.0)));
        assert_eq!(Components::len(&v), 3);
    }

    #[test]
    fn test_set_by_name_and_index() {
        let mut v = IVec2::new(1, 2);
        v.set_attr("y", HostValue::Int(-5)).unwrap();
        v.set_item(0, HostValue::Int(7)).unwrap();
        assert_eq!(v, IVec2::new(7, -5));
    }

    #[test]
    fn test_unknown_attribute() {
        let mut p = Point::new(1, 1);
        let err = p.get_attr("z").unwrap_err();
        assert_eq!(err.to_string(), "'Point' object has no attribute 'z'");
        assert!(matches!(
            p.set_attr("w", HostValue::Int(0)),
            Err(HostError::UnknownAttribute { .. })
        ));
        assert_eq!(p, Point::new(1, 1));
    }

    #[test]
    fn test_bad_index_or_value_leaves_value_unchanged() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert!(matches!(
            v.get_item(3),
            Err(HostError::Geom(GeomError::ComponentIndexOutOfRange { index: 3, arity: 3 }))
        ));
        assert!(v.set_item(5, HostValue::Float(9.0)).is_err());

        let mut p = Point::new(1, 2);
        assert!(matches!(
            p.set_item(0, HostValue::Float(0.5)),
            Err(HostError::TypeMismatch { .. })
        ));
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Point::new(1, 2));
    }
}
