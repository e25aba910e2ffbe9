//! Debug representations for the host.
//!
//! `repr` is the type-qualified constructor form, while `Display` stays the
//! bare comma-separated form used for `str`.

use oatmeal_geom::{Point, TVec2, TVec3};
use oatmeal_grid::Grid;

use super::{Fields, HostScalar};

/// Module name the host registers the types under.
pub const MODULE_NAME: &str = "oatmeal";

/// Type-qualified, constructor-like rendering.
pub trait Repr {
    /// Returns e.g. `oatmeal.Point(-4, -123)`.
    fn repr(&self) -> String;
}

fn constructor_form<V: Fields + std::fmt::Display>(value: &V) -> String {
    format!("{}.{}({})", MODULE_NAME, V::type_name(), value)
}

impl Repr for Point {
    fn repr(&self) -> String {
        constructor_form(self)
    }
}

impl<T: HostScalar + Default> Repr for TVec2<T> {
    fn repr(&self) -> String {
        constructor_form(self)
    }
}

impl<T: HostScalar + Default> Repr for TVec3<T> {
    fn repr(&self) -> String {
        constructor_form(self)
    }
}

impl<T> Repr for Grid<T> {
    fn repr(&self) -> String {
        format!(
            "{}.Grid(x_count={}, y_count={})",
            MODULE_NAME,
            self.x_count(),
            self.y_count()
        )
    }
}
