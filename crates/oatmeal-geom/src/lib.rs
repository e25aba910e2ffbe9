#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of small geometric value types."]
#![doc = ""]
#![doc = "This crate provides a 2D integer [`Point`], generic 2D/3D vectors ([`TVec2`], [`TVec3`])"]
#![doc = "and cardinal [`Direction`]s. All of them are plain `Copy` values with component-wise"]
#![doc = "arithmetic, exact equality, hashing, `\"x, y\"` style formatting and bounds-checked"]
#![doc = "component access."]

pub mod direction;
pub mod error;
pub mod point;
pub mod scalar;
pub mod vector;

pub use direction::Direction;
pub use error::GeomError;
pub use point::Point;
pub use scalar::{hash_combine, Scalar, HASH_MIX};
pub use vector::{
    distance, distance_as, distance_squared, FVec2, FVec3, IVec2, IVec3, TVec2, TVec3, Vec2, Vec3,
    Vector,
};
