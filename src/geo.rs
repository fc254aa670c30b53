//! Geometric data types.
//!
//! All of them are plain data. Values are stored as given, without unit
//! normalization or angle wrapping.

/// A discrete motion increment, a distance along a heading.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Step {
    /// Distance.
    pub base: f32,
    /// Heading angle.
    pub angle: f32,
}

/// A 3D vector.
///
/// ```
/// use warp_datatypes::Vector;
///
/// let v = Vector { x: 1., y: 2., z: 3. };
/// assert_eq!([v.x, v.y, v.z], [1., 2., 3.]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

/// A 2D vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

/// An orientation in yaw, pitch and roll angles.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotator {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the lateral axis.
    pub pitch: f32,
    /// Rotation about the longitudinal axis.
    pub roll: f32,
}

/// A pose in 3D space with scale.
///
/// The default value is all zeros, including the scale.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    /// Position.
    pub pos: Vector,
    /// Rotation.
    pub rot: Rotator,
    /// Scale for each axis.
    pub scl: Vector,
}
