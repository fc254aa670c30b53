//! Conversions between the data types, arrays and nalgebra types.
//!
//! Components keep their field order and values.
use crate::*;

macro_rules! impl_array {
    ($(struct $ty:ident { $($field:ident),+ } as $w:literal)+) => {$(
        impl From<[f32; $w]> for $ty {
            fn from([$($field),+]: [f32; $w]) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$ty> for [f32; $w] {
            fn from(v: $ty) -> Self {
                [$(v.$field),+]
            }
        }

        impl TryFrom<&[f32]> for $ty {
            type Error = WidthError;

            fn try_from(s: &[f32]) -> Result<Self, Self::Error> {
                <[f32; $w]>::try_from(s)
                    .map(Self::from)
                    .map_err(|_| WidthError { expected: $w, found: s.len() })
            }
        }
    )+};
}

impl_array! {
    struct Step { base, angle } as 2
    struct Vector { x, y, z } as 3
    struct Vector2D { x, y } as 2
    struct Rotator { yaw, pitch, roll } as 3
}

macro_rules! impl_na {
    ($($ty:ident { $($field:ident),+ } <=> $na:ty;)+) => {$(
        impl From<$ty> for $na {
            fn from(v: $ty) -> Self {
                Self::new($(v.$field),+)
            }
        }

        impl From<$na> for $ty {
            fn from(v: $na) -> Self {
                Self { $($field: v.$field),+ }
            }
        }
    )+};
}

impl_na! {
    Vector { x, y, z } <=> na::Vector3<f32>;
    Vector { x, y, z } <=> na::Point3<f32>;
    Vector2D { x, y } <=> na::Vector2<f32>;
    Vector2D { x, y } <=> na::Point2<f32>;
}
