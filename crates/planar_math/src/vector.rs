use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;

use crate::error::{MathError, Result};
use crate::matrix::AffineTransform;
use crate::number_traits::{Float, One, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $len:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Debug)]
        pub struct $name<T = f64> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Float {
            pub fn length(&self) -> T {
                let mut sum = T::zero();
                $(sum += self.$dim * self.$dim;)*
                sum.sqrt()
            }

            pub fn dot(&self, other: &Self) -> T {
                let mut sum = T::zero();
                $(sum += self.$dim * other.$dim;)*
                sum
            }

            /// Scales the vector to unit length. A zero vector yields `NaN`
            /// components.
            pub fn normalize(&self) -> Self {
                *self / self.length()
            }

            pub fn to_array(&self) -> [T; $len] {
                [$(self.$dim),*]
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        // Subtraction is addition of the negation, so `0 - 0` stays `+0`.
        impl<T> Sub for $name<T>
        where
            T: Copy + Add<Output = T> + Neg<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                self + -rhs
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + One + Mul<Output = T> + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                self * (T::one() / rhs)
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl<T> From<[T; $len]> for $name<T>
        where
            T: Copy,
        {
            fn from(value: [T; $len]) -> Self {
                Self {
                    $($dim: value[$idx]),*
                }
            }
        }

        impl<T> From<$name<T>> for [T; $len] {
            fn from(value: $name<T>) -> Self {
                [$(value.$dim),*]
            }
        }
    };
}

struct_vec!(Vector2: "[{}, {}]", 2, (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "[{}, {}, {}]", 3, (x: T => 0, y: T => 1, z: T => 2,));

macro_rules! vector_constants {
    ($($t:ty),*) => {
        $(
            impl Vector2<$t> {
                pub const ZERO: Self = Self::new(0.0, 0.0);
                pub const UNIT_X: Self = Self::new(1.0, 0.0);
                pub const UNIT_Y: Self = Self::new(0.0, 1.0);
            }

            impl Vector3<$t> {
                pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
                pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
                pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
                pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);
            }
        )*
    };
}

vector_constants!(f32, f64);

impl<T> Vector2<T>
where
    T: Float,
{
    /// Angle of the vector in radians, measured from the positive x axis,
    /// in `(-π, π]`.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::UndefinedGeometry`] if the vector is zero,
    /// or if either component is infinite or `NaN`.
    pub fn direction(&self) -> Result<T> {
        let reason = if self.x == T::zero() && self.y == T::zero() {
            Some("the zero vector has no direction")
        } else if self.x.is_infinite() || self.y.is_infinite() {
            Some("a component is infinite")
        } else if self.x.is_nan() || self.y.is_nan() {
            Some("a component is NaN")
        } else {
            None
        };

        if let Some(reason) = reason {
            trace!("Refusing direction of {}: {}", self, reason);
            return Err(MathError::undefined_geometry("Vector2::direction", reason));
        }

        Ok(self.y.atan2(self.x))
    }

    /// Applies `transform` to this vector taken as a point.
    pub fn transform<A>(&self, transform: &A) -> Self
    where
        A: AffineTransform<T>,
    {
        transform.transform_point(self)
    }

    /// Returns whether the point lies outside the box spanned by `top_left`
    /// and `bottom_right`, with y growing upwards. The left and top edges
    /// belong to the box, the right and bottom edges do not.
    pub fn out_of_bounds(&self, top_left: &Self, bottom_right: &Self) -> bool {
        self.x < top_left.x
            || self.y > top_left.y
            || self.x >= bottom_right.x
            || self.y <= bottom_right.y
    }
}

impl<T> Vector3<T>
where
    T: Float,
{
    /// Cross product with the sign convention
    /// `(y1*z2 - z1*y2, x1*z2 - z1*x2, x1*y2 - y1*x2)`.
    ///
    /// The middle component is negated relative to the right-handed cross
    /// product. Existing callers depend on this output.
    pub fn cross(&self, other: &Self) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.x * other.z - self.z * other.x,
            self.x * other.y - self.y * other.x,
        )
    }
}
