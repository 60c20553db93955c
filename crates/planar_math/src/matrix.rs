use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;

use crate::error::{MathError, Result};
use crate::number_traits::{Float, One, Zero};
use crate::vector::{Vector2, Vector3};

pub type Matrix3f = Matrix3<f32>;

/// A 3x3 matrix stored as three rows.
///
/// Entries are addressed column first: [`get(i, j)`](Matrix3::get) reads
/// column `i` of row `j`. When used as a 2D affine transform, the third
/// column holds the translation and the last row is `[0, 0, 1]`.
#[must_use]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Matrix3<T = f64> {
    rows: [[T; 3]; 3],
}

/// Something that maps 2D points to 2D points, treating them as
/// homogeneous coordinates with an implicit third component of `1`.
pub trait AffineTransform<T> {
    fn transform_point(&self, point: &Vector2<T>) -> Vector2<T>;
}

pub trait Identity {
    fn identity() -> Self;
}

/// Right-hand side accepted by [`Matrix3::multiply`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Operand<T = f64> {
    Scalar(T),
    Point2(Vector2<T>),
    Transform(Matrix3<T>),
    /// Representable but not a valid multiplicand; rejected at runtime.
    Vector3(Vector3<T>),
}

/// Result of [`Matrix3::multiply`]; its variant follows the operand.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Product<T = f64> {
    Matrix(Matrix3<T>),
    Point(Vector2<T>),
}

impl<T> Product<T> {
    pub fn into_matrix(self) -> Option<Matrix3<T>> {
        match self {
            Product::Matrix(matrix) => Some(matrix),
            Product::Point(_) => None,
        }
    }

    pub fn into_point(self) -> Option<Vector2<T>> {
        match self {
            Product::Point(point) => Some(point),
            Product::Matrix(_) => None,
        }
    }
}

impl<T> From<T> for Operand<T> {
    fn from(scalar: T) -> Self {
        Operand::Scalar(scalar)
    }
}

impl<T> From<Vector2<T>> for Operand<T> {
    fn from(point: Vector2<T>) -> Self {
        Operand::Point2(point)
    }
}

impl<T> From<Matrix3<T>> for Operand<T> {
    fn from(matrix: Matrix3<T>) -> Self {
        Operand::Transform(matrix)
    }
}

impl<T> From<Vector3<T>> for Operand<T> {
    fn from(vector: Vector3<T>) -> Self {
        Operand::Vector3(vector)
    }
}

impl<T> Matrix3<T> {
    const COLS: usize = 3;
    const ROWS: usize = 3;

    pub const fn with_values(rows: [[T; 3]; 3]) -> Self {
        Self { rows }
    }

    pub fn from_rows(row0: Vector3<T>, row1: Vector3<T>, row2: Vector3<T>) -> Self {
        Self {
            rows: [row0.into(), row1.into(), row2.into()],
        }
    }
}

impl<T> Matrix3<T>
where
    T: Copy,
{
    /// Builds a matrix from dynamically sized rows.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::MalformedInput`] unless `rows` holds exactly
    /// three rows of exactly three values each.
    pub fn from_row_slices<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
    {
        let parse_row = |j: usize, row: &R| -> Result<[T; 3]> {
            row.as_ref().try_into().map_err(|_| {
                trace!("Rejecting matrix input row {j} of length {}", row.as_ref().len());
                MathError::malformed_input(
                    "Matrix3::from_row_slices",
                    &format!(
                        "row {j} has {} values, expected {}",
                        row.as_ref().len(),
                        Self::COLS
                    ),
                )
            })
        };

        match rows {
            [r0, r1, r2] => Ok(Self::with_values([
                parse_row(0, r0)?,
                parse_row(1, r1)?,
                parse_row(2, r2)?,
            ])),
            _ => {
                trace!("Rejecting matrix input with {} rows", rows.len());
                Err(MathError::malformed_input(
                    "Matrix3::from_row_slices",
                    &format!("expected {} rows, got {}", Self::ROWS, rows.len()),
                ))
            }
        }
    }

    /// Returns the entry in column `i` of row `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not in `0..3`.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.rows[j][i]
    }

    /// Overwrites the entry in column `i` of row `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not in `0..3`.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.rows[j][i] = value;
    }

    pub fn row(&self, j: usize) -> Vector3<T> {
        Vector3::from(self.rows[j])
    }

    pub fn column(&self, i: usize) -> Vector3<T> {
        Vector3::new(self.rows[0][i], self.rows[1][i], self.rows[2][i])
    }

    pub fn to_matrix_array(&self) -> [[T; 3]; 3] {
        self.rows
    }

    /// Returns the nine entries, row after row.
    pub fn to_array(&self) -> [T; 9] {
        let [r0, r1, r2] = self.rows;
        [
            r0[0], r0[1], r0[2], r1[0], r1[1], r1[2], r2[0], r2[1], r2[2],
        ]
    }

    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2))
    }

    fn map_rows<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Vector3<T>, usize) -> Vector3<T>,
    {
        Self::from_rows(f(self.row(0), 0), f(self.row(1), 1), f(self.row(2), 2))
    }
}

impl<T> Matrix3<T>
where
    T: Float,
{
    /// Returns the matrix whose entries are all `NaN`, produced by
    /// [`inverse`](Self::inverse) for singular matrices.
    pub fn nan() -> Self {
        Self::with_values([[T::nan(); 3]; 3])
    }

    /// Returns `true` only when all nine entries are `NaN`.
    pub fn is_nan(&self) -> bool {
        self.rows.iter().flatten().all(|value| value.is_nan())
    }

    #[rustfmt::skip]
    pub fn determinant(&self) -> T {
        let g = |i, j| self.get(i, j);
        g(0, 0) * (g(1, 1) * g(2, 2) - g(2, 1) * g(1, 2))
            - g(1, 0) * (g(0, 1) * g(2, 2) - g(2, 1) * g(0, 2))
            + g(2, 0) * (g(0, 1) * g(1, 2) - g(1, 1) * g(0, 2))
    }

    /// Inverts the matrix through its adjugate.
    ///
    /// A matrix whose determinant is exactly zero has no inverse; the
    /// [`nan`](Self::nan) matrix is returned instead of an error.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det == T::zero() {
            trace!("Matrix {} is singular, inverse is NaN", self);
            return Self::nan();
        }

        let transpose = self.transpose();
        let cofactor = |i: usize, j: usize| {
            let x1 = (i + 1) % Self::COLS;
            let x2 = (i + 2) % Self::COLS;
            let y1 = (j + 1) % Self::ROWS;
            let y2 = (j + 2) % Self::ROWS;

            transpose.get(x1, y1) * transpose.get(x2, y2)
                - transpose.get(x1, y2) * transpose.get(x2, y1)
        };

        let adjugate = std::array::from_fn(|j| std::array::from_fn(|i| cofactor(i, j)));

        Self::with_values(adjugate) / det
    }

    /// Multiplies by a scalar, a point or another matrix, picking the
    /// product from the operand's variant.
    ///
    /// # Errors
    ///
    /// Will return [`MathError::MalformedInput`] if the operand is a
    /// [`Vector3`], which a 3x3 affine matrix does not act on here.
    pub fn multiply<O>(&self, operand: O) -> Result<Product<T>>
    where
        O: Into<Operand<T>>,
    {
        match operand.into() {
            Operand::Scalar(scalar) => Ok(Product::Matrix(*self * scalar)),
            Operand::Point2(point) => Ok(Product::Point(*self * point)),
            Operand::Transform(matrix) => Ok(Product::Matrix(*self * matrix)),
            Operand::Vector3(vector) => {
                trace!("Rejecting multiplication of {} by {}", self, vector);
                Err(MathError::malformed_input(
                    "Matrix3::multiply",
                    &format!("cannot multiply by the 3D vector {vector}"),
                ))
            }
        }
    }

    #[rustfmt::skip]
    pub fn new_translation(translation: impl Into<Vector2<T>>) -> Self {
        let translation = translation.into();
        Self::with_values([
            [T::one(), T::zero(), translation.x],
            [T::zero(), T::one(), translation.y],
            [T::zero(), T::zero(), T::one()],
        ])
    }

    /// Counter-clockwise rotation by `angle` radians about the origin.
    #[rustfmt::skip]
    pub fn new_rotation(angle: T) -> Self {
        let (sin, cos) = (angle.sin(), angle.cos());
        Self::with_values([
            [cos, -sin, T::zero()],
            [sin, cos, T::zero()],
            [T::zero(), T::zero(), T::one()],
        ])
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: impl Into<Vector2<T>>) -> Self {
        let scale = scale.into();
        Self::with_values([
            [scale.x, T::zero(), T::zero()],
            [T::zero(), scale.y, T::zero()],
            [T::zero(), T::zero(), T::one()],
        ])
    }

    pub fn new_scale_uniform(scale: T) -> Self {
        Self::new_scale((scale, scale))
    }
}

macro_rules! matrix_constants {
    ($($t:ty),*) => {
        $(
            impl Matrix3<$t> {
                pub const IDENTITY: Self =
                    Self::with_values([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
                pub const ZERO: Self = Self::with_values([[0.0; 3]; 3]);
                pub const NAN: Self = Self::with_values([[<$t>::NAN; 3]; 3]);
            }
        )*
    };
}

matrix_constants!(f32, f64);

#[rustfmt::skip]
impl<T> Identity for Matrix3<T>
    where T: One + Zero {
    fn identity() -> Self {
        Self {
            rows: [
                [T::one(), T::zero(), T::zero()],
                [T::zero(), T::one(), T::zero()],
                [T::zero(), T::zero(), T::one()],
            ]
        }
    }
}

impl<T> Default for Matrix3<T>
where
    T: One + Zero,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> AffineTransform<T> for Matrix3<T>
where
    T: Float,
{
    fn transform_point(&self, point: &Vector2<T>) -> Vector2<T> {
        *self * *point
    }
}

impl<T> Neg for Matrix3<T>
where
    T: Float,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map_rows(|row, _| -row)
    }
}

impl<T> Add for Matrix3<T>
where
    T: Float,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.map_rows(|row, j| row + rhs.row(j))
    }
}

impl<T> Sub for Matrix3<T>
where
    T: Float,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl<T> Mul<T> for Matrix3<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map_rows(|row, _| row * rhs)
    }
}

impl<T> Mul<Vector2<T>> for Matrix3<T>
where
    T: Float,
{
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Self::Output {
        let x = self.get(0, 0) * rhs.x + self.get(1, 0) * rhs.y + self.get(2, 0);
        let y = self.get(0, 1) * rhs.x + self.get(1, 1) * rhs.y + self.get(2, 1);
        Vector2::new(x, y)
    }
}

impl<T> Mul<Self> for Matrix3<T>
where
    T: Float,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let columns = [rhs.column(0), rhs.column(1), rhs.column(2)];
        self.map_rows(|row, _| {
            Vector3::new(
                row.dot(&columns[0]),
                row.dot(&columns[1]),
                row.dot(&columns[2]),
            )
        })
    }
}

impl<T> Div<T> for Matrix3<T>
where
    T: Float,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self * (T::one() / rhs)
    }
}

impl<T> Display for Matrix3<T>
where
    T: Display + Copy,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.row(0), self.row(1), self.row(2))
    }
}

impl<T> From<[[T; 3]; 3]> for Matrix3<T> {
    fn from(rows: [[T; 3]; 3]) -> Self {
        Self::with_values(rows)
    }
}

impl<T> From<Matrix3<T>> for [[T; 3]; 3] {
    fn from(matrix: Matrix3<T>) -> Self {
        matrix.rows
    }
}

impl<T> TryFrom<&[Vec<T>]> for Matrix3<T>
where
    T: Copy,
{
    type Error = MathError;

    fn try_from(rows: &[Vec<T>]) -> Result<Self> {
        Self::from_row_slices(rows)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix3<T>
where
    T: Copy,
{
    type Error = MathError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_row_slices(&rows)
    }
}
