//! Arbitrary-size matrices and column vectors.
//!
//! The fixed-size types in [`super::vec3`], [`super::vec4`] and
//! [`super::mat4`] cover the hot path of the pipeline; these generic types
//! exist for the rare computation that does not fit a 2/3/4-dimensional
//! shape. Dimension mismatches and out-of-range indices are reported as
//! `None` rather than panicking, so callers must check before using a
//! result.

use super::vec2::Vec2;
use super::vec3::Vec3;
use super::vec4::Vec4;

/// Row-major `height x width` matrix.
///
/// Invariant: every row has the same length.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f32>>,
    height: usize,
    width: usize,
}

impl Matrix {
    /// Builds a matrix from rows. Returns `None` if the rows are ragged
    /// or empty.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        Some(Self {
            data: rows,
            height,
            width,
        })
    }

    /// Zero-filled `height x width` matrix.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            data: vec![vec![0.0; width]; height],
            height,
            width,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Element at `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.data.get(row)?.get(col).copied()
    }

    /// Sets the element at `(row, col)`; out-of-range indices are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        if let Some(slot) = self.data.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = value;
        }
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.width, self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                out.data[col][row] = self.data[row][col];
            }
        }
        out
    }

    /// Matrix product `self * rhs`. `None` if `self.width != rhs.height`.
    pub fn mul(&self, rhs: &Matrix) -> Option<Matrix> {
        if self.width != rhs.height {
            return None;
        }
        let mut out = Self::zeros(self.height, rhs.width);
        for row in 0..self.height {
            for col in 0..rhs.width {
                let mut sum = 0.0;
                for k in 0..self.width {
                    sum += self.data[row][k] * rhs.data[k][col];
                }
                out.data[row][col] = sum;
            }
        }
        Some(out)
    }

    /// Matrix-vector product, collapsing the single-column result to a
    /// [`Vector`]. `None` if `self.width != rhs.height()`.
    pub fn mul_vector(&self, rhs: &Vector) -> Option<Vector> {
        if self.width != rhs.height() {
            return None;
        }
        let mut out = vec![0.0; self.height];
        for (row, slot) in out.iter_mut().enumerate() {
            for k in 0..self.width {
                *slot += self.data[row][k] * rhs.data[k];
            }
        }
        Some(Vector::new(out))
    }
}

/// Column vector of arbitrary height (`width == 1`).
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    pub fn height(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// Sets the element at `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.data.get_mut(index) {
            *slot = value;
        }
    }

    pub fn scale(&self, scalar: f32) -> Self {
        Self::new(self.data.iter().map(|v| v * scalar).collect())
    }

    pub fn norm(&self) -> f32 {
        self.data.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    /// Divides every component by the norm. A zero vector yields NaN
    /// components; callers must not normalize a zero vector.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        Self::new(self.data.iter().map(|v| v / n).collect())
    }

    /// Componentwise sum. `None` if the heights differ.
    pub fn add(&self, rhs: &Vector) -> Option<Vector> {
        if self.height() != rhs.height() {
            return None;
        }
        Some(Self::new(
            self.data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// Componentwise difference. `None` if the heights differ.
    pub fn sub(&self, rhs: &Vector) -> Option<Vector> {
        if self.height() != rhs.height() {
            return None;
        }
        Some(Self::new(
            self.data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    /// Collapses to a [`Vec2`] if the height is exactly 2.
    pub fn to_vec2(&self) -> Option<Vec2> {
        match self.data[..] {
            [x, y] => Some(Vec2::new(x, y)),
            _ => None,
        }
    }

    /// Collapses to a [`Vec3`] if the height is exactly 3.
    pub fn to_vec3(&self) -> Option<Vec3> {
        match self.data[..] {
            [x, y, z] => Some(Vec3::new(x, y, z)),
            _ => None,
        }
    }

    /// Collapses to a [`Vec4`] if the height is exactly 4.
    pub fn to_vec4(&self) -> Option<Vec4> {
        match self.data[..] {
            [x, y, z, w] => Some(Vec4::new(x, y, z, w)),
            _ => None,
        }
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self::new(vec![v.x, v.y, v.z])
    }
}

impl From<Vec4> for Vector {
    fn from(v: Vec4) -> Self {
        Self::new(vec![v.x, v.y, v.z, v.w])
    }
}
