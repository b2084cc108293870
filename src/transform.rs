//! Affine transform tracking for the drawing surface.
//!
//! The drawing API consumes transforms but never exposes its current
//! matrix for inspection, so the engine shadows every transform-mutating
//! call in an owned matrix plus a save/restore stack. Inverting the
//! shadowed matrix is what lets hit-testing and gesture geometry work in
//! logical space regardless of the current pan/zoom.

use crate::geometry::Point;

/// A 2x3 affine matrix in canvas coefficient order.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn translation(dx: f32, dy: f32) -> Self {
        Matrix::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Matrix::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Matrix::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Compose with a matrix applied in this matrix's local coordinates
    /// (right-multiplication, matching how a canvas chains transforms).
    pub fn multiplied(&self, m: &Matrix) -> Matrix {
        Matrix {
            a: self.a * m.a + self.c * m.b,
            b: self.b * m.a + self.d * m.b,
            c: self.a * m.c + self.c * m.d,
            d: self.b * m.c + self.d * m.d,
            e: self.a * m.e + self.c * m.f + self.e,
            f: self.b * m.e + self.d * m.f + self.f,
        }
    }

    pub fn determinant(&self) -> f32 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse of this matrix, or `None` when singular.
    pub fn inverted(&self) -> Option<Matrix> {
        let det = self.determinant();
        if det.abs() <= f32::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Matrix {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }

    /// Apply this matrix to a point.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

/// Shadow of the drawing surface's transform state: the current matrix
/// plus a stack mirroring scoped save/restore.
#[derive(Debug, Clone, Default)]
pub struct TransformTracker {
    current: Matrix,
    stack: Vec<Matrix>,
}

impl TransformTracker {
    pub fn new() -> Self {
        Self {
            current: Matrix::IDENTITY,
            stack: Vec::new(),
        }
    }

    /// The currently composed matrix.
    pub fn matrix(&self) -> Matrix {
        self.current
    }

    /// Push the current matrix onto the stack.
    pub fn save(&mut self) {
        self.stack.push(self.current);
    }

    /// Pop the stack. Underflow leaves the current matrix untouched,
    /// matching canvas restore semantics.
    pub fn restore(&mut self) {
        if let Some(m) = self.stack.pop() {
            self.current = m;
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.multiplied(&Matrix::translation(dx, dy));
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.current = self.current.multiplied(&Matrix::scaling(sx, sy));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.current = self.current.multiplied(&Matrix::rotation(radians));
    }

    /// Compose an arbitrary 2x3 matrix onto the current one.
    pub fn transform(&mut self, m: &Matrix) {
        self.current = self.current.multiplied(m);
    }

    /// Replace the current matrix outright.
    pub fn set_transform(&mut self, m: Matrix) {
        self.current = m;
    }

    /// Reset to the identity transform and drop the stack.
    pub fn reset(&mut self) {
        self.current = Matrix::IDENTITY;
        self.stack.clear();
    }

    /// Horizontal scale coefficient of the current matrix.
    pub fn scale_x(&self) -> f32 {
        self.current.a
    }

    /// Vertical scale coefficient of the current matrix.
    pub fn scale_y(&self) -> f32 {
        self.current.d
    }

    /// Map a device-space point back into logical space by applying the
    /// inverse of the current matrix. A singular matrix returns the
    /// input unchanged; it cannot happen through the zoom path, which
    /// keeps both scales strictly positive.
    pub fn to_logical(&self, x: f32, y: f32) -> Point {
        match self.current.inverted() {
            Some(inverse) => inverse.apply(Point::new(x, y)),
            None => {
                log::warn!("transform is singular, returning device point unchanged");
                Point::new(x, y)
            }
        }
    }
}
