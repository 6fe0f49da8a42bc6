//! 2D shapes over the fixed-precision vector types.
//!
//! One vertex-list representation ([`Polygon2D`]) carries the shared
//! state; the named shapes embed it and all behavior flows through
//! the [`Shape`] trait's vertex-walk defaults.

use crate::error::VantageError;
use crate::math::vector::Vector2;

/// Common behavior of closed 2D shapes, computed from the vertex
/// ring.
pub trait Shape {
    /// Vertices in ring order.
    fn vertices(&self) -> &[Vector2];

    /// Enclosed area (shoelace formula).
    fn area(&self) -> f64 {
        signed_area(self.vertices()).abs()
    }

    /// Total edge length.
    fn perimeter(&self) -> f64 {
        let vertices = self.vertices();
        vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .map(|(a, b)| a.distance(*b))
            .sum()
    }

    /// Area-weighted centroid; the vertex mean for degenerate rings.
    fn centroid(&self) -> Vector2 {
        let vertices = self.vertices();
        let signed = signed_area(vertices);
        if signed == 0.0 {
            let sum = vertices
                .iter()
                .fold(Vector2::ZERO, |acc, v| acc + *v);
            return sum * (1.0 / vertices.len() as f64);
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (a, b) in
            vertices.iter().zip(vertices.iter().cycle().skip(1))
        {
            let cross = a.x() * b.y() - b.x() * a.y();
            cx += (a.x() + b.x()) * cross;
            cy += (a.y() + b.y()) * cross;
        }
        Vector2::new(cx / (6.0 * signed), cy / (6.0 * signed))
    }
}

fn signed_area(vertices: &[Vector2]) -> f64 {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x() * b.y() - b.x() * a.y())
        .sum::<f64>()
        / 2.0
}

/// Arbitrary simple polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    vertices: Vec<Vector2>,
}

impl Polygon2D {
    /// Create a polygon from at least three vertices in ring order.
    pub fn new(vertices: Vec<Vector2>) -> Result<Self, VantageError> {
        if vertices.len() < 3 {
            return Err(VantageError::InvalidShape(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    /// Regular polygon of `sides` vertices on a circle of `radius`
    /// around the origin. Non-positive radius and fewer than three
    /// sides are rejected.
    pub fn regular(radius: f64, sides: usize) -> Result<Self, VantageError> {
        if radius <= 0.0 {
            return Err(VantageError::InvalidShape(format!(
                "radius must be positive, got {radius}"
            )));
        }
        if sides < 3 {
            return Err(VantageError::InvalidShape(format!(
                "regular polygon needs at least 3 sides, got {sides}"
            )));
        }
        let step = std::f64::consts::TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| {
                let angle = step * i as f64;
                Vector2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Ok(Self { vertices })
    }
}

impl Shape for Polygon2D {
    fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }
}

/// Axis-aligned rectangle centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle2D {
    base: Polygon2D,
    width: f64,
    height: f64,
}

impl Rectangle2D {
    /// Create a rectangle; both dimensions must be positive.
    pub fn new(width: f64, height: f64) -> Result<Self, VantageError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(VantageError::InvalidShape(format!(
                "rectangle dimensions must be positive, got \
                 {width} x {height}"
            )));
        }
        let (hw, hh) = (width / 2.0, height / 2.0);
        let base = Polygon2D::new(vec![
            Vector2::new(-hw, -hh),
            Vector2::new(hw, -hh),
            Vector2::new(hw, hh),
            Vector2::new(-hw, hh),
        ])?;
        Ok(Self {
            base,
            width,
            height,
        })
    }

    /// Horizontal extent.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle2D {
    fn vertices(&self) -> &[Vector2] {
        self.base.vertices()
    }
}

/// Triangle from three non-collinear points.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle2D {
    base: Polygon2D,
}

impl Triangle2D {
    /// Create a triangle; collinear points are rejected.
    pub fn new(
        a: Vector2,
        b: Vector2,
        c: Vector2,
    ) -> Result<Self, VantageError> {
        let base = Polygon2D::new(vec![a, b, c])?;
        if base.area() == 0.0 {
            return Err(VantageError::InvalidShape(
                "triangle vertices are collinear".to_owned(),
            ));
        }
        Ok(Self { base })
    }
}

impl Shape for Triangle2D {
    fn vertices(&self) -> &[Vector2] {
        self.base.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_needs_three_vertices() {
        let result = Polygon2D::new(vec![
            Vector2::ZERO,
            Vector2::new(1.0, 0.0),
        ]);
        assert!(matches!(result, Err(VantageError::InvalidShape(_))));
    }

    #[test]
    fn test_regular_polygon_rejections() {
        assert!(Polygon2D::regular(0.0, 6).is_err());
        assert!(Polygon2D::regular(-1.0, 6).is_err());
        assert!(Polygon2D::regular(1.0, 2).is_err());
    }

    #[test]
    fn test_regular_hexagon_area() {
        let hexagon = Polygon2D::regular(2.0, 6).unwrap();
        let expected = 3.0 * 3.0_f64.sqrt() / 2.0 * 4.0;
        assert!((hexagon.area() - expected).abs() < 1e-6);
        assert!(hexagon.centroid().magnitude() < 1e-9);
    }

    #[test]
    fn test_rectangle() {
        assert!(Rectangle2D::new(0.0, 1.0).is_err());
        assert!(Rectangle2D::new(2.0, -3.0).is_err());
        let rect = Rectangle2D::new(4.0, 3.0).unwrap();
        assert_eq!(rect.area(), 12.0);
        assert_eq!(rect.perimeter(), 14.0);
        assert_eq!(rect.centroid(), Vector2::ZERO);
        assert_eq!(rect.vertices().len(), 4);
    }

    #[test]
    fn test_triangle() {
        let collinear = Triangle2D::new(
            Vector2::ZERO,
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        );
        assert!(matches!(
            collinear,
            Err(VantageError::InvalidShape(_))
        ));

        let triangle = Triangle2D::new(
            Vector2::ZERO,
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 3.0),
        )
        .unwrap();
        assert_eq!(triangle.area(), 6.0);
        assert_eq!(triangle.perimeter(), 12.0);
    }
}
