//! Signed distance functions and their boolean composition.
//!
//! Every node here is a conservative (1-Lipschitz) distance bound, which is what makes it
//! safe to advance a ray by the returned distance. A composite that can overestimate, such
//! as a smooth blend, does not belong in [`SdfNode`] unless the marcher is taught to
//! shorten its steps for it.

mod cuboid;
mod plane;
mod sphere;

pub use cuboid::Cuboid;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::error::RenderError;
use crate::math::*;

pub trait SDF {
    /// Signed distance from `p` to the surface, negative inside.
    fn distance(&self, p: Point3) -> f32;
}

#[derive(Clone, Debug, PartialEq)]
pub enum SdfNode {
    Sphere(Sphere),
    Plane(Plane),
    Cuboid(Cuboid),
    Union(Box<SdfNode>, Box<SdfNode>),
    Intersect(Box<SdfNode>, Box<SdfNode>),
    /// Carves the second child out of the first.
    Subtract(Box<SdfNode>, Box<SdfNode>),
    Tinted {
        albedo: RGBColor,
        inner: Box<SdfNode>,
    },
}

impl From<Sphere> for SdfNode {
    fn from(data: Sphere) -> Self {
        SdfNode::Sphere(data)
    }
}

impl From<Plane> for SdfNode {
    fn from(data: Plane) -> Self {
        SdfNode::Plane(data)
    }
}

impl From<Cuboid> for SdfNode {
    fn from(data: Cuboid) -> Self {
        SdfNode::Cuboid(data)
    }
}

impl SdfNode {
    pub fn sphere(center: Point3, radius: f32) -> Result<Self, RenderError> {
        Sphere::new(center, radius).map(SdfNode::from)
    }

    pub fn plane(normal: Vec3, offset: f32) -> Result<Self, RenderError> {
        Plane::new(normal, offset).map(SdfNode::from)
    }

    pub fn cuboid(center: Point3, half_extents: Vec3) -> Result<Self, RenderError> {
        Cuboid::new(center, half_extents).map(SdfNode::from)
    }

    pub fn union(self, other: impl Into<SdfNode>) -> Self {
        SdfNode::Union(Box::new(self), Box::new(other.into()))
    }

    pub fn intersect(self, other: impl Into<SdfNode>) -> Self {
        SdfNode::Intersect(Box::new(self), Box::new(other.into()))
    }

    pub fn subtract(self, other: impl Into<SdfNode>) -> Self {
        SdfNode::Subtract(Box::new(self), Box::new(other.into()))
    }

    pub fn tinted(self, albedo: RGBColor) -> Self {
        SdfNode::Tinted {
            albedo,
            inner: Box::new(self),
        }
    }

    /// Distance together with the albedo of the surface that produced it.
    ///
    /// Composites follow whichever child decided the distance, so the color belongs to the
    /// surface the marcher actually converges onto. Ties go to the first child. The
    /// innermost tint wins; `None` means no tint applies.
    pub fn sample(&self, p: Point3) -> (f32, Option<RGBColor>) {
        match self {
            SdfNode::Sphere(inner) => (inner.distance(p), None),
            SdfNode::Plane(inner) => (inner.distance(p), None),
            SdfNode::Cuboid(inner) => (inner.distance(p), None),
            SdfNode::Union(a, b) => {
                let (da, ca) = a.sample(p);
                let (db, cb) = b.sample(p);
                if db < da {
                    (db, cb)
                } else {
                    (da, ca)
                }
            }
            SdfNode::Intersect(a, b) => {
                let (da, ca) = a.sample(p);
                let (db, cb) = b.sample(p);
                if db > da {
                    (db, cb)
                } else {
                    (da, ca)
                }
            }
            SdfNode::Subtract(a, b) => {
                let (da, ca) = a.sample(p);
                let (db, cb) = b.sample(p);
                if -db > da {
                    (-db, cb)
                } else {
                    (da, ca)
                }
            }
            SdfNode::Tinted { albedo, inner } => {
                let (d, color) = inner.sample(p);
                (d, color.or(Some(*albedo)))
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            SdfNode::Sphere(_) | SdfNode::Plane(_) | SdfNode::Cuboid(_) => 1,
            SdfNode::Union(a, b) | SdfNode::Intersect(a, b) | SdfNode::Subtract(a, b) => {
                1 + a.depth().max(b.depth())
            }
            SdfNode::Tinted { inner, .. } => 1 + inner.depth(),
        }
    }
}

impl SDF for SdfNode {
    fn distance(&self, p: Point3) -> f32 {
        match self {
            SdfNode::Sphere(inner) => inner.distance(p),
            SdfNode::Plane(inner) => inner.distance(p),
            SdfNode::Cuboid(inner) => inner.distance(p),
            SdfNode::Union(a, b) => a.distance(p).min(b.distance(p)),
            SdfNode::Intersect(a, b) => a.distance(p).max(b.distance(p)),
            SdfNode::Subtract(a, b) => a.distance(p).max(-b.distance(p)),
            SdfNode::Tinted { inner, .. } => inner.distance(p),
        }
    }
}

/// Immutable scene for one frame. The root's distance is the marcher's only query.
#[derive(Clone, Debug)]
pub struct Scene {
    root: SdfNode,
}

impl Scene {
    pub fn new(root: impl Into<SdfNode>) -> Self {
        Scene { root: root.into() }
    }

    pub fn root(&self) -> &SdfNode {
        &self.root
    }

    pub fn distance(&self, p: Point3) -> f32 {
        self.root.distance(p)
    }

    /// Flat surface color at `p`, white where nothing is tinted.
    pub fn albedo(&self, p: Point3) -> RGBColor {
        self.root.sample(p).1.unwrap_or(RGBColor::WHITE)
    }
}
