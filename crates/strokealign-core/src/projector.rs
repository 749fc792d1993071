//! Conversion between world space and 2D viewport space.

use glam::{DMat4, DVec3};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Host viewport projection.
///
/// Both directions return `None` when the viewport cannot map the point,
/// which callers treat as "operation not applicable".
pub trait ScreenProjector {
    /// Project a world-space point into viewport coordinates.
    fn project(&self, world: DVec3) -> Option<Point>;

    /// Reconstruct a world-space point on the view ray through `screen`.
    ///
    /// `depth` is a world-space reference point supplying the depth that a
    /// 2D coordinate alone cannot recover.
    fn unproject(&self, screen: Point, depth: DVec3) -> Option<DVec3>;
}

/// Projector for spaces that are already 2D (UV editor).
///
/// X and Y pass through and Z is taken from the reference point.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjector;

impl ScreenProjector for IdentityProjector {
    fn project(&self, world: DVec3) -> Option<Point> {
        Some(Point::new(world.x, world.y))
    }

    fn unproject(&self, screen: Point, depth: DVec3) -> Option<DVec3> {
        Some(DVec3::new(screen.x, screen.y, depth.z))
    }
}

/// A 3D viewport region with a camera.
///
/// Screen coordinates have their origin at the region's top-left corner with
/// Y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportProjector {
    /// Combined projection * view matrix.
    pub view_proj: DMat4,
    /// Region in screen coordinates.
    pub region: Rect,
}

impl ViewportProjector {
    /// Minimum clip-space w; anything at or behind the camera plane is rejected.
    const MIN_CLIP_W: f64 = 1.0e-9;

    pub fn new(view_proj: DMat4, region: Rect) -> Self {
        Self { view_proj, region }
    }

    /// Perspective camera looking from `eye` at `target`.
    pub fn perspective(eye: DVec3, target: DVec3, up: DVec3, fov_y: f64, region: Rect) -> Self {
        let aspect = region.width().max(1.0) / region.height().max(1.0);
        let view = DMat4::look_at_rh(eye, target, up);
        let projection = DMat4::perspective_rh(fov_y, aspect, 0.01, 1000.0);
        Self::new(projection * view, region)
    }

    /// Orthographic camera looking from `eye` at `target`.
    ///
    /// `scale` is the half-height of the visible area in world units.
    pub fn orthographic(eye: DVec3, target: DVec3, up: DVec3, scale: f64, region: Rect) -> Self {
        let aspect = region.width().max(1.0) / region.height().max(1.0);
        let view = DMat4::look_at_rh(eye, target, up);
        let half_w = scale * aspect;
        let projection = DMat4::orthographic_rh(-half_w, half_w, -scale, scale, 0.01, 1000.0);
        Self::new(projection * view, region)
    }

    /// Clip-space to normalized device coordinates, if representable.
    fn to_ndc(&self, world: DVec3) -> Option<DVec3> {
        let clip = self.view_proj * world.extend(1.0);
        if clip.w <= Self::MIN_CLIP_W {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        ndc.is_finite().then_some(ndc)
    }
}

impl ScreenProjector for ViewportProjector {
    fn project(&self, world: DVec3) -> Option<Point> {
        let ndc = self.to_ndc(world)?;
        let x = self.region.x0 + (ndc.x * 0.5 + 0.5) * self.region.width();
        let y = self.region.y0 + (0.5 - ndc.y * 0.5) * self.region.height();
        Some(Point::new(x, y))
    }

    fn unproject(&self, screen: Point, depth: DVec3) -> Option<DVec3> {
        if self.region.width() <= 0.0 || self.region.height() <= 0.0 {
            return None;
        }
        // Keeping the reference point's NDC depth puts the result on the
        // plane through `depth` parallel to the view plane.
        let depth_ndc = self.to_ndc(depth)?;
        let ndc_x = ((screen.x - self.region.x0) / self.region.width()) * 2.0 - 1.0;
        let ndc_y = 1.0 - ((screen.y - self.region.y0) / self.region.height()) * 2.0;

        let world = self
            .view_proj
            .inverse()
            .project_point3(DVec3::new(ndc_x, ndc_y, depth_ndc.z));
        world.is_finite().then_some(world)
    }
}
