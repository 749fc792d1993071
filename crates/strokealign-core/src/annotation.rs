//! Annotation layers and resolution of the most recent stroke.

use crate::error::{AlignError, AlignResult};
use crate::projector::ScreenProjector;
use crate::stroke::Stroke;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A freehand annotation stroke as stored by the host.
///
/// Viewport annotations hold world-space points; UV-editor annotations use
/// X and Y as UV coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStroke {
    pub points: Vec<DVec3>,
}

impl AnnotationStroke {
    pub fn new(points: Vec<DVec3>) -> Self {
        Self { points }
    }

    /// Project every point into 2D with `projector`.
    pub fn to_stroke(&self, projector: &dyn ScreenProjector) -> AlignResult<Stroke> {
        let points = self
            .points
            .iter()
            .map(|&p| projector.project(p).ok_or(AlignError::ProjectionFailed))
            .collect::<AlignResult<Vec<_>>>()?;
        Stroke::new(points).ok_or(AlignError::NoStroke)
    }
}

/// Strokes drawn on one frame of a layer, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationFrame {
    pub strokes: Vec<AnnotationStroke>,
}

/// An annotation layer with its frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayer {
    pub name: String,
    pub frames: Vec<AnnotationFrame>,
    /// Index into `frames`, if any frame is active.
    pub active_frame: Option<usize>,
}

impl AnnotationLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
            active_frame: None,
        }
    }

    pub fn active_frame(&self) -> Option<&AnnotationFrame> {
        self.frames.get(self.active_frame?)
    }

    pub fn active_frame_mut(&mut self) -> Option<&mut AnnotationFrame> {
        self.frames.get_mut(self.active_frame?)
    }
}

/// All annotation layers of one owner (scene, object or editor area).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationData {
    pub layers: Vec<AnnotationLayer>,
}

impl AnnotationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke to the active frame of the last layer.
    ///
    /// Creates a layer and a frame when there are none yet.
    pub fn push_stroke(&mut self, stroke: AnnotationStroke) {
        if self.layers.is_empty() {
            self.layers.push(AnnotationLayer::new("Note"));
        }
        let Some(layer) = self.layers.last_mut() else {
            return;
        };
        if layer.active_frame().is_none() {
            layer.frames.push(AnnotationFrame::default());
            layer.active_frame = Some(layer.frames.len() - 1);
        }
        if let Some(frame) = layer.active_frame_mut() {
            frame.strokes.push(stroke);
        }
    }

    /// The most recent stroke: last stroke of the last layer's active frame.
    pub fn latest_stroke(&self) -> Option<&AnnotationStroke> {
        self.layers.last()?.active_frame()?.strokes.last()
    }

    /// Whether a usable stroke exists.
    pub fn has_stroke(&self) -> bool {
        self.latest_stroke().is_some_and(|s| !s.points.is_empty())
    }

    /// Remove the most recent stroke. Returns whether one was removed.
    pub fn remove_latest_stroke(&mut self) -> bool {
        self.layers
            .last_mut()
            .and_then(|layer| layer.active_frame_mut())
            .and_then(|frame| frame.strokes.pop())
            .is_some()
    }
}

/// Where a resolved stroke came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeOrigin {
    /// Annotations owned by the edited object (or editor area).
    Object,
    /// Scene-level annotations.
    Scene,
}

/// Annotation sources available to one operation.
///
/// Resolution order is fixed: object-level annotations first, then
/// scene-level ones.
#[derive(Debug, Default)]
pub struct AnnotationContext<'a> {
    pub object: Option<&'a mut AnnotationData>,
    pub scene: Option<&'a mut AnnotationData>,
}

impl<'a> AnnotationContext<'a> {
    pub fn new(object: Option<&'a mut AnnotationData>, scene: Option<&'a mut AnnotationData>) -> Self {
        Self { object, scene }
    }

    /// Context with only scene-level annotations.
    pub fn scene(scene: &'a mut AnnotationData) -> Self {
        Self::new(None, Some(scene))
    }

    /// Context with only object- or area-level annotations.
    pub fn object(object: &'a mut AnnotationData) -> Self {
        Self::new(Some(object), None)
    }

    /// Resolve the most recent usable stroke.
    pub fn latest(&self) -> Option<(StrokeOrigin, &AnnotationStroke)> {
        let object = self
            .object
            .as_deref()
            .and_then(usable_stroke)
            .map(|stroke| (StrokeOrigin::Object, stroke));
        object.or_else(|| {
            self.scene
                .as_deref()
                .and_then(usable_stroke)
                .map(|stroke| (StrokeOrigin::Scene, stroke))
        })
    }

    /// Remove the most recent stroke from the given source.
    pub fn consume_latest(&mut self, origin: StrokeOrigin) -> bool {
        let data = match origin {
            StrokeOrigin::Object => self.object.as_deref_mut(),
            StrokeOrigin::Scene => self.scene.as_deref_mut(),
        };
        data.is_some_and(AnnotationData::remove_latest_stroke)
    }
}

fn usable_stroke(data: &AnnotationData) -> Option<&AnnotationStroke> {
    data.latest_stroke().filter(|stroke| !stroke.points.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::IdentityProjector;
    use kurbo::Point;

    fn line(y: f64) -> AnnotationStroke {
        AnnotationStroke::new(vec![DVec3::new(0.0, y, 0.0), DVec3::new(1.0, y, 0.0)])
    }

    #[test]
    fn test_latest_is_last_of_last_layer() {
        let mut data = AnnotationData::new();
        assert!(!data.has_stroke());

        data.push_stroke(line(1.0));
        data.push_stroke(line(2.0));
        assert_eq!(data.latest_stroke(), Some(&line(2.0)));

        let mut second = AnnotationLayer::new("Second");
        second.frames.push(AnnotationFrame { strokes: vec![line(3.0)] });
        second.active_frame = Some(0);
        data.layers.push(second);
        assert_eq!(data.latest_stroke(), Some(&line(3.0)));
    }

    #[test]
    fn test_layer_without_active_frame() {
        let mut data = AnnotationData::new();
        let mut layer = AnnotationLayer::new("Empty");
        layer.frames.push(AnnotationFrame { strokes: vec![line(1.0)] });
        data.layers.push(layer);
        assert!(data.latest_stroke().is_none());
    }

    #[test]
    fn test_remove_latest() {
        let mut data = AnnotationData::new();
        data.push_stroke(line(1.0));
        data.push_stroke(line(2.0));
        assert!(data.remove_latest_stroke());
        assert_eq!(data.latest_stroke(), Some(&line(1.0)));
        assert!(data.remove_latest_stroke());
        assert!(!data.remove_latest_stroke());
    }

    #[test]
    fn test_object_before_scene() {
        let mut object = AnnotationData::new();
        let mut scene = AnnotationData::new();
        object.push_stroke(line(1.0));
        scene.push_stroke(line(2.0));

        let context = AnnotationContext::new(Some(&mut object), Some(&mut scene));
        let (origin, stroke) = context.latest().unwrap();
        assert_eq!(origin, StrokeOrigin::Object);
        assert_eq!(stroke, &line(1.0));
    }

    #[test]
    fn test_falls_back_to_scene() {
        let mut object = AnnotationData::new();
        let mut scene = AnnotationData::new();
        scene.push_stroke(line(2.0));

        let mut context = AnnotationContext::new(Some(&mut object), Some(&mut scene));
        let (origin, _) = context.latest().unwrap();
        assert_eq!(origin, StrokeOrigin::Scene);

        assert!(context.consume_latest(StrokeOrigin::Scene));
        assert!(context.latest().is_none());
        assert!(!scene.has_stroke());
    }

    #[test]
    fn test_empty_stroke_skipped() {
        let mut scene = AnnotationData::new();
        scene.push_stroke(AnnotationStroke::default());
        let context = AnnotationContext::scene(&mut scene);
        assert!(context.latest().is_none());
    }

    #[test]
    fn test_to_stroke() {
        let stroke = line(0.5).to_stroke(&IdentityProjector).unwrap();
        assert_eq!(stroke.points(), &[Point::new(0.0, 0.5), Point::new(1.0, 0.5)]);
        assert_eq!(
            AnnotationStroke::default().to_stroke(&IdentityProjector),
            Err(AlignError::NoStroke)
        );
    }
}
