//! Zoom/pan view state.
//!
//! The viewport is where the shell's window is looking: a scale factor and
//! the scene point under the window's top-left corner. It affects only how
//! scene coordinates project to screen pixels; grid indices, fog state,
//! and token positions never depend on it, so view changes record no
//! session events.

use bm_core::ScenePoint;

/// Default multiplier for one zoom step.
pub const DEFAULT_ZOOM_STEP: f64 = 1.15;

/// Scale and scene-space origin of the shell's view onto the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    origin: ScenePoint,
    zoom_step: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            origin: ScenePoint::default(),
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl Viewport {
    /// Create a viewport at scale 1.0, origin (0, 0), with the given zoom
    /// step multiplier.
    pub fn new(zoom_step: f64) -> Self {
        Self {
            zoom_step,
            ..Self::default()
        }
    }

    /// Current scale factor (screen pixels per scene unit).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scene point currently under the top-left corner of the view.
    pub fn origin(&self) -> ScenePoint {
        self.origin
    }

    /// Multiply the scale by `factor`, leaving the origin in place; a
    /// shell that wants cursor-anchored zoom follows up with [`pan`].
    ///
    /// Non-positive or non-finite factors are ignored.
    ///
    /// [`pan`]: Self::pan
    pub fn zoom(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    /// One zoom-in step using the configured multiplier.
    pub fn zoom_in(&mut self) {
        self.zoom(self.zoom_step);
    }

    /// One zoom-out step: the exact inverse of [`zoom_in`](Self::zoom_in).
    pub fn zoom_out(&mut self) {
        self.zoom(1.0 / self.zoom_step);
    }

    /// Shift the view origin by a scene-space delta. Screen-pixel drag
    /// deltas divide by [`scale`](Self::scale) first.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.origin.x += dx;
        self.origin.y += dy;
    }

    /// Convert a screen-pixel position to scene coordinates.
    pub fn screen_to_scene(&self, screen_x: f64, screen_y: f64) -> ScenePoint {
        ScenePoint::new(
            self.origin.x + screen_x / self.scale,
            self.origin.y + screen_y / self.scale,
        )
    }

    /// Convert a scene point to screen-pixel coordinates.
    pub fn scene_to_screen(&self, point: ScenePoint) -> (f64, f64) {
        (
            (point.x - self.origin.x) * self.scale,
            (point.y - self.origin.y) * self.scale,
        )
    }

    /// Scene point at the center of a view of the given pixel size.
    /// Shells drop newly created tokens here.
    pub fn center(&self, view_width: f64, view_height: f64) -> ScenePoint {
        self.screen_to_scene(view_width / 2.0, view_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewport_is_identity() {
        let view = Viewport::default();
        assert!((view.scale() - 1.0).abs() < f64::EPSILON);
        assert_eq!(view.origin(), ScenePoint::new(0.0, 0.0));
        let p = view.screen_to_scene(320.0, 240.0);
        assert_eq!(p, ScenePoint::new(320.0, 240.0));
    }

    #[test]
    fn zoom_multiplies_scale() {
        let mut view = Viewport::default();
        view.zoom(2.0);
        view.zoom(2.0);
        assert!((view.scale() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zoom_in_and_out_cancel() {
        let mut view = Viewport::default();
        view.zoom_in();
        assert!((view.scale() - 1.15).abs() < f64::EPSILON);
        view.zoom_out();
        assert!((view.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn garbage_zoom_factors_are_ignored() {
        let mut view = Viewport::default();
        view.zoom(0.0);
        view.zoom(-3.0);
        view.zoom(f64::NAN);
        view.zoom(f64::INFINITY);
        assert!((view.scale() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zoom_leaves_origin_in_place() {
        let mut view = Viewport::default();
        view.pan(100.0, 50.0);
        view.zoom(2.0);
        assert_eq!(view.origin(), ScenePoint::new(100.0, 50.0));
    }

    #[test]
    fn pan_shifts_what_the_screen_sees() {
        let mut view = Viewport::default();
        view.pan(100.0, 50.0);
        let p = view.screen_to_scene(0.0, 0.0);
        assert_eq!(p, ScenePoint::new(100.0, 50.0));
    }

    #[test]
    fn screen_and_scene_round_trip() {
        let mut view = Viewport::new(1.15);
        view.zoom(2.5);
        view.pan(-40.0, 13.5);
        let scene = view.screen_to_scene(123.0, 456.0);
        let (sx, sy) = view.scene_to_screen(scene);
        assert!((sx - 123.0).abs() < 1e-9);
        assert!((sy - 456.0).abs() < 1e-9);
    }

    #[test]
    fn center_is_the_middle_of_the_view() {
        let mut view = Viewport::default();
        assert_eq!(view.center(800.0, 600.0), ScenePoint::new(400.0, 300.0));
        view.zoom(2.0);
        view.pan(100.0, 100.0);
        // At 2x, 800x600 pixels span 400x300 scene units from the origin
        assert_eq!(view.center(800.0, 600.0), ScenePoint::new(300.0, 250.0));
    }
}
