use crate::params::SceneParams;
use crate::surface::Viewport;
use glam::Vec2;

/// Rotation applied to the whole field before projection, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraState {
    pub rotation_x: f32,
    pub rotation_y: f32,
}

/// Eases the camera toward pointer-derived angles while drifting around Y.
#[derive(Clone, Debug)]
pub struct CameraController {
    state: CameraState,
    target: CameraState,
    drift_y: f32,
    smoothing: f32,
    pointer_gain: f32,
}

impl CameraController {
    pub fn new(params: &SceneParams) -> Self {
        Self {
            state: CameraState::default(),
            target: CameraState::default(),
            drift_y: params.camera_drift_y,
            smoothing: params.camera_smoothing,
            pointer_gain: params.pointer_gain,
        }
    }

    #[inline]
    pub fn state(&self) -> CameraState {
        self.state
    }

    #[inline]
    pub fn target(&self) -> CameraState {
        self.target
    }

    /// Retarget from a pointer position in surface pixels. Horizontal offset
    /// from the centre steers Y rotation, vertical offset steers X rotation.
    pub fn point_at(&mut self, pointer: Vec2, viewport: Viewport) {
        let offset = (pointer - viewport.center()) * self.pointer_gain;
        self.target.rotation_y = offset.x;
        self.target.rotation_x = offset.y;
    }

    /// Once per frame: drift, then ease both axes toward the target.
    pub fn tick(&mut self) {
        self.state.rotation_y += self.drift_y;
        self.state.rotation_y += (self.target.rotation_y - self.state.rotation_y) * self.smoothing;
        self.state.rotation_x += (self.target.rotation_x - self.state.rotation_x) * self.smoothing;
    }
}
