/// State shared by the dispatcher and the render step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    pub is_animating: bool,
    /// Accumulated rotation in degrees. Never wrapped; it only feeds a
    /// periodic rotation.
    pub rotation_angle: f32,
}

impl AnimationState {
    /// Degrees added per animated frame.
    pub const ROTATION_STEP: f32 = 0.01;

    #[must_use]
    pub fn new() -> Self {
        Self {
            is_animating: true,
            rotation_angle: 0.0,
        }
    }

    pub fn toggle(&mut self) {
        self.is_animating = !self.is_animating;
    }

    /// Advances the rotation by one step if animating.
    pub fn advance(&mut self) {
        if self.is_animating {
            self.rotation_angle += Self::ROTATION_STEP;
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}
