use glam::Vec3;

/// Movement intent for one simulation tick, already decoupled from any
/// windowing backend.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    /// Camera heading in radians; 0 looks down -z.
    pub yaw: f32,
}

impl PlayerInput {
    pub fn is_moving(&self) -> bool {
        self.forward != self.backward || self.left != self.right
    }

    /// Unit horizontal direction in world space, zero when standing still.
    pub fn direction(&self) -> Vec3 {
        let axis_z = f32::from(u8::from(self.forward)) - f32::from(u8::from(self.backward));
        let axis_x = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));

        let (sin, cos) = self.yaw.sin_cos();
        let forward = Vec3::new(-sin, 0.0, -cos);
        let right = Vec3::new(cos, 0.0, -sin);
        (forward * axis_z + right * axis_x).normalize_or_zero()
    }
}
