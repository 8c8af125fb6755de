use glam::{Affine3A, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The component's position relative to whatever frame the pinches were resolved into.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct LocalTransform {
    /// The translation of the entity
    pub translation: Vec3,
    /// The rotation of the entity
    pub rotation: Quat,
    /// The non-uniform scale of the entity
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Convenience function to convert the [`LocalTransform`] into a [`glam::Affine3A`]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Point the transform along a ray, treating `-Z` as forward
    pub fn look_along(&mut self, origin: Vec3, direction: Vec3) {
        self.translation = origin;
        self.rotation = Quat::from_rotation_arc(Vec3::NEG_Z, direction);
    }
}
