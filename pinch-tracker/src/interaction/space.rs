use glam::{Affine3A, Quat, Vec3};

use super::{DevicePose, SelectionRay};

/// Converts coordinates from an event's local space into the parent frame of its target.
///
/// Supplied by the host framework. Implemented for [`glam::Affine3A`], treated as a
/// `parent_from_local` transform.
pub trait SpaceConverter {
    /// Convert a point from local space into the target's parent space
    fn convert_point(&self, point: Vec3) -> Vec3;
    /// Convert an orientation from local space into the target's parent space
    fn convert_rotation(&self, rotation: Quat) -> Quat;
}

impl SpaceConverter for Affine3A {
    fn convert_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    fn convert_rotation(&self, rotation: Quat) -> Quat {
        let (_, parent_from_local, _) = self.to_scale_rotation_translation();
        parent_from_local * rotation
    }
}

/// Resolve a selection ray into the target's parent space, falling back to raw local values when
/// there is no target.
///
/// Returns `(origin, unit_direction)`, or `None` if the direction collapses to nothing.
pub fn resolve_selection_ray(
    ray: &SelectionRay,
    target: Option<&dyn SpaceConverter>,
) -> Option<(Vec3, Vec3)> {
    let (origin, tip) = match target {
        Some(target) => (
            target.convert_point(ray.origin),
            target.convert_point(ray.origin + ray.direction),
        ),
        None => (ray.origin, ray.origin + ray.direction),
    };

    (tip - origin)
        .try_normalize()
        .map(|direction| (origin, direction))
}

/// Resolve a device pose into the target's parent space, falling back to raw local values when
/// there is no target.
pub fn resolve_device_pose(pose: &DevicePose, target: Option<&dyn SpaceConverter>) -> DevicePose {
    match target {
        Some(target) => DevicePose {
            position: target.convert_point(pose.position),
            rotation: target.convert_rotation(pose.rotation),
        },
        None => *pose,
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    pub fn test_resolve_ray_without_target() {
        let ray = SelectionRay::new([0., 0., 0.].into(), [2., 0., 0.].into());
        let (origin, direction) = resolve_selection_ray(&ray, None).unwrap();
        assert_relative_eq!(origin, Vec3::ZERO);
        assert_relative_eq!(direction, Vec3::X);
    }

    #[test]
    pub fn test_resolve_ray_with_target() {
        let parent_from_local = Affine3A::from_rotation_translation(
            Quat::from_rotation_y(FRAC_PI_2),
            [0., 1., 0.].into(),
        );
        let ray = SelectionRay::new([1., 0., 0.].into(), [0., 0., -3.].into());
        let (origin, direction) = resolve_selection_ray(&ray, Some(&parent_from_local)).unwrap();

        // A quarter turn about Y takes +X to -Z and -Z to -X.
        assert_relative_eq!(origin, Vec3::new(0., 1., -1.), epsilon = 1e-6);
        assert_relative_eq!(direction, Vec3::NEG_X, epsilon = 1e-6);
    }

    #[test]
    pub fn test_resolve_ray_scaled_target_is_still_unit_length() {
        let parent_from_local = Affine3A::from_scale(Vec3::splat(10.));
        let ray = SelectionRay::new(Vec3::ONE, [0., 0.5, 0.].into());
        let (origin, direction) = resolve_selection_ray(&ray, Some(&parent_from_local)).unwrap();
        assert_relative_eq!(origin, Vec3::splat(10.));
        assert_relative_eq!(direction, Vec3::Y);
    }

    #[test]
    pub fn test_resolve_degenerate_ray() {
        let ray = SelectionRay::new(Vec3::ONE, Vec3::ZERO);
        assert!(resolve_selection_ray(&ray, None).is_none());

        let ray = SelectionRay::new(Vec3::ONE, Vec3::new(f32::NAN, 0., 0.));
        assert!(resolve_selection_ray(&ray, None).is_none());
    }

    #[test]
    pub fn test_resolve_device_pose() {
        let pose = DevicePose::new([1., 2., 3.].into(), Quat::from_rotation_x(0.3));
        assert_eq!(resolve_device_pose(&pose, None), pose);

        let parent_from_local = Affine3A::from_rotation_translation(
            Quat::from_rotation_z(0.5),
            [10., 0., 0.].into(),
        );
        let resolved = resolve_device_pose(&pose, Some(&parent_from_local));
        assert_relative_eq!(
            resolved.position,
            Quat::from_rotation_z(0.5) * Vec3::new(1., 2., 3.) + Vec3::new(10., 0., 0.),
            epsilon = 1e-5
        );
        assert_relative_eq!(
            resolved.rotation,
            Quat::from_rotation_z(0.5) * Quat::from_rotation_x(0.3),
            epsilon = 1e-5
        );
    }
}
