use hecs::World;

use crate::{
    components::{LocalTransform, PinchPointer},
    contexts::PinchContext,
};

/// Pinch pointers system
/// Copies each hand's pinch onto the entities following it. While a hand is pinching its pointers
/// sit at the selection ray origin facing along the ray; otherwise they are left where they were.
pub fn pinch_pointers_system(world: &mut World, pinch_context: &PinchContext) {
    for (_, (pointer, local_transform)) in
        world.query_mut::<(&mut PinchPointer, &mut LocalTransform)>()
    {
        let slot = pinch_context.slot(pointer.handedness);
        pointer.is_pinching = slot.is_pinching();

        if let Some((origin, direction)) = slot.current_selection_ray() {
            local_transform.look_along(origin, direction);
        }
    }
}
