//! Transform matrix utilities for rendering bodies
//!
//! A body's position lives only in the [`BodyStore`]. The renderer keeps a
//! [`RenderTransform`] per drawable, which names the body and a visual scale,
//! and rebuilds the model matrix from the current position whenever it draws.
//! The visual scale never feeds back into collision extents.

use crate::store::{BodyHandle, BodyStore};
use crate::types::Vec3;
use glam::Mat4;

/// Convert a position and scale to a column-major 4x4 model matrix,
/// `T(position) * S(scale)`.
#[must_use]
pub fn to_transform_matrix_scaled(position: Vec3, scale: Vec3) -> [[f32; 4]; 4] {
    let transform = Mat4::from_translation(position.into()) * Mat4::from_scale(scale.into());
    transform.to_cols_array_2d()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTransform {
    pub body: BodyHandle,
    pub scale: Vec3,
}

impl RenderTransform {
    #[must_use]
    pub fn new(body: BodyHandle, scale: Vec3) -> Self {
        Self { body, scale }
    }

    /// Model matrix for the body's current position, or `None` once the body
    /// has been removed.
    #[must_use]
    pub fn model_matrix(&self, store: &BodyStore) -> Option<[[f32; 4]; 4]> {
        store
            .get(self.body)
            .map(|body| to_transform_matrix_scaled(body.position(), self.scale))
    }
}

/// Per-instance draw data, laid out for direct upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

/// Draw data for every transform whose body is still alive.
#[must_use]
pub fn instances(transforms: &[RenderTransform], store: &BodyStore) -> Vec<InstanceRaw> {
    transforms
        .iter()
        .filter_map(|t| t.model_matrix(store))
        .map(|model| InstanceRaw { model })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::KinematicBody;

    #[test]
    fn test_identity_transform() {
        let transform = to_transform_matrix_scaled(Vec3::ZERO, Vec3::ONE);
        assert_eq!(transform, Mat4::IDENTITY.to_cols_array_2d());
    }

    #[test]
    fn test_translation_and_scale() {
        let transform = to_transform_matrix_scaled(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.25, 0.5, 1.0));
        assert_eq!(transform[0], [0.25, 0.0, 0.0, 0.0]);
        assert_eq!(transform[1], [0.0, 0.5, 0.0, 0.0]);
        assert_eq!(transform[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn follows_body_and_drops_removed_ones() {
        let mut store = BodyStore::new();
        let moving = store.insert(KinematicBody::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0).unwrap());
        let doomed = store.insert(KinematicBody::immovable(Vec3::new(5.0, 5.0, 0.0)).unwrap());
        let transforms = [
            RenderTransform::new(moving, Vec3::ONE),
            RenderTransform::new(doomed, Vec3::ONE),
        ];

        store.get_mut(moving).unwrap().move_once();
        let model = transforms[0].model_matrix(&store).unwrap();
        assert_eq!(model[3], [1.0, 0.0, 0.0, 1.0]);

        store.remove(doomed);
        let data = instances(&transforms, &store);
        assert_eq!(data.len(), 1);
        assert_eq!(bytemuck::cast_slice::<InstanceRaw, u8>(&data).len(), 64);
    }
}
