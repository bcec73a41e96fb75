//! Axis-aligned bounding volumes derived from body positions.

use crate::body::KinematicBody;
use crate::error::PhysicsError;
use crate::types::Vec3;

/// Extent of every collision box in the demo.
pub const UNIT_EXTENT: Vec3 = Vec3::ONE;

/// Which axes take part in the overlap test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapAxes {
    /// x and y only; the play field is flat and z is ignored.
    #[default]
    Planar,
    /// x, y and z.
    Spatial,
}

/// Axis-aligned box with minimum corner `min` and positive `extent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingVolume {
    min: Vec3,
    extent: Vec3,
}

impl BoundingVolume {
    /// # Errors
    ///
    /// Returns [`PhysicsError::DegenerateExtent`] if any extent component is
    /// zero, negative or not finite.
    pub fn new(min: Vec3, extent: Vec3) -> Result<Self, PhysicsError> {
        validate_extent(extent)?;
        Ok(Self { min, extent })
    }

    /// The box of `body`, using the body position as the minimum corner.
    /// `extent` must already be validated.
    #[must_use]
    pub fn of(body: &KinematicBody, extent: Vec3) -> Self {
        Self {
            min: body.position(),
            extent,
        }
    }

    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.min + self.extent
    }

    #[must_use]
    pub fn extent(&self) -> Vec3 {
        self.extent
    }

    /// Inclusive overlap: boxes that share only a face or an edge intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self, axes: OverlapAxes) -> bool {
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());
        let planar = b_max.x >= a_min.x
            && b_min.x <= a_max.x
            && b_max.y >= a_min.y
            && b_min.y <= a_max.y;
        match axes {
            OverlapAxes::Planar => planar,
            OverlapAxes::Spatial => planar && b_max.z >= a_min.z && b_min.z <= a_max.z,
        }
    }
}

/// Unit-extent planar overlap of two bodies.
#[must_use]
pub fn overlaps(a: &KinematicBody, b: &KinematicBody) -> bool {
    BoundingVolume::of(a, UNIT_EXTENT).overlaps(&BoundingVolume::of(b, UNIT_EXTENT), OverlapAxes::Planar)
}

pub(crate) fn validate_extent(extent: Vec3) -> Result<(), PhysicsError> {
    let ok = extent.to_array().iter().all(|e| e.is_finite() && *e > 0.0);
    if ok {
        Ok(())
    } else {
        Err(PhysicsError::DegenerateExtent(extent.to_array()))
    }
}
