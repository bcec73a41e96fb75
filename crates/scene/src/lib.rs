#![deny(clippy::all, clippy::pedantic)]
//! Scene descriptions for the brick-breaker demo.
//!
//! A scene file lists every body with a role, an initial state and a visual
//! scale, plus optional simulation parameters and the play-field bounds:
//!
//! ```json
//! {
//!   "params": { "overlap_axes": "planar", "extent": [1, 1, 1] },
//!   "field": { "min": [-1, -4], "max": [16, 24] },
//!   "bodies": [
//!     { "id": "paddle", "role": "paddle", "pos": [7, 0, 0], "mass": 10 },
//!     { "id": "wall-left", "role": "wall", "pos": [-1, 0, 0], "immovable": true }
//!   ]
//! }
//! ```

use anyhow::{bail, Result};
use physics::{
    BodyHandle, KinematicBody, OverlapAxes, RenderTransform, SimParams, Simulation, Vec3,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Deserialize, Debug, Clone)]
pub struct SceneFile {
    #[serde(default)]
    pub params: Option<ParamsDef>,
    #[serde(default)]
    pub field: Field,
    pub bodies: Vec<BodyDef>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct ParamsDef {
    #[serde(default)]
    pub overlap_axes: AxesDef,
    #[serde(default = "unit_vec")]
    pub extent: [f32; 3],
    #[serde(default)]
    pub damping: Option<f32>,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxesDef {
    #[default]
    Planar,
    Spatial,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Paddle,
    Ball,
    Wall,
    Brick,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BodyDef {
    pub id: String,
    pub role: Role,
    pub pos: [f32; 3],
    #[serde(default = "zero_vec")]
    pub vel: [f32; 3],
    #[serde(default = "unit_mass")]
    pub mass: f32,
    #[serde(default)]
    pub immovable: bool,
    #[serde(default = "unit_vec")]
    pub scale: [f32; 3],
}

/// Rectangle on the x/y plane that projectiles must stay inside.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Field {
    /// `true` while the body's box still touches the field.
    #[must_use]
    pub fn contains(&self, pos: Vec3, extent: Vec3) -> bool {
        pos.x + extent.x >= self.min[0]
            && pos.x <= self.max[0]
            && pos.y + extent.y >= self.min[1]
            && pos.y <= self.max[1]
    }
}

impl Field {
    /// # Errors
    ///
    /// Fails if a bound is not finite or `min` exceeds `max` on either axis.
    pub fn validate(&self) -> Result<()> {
        if !self.min.iter().chain(&self.max).all(|b| b.is_finite()) {
            bail!("field bounds must be finite: {:?}", self);
        }
        if self.min[0] > self.max[0] || self.min[1] > self.max[1] {
            bail!("field min {:?} exceeds max {:?}", self.min, self.max);
        }
        Ok(())
    }
}

impl Default for Field {
    fn default() -> Self {
        Self {
            min: [-50.0, -50.0],
            max: [50.0, 50.0],
        }
    }
}

fn zero_vec() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn unit_vec() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn unit_mass() -> f32 {
    1.0
}

impl From<ParamsDef> for SimParams {
    fn from(def: ParamsDef) -> Self {
        SimParams {
            overlap_axes: match def.overlap_axes {
                AxesDef::Planar => OverlapAxes::Planar,
                AxesDef::Spatial => OverlapAxes::Spatial,
            },
            extent: Vec3::from_array(def.extent),
            damping: def.damping,
        }
    }
}

impl FromStr for SceneFile {
    type Err = anyhow::Error;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl SceneFile {
    /// Builds the simulation and the entity table.
    ///
    /// # Errors
    ///
    /// Fails on duplicate ids, an inverted or non-finite field, invalid
    /// parameters or an invalid body (non-positive mass, non-finite state).
    pub fn into_scene(self) -> Result<Scene> {
        self.field.validate()?;
        let params = self.params.map(SimParams::from).unwrap_or_default();
        let sim = Simulation::with_params(params)?;
        let mut scene = Scene {
            sim,
            entities: Vec::with_capacity(self.bodies.len()),
            field: self.field,
        };

        let mut seen = HashSet::new();
        for def in self.bodies {
            if !seen.insert(def.id.clone()) {
                bail!("duplicate body id {:?}", def.id);
            }
            let pos = Vec3::from_array(def.pos);
            let body = if def.immovable {
                KinematicBody::immovable(pos)
            } else {
                KinematicBody::new(Vec3::from_array(def.vel), pos, def.mass)
            }
            .map_err(|e| anyhow::anyhow!("body {:?}: {e}", def.id))?;
            scene.spawn(def.id, def.role, body, Vec3::from_array(def.scale));
        }

        tracing::debug!(entities = scene.entities.len(), "scene built");
        Ok(scene)
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub id: String,
    pub role: Role,
    pub body: BodyHandle,
    pub transform: RenderTransform,
}

/// A simulation plus the game entities that own its bodies.
#[derive(Debug, Clone)]
pub struct Scene {
    pub sim: Simulation,
    pub entities: Vec<Entity>,
    pub field: Field,
}

impl Scene {
    /// Adds a body and the entity owning it.
    pub fn spawn(&mut self, id: String, role: Role, body: KinematicBody, scale: Vec3) -> BodyHandle {
        let handle = self.sim.add_body(body);
        self.entities.push(Entity {
            id,
            role,
            body: handle,
            transform: RenderTransform::new(handle, scale),
        });
        handle
    }

    /// Removes the entity owning `body` and the body itself.
    pub fn despawn(&mut self, body: BodyHandle) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.body == body)?;
        self.sim.remove_body(body);
        Some(self.entities.remove(idx))
    }

    #[must_use]
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn entity_for(&self, body: BodyHandle) -> Option<&Entity> {
        self.entities.iter().find(|e| e.body == body)
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.role == role)
    }

    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    #[must_use]
    pub fn transforms(&self) -> Vec<RenderTransform> {
        self.entities.iter().map(|e| e.transform).collect()
    }
}
