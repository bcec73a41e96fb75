//! # Game Rules
//!
//! [`Game`] wraps a [`Scene`] and runs one tick of the brick-breaker loop:
//! steer the paddle with impulses, fire projectiles, step the simulation and
//! then apply the rules to whatever the step reported. A ball touching a brick
//! destroys the brick; a ball whose box leaves the play field is lost.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use physics::{BodyHandle, InstanceRaw, KinematicBody, Vec3};
use scene::{Role, Scene};

use crate::input::InputState;

/// Tunables for the rules layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// Horizontal force applied to the paddle for one tick of steering.
    pub paddle_force: f32,
    /// Fraction of the paddle's momentum removed per tick without steering.
    pub paddle_brake: f32,
    /// Minimum ticks between two shots.
    pub fire_cooldown: u32,
    pub projectile_speed: f32,
    pub projectile_mass: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_force: 0.2,
            paddle_brake: 0.5,
            fire_cooldown: 10,
            projectile_speed: 0.75,
            projectile_mass: 1.0,
        }
    }
}

/// Outcome of one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickEvents {
    pub tick: u64,
    pub contacts: usize,
    pub fired: Option<String>,
    pub bricks_destroyed: Vec<String>,
    pub projectiles_lost: Vec<String>,
}

pub struct Game {
    scene: Scene,
    config: GameConfig,
    paddle: BodyHandle,
    cooldown: u32,
    shots: u32,
    score: u32,
}

impl Game {
    /// # Errors
    ///
    /// Fails if the scene has no paddle.
    pub fn new(scene: Scene, config: GameConfig) -> Result<Self> {
        let paddle = scene
            .with_role(Role::Paddle)
            .next()
            .map(|e| e.body)
            .context("scene has no paddle")?;
        Ok(Self {
            scene,
            config,
            paddle,
            cooldown: 0,
            shots: 0,
            score: 0,
        })
    }

    /// Runs one tick.
    ///
    /// # Errors
    ///
    /// Fails if the paddle body has been removed from the simulation.
    pub fn tick(&mut self, input: &InputState) -> Result<TickEvents> {
        self.steer(input)?;
        let fired = self.fire(input)?;

        let report = self.scene.sim.step();
        let mut events = TickEvents {
            tick: report.tick,
            contacts: report.contacts.len(),
            fired,
            ..TickEvents::default()
        };

        let mut doomed_bricks = BTreeSet::new();
        for contact in &report.contacts {
            let (Some(a), Some(b)) = (
                self.scene.entity_for(contact.a),
                self.scene.entity_for(contact.b),
            ) else {
                continue;
            };
            match (a.role, b.role) {
                (Role::Ball, Role::Brick) => {
                    doomed_bricks.insert(b.body);
                }
                (Role::Brick, Role::Ball) => {
                    doomed_bricks.insert(a.body);
                }
                _ => {}
            }
        }
        for brick in doomed_bricks {
            if let Some(entity) = self.scene.despawn(brick) {
                tracing::info!(tick = events.tick, brick = %entity.id, "brick destroyed");
                self.score += 1;
                events.bricks_destroyed.push(entity.id);
            }
        }

        let extent = self.scene.sim.params().extent;
        let field = self.scene.field;
        let lost: Vec<BodyHandle> = self
            .scene
            .with_role(Role::Ball)
            .filter(|e| {
                self.scene
                    .sim
                    .body(e.body)
                    .is_some_and(|b| !field.contains(b.position(), extent))
            })
            .map(|e| e.body)
            .collect();
        for handle in lost {
            if let Some(entity) = self.scene.despawn(handle) {
                tracing::debug!(tick = events.tick, ball = %entity.id, "ball left the field");
                events.projectiles_lost.push(entity.id);
            }
        }

        Ok(events)
    }

    fn steer(&mut self, input: &InputState) -> Result<()> {
        let paddle = self
            .scene
            .sim
            .body(self.paddle)
            .context("paddle body is gone")?;
        let force = match input.steer() {
            s if s == 0.0 => {
                // brake: remove part of the horizontal momentum
                let v = paddle.velocity();
                Vec3::new(-v.x * paddle.mass() * self.config.paddle_brake, 0.0, 0.0)
            }
            s => Vec3::new(s * self.config.paddle_force, 0.0, 0.0),
        };
        self.scene.sim.apply_impulse(self.paddle, force, 1.0)?;
        Ok(())
    }

    fn fire(&mut self, input: &InputState) -> Result<Option<String>> {
        if self.cooldown > 0 {
            self.cooldown -= 1;
            return Ok(None);
        }
        if !input.fire {
            return Ok(None);
        }
        let paddle = self
            .scene
            .sim
            .body(self.paddle)
            .context("paddle body is gone")?;
        // Spawn clear of the paddle's box so the shot does not collide with it.
        let extent = self.scene.sim.params().extent;
        let pos = paddle.position() + Vec3::new(0.0, extent.y * 1.5, 0.0);
        let vel = Vec3::new(0.0, self.config.projectile_speed, 0.0);
        let body = KinematicBody::new(vel, pos, self.config.projectile_mass)?;

        let id = format!("shot-{}", self.shots);
        self.shots += 1;
        self.cooldown = self.config.fire_cooldown;
        self.scene.spawn(id.clone(), Role::Ball, body, Vec3::splat(0.5));
        tracing::debug!(shot = %id, position = ?pos, "fired");
        Ok(Some(id))
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn bricks_left(&self) -> usize {
        self.scene.count(Role::Brick)
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.bricks_left() == 0
    }

    /// Draw data for every live entity, rebuilt from current body positions.
    #[must_use]
    pub fn render_instances(&self) -> Vec<InstanceRaw> {
        physics::instances(&self.scene.transforms(), self.scene.sim.store())
    }
}
