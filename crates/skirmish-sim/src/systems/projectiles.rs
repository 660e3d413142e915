//! Projectile system: flight integration, bounds checks, and the impact
//! state machine.
//!
//! Hostile-origin asymmetry: projectiles only ever damage friendly units.
//! Impact damage is queued during iteration and applied afterwards.

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Health, Hitbox, Projectile, Unit};
use skirmish_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, EXPLOSION_TICKS};
use skirmish_core::enums::{Faction, ProjectileKind, ProjectilePhase};
use skirmish_core::types::{Position, Rect, Velocity};

/// Damage queued against an overlapped unit during the projectile pass.
struct Impact {
    target: hecs::Entity,
    attack: f32,
}

/// Advance every projectile one tick: integrate flight, expire anything
/// out of bounds, resolve impacts, and advance detonation frames.
pub fn run(world: &mut World) {
    // Friendly unit rectangles, fixed for the tick.
    let targets: Vec<(hecs::Entity, Rect)> = {
        let mut query = world.query::<(&Unit, &Position, &Hitbox)>();
        query
            .iter()
            .filter(|(_, (unit, _, _))| unit.faction == Faction::Ally)
            .map(|(entity, (_, pos, hitbox))| (entity, Rect::from_center(pos.0, hitbox.size)))
            .collect()
    };

    let mut impacts: Vec<Impact> = Vec::new();

    for (_entity, (projectile, pos, vel, hitbox)) in
        world.query_mut::<(&mut Projectile, &mut Position, &mut Velocity, &Hitbox)>()
    {
        if projectile.phase == ProjectilePhase::Flying {
            integrate(projectile, pos, vel);
        }

        // Bounds removal applies regardless of state, and a projectile
        // leaving the arena performs no collision check that tick.
        if out_of_bounds(pos.0) {
            projectile.phase = ProjectilePhase::Expired;
            continue;
        }

        match projectile.phase {
            ProjectilePhase::Flying => {
                let rect = Rect::from_center(pos.0, hitbox.size);
                let mut struck = false;
                for &(target, target_rect) in &targets {
                    if rect.intersects(&target_rect) {
                        impacts.push(Impact {
                            target,
                            attack: projectile.attack,
                        });
                        struck = true;
                    }
                }
                if struck {
                    projectile.phase = match projectile.kind {
                        // Arrows are spent on impact; cleanup removes them
                        // this same tick.
                        ProjectileKind::Arrow => ProjectilePhase::Hit,
                        // Fireballs stop and detonate in place.
                        ProjectileKind::Fireball => {
                            projectile.explosion_frame = 0;
                            ProjectilePhase::Exploding
                        }
                    };
                }
            }
            ProjectilePhase::Exploding => {
                // Stationary, one animation frame per tick, no further damage.
                projectile.explosion_frame += 1;
                if projectile.explosion_frame >= EXPLOSION_TICKS {
                    projectile.phase = ProjectilePhase::Expired;
                }
            }
            ProjectilePhase::Hit | ProjectilePhase::Expired => {}
        }
    }

    // Apply queued impact damage after the projectile iteration.
    for impact in impacts {
        if let Ok(mut health) = world.get::<&mut Health>(impact.target) {
            health.current -= impact.attack;
            health.just_damaged = true;
        }
    }
}

/// Damped-seek flight along the fixed direction: after the first tick a
/// projectile covers exactly `speed` per tick.
fn integrate(projectile: &Projectile, pos: &mut Position, vel: &mut Velocity) {
    let mut acc = Vec2::from_angle(projectile.dir) * projectile.speed;
    acc -= vel.0;
    vel.0 += acc;
    pos.0 += vel.0;
}

/// Outside [0, width] × [0, height].
fn out_of_bounds(pos: Vec2) -> bool {
    pos.x < 0.0 || pos.x > ARENA_WIDTH || pos.y < 0.0 || pos.y > ARENA_HEIGHT
}
