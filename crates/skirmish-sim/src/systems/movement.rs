//! Steering and movement system.
//!
//! Per tick: hostiles acquire the nearest friendly unit as their target,
//! then every unit runs one damped-seek step (heading, separation,
//! acceleration, integration) against a start-of-phase position snapshot.

use glam::Vec2;
use hecs::World;

use skirmish_core::components::{Steering, Unit};
use skirmish_core::constants::AVOID_RADIUS;
use skirmish_core::enums::Faction;
use skirmish_core::types::{Position, Velocity};

/// Run target acquisition and one steering step for every unit.
pub fn run(world: &mut World) {
    retarget_hostiles(world);

    // Start-of-phase snapshot: every unit steers against the same view.
    let flock: Vec<(hecs::Entity, Faction, Vec2)> = {
        let mut query = world.query::<(&Unit, &Position)>();
        query
            .iter()
            .map(|(entity, (unit, pos))| (entity, unit.faction, pos.0))
            .collect()
    };

    for (entity, (unit, pos, vel, steering)) in
        world.query_mut::<(&Unit, &mut Position, &mut Velocity, &mut Steering)>()
    {
        step_unit(entity, unit, pos, vel, steering, &flock);
    }
}

/// Hostile units chase the position of the nearest friendly unit
/// (first-wins on ties). With no friendlies on the field the previous
/// target is kept.
fn retarget_hostiles(world: &mut World) {
    let allies: Vec<Vec2> = {
        let mut query = world.query::<(&Unit, &Position)>();
        query
            .iter()
            .filter(|(_, (unit, _))| unit.faction == Faction::Ally)
            .map(|(_, (_, pos))| pos.0)
            .collect()
    };

    if allies.is_empty() {
        return;
    }

    for (_entity, (unit, pos, steering)) in
        world.query_mut::<(&Unit, &Position, &mut Steering)>()
    {
        if unit.faction != Faction::Enemy {
            continue;
        }
        let mut nearest = steering.target;
        let mut nearest_dist = f32::INFINITY;
        for &ally_pos in &allies {
            let dist = pos.0.distance(ally_pos);
            if dist < nearest_dist {
                nearest_dist = dist;
                nearest = ally_pos;
            }
        }
        steering.target = nearest;
    }
}

/// One steering step: update the heading, then either seek the target or
/// come to rest when within one speed-step on both axes. Position is never
/// snapped onto the target.
fn step_unit(
    entity: hecs::Entity,
    unit: &Unit,
    pos: &mut Position,
    vel: &mut Velocity,
    steering: &mut Steering,
    flock: &[(hecs::Entity, Faction, Vec2)],
) {
    let dx = steering.target.x - pos.0.x;
    let dy = steering.target.y - pos.0.y;

    steering.facing = heading(dx, dy);

    if dx.abs() > unit.speed || dy.abs() > unit.speed {
        // Damped seek: desired direction plus separation, scaled to the
        // unit's speed, less the current velocity.
        let mut acc = Vec2::from_angle(steering.facing);
        acc += separation(entity, unit.faction, pos.0, flock);
        acc = acc.normalize_or_zero() * unit.speed;
        acc -= vel.0;

        vel.0 += acc;
        pos.0 += vel.0;
        steering.acc = acc;
    } else {
        vel.0 = Vec2::ZERO;
        steering.acc = Vec2::ZERO;
    }
}

/// Heading toward (dx, dy), straight up or down when dx is zero.
fn heading(dx: f32, dy: f32) -> f32 {
    if dx != 0.0 {
        dy.atan2(dx)
    } else if dy > 0.0 {
        std::f32::consts::FRAC_PI_2
    } else if dy < 0.0 {
        -std::f32::consts::FRAC_PI_2
    } else {
        0.0
    }
}

/// Same-faction repulsion: one unit-length push away from every flockmate
/// closer than AVOID_RADIUS. Opposing units never contribute, and exactly
/// coincident units do not repel.
fn separation(
    entity: hecs::Entity,
    faction: Faction,
    pos: Vec2,
    flock: &[(hecs::Entity, Faction, Vec2)],
) -> Vec2 {
    let mut push = Vec2::ZERO;
    for &(other, other_faction, other_pos) in flock {
        if other == entity || other_faction != faction {
            continue;
        }
        let away = pos - other_pos;
        let dist = away.length();
        if dist > 0.0 && dist < AVOID_RADIUS {
            push += away / dist;
        }
    }
    push
}
