use eframe::egui::{Pos2, Vec2};

pub(super) const CENTER_SPRING_STRENGTH: f32 = 0.01;
pub(super) const RELATIONSHIP_SPRING_STRENGTH: f32 = 0.02;
pub(super) const REPULSION_STRENGTH: f32 = 5.0;
pub(super) const OVERLAP_PUSH_STRENGTH: f32 = 0.5;
pub(super) const VELOCITY_DAMPING: f32 = 0.8;

pub(super) fn min_safe_distance(node_radius: f32) -> f32 {
    node_radius * 2.0 + 20.0
}

pub(super) fn relationship_rest_length(node_radius: f32) -> f32 {
    node_radius * 3.0 + 30.0
}

pub(super) fn spring_toward(from: Pos2, to: Pos2, target_distance: f32, strength: f32) -> Vec2 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    (delta / distance) * ((distance - target_distance) * strength)
}

pub(super) fn repulsion_from(
    node: Pos2,
    neighbor: Pos2,
    node_radius: f32,
    repulsion_distance: f32,
) -> Vec2 {
    let delta = node - neighbor;
    let distance = delta.length();
    if distance <= f32::EPSILON || distance >= repulsion_distance {
        return Vec2::ZERO;
    }

    let direction = delta / distance;
    let closeness = (repulsion_distance - distance) / repulsion_distance;
    let mut magnitude = REPULSION_STRENGTH * closeness * closeness;

    let min_safe = min_safe_distance(node_radius);
    if distance < min_safe {
        magnitude += OVERLAP_PUSH_STRENGTH * (min_safe - distance);
    }

    direction * magnitude
}
