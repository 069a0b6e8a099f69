mod forces;

use eframe::egui::Vec2;

use crate::people::Relationship;

use super::RelationshipWeb;
use super::web::SURFACE_SIZE;
use self::forces::{
    CENTER_SPRING_STRENGTH, RELATIONSHIP_SPRING_STRENGTH, VELOCITY_DAMPING,
    relationship_rest_length, repulsion_from, spring_toward,
};

pub(in crate::app) fn step_web(web: &mut RelationshipWeb, relationships: &[Relationship]) {
    let node_count = web.nodes.len();
    if node_count < 2 {
        return;
    }

    let geometry = web.geometry;
    let center_pos = web.nodes[web.center_index].pos;
    let ring_radius = SURFACE_SIZE.x.min(SURFACE_SIZE.y) * geometry.spread_fraction;
    let rest_length = relationship_rest_length(geometry.node_radius);

    let scratch = &mut web.forces_scratch;
    scratch.resize(node_count, Vec2::ZERO);
    scratch.fill(Vec2::ZERO);

    for (index, node) in web.nodes.iter().enumerate() {
        if node.is_center || node.pinned {
            continue;
        }

        let mut force = spring_toward(node.pos, center_pos, ring_radius, CENTER_SPRING_STRENGTH);

        for (other_index, other) in web.nodes.iter().enumerate() {
            if other_index == index {
                continue;
            }
            force += repulsion_from(
                node.pos,
                other.pos,
                geometry.node_radius,
                geometry.repulsion_distance,
            );
        }

        let mut attached = false;
        for relationship in relationships {
            let Some(other_id) = relationship.other_end(&node.person.id) else {
                continue;
            };
            let Some(&other_index) = web.index_by_id.get(other_id) else {
                continue;
            };
            attached = true;
            force += spring_toward(
                node.pos,
                web.nodes[other_index].pos,
                rest_length,
                RELATIONSHIP_SPRING_STRENGTH,
            );
        }

        if !attached {
            force += spring_toward(node.pos, center_pos, rest_length, RELATIONSHIP_SPRING_STRENGTH);
        }

        scratch[index] = force;
    }

    for (index, node) in web.nodes.iter_mut().enumerate() {
        if node.is_center || node.pinned {
            continue;
        }

        node.velocity = (node.velocity + scratch[index]) * VELOCITY_DAMPING;
        node.pos += node.velocity;
    }
}
