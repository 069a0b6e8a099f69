use eframe::egui::{Align2, Color32, Pos2, pos2};

use crate::people::{CENTER_ID, Relationship};
use crate::util::initial_glyph;

use super::super::RelationshipWeb;

pub(super) trait WebSurface {
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn dashed_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32);
}

pub(super) fn draw_web(
    web: &RelationshipWeb,
    relationships: &[Relationship],
    surface: &mut dyn WebSurface,
) {
    let geometry = web.geometry;
    let label_size = (geometry.font_size - 4.0).max(8.0);

    for relationship in relationships {
        let Some(&from_index) = web.index_by_id.get(&relationship.person_a_id) else {
            continue;
        };
        let Some(&to_index) = web.index_by_id.get(&relationship.person_b_id) else {
            continue;
        };

        let from = web.nodes[from_index].pos;
        let to = web.nodes[to_index].pos;
        surface.line(from, to, 2.0, Color32::from_rgb(148, 155, 168));
        surface.text(
            from.lerp(to, 0.5),
            Align2::CENTER_CENTER,
            relationship.label(),
            label_size,
            Color32::from_gray(200),
        );
    }

    let center_pos = web.nodes[web.center_index].pos;
    for node in web.nodes.iter().filter(|node| !node.is_center) {
        let has_center_tie = relationships.iter().any(|relationship| {
            relationship.touches(CENTER_ID) && relationship.touches(&node.person.id)
        });
        if has_center_tie {
            continue;
        }

        surface.dashed_line(
            center_pos,
            node.pos,
            1.0,
            Color32::from_rgba_unmultiplied(148, 155, 168, 150),
        );

        let label = node
            .person
            .relationship_to_user
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .unwrap_or("unknown");
        surface.text(
            center_pos.lerp(node.pos, 0.5),
            Align2::CENTER_CENTER,
            label,
            label_size,
            Color32::from_gray(170),
        );
    }

    for node in &web.nodes {
        let radius = web.display_radius(node);

        if web.in_connect_buffer(&node.person.id) {
            surface.fill_circle(
                node.pos,
                radius + 5.0,
                Color32::from_rgba_unmultiplied(250, 204, 80, 90),
            );
        }

        let fill = if node.is_center {
            Color32::from_rgb(142, 110, 204)
        } else {
            Color32::from_rgb(86, 140, 214)
        };
        surface.fill_circle(node.pos, radius, fill);
        surface.stroke_circle(node.pos, radius, 2.0, Color32::WHITE);

        let glyph_size = if node.is_center {
            geometry.center_font_size
        } else {
            geometry.font_size
        };
        surface.text(
            node.pos,
            Align2::CENTER_CENTER,
            &initial_glyph(&node.person.name),
            glyph_size,
            Color32::WHITE,
        );

        let name_pos = pos2(
            node.pos.x,
            node.pos.y + radius + (geometry.node_radius * 0.4).max(15.0),
        );
        surface.text(
            name_pos,
            Align2::CENTER_CENTER,
            &node.person.name,
            (geometry.font_size - 2.0).max(9.0),
            Color32::from_gray(225),
        );

        if let Some(score) = node.person.importance_score
            && score > 0
            && !node.is_center
            && geometry.node_radius >= 25.0
        {
            surface.text(
                pos2(name_pos.x, name_pos.y + geometry.font_size),
                Align2::CENTER_CENTER,
                &format!("{score} mentions"),
                9.0,
                Color32::from_gray(150),
            );
        }
    }
}
