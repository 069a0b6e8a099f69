mod build;
mod interaction;
mod render;
mod view;

use eframe::egui::{Vec2, vec2};

use super::{Gesture, RelationshipWeb, WebNode};

pub(in crate::app) const SURFACE_SIZE: Vec2 = vec2(1200.0, 800.0);

impl RelationshipWeb {
    pub(in crate::app) fn display_radius(&self, node: &WebNode) -> f32 {
        if node.is_center {
            self.geometry.center_radius
        } else {
            self.geometry.node_radius
        }
    }

    pub(in crate::app) fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Drag { .. })
    }

    pub(in crate::app) fn in_connect_buffer(&self, person_id: &str) -> bool {
        self.connect_buffer.iter().any(|id| id == person_id)
    }
}
