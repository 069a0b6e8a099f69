use std::collections::{HashMap, HashSet};

use eframe::egui::{Vec2, pos2};

use crate::people::{CENTER_ID, Project};

use super::SURFACE_SIZE;
use super::super::geometry::geometry_for;
use super::super::{Gesture, RelationshipWeb, WebNode};

impl RelationshipWeb {
    pub(in crate::app) fn new(project: &Project) -> Self {
        let mut web = Self {
            nodes: Vec::new(),
            index_by_id: HashMap::new(),
            center_index: 0,
            geometry: geometry_for(0),
            running: true,
            connect_enabled: true,
            gesture: Gesture::Idle,
            connect_buffer: Vec::new(),
            last_pointer: pos2(0.0, 0.0),
            forces_scratch: Vec::new(),
        };
        web.rebuild(project);
        web
    }

    pub(in crate::app) fn rebuild(&mut self, project: &Project) {
        self.gesture = Gesture::Idle;
        self.connect_buffer.clear();
        self.nodes.clear();
        self.index_by_id.clear();

        let center_pos = pos2(SURFACE_SIZE.x / 2.0, SURFACE_SIZE.y / 2.0);
        let center = project.center_person();
        self.center_index = 0;
        self.index_by_id.insert(center.id.clone(), 0);
        self.nodes.push(WebNode {
            person: center,
            pos: center_pos,
            velocity: Vec2::ZERO,
            is_center: true,
            pinned: false,
        });

        let mut seen = HashSet::new();
        seen.insert(CENTER_ID);
        let unique = project
            .people
            .iter()
            .filter(|person| seen.insert(person.id.as_str()))
            .collect::<Vec<_>>();

        self.geometry = geometry_for(unique.len());
        let ring_radius = SURFACE_SIZE.x.min(SURFACE_SIZE.y) * self.geometry.spread_fraction;
        let count = unique.len();

        for (slot, person) in unique.into_iter().enumerate() {
            let angle = (slot as f32) * std::f32::consts::TAU / (count as f32);
            self.index_by_id.insert(person.id.clone(), self.nodes.len());
            self.nodes.push(WebNode {
                person: person.clone(),
                pos: pos2(
                    center_pos.x + ring_radius * angle.cos(),
                    center_pos.y + ring_radius * angle.sin(),
                ),
                velocity: Vec2::ZERO,
                is_center: false,
                pinned: false,
            });
        }

        self.forces_scratch.clear();
        self.forces_scratch.resize(self.nodes.len(), Vec2::ZERO);
    }
}
