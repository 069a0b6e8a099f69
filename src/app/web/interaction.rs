use eframe::egui::{Pos2, Vec2};

use super::super::{Gesture, RelationshipWeb, WebEvent};

const DRAG_CLICK_THRESHOLD: f32 = 5.0;

impl RelationshipWeb {
    pub(in crate::app) fn hit_test(&self, pos: Pos2) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| node.pos.distance(pos) <= self.display_radius(node))
    }

    pub(in crate::app) fn pointer_pressed(
        &mut self,
        pos: Pos2,
        connect_modifier: bool,
    ) -> Option<WebEvent> {
        self.last_pointer = pos;
        let hit = self.hit_test(pos);

        if connect_modifier && self.connect_enabled {
            self.gesture = Gesture::Connect;
            let index = hit?;
            return self.toggle_connect_slot(index);
        }

        match hit {
            Some(index) => {
                self.nodes[index].pinned = true;
                self.gesture = Gesture::Drag {
                    index,
                    press: pos,
                    moved: false,
                };
            }
            None => {
                self.gesture = Gesture::Miss;
            }
        }
        None
    }

    pub(in crate::app) fn pointer_moved(&mut self, pos: Pos2) {
        self.last_pointer = pos;

        if let Gesture::Drag { index, press, moved } = &mut self.gesture {
            let node = &mut self.nodes[*index];
            node.pos = pos;
            node.velocity = Vec2::ZERO;
            if press.distance(pos) >= DRAG_CLICK_THRESHOLD {
                *moved = true;
            }
        }
    }

    pub(in crate::app) fn pointer_released(&mut self) -> Option<WebEvent> {
        let gesture = std::mem::replace(&mut self.gesture, Gesture::Idle);

        let drag_occurred = match gesture {
            Gesture::Idle | Gesture::Connect => return None,
            Gesture::Miss => false,
            Gesture::Drag { index, moved, .. } => {
                if let Some(node) = self.nodes.get_mut(index) {
                    node.pinned = false;
                }
                moved
            }
        };

        if drag_occurred {
            return None;
        }

        let index = self.hit_test(self.last_pointer)?;
        let node = &self.nodes[index];
        if node.is_center {
            return None;
        }
        Some(WebEvent::PersonClicked(node.person.clone()))
    }

    fn toggle_connect_slot(&mut self, index: usize) -> Option<WebEvent> {
        let person_id = self.nodes[index].person.id.clone();

        if let Some(slot) = self.connect_buffer.iter().position(|id| *id == person_id) {
            self.connect_buffer.remove(slot);
            return None;
        }

        self.connect_buffer.push(person_id);
        if self.connect_buffer.len() < 2 {
            return None;
        }

        let second = self.connect_buffer.remove(1);
        let first = self.connect_buffer.remove(0);
        Some(WebEvent::AddRelationship { first, second })
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Vec2, pos2, vec2};

    use crate::people::{Person, Project};

    use super::super::super::{Gesture, RelationshipWeb, WebEvent};

    fn web_of(count: usize) -> RelationshipWeb {
        let people = (0..count)
            .map(|i| Person {
                id: format!("p{i}"),
                name: format!("Person {i}"),
                relationship_to_user: None,
                importance_score: None,
                avatar_url: None,
            })
            .collect();
        RelationshipWeb::new(&Project {
            subject: String::new(),
            people,
            relationships: Vec::new(),
        })
    }

    #[test]
    fn hit_test_respects_the_node_radius() {
        let web = web_of(3);
        let node_pos = web.nodes[1].pos;

        assert_eq!(web.hit_test(node_pos), Some(1));
        assert_eq!(web.hit_test(node_pos + vec2(45.0, 0.0)), Some(1));
        assert_eq!(web.hit_test(node_pos + vec2(46.0, 0.0)), None);
    }

    #[test]
    fn center_uses_its_own_larger_radius() {
        let web = web_of(2);
        let center_pos = web.nodes[0].pos;

        assert_eq!(web.hit_test(center_pos + vec2(50.0, 0.0)), Some(0));
        assert_eq!(web.hit_test(center_pos + vec2(56.0, 0.0)), None);
    }

    #[test]
    fn press_and_release_without_movement_clicks_the_person() {
        let mut web = web_of(2);
        let target = web.nodes[1].pos;

        assert!(web.pointer_pressed(target, false).is_none());
        assert!(web.nodes[1].pinned);

        let event = web.pointer_released();
        assert!(
            matches!(event, Some(WebEvent::PersonClicked(person)) if person.id == "p0"),
            "no click event"
        );
        assert!(!web.nodes[1].pinned);
    }

    #[test]
    fn tiny_movement_still_counts_as_a_click() {
        let mut web = web_of(2);
        let target = web.nodes[1].pos;

        web.pointer_pressed(target, false);
        web.pointer_moved(target + vec2(3.0, 0.0));
        assert_eq!(web.nodes[1].pos, target + vec2(3.0, 0.0));
        assert_eq!(web.nodes[1].velocity, Vec2::ZERO);

        assert!(matches!(
            web.pointer_released(),
            Some(WebEvent::PersonClicked(_))
        ));
    }

    #[test]
    fn dragging_past_the_threshold_suppresses_the_click() {
        let mut web = web_of(2);
        let target = web.nodes[1].pos;
        let destination = target + vec2(5.0, 0.0);

        web.pointer_pressed(target, false);
        web.pointer_moved(destination);

        assert!(web.pointer_released().is_none());
        assert_eq!(web.nodes[1].pos, destination);
        assert!(!web.nodes[1].pinned);
    }

    #[test]
    fn the_drag_mark_is_sticky_once_set() {
        let mut web = web_of(2);
        let target = web.nodes[1].pos;

        web.pointer_pressed(target, false);
        web.pointer_moved(target + vec2(6.0, 0.0));
        web.pointer_moved(target);

        assert!(web.pointer_released().is_none());
    }

    #[test]
    fn center_clicks_are_ignored_but_center_drags_work() {
        let mut web = web_of(2);
        let center = web.nodes[0].pos;

        web.pointer_pressed(center, false);
        assert!(web.pointer_released().is_none());

        web.pointer_pressed(center, false);
        web.pointer_moved(center + vec2(30.0, 0.0));
        assert_eq!(web.nodes[0].pos, center + vec2(30.0, 0.0));
        assert!(web.pointer_released().is_none());
    }

    #[test]
    fn connect_presses_pair_people_then_clear_the_buffer() {
        let mut web = web_of(3);
        let first = web.nodes[1].pos;
        let second = web.nodes[2].pos;

        assert!(web.pointer_pressed(first, true).is_none());
        assert!(web.pointer_released().is_none());
        assert_eq!(web.connect_buffer, vec!["p0".to_string()]);

        let event = web.pointer_pressed(second, true);
        assert!(matches!(
            event,
            Some(WebEvent::AddRelationship { first, second })
                if first == "p0" && second == "p1"
        ));
        assert!(web.connect_buffer.is_empty());
        assert!(web.pointer_released().is_none());
    }

    #[test]
    fn pressing_a_buffered_person_again_deselects_it() {
        let mut web = web_of(2);
        let target = web.nodes[1].pos;

        web.pointer_pressed(target, true);
        web.pointer_released();
        assert_eq!(web.connect_buffer.len(), 1);

        assert!(web.pointer_pressed(target, true).is_none());
        assert!(web.connect_buffer.is_empty());
    }

    #[test]
    fn the_center_can_anchor_a_connect_pair() {
        let mut web = web_of(1);

        web.pointer_pressed(web.nodes[0].pos, true);
        web.pointer_released();

        let event = web.pointer_pressed(web.nodes[1].pos, true);
        assert!(matches!(
            event,
            Some(WebEvent::AddRelationship { first, .. }) if first == "center"
        ));
    }

    #[test]
    fn connect_presses_on_empty_space_are_inert() {
        let mut web = web_of(2);

        assert!(web.pointer_pressed(pos2(20.0, 20.0), true).is_none());
        assert!(web.connect_buffer.is_empty());
        assert!(web.pointer_released().is_none());
    }

    #[test]
    fn disabled_connect_falls_back_to_dragging() {
        let mut web = web_of(2);
        web.connect_enabled = false;
        let target = web.nodes[1].pos;

        assert!(web.pointer_pressed(target, true).is_none());
        assert!(web.connect_buffer.is_empty());
        assert!(web.nodes[1].pinned);
        web.pointer_released();
        assert!(!web.nodes[1].pinned);
    }

    #[test]
    fn an_empty_press_then_release_over_a_node_still_clicks() {
        let mut web = web_of(2);

        web.pointer_pressed(pos2(20.0, 20.0), false);
        assert!(matches!(web.gesture, Gesture::Miss));

        web.pointer_moved(web.nodes[1].pos);
        assert!(matches!(
            web.pointer_released(),
            Some(WebEvent::PersonClicked(_))
        ));
    }

    #[test]
    fn empty_clicks_do_nothing() {
        let mut web = web_of(2);

        web.pointer_pressed(pos2(20.0, 20.0), false);
        assert!(web.pointer_released().is_none());
    }

    #[test]
    fn a_release_without_a_press_is_ignored() {
        let mut web = web_of(2);
        assert!(web.pointer_released().is_none());
    }
}
