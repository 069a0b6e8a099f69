use eframe::egui::{
    self, Align2, Color32, CursorIcon, FontId, Pos2, Sense, Shape, Stroke, Ui,
};

use super::super::physics::step_web;
use super::super::render_utils::{SurfaceMap, surface_rect_in};
use super::super::{ViewModel, WebEvent};
use super::render::{WebSurface, draw_web};

struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    map: SurfaceMap,
}

impl WebSurface for PainterSurface<'_> {
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(
            self.map.to_screen(center),
            radius * self.map.uniform_scale(),
            color,
        );
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter.circle_stroke(
            self.map.to_screen(center),
            radius * self.map.uniform_scale(),
            Stroke::new(width * self.map.uniform_scale(), color),
        );
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter.line_segment(
            [self.map.to_screen(from), self.map.to_screen(to)],
            Stroke::new(width * self.map.uniform_scale(), color),
        );
    }

    fn dashed_line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let scale = self.map.uniform_scale();
        self.painter.extend(Shape::dashed_line(
            &[self.map.to_screen(from), self.map.to_screen(to)],
            Stroke::new(width * scale, color),
            6.0 * scale,
            5.0 * scale,
        ));
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.map.to_screen(pos),
            anchor,
            text,
            FontId::proportional((size * self.map.uniform_scale()).max(5.0)),
            color,
        );
    }
}

impl ViewModel {
    pub(in crate::app) fn draw_web_canvas(&mut self, ui: &mut Ui) {
        if self.web_dirty {
            self.rebuild_web();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

        let canvas = surface_rect_in(rect);
        painter.rect_filled(canvas, 0.0, Color32::from_rgb(26, 30, 38));
        let map = SurfaceMap::new(canvas);

        let (modifier_held, pressed, released, pointer_down, pointer_pos) = ui.input(|input| {
            (
                input.modifiers.command,
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.primary_down(),
                input.pointer.interact_pos(),
            )
        });

        let mut pending = None;

        if let Some(pointer) = pointer_pos {
            let surface_pos = map.to_surface(pointer);
            if pressed && rect.contains(pointer) {
                pending = self.web.pointer_pressed(surface_pos, modifier_held);
            } else if pointer_down || released {
                self.web.pointer_moved(surface_pos);
            }
        }

        if released
            && let Some(event) = self.web.pointer_released()
        {
            pending = Some(event);
        }

        if response.hovered()
            && let Some(pointer) = pointer_pos
        {
            if self.web.is_dragging() {
                ui.output_mut(|output| output.cursor_icon = CursorIcon::Grabbing);
            } else if self.web.hit_test(map.to_surface(pointer)).is_some() {
                ui.output_mut(|output| output.cursor_icon = CursorIcon::PointingHand);
            }
        }

        if self.web.running {
            step_web(&mut self.web, &self.project.relationships);
        }

        let mut surface = PainterSurface {
            painter: &painter,
            map,
        };
        draw_web(&self.web, &self.project.relationships, &mut surface);

        if self.web.running || self.web.is_dragging() {
            ui.ctx().request_repaint();
        }

        if let Some(event) = pending {
            self.apply_web_event(event);
        }
    }

    fn apply_web_event(&mut self, event: WebEvent) {
        match event {
            WebEvent::PersonClicked(person) => {
                self.set_selected(Some(person.id));
            }
            WebEvent::AddRelationship { first, second } => {
                let kind = self.connect_kind.trim();
                let kind = if kind.is_empty() {
                    "connection".to_string()
                } else {
                    kind.to_string()
                };
                self.project
                    .add_relationship(&first, &second, &kind, self.connect_mutual);
                self.status = Some(format!(
                    "Linked {} and {} as {kind}",
                    self.project.display_name(&first),
                    self.project.display_name(&second),
                ));
                self.unsaved_changes = true;
                self.web_dirty = true;
            }
        }
    }
}
