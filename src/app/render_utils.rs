use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};

use super::web::SURFACE_SIZE;

pub(super) fn surface_rect_in(available: Rect) -> Rect {
    let scale = (available.width() / SURFACE_SIZE.x)
        .min(available.height() / SURFACE_SIZE.y)
        .max(0.01);
    Rect::from_center_size(available.center(), SURFACE_SIZE * scale)
}

#[derive(Clone, Copy)]
pub(super) struct SurfaceMap {
    rect: Rect,
    scale: Vec2,
}

impl SurfaceMap {
    pub(super) fn new(rect: Rect) -> Self {
        Self {
            rect,
            scale: vec2(
                rect.width() / SURFACE_SIZE.x,
                rect.height() / SURFACE_SIZE.y,
            ),
        }
    }

    pub(super) fn to_surface(&self, screen: Pos2) -> Pos2 {
        pos2(
            (screen.x - self.rect.left()) / self.scale.x,
            (screen.y - self.rect.top()) / self.scale.y,
        )
    }

    pub(super) fn to_screen(&self, surface: Pos2) -> Pos2 {
        pos2(
            self.rect.left() + surface.x * self.scale.x,
            self.rect.top() + surface.y * self.scale.y,
        )
    }

    pub(super) fn uniform_scale(&self) -> f32 {
        self.scale.x.min(self.scale.y)
    }
}
