use super::WebGeometry;

const SMALL_WEB: WebGeometry = WebGeometry {
    node_radius: 45.0,
    center_radius: 55.0,
    repulsion_distance: 120.0,
    spread_fraction: 0.30,
    font_size: 16.0,
    center_font_size: 22.0,
};

const MEDIUM_WEB: WebGeometry = WebGeometry {
    node_radius: 30.0,
    center_radius: 40.0,
    repulsion_distance: 90.0,
    spread_fraction: 0.40,
    font_size: 12.0,
    center_font_size: 18.0,
};

const LARGE_WEB: WebGeometry = WebGeometry {
    node_radius: 18.0,
    center_radius: 30.0,
    repulsion_distance: 60.0,
    spread_fraction: 0.50,
    font_size: 10.0,
    center_font_size: 14.0,
};

pub(in crate::app) fn geometry_for(person_count: usize) -> WebGeometry {
    if person_count <= 5 {
        SMALL_WEB
    } else if person_count <= 15 {
        blend(SMALL_WEB, MEDIUM_WEB, (person_count as f32 - 5.0) / 10.0)
    } else if person_count <= 30 {
        blend(MEDIUM_WEB, LARGE_WEB, (person_count as f32 - 15.0) / 15.0)
    } else {
        LARGE_WEB
    }
}

fn blend(from: WebGeometry, to: WebGeometry, t: f32) -> WebGeometry {
    WebGeometry {
        node_radius: lerp(from.node_radius, to.node_radius, t).round(),
        center_radius: lerp(from.center_radius, to.center_radius, t).round(),
        repulsion_distance: lerp(from.repulsion_distance, to.repulsion_distance, t).round(),
        spread_fraction: lerp(from.spread_fraction, to.spread_fraction, t),
        font_size: lerp(from.font_size, to.font_size, t).round(),
        center_font_size: lerp(from.center_font_size, to.center_font_size, t).round(),
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
