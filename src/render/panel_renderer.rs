// src/render/panel_renderer.rs
//
// The service text column on the right half of the window, and the scroll
// progress indicator beside it.

use nannou::prelude::*;

use crate::controllers::DeckController;
use crate::models::{Layout, ServiceCatalog, ServiceEntry};
use crate::views::accent;

// entries further than this from the focus are not drawn
const VISIBLE_RANGE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub left: f32,
    pub width: f32,
    pub centre_y: f32,
    pub entry_height: f32,
}

impl PanelGeometry {
    pub fn new(layout: &Layout) -> Self {
        Self {
            left: layout.width * 0.55,
            width: layout.width * 0.38,
            centre_y: layout.height * 0.5,
            entry_height: layout.height * 0.55,
        }
    }

    /// Screen-space vertical centre of entry `index` for a column translated
    /// by `translation`, or None when it is out of view.
    pub fn entry_centre(&self, index: usize, translation: f32) -> Option<f32> {
        let y = self.centre_y + index as f32 * self.entry_height + translation;
        let distance = (y - self.centre_y).abs() / self.entry_height.max(1.0);
        (distance <= VISIBLE_RANGE).then_some(y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    pub x: f32,
    pub top: f32,
    pub track_height: f32,
    pub fill_height: f32,
}

impl IndicatorGeometry {
    pub fn new(layout: &Layout, fraction: f32) -> Self {
        let track_height = layout.height * 0.5;
        Self {
            x: layout.width - 24.0 * layout.scale_factor,
            top: layout.height * 0.25,
            track_height,
            fill_height: track_height * fraction.clamp(0.0, 1.0),
        }
    }
}

pub fn draw_panel(draw: &Draw, deck: &DeckController, catalog: &ServiceCatalog) {
    let content = deck.content();
    if !content.is_visible() {
        return;
    }

    let layout = deck.layout();
    let geometry = PanelGeometry::new(layout);
    let translation = content.translation(geometry.entry_height);

    for (index, entry) in catalog.iter().enumerate() {
        let Some(centre_y) = geometry.entry_centre(index, translation) else {
            continue;
        };
        let alpha = content.panel_alpha() * content.entry_alpha(index, deck.swap());
        draw_entry(draw, layout, &geometry, entry, centre_y, alpha);
    }
}

fn draw_entry(
    draw: &Draw,
    layout: &Layout,
    geometry: &PanelGeometry,
    entry: &ServiceEntry,
    centre_y: f32,
    alpha: f32,
) {
    let s = layout.scale_factor;
    let x = geometry.left + geometry.width / 2.0;
    let top = centre_y - geometry.entry_height * 0.35;

    let title_size = (34.0 * s) as u32;
    let body_size = (17.0 * s) as u32;
    let feature_size = (15.0 * s) as u32;

    let mut y = top + title_size as f32;
    let title_pos = layout.to_draw_space(vec2(x, y));
    draw.text(&entry.title)
        .x_y(title_pos.x, title_pos.y)
        .w(geometry.width)
        .font_size(title_size)
        .left_justify()
        .color(rgba(1.0, 1.0, 1.0, alpha));

    y += title_size as f32 * 1.2 + body_size as f32 * 2.0;
    let body_pos = layout.to_draw_space(vec2(x, y));
    draw.text(&entry.description)
        .x_y(body_pos.x, body_pos.y)
        .w(geometry.width)
        .font_size(body_size)
        .line_spacing(6.0 * s)
        .left_justify()
        .color(rgba(0.85, 0.88, 0.95, alpha));

    y += body_size as f32 * 4.0;
    for feature in &entry.features {
        y += feature_size as f32 * 1.8;
        let pos = layout.to_draw_space(vec2(x, y));
        draw.text(&format!("•  {}", feature))
            .x_y(pos.x, pos.y)
            .w(geometry.width)
            .font_size(feature_size)
            .left_justify()
            .color(accent(alpha));
    }
}

pub fn draw_indicator(draw: &Draw, deck: &DeckController) {
    let layout = deck.layout();
    let geometry = IndicatorGeometry::new(layout, deck.scroll_fraction());
    let w = 4.0 * layout.scale_factor.max(0.5);

    let track = layout.to_draw_space(vec2(geometry.x, geometry.top + geometry.track_height / 2.0));
    draw.rect()
        .x_y(track.x, track.y)
        .w_h(w, geometry.track_height)
        .color(rgba(1.0, 1.0, 1.0, 0.15));

    if geometry.fill_height > 0.0 {
        let fill = layout.to_draw_space(vec2(geometry.x, geometry.top + geometry.fill_height / 2.0));
        draw.rect()
            .x_y(fill.x, fill.y)
            .w_h(w, geometry.fill_height)
            .color(accent(0.9));
    }
}
