use chem_route::{IconStrip, SdgIcon};
use eframe::egui;

use crate::colors::{dimmed, rgb_from_u32};

pub const ICON_TILE_SIZE: f32 = 100.0;

pub fn tile_fill(icon: SdgIcon) -> egui::Color32 {
    let brand = rgb_from_u32(icon.goal.brand_rgb());
    if icon.is_highlighted() {
        brand
    } else {
        dimmed(brand)
    }
}

/// Paints the five SDG tiles in strip order.
///
/// The tiles stand in for the `sdg_icons/*.png` artwork: each one is filled
/// with the goal's brand color (desaturated when dimmed) and carries the
/// logical asset name, e.g. `sdg13_dim`, as its accessibility label.
pub fn render_icon_strip(ui: &mut egui::Ui, strip: &IconStrip) {
    ui.horizontal_wrapped(|ui| {
        for icon in strip.icons {
            render_tile(ui, icon);
        }
    });
}

fn render_tile(ui: &mut egui::Ui, icon: SdgIcon) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ICON_TILE_SIZE, ICON_TILE_SIZE),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let text_color = if icon.is_highlighted() {
        egui::Color32::WHITE
    } else {
        egui::Color32::from_gray(245)
    };

    painter.rect_filled(rect, 4.0, tile_fill(icon));
    painter.text(
        rect.left_top() + egui::vec2(8.0, 6.0),
        egui::Align2::LEFT_TOP,
        icon.goal.number().to_string(),
        egui::FontId::proportional(30.0),
        text_color,
    );
    painter.text(
        rect.left_bottom() + egui::vec2(8.0, -8.0),
        egui::Align2::LEFT_BOTTOM,
        icon.goal.title().to_uppercase(),
        egui::FontId::proportional(9.0),
        text_color,
    );

    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Image, true, icon.asset_name())
    });
    response.on_hover_text(format!("SDG {}: {}", icon.goal.number(), icon.goal.title()));
}
