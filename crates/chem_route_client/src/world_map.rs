use std::sync::OnceLock;

use chem_route::{RouteKind, Scenario};
use eframe::egui;

use crate::colors::{
    parse_color, route_color, BORDER_COLOR, COASTLINE_COLOR, FALLBACK_ROUTE_COLOR,
    GRATICULE_COLOR, LAND_COLOR, OCEAN_COLOR,
};
use crate::country_borders::COUNTRY_BORDERS;
use crate::map_geometry::{map_aspect_ratio, project_lon_lat, triangulate_polygon};
use crate::world_outline::LAND_OUTLINES;

pub const EXPORT_LEGEND_LABEL: &str = "Export Locations";
const MARKER_RADIUS: f32 = 5.0;
const LEGEND_GLYPH_SIZE: f32 = 12.0;
const GRATICULE_STEP_DEG: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerGlyph {
    Circle,
    Square,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lon: f64,
    pub lat: f64,
    pub color: egui::Color32,
    pub glyph: MarkerGlyph,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub fill: egui::Color32,
    pub outline: Option<egui::Color32>,
    pub glyph: MarkerGlyph,
}

/// The legend always lists every production type plus the export glyph,
/// whatever the current scenario contains.
pub fn legend_entries() -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = RouteKind::ALL
        .into_iter()
        .map(|kind| LegendEntry {
            label: kind.legend_label(),
            fill: parse_color(kind.default_color()).unwrap_or(FALLBACK_ROUTE_COLOR),
            outline: None,
            glyph: MarkerGlyph::Circle,
        })
        .collect();
    entries.push(LegendEntry {
        label: EXPORT_LEGEND_LABEL,
        fill: egui::Color32::WHITE,
        outline: Some(egui::Color32::BLACK),
        glyph: MarkerGlyph::Square,
    });
    entries
}

pub fn build_map_markers(scenario: &Scenario) -> Vec<MapMarker> {
    scenario
        .routes()
        .iter()
        .flat_map(|route| {
            let color = route_color(route);
            route.sites.iter().map(move |site| MapMarker {
                lon: site.lon,
                lat: site.lat,
                color,
                glyph: if site.is_export {
                    MarkerGlyph::Square
                } else {
                    MarkerGlyph::Circle
                },
                label: site.name.clone(),
            })
        })
        .collect()
}

/// Triangles per land outline, computed once in degree space. The
/// projection is affine so the indices stay valid for any map rect.
fn land_triangles() -> &'static [Vec<[u32; 3]>] {
    static TRIANGLES: OnceLock<Vec<Vec<[u32; 3]>>> = OnceLock::new();
    TRIANGLES.get_or_init(|| {
        LAND_OUTLINES
            .iter()
            .map(|outline| {
                let points: Vec<egui::Pos2> = outline
                    .ring
                    .iter()
                    .map(|[lon, lat]| egui::pos2(*lon, *lat))
                    .collect();
                triangulate_polygon(&points)
            })
            .collect()
    })
}

pub fn render_world_map(ui: &mut egui::Ui, markers: &[MapMarker], height: f32) {
    let width = ui.available_width().min(height * map_aspect_ratio());
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, OCEAN_COLOR);

    paint_graticule(&painter, rect);
    paint_land(&painter, rect);
    paint_borders(&painter, rect);

    for marker in markers {
        let pos = project_lon_lat(marker.lon, marker.lat, rect);
        paint_glyph(&painter, pos, marker.glyph, marker.color, None, MARKER_RADIUS);
        if !marker.label.is_empty() {
            painter.text(
                pos + egui::vec2(MARKER_RADIUS + 3.0, 0.0),
                egui::Align2::LEFT_CENTER,
                marker.label.as_str(),
                egui::FontId::proportional(12.0),
                egui::Color32::BLACK,
            );
        }
    }

    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, COASTLINE_COLOR),
        egui::StrokeKind::Inside,
    );

    ui.add_space(6.0);
    render_legend(ui);
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = egui::Stroke::new(0.5, GRATICULE_COLOR);
    for lon in (-180..=180).step_by(GRATICULE_STEP_DEG as usize) {
        let top = project_lon_lat(lon as f64, 90.0, rect);
        let bottom = project_lon_lat(lon as f64, -90.0, rect);
        painter.line_segment([top, bottom], stroke);
    }
    for lat in (-GRATICULE_STEP_DEG..=GRATICULE_STEP_DEG * 2).step_by(GRATICULE_STEP_DEG as usize) {
        let left = project_lon_lat(-180.0, lat as f64, rect);
        let right = project_lon_lat(180.0, lat as f64, rect);
        painter.line_segment([left, right], stroke);
    }
}

fn paint_land(painter: &egui::Painter, rect: egui::Rect) {
    for (outline, triangles) in LAND_OUTLINES.iter().zip(land_triangles()) {
        let points: Vec<egui::Pos2> = outline
            .ring
            .iter()
            .map(|[lon, lat]| project_lon_lat(*lon as f64, *lat as f64, rect))
            .collect();

        let mut mesh = egui::Mesh::default();
        for point in &points {
            mesh.colored_vertex(*point, LAND_COLOR);
        }
        for [a, b, c] in triangles {
            mesh.add_triangle(*a, *b, *c);
        }
        painter.add(egui::Shape::mesh(mesh));
        painter.add(egui::Shape::closed_line(
            points,
            egui::Stroke::new(0.6, COASTLINE_COLOR),
        ));
    }
}

fn border_polylines(rect: egui::Rect) -> Vec<Vec<egui::Pos2>> {
    COUNTRY_BORDERS
        .iter()
        .map(|border| {
            border
                .line
                .iter()
                .map(|[lon, lat]| project_lon_lat(f64::from(*lon), f64::from(*lat), rect))
                .collect()
        })
        .collect()
}

fn paint_borders(painter: &egui::Painter, rect: egui::Rect) {
    for points in border_polylines(rect) {
        painter.add(egui::Shape::line(points, egui::Stroke::new(0.4, BORDER_COLOR)));
    }
}

fn paint_glyph(
    painter: &egui::Painter,
    center: egui::Pos2,
    glyph: MarkerGlyph,
    fill: egui::Color32,
    outline: Option<egui::Color32>,
    radius: f32,
) {
    let stroke = egui::Stroke::new(1.0, outline.unwrap_or(egui::Color32::BLACK));
    match glyph {
        MarkerGlyph::Circle => {
            painter.circle(center, radius, fill, stroke);
        }
        MarkerGlyph::Square => {
            let rect = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
            painter.rect(rect, 0.0, fill, stroke, egui::StrokeKind::Inside);
        }
    }
}

fn render_legend(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for entry in legend_entries() {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(LEGEND_GLYPH_SIZE, LEGEND_GLYPH_SIZE),
                egui::Sense::hover(),
            );
            paint_glyph(
                ui.painter(),
                rect.center(),
                entry.glyph,
                entry.fill,
                entry.outline,
                LEGEND_GLYPH_SIZE * 0.5 - 1.0,
            );
            ui.label(entry.label);
            ui.add_space(12.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_route::{
        methanol_supply_chain_table, Objective, PlanningYear, Route, ScenarioResolver, Site,
        SupplyChainSelection,
    };
    use egui_kittest::{kittest::Queryable as _, Harness};

    fn scenario(year: PlanningYear, objective: Objective) -> &'static Scenario {
        methanol_supply_chain_table()
            .expect("table")
            .resolve(&SupplyChainSelection::new(year, objective))
            .expect("scenario")
    }

    #[test]
    fn legend_is_complete_for_every_scenario() {
        let entries = legend_entries();
        let labels: Vec<_> = entries.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            vec![
                "Electrolytic production",
                "Biomethane production",
                "Fossil production",
                EXPORT_LEGEND_LABEL,
            ]
        );
        let export = &entries[3];
        assert_eq!(export.glyph, MarkerGlyph::Square);
        assert_eq!(export.fill, egui::Color32::WHITE);
        assert_eq!(export.outline, Some(egui::Color32::BLACK));
    }

    #[test]
    fn markers_use_route_color_and_export_glyph() {
        let markers = build_map_markers(scenario(PlanningYear::Y2050, Objective::MinimizeCost));
        assert_eq!(markers.len(), 4);

        let glyphs: Vec<_> = markers.iter().map(|marker| marker.glyph).collect();
        assert_eq!(
            glyphs,
            vec![
                MarkerGlyph::Square,
                MarkerGlyph::Circle,
                MarkerGlyph::Square,
                MarkerGlyph::Circle,
            ]
        );
        assert_eq!(markers[0].color, egui::Color32::from_rgb(64, 64, 64));
        assert_eq!(markers[2].color, egui::Color32::from_rgb(0, 0, 255));
        assert!(markers.iter().all(|marker| marker.label.is_empty()));
    }

    #[test]
    fn named_sites_keep_their_label() {
        let route = Route::new(
            RouteKind::Biomethane,
            vec![Site {
                name: "Santos".to_string(),
                lat: -23.9,
                lon: -46.3,
                is_export: true,
            }],
        );
        let scenario = Scenario::new(vec![route]).expect("valid");
        let markers = build_map_markers(&scenario);
        assert_eq!(markers[0].label, "Santos");
    }

    #[test]
    fn every_land_outline_is_fully_triangulated() {
        for (outline, triangles) in LAND_OUTLINES.iter().zip(land_triangles()) {
            assert_eq!(
                triangles.len(),
                outline.ring.len() - 2,
                "{} triangulation stopped early",
                outline.name
            );
        }
    }

    #[test]
    fn borders_project_inside_the_map() {
        let rect = egui::Rect::from_min_size(egui::pos2(12.0, 30.0), egui::vec2(720.0, 290.0));
        let lines = border_polylines(rect);
        assert_eq!(lines.len(), COUNTRY_BORDERS.len());
        let us_canada = COUNTRY_BORDERS
            .iter()
            .position(|border| border.name == "us_canada")
            .expect("us/canada border");
        assert!(lines[us_canada].len() >= 2);
        for line in &lines {
            assert!(line.iter().all(|point| rect.contains(*point)));
        }
    }

    #[test]
    fn map_renders_legend_labels() {
        let markers = build_map_markers(scenario(PlanningYear::Y2030, Objective::MinimizeImpact));
        let mut harness = Harness::new_ui(move |ui| {
            render_world_map(ui, &markers, 240.0);
        });

        harness.fit_contents();
        harness.get_by_label("Electrolytic production");
        harness.get_by_label("Fossil production");
        harness.get_by_label(EXPORT_LEGEND_LABEL);
    }
}
