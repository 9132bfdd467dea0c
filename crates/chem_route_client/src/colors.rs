//! Route color strings (CSS names or `#rrggbb`) to egui colors.

use chem_route::Route;
use eframe::egui::Color32;

pub const FALLBACK_ROUTE_COLOR: Color32 = Color32::from_rgb(128, 128, 128);
pub const OCEAN_COLOR: Color32 = Color32::from_rgb(234, 242, 250);
pub const LAND_COLOR: Color32 = Color32::WHITE;
pub const COASTLINE_COLOR: Color32 = Color32::BLACK;
pub const BORDER_COLOR: Color32 = Color32::from_gray(90);
pub const GRATICULE_COLOR: Color32 = Color32::from_rgb(206, 216, 228);

pub fn parse_color(raw: &str) -> Option<Color32> {
    let raw = raw.trim();
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex);
    }

    let color = match raw.to_ascii_lowercase().as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "green" => Color32::from_rgb(0, 128, 0),
        "blue" => Color32::from_rgb(0, 0, 255),
        "red" => Color32::from_rgb(255, 0, 0),
        "orange" => Color32::from_rgb(255, 165, 0),
        "gray" | "grey" => Color32::from_rgb(128, 128, 128),
        "darkgray" | "darkgrey" => Color32::from_rgb(169, 169, 169),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some(rgb_from_u32(value))
        }
        3 => {
            let mut channels = hex
                .chars()
                .map(|ch| ch.to_digit(16).map(|digit| (digit * 17) as u8));
            let r = channels.next()??;
            let g = channels.next()??;
            let b = channels.next()??;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

pub fn rgb_from_u32(value: u32) -> Color32 {
    Color32::from_rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

pub fn route_color(route: &Route) -> Color32 {
    match parse_color(&route.color) {
        Some(color) => color,
        None => {
            log::warn!(
                "unrecognised color `{}` for route {}; using gray",
                route.color,
                route.kind
            );
            FALLBACK_ROUTE_COLOR
        }
    }
}

/// Blends `color` towards light gray, used for de-emphasised tiles.
pub fn dimmed(color: Color32) -> Color32 {
    let luma = (0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32)
        .round();
    let mix = |channel: u8| -> u8 {
        let gray = luma * 0.35 + 200.0 * 0.65;
        (channel as f32 * 0.15 + gray * 0.85).round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(mix(color.r()), mix(color.g()), mix(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_route::RouteKind;

    #[test]
    fn parses_route_default_colors() {
        for kind in RouteKind::ALL {
            assert!(parse_color(kind.default_color()).is_some(), "{kind}");
        }
        assert_eq!(parse_color("#404040"), Some(Color32::from_rgb(64, 64, 64)));
        assert_eq!(parse_color("Green"), Some(Color32::from_rgb(0, 128, 0)));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(parse_color("#0f0"), Some(Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn rejects_unknown_names_and_bad_hex() {
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn unknown_route_color_falls_back_to_gray() {
        let mut route = chem_route::Route::new(RouteKind::Fossil, Vec::new());
        route.color = "mauve-ish".to_string();
        assert_eq!(route_color(&route), FALLBACK_ROUTE_COLOR);
    }

    #[test]
    fn dimmed_colors_lose_saturation() {
        let green = Color32::from_rgb(0, 128, 0);
        let dim = dimmed(green);
        let spread = |c: Color32| {
            let max = c.r().max(c.g()).max(c.b()) as i32;
            let min = c.r().min(c.g()).min(c.b()) as i32;
            max - min
        };
        assert!(spread(dim) < spread(green));
    }
}
