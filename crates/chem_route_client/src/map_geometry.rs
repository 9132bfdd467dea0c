use eframe::egui::{pos2, Pos2, Rect};

pub const MIN_LAT: f64 = -60.0;
pub const MAX_LAT: f64 = 85.0;

/// Equirectangular projection of (lon, lat) degrees into `rect`. The
/// latitude band is cropped to the populated world so the map is not
/// dominated by Antarctica.
pub fn project_lon_lat(lon: f64, lat: f64, rect: Rect) -> Pos2 {
    let x = (lon.clamp(-180.0, 180.0) + 180.0) / 360.0;
    let y = (MAX_LAT - lat.clamp(MIN_LAT, MAX_LAT)) / (MAX_LAT - MIN_LAT);
    pos2(
        rect.left() + x as f32 * rect.width(),
        rect.top() + y as f32 * rect.height(),
    )
}

/// Width / height ratio that keeps degrees square.
pub fn map_aspect_ratio() -> f32 {
    (360.0 / (MAX_LAT - MIN_LAT)) as f32
}

fn signed_area(points: &[Pos2]) -> f32 {
    let mut area = 0.0;
    for (index, a) in points.iter().enumerate() {
        let b = points[(index + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }
    area * 0.5
}

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn inside_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Ear-clipping triangulation of a simple polygon. Returns index triples
/// into `points`. A degenerate or self-intersecting outline stops early and
/// yields the triangles found so far.
pub fn triangulate_polygon(points: &[Pos2]) -> Vec<[u32; 3]> {
    let mut triangles = Vec::new();
    if points.len() < 3 {
        return triangles;
    }

    let mut remaining: Vec<usize> = (0..points.len()).collect();
    if signed_area(points) < 0.0 {
        remaining.reverse();
    }

    while remaining.len() > 3 {
        let count = remaining.len();
        let mut clipped = false;
        for i in 0..count {
            let prev = remaining[(i + count - 1) % count];
            let curr = remaining[i];
            let next = remaining[(i + 1) % count];
            let (a, b, c) = (points[prev], points[curr], points[next]);
            if cross(a, b, c) <= 0.0 {
                continue;
            }
            let blocked = remaining.iter().any(|&other| {
                other != prev
                    && other != curr
                    && other != next
                    && inside_triangle(points[other], a, b, c)
            });
            if blocked {
                continue;
            }
            triangles.push([prev as u32, curr as u32, next as u32]);
            remaining.remove(i);
            clipped = true;
            break;
        }
        if !clipped {
            return triangles;
        }
    }

    triangles.push([
        remaining[0] as u32,
        remaining[1] as u32,
        remaining[2] as u32,
    ]);
    triangles
}
