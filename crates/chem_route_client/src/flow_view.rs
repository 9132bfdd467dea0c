//! Layered drawing of a [`ProcessFlowGraph`], top to bottom like Graphviz.
//!
//! An edge that skips a layer gets a bend slot in every row it crosses, so
//! it runs beside the intermediate nodes instead of through them.

use std::collections::BTreeMap;

use chem_route::{FlowNode, ProcessFlowGraph};
use eframe::egui;

use crate::colors::{parse_color, FALLBACK_ROUTE_COLOR};

const NODE_SIZE: egui::Vec2 = egui::vec2(128.0, 36.0);
const LAYER_GAP: f32 = 72.0;
const NODE_GAP: f32 = 40.0;
const PARALLEL_EDGE_SPACING: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 13.0;
const LABEL_OFFSET: f32 = 8.0;
/// Free width kept on each side of the widest row for edge labels.
const LABEL_ROOM: f32 = 180.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramEdge {
    pub from: FlowNode,
    pub to: FlowNode,
    pub label: Option<&'static str>,
    pub color: egui::Color32,
    /// Offset along the edge normal, in multiples of the parallel spacing.
    pub lane: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RowSlot {
    Node(FlowNode),
    Bend { edge: usize },
}

/// Render-ready form of a flow graph, built once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDiagram {
    pub layers: Vec<Vec<FlowNode>>,
    pub edges: Vec<DiagramEdge>,
    pub dot_source: String,
    rows: Vec<Vec<RowSlot>>,
}

/// Polyline of one edge plus where its label goes.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    pub from: FlowNode,
    pub to: FlowNode,
    pub label: Option<&'static str>,
    pub color: egui::Color32,
    pub points: Vec<egui::Pos2>,
    pub label_anchor: egui::Pos2,
    pub label_align: egui::Align2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayout {
    pub nodes: Vec<(FlowNode, egui::Rect)>,
    pub edges: Vec<EdgePath>,
}

impl FlowLayout {
    pub fn node_rect(&self, node: FlowNode) -> Option<egui::Rect> {
        node_rect(&self.nodes, node)
    }
}

impl FlowDiagram {
    pub fn from_graph(graph: &ProcessFlowGraph) -> Self {
        let edges: Vec<DiagramEdge> = graph
            .edges()
            .iter()
            .enumerate()
            .map(|(index, edge)| {
                let color = parse_color(&edge.color).unwrap_or_else(|| {
                    log::warn!(
                        "unrecognised color `{}` on {} -> {}; using gray",
                        edge.color,
                        edge.from.label(),
                        edge.to.label()
                    );
                    FALLBACK_ROUTE_COLOR
                });
                let (slot, total) = graph.parallel_slot(index);
                DiagramEdge {
                    from: edge.from,
                    to: edge.to,
                    label: edge.label,
                    color,
                    lane: slot as f32 - (total as f32 - 1.0) * 0.5,
                }
            })
            .collect();
        let layers = graph.layers();
        let rows = slot_rows(&layers, &edges);

        Self {
            layers,
            edges,
            dot_source: graph.to_dot(),
            rows,
        }
    }

    pub fn desired_size(&self) -> egui::Vec2 {
        let widest = self.rows.iter().map(Vec::len).max().unwrap_or(0) as f32;
        let rows = self.rows.len() as f32;
        egui::vec2(
            (widest * NODE_SIZE.x + (widest - 1.0).max(0.0) * NODE_GAP).max(NODE_SIZE.x)
                + 2.0 * LABEL_ROOM,
            (rows * NODE_SIZE.y + (rows - 1.0).max(0.0) * LAYER_GAP).max(NODE_SIZE.y),
        )
    }

    /// Places every row centered inside `rect` and routes the edges through
    /// their bend slots.
    pub fn layout(&self, rect: egui::Rect) -> FlowLayout {
        let mut nodes = Vec::new();
        let mut bends: BTreeMap<usize, Vec<egui::Rect>> = BTreeMap::new();
        for (row, slots) in self.rows.iter().enumerate() {
            let count = slots.len() as f32;
            let row_width = count * NODE_SIZE.x + (count - 1.0).max(0.0) * NODE_GAP;
            let left = rect.center().x - row_width * 0.5;
            let top = rect.top() + row as f32 * (NODE_SIZE.y + LAYER_GAP);
            for (column, slot) in slots.iter().enumerate() {
                let min = egui::pos2(left + column as f32 * (NODE_SIZE.x + NODE_GAP), top);
                let slot_rect = egui::Rect::from_min_size(min, NODE_SIZE);
                match slot {
                    RowSlot::Node(node) => nodes.push((*node, slot_rect)),
                    RowSlot::Bend { edge } => bends.entry(*edge).or_default().push(slot_rect),
                }
            }
        }

        let edges = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(index, edge)| {
                let from = node_rect(&nodes, edge.from)?;
                let to = node_rect(&nodes, edge.to)?;
                let bend_slots = bends.get(&index).map(Vec::as_slice).unwrap_or_default();
                Some(edge_path(edge, from, to, bend_slots, rect.center().x))
            })
            .collect();

        FlowLayout { nodes, edges }
    }
}

/// Layers as slot rows, with one bend slot per skipped row in front of the
/// row's nodes.
fn slot_rows(layers: &[Vec<FlowNode>], edges: &[DiagramEdge]) -> Vec<Vec<RowSlot>> {
    let mut rows: Vec<Vec<RowSlot>> = layers
        .iter()
        .map(|layer| layer.iter().copied().map(RowSlot::Node).collect())
        .collect();
    let mut bends_in_row = vec![0; rows.len()];
    for (index, edge) in edges.iter().enumerate() {
        let (Some(from), Some(to)) = (layer_of(layers, edge.from), layer_of(layers, edge.to))
        else {
            continue;
        };
        for row in from + 1..to {
            rows[row].insert(bends_in_row[row], RowSlot::Bend { edge: index });
            bends_in_row[row] += 1;
        }
    }
    rows
}

fn layer_of(layers: &[Vec<FlowNode>], node: FlowNode) -> Option<usize> {
    layers.iter().position(|layer| layer.contains(&node))
}

fn node_rect(placed: &[(FlowNode, egui::Rect)], node: FlowNode) -> Option<egui::Rect> {
    placed
        .iter()
        .find(|(candidate, _)| *candidate == node)
        .map(|(_, rect)| *rect)
}

fn edge_path(
    edge: &DiagramEdge,
    from: egui::Rect,
    to: egui::Rect,
    bend_slots: &[egui::Rect],
    center_x: f32,
) -> EdgePath {
    let shift = egui::vec2(edge.lane * PARALLEL_EDGE_SPACING, 0.0);
    let mut points = vec![from.center_bottom() + shift];
    for slot in bend_slots {
        points.push(slot.center_top() + shift);
        points.push(slot.center_bottom() + shift);
    }
    points.push(to.center_top() + shift);

    // Labels sit on the outer side of the edge, away from the center column.
    let anchor = match bend_slots.first() {
        Some(slot) => slot.center() + shift,
        None => from.center_bottom().lerp(to.center_top(), 0.5) + shift,
    };
    let (label_anchor, label_align) = if anchor.x < center_x {
        (
            anchor - egui::vec2(LABEL_OFFSET, 0.0),
            egui::Align2::RIGHT_CENTER,
        )
    } else {
        (
            anchor + egui::vec2(LABEL_OFFSET, 0.0),
            egui::Align2::LEFT_CENTER,
        )
    };

    EdgePath {
        from: edge.from,
        to: edge.to,
        label: edge.label,
        color: edge.color,
        points,
        label_anchor,
        label_align,
    }
}

pub fn render_flow_diagram(ui: &mut egui::Ui, diagram: &FlowDiagram) {
    let size = diagram.desired_size();
    let width = ui.available_width().max(size.x);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, size.y), egui::Sense::hover());
    let painter = ui.painter_at(rect.expand(4.0));
    let layout = diagram.layout(rect);
    let text_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(LABEL_FONT_SIZE);

    for path in &layout.edges {
        let stroke = egui::Stroke::new(2.0, path.color);
        let segments: Vec<&[egui::Pos2]> = path.points.windows(2).collect();
        if let Some((tip, body)) = segments.split_last() {
            for segment in body {
                painter.line_segment([segment[0], segment[1]], stroke);
            }
            painter.arrow(tip[0], tip[1] - tip[0], stroke);
        }
        if let Some(label) = path.label {
            painter.text(
                path.label_anchor,
                path.label_align,
                label,
                font.clone(),
                text_color,
            );
        }
    }

    for (node, node_rect) in &layout.nodes {
        painter.rect(
            *node_rect,
            6.0,
            ui.visuals().extreme_bg_color,
            egui::Stroke::new(1.0, text_color),
            egui::StrokeKind::Inside,
        );
        painter.text(
            node_rect.center(),
            egui::Align2::CENTER_CENTER,
            node.label(),
            font.clone(),
            text_color,
        );
    }

    egui::CollapsingHeader::new("DOT source")
        .default_open(false)
        .show(ui, |ui| {
            ui.monospace(diagram.dot_source.as_str());
        });
}
