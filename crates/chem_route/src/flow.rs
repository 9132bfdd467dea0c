//! Process flow diagram derived from the routes present in a scenario.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::model::{RouteKind, Scenario};

pub const ELECTROLYSIS_LABEL: &str = "+ H₂ (via electrolysis)";
pub const REFORMING_LABEL: &str = "Steam methane reforming";
pub const DOT_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FlowNode {
    Co2,
    Methanol,
    Biomethane,
    Syngas,
    NaturalGas,
}

impl FlowNode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Co2 => "CO₂",
            Self::Methanol => "Methanol",
            Self::Biomethane => "Biomethane",
            Self::Syngas => "Syngas",
            Self::NaturalGas => "Natural Gas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub from: FlowNode,
    pub to: FlowNode,
    pub label: Option<&'static str>,
    pub route: RouteKind,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProcessFlowGraph {
    edges: Vec<FlowEdge>,
}

impl ProcessFlowGraph {
    /// Edges accumulate per route in a fixed order: electrolysis, then
    /// biomethane reforming, then natural gas reforming.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let mut edges = Vec::new();

        if let Some(route) = scenario.route(RouteKind::Electrolytic) {
            edges.push(FlowEdge {
                from: FlowNode::Co2,
                to: FlowNode::Methanol,
                label: Some(ELECTROLYSIS_LABEL),
                route: route.kind,
                color: route.color.clone(),
            });
        }

        for (kind, feed) in [
            (RouteKind::Biomethane, FlowNode::Biomethane),
            (RouteKind::Fossil, FlowNode::NaturalGas),
        ] {
            let Some(route) = scenario.route(kind) else {
                continue;
            };
            edges.push(FlowEdge {
                from: feed,
                to: FlowNode::Syngas,
                label: Some(REFORMING_LABEL),
                route: kind,
                color: route.color.clone(),
            });
            edges.push(FlowEdge {
                from: FlowNode::Syngas,
                to: FlowNode::Methanol,
                label: None,
                route: kind,
                color: route.color.clone(),
            });
        }

        Self { edges }
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Nodes in order of first appearance over the edge list.
    pub fn nodes(&self) -> Vec<FlowNode> {
        let mut nodes = Vec::new();
        for edge in &self.edges {
            for node in [edge.from, edge.to] {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
        }
        nodes
    }

    /// Groups nodes by longest distance from a source node. Within a layer,
    /// nodes keep their first-appearance order.
    pub fn layers(&self) -> Vec<Vec<FlowNode>> {
        let nodes = self.nodes();
        let mut depth: BTreeMap<FlowNode, usize> = nodes.iter().map(|node| (*node, 0)).collect();

        // The graph is acyclic, so |nodes| relaxation rounds settle every depth.
        for _ in 0..nodes.len() {
            let mut changed = false;
            for edge in &self.edges {
                let next = depth.get(&edge.from).copied().unwrap_or(0) + 1;
                let current = depth.entry(edge.to).or_insert(0);
                if next > *current {
                    *current = next;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let layer_count = depth.values().copied().max().map_or(0, |max| max + 1);
        let mut layers = vec![Vec::new(); layer_count];
        for node in nodes {
            let layer = depth.get(&node).copied().unwrap_or(0);
            layers[layer].push(node);
        }
        layers
    }

    /// Index of `edge_index` among the edges joining the same pair of nodes,
    /// together with the size of that group.
    pub fn parallel_slot(&self, edge_index: usize) -> (usize, usize) {
        let Some(edge) = self.edges.get(edge_index) else {
            return (0, 1);
        };
        let mut slot = 0;
        let mut total = 0;
        for (index, other) in self.edges.iter().enumerate() {
            if other.from == edge.from && other.to == edge.to {
                if index < edge_index {
                    slot += 1;
                }
                total += 1;
            }
        }
        (slot, total)
    }

    /// Graphviz source equivalent to what the diagram shows.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph {\n");
        let _ = writeln!(dot, "\tgraph [fontsize={DOT_FONT_SIZE}]");
        let _ = writeln!(dot, "\tnode [fontsize={DOT_FONT_SIZE}]");
        let _ = writeln!(dot, "\tedge [fontsize={DOT_FONT_SIZE}]");
        for edge in &self.edges {
            let mut attrs = Vec::new();
            if let Some(label) = edge.label {
                attrs.push(format!("label={}", dot_quote(label)));
            }
            attrs.push(format!("color={}", dot_quote(&edge.color)));
            let _ = writeln!(
                dot,
                "\t{} -> {} [{}]",
                dot_quote(edge.from.label()),
                dot_quote(edge.to.label()),
                attrs.join(" ")
            );
        }
        dot.push_str("}\n");
        dot
    }
}

fn dot_quote(raw: &str) -> String {
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}
