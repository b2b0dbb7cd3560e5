//! Radial mind-map layout: one centre node with every goal on a circle around it.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::goals::Goal;

pub const CENTER_NODE_ID: &str = "center";
pub const CENTER_LABEL: &str = "Personal Growth Journey";

const CENTER_X: f64 = 250.0;
const CENTER_Y: f64 = 150.0;
const RADIUS: f64 = 200.0;
const GOAL_NODE_WIDTH: f64 = 150.0;
const GOAL_NODE_HEIGHT: f64 = 100.0;
/// Goals above this progress are drawn highlighted.
const HIGHLIGHT_ABOVE: i32 = 50;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Center,
    Goal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MindMapNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// Top-left corner of the node box.
    pub position: Position,
    pub progress: Option<i32>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MindMapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MindMap {
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
}

/// Lays goals out evenly on a circle, in list order, starting at angle zero.
pub fn layout(goals: &[Goal]) -> MindMap {
    let mut nodes = Vec::with_capacity(goals.len() + 1);
    nodes.push(MindMapNode {
        id: CENTER_NODE_ID.to_string(),
        kind: NodeKind::Center,
        label: CENTER_LABEL.to_string(),
        position: Position {
            x: CENTER_X,
            y: CENTER_Y,
        },
        progress: None,
        highlighted: true,
    });

    let count = goals.len() as f64;
    let mut edges = Vec::with_capacity(goals.len());
    for (index, goal) in goals.iter().enumerate() {
        let angle = index as f64 * 2.0 * PI / count;
        let node_id = format!("goal-{}", goal.id);
        nodes.push(MindMapNode {
            id: node_id.clone(),
            kind: NodeKind::Goal,
            label: goal.title.clone(),
            position: Position {
                x: CENTER_X + RADIUS * angle.cos() - GOAL_NODE_WIDTH / 2.0,
                y: CENTER_Y + RADIUS * angle.sin() - GOAL_NODE_HEIGHT / 2.0,
            },
            progress: Some(goal.progress),
            highlighted: goal.progress > HIGHLIGHT_ABOVE,
        });
        edges.push(MindMapEdge {
            id: format!("edge-{}", goal.id),
            source: CENTER_NODE_ID.to_string(),
            target: node_id,
        });
    }

    MindMap { nodes, edges }
}
