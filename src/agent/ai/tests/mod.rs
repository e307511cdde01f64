// Test helpers: a hand-built game tree that implements GameState, so search
// results can be checked against values worked out on paper.

use crate::agent::ai::Evaluate;
use crate::game_repr::{ActionList, Cell, CellList, GameState, PlayerId};
use std::cell::Cell as CallCounter;
use std::hash::{Hash, Hasher};
use std::sync::Arc;


/// Shape of a synthetic tree.
/// `Leaf(u)` is terminal with utility `u` for player one.
/// `Node(h, children)` has heuristic value `h` for player one.
#[derive(Debug, Clone)]
pub enum Shape {
    Leaf(f64),
    Node(f64, Vec<Shape>),
}

#[derive(Debug)]
struct TreeNode {
    value: f64,
    children: Vec<usize>,
    ply: u32,
}

/// Position inside a synthetic tree. Actions are child node ids.
#[derive(Debug, Clone)]
pub struct TreeState {
    nodes: Arc<Vec<TreeNode>>,
    id: usize,
}

impl PartialEq for TreeState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes) && self.id == other.id
    }
}

impl Eq for TreeState {}

impl Hash for TreeState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl TreeState {
    pub fn build(shape: &Shape, root_ply: u32) -> Self {
        let mut nodes = Vec::new();
        push_node(shape, root_ply, &mut nodes);
        Self {
            nodes: Arc::new(nodes),
            id: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    fn node(&self) -> &TreeNode {
        &self.nodes[self.id]
    }
}

fn push_node(shape: &Shape, ply: u32, nodes: &mut Vec<TreeNode>) -> usize {
    let id = nodes.len();
    match shape {
        Shape::Leaf(u) => nodes.push(TreeNode {
            value: *u,
            children: Vec::new(),
            ply,
        }),
        Shape::Node(h, children) => {
            nodes.push(TreeNode {
                value: *h,
                children: Vec::new(),
                ply,
            });
            let ids: Vec<usize> = children
                .iter()
                .map(|child| push_node(child, ply + 1, nodes))
                .collect();
            nodes[id].children = ids;
        }
    }
    id
}

fn for_player(value: f64, player: PlayerId) -> f64 {
    match player {
        PlayerId::One => value,
        PlayerId::Two => -value,
    }
}

impl GameState for TreeState {
    type Action = usize;

    fn is_terminal(&self) -> bool {
        self.node().children.is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if self.is_terminal() {
            for_player(self.node().value, player)
        } else {
            0.0
        }
    }

    fn actions(&self) -> ActionList<usize> {
        self.node().children.iter().copied().collect()
    }

    fn result(&self, action: usize) -> Self {
        assert!(self.node().children.contains(&action), "illegal tree action");
        Self {
            nodes: Arc::clone(&self.nodes),
            id: action,
        }
    }

    fn ply_count(&self) -> u32 {
        self.node().ply
    }

    fn active_player(&self) -> PlayerId {
        PlayerId::for_ply(self.node().ply)
    }

    fn location(&self, _player: PlayerId) -> Option<Cell> {
        None
    }

    fn liberties(&self, _cell: Option<Cell>) -> CellList {
        CellList::new()
    }
}

/// Reads the stored heuristic and counts calls; panics on terminal nodes
#[derive(Default)]
pub struct TreeEvaluator {
    pub calls: CallCounter<u64>,
}

impl Evaluate<TreeState> for TreeEvaluator {
    fn evaluate(&self, state: &TreeState, player: PlayerId) -> f64 {
        assert!(!state.is_terminal(), "evaluator called on terminal node {}", state.id);
        self.calls.set(self.calls.get() + 1);
        for_player(state.node().value, player)
    }
}

/// Plain minimax without pruning, the reference for alpha-beta
pub fn minimax<S, E>(state: &S, depth: u8, maximizing: bool, player: PlayerId, evaluator: &E) -> f64
where
    S: GameState,
    E: Evaluate<S>,
{
    if state.is_terminal() {
        return state.utility(player);
    }
    if depth == 0 {
        return evaluator.evaluate(state, player);
    }
    let values = state
        .actions()
        .into_iter()
        .map(|a| minimax(&state.result(a), depth - 1, !maximizing, player, evaluator));
    if maximizing {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// Random tree with integer-valued leaves and heuristics
pub fn random_shape(rng: &mut impl rand::Rng, depth: u32) -> Shape {
    let value = rng.gen_range(-20..=20) as f64;
    if depth == 0 || rng.gen_bool(0.15) {
        return Shape::Leaf(value);
    }
    let branching = rng.gen_range(1..=4);
    Shape::Node(value, (0..branching).map(|_| random_shape(rng, depth - 1)).collect())
}
