//! Index-arena UCT tree. Nodes accumulate outcomes as the raw score
//! difference (player 0 minus player 1); the selection rule re-signs the
//! exploitation term for whichever player chooses at a node.

use crate::rollout;
use mosaic_core::{legal_moves, Move, Position};
use rand::rngs::StdRng;

/// Normalizer applied to the exploitation term so the exploration constant
/// keeps its usual scale. A drafting game rarely ends further apart than
/// this many points.
const OUTCOME_SCALE: f64 = 50.0;

pub(crate) struct Node {
    state: Position,
    parent: Option<usize>,
    children: Vec<usize>,
    untried: Vec<Move>,
    visits: u32,
    /// Sum of playout outcomes, as score difference player 0 − player 1
    total: f64,
    is_terminal: bool,
}

impl Node {
    fn new(state: Position, parent: Option<usize>) -> Self {
        let is_terminal = state.game_over;
        let untried = if is_terminal {
            Vec::new()
        } else {
            legal_moves(&state)
        };
        Node {
            state,
            parent,
            children: Vec::new(),
            untried,
            visits: 0,
            total: 0.0,
            is_terminal,
        }
    }

    fn mean(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total / f64::from(self.visits)
        }
    }
}

pub(crate) struct SearchTree {
    nodes: Vec<Node>,
    exploration: f64,
}

impl SearchTree {
    pub(crate) fn new(root_state: Position, exploration: f64) -> Self {
        SearchTree {
            nodes: vec![Node::new(root_state, None)],
            exploration,
        }
    }

    pub(crate) fn root_visits(&self) -> u32 {
        self.nodes[0].visits
    }

    /// Mean outcome at the root as score difference player 0 − player 1.
    pub(crate) fn root_mean(&self) -> f64 {
        self.nodes[0].mean()
    }

    fn ucb1(&self, parent: usize, child: usize) -> f64 {
        let node = &self.nodes[child];
        if node.visits == 0 {
            return f64::INFINITY;
        }
        let parent_visits = f64::from(self.nodes[parent].visits.max(1));
        let sign = if self.nodes[parent].state.to_move == 0 {
            1.0
        } else {
            -1.0
        };
        let exploitation = sign * node.mean() / OUTCOME_SCALE;
        let exploration =
            self.exploration * (parent_visits.ln() / f64::from(node.visits)).sqrt();
        exploitation + exploration
    }

    fn select(&self) -> usize {
        let mut index = 0;
        loop {
            let node = &self.nodes[index];
            if node.is_terminal || !node.untried.is_empty() || node.children.is_empty() {
                return index;
            }
            let mut best = node.children[0];
            let mut best_value = self.ucb1(index, best);
            for &child in &node.children[1..] {
                let value = self.ucb1(index, child);
                if value > best_value {
                    best_value = value;
                    best = child;
                }
            }
            index = best;
        }
    }

    fn expand(&mut self, index: usize) -> Option<usize> {
        let mv = self.nodes[index].untried.pop()?;
        let state = self.nodes[index].state.apply(mv);
        let child = Node::new(state, Some(index));
        self.nodes.push(child);
        let child_index = self.nodes.len() - 1;
        self.nodes[index].children.push(child_index);
        Some(child_index)
    }

    fn backpropagate(&mut self, mut index: usize, outcome: f64) {
        loop {
            let node = &mut self.nodes[index];
            node.visits += 1;
            node.total += outcome;
            match node.parent {
                Some(parent) => index = parent,
                None => break,
            }
        }
    }

    /// One select → expand → playout → backpropagate cycle.
    pub(crate) fn iterate(&mut self, rng: &mut StdRng) {
        let selected = self.select();
        let (leaf, outcome) = match self.expand(selected) {
            Some(child) => {
                let outcome = rollout::playout(&self.nodes[child].state, rng);
                (child, outcome)
            }
            // terminal or move-less: score the node itself
            None => {
                let s = self.nodes[selected].state.terminal_score().scores;
                (selected, f64::from(s[0] - s[1]))
            }
        };
        self.backpropagate(leaf, outcome);
    }
}
