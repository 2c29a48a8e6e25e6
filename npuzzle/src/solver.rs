use rustc_hash::FxHashSet;
use crate::board::Board;
use crate::board::neighbors::neighbors_of;
use crate::board::heuristic::update_manhattan;
use crate::queue::{MinPriorityQueue, BinaryMinQueue};
use crate::stats::{SearchStatsCollector, Side};

/// Handle of a node stored in the [`SearchTree`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// State of the A* search: a board, the number of moves from the root, and the parent node.
#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    moves: usize,
    parent: Option<NodeId>,
    /// Manhattan distance of `board`, cached to compute it incrementally for children.
    manhattan: usize
}

impl SearchNode {
    /// Constructs the root node, which has no parent.
    pub fn root(board: Board) -> Self {
        let manhattan = board.manhattan();
        Self { board, moves: 0, parent: None, manhattan }
    }

    #[inline] fn child(board: Board, parent: NodeId, moves: usize, manhattan: usize) -> Self {
        debug_assert_eq!(manhattan, board.manhattan());
        Self { board, moves, parent: Some(parent), manhattan }
    }

    #[inline] pub fn board(&self) -> &Board { &self.board }

    #[inline] pub fn moves(&self) -> usize { self.moves }

    #[inline] pub fn parent(&self) -> Option<NodeId> { self.parent }

    /// Returns Manhattan distance of the board plus number of moves made so far.
    /// Nodes with lower priority are expanded first.
    #[inline] pub fn priority(&self) -> usize { self.manhattan + self.moves }
}

/// Arena of expanded nodes. Parent links are indices into the arena, so the tree owns all its nodes.
#[derive(Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>
}

impl SearchTree {
    #[inline] pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline] pub fn get(&self, id: NodeId) -> &SearchNode { &self.nodes[id.0] }

    #[inline] pub fn len(&self) -> usize { self.nodes.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Returns boards on the path from the root to the node `id` (both included).
    pub fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.get(id).moves + 1);
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.board.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }
}

/// Solver settings.
#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct SolverConfig {
    /// Whether each search remembers expanded boards and never expands a board twice.
    ///
    /// Without it, only the board of the parent is skipped when children are generated,
    /// so boards reachable by longer cycles can enter the frontier many times.
    /// Move counts are the same in both modes; the closed set trades memory for fewer expansions.
    pub closed_set: bool
}

impl SolverConfig {
    #[inline] pub fn with_closed_set(closed_set: bool) -> Self { Self { closed_set } }
}

/// Result of a single expansion step.
enum Step {
    /// The goal has been removed from the frontier.
    Goal(NodeId),
    Expanded,
    /// The frontier is empty, all boards reachable from the root have been expanded.
    Exhausted
}

/// One of two best-first searches run in lockstep by the [`Solver`].
struct Search<Q> {
    side: Side,
    frontier: Q,
    tree: SearchTree,
    closed: Option<FxHashSet<Board>>
}

impl<Q: MinPriorityQueue<SearchNode>> Search<Q> {
    fn new(side: Side, root: Board, mut frontier: Q, config: SolverConfig, stats: &mut impl SearchStatsCollector) -> Self {
        frontier.insert(SearchNode::root(root));
        stats.generated(side);
        Self { side, frontier, tree: SearchTree::default(), closed: config.closed_set.then(FxHashSet::default) }
    }

    /// Removes the node with the lowest priority from the frontier and, unless it holds the goal,
    /// inserts its children (except the one equal to its parent) into the frontier.
    fn step(&mut self, stats: &mut impl SearchStatsCollector) -> Step {
        let node = loop {
            let Some(node) = self.frontier.del_min() else { return Step::Exhausted };
            if let Some(closed) = &mut self.closed {
                if !closed.insert(node.board.clone()) { continue; }
            }
            break node;
        };
        stats.expanded(self.side);
        let is_goal = node.manhattan == 0;
        let id = self.tree.push(node);
        if is_goal { return Step::Goal(id); }

        let node = self.tree.get(id);
        let parent_board = node.parent.map(|p| &self.tree.get(p).board);
        let board = &node.board;
        let dimension = board.dimension();
        let blank = board.blank_cell();
        for cell in neighbors_of(dimension, blank) {
            let child = board.slide(cell);
            if parent_board == Some(&child) { continue; }
            if self.closed.as_ref().map_or(false, |closed| closed.contains(&child)) { continue; }
            // tile has moved from cell to blank
            let manhattan = update_manhattan(dimension, node.manhattan, board.tile_at_cell(cell), cell, blank);
            self.frontier.insert(SearchNode::child(child, id, node.moves + 1, manhattan));
            stats.generated(self.side);
        }
        Step::Expanded
    }
}

/// Finds the shortest solution of the sliding puzzle with A* (Manhattan priority),
/// or proves that the puzzle has no solution.
///
/// Unsolvability is detected by searching, in lockstep, also from the twin of the initial board
/// (see [`Board::twin`]). Exactly one of these two boards is solvable,
/// and the whole search is done eagerly by the constructor.
#[derive(Clone, Debug)]
pub struct Solver {
    initial: Board,
    /// Boards from the initial to the goal (both included), or `None` if there is no solution.
    solution: Option<Vec<Board>>
}

impl Solver {
    /// Solves `initial` with the default configuration.
    #[inline] pub fn new(initial: Board) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    #[inline] pub fn with_config(initial: Board, config: SolverConfig) -> Self {
        Self::with_stats(initial, config, &mut ())
    }

    /// Solves `initial` and collects search statistics.
    pub fn with_stats(initial: Board, config: SolverConfig, stats: &mut impl SearchStatsCollector) -> Self {
        Self::with_queues(initial, config, || BinaryMinQueue::new(SearchNode::priority), stats)
    }

    /// Solves `initial` using frontiers constructed by `new_queue`.
    ///
    /// The order in which the queue removes nodes of equal priority decides which of equally
    /// short solutions is found, but never the number of moves.
    pub fn with_queues<Q, NQ>(initial: Board, config: SolverConfig, mut new_queue: NQ, stats: &mut impl SearchStatsCollector) -> Self
        where Q: MinPriorityQueue<SearchNode>, NQ: FnMut() -> Q
    {
        if initial.is_goal() {
            return Self { solution: Some(vec![initial.clone()]), initial };
        }
        let mut primary = Search::new(Side::Primary, initial.clone(), new_queue(), config, stats);
        let mut twin = Search::new(Side::Twin, initial.twin(), new_queue(), config, stats);
        let solution = loop {
            match primary.step(stats) {
                Step::Goal(id) => break Some(primary.tree.path_to(id)),
                Step::Exhausted => break None,
                Step::Expanded => {}
            }
            // the twin frontier can only run dry when the primary search is going to succeed
            if let Step::Goal(_) = twin.step(stats) { break None; }
        };
        Self { initial, solution }
    }

    /// Returns the board given to the solver.
    #[inline] pub fn initial(&self) -> &Board { &self.initial }

    /// Checks whether the initial board can be transformed to the goal.
    #[inline] pub fn is_solvable(&self) -> bool { self.solution.is_some() }

    /// Returns minimal number of moves to solve the initial board, or `None` if it is not solvable.
    #[inline] pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Returns minimal number of moves to solve the initial board, or `-1` if it is not solvable.
    #[inline] pub fn moves_or_sentinel(&self) -> i64 {
        self.moves().map_or(-1, |m| m as i64)
    }

    /// Returns boards of the shortest solution, from the initial board to the goal (both included),
    /// or `None` if the initial board is not solvable.
    #[inline] pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Consumes the solver and returns the solution, see [`Solver::solution`].
    #[inline] pub fn into_solution(self) -> Option<Vec<Board>> { self.solution }
}
