//! Alpha-beta integration tests using the Pentago-Swap reference game.

use pentago_swap_ai::core::{GameRng, PlayerId};
use pentago_swap_ai::eval::CompositeEvaluator;
use pentago_swap_ai::games::pentago_swap::{PentagoMove, PentagoSwapState};
use pentago_swap_ai::rules::{BoardState, Winner};
use pentago_swap_ai::search::{
    terminal_score, AlphaBetaSearch, DepthPolicy, NoMoveReason, SearchConfig, SearchError,
};
use pentago_swap_ai::board::QuadrantPair;
use proptest::prelude::*;

/// Full board with no five-in-a-row anywhere.
const DRAWN_ROWS: [&str; 6] = ["wwbbww", "bbwwbb", "wwbbww", "bbwwbb", "wwbbww", "bbwwbb"];

/// `DRAWN_ROWS` with the listed cells cleared.
fn near_full(cleared: &[(usize, usize)], turn: PlayerId) -> PentagoSwapState {
    let mut rows: Vec<Vec<u8>> = DRAWN_ROWS.iter().map(|r| r.as_bytes().to_vec()).collect();
    for &(row, col) in cleared {
        rows[row][col] = b'.';
    }
    let rows: Vec<String> = rows
        .into_iter()
        .map(|r| String::from_utf8(r).unwrap())
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    PentagoSwapState::from_rows(&rows, turn).unwrap()
}

/// Plain minimax without pruning, same leaf rules as the engine.
fn minimax(
    state: &PentagoSwapState,
    player: PlayerId,
    depth: u32,
    limit: u32,
    evaluator: &CompositeEvaluator,
) -> f64 {
    if let Some(score) = terminal_score(state.winner(), player) {
        return score;
    }
    let moves = state.legal_moves();
    if depth >= limit || moves.is_empty() {
        return evaluator.evaluate_state(state, player);
    }

    let values = moves.iter().map(|mv| {
        let mut child = state.clone();
        child.apply_move(mv).unwrap();
        minimax(&child, player, depth + 1, limit, evaluator)
    });
    if depth % 2 == 0 {
        values.fold(f64::NEG_INFINITY, f64::max)
    } else {
        values.fold(f64::INFINITY, f64::min)
    }
}

/// Root choice of plain minimax: first move with the strictly best value.
fn minimax_root(state: &PentagoSwapState, player: PlayerId, limit: u32) -> (PentagoMove, f64) {
    let evaluator = CompositeEvaluator::from_kinds(&SearchConfig::default().heuristics);
    let mut best: Option<(PentagoMove, f64)> = None;
    for mv in state.legal_moves() {
        let mut child = state.clone();
        child.apply_move(&mv).unwrap();
        let value = minimax(&child, player, 1, limit, &evaluator);
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((mv, value));
        }
    }
    best.unwrap()
}

// =============================================================================
// Move Selection
// =============================================================================

#[test]
fn test_finds_win_in_one() {
    let state = PentagoSwapState::from_rows(
        &["wwww..", "bbb...", "......", "......", "...b..", "......"],
        PlayerId::FIRST,
    )
    .unwrap();

    // Without heuristics only finished games score away from 0.5.
    let mut search = AlphaBetaSearch::new(SearchConfig::default().with_fixed_depth(1))
        .with_evaluator(CompositeEvaluator::new());
    let result = search.search(&state, PlayerId::FIRST).unwrap();

    // Only the bottom swap leaves the top row intact.
    assert_eq!(
        result.best_move,
        PentagoMove::new(0, 4, QuadrantPair::BottomLeftBottomRight)
    );
    assert_eq!(result.score, 1.0);

    let mut next = state.clone();
    next.apply_move(&result.best_move).unwrap();
    assert_eq!(next.winner(), Winner::Player(PlayerId::FIRST));
}

#[test]
fn test_returns_legal_move_on_near_full_board() {
    let state = near_full(&[(4, 4), (4, 5), (5, 4), (5, 5)], PlayerId::FIRST);
    let mut search = AlphaBetaSearch::default();
    let result = search.search(&state, PlayerId::FIRST).unwrap();

    assert!(state.legal_moves().contains(&result.best_move));
    assert!((0.0..=1.0).contains(&result.score));
    assert_eq!(result.depth_limit, 4);
    assert_eq!(search.stats().root_moves, 24);
}

#[test]
fn test_depth_limit_follows_root_move_count() {
    // 5 empty cells: 30 moves, three plies.
    let state = near_full(&[(0, 0), (0, 1), (2, 2), (4, 5), (5, 5)], PlayerId::SECOND);
    let mut search = AlphaBetaSearch::default();
    let result = search.search(&state, PlayerId::SECOND).unwrap();
    assert_eq!(result.depth_limit, 3);
    assert_eq!(search.stats().depth_limit, 3);
}

#[test]
fn test_search_is_repeatable() {
    let state = near_full(&[(1, 1), (2, 4), (3, 0), (5, 2)], PlayerId::FIRST);
    let mut search = AlphaBetaSearch::default();
    let first = search.search(&state, PlayerId::FIRST).unwrap();
    let first_stats = search.stats().clone();
    let second = search.search(&state, PlayerId::FIRST).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_stats.nodes_visited(), search.stats().nodes_visited());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_finished_game_is_an_error() {
    let state = PentagoSwapState::from_rows(&DRAWN_ROWS, PlayerId::FIRST).unwrap();
    let mut search = AlphaBetaSearch::default();

    match search.search(&state, PlayerId::FIRST) {
        Err(SearchError::NoMoveAvailable(NoMoveReason::GameOver(Winner::Draw))) => {}
        other => panic!("expected game-over error, got {:?}", other.map(|r| r.best_move)),
    }
}

#[test]
fn test_invalid_config_is_an_error() {
    let state = PentagoSwapState::new();
    let mut search = AlphaBetaSearch::new(
        SearchConfig::default().with_depth_policy(DepthPolicy::fixed(0)),
    );
    assert!(matches!(
        search.search(&state, PlayerId::FIRST),
        Err(SearchError::Config(_))
    ));
}

// =============================================================================
// Pruning Preserves Minimax
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(6))]

    #[test]
    fn test_alphabeta_matches_minimax(seed in any::<u64>(), plies in 32usize..=33) {
        let state = PentagoSwapState::new().random_playout(&mut GameRng::new(seed), plies);
        prop_assume!(!state.is_terminal());

        let player = state.turn_player();
        let mut search = AlphaBetaSearch::default();
        let result = search.search(&state, player).unwrap();
        let (expected_move, expected_score) = minimax_root(&state, player, result.depth_limit);

        prop_assert_eq!(result.best_move, expected_move);
        prop_assert_eq!(result.score, expected_score);
    }
}
