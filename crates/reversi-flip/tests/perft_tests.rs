//! Move-tree enumeration from the initial position.
//!
//! Every node expansion exercises the move generator and the flip
//! computation together; a single wrong flip anywhere in the tree
//! changes the node counts.

use reversi_flip::board::Board;

/// Known node counts from the standard initial position. A forced pass
/// does not consume a ply; a finished game counts as one node.
const REFERENCE_COUNTS: &[(u32, u64)] = &[
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
    (7, 55_092),
    (8, 390_216),
    (9, 3_005_320),
];

fn perft(board: &Board, depth: u32) -> u64 {
    let moves = board.get_moves();
    if moves.is_empty() {
        let next = board.switch_players();
        if next.has_legal_moves() {
            return perft(&next, depth);
        }
        return 1;
    }

    let mut nodes = 0;
    for sq in moves {
        if depth <= 1 {
            nodes += 1;
        } else {
            nodes += perft(&board.make_move(sq), depth - 1);
        }
    }
    nodes
}

#[test]
fn test_perft_reference_counts() {
    let board = Board::new();
    for &(depth, expected) in REFERENCE_COUNTS {
        assert_eq!(
            perft(&board, depth),
            expected,
            "node count mismatch at depth {depth}"
        );
    }
}
