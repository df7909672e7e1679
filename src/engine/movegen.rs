//! Pseudo-legal move generation.
//!
//! [`generate_moves`] computes the destination squares a piece may reach by
//! its geometric movement rules, filtered only by board bounds and friendly
//! occupancy. It deliberately does **not** filter moves that would leave the
//! mover's own king in check: attack detection is built on top of this raw
//! set, and a generator that asked "is the attacker itself in check?" would
//! recurse forever. Self-check handling is layered in
//! [`crate::engine::game`] via simulation on cloned boards.
//!
//! The generator never mutates the board and never fails; an origin square
//! is assumed already validated by the caller (the game engine only calls it
//! for squares it has confirmed hold the moving side's piece).

use crate::engine::board::Board;
use crate::engine::types::{Color, Piece, PieceKind, Square};

/// Orthogonal step directions (rook rays).
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal step directions (bishop rays).
const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight unit directions (queen rays, king steps).
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The eight knight jumps.
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

// =========================================================================
// Public API
// =========================================================================

/// All pseudo-legal destination squares for `piece` standing on `from`.
///
/// The result contains no duplicates and no square occupied by a piece of
/// the mover's own color; ordering is insignificant.
pub fn generate_moves(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_JUMPS),
        PieceKind::Bishop => slider_moves(board, from, piece.color, &DIAGONALS),
        PieceKind::Rook => slider_moves(board, from, piece.color, &ORTHOGONALS),
        PieceKind::Queen => slider_moves(board, from, piece.color, &ALL_DIRECTIONS),
        PieceKind::King => step_moves(board, from, piece.color, &ALL_DIRECTIONS),
    }
}

/// Is `sq` attacked by any piece of color `by`?
///
/// Scans every piece of `by` and tests raw destination membership. At board
/// scale (64 squares) the full scan is cheap enough that no attack-map
/// caching is warranted.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|&(_, p)| p.color == by)
        .any(|(from, p)| generate_moves(board, from, p).contains(&sq))
}

// =========================================================================
// Pawn moves
// =========================================================================

/// Pawns are the only asymmetric piece: pushes must land on empty squares,
/// captures go diagonally forward only. White advances toward decreasing
/// rank index (up the displayed board), black toward increasing; the
/// double-step is available from the home rank (6 for white, 1 for black)
/// only when both squares ahead are empty.
fn pawn_moves(board: &Board, from: Square, us: Color) -> Vec<Square> {
    let (dir, home_rank): (i8, i8) = match us {
        Color::White => (-1, 6),
        Color::Black => (1, 1),
    };

    let mut moves = Vec::new();

    // Single push onto an empty square.
    let one = from.offset(dir, 0);
    if one.is_on_board() && board.piece_at(one).is_none() {
        moves.push(one);

        // Double push: home rank only, intermediate square already known empty.
        let two = from.offset(dir * 2, 0);
        if from.rank == home_rank && two.is_on_board() && board.piece_at(two).is_none() {
            moves.push(two);
        }
    }

    // Diagonal captures: only onto a square holding an opposing piece.
    for df in [-1, 1] {
        let target = from.offset(dir, df);
        if !target.is_on_board() {
            continue;
        }
        if let Some(occupant) = board.piece_at(target) {
            if occupant.color != us {
                moves.push(target);
            }
        }
    }

    moves
}

// =========================================================================
// Step pieces (knight, king)
// =========================================================================

/// One fixed jump per offset: accepted when on the board and not occupied by
/// a friendly piece.
fn step_moves(board: &Board, from: Square, us: Color, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, df) in offsets {
        let target = from.offset(dr, df);
        if !target.is_on_board() {
            continue;
        }
        match board.piece_at(target) {
            Some(occupant) if occupant.color == us => {}
            _ => moves.push(target),
        }
    }
    moves
}

// =========================================================================
// Sliding pieces (bishop, rook, queen)
// =========================================================================

/// Scan outward along each ray one square at a time. Empty squares are added
/// and scanning continues; the first occupied square ends the ray, and is
/// included only when it holds an opposing piece: a capture, with no
/// sliding through it.
fn slider_moves(board: &Board, from: Square, us: Color, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    for &(dr, df) in directions {
        let mut target = from.offset(dr, df);
        while target.is_on_board() {
            match board.piece_at(target) {
                None => {
                    moves.push(target);
                    target = target.offset(dr, df);
                }
                Some(occupant) => {
                    if occupant.color != us {
                        moves.push(target);
                    }
                    break;
                }
            }
        }
    }
    moves
}

// =========================================================================
// Tests
// =========================================================================
