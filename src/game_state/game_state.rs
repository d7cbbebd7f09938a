//! Sparse board state.
//!
//! `GameState` stores occupied squares in an ordered map keyed by position,
//! together with the board dimensions, the side to move, and the piece a
//! front end may have lifted off the board mid-drag. Search and the check
//! oracle never mutate a shared state; they clone it and apply hypothetical
//! moves to the clone.

use std::collections::BTreeMap;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_rank_piece, BOARD_HEIGHT, BOARD_WIDTH, MIN_GAME_HEIGHT};
use crate::game_state::chess_types::*;

/// A piece held by the front end between pick-up and drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiftedPiece {
    pub piece: Piece,
    pub origin: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    squares: BTreeMap<Position, Piece>,
    pub width: i32,
    pub height: i32,
    pub side_to_move: Color,
    lifted: Option<LiftedPiece>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl GameState {
    /// Empty board of the given size with Light to move.
    pub fn new_empty(width: i32, height: i32) -> Self {
        Self {
            squares: BTreeMap::new(),
            width,
            height,
            side_to_move: Color::Light,
            lifted: None,
        }
    }

    /// Standard setup: Dark's back rank on rank 0 and pawns on rank 1, Light
    /// mirrored on the last two ranks. Boards shorter than four ranks have
    /// no room for both armies and stay empty.
    pub fn new_game(width: i32, height: i32) -> Self {
        let mut state = Self::new_empty(width, height);

        if height < MIN_GAME_HEIGHT {
            return state;
        }

        for file in 0..width {
            let back_rank = back_rank_piece(file, width);
            let setup = [
                (1, Some(PieceKind::Pawn), Color::Dark),
                (height - 2, Some(PieceKind::Pawn), Color::Light),
                (0, back_rank, Color::Dark),
                (height - 1, back_rank, Color::Light),
            ];

            for (rank, kind, color) in setup {
                if let Some(kind) = kind {
                    state.squares.insert(Position::new(file, rank), Piece::new(kind, color));
                }
            }
        }

        state
    }

    #[inline]
    pub fn standard() -> Self {
        Self::new_game(BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[inline]
    pub fn is_in_bounds(&self, position: Position) -> bool {
        (0..self.width).contains(&position.file) && (0..self.height).contains(&position.rank)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares.get(&position).copied()
    }

    /// True only for in-bound squares holding a piece.
    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.squares.contains_key(&position)
    }

    /// Put `piece` on `position`, returning whatever stood there before.
    pub fn place_piece(&mut self, position: Position, piece: Piece) -> ChessResult<Option<Piece>> {
        if !self.is_in_bounds(position) {
            return Err(ChessError::InvalidSquare {
                file: position.file,
                rank: position.rank,
            });
        }
        Ok(self.squares.insert(position, piece))
    }

    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.squares.remove(&position)
    }

    /// All placed pieces in position order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().map(|(pos, piece)| (*pos, *piece))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }

    /// Move whatever stands on `mv.from` to `mv.to` without any legality
    /// check, and hand the turn to the other side. Returns the captured
    /// piece, if any.
    pub fn apply_move_unchecked(&mut self, mv: ChessMove) -> Option<Piece> {
        let piece = self.squares.remove(&mv.from)?;
        let captured = self.squares.insert(mv.to, piece);
        self.side_to_move = piece.color.opposite();
        captured
    }

    /// Clone the state and apply `mv` to the clone.
    pub fn simulate_move(&self, mv: ChessMove) -> GameState {
        let mut next = self.clone();
        next.apply_move_unchecked(mv);
        next
    }

    #[inline]
    pub fn lifted(&self) -> Option<LiftedPiece> {
        self.lifted
    }

    /// Take the piece on `position` off the map and hold it as lifted.
    pub fn lift_piece(&mut self, position: Position) -> ChessResult<Piece> {
        if let Some(lifted) = self.lifted {
            return Err(ChessError::PieceAlreadyLifted(lifted.origin));
        }
        let piece = self
            .squares
            .remove(&position)
            .ok_or(ChessError::NoPieceAtSquare(position))?;
        self.lifted = Some(LiftedPiece {
            piece,
            origin: position,
        });
        Ok(piece)
    }

    /// Put a lifted piece back on its origin square. Fails without side
    /// effects if the origin has been filled in the meantime.
    pub fn cancel_lift(&mut self) -> ChessResult<()> {
        let lifted = self.lifted.ok_or(ChessError::NoLiftedPiece)?;
        if self.squares.contains_key(&lifted.origin) {
            return Err(ChessError::SquareOccupied(lifted.origin));
        }
        self.lifted = None;
        self.squares.insert(lifted.origin, lifted.piece);
        Ok(())
    }

    /// The persisted position with any lifted piece restored to its origin.
    pub fn with_lift_restored(&self) -> GameState {
        let mut state = self.clone();
        if let Some(lifted) = state.lifted.take() {
            state.squares.insert(lifted.origin, lifted.piece);
        }
        state
    }

    /// Clone of the state as if the lifted piece had been dropped on
    /// `destination`. Without a lifted piece this is a plain clone.
    pub fn with_lifted_at(&self, destination: Position) -> GameState {
        let mut state = self.clone();
        if let Some(lifted) = state.lifted.take() {
            state.squares.insert(destination, lifted.piece);
            state.side_to_move = lifted.piece.color.opposite();
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_thirty_two_pieces_and_light_to_move() {
        let state = GameState::standard();
        assert_eq!(state.piece_count(), 32);
        assert_eq!(state.side_to_move, Color::Light);
        assert_eq!(
            state.piece_at(Position::new(4, 7)),
            Some(Piece::new(PieceKind::King, Color::Light))
        );
        assert_eq!(
            state.piece_at(Position::new(3, 0)),
            Some(Piece::new(PieceKind::Queen, Color::Dark))
        );
        assert_eq!(
            state.piece_at(Position::new(6, 1)),
            Some(Piece::new(PieceKind::Pawn, Color::Dark))
        );
        assert!(!state.is_occupied(Position::new(4, 4)));
    }

    #[test]
    fn one_king_per_color_at_start() {
        let state = GameState::standard();
        for color in [Color::Light, Color::Dark] {
            let kings = state
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            assert_eq!(kings, 1);
        }
    }

    #[test]
    fn bounds_reject_negative_and_overflowing_coordinates() {
        let state = GameState::standard();
        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(7, 7)));
        assert!(!state.is_in_bounds(Position::new(-1, 3)));
        assert!(!state.is_in_bounds(Position::new(3, 8)));
        assert!(!state.is_occupied(Position::new(8, 0)));
    }

    #[test]
    fn place_piece_out_of_bounds_is_an_error() {
        let mut state = GameState::default();
        let err = state
            .place_piece(Position::new(9, 0), Piece::new(PieceKind::Rook, Color::Dark))
            .expect_err("out of bounds placement should fail");
        assert_eq!(err, ChessError::InvalidSquare { file: 9, rank: 0 });
    }

    #[test]
    fn apply_move_moves_piece_and_flips_turn() {
        let mut state = GameState::standard();
        let mv = ChessMove::new(Position::new(4, 6), Position::new(4, 4));
        let captured = state.apply_move_unchecked(mv);

        assert_eq!(captured, None);
        assert!(!state.is_occupied(Position::new(4, 6)));
        assert_eq!(
            state.piece_at(Position::new(4, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
        assert_eq!(state.side_to_move, Color::Dark);
    }

    #[test]
    fn simulate_and_discard_leaves_original_untouched() {
        let state = GameState::standard();
        let before = state.clone();

        let clone = state.clone();
        drop(clone);
        assert_eq!(state, before);

        let simulated = state.simulate_move(ChessMove::new(Position::new(1, 7), Position::new(2, 5)));
        assert_ne!(simulated, state);
        assert_eq!(state, before);
    }

    #[test]
    fn lift_and_cancel_restores_the_square() {
        let mut state = GameState::standard();
        let origin = Position::new(6, 7);
        let piece = state.lift_piece(origin).expect("knight should lift");

        assert_eq!(piece.kind, PieceKind::Knight);
        assert!(!state.is_occupied(origin));
        assert_eq!(
            state.lift_piece(Position::new(1, 7)),
            Err(ChessError::PieceAlreadyLifted(origin))
        );

        state.cancel_lift().expect("cancel should succeed");
        assert_eq!(state, GameState::standard());
        assert_eq!(state.cancel_lift(), Err(ChessError::NoLiftedPiece));
    }

    #[test]
    fn lifted_piece_can_be_projected_onto_a_destination() {
        let mut state = GameState::standard();
        state.lift_piece(Position::new(6, 7)).expect("knight should lift");

        let projected = state.with_lifted_at(Position::new(5, 5));
        assert_eq!(
            projected.piece_at(Position::new(5, 5)),
            Some(Piece::new(PieceKind::Knight, Color::Light))
        );
        assert_eq!(projected.lifted(), None);
        assert_eq!(projected.side_to_move, Color::Dark);

        let restored = state.with_lift_restored();
        assert_eq!(restored, GameState::standard());
    }

    #[test]
    fn new_game_keeps_every_piece_on_the_board() {
        for height in 0..MIN_GAME_HEIGHT {
            let state = GameState::new_game(BOARD_WIDTH, height);
            assert_eq!(state.piece_count(), 0, "height {height}");
        }

        let short = GameState::new_game(BOARD_WIDTH, MIN_GAME_HEIGHT);
        assert_eq!(short.piece_count(), 32);
        assert!(short.pieces().all(|(pos, _)| short.is_in_bounds(pos)));
        assert_eq!(short.pieces_of(Color::Light).count(), 16);
    }

    #[test]
    fn cancel_lift_refuses_a_refilled_origin() {
        let mut state = GameState::standard();
        let origin = Position::new(6, 7);
        state.lift_piece(origin).expect("knight should lift");

        let rook = Piece::new(PieceKind::Rook, Color::Light);
        state.place_piece(origin, rook).expect("origin is on the board");

        assert_eq!(state.cancel_lift(), Err(ChessError::SquareOccupied(origin)));
        assert_eq!(state.piece_at(origin), Some(rook));
        assert!(state.lifted().is_some());
    }
}
