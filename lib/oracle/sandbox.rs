use crate::chess::{Color, GameState, Move, MoveType, Piece, PieceKey, Role};
use crate::hex::{Cell, Orientation};
use crate::oracle::{Oracle, Rejection};

/// A deterministic stand-in for the rules oracle.
///
/// Each color starts with a row of eight pawns and a king behind them, laid out by
/// rotating white's setup. Pawns step straight ahead, or two steps from their home row,
/// and nothing else ever moves. The plane is unbounded.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sandbox {
    pieces: Vec<Piece>,
    state: GameState,
}

impl Default for Sandbox {
    fn default() -> Self {
        let mut pieces = Vec::new();

        for c in Color::ALL {
            let o = Orientation::from(c);
            for q in -4..=3 {
                pieces.push(Piece::new(c, Role::Pawn, Cell::new(q, -4).rotate(o)));
            }

            pieces.push(Piece::new(c, Role::King, Cell::new(0, -3).rotate(o)));
        }

        Sandbox {
            pieces,
            state: GameState::default(),
        }
    }
}

impl Sandbox {
    fn piece_on(&self, cell: Cell) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.cell == cell)
    }

    fn ahead(c: Color, cell: Cell, n: i32) -> Option<Cell> {
        let (dq, dr, _) = Orientation::from(c).permute((0, -1, 1));
        cell.step(dq * n, dr * n)
    }
}

impl Oracle for Sandbox {
    fn moves(&self, from: Cell) -> Vec<Move> {
        let mut moves = Vec::new();

        let pawn = match self.piece_on(from) {
            Some(&p) if p.role == Role::Pawn && p.color == self.state.turn => p,
            _ => return moves,
        };

        let push = |to, kind| Move {
            from,
            to,
            kind,
            color: pawn.color,
            role: pawn.role,
            capture: None,
        };

        let Some(one) = Self::ahead(pawn.color, from, 1) else {
            return moves;
        };

        if self.piece_on(one).is_none() {
            moves.push(push(one, MoveType::Move));

            let home = from.rotate(Orientation::from(pawn.color).inverse()).r() == -4;
            match Self::ahead(pawn.color, from, 2) {
                Some(two) if home && self.piece_on(two).is_none() => {
                    moves.push(push(two, MoveType::DoublePawnPush));
                }
                _ => {}
            }
        }

        moves
    }

    fn commit(&mut self, m: &Move, promotion: Option<Role>, advance: bool) -> Result<(), Rejection> {
        if !self.moves(m.from).contains(m) {
            return Err(Rejection::new(format!("illegal move {m}")));
        }

        for p in self.pieces.iter_mut().filter(|p| p.cell == m.from) {
            p.cell = m.to;
            p.role = promotion.unwrap_or(p.role);
        }

        if advance {
            self.state.turn = self.state.turn.next();
        }

        self.state.move_count += 1;
        Ok(())
    }

    fn pieces(&self) -> Vec<Piece> {
        self.pieces.clone()
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn fen(&self) -> String {
        let mut fields = vec![
            u8::from(self.state.turn).to_string(),
            self.state.move_count.to_string(),
        ];

        fields.extend(self.pieces.iter().map(|p| p.key().to_string()));
        fields.join(" ")
    }

    fn set_fen(&mut self, fen: &str) -> Result<(), Rejection> {
        let mut fields = fen.split_whitespace();

        let turn = fields
            .next()
            .and_then(|t| t.parse::<u8>().ok())
            .and_then(|t| Color::try_from(t).ok())
            .ok_or_else(|| Rejection::new("missing turn"))?;

        let move_count = fields
            .next()
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| Rejection::new("missing move count"))?;

        let pieces = fields
            .map(|k| k.parse::<PieceKey>().map_err(Rejection::new))
            .map(|k| k.map(|k| Piece::new(k.color, k.role, k.cell)))
            .collect::<Result<_, _>>()?;

        self.pieces = pieces;
        self.state = GameState {
            turn,
            move_count,
            ..GameState::default()
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starting_position_has_27_pieces_on_distinct_cells() {
        let cells: HashSet<_> = Sandbox::default().pieces().iter().map(|p| p.cell).collect();
        assert_eq!(cells.len(), 27);
    }

    #[test]
    fn white_pawn_pushes_towards_decreasing_r() {
        let moves = Sandbox::default().moves(Cell::new(0, -4));
        let targets: Vec<_> = moves.iter().map(|m| (m.to, m.kind)).collect();

        assert_eq!(
            targets,
            [
                (Cell::new(0, -5), MoveType::Move),
                (Cell::new(0, -6), MoveType::DoublePawnPush)
            ]
        );
    }

    #[test]
    fn only_the_side_to_move_has_moves() {
        let oracle = Sandbox::default();
        let grey = Cell::new(0, -4).rotate(Orientation::from(Color::Grey));
        assert!(oracle.moves(grey).is_empty());
    }

    #[test]
    fn kings_never_move() {
        assert!(Sandbox::default().moves(Cell::new(0, -3)).is_empty());
    }

    #[test]
    fn committing_passes_the_turn_on() {
        let mut oracle = Sandbox::default();
        let m = oracle.moves(Cell::new(0, -4))[0];
        oracle.commit(&m, None, true).unwrap();

        assert_eq!(oracle.state().turn, Color::Grey);
        assert_eq!(oracle.state().move_count, 1);
        assert!(oracle.pieces().iter().any(|p| p.cell == m.to));
    }

    #[test]
    fn committing_an_illegal_move_is_rejected() {
        let mut oracle = Sandbox::default();
        let mut m = oracle.moves(Cell::new(0, -4))[0];
        m.to = Cell::new(5, 5);

        assert!(oracle.commit(&m, None, true).is_err());
        assert_eq!(oracle, Sandbox::default());
    }

    #[test]
    fn setting_printed_fen_is_an_identity() {
        let mut oracle = Sandbox::default();
        let m = oracle.moves(Cell::new(-2, -4))[1];
        oracle.commit(&m, None, true).unwrap();

        let mut copy = Sandbox::default();
        copy.set_fen(&oracle.fen()).unwrap();
        assert_eq!(copy, oracle);
    }
}
