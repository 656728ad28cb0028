use crate::chess::{GameState, Move, Piece, PieceKey};
use crate::hex::{Labels, Orientation, Point, Viewport};
use crate::oracle::{Oracle, Rejection};
use crate::reconcile::{reconcile, ReconcileError};
use crate::wire::{Event, WireMove};
use derive_more::{Display, Error, From};
use tracing::{debug, error, instrument, warn};

mod config;
mod mode;
mod selection;
mod view;

pub use config::*;
pub use mode::*;
pub use selection::*;
pub use view::*;

/// The reason why the board refused an operation.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum BoardError {
    #[display(fmt = "the board does not accept input")]
    #[from(ignore)]
    Disabled,
    #[display(fmt = "`{_0}` is not a highlighted move")]
    #[from(ignore)]
    NotHighlighted(#[error(ignore)] Move),
    #[display(fmt = "failed to reconcile move")]
    Reconcile(ReconcileError),
    #[display(fmt = "the game can no longer continue")]
    Rejected(Rejection),
}

/// Whatever lies under a point of the screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Target {
    Move(Move),
    Piece(Piece),
}

/// A game session as seen by one client.
///
/// The board owns the rules oracle, every mutation of the position goes through it and
/// is exposed only via `&mut self`, so each commit happens as a single unit.
#[derive(Debug)]
pub struct Board<O: Oracle> {
    oracle: O,
    view: View,
    mode: Mode,
    selection: Selection,
    fault: Option<Rejection>,
}

impl<O: Oracle> Board<O> {
    /// Sets up a board around an [`Oracle`].
    pub fn new(oracle: O, config: &Config) -> Self {
        Board {
            oracle,
            view: config.view(),
            mode: config.mode,
            selection: Selection::Idle,
            fault: None,
        }
    }

    /// The current [`GameState`].
    pub fn state(&self) -> GameState {
        self.oracle.state()
    }

    /// All pieces on the board.
    pub fn pieces(&self) -> Vec<Piece> {
        self.oracle.pieces()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The rejection that ended the session, if any.
    pub fn fault(&self) -> Option<&Rejection> {
        self.fault.as_ref()
    }

    /// Whether the board currently accepts input.
    pub fn is_interactive(&self) -> bool {
        self.fault.is_none() && self.mode.allows(self.state().turn)
    }

    /// Handles a click on a [`Piece`].
    ///
    /// Clicks are ignored while the board does not accept input or if the piece is not
    /// of the color to move.
    pub fn click_piece(&mut self, p: Piece) {
        let turn = self.state().turn;

        if !self.is_interactive() || p.color != turn {
            debug!(%p, "ignoring click");
            return;
        }

        self.selection = self.selection.click(p, turn);
    }

    /// Handles a click on a piece identified by its key.
    ///
    /// Malformed keys and keys of pieces not on the board match nothing.
    pub fn click_key(&mut self, key: &str) {
        let key = match key.parse::<PieceKey>() {
            Ok(k) => k,
            Err(e) => {
                debug!(key, %e, "ignoring malformed key");
                return;
            }
        };

        match self.pieces().into_iter().find(|p| p.key() == key) {
            Some(p) => self.click_piece(p),
            None => debug!(%key, "no piece matches key"),
        }
    }

    /// The legal moves of the selected piece.
    pub fn legal_moves(&self) -> Vec<Move> {
        match self.selection {
            Selection::Selected(p) if self.is_interactive() => self.oracle.moves(p.cell),
            _ => Vec::new(),
        }
    }

    fn commit(&mut self, m: &Move) -> Result<(), BoardError> {
        if let Err(e) = self.oracle.commit(m, None, true) {
            error!(%m, %e, "oracle rejected move");
            self.fault = Some(e.clone());
            return Err(e.into());
        }

        debug!(%m, "committed");
        self.selection = Selection::Idle;
        Ok(())
    }

    /// Plays one of the highlighted moves.
    ///
    /// On success, returns the [`WireMove`] to send to the other players.
    #[instrument(level = "trace", skip(self), err)]
    pub fn play(&mut self, m: &Move) -> Result<WireMove, BoardError> {
        if !self.is_interactive() {
            return Err(BoardError::Disabled);
        } else if !self.legal_moves().contains(m) {
            return Err(BoardError::NotHighlighted(*m));
        }

        self.commit(m)?;
        Ok(m.into())
    }

    /// Plays a move received from another player.
    ///
    /// Moves that do not match a legal move in the current position are dropped
    /// and the position is left untouched.
    #[instrument(level = "trace", skip(self), err)]
    pub fn receive(&mut self, wire: &WireMove) -> Result<Move, BoardError> {
        if self.fault.is_some() {
            return Err(BoardError::Disabled);
        }

        let m = match reconcile(&self.oracle, wire) {
            Ok(m) => m,
            Err(e) => {
                warn!(%wire, %e, "dropping move");
                return Err(e.into());
            }
        };

        self.commit(&m)?;
        Ok(m)
    }

    /// Handles an [`Event`] from the game server.
    ///
    /// A [`BoardError::Reconcile`] means the move was dropped and the position left
    /// untouched, which is expected of duplicate or out-of-order moves and leaves the
    /// session usable. Only [`BoardError::Rejected`] ends the session.
    pub fn handle(&mut self, event: Event) -> Result<(), BoardError> {
        match event {
            Event::Move(w) => {
                self.receive(&w)?;
            }

            Event::TurnUpdated { current_turn } => {
                let turn = self.state().turn;
                if current_turn != turn {
                    warn!(%current_turn, %turn, "server disagrees on whose turn it is");
                }
            }

            Event::GameUpdated(status) => debug!(%status, "game updated"),
            Event::Error { message } => warn!(%message, "server reported an error"),
        }

        Ok(())
    }

    /// The current position in FEN.
    pub fn fen(&self) -> String {
        self.oracle.fen()
    }

    /// Replaces the current position by one in FEN.
    #[instrument(level = "trace", skip(self), err)]
    pub fn set_fen(&mut self, fen: &str) -> Result<(), BoardError> {
        self.selection = Selection::Idle;

        if let Err(e) = self.oracle.set_fen(fen) {
            error!(%e, "oracle rejected position");
            self.fault = Some(e.clone());
            return Err(e.into());
        }

        Ok(())
    }

    pub fn orientation(&self) -> Orientation {
        self.view.orientation()
    }

    pub fn set_orientation(&mut self, o: Orientation) {
        self.view.set_orientation(o);
    }

    pub fn viewport(&self) -> Viewport {
        self.view.viewport()
    }

    /// The tiles of the board.
    pub fn tiles(&self) -> Vec<Tile> {
        self.view.tiles().collect()
    }

    /// The pieces as drawn on the board.
    pub fn sprites(&self) -> Vec<Sprite> {
        self.pieces().into_iter().map(|p| self.view.sprite(p)).collect()
    }

    /// The markers of the highlighted moves.
    pub fn markers(&self) -> Vec<Marker> {
        self.legal_moves().into_iter().map(|m| self.view.marker(m)).collect()
    }

    pub fn labels(&self) -> Labels {
        self.view.labels()
    }

    /// Resolves a point of the screen to a highlighted move or else to a clickable piece.
    pub fn hit(&self, point: Point) -> Option<Target> {
        if let Some(m) = self.markers().into_iter().find(|m| m.region.contains(point)) {
            return Some(Target::Move(m.r#move));
        }

        if !self.is_interactive() {
            return None;
        }

        let turn = self.state().turn;
        self.sprites()
            .into_iter()
            .filter(|s| s.piece.color == turn)
            .find(|s| s.region.contains(point))
            .map(|s| Target::Piece(s.piece))
    }

    /// Handles a click on a point of the screen.
    ///
    /// If the click plays a move, returns the [`WireMove`] to send to the other players.
    pub fn click(&mut self, point: Point) -> Result<Option<WireMove>, BoardError> {
        match self.hit(point) {
            Some(Target::Move(m)) => Ok(Some(self.play(&m)?)),
            Some(Target::Piece(p)) => {
                self.click_piece(p);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, MoveType, Role};
    use crate::hex::Cell;
    use crate::oracle::{MockOracle, Sandbox};
    use crate::wire::Coordinates;
    use mockall::predicate::eq;
    use test_strategy::proptest;

    fn board(mode: Mode) -> Board<Sandbox> {
        let config = Config {
            mode,
            ..Config::default()
        };

        Board::new(Sandbox::default(), &config)
    }

    fn piece_on<O: Oracle>(b: &Board<O>, cell: Cell) -> Piece {
        b.pieces().into_iter().find(|p| p.cell == cell).unwrap()
    }

    fn pawn_push() -> WireMove {
        r#"{"from":{"q":0,"r":-4},"to":{"q":0,"r":-5},"move_type":0,"color":0,"piece":1}"#
            .parse()
            .unwrap()
    }

    #[test]
    fn pawn_push_passes_the_turn_on() {
        let mut b = board(Mode::Local);
        let pawn = piece_on(&b, Cell::new(0, -4));

        b.click_piece(pawn);
        assert_eq!(b.selection(), Selection::Selected(pawn));

        let m = b.legal_moves()[0];
        assert_eq!((m.to, m.kind), (Cell::new(0, -5), MoveType::Move));

        assert_eq!(b.play(&m), Ok(pawn_push()));
        assert_eq!(b.state().move_count, 1);
        assert_eq!(b.state().turn, Color::Grey);
        assert_eq!(b.selection(), Selection::Idle);
        assert_eq!(piece_on(&b, Cell::new(0, -5)).role, Role::Pawn);
    }

    #[test]
    fn clicking_pieces_of_other_colors_is_ignored() {
        let mut b = board(Mode::Local);
        let grey = Cell::new(0, -4).rotate(Color::Grey.into());

        b.click_piece(piece_on(&b, grey));
        assert_eq!(b.selection(), Selection::Idle);
        assert!(b.legal_moves().is_empty());
    }

    #[test]
    fn clicking_the_selected_piece_again_clears_selection() {
        let mut b = board(Mode::Local);
        let pawn = piece_on(&b, Cell::new(0, -4));

        b.click_piece(pawn);
        b.click_piece(pawn);
        assert_eq!(b.selection(), Selection::Idle);
    }

    #[test]
    fn pieces_can_be_clicked_by_key() {
        let mut b = board(Mode::Local);
        let pawn = piece_on(&b, Cell::new(-1, -4));

        b.click_key(&pawn.key().to_string());
        assert_eq!(b.selection(), Selection::Selected(pawn));
    }

    #[proptest]
    fn clicking_malformed_keys_is_ignored(#[strategy("[^|]*")] key: String) {
        let mut b = board(Mode::Local);
        b.click_key(&key);
        assert_eq!(b.selection(), Selection::Idle);
    }

    #[test]
    fn clicking_keys_of_absent_pieces_is_ignored() {
        let mut b = board(Mode::Local);
        b.click_key(&PieceKey::encode(Color::White, Role::Queen, 0, 0));
        assert_eq!(b.selection(), Selection::Idle);
    }

    #[test]
    fn online_board_waits_for_its_turn() {
        let mut b = board(Mode::Online(Color::Grey));
        assert!(!b.is_interactive());

        b.click_piece(piece_on(&b, Cell::new(0, -4)));
        assert_eq!(b.selection(), Selection::Idle);

        assert!(b.receive(&pawn_push()).is_ok());
        assert!(b.is_interactive());
    }

    #[proptest]
    fn replay_board_never_accepts_input(m: Move) {
        let mut b = board(Mode::Replay);
        assert!(!b.is_interactive());

        b.click_piece(piece_on(&b, Cell::new(0, -4)));
        assert_eq!(b.selection(), Selection::Idle);
        assert_eq!(b.play(&m), Err(BoardError::Disabled));
    }

    #[proptest]
    fn only_highlighted_moves_can_be_played(m: Move) {
        let mut b = board(Mode::Local);
        assert_eq!(b.play(&m), Err(BoardError::NotHighlighted(m)));
        assert_eq!(b.state().move_count, 0);
    }

    #[test]
    fn receiving_a_move_twice_drops_the_duplicate() {
        let mut b = board(Mode::Local);
        b.receive(&pawn_push()).unwrap();

        let pieces = b.pieces();
        let state = b.state();

        assert_eq!(
            b.receive(&pawn_push()),
            Err(BoardError::Reconcile(ReconcileError::NotFound(Coordinates {
                q: 0,
                r: -4
            })))
        );

        assert_eq!(b.pieces(), pieces);
        assert_eq!(b.state(), state);
        assert_eq!(b.fault(), None);
    }

    #[test]
    fn receiving_a_move_clears_selection() {
        let mut b = board(Mode::Local);
        b.click_piece(piece_on(&b, Cell::new(2, -4)));
        b.receive(&pawn_push()).unwrap();
        assert_eq!(b.selection(), Selection::Idle);
    }

    #[test]
    fn move_events_are_received() {
        let mut b = board(Mode::Online(Color::Black));
        assert_eq!(b.handle(Event::Move(pawn_push())), Ok(()));
        assert_eq!(b.state().move_count, 1);
    }

    #[test]
    fn duplicate_move_events_are_dropped_without_ending_the_session() {
        let mut b = board(Mode::Online(Color::Grey));
        assert_eq!(b.handle(Event::Move(pawn_push())), Ok(()));

        assert!(matches!(
            b.handle(Event::Move(pawn_push())),
            Err(BoardError::Reconcile(_))
        ));

        assert_eq!(b.fault(), None);
        assert!(b.is_interactive());
        assert_eq!(b.state().move_count, 1);
    }

    #[proptest]
    fn status_events_leave_the_board_untouched(c: Color, #[strategy("[a-z ]*")] message: String) {
        let mut b = board(Mode::Local);

        let events = [
            Event::TurnUpdated { current_turn: c },
            Event::GameUpdated(serde_json::json!({ "status": "active" })),
            Event::Error { message },
        ];

        for e in events {
            assert_eq!(b.handle(e), Ok(()));
        }

        assert_eq!(b.state(), GameState::default());
        assert_eq!(b.pieces(), Sandbox::default().pieces());
    }

    #[test]
    fn clicking_a_pawn_then_its_marker_plays_the_move() {
        let mut b = board(Mode::Local);
        let pawn = piece_on(&b, Cell::new(0, -4));
        let size = b.viewport().size;

        assert_eq!(b.click(pawn.cell.pixel(size)), Ok(None));
        assert_eq!(b.selection(), Selection::Selected(pawn));
        assert_eq!(b.markers().len(), 2);

        let target = Cell::new(0, -5).pixel(size) + Point::new(size * 0.3, 0.);
        assert_eq!(b.click(target), Ok(Some(pawn_push())));
        assert_eq!(b.state().turn, Color::Grey);
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let mut b = board(Mode::Local);
        let far = Point::new(1e6, 1e6);

        assert_eq!(b.hit(far), None);
        assert_eq!(b.click(far), Ok(None));
        assert_eq!(b.selection(), Selection::Idle);
    }

    #[proptest]
    fn pieces_are_hit_where_they_are_drawn(o: Orientation) {
        let mut b = board(Mode::Local);
        b.set_orientation(o);

        let pawn = piece_on(&b, Cell::new(0, -4));
        let center = pawn.cell.rotate(o).pixel(b.viewport().size);
        assert_eq!(b.hit(center), Some(Target::Piece(pawn)));
    }

    #[test]
    fn pieces_of_other_colors_cannot_be_hit() {
        let b = board(Mode::Local);
        let king = piece_on(&b, Cell::new(0, -3).rotate(Color::Black.into()));
        assert_eq!(b.hit(king.cell.pixel(b.viewport().size)), None);
    }

    #[test]
    fn setting_fen_clears_selection() {
        let mut b = board(Mode::Local);
        let mut other = Sandbox::default();
        let m = other.moves(Cell::new(1, -4))[1];
        other.commit(&m, None, true).unwrap();

        b.click_piece(piece_on(&b, Cell::new(0, -4)));
        assert_eq!(b.set_fen(&other.fen()), Ok(()));
        assert_eq!(b.selection(), Selection::Idle);
        assert_eq!(b.fen(), other.fen());
    }

    #[proptest]
    fn legal_moves_are_asked_to_the_oracle_every_time(p: Piece, m: Move) {
        let mut oracle = MockOracle::new();
        let state = GameState {
            turn: p.color,
            ..GameState::default()
        };

        oracle.expect_state().return_const(state);
        oracle
            .expect_moves()
            .with(eq(p.cell))
            .times(2)
            .return_const(vec![m]);

        let mut b = Board::new(oracle, &Config::default());
        b.click_piece(p);

        assert_eq!(b.legal_moves(), [m]);
        assert_eq!(b.legal_moves(), [m]);
    }

    #[proptest]
    fn oracle_rejection_faults_the_session(p: Piece, w: WireMove, #[strategy("[a-z ]+")] reason: String) {
        let m = Move {
            from: p.cell,
            to: Cell::new(w.to.q, w.to.r),
            kind: w.move_type,
            color: p.color,
            role: p.role,
            capture: None,
        };

        let state = GameState {
            turn: p.color,
            ..GameState::default()
        };

        let mut oracle = MockOracle::new();
        oracle.expect_state().return_const(state);
        oracle.expect_pieces().return_const(vec![p]);
        oracle.expect_moves().return_const(vec![m]);
        oracle
            .expect_commit()
            .times(1)
            .returning(move |_, _, _| Err(Rejection::new(&reason)));

        let mut b = Board::new(oracle, &Config::default());
        b.click_piece(p);

        assert!(matches!(b.play(&m), Err(BoardError::Rejected(_))));
        assert!(b.fault().is_some());
        assert!(!b.is_interactive());
        assert!(b.legal_moves().is_empty());
        assert_eq!(b.play(&m), Err(BoardError::Disabled));
        assert_eq!(b.receive(&(&m).into()), Err(BoardError::Disabled));
    }
}
