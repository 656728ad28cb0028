/// Interactive board sessions.
pub mod board;
/// Chess domain types.
pub mod chess;
/// Hexagonal geometry.
pub mod hex;
/// The rules oracle contract.
pub mod oracle;
/// Matching network moves to legal moves.
pub mod reconcile;
/// Navigation of recorded games.
pub mod replay;
/// Network and history payloads.
pub mod wire;
