//! The match-resolution state machine.

use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::event::{EventSink, GameEvent};
use super::phase::{Phase, RejectReason, SelectOutcome};
use super::snapshot::EngineSnapshot;
use super::timer::{HideTicket, PendingHide};
use crate::board::Board;
use crate::core::{EngineConfig, TileId, Visibility};

/// Match engine for one board.
///
/// Owns the board, the selection buffer, the score and the pending hide.
/// All mutation goes through `select`, `tick`/`fire_hide` and `restart`,
/// each of which reports visible changes to an [`EventSink`].
///
/// ## Example
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::core::{EngineConfig, FaceId, TileId};
/// use memory_match::engine::{GameEvent, MatchEngine, Phase};
/// use std::time::Duration;
///
/// let (a, b) = (FaceId::new(0), FaceId::new(1));
/// let board = Board::new([a, b, b, a]).unwrap();
/// let mut engine = MatchEngine::new(board, EngineConfig::default());
/// let mut events: Vec<GameEvent> = Vec::new();
///
/// engine.select(TileId::new(0), &mut events);
/// engine.select(TileId::new(1), &mut events);
/// assert_eq!(engine.phase(), Phase::Resolving);
///
/// engine.tick(Duration::from_millis(1000), &mut events);
/// assert_eq!(engine.phase(), Phase::Idle);
/// assert!(events.contains(&GameEvent::TileHidden { tile: TileId::new(1) }));
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    board: Board,
    config: EngineConfig,
    phase: Phase,

    /// Tiles under comparison, in pick order. Every entry is `Revealed`.
    selection: SmallVec<[TileId; 2]>,

    score: u32,

    /// Bumped on every restart.
    generation: u64,

    /// Next hide serial; never reset.
    next_serial: u64,

    /// Set only while `phase == Resolving`.
    pending: Option<PendingHide>,
}

impl MatchEngine {
    /// Create an engine for a freshly dealt board.
    #[must_use]
    pub fn new(board: Board, config: EngineConfig) -> Self {
        Self {
            board,
            config,
            phase: Phase::Idle,
            selection: SmallVec::new(),
            score: 0,
            generation: 0,
            next_serial: 0,
            pending: None,
        }
    }

    // === Accessors ===

    /// The board, with current visibility.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current score (confirmed pairs this game).
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Tiles under comparison, in pick order.
    #[must_use]
    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    /// Restart counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// The hide waiting to fire, if any.
    #[must_use]
    pub fn pending_hide(&self) -> Option<HideTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Time left before the pending hide fires under `tick`.
    #[must_use]
    pub fn remaining_hide_delay(&self) -> Option<Duration> {
        self.pending.map(|p| p.remaining)
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(self)
    }

    // === Selection ===

    /// Handle a click on `tile`.
    ///
    /// Invalid clicks (during resolution, after the win, on a face-up tile,
    /// or off the board) are ignored: nothing changes and nothing is emitted.
    #[instrument(skip(self, sink), fields(phase = ?self.phase))]
    pub fn select(&mut self, tile: TileId, mut sink: impl EventSink) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(tile) {
            debug!(?reason, "selection rejected");
            return SelectOutcome::Rejected(reason);
        }

        self.board.set_visibility(tile, Visibility::Revealed);
        self.selection.push(tile);
        sink.emit(GameEvent::TileRevealed { tile });

        if self.selection.len() == 1 {
            self.phase = Phase::OneSelected;
            return SelectOutcome::Revealed;
        }

        let (first, second) = (self.selection[0], self.selection[1]);
        self.evaluate_pair(first, second, &mut sink)
    }

    fn check_selectable(&self, tile: TileId) -> Result<(), RejectReason> {
        if !self.phase.accepts_selection() {
            return Err(match self.phase {
                Phase::Won => RejectReason::GameWon,
                _ => RejectReason::Resolving,
            });
        }

        let tile = self.board.get(tile).ok_or(RejectReason::UnknownTile)?;
        if tile.is_selectable() {
            Ok(())
        } else if tile.is_matched() {
            Err(RejectReason::AlreadyMatched)
        } else {
            Err(RejectReason::AlreadyRevealed)
        }
    }

    fn evaluate_pair(
        &mut self,
        first: TileId,
        second: TileId,
        sink: &mut impl EventSink,
    ) -> SelectOutcome {
        if !self.board.faces_match(first, second) {
            return self.schedule_hide(first, second, sink);
        }

        self.board.set_visibility(first, Visibility::Matched);
        self.board.set_visibility(second, Visibility::Matched);
        self.selection.clear();
        self.score += 1;

        debug!(%first, %second, score = self.score, "pair matched");
        sink.emit(GameEvent::MatchConfirmed {
            first,
            second,
            score: self.score,
        });
        sink.emit(GameEvent::ScoreChanged { score: self.score });

        if self.board.all_matched() {
            self.phase = Phase::Won;
            info!(score = self.score, generation = self.generation, "game won");
            sink.emit(GameEvent::GameWon);
            SelectOutcome::Won { score: self.score }
        } else {
            self.phase = Phase::Idle;
            SelectOutcome::Matched { score: self.score }
        }
    }

    fn schedule_hide(
        &mut self,
        first: TileId,
        second: TileId,
        sink: &mut impl EventSink,
    ) -> SelectOutcome {
        let ticket = HideTicket {
            generation: self.generation,
            serial: self.next_serial,
            tiles: [first, second],
            delay_ms: self.config.hide_delay_ms,
        };
        self.next_serial += 1;
        self.pending = Some(PendingHide::new(ticket));
        self.phase = Phase::Resolving;

        debug!(%first, %second, serial = ticket.serial, "mismatch, hide scheduled");
        sink.emit(GameEvent::HideScheduled { ticket });
        SelectOutcome::Mismatched(ticket)
    }

    // === Delayed hide ===

    /// Advance the engine clock.
    ///
    /// Hosts that poll (game loops, tests) call this with the time since the
    /// last call. Returns true if the pending hide fired.
    #[instrument(skip(self, sink))]
    pub fn tick(&mut self, elapsed: Duration, mut sink: impl EventSink) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        if !pending.advance(elapsed) {
            return false;
        }

        let ticket = pending.ticket;
        self.apply_hide(ticket, &mut sink);
        true
    }

    /// Fire a hide from a host-owned timer.
    ///
    /// Only the currently pending ticket has any effect. Tickets from before a
    /// restart, or ones that already fired, are ignored and return false.
    #[instrument(skip(self, sink), fields(serial = ticket.serial, generation = ticket.generation))]
    pub fn fire_hide(&mut self, ticket: HideTicket, mut sink: impl EventSink) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.apply_hide(ticket, &mut sink);
                true
            }
            _ => {
                debug!(current_generation = self.generation, "stale hide ticket ignored");
                false
            }
        }
    }

    fn apply_hide(&mut self, ticket: HideTicket, sink: &mut impl EventSink) {
        self.pending = None;

        for tile in ticket.tiles {
            if self.board.visibility(tile) == Some(Visibility::Revealed) {
                self.board.set_visibility(tile, Visibility::Hidden);
                sink.emit(GameEvent::TileHidden { tile });
            }
        }

        self.selection.clear();
        self.phase = Phase::Idle;
        debug!(serial = ticket.serial, "mismatched pair hidden");
    }

    // === Restart ===

    /// Start over on the same board.
    ///
    /// Every tile goes face down, the score resets, and any pending hide is
    /// dropped so its ticket becomes stale.
    #[instrument(skip(self, sink))]
    pub fn restart(&mut self, mut sink: impl EventSink) {
        let flipped = self.board.hide_all();
        self.reset(&flipped, &mut sink);
    }

    /// Start over on a newly dealt board.
    ///
    /// The incoming board is turned face down before it is installed, so a
    /// board cloned from a game in progress starts fresh too. `TileHidden` is
    /// emitted, in grid order, for every tile that was face up on either the
    /// old board or the incoming one.
    #[instrument(skip(self, board, sink), fields(tiles = board.len()))]
    pub fn restart_with(&mut self, mut board: Board, mut sink: impl EventSink) {
        let incoming = board.hide_all();
        let flipped: Vec<TileId> = board
            .iter()
            .map(|t| t.id)
            .filter(|&id| {
                incoming.contains(&id)
                    || self.board.visibility(id).is_some_and(Visibility::is_face_up)
            })
            .collect();

        self.board = board;
        self.reset(&flipped, &mut sink);
    }

    fn reset(&mut self, flipped: &[TileId], sink: &mut impl EventSink) {
        if let Some(dropped) = self.pending.take() {
            debug!(serial = dropped.ticket.serial, "pending hide cancelled by restart");
        }

        self.selection.clear();
        self.score = 0;
        self.phase = Phase::Idle;
        self.generation += 1;

        for &tile in flipped {
            sink.emit(GameEvent::TileHidden { tile });
        }
        sink.emit(GameEvent::ScoreChanged { score: 0 });
        sink.emit(GameEvent::Restarted);

        info!(generation = self.generation, "game restarted");
    }
}
