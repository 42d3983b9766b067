#![forbid(unsafe_code)]

//! Drag lifecycle state machine.
//!
//! ```text
//! Idle -> Armed -> Dragging -> Idle
//!    \------> Idle (release/cancel from Armed, or an unclaimed touch)
//! ```
//!
//! A touch-start consults the [`TouchRouter`]; a claimed thumb arms a
//! session anchored at that thumb's current pixel offset. Every move maps
//! `anchor_offset + dx` (with `dx` cumulative since the touch-start) back to
//! a value and writes it to the owned cell only. Release and host
//! termination perform one final write; cancellation writes nothing.
//!
//! The machine mutates the [`ValueStore`] but never talks to the host: each
//! step returns an [`InteractionTransition`] whose effect tells the caller
//! which notification, if any, to deliver.
//!
//! # Invariants
//!
//! 1. At most one session exists; a touch-start during a session is
//!    rejected, not queued.
//! 2. While `disabled`, moves and ends never write and never notify, but the
//!    session itself stays alive until it ends.
//! 3. `transition_id` increases by one per applied event.
//! 4. With a zero usable track length no pixel maps back to a value, so
//!    moves are ignored and a release keeps the current value.

use dslider_core::{Size, ValueRange};

use crate::layout::GeometryModel;
use crate::router::{ThumbId, TouchRouter};
use crate::store::ValueStore;

/// Raw touch input, as delivered by the host gesture system.
///
/// `dx`/`dy` are cumulative from the touch-start point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum TouchEvent {
    Start { x: f64, y: f64 },
    Move { dx: f64, dy: f64 },
    Release { dx: f64, dy: f64 },
    /// Another recognizer took the gesture anyway; handled like a release.
    Terminate { dx: f64, dy: f64 },
    /// Abrupt cancellation by the host; no final write, no completion.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "snake_case"))]
pub enum InteractionState {
    #[default]
    Idle,
    Armed {
        owner: ThumbId,
        anchor_offset: f64,
    },
    Dragging {
        owner: ThumbId,
        anchor_offset: f64,
    },
}

impl InteractionState {
    #[must_use]
    pub const fn owner(&self) -> Option<ThumbId> {
        match self {
            Self::Idle => None,
            Self::Armed { owner, .. } | Self::Dragging { owner, .. } => Some(*owner),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnclaimedReason {
    GeometryNotReady,
    NoThumbHit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReleaseCause {
    Lifted,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CancelReason {
    Host,
    Programmatic,
}

/// Explicit no-op diagnostics for events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionNoopReason {
    IdleWithoutSession,
    SessionAlreadyActive,
    Disabled,
    NonFiniteDelta,
    /// The usable track length is zero; there is no pixel to map back.
    DegenerateTrack,
}

/// Effect of one lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "effect", rename_all = "snake_case"))]
pub enum InteractionEffect {
    /// Session opened; deliver "sliding start".
    Granted { owner: ThumbId, anchor_offset: f64 },
    /// Touch left for other recognizers.
    Unclaimed { reason: UnclaimedReason },
    /// Owned cell written; deliver "value changed".
    Moved { owner: ThumbId, value: f64 },
    /// Final write done and session closed; deliver "sliding complete".
    Released {
        owner: ThumbId,
        value: f64,
        cause: ReleaseCause,
    },
    /// Session closed without a write or notification.
    Canceled { owner: ThumbId, reason: CancelReason },
    /// Session ended while disabled; no write, no notification.
    Abandoned { owner: ThumbId },
    Noop { reason: InteractionNoopReason },
}

/// One state-machine transition with diagnostic fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionTransition {
    pub transition_id: u64,
    pub from: InteractionState,
    pub to: InteractionState,
    pub effect: InteractionEffect,
}

/// Everything one step needs besides the machine itself.
#[derive(Debug)]
pub struct DragContext<'a> {
    pub geometry: &'a GeometryModel,
    pub range: &'a ValueRange,
    pub touch_size: Size,
    pub mirrored: bool,
    pub disabled: bool,
    pub store: &'a mut ValueStore,
}

impl DragContext<'_> {
    fn router(&self) -> TouchRouter<'_> {
        TouchRouter::new(self.geometry, self.range, self.touch_size, self.mirrored)
    }

    fn offset_of(&self, thumb: ThumbId) -> f64 {
        self.range.to_offset(
            self.store.value(thumb),
            self.geometry.usable_length(),
            self.mirrored,
        )
    }

    fn has_track(&self) -> bool {
        self.geometry.usable_length() > 0.0
    }

    fn value_at(&self, offset: f64) -> f64 {
        self.range
            .from_offset(offset, self.geometry.usable_length(), self.mirrored)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionMachine {
    state: InteractionState,
    transition_counter: u64,
}

impl InteractionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether a session (Armed or Dragging) is open.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, InteractionState::Idle)
    }

    /// The slider never takes over a gesture that started elsewhere.
    #[inline]
    #[must_use]
    pub const fn claims_touch_move(&self) -> bool {
        false
    }

    /// Whether another recognizer may take the gesture. Refused for the
    /// whole duration of a session.
    #[inline]
    #[must_use]
    pub const fn allows_termination(&self) -> bool {
        !self.is_active()
    }

    /// Reset to Idle without writing or notifying.
    ///
    /// Returns `None` when already idle.
    pub fn force_cancel(&mut self) -> Option<InteractionTransition> {
        let owner = self.state.owner()?;
        Some(self.commit(
            InteractionState::Idle,
            InteractionEffect::Canceled {
                owner,
                reason: CancelReason::Programmatic,
            },
        ))
    }

    /// Apply one touch event.
    pub fn apply_event(
        &mut self,
        event: TouchEvent,
        ctx: &mut DragContext<'_>,
    ) -> InteractionTransition {
        use InteractionEffect as E;
        use InteractionState as S;

        let (to, effect) = match (self.state, event) {
            (S::Idle, TouchEvent::Start { x, y }) => {
                if !ctx.geometry.is_ready() {
                    (S::Idle, unclaimed(UnclaimedReason::GeometryNotReady))
                } else {
                    let (left, right) = ctx.store.values();
                    match ctx.router().route(x, y, left, right) {
                        Some(owner) => {
                            let anchor_offset = ctx.offset_of(owner);
                            (
                                S::Armed {
                                    owner,
                                    anchor_offset,
                                },
                                E::Granted {
                                    owner,
                                    anchor_offset,
                                },
                            )
                        }
                        None => (S::Idle, unclaimed(UnclaimedReason::NoThumbHit)),
                    }
                }
            }
            (S::Idle, _) => (S::Idle, noop(InteractionNoopReason::IdleWithoutSession)),
            (active, TouchEvent::Start { .. }) => {
                (active, noop(InteractionNoopReason::SessionAlreadyActive))
            }
            (
                active @ (S::Armed {
                    owner,
                    anchor_offset,
                }
                | S::Dragging {
                    owner,
                    anchor_offset,
                }),
                TouchEvent::Move { dx, .. },
            ) => {
                if ctx.disabled {
                    (active, noop(InteractionNoopReason::Disabled))
                } else if !dx.is_finite() {
                    (active, noop(InteractionNoopReason::NonFiniteDelta))
                } else if !ctx.has_track() {
                    (active, noop(InteractionNoopReason::DegenerateTrack))
                } else {
                    let value = ctx.value_at(anchor_offset + dx);
                    ctx.store.set_immediate(owner, value);
                    (
                        S::Dragging {
                            owner,
                            anchor_offset,
                        },
                        E::Moved { owner, value },
                    )
                }
            }
            (
                S::Armed {
                    owner,
                    anchor_offset,
                }
                | S::Dragging {
                    owner,
                    anchor_offset,
                },
                TouchEvent::Release { dx, .. } | TouchEvent::Terminate { dx, .. },
            ) => {
                if ctx.disabled {
                    (S::Idle, E::Abandoned { owner })
                } else {
                    let cause = if matches!(event, TouchEvent::Terminate { .. }) {
                        ReleaseCause::Terminated
                    } else {
                        ReleaseCause::Lifted
                    };
                    let value = if dx.is_finite() && ctx.has_track() {
                        let value = ctx.value_at(anchor_offset + dx);
                        ctx.store.set_immediate(owner, value);
                        value
                    } else {
                        ctx.store.value(owner)
                    };
                    (S::Idle, E::Released { owner, value, cause })
                }
            }
            (
                S::Armed { owner, .. } | S::Dragging { owner, .. },
                TouchEvent::Cancel,
            ) => (
                S::Idle,
                E::Canceled {
                    owner,
                    reason: CancelReason::Host,
                },
            ),
        };

        self.commit(to, effect)
    }

    fn commit(&mut self, to: InteractionState, effect: InteractionEffect) -> InteractionTransition {
        let from = self.state;
        self.state = to;
        self.transition_counter = self.transition_counter.saturating_add(1);
        InteractionTransition {
            transition_id: self.transition_counter,
            from,
            to,
            effect,
        }
    }
}

const fn unclaimed(reason: UnclaimedReason) -> InteractionEffect {
    InteractionEffect::Unclaimed { reason }
}

const fn noop(reason: InteractionNoopReason) -> InteractionEffect {
    InteractionEffect::Noop { reason }
}
