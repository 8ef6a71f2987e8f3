//! Alerts: append-only operator notifications synthesized from aggregate state.

use crowd_core::{AlertId, GateId, Point, Tick, ZoneId};

/// Alert category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlertKind {
    Congestion,
    Bottleneck,
    Panic,
    GateFull,
    Evacuation,
}

/// Alert severity, ordered Low < Medium < High < Critical.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// The zone or gate an alert originates from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlertSubject {
    Zone(ZoneId),
    Gate(GateId),
}

/// An operator alert.
///
/// Alerts are append-only: after emission the only mutable field is
/// `acknowledged`, set (idempotently) by the external acknowledge operation.
/// Alerts are never deleted — the active view filters on acknowledgment
/// state and caps at the most recent entries.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub severity: Severity,
    pub subject: AlertSubject,
    pub message: String,
    /// Tick at which the alert was emitted.  The engine does no I/O, so
    /// wall-clock mapping is left to the presentation layer.
    pub created: Tick,
    pub acknowledged: bool,
    /// Where to draw the alert marker (zone centroid or gate position).
    pub location: Point,
}
