//! Gate redirection suggestions.

use crowd_core::{GateId, SuggestionId};

/// Advisory mapping from an overloaded gate to a less-loaded alternative.
///
/// The whole suggestion collection is replaced every tick — it represents
/// "current advice", not history.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedirectionSuggestion {
    pub id: SuggestionId,
    pub from_gate: GateId,
    pub to_gate: GateId,
    /// Human-readable justification, e.g. "Gate 2 at 84% capacity".
    pub reason: String,
    /// Estimated walking time, linear in inter-gate distance.
    pub estimated_time: u32,
    /// Confidence score in [0, 100], derived from the alternative's load.
    pub confidence: u8,
    /// Coarse cardinal-direction label, e.g. "via North Corridor".  A
    /// presentation hint, not a real route.
    pub path: String,
}
