//! Redirection advisor: fresh gate-redirection advice every tick.
//!
//! For every gate above the trigger load ratio, every *other* Open gate is
//! ranked by `candidate_load_ratio + 10 × distance`.  The distance weight is
//! a deliberate design tuning (distance dominates unless load differences
//! are large); preserve it exactly for compatibility with the deployed
//! calibration.  Ties keep input order.  A gate with no Open alternative
//! simply produces no suggestion.

use crowd_core::SimParams;
use crowd_world::{GateStatus, RedirectionSuggestion, World};

/// Replace the entire suggestion set with advice computed from this tick's
/// aggregated gate loads.
pub fn advisory_phase(world: &mut World, params: &SimParams) {
    struct Draft {
        from: usize,
        to: usize,
        reason: String,
        estimated_time: u32,
        confidence: u8,
        path: String,
    }

    let gates = &world.gates;
    let mut drafts = Vec::new();

    for (from_idx, gate) in gates.iter().enumerate() {
        let load_ratio = gate.load_ratio();
        if load_ratio <= params.redirect_trigger_ratio {
            continue;
        }

        // Rank Open alternatives by load + weighted distance; min_by keeps
        // the first of equal-cost candidates (input order).
        let best = gates
            .iter()
            .enumerate()
            .filter(|(i, g)| *i != from_idx && g.status == GateStatus::Open)
            .map(|(i, g)| {
                let ratio = g.load_ratio();
                let distance = gate.position.distance(g.position);
                let cost = ratio + distance * params.redirect_distance_weight;
                (i, ratio, distance, cost)
            })
            .min_by(|a, b| a.3.total_cmp(&b.3));

        let Some((to_idx, alt_ratio, distance, _)) = best else {
            continue; // no Open alternative — benign, not an error
        };

        drafts.push(Draft {
            from: from_idx,
            to: to_idx,
            reason: format!("{} at {}% capacity", gate.name, (load_ratio * 100.0).round()),
            estimated_time: (distance * params.estimated_time_scale).round() as u32,
            confidence: ((1.0 - alt_ratio) * 100.0).round().clamp(0.0, 100.0) as u8,
            path: corridor_label(gates[from_idx].position, gates[to_idx].position),
        });
    }

    let suggestions = drafts
        .into_iter()
        .map(|d| {
            let id = world.next_suggestion_id();
            RedirectionSuggestion {
                id,
                from_gate: world.gates[d.from].id,
                to_gate: world.gates[d.to].id,
                reason: d.reason,
                estimated_time: d.estimated_time,
                confidence: d.confidence,
                path: d.path,
            }
        })
        .collect();
    world.replace_suggestions(suggestions);
}

/// Coarse cardinal-direction label: whichever axis has the greater absolute
/// displacement frames the corridor name.  A presentation hint, not a route.
fn corridor_label(from: crowd_core::Point, to: crowd_core::Point) -> String {
    let dlat = to.lat - from.lat;
    let dlng = to.lng - from.lng;
    let corridor = if dlat.abs() > dlng.abs() {
        if dlat > 0.0 { "North Corridor" } else { "South Corridor" }
    } else if dlng > 0.0 {
        "East Corridor"
    } else {
        "West Corridor"
    };
    format!("via {corridor}")
}
