//! Simulation parameters — every tuned constant in one place.
//!
//! The defaults are the production calibration and were tuned by trial
//! against the deployed venue, not derived from first principles.  Change
//! them only with a product owner's sign-off; tests that assert exact
//! behavior (alert thresholds, suggestion ranking) assume these values.

/// Top-level simulation configuration.
///
/// Plain data, cheap to clone.  Construct with `SimParams::default()` and
/// override fields with struct-update syntax where a scenario or test needs
/// different calibration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    // ── Movement ──────────────────────────────────────────────────────────
    /// Base walking speed in coordinate units per tick.
    pub base_speed: f64,
    /// Full width of the uniform per-axis velocity jitter; each axis adds
    /// `(U(0,1) - 0.5) * jitter`.
    pub jitter: f64,
    /// A moving agent closer than this to its target gate exits.
    pub arrival_epsilon: f64,
    /// Neighbor radius for the crowd-repulsion scan.
    pub repulsion_radius: f64,
    /// Divisor normalizing summed neighbor weights into [0, 1].
    pub repulsion_normalizer: f64,
    /// Fraction of base speed shed at maximum repulsion.
    pub repulsion_slowdown: f64,
    /// Per-tick probability that a Waiting agent starts Moving.
    pub waiting_move_prob: f64,

    // ── Population churn ──────────────────────────────────────────────────
    /// Spawn only while total population is below this ceiling.
    pub population_ceiling: usize,
    /// Agents spawned per gate per tick while below the ceiling.
    pub spawn_per_gate: usize,
    /// Agents seeded per gate at reset (half placed around each gate, the
    /// full amount scattered inside each zone).
    pub initial_per_gate: usize,
    /// Spawn annulus around a gate: inner radius and additional band width.
    pub spawn_annulus_inner: f64,
    pub spawn_annulus_band: f64,
    /// Probability that a seeded agent starts Moving (rest start Waiting).
    pub initial_moving_prob: f64,

    // ── Aggregation ───────────────────────────────────────────────────────
    /// Agents strictly within this radius of a gate count toward its load.
    pub gate_load_radius: f64,

    // ── Alerts ────────────────────────────────────────────────────────────
    /// Gate load ratio above which a GateFull alert is raised.
    pub gate_full_ratio: f64,
    /// Gate load ratio above which the GateFull alert is Critical.
    pub gate_critical_ratio: f64,
    /// Per-tick probability of a stochastic panic incident in a random zone.
    pub panic_prob: f64,
    /// Maximum number of alerts in the externally visible active view.
    pub active_alert_cap: usize,

    // ── Redirection ───────────────────────────────────────────────────────
    /// Gate load ratio above which redirection advice is generated.
    pub redirect_trigger_ratio: f64,
    /// Weight of inter-gate distance in the candidate ranking cost.
    pub redirect_distance_weight: f64,
    /// Linear scale from inter-gate distance to estimated minutes.
    pub estimated_time_scale: f64,
}

impl SimParams {
    /// Check that the calibration is internally consistent: probabilities in
    /// [0, 1], movement magnitudes finite and non-negative, radii positive.
    pub fn validate(&self) -> crate::CoreResult<()> {
        let prob = |name: &str, p: f64| {
            if (0.0..=1.0).contains(&p) {
                Ok(())
            } else {
                Err(crate::CoreError::Config(format!("{name} must be in [0, 1], got {p}")))
            }
        };
        prob("waiting_move_prob", self.waiting_move_prob)?;
        prob("initial_moving_prob", self.initial_moving_prob)?;
        prob("panic_prob", self.panic_prob)?;
        prob("repulsion_slowdown", self.repulsion_slowdown)?;

        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(crate::CoreError::Config(format!("{name} must be positive, got {v}")))
            }
        };
        positive("base_speed", self.base_speed)?;
        positive("arrival_epsilon", self.arrival_epsilon)?;
        positive("repulsion_radius", self.repulsion_radius)?;
        positive("repulsion_normalizer", self.repulsion_normalizer)?;
        positive("gate_load_radius", self.gate_load_radius)?;

        if !(self.jitter.is_finite() && self.jitter >= 0.0) {
            return Err(crate::CoreError::Config(format!(
                "jitter must be finite and non-negative, got {}",
                self.jitter
            )));
        }
        Ok(())
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            seed: 42,

            base_speed:           0.00002,
            jitter:               0.00001,
            arrival_epsilon:      0.0001,
            repulsion_radius:     0.0005,
            repulsion_normalizer: 20.0,
            repulsion_slowdown:   0.8,
            waiting_move_prob:    0.05,

            population_ceiling:  38_000,
            spawn_per_gate:      42,
            initial_per_gate:    300,
            spawn_annulus_inner: 0.0001,
            spawn_annulus_band:  0.00015,
            initial_moving_prob: 0.3,

            gate_load_radius: 0.0003,

            gate_full_ratio:     0.8,
            gate_critical_ratio: 0.95,
            panic_prob:          0.001,
            active_alert_cap:    50,

            redirect_trigger_ratio:   0.7,
            redirect_distance_weight: 10.0,
            estimated_time_scale:     100_000.0,
        }
    }
}
