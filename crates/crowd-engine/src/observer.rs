//! Simulation observer trait for progress reporting and alert hooks.

use crowd_core::Tick;
use crowd_world::Alert;

/// Callbacks invoked by [`CrowdSim::tick_observed`][crate::CrowdSim::tick_observed]
/// at key points in the tick pipeline.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, population: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {population} people");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every alert emitted this tick, in emission order.
    fn on_alert(&mut self, _alert: &Alert) {}

    /// Called at the end of each tick with the post-churn population.
    fn on_tick_end(&mut self, _tick: Tick, _population: usize) {}
}

/// A [`SimObserver`] that does nothing.  Used by the plain `tick()` path.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
