use super::*;

/// How far an escaping ray is projected along its direction.
pub const ESCAPE_DISTANCE: Float = 1000.0;

/// Step budget of [`OpticSystem::run`] unless configured otherwise.
pub const DEFAULT_MAX_STEPS: usize = 20;

/// Tunables of an [`OpticSystem`].
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    /// Length of the final segment drawn for a ray that hit nothing.
    pub escape_distance: Float,
    /// Maximum number of steps [`OpticSystem::run`] performs.
    pub max_steps: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            escape_distance: ESCAPE_DISTANCE,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn escape_distance(mut self, distance: Float) -> Self {
        self.escape_distance = distance;
        self
    }

    pub fn max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
        self
    }
}
