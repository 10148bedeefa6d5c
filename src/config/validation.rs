use log::{debug, warn};

use crate::config::errors::ConfigError;
use crate::config::search::SearchConfig;
use crate::numeric::{NumericDomain, Scalar};

/// # Errors
///
/// Returns an error if the seed set is empty, a seed or the goal is not
/// finite, the magnitude band is empty, the tolerance is negative or not
/// finite, no operator is enabled, or the term limit is zero. A real-valued
/// search must also carry a maximum magnitude or a term limit.
pub fn validate_config<T: Scalar>(config: &SearchConfig<T>) -> Result<(), ConfigError> {
    debug!(
        "Validating {} config: {} seeds, goal {}",
        T::DOMAIN,
        config.seeds.len(),
        config.goal
    );

    if config.seeds.is_empty() {
        warn!("No seed values supplied");
        return Err(ConfigError::NoSeeds);
    }

    if let Some(seed) = config.seeds.iter().find(|seed| !seed.is_finite()) {
        warn!("Seed value is not finite: {}", seed);
        return Err(ConfigError::NonFiniteSeed(seed.to_string()));
    }

    if !config.goal.is_finite() {
        warn!("Goal value is not finite: {}", config.goal);
        return Err(ConfigError::NonFiniteGoal(config.goal.to_string()));
    }

    if !config.band.is_ordered() {
        let min = config.band.min.map(|v| v.to_string()).unwrap_or_default();
        let max = config.band.max.map(|v| v.to_string()).unwrap_or_default();
        warn!("Magnitude band is empty: min={}, max={}", min, max);
        return Err(ConfigError::EmptyBand { min, max });
    }

    if !config.tolerance.is_finite() || config.tolerance < 0.0 {
        warn!("Invalid tolerance: {}", config.tolerance);
        return Err(ConfigError::InvalidTolerance(config.tolerance));
    }

    if config.operators.is_empty() {
        warn!("Operator set is empty");
        return Err(ConfigError::NoOperators);
    }

    if config.term_limit == Some(0) {
        warn!("Term limit of zero admits no expression");
        return Err(ConfigError::ZeroTermLimit);
    }

    // Reals never run out of distinct values
    let unbounded = config.band.max.is_none() && config.term_limit.is_none();
    if T::DOMAIN == NumericDomain::Real && unbounded {
        warn!("Real-valued search has neither a maximum magnitude nor a term limit");
        return Err(ConfigError::UnboundedRealSearch);
    }

    debug!("Config validation successful");
    Ok(())
}
