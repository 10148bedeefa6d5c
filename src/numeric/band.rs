use crate::numeric::Scalar;

/// Absolute-value window outside of which discovered values are ignored.
///
/// `min` is inclusive and `max` exclusive; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeBand<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T: Scalar> MagnitudeBand<T> {
    pub fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Only values with `|v| < max`
    pub fn below(max: T) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, value: T) -> bool {
        let magnitude = value.magnitude();
        if let Some(min) = self.min
            && magnitude < min
        {
            return false;
        }
        if let Some(max) = self.max
            && magnitude >= max
        {
            return false;
        }
        true
    }

    /// Whether the band can hold any value at all
    pub fn is_ordered(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min.magnitude() < max.magnitude(),
            _ => true,
        }
    }
}

impl<T: Scalar> Default for MagnitudeBand<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}
