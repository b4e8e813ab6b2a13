use serde::Serialize;

use crate::error::CoreError;

/// Number of iterations the escape-time engine may spend on a single point.
///
/// Always at least 1 — every algorithm downstream (engine range, palette
/// length) assumes it. The input-handling layer owns the current budget and
/// adjusts it through the operations below; each render receives a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct IterationBudget(u32);

impl IterationBudget {
    pub const DEFAULT: Self = Self(256);

    /// A zero budget is a caller contract violation — fail fast instead of
    /// coercing.
    pub fn new(budget: u32) -> crate::Result<Self> {
        if budget == 0 {
            return Err(CoreError::InvalidBudget(budget));
        }
        Ok(Self(budget))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Raise the budget by one.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Lower the budget by one, stopping at 1.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }

    /// Double the budget.
    pub fn double(self) -> Self {
        Self(self.0.saturating_mul(2))
    }

    /// Halve the budget; 2 and below collapse to 1.
    pub fn halve(self) -> Self {
        Self((self.0 / 2).max(1))
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Deserialization re-validates so persisted settings can never smuggle in
/// a zero budget.
impl<'de> serde::Deserialize<'de> for IterationBudget {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for IterationBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_rejected() {
        assert!(IterationBudget::new(0).is_err());
        assert!(IterationBudget::new(1).is_ok());
    }

    #[test]
    fn increment_then_decrement_round_trips() {
        for b in [1u32, 2, 17, 256, 4096] {
            let budget = IterationBudget::new(b).unwrap();
            assert_eq!(budget.increment().decrement(), budget);
        }
    }

    #[test]
    fn decrement_floors_at_one() {
        let one = IterationBudget::new(1).unwrap();
        assert_eq!(one.decrement().get(), 1);
    }

    #[test]
    fn double_then_halve_round_trips() {
        for b in [1u32, 2, 3, 100, 256] {
            let budget = IterationBudget::new(b).unwrap();
            assert_eq!(budget.double().halve(), budget);
        }
    }

    #[test]
    fn halve_floors_at_one() {
        assert_eq!(IterationBudget::new(2).unwrap().halve().get(), 1);
        assert_eq!(IterationBudget::new(1).unwrap().halve().get(), 1);
        assert_eq!(IterationBudget::new(3).unwrap().halve().get(), 1);
        assert_eq!(IterationBudget::new(5).unwrap().halve().get(), 2);
    }

    #[test]
    fn double_saturates() {
        let huge = IterationBudget::new(u32::MAX).unwrap();
        assert_eq!(huge.double().get(), u32::MAX);
    }

    #[test]
    fn default_is_256() {
        assert_eq!(IterationBudget::default().get(), 256);
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<IterationBudget>("0").is_err());
        let b: IterationBudget = serde_json::from_str("64").unwrap();
        assert_eq!(b.get(), 64);
    }

    #[test]
    fn serde_round_trip() {
        let b = IterationBudget::new(512).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        let back: IterationBudget = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}
