//! Packing limits.

/// Largest item count the bitmask enumerator is allowed to handle.
///
/// `2^20` subsets per line is still a fraction of a second.
pub const MAX_ENUMERABLE_ITEMS: usize = 20;

/// Numeric limits checked before a line is optimized.
///
/// The defaults are the fixed limits of the packing challenge.
///
/// # Examples
///
/// ```
/// use u_packer::validate::PackingLimits;
///
/// let limits = PackingLimits::default()
///     .with_max_capacity(50.0)
///     .with_max_items(10);
/// assert!(limits.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PackingLimits {
    /// Maximum weight a package can hold.
    pub max_capacity: f64,

    /// Maximum number of items on one line.
    pub max_items: usize,

    /// Maximum weight of a single item.
    pub max_item_weight: f64,

    /// Maximum price of a single item.
    pub max_item_price: f64,
}

impl Default for PackingLimits {
    fn default() -> Self {
        Self {
            max_capacity: 100.0,
            max_items: 15,
            max_item_weight: 100.0,
            max_item_price: 100.0,
        }
    }
}

impl PackingLimits {
    pub fn with_max_capacity(mut self, limit: f64) -> Self {
        self.max_capacity = limit;
        self
    }

    pub fn with_max_items(mut self, limit: usize) -> Self {
        self.max_items = limit;
        self
    }

    pub fn with_max_item_weight(mut self, limit: f64) -> Self {
        self.max_item_weight = limit;
        self
    }

    pub fn with_max_item_price(mut self, limit: f64) -> Self {
        self.max_item_price = limit;
        self
    }

    /// Validates the limits.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("max_capacity", self.max_capacity),
            ("max_item_weight", self.max_item_weight),
            ("max_item_price", self.max_item_price),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        if self.max_items > MAX_ENUMERABLE_ITEMS {
            return Err(format!(
                "max_items must be at most {MAX_ENUMERABLE_ITEMS}, got {}",
                self.max_items
            ));
        }
        Ok(())
    }
}
