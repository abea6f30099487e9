//! Conference package pricing
//!
//! Each conference offers three tiers. Amounts are opaque strings; the server
//! owns all numeric validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// One of the three pricing levels a conference offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierName {
    Basic,
    Standard,
    Premium,
}

impl TierName {
    pub fn all() -> &'static [TierName] {
        &[TierName::Basic, TierName::Standard, TierName::Premium]
    }

    /// Lowercase key used as the form-field prefix (`basic_naira`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            TierName::Basic => "basic",
            TierName::Standard => "standard",
            TierName::Premium => "premium",
        }
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amounts plus the ordered list of what the tier includes.
///
/// Inclusions may be empty, may repeat, and may hold blank strings: editing an
/// item down to `""` does not remove it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub amount_naira: String,
    pub amount_usd: String,
    pub inclusions: Vec<String>,
}

impl PricingTier {
    pub fn new(
        amount_naira: impl Into<String>,
        amount_usd: impl Into<String>,
        inclusions: Vec<String>,
    ) -> Self {
        Self {
            amount_naira: amount_naira.into(),
            amount_usd: amount_usd.into(),
            inclusions,
        }
    }

    /// Rebuild a tier from its three form fields (`*_naira`, `*_usd`, `*_package`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` if `package_json` is not a JSON array of strings.
    pub fn from_form_fields(
        amount_naira: &str,
        amount_usd: &str,
        package_json: &str,
    ) -> Result<Self, DomainError> {
        let inclusions: Vec<String> = serde_json::from_str(package_json)
            .map_err(|e| DomainError::parse(format!("Invalid package list: {}", e)))?;
        Ok(Self::new(amount_naira, amount_usd, inclusions))
    }

    pub fn set_amount_naira(&mut self, value: impl Into<String>) {
        self.amount_naira = value.into();
    }

    pub fn set_amount_usd(&mut self, value: impl Into<String>) {
        self.amount_usd = value.into();
    }

    /// Append one empty slot for the user to fill in.
    pub fn add_inclusion(&mut self) {
        self.inclusions.push(String::new());
    }

    /// Remove by position (not by value, duplicates are allowed).
    pub fn remove_inclusion(&mut self, index: usize) -> Option<String> {
        (index < self.inclusions.len()).then(|| self.inclusions.remove(index))
    }

    /// Replace in place, without trimming.
    pub fn update_inclusion(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.inclusions.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}

/// The three tiers side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePricing {
    pub basic: PricingTier,
    pub standard: PricingTier,
    pub premium: PricingTier,
}

impl PackagePricing {
    pub fn tier(&self, name: TierName) -> &PricingTier {
        match name {
            TierName::Basic => &self.basic,
            TierName::Standard => &self.standard,
            TierName::Premium => &self.premium,
        }
    }

    pub fn tier_mut(&mut self, name: TierName) -> &mut PricingTier {
        match name {
            TierName::Basic => &mut self.basic,
            TierName::Standard => &mut self.standard,
            TierName::Premium => &mut self.premium,
        }
    }
}
