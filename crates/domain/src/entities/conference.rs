//! Server-owned conference record, as loaded by the edit form

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::entities::draft::BasicInfo;
use crate::entities::speaker::SpeakerAttachment;
use crate::ids::ConferenceId;

/// Attendance mode of a payment sub-tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attendance {
    Virtual,
    Physical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Naira,
}

/// Amounts for one attendance mode. Opaque strings, as everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAmounts {
    #[serde(default)]
    pub usd: String,
    #[serde(default)]
    pub naira: String,
}

impl PlanAmounts {
    pub fn get(&self, currency: Currency) -> &str {
        match currency {
            Currency::Usd => &self.usd,
            Currency::Naira => &self.naira,
        }
    }

    pub fn set(&mut self, currency: Currency, value: impl Into<String>) {
        match currency {
            Currency::Usd => self.usd = value.into(),
            Currency::Naira => self.naira = value.into(),
        }
    }
}

/// One named payment plan (`basic`, `standard`, `premium`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlan {
    #[serde(rename = "virtual", default)]
    pub virtual_amounts: PlanAmounts,
    #[serde(rename = "physical", default)]
    pub physical_amounts: PlanAmounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<Vec<String>>,
}

impl PaymentPlan {
    pub fn amounts(&self, attendance: Attendance) -> &PlanAmounts {
        match attendance {
            Attendance::Virtual => &self.virtual_amounts,
            Attendance::Physical => &self.physical_amounts,
        }
    }

    pub fn amounts_mut(&mut self, attendance: Attendance) -> &mut PlanAmounts {
        match attendance {
            Attendance::Virtual => &mut self.virtual_amounts,
            Attendance::Physical => &mut self.physical_amounts,
        }
    }

    pub fn package_items(&self) -> &[String] {
        self.package.as_deref().unwrap_or_default()
    }

    /// Same semantics as the pricing editor: append an empty slot.
    pub fn add_package_item(&mut self) {
        self.package.get_or_insert_with(Vec::new).push(String::new());
    }

    pub fn remove_package_item(&mut self, index: usize) -> Option<String> {
        let items = self.package.as_mut()?;
        (index < items.len()).then(|| items.remove(index))
    }

    pub fn update_package_item(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.package.as_mut().and_then(|items| items.get_mut(index)) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }
}

/// A conference as stored by the server.
///
/// Fields the client does not model are kept in `extra` so that the edit form
/// can send back a complete replacement object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: ConferenceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub subthemes: Vec<String>,
    #[serde(default)]
    pub workshops: Vec<String>,
    #[serde(rename = "important_date", default)]
    pub important_dates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flyer: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub payments: BTreeMap<String, PaymentPlan>,
    #[serde(default)]
    pub speakers: Vec<SpeakerAttachment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Conference {
    /// The five scalar fields, in the shape the required-field check expects.
    pub fn basic_info(&self) -> BasicInfo {
        BasicInfo {
            title: self.title.clone(),
            theme: self.theme.clone(),
            venue: self.venue.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::draft::BasicInfoField;
    use serde_json::json;

    fn sample_json() -> Value {
        json!({
            "id": 12,
            "title": "Edu Summit",
            "theme": "Assessment",
            "venue": "Abuja",
            "start": "2025-03-01",
            "end": "2025-03-03",
            "subthemes": ["Policy"],
            "workshops": [],
            "important_date": ["Abstracts due March"],
            "payments": {
                "basic": {
                    "virtual": {"usd": "10", "naira": "15000"},
                    "physical": {"usd": "20", "naira": "30000"},
                    "package": ["Lunch"]
                },
                "premium": {
                    "virtual": {"usd": "50", "naira": "75000"},
                    "physical": {"usd": "90", "naira": "120000"}
                }
            },
            "speakers": [{"speaker_id": 7, "occupation": "Guest Speaker"}],
            "status": "published"
        })
    }

    #[test]
    fn parses_nested_payments() {
        let conf: Conference = serde_json::from_value(sample_json()).unwrap();
        let basic = &conf.payments["basic"];
        assert_eq!(basic.amounts(Attendance::Virtual).get(Currency::Naira), "15000");
        assert_eq!(basic.package_items(), ["Lunch".to_string()]);
        assert!(conf.payments["premium"].package.is_none());
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let conf: Conference = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(conf.extra.get("status"), Some(&json!("published")));

        let back = serde_json::to_value(&conf).unwrap();
        assert_eq!(back["status"], json!("published"));
        assert_eq!(back["important_date"], json!(["Abstracts due March"]));
    }

    #[test]
    fn basic_info_reports_blank_scalar() {
        let mut conf: Conference = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(conf.basic_info().first_missing_required(), None);

        conf.venue = "  ".into();
        assert_eq!(
            conf.basic_info().first_missing_required(),
            Some(BasicInfoField::Venue)
        );
    }

    #[test]
    fn package_edits_create_list_on_demand() {
        let mut plan = PaymentPlan::default();
        assert_eq!(plan.remove_package_item(0), None);
        assert!(!plan.update_package_item(0, "x"));

        plan.add_package_item();
        assert!(plan.update_package_item(0, "Dinner"));
        assert_eq!(plan.package_items(), ["Dinner".to_string()]);
    }
}
