use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::fields;

/// Approval roles that carry an ordered list of signers on the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignerRole {
    BusinessUnitHead,
    MarketingHead,
    PortfolioManager,
    CountryHead,
    GccDirector,
}

impl SignerRole {
    pub fn key(self) -> &'static str {
        match self {
            SignerRole::BusinessUnitHead => "buh",
            SignerRole::MarketingHead => "mh",
            SignerRole::PortfolioManager => "pm",
            SignerRole::CountryHead => "ch",
            SignerRole::GccDirector => "gcc",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signer {
    #[serde(alias = "sign")]
    pub signature_image_ref: Option<String>,
    #[serde(alias = "date")]
    pub approval_date: Option<Value>,
}

impl Signer {
    /// Approval date as `MM/DD/YYYY`, when present and parseable.
    pub fn formatted_date(&self) -> Option<String> {
        self.approval_date.as_ref().and_then(fields::format_date)
    }
}

/// One row of the Objectives & ROI quantitative table, already rendered to
/// cell text.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantitativeItem {
    pub brand: String,
    pub country: String,
    pub previous_year_sales_aed: String,
    pub current_year_target_aed: String,
    pub growth: String,
    pub expense: String,
}

impl QuantitativeItem {
    fn from_value(entry: &Value) -> Self {
        let brand = fields::lookup(entry, "brand.name")
            .or_else(|| fields::lookup(entry, "brand"))
            .and_then(fields::scalar_text)
            .unwrap_or_default();
        Self {
            brand,
            country: fields::field_or(entry, "country", ""),
            previous_year_sales_aed: fields::field_or(entry, "previousYearSalesAED", ""),
            current_year_target_aed: fields::field_or(entry, "currentYearTargetAED", ""),
            growth: fields::field_or(entry, "growth", ""),
            expense: fields::field_or(entry, "expense", ""),
        }
    }

    pub fn cells(&self) -> [String; 6] {
        [
            self.brand.clone(),
            self.country.clone(),
            self.previous_year_sales_aed.clone(),
            self.current_year_target_aed.clone(),
            self.growth.clone(),
            self.expense.clone(),
        ]
    }
}

/// An activity record as supplied by the caller. Every field is optional
/// and may be of an unexpected shape; reads never fail.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Activity(Value);

impl Activity {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(Self(serde_json::from_str(json)?))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn field_or(&self, path: &str, placeholder: &str) -> String {
        fields::field_or(&self.0, path, placeholder)
    }

    pub fn field_or_bool(&self, path: &str, default: bool) -> bool {
        fields::field_or_bool(&self.0, path, default)
    }

    /// Checkbox state: `true` only for a literal boolean `true`.
    pub fn flag(&self, path: &str) -> bool {
        self.field_or_bool(path, false)
    }

    pub fn field_is(&self, path: &str, expected: &str) -> bool {
        fields::field_is(&self.0, path, expected)
    }

    pub fn date_or(&self, path: &str, placeholder: &str) -> String {
        fields::date_or(&self.0, path, placeholder)
    }

    /// Identifier used to name the persisted document.
    pub fn id(&self) -> Option<String> {
        fields::lookup(&self.0, "_id")
            .or_else(|| fields::lookup(&self.0, "id"))
            .and_then(fields::scalar_text)
    }

    pub fn serial_no(&self) -> Option<u64> {
        match fields::lookup(&self.0, "serialNo")? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Display form of the serial number for the page header.
    pub fn tracking_id(&self) -> String {
        match self.serial_no() {
            Some(n) => format!("{n:06}"),
            None => "______".to_string(),
        }
    }

    /// Signers for `role` in submission order. Malformed entries are kept as
    /// empty signers so positions stay stable.
    pub fn signers(&self, role: SignerRole) -> Vec<Signer> {
        self.list(role.key())
            .iter()
            .map(|entry| Signer::deserialize(entry).unwrap_or_default())
            .collect()
    }

    /// The final, authoritative approval for `role`.
    pub fn last_signer(&self, role: SignerRole) -> Option<Signer> {
        self.signers(role).pop()
    }

    pub fn quantitative_items(&self) -> Vec<QuantitativeItem> {
        self.list("objectivesAndROI.quantitative")
            .iter()
            .map(QuantitativeItem::from_value)
            .collect()
    }

    /// Attachment URLs. Non-string entries are dropped.
    pub fn attachments(&self) -> Vec<String> {
        let top = self.list("attachments");
        let list = if top.is_empty() {
            self.list("beneficiary.attachments")
        } else {
            top
        };
        list.iter()
            .filter_map(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn list(&self, path: &str) -> &[Value] {
        fields::lookup(&self.0, path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl From<Value> for Activity {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
