use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LedgerError;
use crate::model::column::Column;

/// A commission rate expressed as a percentage (`40.0` means 40%).
///
/// Serialized as the bare percentage number. Use [`Percent::fraction`] to
/// get the multiplier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[serde(transparent)]
pub struct Percent(f64);

impl Percent {
    pub const fn new(percent: f64) -> Self {
        Self(percent)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && (0.0..=100.0).contains(&self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub banca_name: String,
    pub commission_period: Percent,
    pub commission_group: Percent,
}

impl Settings {
    pub fn new(banca_name: impl Into<String>, commission_period: Percent, commission_group: Percent) -> Self {
        Self {
            banca_name: banca_name.into(),
            commission_period,
            commission_group,
        }
    }

    pub fn rate_for(&self, column: Column) -> Percent {
        if column.is_period() {
            self.commission_period
        } else {
            self.commission_group
        }
    }

    /// Boundary check for user-entered settings. The calculation engine
    /// itself accepts any finite rate.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.banca_name.trim().is_empty() {
            return Err(LedgerError::InvalidSettings("banca name is required".to_string()));
        }
        for (name, rate) in [
            ("commissionPeriod", self.commission_period),
            ("commissionGroup", self.commission_group),
        ] {
            if !rate.is_valid() {
                return Err(LedgerError::InvalidSettings(format!(
                    "{} must be between 0 and 100, got {}",
                    name,
                    rate.value()
                )));
            }
        }
        Ok(())
    }
}

/// Partial settings update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub banca_name: Option<String>,
    pub commission_period: Option<Percent>,
    pub commission_group: Option<Percent>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.banca_name.is_none() && self.commission_period.is_none() && self.commission_group.is_none()
    }

    pub fn apply_to(&self, settings: &Settings) -> Settings {
        Settings {
            banca_name: self.banca_name.clone().unwrap_or_else(|| settings.banca_name.clone()),
            commission_period: self.commission_period.unwrap_or(settings.commission_period),
            commission_group: self.commission_group.unwrap_or(settings.commission_group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::new("Real Cariri", Percent::new(40.0), Percent::new(30.0))
    }

    #[test]
    fn test_rate_for_column_kind() {
        let s = settings();
        assert_eq!(s.rate_for(Column::Noite), Percent::new(40.0));
        assert_eq!(s.rate_for(Column::GrupoNoite), Percent::new(30.0));
        assert_eq!(Percent::new(40.0).fraction(), 0.4);
    }

    #[test]
    fn test_serialized_as_percentage_number() {
        let json = serde_json::to_string(&settings()).unwrap();
        assert_eq!(
            json,
            r#"{"bancaName":"Real Cariri","commissionPeriod":40.0,"commissionGroup":30.0}"#
        );
    }

    #[test]
    fn test_validate() {
        assert!(settings().validate().is_ok());

        let mut s = settings();
        s.commission_group = Percent::new(100.5);
        assert!(matches!(s.validate(), Err(LedgerError::InvalidSettings(_))));

        let mut s = settings();
        s.commission_period = Percent::new(f64::NAN);
        assert!(s.validate().is_err());

        let mut s = settings();
        s.banca_name = "  ".to_string();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let patch = SettingsPatch {
            commission_group: Some(Percent::new(25.0)),
            ..Default::default()
        };
        let updated = patch.apply_to(&settings());
        assert_eq!(updated.banca_name, "Real Cariri");
        assert_eq!(updated.commission_period, Percent::new(40.0));
        assert_eq!(updated.commission_group, Percent::new(25.0));
    }
}
