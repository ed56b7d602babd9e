use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrainerError;

/// Rendering of /θ/ in the target dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThetaMode {
    #[default]
    T,
    S,
}

impl FromStr for ThetaMode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t" => Ok(ThetaMode::T),
            "s" => Ok(ThetaMode::S),
            _ => Err(TrainerError::InvalidConfiguration(format!(
                "theta_mode must be 't' or 's', got '{s}'"
            ))),
        }
    }
}

/// Whether the postalveolar merger is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingMode {
    #[default]
    Strict,
    Approx,
}

impl FromStr for MappingMode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(MappingMode::Strict),
            "approx" => Ok(MappingMode::Approx),
            _ => Err(TrainerError::InvalidConfiguration(format!(
                "mode must be 'strict' or 'approx', got '{s}'"
            ))),
        }
    }
}

/// Realisation of the English rhotic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RVariant {
    #[default]
    Tap,
    Trill,
}

impl FromStr for RVariant {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tap" => Ok(RVariant::Tap),
            "trill" => Ok(RVariant::Trill),
            _ => Err(TrainerError::InvalidConfiguration(format!(
                "r_variant must be 'tap' or 'trill', got '{s}'"
            ))),
        }
    }
}

/// Vowel the schwa collapses into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchwaVariant {
    #[default]
    E,
    A,
}

impl FromStr for SchwaVariant {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "e" => Ok(SchwaVariant::E),
            "a" => Ok(SchwaVariant::A),
            _ => Err(TrainerError::InvalidConfiguration(format!(
                "schwa must be 'e' or 'a', got '{s}'"
            ))),
        }
    }
}

/// Knobs for the baseline-to-dialect rewrite. Every field has a default, so
/// requests may omit any subset of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectOptions {
    pub theta_mode: ThetaMode,
    pub mode: MappingMode,
    pub r_variant: RVariant,
    pub schwa: SchwaVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = DialectOptions::default();
        assert_eq!(opts.theta_mode, ThetaMode::T);
        assert_eq!(opts.mode, MappingMode::Strict);
        assert_eq!(opts.r_variant, RVariant::Tap);
        assert_eq!(opts.schwa, SchwaVariant::E);
    }

    #[test]
    fn parses_known_values() {
        assert_eq!("s".parse::<ThetaMode>().unwrap(), ThetaMode::S);
        assert_eq!("approx".parse::<MappingMode>().unwrap(), MappingMode::Approx);
        assert_eq!("trill".parse::<RVariant>().unwrap(), RVariant::Trill);
        assert_eq!("a".parse::<SchwaVariant>().unwrap(), SchwaVariant::A);
    }

    #[test]
    fn rejects_out_of_domain_values() {
        assert!("th".parse::<ThetaMode>().is_err());
        assert!("loose".parse::<MappingMode>().is_err());
        assert!("flap".parse::<RVariant>().is_err());
        assert!("o".parse::<SchwaVariant>().is_err());
    }

    #[test]
    fn deserializes_partial_options() {
        let opts: DialectOptions = serde_json::from_str(r#"{"schwa":"a"}"#).unwrap();
        assert_eq!(opts.schwa, SchwaVariant::A);
        assert_eq!(opts.theta_mode, ThetaMode::T);
    }

    #[test]
    fn deserialization_rejects_unknown_variant() {
        assert!(serde_json::from_str::<DialectOptions>(r#"{"mode":"lenient"}"#).is_err());
    }
}
