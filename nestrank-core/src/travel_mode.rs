//! Travel modes accepted by the routing collaborator.
//!
//! The enum offers compile-time safety for mode selection; the wire form is
//! the upper-case constant the directions service expects.
//!
//! # Examples
//! ```
//! use nestrank_core::TravelMode;
//!
//! assert_eq!(TravelMode::Walking.as_str(), "WALKING");
//! assert_eq!("transit".parse::<TravelMode>(), Ok(TravelMode::Transit));
//! ```

/// Mode of transport for travel-time requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TravelMode {
    /// On foot.
    #[default]
    Walking,
    /// By car.
    Driving,
    /// By public transport.
    Transit,
}

impl TravelMode {
    /// Return the wire constant for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Walking => "WALKING",
            Self::Driving => "DRIVING",
            Self::Transit => "TRANSIT",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "WALKING" => Ok(Self::Walking),
            "DRIVING" => Ok(Self::Driving),
            "TRANSIT" => Ok(Self::Transit),
            _ => Err(format!("unknown travel mode '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(TravelMode::Driving.to_string(), TravelMode::Driving.as_str());
    }

    #[test]
    fn parsing_accepts_any_case() {
        assert_eq!(TravelMode::from_str("walking"), Ok(TravelMode::Walking));
        assert_eq!(TravelMode::from_str("Transit"), Ok(TravelMode::Transit));
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = TravelMode::from_str("teleport").unwrap_err();
        assert!(err.contains("unknown travel mode"));
    }

    #[test]
    fn default_is_walking() {
        assert_eq!(TravelMode::default(), TravelMode::Walking);
    }
}
