//! Categorised amenity counts around one location.

use std::collections::BTreeMap;

/// Amenity categories the places service is asked about.
///
/// The set is fixed; each category carries the threshold count at which its
/// score saturates and the weight it contributes to the combined score.
///
/// # Examples
/// ```
/// use nestrank_core::AmenityCategory;
///
/// assert_eq!(AmenityCategory::ConvenienceStore.as_str(), "convenienceStore");
/// assert_eq!(AmenityCategory::Park.threshold(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AmenityCategory {
    /// Hospitals and medical centres.
    Hospital,
    /// Convenience stores and supermarkets.
    ConvenienceStore,
    /// Restaurants and cafes.
    Restaurant,
    /// Gyms and fitness venues.
    Gym,
    /// Parks and green space.
    Park,
}

impl AmenityCategory {
    /// Every category, in scoring order.
    pub const ALL: [Self; 5] = [
        Self::Hospital,
        Self::ConvenienceStore,
        Self::Restaurant,
        Self::Gym,
        Self::Park,
    ];

    /// Return the category's wire key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::ConvenienceStore => "convenienceStore",
            Self::Restaurant => "restaurant",
            Self::Gym => "gym",
            Self::Park => "park",
        }
    }

    /// Count at which this category's score saturates.
    #[must_use]
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Hospital => 20,
            Self::ConvenienceStore => 40,
            Self::Restaurant => 35,
            Self::Gym => 20,
            Self::Park => 10,
        }
    }

    /// Weight of this category in the combined amenity score.
    ///
    /// The weights sum to `1.0`.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Hospital => 0.3,
            Self::ConvenienceStore => 0.3,
            Self::Restaurant => 0.2,
            Self::Gym => 0.1,
            Self::Park => 0.1,
        }
    }
}

impl std::fmt::Display for AmenityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AmenityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(Self::Hospital),
            "convenienceStore" => Ok(Self::ConvenienceStore),
            "restaurant" => Ok(Self::Restaurant),
            "gym" => Ok(Self::Gym),
            "park" => Ok(Self::Park),
            _ => Err(format!("unknown amenity category '{s}'")),
        }
    }
}

/// A named place returned by the places service.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmenityPlace {
    /// Place name.
    pub name: String,
    /// Approximate address or vicinity description.
    pub vicinity: String,
}

/// Count and named places for one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmenityTally {
    /// Number of places found in the category.
    pub count: u32,
    /// Named places; display data only, never scored.
    #[cfg_attr(feature = "serde", serde(default))]
    pub places: Vec<AmenityPlace>,
}

impl AmenityTally {
    /// Construct a tally with a count and no named places.
    #[must_use]
    pub const fn with_count(count: u32) -> Self {
        Self {
            count,
            places: Vec::new(),
        }
    }
}

/// Per-category amenity tallies around one location.
///
/// Categories the service never mentioned count as zero.
///
/// # Examples
/// ```
/// use nestrank_core::{AmenityCategory, AmenitySurvey, AmenityTally};
///
/// let mut survey = AmenitySurvey::new();
/// survey.insert(AmenityCategory::Park, AmenityTally::with_count(4));
/// assert_eq!(survey.count(AmenityCategory::Park), 4);
/// assert_eq!(survey.count(AmenityCategory::Gym), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AmenitySurvey {
    tallies: BTreeMap<AmenityCategory, AmenityTally>,
}

impl AmenitySurvey {
    /// Construct an empty survey.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tallies: BTreeMap::new(),
        }
    }

    /// Insert or replace the tally for a category.
    pub fn insert(&mut self, category: AmenityCategory, tally: AmenityTally) {
        self.tallies.insert(category, tally);
    }

    /// Add a tally while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_tally(mut self, category: AmenityCategory, tally: AmenityTally) -> Self {
        self.insert(category, tally);
        self
    }

    /// Return the count for a category, zero when absent.
    #[must_use]
    pub fn count(&self, category: AmenityCategory) -> u32 {
        self.tallies.get(&category).map_or(0, |tally| tally.count)
    }

    /// Return the full tally for a category, if present.
    #[must_use]
    pub fn tally(&self, category: AmenityCategory) -> Option<&AmenityTally> {
        self.tallies.get(&category)
    }

    /// Iterate over present categories and their tallies.
    pub fn iter(&self) -> impl Iterator<Item = (AmenityCategory, &AmenityTally)> {
        self.tallies.iter().map(|(category, tally)| (*category, tally))
    }

    /// Report whether the survey holds no tallies at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}
