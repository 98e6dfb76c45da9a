use crate::error::ParseIndicatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five statistical series shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    Population,
    Gdp,
    ChildMortality,
    LifeExpectancy,
    FertilityRate,
}

impl Indicator {
    /// Every indicator, in the order the tables are loaded.
    /// `Population` comes first: its rows define the entity list.
    pub const ALL: [Indicator; 5] = [
        Indicator::Population,
        Indicator::Gdp,
        Indicator::ChildMortality,
        Indicator::LifeExpectancy,
        Indicator::FertilityRate,
    ];

    /// Position of the indicator within [`Indicator::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Indicator::Population => 0,
            Indicator::Gdp => 1,
            Indicator::ChildMortality => 2,
            Indicator::LifeExpectancy => 3,
            Indicator::FertilityRate => 4,
        }
    }

    /// Canonical kebab-case name used by controls, JSON frames and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Population => "population",
            Indicator::Gdp => "gdp",
            Indicator::ChildMortality => "child-mortality",
            Indicator::LifeExpectancy => "life-expectancy",
            Indicator::FertilityRate => "fertility-rate",
        }
    }

    /// Human-readable label for selectors and axis titles.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::Population => "Population",
            Indicator::Gdp => "GDP per capita",
            Indicator::ChildMortality => "Child mortality (under 5, per 1000)",
            Indicator::LifeExpectancy => "Life expectancy (years)",
            Indicator::FertilityRate => "Fertility rate (births per woman)",
        }
    }

    /// File name of the table in the published data set.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Indicator::Population => "population.csv",
            Indicator::Gdp => "gdp.csv",
            Indicator::ChildMortality => "cmu5.csv",
            Indicator::LifeExpectancy => "life_expectancy.csv",
            Indicator::FertilityRate => "fertility-rate.csv",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indicator {
    type Err = ParseIndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Indicator::ALL
            .into_iter()
            .find(|indicator| indicator.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseIndicatorError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for indicator in Indicator::ALL {
            assert_eq!(indicator.name().parse::<Indicator>().unwrap(), indicator);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Child-Mortality".parse::<Indicator>().unwrap(), Indicator::ChildMortality);
        assert_eq!(" gdp ".parse::<Indicator>().unwrap(), Indicator::Gdp);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "co2".parse::<Indicator>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown indicator: co2");
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Indicator::LifeExpectancy).unwrap();
        assert_eq!(json, "\"life-expectancy\"");
    }

    #[test]
    fn test_child_mortality_file_name() {
        assert_eq!(Indicator::ChildMortality.default_file_name(), "cmu5.csv");
    }
}
