/// Sample indicator tables compiled into the binary.
use crate::indicator::Indicator;

pub static POPULATION_CSV: &str = include_str!("../../fixtures/population.csv");
pub static GDP_CSV: &str = include_str!("../../fixtures/gdp.csv");
pub static CHILD_MORTALITY_CSV: &str = include_str!("../../fixtures/cmu5.csv");
pub static LIFE_EXPECTANCY_CSV: &str = include_str!("../../fixtures/life_expectancy.csv");
pub static FERTILITY_RATE_CSV: &str = include_str!("../../fixtures/fertility-rate.csv");

/// Every bundled table paired with its indicator.
pub static ALL: [(Indicator, &str); 5] = [
    (Indicator::Population, POPULATION_CSV),
    (Indicator::Gdp, GDP_CSV),
    (Indicator::ChildMortality, CHILD_MORTALITY_CSV),
    (Indicator::LifeExpectancy, LIFE_EXPECTANCY_CSV),
    (Indicator::FertilityRate, FERTILITY_RATE_CSV),
];
