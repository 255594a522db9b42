use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::models::car::Car;
use crate::modules::models::performance::{PerformanceScore, ScoringConstants};

/// a car with its performance score attached, the car fields are unchanged
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ComparedCar {
    #[serde(flatten)]
    pub car: Car,
    pub performance: PerformanceScore,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// the side holding the strictly greater value. equal values (and NaN)
    /// have no winner. greater always wins, also for times and weights.
    pub fn with_greater(first: f64, second: f64) -> Option<Side> {
        if first > second {
            Some(Side::First)
        } else if second > first {
            Some(Side::Second)
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct ComparisonRow {
    pub label: String,
    pub unit: String,
    pub first: f64,
    pub second: f64,
    pub winner: Option<Side>,
}

impl ComparisonRow {
    fn new(label: &str, unit: &str, first: f64, second: f64) -> ComparisonRow {
        ComparisonRow {
            label: label.to_string(),
            unit: unit.to_string(),
            first,
            second,
            winner: Side::with_greater(first, second),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Comparison {
    pub first: ComparedCar,
    pub second: ComparedCar,
    pub rows: Vec<ComparisonRow>,
}

impl ComparedCar {
    pub fn new(car: &Car, constants: &ScoringConstants) -> CustomResult<ComparedCar> {
        Ok(ComparedCar {
            car: car.clone(),
            performance: constants.score(car)?,
        })
    }

    pub fn annotate_with(cars: &[Car], constants: &ScoringConstants) -> CustomResult<Vec<ComparedCar>> {
        cars.iter()
            .map(|car| ComparedCar::new(car, constants))
            .collect()
    }

    pub fn annotate(cars: &[Car]) -> CustomResult<Vec<ComparedCar>> {
        ComparedCar::annotate_with(cars, &ScoringConstants::default())
    }
}

impl Comparison {
    /// # compare two cars
    /// puts two cars side by side. every row but the last compares a raw
    /// attribute, the last one compares the computed overall scores.
    pub fn between(first: &Car, second: &Car) -> CustomResult<Comparison> {
        let constants = ScoringConstants::default();
        let first = ComparedCar::new(first, &constants)?;
        let second = ComparedCar::new(second, &constants)?;

        let (a, b) = (&first.car, &second.car);
        let rows = vec![
            ComparisonRow::new("Top Speed", " km/h", a.top_speed_kmh, b.top_speed_kmh),
            ComparisonRow::new("0-100 km/h", "s", a.acceleration_0_100_kmh, b.acceleration_0_100_kmh),
            ComparisonRow::new("Downforce", " kgf", a.downforce_kgf, b.downforce_kgf),
            ComparisonRow::new("G-Force", "g", a.cornering_g_force, b.cornering_g_force),
            ComparisonRow::new("RPM Limit", "", a.rpm_limit as f64, b.rpm_limit as f64),
            ComparisonRow::new("Weight", " kg", a.minimum_weight_kg, b.minimum_weight_kg),
            ComparisonRow::new("Wheelbase", "m", a.wheelbase_m, b.wheelbase_m),
            ComparisonRow::new(
                "Overall Score",
                "",
                first.performance.overall_score as f64,
                second.performance.overall_score as f64,
            ),
        ];

        Ok(Comparison { first, second, rows })
    }
}
