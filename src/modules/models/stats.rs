use serde::{Deserialize, Serialize};

use crate::modules::helpers::math::Math;
use crate::modules::models::car::Car;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub avg_top_speed: i64,
    /// seconds with exactly two fraction digits, e.g. `"2.60"`
    pub avg_acceleration: String,
    pub avg_downforce: i64,
    pub avg_weight: i64,
    pub total_cars: usize,
}

/// one bar of the top speed chart
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct SpeedBar {
    pub name: String,
    pub speed: f64,
}

impl AggregateStats {
    /// # average stats
    /// mean top speed, acceleration, downforce and weight of a set of cars.
    ///
    /// ## Returns
    /// * `None` - when there are no cars
    pub fn calculate(cars: &[Car]) -> Option<AggregateStats> {
        if cars.is_empty() {
            return None;
        }

        let mean_of = |attribute: fn(&Car) -> f64| {
            let values: Vec<f64> = cars.iter().map(attribute).collect();
            Math::mean(&values).unwrap_or_default()
        };

        Some(AggregateStats {
            avg_top_speed: Math::round_to_integer(mean_of(|car| car.top_speed_kmh)),
            avg_acceleration: Math::to_fixed(mean_of(|car| car.acceleration_0_100_kmh), 2),
            avg_downforce: Math::round_to_integer(mean_of(|car| car.downforce_kgf)),
            avg_weight: Math::round_to_integer(mean_of(|car| car.minimum_weight_kg)),
            total_cars: cars.len(),
        })
    }
}

impl SpeedBar {
    pub fn chart(cars: &[Car]) -> Vec<SpeedBar> {
        cars.iter()
            .map(|car| SpeedBar {
                name: car.short_name().to_string(),
                speed: car.top_speed_kmh,
            })
            .collect()
    }
}
