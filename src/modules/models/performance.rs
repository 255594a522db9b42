use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::helpers::math::Math;
use crate::modules::models::car::Car;

/// upper bound of every sub score. there is no lower bound: an overweight
/// or slow car ends up with a negative sub score.
pub const MAX_SUB_SCORE: f64 = 100.0;

pub const RADAR_FULL_MARK: f64 = 100.0;
pub const RADAR_REFERENCE_G_FORCE: f64 = 7.0;
pub const RADAR_REFERENCE_RPM: f64 = 16000.0;

/// # scoring constants
/// the baselines raw attributes are measured against. the defaults define
/// the published scores, other values are only meant for experiments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConstants {
    /// km/h that earns a full speed score
    pub reference_top_speed_kmh: f64,
    /// 0-100 km/h time in seconds that earns a full acceleration score
    pub reference_acceleration_s: f64,
    /// kgf that earns a full aerodynamics score
    pub reference_downforce_kgf: f64,
    /// cars at or above this weight score zero or less on efficiency
    pub weight_ceiling_kg: f64,
    /// every this many kg below the ceiling is worth 100 efficiency points
    pub weight_span_kg: f64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        ScoringConstants {
            reference_top_speed_kmh: 370.0,
            reference_acceleration_s: 3.0,
            reference_downforce_kgf: 3500.0,
            weight_ceiling_kg: 800.0,
            weight_span_kg: 50.0,
        }
    }
}

/// unrounded sub scores, the overall score is derived from these and not
/// from the rounded ones
#[derive(Debug, Clone, Copy, PartialEq)]
struct RawScores {
    speed: f64,
    acceleration: f64,
    aerodynamics: f64,
    efficiency: f64,
}

impl RawScores {
    fn overall(&self) -> f64 {
        (self.speed + self.acceleration + self.aerodynamics + self.efficiency) / 4.0
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceScore {
    pub car_id: String,
    pub car_name: String,
    pub overall_score: i64,
    pub speed_score: i64,
    pub acceleration_score: i64,
    pub aerodynamics_score: i64,
    pub efficiency_score: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub metric: String,
    pub value: f64,
    pub full_mark: f64,
}

impl ScoringConstants {
    fn clamp(value: f64) -> f64 {
        value.min(MAX_SUB_SCORE)
    }

    fn raw_scores(&self, car: &Car) -> CustomResult<RawScores> {
        car.validate()?;

        Ok(RawScores {
            speed: Self::clamp(car.top_speed_kmh / self.reference_top_speed_kmh * 100.0),
            acceleration: Self::clamp(self.reference_acceleration_s / car.acceleration_0_100_kmh * 100.0),
            aerodynamics: Self::clamp(car.downforce_kgf / self.reference_downforce_kgf * 100.0),
            efficiency: Self::clamp(
                (self.weight_ceiling_kg - car.minimum_weight_kg) / self.weight_span_kg * 100.0,
            ),
        })
    }

    /// # score a car
    /// normalizes top speed, acceleration, downforce and weight into sub
    /// scores capped at 100 and averages them into the overall score.
    /// every score is rounded on its own, the overall score is the rounded
    /// mean of the unrounded sub scores.
    ///
    /// ## Arguments
    /// * `car` - the car to score, its 0-100 km/h time has to be positive
    ///
    /// ## Returns
    /// * `PerformanceScore` - the rounded scores
    /// * `Error::InvalidInput` - when the acceleration time is zero, negative or not finite
    pub fn score(&self, car: &Car) -> CustomResult<PerformanceScore> {
        let raw = self.raw_scores(car)?;

        Ok(PerformanceScore {
            car_id: car.car_id.clone(),
            car_name: car.car_name.clone(),
            overall_score: Math::round_to_integer(raw.overall()),
            speed_score: Math::round_to_integer(raw.speed),
            acceleration_score: Math::round_to_integer(raw.acceleration),
            aerodynamics_score: Math::round_to_integer(raw.aerodynamics),
            efficiency_score: Math::round_to_integer(raw.efficiency),
        })
    }

    /// # radar profile
    /// the percentages plotted on the dashboard radar. unlike the scores
    /// these are neither capped nor rounded.
    pub fn radar_profile(&self, car: &Car) -> CustomResult<Vec<RadarPoint>> {
        car.validate()?;

        let point = |metric: &str, value: f64| RadarPoint {
            metric: metric.to_string(),
            value,
            full_mark: RADAR_FULL_MARK,
        };

        Ok(vec![
            point("Speed", car.top_speed_kmh / self.reference_top_speed_kmh * 100.0),
            point("Acceleration", self.reference_acceleration_s / car.acceleration_0_100_kmh * 100.0),
            point("Downforce", car.downforce_kgf / self.reference_downforce_kgf * 100.0),
            point("G-Force", car.cornering_g_force / RADAR_REFERENCE_G_FORCE * 100.0),
            point("RPM", car.rpm_limit as f64 / RADAR_REFERENCE_RPM * 100.0),
        ])
    }
}

impl PerformanceScore {
    pub fn calculate(car: &Car) -> CustomResult<PerformanceScore> {
        ScoringConstants::default().score(car)
    }
}
