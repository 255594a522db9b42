//! The operations the rest of the application calls on a fetched catalog.
//! All of them are pure: cars go in untouched, derived values come out.

use crate::errors::CustomResult;
use crate::modules::models::car::Car;
use crate::modules::models::comparison::{ComparedCar, Comparison};
use crate::modules::models::leaderboard::LeaderboardEntry;
use crate::modules::models::performance::{PerformanceScore, RadarPoint, ScoringConstants};
use crate::modules::models::stats::{AggregateStats, SpeedBar};

pub fn score(car: &Car) -> CustomResult<PerformanceScore> {
    PerformanceScore::calculate(car)
}

pub fn rank(cars: &[Car]) -> CustomResult<Vec<LeaderboardEntry>> {
    LeaderboardEntry::generate(cars)
}

pub fn aggregate(cars: &[Car]) -> Option<AggregateStats> {
    AggregateStats::calculate(cars)
}

pub fn annotate(cars: &[Car]) -> CustomResult<Vec<ComparedCar>> {
    ComparedCar::annotate(cars)
}

pub fn compare_pair(first: &Car, second: &Car) -> CustomResult<Comparison> {
    Comparison::between(first, second)
}

pub fn radar_profile(car: &Car) -> CustomResult<Vec<RadarPoint>> {
    ScoringConstants::default().radar_profile(car)
}

pub fn speed_chart(cars: &[Car]) -> Vec<SpeedBar> {
    SpeedBar::chart(cars)
}
