use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::models::car::Car;
use crate::modules::models::performance::{PerformanceScore, ScoringConstants};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub performance: PerformanceScore,
    pub rank: usize,
    pub constructor: String,
}

impl LeaderboardEntry {
    /// # generate leaderboard
    /// scores every car and orders them by overall score, best first.
    ///
    /// the sort is stable so cars with the same overall score keep the order
    /// they had in `cars`. ranks are positions: a tie still gets two
    /// different ranks.
    ///
    /// ## Arguments
    /// * `cars` - the cars to rank, left untouched
    /// * `constants` - the scoring baselines
    ///
    /// ## Returns
    /// * `Vec<LeaderboardEntry>` - ranks `1..=cars.len()` in order
    pub fn generate_with(cars: &[Car], constants: &ScoringConstants) -> CustomResult<Vec<LeaderboardEntry>> {
        let mut scored = cars
            .iter()
            .map(|car| Ok((constants.score(car)?, car.constructor.clone())))
            .collect::<CustomResult<Vec<(PerformanceScore, String)>>>()?;

        scored.sort_by(|(a, _), (b, _)| b.overall_score.cmp(&a.overall_score));

        Ok(scored
            .into_iter()
            .enumerate()
            .map(|(index, (performance, constructor))| LeaderboardEntry {
                performance,
                rank: index + 1,
                constructor,
            })
            .collect())
    }

    pub fn generate(cars: &[Car]) -> CustomResult<Vec<LeaderboardEntry>> {
        LeaderboardEntry::generate_with(cars, &ScoringConstants::default())
    }
}
