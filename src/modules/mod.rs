pub mod analytics;
pub mod catalog_api;
pub mod models {
    pub mod car;
    pub mod session;

    pub mod performance;
    pub mod leaderboard;
    pub mod stats;
    pub mod comparison;
}

pub mod helpers {
    pub mod config;
    pub mod logging;
    pub mod math;

    pub mod fairings {
        pub mod cors;
    }
}
