use std::collections::HashMap;

use alloy_primitives::{I256, U256};

use crate::oracle::PriceSource;
use crate::types::{
    errors::{oracle_failure, Result},
    RoundData,
};

/// In-memory aggregator for local networks, where no real feed is deployed.
///
/// Each update opens a new round stamped with a mock clock that advances by
/// one per round. A feed can be taken offline to exercise read failures.
#[derive(Debug, Clone)]
pub struct MockV3Aggregator {
    decimals: u8,
    latest_answer: I256,
    latest_timestamp: U256,
    latest_round: U256,
    answers: HashMap<U256, I256>,
    timestamps: HashMap<U256, U256>,
    started_at: HashMap<U256, U256>,
    offline: bool,
}

impl MockV3Aggregator {
    pub const VERSION: u64 = 0;

    pub fn new(decimals: u8, initial_answer: I256) -> Self {
        let mut feed = Self {
            decimals,
            latest_answer: I256::ZERO,
            latest_timestamp: U256::ZERO,
            latest_round: U256::ZERO,
            answers: HashMap::new(),
            timestamps: HashMap::new(),
            started_at: HashMap::new(),
            offline: false,
        };
        feed.update_answer(initial_answer);
        feed
    }

    pub fn update_answer(&mut self, answer: I256) {
        let round = self.latest_round + U256::from(1);
        let now = self.latest_timestamp + U256::from(1);
        self.update_round_data(round, answer, now, now);
    }

    pub fn update_round_data(&mut self, round_id: U256, answer: I256, timestamp: U256, started_at: U256) {
        self.latest_round = round_id;
        self.latest_answer = answer;
        self.latest_timestamp = timestamp;
        self.answers.insert(round_id, answer);
        self.timestamps.insert(round_id, timestamp);
        self.started_at.insert(round_id, started_at);
    }

    pub fn get_round_data(&self, round_id: U256) -> Option<RoundData> {
        let answer = *self.answers.get(&round_id)?;
        Some(RoundData {
            round_id,
            answer,
            started_at: self.started_at.get(&round_id).copied().unwrap_or_default(),
            updated_at: self.timestamps.get(&round_id).copied().unwrap_or_default(),
            answered_in_round: round_id,
        })
    }

    pub fn latest_answer(&self) -> I256 {
        self.latest_answer
    }

    pub fn latest_timestamp(&self) -> U256 {
        self.latest_timestamp
    }

    pub fn version(&self) -> U256 {
        U256::from(Self::VERSION)
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
}

impl PriceSource for MockV3Aggregator {
    fn decimals(&self) -> Result<u8> {
        if self.offline {
            return Err(oracle_failure("price feed unreachable"));
        }
        Ok(self.decimals)
    }

    fn latest_round(&self) -> Result<RoundData> {
        if self.offline {
            return Err(oracle_failure("price feed unreachable"));
        }
        self.get_round_data(self.latest_round)
            .ok_or_else(|| oracle_failure("price feed has no rounds"))
    }
}
