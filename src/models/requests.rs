use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::domain::{Developer, Ticket};

/// Request to rank developers for one ticket
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub ticket: Ticket,
    #[serde(default)]
    pub developers: Vec<Developer>,
    #[serde(alias = "expand_search", rename = "expandSearch", default)]
    pub expand_search: bool,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl RankRequest {
    /// Validate the request and every developer record in it
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;
        validate_records(&self.developers)
    }
}

/// Request to process a batch of tickets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub developers: Vec<Developer>,
}

impl BatchRequest {
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        validate_records(&self.tickets)?;
        validate_records(&self.developers)
    }
}

fn validate_records<T: Validate>(records: &[T]) -> Result<(), ValidationErrors> {
    records.iter().try_for_each(Validate::validate)
}
