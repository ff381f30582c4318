use serde::{Deserialize, Serialize};

use crate::intake::document::Document;
use crate::intake::traits::PayslipExtractor;
use crate::model::pay_record::PayRecord;

/// Figures handed out for every accepted document, whatever it contains.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PlaceholderFigures {
    pub gross_monthly: f64,
    pub net_monthly: f64,
    pub working_hours: f64,
}

impl Default for PlaceholderFigures {
    fn default() -> Self {
        Self {
            gross_monthly: 2500.0,
            net_monthly: 1850.0,
            // 8 hours * 20 working days
            working_hours: 160.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlaceholderExtractor {
    figures: PlaceholderFigures,
}

impl PlaceholderExtractor {
    pub fn new(figures: PlaceholderFigures) -> Self {
        Self { figures }
    }
}

impl PayslipExtractor for PlaceholderExtractor {
    fn extract(&self, document: &Document) -> PayRecord {
        PayRecord::new(
            self.figures.gross_monthly,
            self.figures.net_monthly,
            self.figures.working_hours,
            document.name.clone(),
        )
    }
}
