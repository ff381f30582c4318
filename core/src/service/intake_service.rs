use crate::error::IntakeError;
use crate::intake::{Document, PayslipExtractor};
use crate::model::pay_record::PayRecord;

pub struct DocumentIntake<E: PayslipExtractor> {
    extractor: E,
    accepted_types: Vec<String>,
}

impl<E: PayslipExtractor> DocumentIntake<E> {
    pub fn new(extractor: E, accepted_types: Vec<String>) -> Self {
        Self { extractor, accepted_types }
    }

    pub fn accepted_types(&self) -> &[String] {
        &self.accepted_types
    }

    pub fn accepts(&self, media_type: &str) -> bool {
        self.accepted_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(media_type.trim()))
    }

    /// Only documents with an accepted declared type reach the extractor.
    pub fn intake(&self, document: &Document) -> Result<PayRecord, IntakeError> {
        if !self.accepts(&document.media_type) {
            tracing::warn!(
                name = %document.name,
                media_type = %document.media_type,
                "Rejected payslip upload"
            );
            return Err(IntakeError::UnsupportedFileType {
                name: document.name.clone(),
                media_type: document.media_type.clone(),
            });
        }

        let record = self.extractor.extract(document);
        tracing::info!(
            name = %record.source_name,
            net = record.net_monthly,
            hours = record.working_hours,
            "Payslip accepted"
        );
        Ok(record)
    }
}
