use crate::intake::document::Document;
use crate::model::pay_record::PayRecord;

pub trait PayslipExtractor {
    fn extract(&self, document: &Document) -> PayRecord;
}
