//! Classification operator implementation.

use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::classification::ClassificationOperator;
use crate::port::outbound::classifier::Classifier;

use super::entry::Operator;

impl ClassificationOperator for Operator {
    fn classifier(&self) -> Result<Box<dyn Classifier>> {
        bootstrap::build_classifier(&self.config.llm)
    }
}
