//! On-ledger log entries.

use serde::{Deserialize, Serialize};

use crate::config::{LOG_DATA_MAX_LENGTH, LOG_TOPIC_MAX_LENGTH};
use crate::error::{Field, Result, SdkError};
use crate::transaction::proto::{self, OperationType};

use super::validate;
use super::OperationMeta;

/// Records `datas` under `topic` in the transaction's log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCreate {
    #[serde(flatten)]
    pub meta: OperationMeta,
    pub topic: String,
    pub datas: Vec<String>,
}

impl LogCreate {
    pub fn build(&self) -> Result<proto::Operation> {
        validate::source(self.meta.source())?;
        validate::length(Field::LogTopic, self.topic.len(), 1, LOG_TOPIC_MAX_LENGTH)?;
        if self.datas.is_empty() {
            return Err(SdkError::invalid_field(Field::LogData, "no entries"));
        }
        for data in &self.datas {
            validate::length(Field::LogData, data.len(), 1, LOG_DATA_MAX_LENGTH)?;
        }

        let mut op = self.meta.wire(OperationType::Log);
        op.log = Some(proto::OperationLog {
            topic: self.topic.clone(),
            datas: self.datas.clone(),
        });
        Ok(op)
    }
}
