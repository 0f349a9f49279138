use crate::model::Record;
use std::collections::HashSet;

/// Identity of a record within one document: all six fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub payment_no: String,
    pub id_number: String,
    pub bank_code: String,
    pub account_number: String,
    pub budget_code: String,
    pub amount: String,
}

impl From<&Record> for RecordKey {
    fn from(record: &Record) -> Self {
        RecordKey {
            payment_no: record.payment_no.clone(),
            id_number: record.id_number.clone(),
            bank_code: record.bank_code.clone(),
            account_number: record.account_number.clone(),
            budget_code: record.budget_code.clone(),
            amount: record.amount.clone(),
        }
    }
}

/// Drop repeated records, keeping the first occurrence of each key.
pub fn dedup_records(records: Vec<Record>) -> Vec<Record> {
    let mut seen: HashSet<RecordKey> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert(RecordKey::from(r)))
        .collect()
}
