use crate::domain::{AppError, LabelTable};

const LABEL_MAPPINGS: &str = include_str!("../../assets/label-mappings.json");

/// Built-in scaffolder key -> credential prefix table.
pub fn default_label_table() -> Result<LabelTable, AppError> {
    LabelTable::from_json_str(LABEL_MAPPINGS, "label-mappings.json")
}
