use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
pub struct CleanNamesRequestDto {
    pub names: Vec<String>,
}

/// One cleaned name, in the same position as its raw input. `clean_name` is
/// null when the input was ambiguous or not a single sellable item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedNameDto {
    pub index: u32,
    pub clean_name: Option<String>,
}
