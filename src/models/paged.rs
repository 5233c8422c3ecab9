use serde::Deserialize;

/// Paged list envelope returned by the list endpoints.
///
/// `data` defaults to empty so a malformed or absent list degrades to a
/// zero-value aggregate instead of failing the whole response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total_number_of_records: Option<u64>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}
