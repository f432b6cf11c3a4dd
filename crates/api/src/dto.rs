use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CheckHostQuery {
    pub domain: Option<String>,
}
