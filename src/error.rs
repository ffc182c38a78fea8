use thiserror::Error;

#[derive(Error, Debug)]
pub enum KisanOpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, KisanOpsError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_json(text: &str) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(text)?)
    }

    fn parse_yaml(text: &str) -> Result<Vec<u32>> {
        Ok(serde_yaml::from_str(text)?)
    }

    #[test]
    fn test_serde_errors_convert() {
        let err = parse_json("{not json").unwrap_err();
        assert!(matches!(err, KisanOpsError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));

        let err = parse_yaml("just a string").unwrap_err();
        assert!(matches!(err, KisanOpsError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML parsing error"));
    }
}
