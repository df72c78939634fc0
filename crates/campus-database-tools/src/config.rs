//! Configuration types for warehouse tools

/// Configuration for the name-statistics tool
#[derive(Debug, Clone)]
pub struct WarehouseToolConfig {
    /// Table holding historical name occurrence counts
    pub names_table: String,
    /// Connection timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for WarehouseToolConfig {
    fn default() -> Self {
        Self {
            names_table: "usa_names".to_string(),
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WarehouseToolConfig::default();
        assert_eq!(config.names_table, "usa_names");
        assert_eq!(config.timeout_secs, 30);
    }
}
