//! Environment-driven configuration.

/// Base name of the backing card table.
pub const TABLE_BASE_NAME: &str = "cards";

/// Table name suffixed with the deployment environment, `dev` when `ENV`
/// is unset.
pub fn table_name() -> String {
    let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
    format!("{}-{}", TABLE_BASE_NAME, env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_carries_environment_suffix() {
        let name = table_name();
        assert!(
            name.starts_with("cards-"),
            "Table name should be environment-suffixed, got: {}",
            name
        );
    }
}
