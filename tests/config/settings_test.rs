#[cfg(test)]
mod tests {
    use chart_query::config::{Settings, SettingsError, CONFIG_ENV_VAR};
    use chart_query::model::Field;
    use chart_query::resolver::{ConditionData, ConditionResolver, FilterOperator};
    use chart_query::NestedConditionResolver;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("chart-query.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[resolver]
nested_array_index = 3

[logging]
filter = "chart_query=trace,warn"
"#,
        );

        let settings = Settings::from_file(&path).unwrap();

        assert_eq!(settings.resolver.nested_array_index, Some(3));
        assert_eq!(settings.logging.filter, "chart_query=trace,warn");
        assert!(settings.logging.ansi);
    }

    #[test]
    fn test_from_file_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[resolver\nnested_array_index = ");

        let result = Settings::from_file(&path);
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }

    #[test]
    fn test_load_honors_env_var() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[resolver]\nnested_array_index = 1\n");

        std::env::set_var(CONFIG_ENV_VAR, &path);
        let settings = Settings::load();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(settings.unwrap().resolver.nested_array_index, Some(1));
    }

    #[test]
    fn test_resolver_uses_configured_index() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[resolver]\nnested_array_index = 4\n");
        let settings = Settings::from_file(&path).unwrap();

        let resolver = NestedConditionResolver::from_settings(&settings.resolver);
        let data = ConditionData::new(
            Field::new("sales", "orders", "tags", "Array(String)"),
            FilterOperator::Equal,
        )
        .first("vip")
        .nested();

        let condition = resolver.build_condition(0, &data).unwrap();
        let scalar = condition.as_field_related().unwrap().scalar_function().unwrap();
        assert_eq!(scalar.index, Some(4));
    }
}
