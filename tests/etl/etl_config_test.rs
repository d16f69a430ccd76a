#[cfg(test)]
mod tests {
    use chart_query::etl::{Config, EtlConfig, IncrementalConfig};
    use chart_query::ModelError;
    use serde_json::json;

    #[test]
    fn test_keys_collapse_last_write_wins() {
        let config = EtlConfig::from_object(json!({
            "mapIncrementalConfig": {
                "MySource": {
                    "className": "incremental_config",
                    "columnName": "id",
                    "value": "10"
                },
                "my_source": {
                    "className": "incremental_config",
                    "columnName": "updated_at",
                    "value": "2024-01-01"
                }
            }
        }))
        .unwrap();

        assert_eq!(config.len(), 1);
        let keys: Vec<&str> = config.map_incremental_config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["my_source"]);
        assert_eq!(
            config.get("my_source"),
            Some(&Config::Incremental(IncrementalConfig {
                column_name: "updated_at".to_string(),
                value: "2024-01-01".to_string(),
            }))
        );
    }

    #[test]
    fn test_mixed_strategies_keep_input_order() {
        let config = EtlConfig::from_object(json!({
            "mapIncrementalConfig": {
                "Orders": { "className": "incremental_config", "columnName": "id" },
                "customerProfiles": { "className": "full_refresh_config" },
                "audit_log": { "className": "incremental_config", "columnName": "ts", "value": "0" }
            }
        }))
        .unwrap();

        let keys: Vec<&str> = config.map_incremental_config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["orders", "customer_profiles", "audit_log"]);
        assert!(matches!(config.get("CustomerProfiles"), Some(Config::FullRefresh(_))));
        assert_eq!(config.get("orders"), Some(&Config::incremental("id", "")));
    }

    #[test]
    fn test_serde_goes_through_normalization() {
        let config: EtlConfig = serde_json::from_value(json!({
            "mapIncrementalConfig": {
                "SalesOrders": { "className": "full_refresh_config" }
            }
        }))
        .unwrap();

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "mapIncrementalConfig": {
                    "sales_orders": { "className": "full_refresh_config" }
                }
            })
        );
    }

    #[test]
    fn test_missing_class_name_fails() {
        let result = EtlConfig::from_object(json!({
            "mapIncrementalConfig": { "orders": { "columnName": "id" } }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_object_input_is_invalid() {
        let inputs = [
            json!([]),
            json!("orders"),
            json!(null),
            json!({ "mapIncrementalConfig": [] }),
        ];
        for value in inputs {
            let err = EtlConfig::from_object(value.clone()).unwrap_err();
            assert!(
                matches!(err, ModelError::InvalidObject { family: "etl config", .. }),
                "{}",
                value
            );
        }
    }

    #[test]
    fn test_missing_map_fails_through_serde() {
        let result: Result<EtlConfig, _> = serde_json::from_value(json!({ "sources": {} }));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("mapIncrementalConfig"));
    }
}
