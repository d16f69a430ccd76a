#[cfg(test)]
mod tests {
    use chart_query::model::{
        Condition, DynamicValueCondition, Field, ScalarFunction, ScalarFunctionType,
    };
    use chart_query::ModelError;
    use insta::assert_snapshot;
    use serde_json::json;

    fn region() -> Field {
        Field::new("sales", "orders", "region", "String")
    }

    fn created_at() -> Field {
        Field::new("sales", "orders", "created_at", "Date")
    }

    #[test]
    fn test_equal_serialized_form() {
        let json = serde_json::to_string(&Condition::equal(region(), "EU")).unwrap();
        assert_snapshot!(json, @r#"{"className":"equal","field":{"className":"table_field","dbName":"sales","tblName":"orders","fieldName":"region","fieldType":"String"},"value":"EU"}"#);
    }

    #[test]
    fn test_between_with_scalar_serialized_form() {
        let mut condition = Condition::between(created_at(), "2024", "2025");
        condition
            .as_field_related_mut()
            .unwrap()
            .set_scalar_function(ScalarFunction::new(ScalarFunctionType::ToYear));

        let json = serde_json::to_string(&condition).unwrap();
        assert_snapshot!(json, @r#"{"className":"between","field":{"className":"table_field","dbName":"sales","tblName":"orders","fieldName":"created_at","fieldType":"Date"},"min":"2024","max":"2025","scalarFunction":{"className":"to_year"}}"#);
    }

    #[test]
    fn test_nested_tree_from_object() {
        let obj = json!({
            "className": "and",
            "conditions": [
                {
                    "className": "equal",
                    "field": {
                        "dbName": "sales",
                        "tblName": "orders",
                        "fieldName": "region",
                        "fieldType": "String"
                    },
                    "value": "EU"
                },
                {
                    "className": "or",
                    "conditions": [
                        {
                            "className": "is_null",
                            "field": {
                                "dbName": "sales",
                                "tblName": "orders",
                                "fieldName": "created_at",
                                "fieldType": "Date"
                            }
                        },
                        {
                            "className": "in",
                            "field": {
                                "dbName": "sales",
                                "tblName": "orders",
                                "fieldName": "region",
                                "fieldType": "String"
                            },
                            "values": ["EU", "US"]
                        }
                    ]
                }
            ]
        });

        let condition = Condition::from_object(obj).unwrap();

        assert_eq!(
            condition,
            Condition::and(vec![
                Condition::equal(region(), "EU"),
                Condition::or(vec![
                    Condition::is_null(created_at()),
                    Condition::is_in(region(), vec!["EU".to_string(), "US".to_string()]),
                ]),
            ])
        );
        assert_eq!(condition.children().len(), 2);
        assert_eq!(condition.children()[1].children()[1].class_name(), "in");
    }

    #[test]
    fn test_unknown_nested_class_name_fails() {
        let obj = json!({
            "className": "and",
            "conditions": [{ "className": "xor", "conditions": [] }]
        });

        let err = Condition::from_object(obj).unwrap_err();
        assert!(err.to_string().contains("xor"));
    }

    #[test]
    fn test_unknown_top_level_class_name() {
        let err = Condition::from_object(json!({ "className": "regex_match" })).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ClassNotFound { family: "condition", ref class_name }
                if class_name == "regex_match"
        ));
    }

    #[test]
    fn test_logical_conditions_are_not_field_related() {
        let condition = Condition::and(vec![Condition::equal(region(), "EU")]);
        assert!(!condition.is_field_related());
        assert!(condition.children()[0].is_field_related());
    }

    #[test]
    fn test_dynamic_value_delegates_to_base() {
        let condition = Condition::DynamicValue(DynamicValueCondition {
            base_condition: Box::new(Condition::equal(region(), "")),
            dynamic_widget_id: 42,
        });

        assert_eq!(condition.class_name(), "dynamic_value_condition");
        let related = condition.as_field_related().unwrap();
        assert_eq!(related.field(), &region());
        assert!(related.scalar_function().is_none());
        assert!(!condition.is_equal_on(&region()));

        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value["baseCondition"]["className"], "equal");
        assert_eq!(value["dynamicWidgetId"], 42);
        assert_eq!(Condition::from_object(value).unwrap(), condition);
    }

    #[test]
    fn test_scalar_chain_from_object() {
        let obj = json!({
            "className": "equal",
            "field": {
                "dbName": "sales",
                "tblName": "orders",
                "fieldName": "tags",
                "fieldType": "Array(Date)"
            },
            "value": "2024",
            "scalarFunction": {
                "className": "to_year",
                "innerFn": { "className": "get_array_element", "index": 1 }
            }
        });

        let condition = Condition::from_object(obj).unwrap();
        let scalar = condition.as_field_related().unwrap().scalar_function().unwrap();

        let kinds: Vec<ScalarFunctionType> = scalar.chain().map(|f| f.class_name).collect();
        assert_eq!(
            kinds,
            vec![ScalarFunctionType::ToYear, ScalarFunctionType::GetArrayElement]
        );
        assert_eq!(scalar.inner_fn.as_ref().unwrap().index, Some(1));
    }
}
