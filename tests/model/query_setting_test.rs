#[cfg(test)]
mod tests {
    use chart_query::model::{
        Condition, Field, Function, FunnelQuerySetting, InlineSqlView, NumberQuerySetting, OrderBy,
        QuerySetting, QuerySettingBase, QuerySettingType, SeriesQuerySetting, TableColumn,
    };
    use chart_query::ModelError;
    use serde_json::{json, Value};

    fn field_json(name: &str) -> Value {
        json!({
            "className": "table_field",
            "dbName": "sales",
            "tblName": "orders",
            "fieldName": name,
            "fieldType": "String"
        })
    }

    fn column_json(name: &str, function: &str, field: &str) -> Value {
        json!({
            "name": name,
            "function": { "className": function, "field": field_json(field) }
        })
    }

    fn setting_json(kind: QuerySettingType) -> Value {
        let mut obj = match kind {
            QuerySettingType::Pie | QuerySettingType::Funnel => json!({
                "legend": column_json("Region", "group_by", "region"),
                "value": column_json("Revenue", "sum", "amount"),
            }),
            QuerySettingType::DrilldownPie => json!({
                "legends": [
                    column_json("Region", "group_by", "region"),
                    column_json("City", "group_by", "city"),
                ],
                "value": column_json("Revenue", "sum", "amount"),
            }),
            QuerySettingType::Scatter => json!({
                "xAxis": column_json("Quantity", "sum", "quantity"),
                "yAxis": column_json("Revenue", "sum", "amount"),
            }),
            QuerySettingType::Series => json!({
                "xAxis": column_json("Date", "group_by", "created_at"),
                "yAxis": [column_json("Revenue", "sum", "amount")],
            }),
            QuerySettingType::Number => json!({
                "value": column_json("Revenue", "sum", "amount"),
            }),
        };
        obj["className"] = Value::String(kind.class_name().to_string());
        obj
    }

    fn region() -> Field {
        Field::new("sales", "orders", "region", "String")
    }

    fn amount() -> Field {
        Field::new("sales", "orders", "amount", "String")
    }

    #[test]
    fn test_from_object_selects_variant_by_class_name() {
        for kind in QuerySettingType::ALL {
            let setting = QuerySetting::from_object(setting_json(kind)).unwrap();
            assert_eq!(setting.kind(), kind);
            assert_eq!(setting.class_name(), kind.class_name());
        }
    }

    #[test]
    fn test_from_object_funnel_fields() {
        let setting = QuerySetting::from_object(setting_json(QuerySettingType::Funnel)).unwrap();

        let QuerySetting::Funnel(funnel) = &setting else {
            panic!("Expected funnel, got {:?}", setting.kind());
        };
        assert_eq!(funnel.legend.name, "Region");
        assert_eq!(funnel.legend.field(), &region());
        assert_eq!(funnel.value.field(), &amount());
        assert!(setting.filters().is_empty());
        assert!(setting.sorts().is_empty());
    }

    #[test]
    fn test_unknown_class_name_is_class_not_found() {
        let mut obj = setting_json(QuerySettingType::Pie);
        obj["className"] = json!("table_chart_setting");

        let err = QuerySetting::from_object(obj).unwrap_err();

        assert!(matches!(
            &err,
            ModelError::ClassNotFound { family: "query setting", class_name }
                if class_name == "table_chart_setting"
        ));
        assert_eq!(err.class_name(), Some("table_chart_setting"));
        assert!(err.to_string().contains("table_chart_setting"));
    }

    #[test]
    fn test_missing_class_name() {
        let mut obj = setting_json(QuerySettingType::Pie);
        obj.as_object_mut().unwrap().remove("className");

        let err = QuerySetting::from_object(obj).unwrap_err();
        assert!(matches!(err, ModelError::MissingClassName("query setting")));
    }

    #[test]
    fn test_missing_required_column_is_invalid_object() {
        let mut obj = setting_json(QuerySettingType::Funnel);
        obj.as_object_mut().unwrap().remove("legend");

        let err = QuerySetting::from_object(obj).unwrap_err();
        assert!(matches!(err, ModelError::InvalidObject { family: "query setting", .. }));
    }

    #[test]
    fn test_serialized_form_carries_class_name_and_shared_parts() {
        let funnel = FunnelQuerySetting::new(
            TableColumn::new("Region", Function::group_by(region())),
            TableColumn::new("Revenue", Function::sum(amount())),
        )
        .with_base(QuerySettingBase::default().with_option("showLabel", json!(true)));
        let setting = QuerySetting::from(funnel);

        let value = serde_json::to_value(&setting).unwrap();

        assert_eq!(value["className"], "funnel_chart_setting");
        assert_eq!(value["legend"]["function"]["className"], "group_by");
        assert_eq!(value["options"]["showLabel"], true);
        assert_eq!(value["filters"], json!([]));

        let rebuilt: QuerySetting = serde_json::from_value(value).unwrap();
        assert_eq!(rebuilt, setting);
    }

    #[test]
    fn test_unknown_options_pass_through() {
        let mut obj = setting_json(QuerySettingType::Number);
        obj["options"] = json!({ "prefix": "$", "decimals": 2 });

        let setting = QuerySetting::from_object(obj).unwrap();

        assert_eq!(setting.base().options["prefix"], "$");
        assert_eq!(setting.base().options["decimals"], 2);
    }

    #[test]
    fn test_series_columns_in_slot_order() {
        let legend = TableColumn::new("Region", Function::group_by(region()));
        let created_at = Field::new("sales", "orders", "created_at", "Date");
        let series = SeriesQuerySetting::new(
            TableColumn::new("Date", Function::group_by(created_at)),
            vec![
                TableColumn::new("Revenue", Function::sum(amount())),
                TableColumn::new("Orders", Function::count(amount())),
            ],
            Some(legend),
        );
        let setting = QuerySetting::from(series);

        let names: Vec<&str> = setting
            .all_table_columns()
            .iter()
            .map(|column| column.name.as_str())
            .collect();
        assert_eq!(names, vec!["Date", "Revenue", "Orders", "Region"]);
        assert_eq!(setting.all_functions().len(), 4);
    }

    #[test]
    fn test_capabilities_per_chart_type() {
        let expected = [
            (QuerySettingType::Pie, true, true, true),
            (QuerySettingType::Funnel, true, true, true),
            (QuerySettingType::DrilldownPie, false, false, false),
            (QuerySettingType::Scatter, true, false, true),
            (QuerySettingType::Series, true, true, true),
            (QuerySettingType::Number, false, false, false),
        ];

        for (kind, zoomable, drilldownable, filterable) in expected {
            let setting = QuerySetting::from_object(setting_json(kind)).unwrap();
            assert_eq!(setting.as_zoomable().is_some(), zoomable, "{:?} zoomable", kind);
            assert_eq!(
                setting.as_drilldownable().is_some(),
                drilldownable,
                "{:?} drilldownable",
                kind
            );
            assert_eq!(setting.as_filterable().is_some(), filterable, "{:?} filterable", kind);
        }
    }

    #[test]
    fn test_filter_column_per_chart_type() {
        let funnel = QuerySetting::from_object(setting_json(QuerySettingType::Funnel)).unwrap();
        assert_eq!(funnel.as_filterable().unwrap().filter_column().name, "Region");

        let scatter = QuerySetting::from_object(setting_json(QuerySettingType::Scatter)).unwrap();
        assert_eq!(scatter.as_filterable().unwrap().filter_column().name, "Quantity");

        let mut obj = setting_json(QuerySettingType::Scatter);
        obj["legend"] = column_json("Region", "group_by", "region");
        let with_legend = QuerySetting::from_object(obj).unwrap();
        assert_eq!(with_legend.as_filterable().unwrap().filter_column().name, "Region");
    }

    #[test]
    fn test_number_setting_has_single_column() {
        let setting = QuerySetting::Number(NumberQuerySetting::new(TableColumn::new(
            "Revenue",
            Function::sum(amount()),
        )));
        assert_eq!(setting.all_table_columns().len(), 1);
        assert!(setting.as_zoomable().is_none());
    }

    /// Put `to_month(get_array_element(..))` on every group-by column.
    fn add_scalar_chain(value: &mut Value) {
        match value {
            Value::Object(map) => {
                if map.get("className") == Some(&json!("group_by")) && map.contains_key("field") {
                    map.insert(
                        "scalarFunction".to_string(),
                        json!({
                            "className": "to_month",
                            "innerFn": { "className": "get_array_element", "index": 1 }
                        }),
                    );
                }
                map.values_mut().for_each(add_scalar_chain);
            }
            Value::Array(items) => items.iter_mut().for_each(add_scalar_chain),
            _ => {}
        }
    }

    fn populated_setting_json(kind: QuerySettingType) -> Value {
        let mut obj = setting_json(kind);
        add_scalar_chain(&mut obj);
        obj["filters"] = json!([{
            "className": "and",
            "conditions": [
                { "className": "equal", "field": field_json("region"), "value": "EU" },
                {
                    "className": "dynamic_value_condition",
                    "baseCondition": {
                        "className": "between",
                        "field": field_json("amount"),
                        "min": "10",
                        "max": "20"
                    },
                    "dynamicWidgetId": 11
                }
            ]
        }]);
        obj["sorts"] = json!([{
            "function": { "className": "sum", "field": field_json("amount") },
            "order": "DESC",
            "numElemsShown": 10
        }]);
        obj["options"] = json!({
            "title": { "text": "Revenue", "style": { "fontSize": "14px" } },
            "colors": ["#fff", "#000"]
        });
        obj["sqlViews"] = json!([{
            "aliasName": "recent_orders",
            "query": { "className": "raw_query", "query": "SELECT * FROM sales.orders" }
        }]);
        obj
    }

    #[test]
    fn test_populated_settings_survive_serialization() {
        for kind in QuerySettingType::ALL {
            let setting = QuerySetting::from_object(populated_setting_json(kind)).unwrap();
            let plain = serde_json::to_value(&setting).unwrap();
            let rebuilt = QuerySetting::from_object(plain.clone()).unwrap();

            assert_eq!(rebuilt, setting, "{:?}", kind);
            assert_eq!(serde_json::to_value(&rebuilt).unwrap(), plain, "{:?}", kind);

            let base = rebuilt.base();
            assert_eq!(base.filters[0].children()[1].class_name(), "dynamic_value_condition");
            assert_eq!(base.sorts[0].num_elems_shown, Some(10));
            assert_eq!(base.options["title"]["style"]["fontSize"], "14px");
            assert_eq!(base.sql_views[0].alias_name, "recent_orders");
        }
    }

    #[test]
    fn test_scalar_chain_survives_serialization() {
        let setting =
            QuerySetting::from_object(populated_setting_json(QuerySettingType::Series)).unwrap();
        let rebuilt = QuerySetting::from_object(serde_json::to_value(&setting).unwrap()).unwrap();

        let scalar = rebuilt.all_table_columns()[0]
            .function
            .scalar_function
            .clone()
            .unwrap();
        assert_eq!(scalar.depth(), 2);
        assert_eq!(scalar.inner_fn.unwrap().index, Some(1));
    }

    #[test]
    fn test_built_base_matches_plain_form() {
        let base = QuerySettingBase::default()
            .with_filters(vec![Condition::equal(region(), "EU")])
            .with_sorts(vec![OrderBy::desc(Function::sum(amount())).limit(5)])
            .with_sql_views(vec![InlineSqlView::new(
                "recent_orders",
                "SELECT * FROM sales.orders",
            )]);
        let setting = QuerySetting::from(
            FunnelQuerySetting::new(
                TableColumn::new("Region", Function::group_by(region())),
                TableColumn::new("Revenue", Function::sum(amount())),
            )
            .with_base(base),
        );

        let value = serde_json::to_value(&setting).unwrap();

        assert_eq!(value["sorts"][0]["order"], "DESC");
        assert_eq!(value["sorts"][0]["numElemsShown"], 5);
        assert_eq!(value["sqlViews"][0]["query"]["className"], "raw_query");
        assert_eq!(QuerySetting::from_object(value).unwrap(), setting);
    }
}
