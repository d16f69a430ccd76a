#[cfg(test)]
mod tests {
    use chart_query::model::{
        Condition, DrilldownData, Field, Function, FunnelQuerySetting, OrderBy, PieQuerySetting,
        QuerySetting, QuerySettingBase, ScalarFunctionType, SeriesQuerySetting, TableColumn,
    };

    fn region() -> Field {
        Field::new("sales", "customers", "region", "String")
    }

    fn city() -> Field {
        Field::new("sales", "customers", "city", "String")
    }

    fn segment() -> Field {
        Field::new("sales", "customers", "segment", "String")
    }

    fn amount() -> Field {
        Field::new("sales", "orders", "amount", "Double")
    }

    fn funnel(filters: Vec<Condition>) -> QuerySetting {
        FunnelQuerySetting::new(
            TableColumn::new("Region", Function::group_by(region())),
            TableColumn::new("Revenue", Function::sum(amount())),
        )
        .with_base(
            QuerySettingBase::default()
                .with_filters(filters)
                .with_sorts(vec![OrderBy::desc(Function::sum(amount()))]),
        )
        .into()
    }

    fn to_city() -> DrilldownData {
        DrilldownData::new("City", Function::group_by(city()), "North")
    }

    #[test]
    fn test_drilldown_replaces_column_and_adds_filter() {
        let setting = funnel(vec![]);

        let drilled = setting
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&to_city());

        let QuerySetting::Funnel(drilled) = drilled else {
            panic!("Drilldown must keep the chart type");
        };
        assert_eq!(drilled.legend.name, "City");
        assert_eq!(drilled.legend.field(), &city());
        assert_eq!(drilled.value.name, "Revenue");
        assert_eq!(drilled.base.filters, vec![Condition::equal(region(), "North")]);
        assert_eq!(drilled.base.sorts.len(), 1);
    }

    #[test]
    fn test_drilldown_leaves_source_untouched() {
        let setting = funnel(vec![Condition::equal(segment(), "SMB")]);
        let before = setting.clone();

        let drilled = setting
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&to_city());

        assert_eq!(setting, before);
        assert_ne!(drilled, before);
        assert_eq!(drilled.filters().len(), 2);
    }

    #[test]
    fn test_repeated_drill_keeps_single_equality_per_field() {
        let setting = funnel(vec![
            Condition::equal(region(), "South"),
            Condition::equal(segment(), "SMB"),
            Condition::equal(region(), "East"),
        ]);

        let drilled = setting
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&to_city());

        let on_region: Vec<&Condition> = drilled
            .filters()
            .iter()
            .filter(|condition| condition.is_equal_on(&region()))
            .collect();
        assert_eq!(on_region, vec![&Condition::equal(region(), "North")]);
        assert_eq!(
            drilled.filters(),
            &[
                Condition::equal(region(), "North"),
                Condition::equal(segment(), "SMB"),
            ]
        );
    }

    #[test]
    fn test_drill_chain_builds_a_navigation_stack() {
        let root = funnel(vec![]);
        let level_one = root
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&to_city());
        let level_two = level_one
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&DrilldownData::new(
                "Segment",
                Function::group_by(segment()),
                "Hanoi",
            ));

        assert!(root.filters().is_empty());
        assert_eq!(level_one.filters(), &[Condition::equal(region(), "North")]);
        assert_eq!(
            level_two.filters(),
            &[
                Condition::equal(region(), "North"),
                Condition::equal(city(), "Hanoi"),
            ]
        );
        assert_eq!(
            level_two.as_drilldownable().unwrap().column_will_drilldown().name,
            "Segment"
        );
    }

    #[test]
    fn test_drill_equality_keeps_scalar_function() {
        let created_at = Field::new("sales", "orders", "created_at", "Date");
        let series: QuerySetting = SeriesQuerySetting::new(
            TableColumn::new(
                "Year",
                Function::group_by(created_at.clone()).scalar(ScalarFunctionType::ToYear),
            ),
            vec![TableColumn::new("Revenue", Function::sum(amount()))],
            None,
        )
        .into();

        let drilled = series
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&DrilldownData::new(
                "Month",
                Function::group_by(created_at.clone()).scalar(ScalarFunctionType::ToMonth),
                "2024",
            ));

        let filter = drilled.filters()[0].as_field_related().unwrap();
        assert_eq!(filter.field(), &created_at);
        assert_eq!(
            filter.scalar_function().map(|f| f.class_name),
            Some(ScalarFunctionType::ToYear)
        );
    }

    #[test]
    fn test_pie_drilldown() {
        let pie: QuerySetting = PieQuerySetting::new(
            TableColumn::new("Region", Function::group_by(region())),
            TableColumn::new("Revenue", Function::sum(amount())),
        )
        .into();

        let drilled = pie
            .as_drilldownable()
            .unwrap()
            .build_query_drilldown(&to_city());

        assert_eq!(drilled.class_name(), "pie_chart_setting");
        assert_eq!(drilled.all_table_columns()[0].name, "City");
    }
}
