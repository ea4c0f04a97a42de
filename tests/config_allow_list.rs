use jdeps_puml::core::{
    AllowList, GroupingPolicy, NoopObserver, Pipeline, PipelineConfig, RenderStrategy,
};

#[test]
fn presets_select_matching_strategies() {
    let simple = PipelineConfig::simple(AllowList::parse("a"), "");
    assert_eq!(simple.render, RenderStrategy::PackageBlock);
    assert_eq!(simple.package_depth, None);

    let counted = PipelineConfig::counted(None, "", 3);
    assert_eq!(counted.grouping, GroupingPolicy::CountAndSort);
    assert_eq!(counted.package_depth, Some(3));

    let dedup = PipelineConfig::deduplicated(None, "");
    assert_eq!(dedup.grouping, GroupingPolicy::Dedupe);
    assert_eq!(dedup.package_depth, Some(4));
    assert!(dedup.echo_edges);
}

#[test]
fn allow_list_matches_exact_strings_only() {
    let list = AllowList::parse("com.foo;com.bar").unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.contains("com.foo"));
    assert!(!list.contains("com.foo.A"));
    assert!(!list.contains("com"));
}

#[test]
fn blank_include_list_is_unrestricted() {
    assert!(AllowList::parse(" ").is_none());
    assert!(AllowList::parse("\t  ").is_none());

    let pipeline = Pipeline::new(PipelineConfig::counted(AllowList::parse(" "), "", 2)).unwrap();
    let output = pipeline.process_lines(["  com.foo.A -> com.bar.B  x.jar"], &mut NoopObserver);
    assert_eq!(
        pipeline.render(&output),
        vec!["@startuml", "[com.foo] --> [com.bar] : 1", "@enduml"]
    );
}

#[test]
fn repeated_include_entries_are_each_declared() {
    let list = AllowList::parse("a;b;a").unwrap();
    assert_eq!(list.len(), 3);

    let pipeline = Pipeline::new(PipelineConfig::simple(Some(list), "")).unwrap();
    let output = pipeline.process_lines(["a -> b"], &mut NoopObserver);
    assert_eq!(
        pipeline.render(&output),
        vec![
            "@startuml",
            "package \"a\"{}",
            "package \"b\"{}",
            "package \"a\"{}",
            "\"a\" --> \"b\"",
            "@enduml",
        ]
    );
}
