//! Tests for layout configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        position_step = 10
        part_ordering = "volume"
        side_ordering = false

        [orientation_filter]
        remove_equivalent_sides = false
        force_min_area = true

        [hint_initializer]
        assign_position = false
        mandatory_only = true

        [random_initializer]
        use_preferred_side = false

        [construction]
        sort_metric = "default_area"
    "#;

    let config = LayoutConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.effective_seed(), 42);
    assert_eq!(config.position_step, 10);
    assert_eq!(config.part_ordering, PartOrdering::Volume);
    assert!(!config.side_ordering);

    assert!(config.orientation_filter.singleton_for_mandatory);
    assert!(!config.orientation_filter.remove_equivalent_sides);
    assert!(config.orientation_filter.force_min_area);

    assert!(config.hint_initializer.assign_side);
    assert!(!config.hint_initializer.assign_position);
    assert!(config.hint_initializer.mandatory_only);

    let random = config.random_initializer.unwrap();
    assert!(!random.use_preferred_side);
    assert!(random.use_min_area_side);
    assert_eq!(config.construction.unwrap().sort_metric, SortMetric::DefaultArea);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        part_ordering: difficulty
        orientation_filter:
          min_area_only: true
        construction:
          sort_metric: depth
    "#;

    let config = LayoutConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.position_step, 1);
    assert_eq!(config.part_ordering, PartOrdering::Difficulty);
    assert!(config.orientation_filter.min_area_only);
    assert!(config.random_initializer.is_none());
    assert_eq!(config.construction.unwrap().sort_metric, SortMetric::Depth);
}

#[test]
fn test_defaults() {
    let config = LayoutConfig::from_toml_str("").unwrap();
    assert_eq!(config.random_seed, None);
    assert_eq!(config.effective_seed(), 0);
    assert_eq!(config.position_step, 1);
    assert_eq!(config.part_ordering, PartOrdering::AllowedSides);
    assert_eq!(config.orientation_filter, OrientationFilterConfig::default());
    assert_eq!(config.hint_initializer, HintInitializerConfig::default());
    assert!(config.side_ordering);
    assert!(config.construction.is_none());
}

#[test]
fn test_zero_step_is_rejected() {
    let err = LayoutConfig::from_toml_str("position_step = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(LayoutConfig::new().with_position_step(0).validate().is_err());
}

#[test]
fn test_unknown_ordering_is_a_parse_error() {
    let err = LayoutConfig::from_toml_str(r#"part_ordering = "largest_first""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = LayoutConfig::load("/nonexistent/layout.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_picks_format_by_extension() {
    let dir = std::env::temp_dir().join(format!("loadplan-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml = dir.join("layout.yml");
    std::fs::write(&yaml, "position_step: 3\n").unwrap();
    assert_eq!(LayoutConfig::load(&yaml).unwrap().position_step, 3);

    let toml = dir.join("layout.toml");
    std::fs::write(&toml, "position_step = 7\n").unwrap();
    assert_eq!(LayoutConfig::load(&toml).unwrap().position_step, 7);

    // YAML syntax under a TOML name is parsed as TOML.
    let misnamed = dir.join("layout.conf");
    std::fs::write(&misnamed, "position_step: 3\n").unwrap();
    assert!(matches!(
        LayoutConfig::load(&misnamed),
        Err(ConfigError::Toml(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_builder() {
    let config = LayoutConfig::new()
        .with_random_seed(123)
        .with_position_step(4)
        .with_part_ordering(PartOrdering::MinArea)
        .with_random_initializer(RandomInitializerConfig::default())
        .with_construction(ConstructionConfig::default())
        .with_side_ordering(false);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.position_step, 4);
    assert_eq!(config.part_ordering, PartOrdering::MinArea);
    assert!(config.random_initializer.is_some());
    assert_eq!(
        config.construction.unwrap().sort_metric,
        SortMetric::MinAllowedArea
    );
    assert!(!config.side_ordering);
    assert!(config.validate().is_ok());
}
