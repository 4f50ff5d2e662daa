//! Integration tests for catalog resolution, templates and scene sessions.
//!
//! These run the public API against the JSON fixtures the way a front end
//! would: load a catalog database and template set, then drive a Studio.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use roomtint::config::angle::circular_distance;
use roomtint::{
    apply_template, generate_harmony, normalize_hex, open_studio, AccentTarget, CatalogMap, Color, Hsl,
    PaletteError, Studio, StudioConfig, Target, Template, TemplateSet,
};
use std::path::{Path, PathBuf};

/// Fixture directory for integration tests
const FIXTURE_DIR: &str = "tests/fixtures";

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURE_DIR).join(name)
}

fn studio() -> Studio {
    open_studio(
        Some(&fixture("catalogs.json")),
        Some(&fixture("templates.json")),
        None,
    )
    .expect("fixtures load")
}

fn hexes(colors: &[Color]) -> String {
    colors.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

// ==================== Catalog Loading ====================

#[test]
fn test_catalog_fixture_filtering() {
    let config = StudioConfig::default();
    let map = CatalogMap::from_file(&fixture("catalogs.json"), &config.allowed()).unwrap();

    assert_eq!(map.names(), vec!["ral", "dulux", "iceparade"]);
    assert_eq!(map.get("RAL").unwrap().len(), 6);
    // "bad" has no valid hex
    assert_eq!(map.get("dulux").unwrap().len(), 2);
    assert!(map.get("ncs").is_none());
}

#[test]
fn test_restricted_allowed_catalogs() {
    let map = CatalogMap::from_file(&fixture("catalogs.json"), &["iceparade", "dulux"]).unwrap();
    assert_eq!(map.names(), vec!["iceparade", "dulux"]);

    let resolved = map.resolve_color_by_code("1234", None).unwrap();
    assert_eq!(resolved.catalog, "iceparade");
}

// ==================== Code Resolution ====================

#[test]
fn test_qualified_code_is_binding() {
    let studio = studio();
    let catalogs = studio.catalogs();

    // Dulux and Ice Parade carry 1234, RAL does not
    assert!(catalogs.resolve_color_by_code("ral:1234", None).is_none());
    assert_eq!(
        catalogs.resolve_color_by_code("iceparade:1234", None).unwrap().hex.to_string(),
        "#123456"
    );
}

#[test]
fn test_bare_code_priority() {
    let studio = studio();
    let resolved = studio.catalogs().resolve_color_by_code("1234", None).unwrap();
    assert_eq!(resolved.catalog, "dulux");
    assert_eq!(resolved.hex.to_string(), "#AABBCC");
}

#[test]
fn test_resolution_variants() {
    let studio = studio();
    let cases = [
        ("RAL:9010", "ral", "#F1ECE1"),
        ("ral classic:7035", "ral", "#CBD0CC"),
        ("Dulux:sand-01", "dulux", "#E8D5B0"),
        ("IP-100", "iceparade", "#FFFFFF"),
        ("#abc", "manual", "#AABBCC"),
    ];
    for (input, catalog, hex) in cases {
        let resolved = studio.resolve(input, None).unwrap();
        assert_eq!((resolved.catalog.as_str(), resolved.hex.to_string()), (catalog, hex.to_string()), "{}", input);
    }
    assert!(matches!(studio.resolve("9999", None), Err(PaletteError::InvalidColor { .. })));
}

// ==================== Color Codec ====================

#[test]
fn test_normalize_idempotent() {
    for value in (0u32..0x100_0000).step_by(0x1F3D7) {
        let hex = format!("#{:06X}", value);
        let once = normalize_hex(&hex).unwrap();
        assert_eq!(once.to_string(), hex);
        assert_eq!(normalize_hex(&once.to_string()), Some(once));
    }
}

// ==================== Harmony ====================

#[test]
fn test_red_similar_property() {
    let red = normalize_hex("#FF0000").unwrap();
    let set = generate_harmony(red);
    assert_eq!(set.similar.len(), 4);
    assert!(set.similar.iter().all(|c| *c != red));
    assert!(set
        .similar
        .iter()
        .all(|c| circular_distance(Hsl::from(*c).h, 0.0) <= 25.0));
}

#[test]
fn test_catalog_harmony_from_session() {
    let mut studio = studio();
    studio.apply_color(Target::Wall, "#C00000", None).unwrap();
    let snapshot = studio.generate_catalog_harmony("ral").unwrap();
    let set = snapshot.suggestions.expect("harmony ran");

    assert_eq!(set.similar.len(), 5);
    assert_eq!(set.similar[0].to_string(), "#CC0605");
    assert!(!set.similar.contains(&normalize_hex("#C00000").unwrap()));
    assert_eq!(set.monochrome, None);
}

// ==================== Templates ====================

#[test]
fn test_template_ratio_scenarios() {
    let furniture = Template::new("t", "#112233", "#445566", "#778899", AccentTarget::Furniture);
    let assignment = apply_template(&furniture, 4).unwrap();
    assert_eq!(hexes(&assignment.walls), "#112233 #112233 #445566");
    assert_eq!(assignment.furniture.unwrap().to_string(), "#778899");

    let wall = Template {
        accent_target: AccentTarget::Wall,
        ..furniture
    };
    let assignment = apply_template(&wall, 4).unwrap();
    assert_eq!(hexes(&assignment.walls), "#112233 #112233 #445566 #778899");
    assert_eq!(assignment.furniture, None);
}

#[test]
fn test_apply_fixture_templates() {
    let mut studio = studio();

    let snapshot = studio.apply_template("scandi_light").unwrap();
    assert_eq!(snapshot.section_count, 3);
    assert_eq!(hexes(&snapshot.walls), "#E8E3DA #E8E3DA #BFC9D9");
    assert_eq!(snapshot.furniture.to_string(), "#355070");

    let snapshot = studio.apply_template("urban_green").unwrap();
    assert_eq!(snapshot.section_count, 4);
    assert_eq!(hexes(&snapshot.walls), "#CBD5C0 #CBD5C0 #8FA99A #2D4A3E");
    // Furniture keeps the previous template's accent
    assert_eq!(snapshot.furniture.to_string(), "#355070");
}

#[test]
fn test_invalid_template_is_a_no_op() {
    let mut studio = studio();
    studio.apply_template("scandi_light").unwrap();
    let before = studio.scene().clone();

    let result = studio.apply_template("broken_accent");
    assert!(matches!(result, Err(PaletteError::InvalidTemplate { .. })));
    assert_eq!(studio.scene(), &before);
}

#[test]
fn test_builtin_templates_match_fixture() {
    let from_file = TemplateSet::from_file(&fixture("templates.json")).unwrap();
    let builtin = TemplateSet::builtin();
    for key in builtin.keys() {
        assert_eq!(builtin.get(key), from_file.get(key), "{}", key);
    }
}

// ==================== Scene Invariants ====================

#[test]
fn test_section_count_clamping() {
    let mut studio = studio();
    assert_eq!(studio.set_section_count(0).section_count, 1);
    assert_eq!(studio.set_section_count(10).section_count, 4);

    studio.select_section(3);
    let snapshot = studio.set_section_count(2);
    assert_eq!(snapshot.active_section, 1);
}

#[test]
fn test_invalid_color_leaves_wall_unchanged() {
    let mut studio = studio();
    let before = studio.snapshot();
    let result = studio.apply_color(Target::Wall, "not-a-color", Some(0));
    assert!(result.is_err());
    assert_eq!(studio.snapshot(), before);
}

// ==================== Scripts ====================

#[test]
fn test_living_room_script() {
    let mut studio = studio();
    let content = std::fs::read_to_string(fixture("living_room.txt")).unwrap();
    let snapshot = studio.run_script(&content).unwrap();

    assert_snapshot!(hexes(&snapshot.walls), @"#F1ECE1 #E8D5B0 #AABBCC #2271B3");
    assert_eq!(snapshot.active_section, 3);
    assert_eq!(snapshot.furniture.to_string(), "#FFFFFF");
    assert_eq!(snapshot.lighting.temperature, 20);
    assert_eq!(snapshot.lighting.brightness, 80);

    let suggestions = snapshot.suggestions.expect("harmony ran");
    assert_eq!(suggestions, generate_harmony(normalize_hex("#2271B3").unwrap()));
}

#[test]
fn test_snapshot_serializes_for_renderer() {
    let mut studio = studio();
    studio.apply_template("urban_green").unwrap();
    let json = serde_json::to_value(studio.snapshot()).unwrap();

    assert_eq!(json["sectionCount"], 4);
    assert_eq!(json["walls"][3], "#2D4A3E");
    assert_eq!(json["gradient"][1]["start"], 25.0);
    assert_eq!(json["lighting"]["mode"], "neutral");
}

// ==================== Session Loading ====================

#[test]
fn test_open_studio_with_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("roomtint.json");
    std::fs::write(
        &config_path,
        r##"{"defaultWallColor": "#fafafa", "allowedCatalogs": ["iceparade"], "includeMonochrome": false}"##,
    )
    .unwrap();

    let mut studio = open_studio(Some(&fixture("catalogs.json")), None, Some(&config_path)).unwrap();
    assert_eq!(studio.catalogs().names(), vec!["iceparade"]);
    assert_eq!(studio.snapshot().walls[0].to_string(), "#FAFAFA");
    assert!(studio.templates().get("scandi_light").is_some());
    let snapshot = studio.generate_harmony();
    assert_eq!(snapshot.suggestions.expect("harmony ran").monochrome, None);

    let red = normalize_hex("#FF0000").unwrap();
    assert_eq!(studio.suggest(red, None, 0).unwrap().monochrome, None);
}

#[test]
fn test_open_studio_missing_file() {
    let result = open_studio(Some(Path::new("tests/fixtures/missing.json")), None, None);
    assert!(matches!(result, Err(PaletteError::FileNotFound { .. })));
}
