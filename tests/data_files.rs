use std::fs;
use std::path::Path;

use rpg_kit::data::{self, Category, DataFormat, DataLoadable, lookup_in};
use rpg_kit::{Character, Describable, Leveling, Settings};
use tempfile::TempDir;

const ENEMIES_JSON: &str = r#"
{
    "enemies": {
        "1": { "name": "Rat", "health": 4, "attack": 1 },
        "2": { "name": "Bandit", "health": 20, "attack": 5, "level": 3, "exp": 500, "max_level": 4 }
    }
}
"#;

const NPCS_TOML: &str = r#"
[NPCs.10]
name = "Innkeeper"
health = 15
exponent = 2.0
base_exp = 100
"#;

const ITEMS_JSON: &str = r#"
{
    "items": {
        "5": { "name": "Lantern", "lit": false, "weight": 1.5 }
    }
}
"#;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn json_dir() -> (TempDir, Settings) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "enemies.json", ENEMIES_JSON);
    write(dir.path(), "items.json", ITEMS_JSON);
    let settings = Settings::new().with_data_dir(dir.path());
    (dir, settings)
}

#[test]
fn loads_records_by_category_helpers() {
    let (_dir, settings) = json_dir();

    let rat = settings.get_enemy_by_id(1).unwrap();
    assert_eq!(rat["name"], "Rat");

    let lantern = settings.get_item_by_id(5).unwrap();
    assert_eq!(lantern["lit"], false);
}

#[test]
fn missing_id_is_not_found() {
    let (_dir, settings) = json_dir();
    let err = settings.get_enemy_by_id(42).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "no enemies record with id 42");
}

#[test]
fn missing_file_is_an_io_error() {
    let (_dir, settings) = json_dir();
    let err = settings.get_npc_by_id(1).unwrap_err();
    assert!(matches!(err, data::Error::Io { .. }));
}

#[test]
fn toml_files_work_through_settings_file() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "npcs.toml", NPCS_TOML);
    write(
        dir.path(),
        "settings.toml",
        &format!(
            "data_format = \"toml\"\ndata_dir = '{}'\n",
            dir.path().display()
        ),
    );

    let settings = Settings::load(&dir.path().join("settings.toml")).unwrap();
    let innkeeper = Character::load(&settings, Category::Npcs, 10).unwrap();

    assert_eq!(innkeeper.name, "Innkeeper");
    assert_eq!(innkeeper.next_level_threshold(), 100);

    let err = settings.get_entity_by_id(10).unwrap_err();
    assert!(matches!(err, data::Error::Io { .. }));
}

#[test]
fn explicit_lookup_with_wrong_format_fails_to_parse() {
    let (dir, _settings) = json_dir();
    let err = lookup_in(
        &dir.path().join("enemies.json"),
        DataFormat::Toml,
        Category::Enemies,
        1,
    )
    .unwrap_err();
    assert!(matches!(err, data::Error::Toml(_)));
}

#[test]
fn loaded_enemy_levels_up_to_its_cap() {
    let (_dir, settings) = json_dir();
    let mut bandit = Character::load(&settings, Category::Enemies, 2).unwrap();
    assert_eq!(bandit.level(), 3);

    // L3 needs 492; the cap of 4 stops further gains and silences the report
    let report = bandit.give_experience(10_000);
    assert_eq!(bandit.level(), 4);
    assert!(report.is_none());
    assert_eq!(bandit.experience(), 10_500);
}

#[test]
fn describe_loaded_character() {
    let (_dir, settings) = json_dir();
    let rat = Character::load(&settings, Category::Enemies, 1).unwrap();
    assert_eq!(
        rat.describe(),
        "Character(id=1, name=\"Rat\", health=4, attack=1, defence=0, \
         level=1, experience=0, exponent=1.6, base_exp=85, max_level=None)"
    );
}

#[test]
fn unknown_data_format_is_unsupported() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "items.yaml", "items: {}\n");
    write(
        dir.path(),
        "settings.toml",
        &format!(
            "data_format = \"yaml\"\ndata_dir = '{}'\n",
            dir.path().display()
        ),
    );

    let settings = Settings::load(&dir.path().join("settings.toml")).unwrap();
    let err = settings.get_item_by_id(1).unwrap_err();
    assert!(matches!(err, data::Error::UnsupportedFormat(ref s) if s == "yaml"));
    assert!(!err.is_not_found());
}

#[test]
fn explicit_toml_file_is_read_as_toml() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "people.toml", NPCS_TOML);
    let settings = Settings::new().with_file(Category::Npcs, dir.path().join("people.toml"));

    let innkeeper = settings.get_npc_by_id(10).unwrap();
    assert_eq!(innkeeper["name"], "Innkeeper");
}
