//! Integration tests for loading content trees and starting loadouts from disk.

use std::fs;
use std::path::{Path, PathBuf};

use gunchete_content::{
    load_starting_loadout, ArmorSlot, ConsumableGrant, ContentError, ItemKind, Registry,
    StartingLoadoutOverride, Team,
};

fn temp_content_dir(name: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("gunchete_{name}_{id}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn write_valid_tree(root: &Path) {
    write(
        root,
        "weapons/pistol.toml",
        r#"
        id = "pistol"
        name = "9mm Pistol"
        damage_dice = "1d6"
        damage_type = "piercing"
        range_increment = 30
        reload_actions = 1
        magazine_capacity = 15
        firing_modes = ["single"]
        "#,
    );
    write(
        root,
        "armor/kevlar_vest.toml",
        r#"
        id = "kevlar_vest"
        name = "Kevlar Vest"
        slot = "torso"
        ac_bonus = 3
        dex_cap = 2
        check_penalty = -1
        speed_penalty = 5
        group = "composite"
        "#,
    );
    write(
        root,
        "explosives/frag.toml",
        r#"
        id = "frag"
        name = "Frag Grenade"
        damage_dice = "3d6"
        damage_type = "piercing"
        area_type = "burst"
        save_type = "reflex"
        save_dc = 15
        fuse = "delayed"
        "#,
    );
    write(
        root,
        "items/pistol_item.toml",
        r#"
        id = "pistol_item"
        name = "9mm Pistol"
        kind = "weapon"
        weight = 2.0
        weapon_ref = "pistol"
        "#,
    );
    write(
        root,
        "items/vest_item.toml",
        r#"
        id = "vest_item"
        name = "Kevlar Vest"
        kind = "armor"
        weight = 6.0
        armor_ref = "kevlar_vest"
        "#,
    );
    write(
        root,
        "items/frag_item.toml",
        r#"
        id = "frag_item"
        name = "Frag Grenade"
        kind = "explosive"
        weight = 1.0
        explosive_ref = "frag"
        stackable = true
        max_stack = 5
        "#,
    );
}

#[test]
fn test_load_valid_tree() {
    let root = temp_content_dir("valid");
    write_valid_tree(&root);
    // Non-TOML files are ignored
    write(&root, "items/README.md", "not content");

    let registry = Registry::load_dir(&root).unwrap();

    assert_eq!(registry.item_count(), 3);
    assert_eq!(registry.weapon("pistol").unwrap().magazine_capacity, 15);
    assert_eq!(registry.armor("kevlar_vest").unwrap().dex_cap, Some(2));
    assert_eq!(registry.explosive("frag").unwrap().save_dc, 15);
    assert_eq!(registry.item("frag_item").unwrap().kind, ItemKind::Explosive);
    assert_eq!(
        registry.item_by_armor_ref("kevlar_vest").unwrap().id,
        "vest_item"
    );

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_load_rejects_invalid_definition() {
    let root = temp_content_dir("invalid");
    write_valid_tree(&root);
    write(
        &root,
        "armor/broken.toml",
        r#"
        id = "broken"
        name = "Broken Plate"
        slot = "torso"
        ac_bonus = -2
        group = ""
        "#,
    );

    match Registry::load_dir(&root) {
        Err(ContentError::Validation { kind, id, reasons }) => {
            assert_eq!(kind, "armor");
            assert_eq!(id, "broken");
            assert_eq!(reasons.len(), 2);
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_load_rejects_duplicate_id() {
    let root = temp_content_dir("duplicate");
    write_valid_tree(&root);
    write(
        &root,
        "weapons/pistol_copy.toml",
        r#"
        id = "pistol"
        name = "Other Pistol"
        damage_dice = "1d4"
        damage_type = "piercing"
        "#,
    );

    assert!(matches!(
        Registry::load_dir(&root),
        Err(ContentError::DuplicateId { kind: "weapon", .. })
    ));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_load_rejects_dangling_reference() {
    let root = temp_content_dir("dangling");
    write_valid_tree(&root);
    write(
        &root,
        "items/ghost.toml",
        r#"
        id = "ghost"
        name = "Ghost Helmet"
        kind = "armor"
        armor_ref = "nowhere"
        "#,
    );

    assert_eq!(
        Registry::load_dir(&root).unwrap_err(),
        ContentError::DanglingReference {
            item_id: "ghost".to_string(),
            kind: "armor",
            reference: "nowhere".to_string(),
        }
    );

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_load_reports_parse_error() {
    let root = temp_content_dir("parse");
    write(&root, "items/bad.toml", "id = ");

    assert!(matches!(
        Registry::load_dir(&root),
        Err(ContentError::Parse { .. })
    ));

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_starting_loadout_merge_order() {
    let root = temp_content_dir("loadout");
    write(
        &root,
        "brawler.toml",
        r#"
        [base]
        weapon = "machete_item"
        currency = 50
        consumables = [{ item = "bandage", quantity = 2 }]

        [base.armor]
        torso = "leather_jacket"
        feet = "boots"

        [team_gun]
        weapon = "pistol_item"

        [team_gun.armor]
        torso = "vest_item"

        [team_machete]
        currency = 75
        "#,
    );

    let base_only = load_starting_loadout(&root, "brawler", None, None).unwrap();
    assert_eq!(base_only.weapon.as_deref(), Some("machete_item"));
    assert_eq!(base_only.currency, 50);

    let gun = load_starting_loadout(&root, "brawler", Some(Team::Gun), None).unwrap();
    assert_eq!(gun.weapon.as_deref(), Some("pistol_item"));
    assert_eq!(gun.armor.get(&ArmorSlot::Torso).map(String::as_str), Some("vest_item"));
    assert_eq!(gun.armor.get(&ArmorSlot::Feet).map(String::as_str), Some("boots"));
    assert_eq!(gun.currency, 50);

    let job = StartingLoadoutOverride {
        consumables: vec![ConsumableGrant {
            item_id: "stim".to_string(),
            quantity: 1,
        }],
        currency: 100,
        ..StartingLoadoutOverride::default()
    };
    let machete = load_starting_loadout(&root, "brawler", Some(Team::Machete), Some(&job)).unwrap();
    assert_eq!(machete.weapon.as_deref(), Some("machete_item"));
    assert_eq!(machete.currency, 100);
    assert_eq!(machete.consumables, job.consumables);

    fs::remove_dir_all(&root).ok();
}

#[test]
fn test_starting_loadout_missing_archetype() {
    let root = temp_content_dir("missing");
    assert!(matches!(
        load_starting_loadout(&root, "nobody", Some(Team::Gun), None),
        Err(ContentError::Io { .. })
    ));
    fs::remove_dir_all(&root).ok();
}
