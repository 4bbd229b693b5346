//! Integration tests for the CLI commands

use aidkit::config::ControllerSettings;
use aidkit::writer::{FileStatus, WriteMode};
use aidkit::StaticTables;
use aidkit_cli_lib::commands::controllers::generate_controllers;
use aidkit_cli_lib::{ControllersCommand, ReorganizeCommand, ScaffoldCommand};
use std::fs;
use tempfile::TempDir;

fn settings(temp: &TempDir) -> ControllerSettings {
    ControllerSettings {
        routes_dir: temp.path().join("routes"),
        output_dir: temp.path().join("controllers"),
        ..ControllerSettings::default()
    }
}

#[test]
fn test_generate_controllers_writes_one_file_per_route() {
    let temp = TempDir::new().unwrap();
    let settings = settings(&temp);
    fs::create_dir_all(&settings.routes_dir).unwrap();
    fs::write(
        settings.routes_dir.join("services.js"),
        "router.get('/', list);\nrouter.post('/request', create);\n",
    )
    .unwrap();

    let outcomes = generate_controllers(&settings, WriteMode::Write).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(settings.output_dir.join("indexController.js").is_file());
    assert!(settings.output_dir.join("requestController.js").is_file());
}

#[test]
fn test_generate_controllers_dry_run() {
    let temp = TempDir::new().unwrap();
    let settings = settings(&temp);
    fs::create_dir_all(&settings.routes_dir).unwrap();
    fs::write(settings.routes_dir.join("users.js"), "router.get('/users/:id', h);").unwrap();

    let outcomes = generate_controllers(&settings, WriteMode::DryRun).unwrap();

    assert_eq!(outcomes[0].status, FileStatus::Created);
    assert!(!settings.output_dir.exists());
}

#[test]
fn test_generate_controllers_missing_routes_dir() {
    let temp = TempDir::new().unwrap();
    let err = generate_controllers(&settings(&temp), WriteMode::Write).unwrap_err();
    assert!(err.to_string().contains("Failed to read route files"));
}

fn preset(select: &str) -> ControllersCommand {
    ControllersCommand {
        select: Some(select.to_string()),
        ..ControllersCommand::default()
    }
}

#[tokio::test]
async fn test_pick_tables_with_preset_selection() {
    let source = StaticTables(vec![
        "users".to_string(),
        "services".to_string(),
        "events".to_string(),
    ]);

    let selected = preset("3, 1").pick_tables(&source).await.unwrap();
    assert_eq!(selected, vec!["events", "users"]);

    let err = preset("users").pick_tables(&source).await.unwrap_err();
    assert!(format!("{err:#}").contains("Invalid table selection"));
}

#[tokio::test]
async fn test_pick_tables_from_empty_source() {
    let err = preset("1").pick_tables(&StaticTables(Vec::new())).await.unwrap_err();
    assert!(format!("{err:#}").contains("out of range"));
}

#[test]
fn test_scaffold_command_writes_tree() {
    let temp = TempDir::new().unwrap();

    let report = ScaffoldCommand::new(temp.path().to_path_buf(), false)
        .execute()
        .unwrap();

    assert!(report.directories.iter().all(|d| d.created));
    assert!(temp.path().join("src/app/pages/index.jsx").is_file());
    assert!(temp.path().join("tailwind.config.js").is_file());
}

#[test]
fn test_reorganize_command_moves_components() {
    let temp = TempDir::new().unwrap();
    let components = temp.path().join("src/components");
    fs::create_dir_all(&components).unwrap();
    fs::write(components.join("Navbar.jsx"), "export default function Navbar() {}\n").unwrap();
    fs::write(
        temp.path().join("src/page.jsx"),
        "import Navbar from '../components/Navbar';\n",
    )
    .unwrap();

    let report = ReorganizeCommand::new(temp.path().to_path_buf(), false)
        .execute()
        .unwrap();

    assert_eq!(report.moved.len(), 1);
    assert!(components.join("common/Navbar.jsx").is_file());
    assert_eq!(
        fs::read_to_string(temp.path().join("src/page.jsx")).unwrap(),
        "import Navbar from '../components/common/Navbar';\n"
    );

    let again = ReorganizeCommand::new(temp.path().to_path_buf(), false)
        .execute()
        .unwrap();
    assert!(again.moved.is_empty());
    assert!(again.rewritten.is_empty());
}
