use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
// Import the public API
use headerstamp::config::Config;
use headerstamp::description::generate_description;
use headerstamp::detection::already_has_header;
use headerstamp::processor::{Processor, apply};
use headerstamp::report::{FileAction, RunSummary};
use headerstamp::templates::{HeaderKind, Marker, TemplateDocument, resolve};
use tempfile::tempdir;

fn config() -> Config {
  let vars: HashMap<String, String> = [
    ("HEADER_AUTHOR", "API Tester"),
    ("HEADER_COMPANY", "Initech"),
    ("HEADER_YEAR", "2024"),
    ("HEADER_EXTENSIONS", ".ts,.vue"),
    ("HEADER_EXCLUDE_DIRS", "node_modules,dist"),
  ]
  .into_iter()
  .map(|(k, v)| (k.to_string(), v.to_string()))
  .collect();
  Config::from_map(&vars)
}

#[test]
fn test_public_api() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  fs::create_dir_all(root.join("src/stores"))?;
  fs::create_dir_all(root.join("dist"))?;
  fs::write(root.join("src/stores/cart.ts"), "export const useCart = () => {};\n")?;
  fs::write(root.join("src/App.vue"), "<template><main/></template>\n")?;
  fs::write(root.join("dist/bundle.ts"), "bundled\n")?;

  let processor = Processor::new(config(), TemplateDocument::builtin()?);
  let files = processor.collect_files(root)?;
  assert_eq!(files, vec![root.join("src/App.vue"), root.join("src/stores/cart.ts")]);

  let mut actions = Vec::new();
  let summary = processor.process_files(&files, |outcome| actions.push(outcome.action))?;
  assert_eq!(actions, vec![FileAction::Added, FileAction::Added]);
  assert_eq!(
    summary,
    RunSummary {
      total: 2,
      added: 2,
      skipped: 0,
      missing: 0
    }
  );

  let app = fs::read_to_string(root.join("src/App.vue"))?;
  assert!(app.starts_with("<!--\n/**\nFile Name: App.vue\nAuthor: API Tester\nDescription: Application entry point.\n"));

  let cart = fs::read_to_string(root.join("src/stores/cart.ts"))?;
  assert!(cart.contains("Description: Pinia/Vuex store module for cart.\n"));
  assert!(cart.contains("Copyright (c) 2024 Initech\n"));
  assert!(cart.ends_with("*/\n\nexport const useCart = () => {};\n"));

  assert_eq!(fs::read_to_string(root.join("dist/bundle.ts"))?, "bundled\n");

  // A second run leaves everything in place
  let summary = processor.process_files(&files, |_| {})?;
  assert_eq!(summary.skipped, 2);
  assert_eq!(fs::read_to_string(root.join("src/stores/cart.ts"))?, cart);

  Ok(())
}

#[test]
fn test_header_resolution_is_deterministic() -> Result<()> {
  let templates = TemplateDocument::builtin()?;
  let config = config();
  let path = Path::new("src/views/Dashboard.vue");

  let first = templates.render(Marker::Header, path, &config);
  let second = templates.render(Marker::Header, path, &config);
  assert_eq!(first, second);
  assert!(first.contains("Description: Vue view component for the Dashboard page.\n"));

  let lines = templates.get(HeaderKind::Markup, Marker::Header);
  assert_eq!(resolve(lines, path, &config), first);

  Ok(())
}

#[test]
fn test_unknown_tokens_are_kept() -> Result<()> {
  let templates = TemplateDocument::parse(
    r#"{
      "header": ["/* {{FILE_NAME}} {{LICENSE}} */", ""],
      "vueHeader": ["<!-- {{FILE_NAME}} -->", ""],
      "isHeader": ["/* {{FILE_NAME}}"],
      "isVueHeader": ["<!-- {{FILE_NAME}}"]
    }"#,
    "inline",
  )?;

  let header = templates.render(Marker::Header, Path::new("a.ts"), &config());
  assert_eq!(header, "/* a.ts {{LICENSE}} */\n\n");

  Ok(())
}

#[test]
fn test_legacy_header_is_never_restamped() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("legacy.ts");
  let legacy = "/*\nFile Name: legacy.ts\nAuthor: Someone Else\nDescription: Old.\nCopyright (c) 2019 Other\n*/\n\nexport {};\n";
  fs::write(&path, legacy)?;

  let templates = TemplateDocument::builtin()?;
  assert!(already_has_header(legacy, &path, &config(), &templates));

  let outcome = apply(&path, &config(), &templates)?;
  assert_eq!(outcome.action, FileAction::Skipped);
  assert_eq!(fs::read_to_string(&path)?, legacy);

  Ok(())
}

#[test]
fn test_description_priority_order() {
  // components/ is listed before the test directory hints
  assert_eq!(
    generate_description("src/components/__tests__/Button.ts"),
    "Vue component for Button."
  );
  assert_eq!(
    generate_description("src/pages/users/index.ts"),
    "Entry point for the users module."
  );
  assert_eq!(generate_description("src/main.ts"), "Application entry point.");
}
