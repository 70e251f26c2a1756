//! # Description Module
//!
//! Generates the one-sentence description stamped into each header. The
//! sentence is derived from the path alone: the file's stem becomes a
//! readable name, and the directories it lives in pick the sentence.
//!
//! ```rust
//! use headerstamp::description::generate_description;
//!
//! assert_eq!(
//!   generate_description("src/components/UserCard.vue"),
//!   "Vue component for User Card."
//! );
//! assert_eq!(
//!   generate_description("src/widgets/index.ts"),
//!   "Entry point for the widgets module."
//! );
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// A directory hint and the sentence it produces.
///
/// `{name}` in the template is replaced with the readable name.
pub struct DescriptionRule {
  /// Regex matched case-insensitively against the `/`-normalized path
  pub pattern: &'static str,
  pub template: &'static str,
}

/// Directory-hint rules, evaluated in order. The first match wins, so a path
/// under both `components/` and `__tests__/` describes a component.
pub const DESCRIPTION_RULES: &[DescriptionRule] = &[
  DescriptionRule {
    pattern: r"views?/",
    template: "Vue view component for the {name} page.",
  },
  DescriptionRule {
    pattern: r"layouts?/",
    template: "Vue layout component for {name}.",
  },
  DescriptionRule {
    pattern: r"components?/",
    template: "Vue component for {name}.",
  },
  DescriptionRule {
    pattern: r"pages?/",
    template: "Page component for {name}.",
  },
  DescriptionRule {
    pattern: r"composables?/",
    template: "Vue composable providing {name} logic.",
  },
  DescriptionRule {
    pattern: r"stores?/",
    template: "Pinia/Vuex store module for {name}.",
  },
  DescriptionRule {
    pattern: r"router",
    template: "Application routing configuration.",
  },
  DescriptionRule {
    pattern: r"services?/",
    template: "Service layer handling {name} operations.",
  },
  DescriptionRule {
    pattern: r"api/",
    template: "API client for {name} endpoints.",
  },
  DescriptionRule {
    pattern: r"utils?/",
    template: "Utility functions for {name}.",
  },
  DescriptionRule {
    pattern: r"helpers?/",
    template: "Helper functions for {name}.",
  },
  DescriptionRule {
    pattern: r"types?/",
    template: "TypeScript type definitions for {name}.",
  },
  DescriptionRule {
    pattern: r"interfaces?/",
    template: "TypeScript interfaces for {name}.",
  },
  DescriptionRule {
    pattern: r"models?/",
    template: "Data model definitions for {name}.",
  },
  DescriptionRule {
    pattern: r"middlewares?/",
    template: "Middleware for {name}.",
  },
  DescriptionRule {
    pattern: r"plugins?/",
    template: "Plugin configuration for {name}.",
  },
  DescriptionRule {
    pattern: r"config",
    template: "Configuration file for {name}.",
  },
  DescriptionRule {
    pattern: r"(__tests__|tests?|spec)/",
    template: "Test suite for {name}.",
  },
];

/// Extensions whose `index` file is described as a module entry point.
const INDEX_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "vue"];

/// Stem prefixes that mark the application entry file.
const ENTRY_PREFIXES: &[&str] = &["main.", "app."];

const ENTRY_POINT_DESCRIPTION: &str = "Application entry point.";

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
  DESCRIPTION_RULES
    .iter()
    .map(|rule| {
      let regex = Regex::new(&format!("(?i){}", rule.pattern)).expect("description rule regex must compile");
      (regex, rule.template)
    })
    .collect()
});

static CAMEL_BOUNDARY: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel-case regex must compile"));

/// Turns a file or directory stem into space-separated words.
///
/// `-` and `_` become spaces and a space is inserted at each lower-to-upper
/// case boundary. Casing is otherwise preserved.
pub fn readable_name(stem: &str) -> String {
  let spaced = stem.replace(['-', '_'], " ");
  CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2").trim().to_string()
}

/// Generates a human-readable description for the file at `path`.
///
/// Resolution order: `index` entry files, application entry files, the
/// ordered [`DESCRIPTION_RULES`], then an extension-keyed fallback. An empty
/// readable name still yields a sentence.
pub fn generate_description(path: impl AsRef<Path>) -> String {
  let path = path.as_ref();
  let file_name = file_name_str(path);
  let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
  let extension = path
    .extension()
    .map(|e| e.to_string_lossy().to_lowercase())
    .unwrap_or_default();

  if stem.eq_ignore_ascii_case("index") && INDEX_EXTENSIONS.contains(&extension.as_str()) {
    let parent = path
      .parent()
      .and_then(Path::file_name)
      .map(|p| p.to_string_lossy())
      .unwrap_or_default();
    return format!("Entry point for the {} module.", readable_name(&parent));
  }

  let lower = file_name.to_lowercase();
  if ENTRY_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
    return ENTRY_POINT_DESCRIPTION.to_string();
  }

  let name = readable_name(&stem);

  // Only rule matching sees `\` as a separator
  let normalized = path.to_string_lossy().replace('\\', "/");
  if let Some((_, template)) = COMPILED_RULES.iter().find(|(regex, _)| regex.is_match(&normalized)) {
    return template.replace("{name}", &name);
  }

  fallback_description(&extension, &name)
}

/// Extension-keyed sentence used when no directory hint matches.
fn fallback_description(extension: &str, name: &str) -> String {
  match extension {
    "vue" => format!("Vue component for {name}."),
    "ts" | "tsx" => format!("TypeScript module for {name}."),
    "js" | "jsx" => format!("JavaScript module for {name}."),
    _ => format!("Source file for {name}."),
  }
}

fn file_name_str(path: &Path) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_readable_name() {
    assert_eq!(readable_name("UserProfileCard"), "User Profile Card");
    assert_eq!(readable_name("user-profile_card"), "user profile card");
    assert_eq!(readable_name("useAuthStore"), "use Auth Store");
    assert_eq!(readable_name("HTTPClient"), "HTTPClient");
    assert_eq!(readable_name("_private_"), "private");
    assert_eq!(readable_name(""), "");
  }

  #[test]
  fn test_index_file_uses_parent_directory() {
    assert_eq!(
      generate_description("src/widgets/index.ts"),
      "Entry point for the widgets module."
    );
    assert_eq!(
      generate_description("src/user-settings/INDEX.vue"),
      "Entry point for the user settings module."
    );
    assert_eq!(
      generate_description("src/components/authForms/index.js"),
      "Entry point for the auth Forms module."
    );
  }

  #[test]
  fn test_index_file_without_parent() {
    assert_eq!(generate_description("index.ts"), "Entry point for the  module.");
  }

  #[test]
  fn test_entry_marker() {
    assert_eq!(generate_description("app.ts"), "Application entry point.");
    assert_eq!(generate_description("src/deep/views/main.js"), "Application entry point.");
    assert_eq!(generate_description("src/App.vue"), "Application entry point.");
    assert_eq!(generate_description("src/app.config.ts"), "Application entry point.");
  }

  #[test]
  fn test_entry_marker_needs_dot() {
    assert_eq!(generate_description("src/application.ts"), "TypeScript module for application.");
  }

  #[test]
  fn test_directory_rules() {
    let cases = [
      ("src/views/UserProfile.vue", "Vue view component for the User Profile page."),
      ("src/layouts/DefaultLayout.vue", "Vue layout component for Default Layout."),
      ("src/components/UserCard.vue", "Vue component for User Card."),
      ("src/pages/about.vue", "Page component for about."),
      ("src/composables/useFetch.ts", "Vue composable providing use Fetch logic."),
      ("src/stores/cart.ts", "Pinia/Vuex store module for cart."),
      ("src/router/routes.ts", "Application routing configuration."),
      ("src/services/payment-gateway.ts", "Service layer handling payment gateway operations."),
      ("src/api/users.ts", "API client for users endpoints."),
      ("src/utils/format_date.ts", "Utility functions for format date."),
      ("src/helpers/dom.ts", "Helper functions for dom."),
      ("src/types/user.ts", "TypeScript type definitions for user."),
      ("src/interfaces/IUser.ts", "TypeScript interfaces for IUser."),
      ("src/models/Order.ts", "Data model definitions for Order."),
      ("src/middlewares/auth.ts", "Middleware for auth."),
      ("src/plugins/i18n.ts", "Plugin configuration for i18n."),
      ("src/config/env.ts", "Configuration file for env."),
      ("tests/math.ts", "Test suite for math."),
      ("src/spec/parser.ts", "Test suite for parser."),
    ];

    for (path, expected) in cases {
      assert_eq!(generate_description(path), expected, "path: {path}");
    }
  }

  #[test]
  fn test_rule_order_first_match_wins() {
    // Both `components/` and `__tests__/` match; components comes first.
    assert_eq!(
      generate_description("src/components/__tests__/Foo.ts"),
      "Vue component for Foo."
    );
    // `stores/` precedes `router`.
    assert_eq!(
      generate_description("src/stores/router.ts"),
      "Pinia/Vuex store module for router."
    );
  }

  #[test]
  fn test_rules_are_case_insensitive() {
    assert_eq!(
      generate_description("src/Components/Button.vue"),
      "Vue component for Button."
    );
  }

  #[test]
  fn test_backslash_paths_match_rules() {
    assert!(generate_description(r"src\services\auth.ts").starts_with("Service layer handling "));
    assert!(generate_description(r"src\Components\Button.vue").starts_with("Vue component for "));
  }

  #[cfg(unix)]
  #[test]
  fn test_backslash_in_file_name_kept_in_name() {
    assert_eq!(
      generate_description(r"src/odd\name.ts"),
      r"TypeScript module for odd\name."
    );
  }

  #[test]
  fn test_pattern_without_separator_matches_file_name() {
    assert_eq!(
      generate_description("vite.config.ts"),
      "Configuration file for vite.config."
    );
  }

  #[test]
  fn test_extension_fallback() {
    assert_eq!(generate_description("foo.tsx"), "TypeScript module for foo.");
    assert_eq!(generate_description("src/fooBar.ts"), "TypeScript module for foo Bar.");
    assert_eq!(generate_description("lib/Widget.vue"), "Vue component for Widget.");
    assert_eq!(generate_description("lib/legacy.jsx"), "JavaScript module for legacy.");
    assert_eq!(generate_description("lib/styles.css"), "Source file for styles.");
    assert_eq!(generate_description("lib/Makefile"), "Source file for Makefile.");
  }

  #[test]
  fn test_empty_readable_name() {
    assert_eq!(generate_description("src/__.ts"), "TypeScript module for .");
  }

  #[test]
  fn test_deterministic() {
    let path = "src/components/forms/LoginForm.vue";
    assert_eq!(generate_description(path), generate_description(path));
  }
}
