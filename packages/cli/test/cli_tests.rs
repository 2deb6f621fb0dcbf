//! CLI Tests
//!
//! Runs parsed command lines against resource and config files written to
//! the system temp directory.

use i18lite_cli::{build_command, run, Output};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

struct Fixture {
    dir: PathBuf,
}

impl Fixture {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("i18lite-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let resources = json!({
            "lt": {
                "translation": {
                    "greeting": "Sveiki!",
                    "welcome": "Sveiki, {{fullName}}!",
                    "count": "Turite {{n}} žinučių",
                    "profile_link": "<0>Sveiki, {{fullName}}!</0> <1>Tavo profilis</1>.",
                    "cartoon": "<0>Tom &amp; <i>Jerry</i></0>!"
                },
                "common": { "ok": "Gerai" }
            }
        });
        fs::write(dir.join("resources.json"), resources.to_string()).unwrap();
        Fixture { dir }
    }

    fn path(&self, file: &str) -> String {
        self.dir.join(file).to_string_lossy().into_owned()
    }

    fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        let resources = self.path("resources.json");
        let mut argv = vec!["i18lite", args[0], "--resources", resources.as_str()];
        argv.extend_from_slice(&args[1..]);
        let matches = build_command().try_get_matches_from(argv)?;
        run(&matches)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

mod translate {
    use super::*;

    #[test]
    fn should_translate_key() {
        let fixture = Fixture::new("t-simple");
        let output = fixture.run(&["t", "--lng", "lt", "greeting"]).unwrap();
        assert_eq!(output.text, "Sveiki!");
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn should_interpolate_set_values() {
        let fixture = Fixture::new("t-set");
        let output = fixture
            .run(&["t", "--lng", "lt", "--set", "fullName=John Doe", "welcome"])
            .unwrap();
        assert_eq!(output.text, "Sveiki, John Doe!");

        let output = fixture.run(&["t", "--lng", "lt", "--set", "n=3", "count"]).unwrap();
        assert_eq!(output.text, "Turite 3 žinučių");
    }

    #[test]
    fn should_use_namespace_and_default() {
        let fixture = Fixture::new("t-ns");
        let output = fixture.run(&["t", "--lng", "lt", "--ns", "common", "ok"]).unwrap();
        assert_eq!(output.text, "Gerai");

        let output = fixture
            .run(&["t", "--lng", "lt", "--default", "Fallback", "missing"])
            .unwrap();
        assert_eq!(output.text, "Fallback");
    }

    #[test]
    fn should_read_language_from_config() {
        let fixture = Fixture::new("t-config");
        let config = fixture.path("config.json");
        fs::write(&config, json!({ "lng": "lt", "keySeparator": false }).to_string()).unwrap();
        let output = fixture
            .run(&["t", "--config", config.as_str(), "greeting"])
            .unwrap();
        assert_eq!(output.text, "Sveiki!");
    }

    #[test]
    fn should_require_a_language() {
        let fixture = Fixture::new("t-nolng");
        let err = fixture.run(&["t", "greeting"]).unwrap_err();
        assert!(err.to_string().contains("no language given"));
    }

    #[test]
    fn should_reject_malformed_assignments() {
        let fixture = Fixture::new("t-badset");
        assert!(fixture
            .run(&["t", "--lng", "lt", "--set", "oops", "greeting"])
            .is_err());
    }
}

mod trans {
    use super::*;

    #[test]
    fn should_render_components_as_markup() {
        let fixture = Fixture::new("trans-components");
        let output = fixture
            .run(&[
                "trans",
                "--lng",
                "lt",
                "--set",
                "fullName=John",
                "--component",
                "0=strong",
                "--component",
                "1=a",
                "profile_link",
            ])
            .unwrap();
        assert_eq!(
            output.text,
            "<strong>Sveiki, John!</strong> <a>Tavo profilis</a>."
        );
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn should_keep_entities_and_nested_tags_in_components() {
        let fixture = Fixture::new("trans-nested");
        let output = fixture
            .run(&["trans", "--lng", "lt", "--component", "0=b", "cartoon"])
            .unwrap();
        assert_eq!(output.text, "<b>Tom &amp; <i>Jerry</i></b>!");
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn should_collapse_tags_without_components() {
        let fixture = Fixture::new("trans-plain");
        let output = fixture
            .run(&["trans", "--lng", "lt", "--set", "fullName=John", "profile_link"])
            .unwrap();
        assert_eq!(output.text, "Sveiki, John! Tavo profilis.");
    }

    #[test]
    fn should_warn_about_missing_translations() {
        let fixture = Fixture::new("trans-missing");
        let output = fixture.run(&["trans", "--lng", "lt", "nope"]).unwrap();
        assert_eq!(output.text, "");
        assert_eq!(output.warnings, vec!["no translation for key \"nope\"".to_string()]);
    }
}
