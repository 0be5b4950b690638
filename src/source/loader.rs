//! Config file loading

use super::file::FileFormat;
use crate::error::{Error, Result};
use crate::schema::OptionMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read `config_file` and decode it as a flat option mapping.
///
/// Nested tables/objects are kept as whole values; they are never merged
/// field by field.
pub fn load_file(config_file: &Path, format: &FileFormat) -> Result<OptionMap> {
    let content = fs::read_to_string(config_file)
        .map_err(|e| Error::config_file(config_file, format!("failed reading file: {e}")))?;

    let format = match format {
        FileFormat::Auto => FileFormat::detect(config_file),
        other => other.clone(),
    };

    let parsed = match &format {
        FileFormat::Json | FileFormat::Auto => parse_json_config(&content, config_file)?,
        FileFormat::Toml => parse_toml_config(&content, config_file)?,
        FileFormat::Yaml => parse_yaml_config(&content, config_file)?,
        FileFormat::Ini { section } => parse_ini_config(&content, config_file, section)?,
    };

    tracing::debug!(
        "Loaded {} option(s) from {} as {}",
        parsed.len(),
        config_file.display(),
        format.label()
    );
    Ok(parsed)
}

fn parse_json_config(content: &str, config_file: &Path) -> Result<OptionMap> {
    serde_json::from_str(content)
        .map_err(|e| Error::config_file(config_file, format!("invalid JSON config: {e}")))
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<OptionMap> {
    toml::from_str(content)
        .map_err(|e| Error::config_file(config_file, format!("invalid TOML config: {e}")))
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<OptionMap> {
    // An empty YAML document decodes to null rather than a mapping
    if content.trim().is_empty() {
        return Ok(OptionMap::new());
    }
    serde_yaml::from_str(content)
        .map_err(|e| Error::config_file(config_file, format!("invalid YAML config: {e}")))
}

/// Read one section of an INI file, configparser style: keys are lower-cased,
/// values stay strings, and `[DEFAULT]` entries apply to every section.
fn parse_ini_config(content: &str, config_file: &Path, section: &str) -> Result<OptionMap> {
    // Values are taken literally: no quote stripping, no backslash escapes
    let parse_option =
        ini::ParseOption { enabled_quote: false, enabled_escape: false, ..Default::default() };
    let ini = ini::Ini::load_from_str_opt(content, parse_option)
        .map_err(|e| Error::config_file(config_file, format!("invalid INI config: {e}")))?;

    let Some(properties) = ini.section(Some(section)) else {
        return Err(Error::config_file(config_file, format!("missing section [{section}]")));
    };

    let mut options = OptionMap::new();
    if section != "DEFAULT" {
        if let Some(fallback) = ini.section(Some("DEFAULT")) {
            options.extend(ini_entries(fallback));
        }
    }
    options.extend(ini_entries(properties));
    Ok(options)
}

fn ini_entries(properties: &ini::Properties) -> impl Iterator<Item = (String, Value)> + '_ {
    properties.iter().map(|(key, value)| (key.to_lowercase(), Value::String(value.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(tmp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn test_load_json_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.json", r#"{"a": "y", "xs": [4, 5], "nested": {"k": 1}}"#);

        let options = load_file(&path, &FileFormat::Json).expect("load");
        assert_eq!(options["a"], json!("y"));
        assert_eq!(options["xs"], json!([4, 5]));
        assert_eq!(options["nested"], json!({"k": 1}));
    }

    #[test]
    fn test_json_must_be_an_object() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.json", "[1, 2, 3]");

        let err = load_file(&path, &FileFormat::Json).unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
        assert!(err.to_string().contains("app.json"));
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "broken.json", "{\"a\": ");

        let err = load_file(&path, &FileFormat::Json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken.json"), "{message}");
        assert!(message.contains("invalid JSON"), "{message}");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_file(&tmp.path().join("absent.json"), &FileFormat::Json).unwrap_err();
        assert!(matches!(err, Error::ConfigFile { .. }));
    }

    #[test]
    fn test_load_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.toml", "a = 'y'\ncount = 7\n");

        let options = load_file(&path, &FileFormat::Toml).expect("load");
        assert_eq!(options["a"], json!("y"));
        assert_eq!(options["count"], json!(7));
    }

    #[test]
    fn test_load_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.yml", "a: y\nflag: true\n");

        let options = load_file(&path, &FileFormat::Yaml).expect("load");
        assert_eq!(options["a"], json!("y"));
        assert_eq!(options["flag"], json!(true));

        let empty = write(&tmp, "empty.yaml", "\n");
        assert!(load_file(&empty, &FileFormat::Yaml).expect("load").is_empty());
    }

    #[test]
    fn test_ini_reads_one_section_as_strings() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(
            &tmp,
            "app.ini",
            "[DEFAULT]\nshared = 1\n\n[CONFIG]\nName = y\ncount = 7\n\n[other]\nignored = yes\n",
        );

        let options = load_file(&path, &FileFormat::ini()).expect("load");
        assert_eq!(options["name"], json!("y"));
        assert_eq!(options["count"], json!("7"));
        assert_eq!(options["shared"], json!("1"));
        assert!(!options.contains_key("ignored"));
    }

    #[test]
    fn test_ini_values_are_literal() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.ini", "[CONFIG]\nout = C:\\new\\tmp\nname = \"quoted\"\n");

        let options = load_file(&path, &FileFormat::ini()).expect("load");
        assert_eq!(options["out"], json!("C:\\new\\tmp"));
        assert_eq!(options["name"], json!("\"quoted\""));
    }

    #[test]
    fn test_ini_custom_section() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.ini", "[CONFIG]\na = x\n[dev]\na = y\n");

        let options = load_file(&path, &FileFormat::ini_section("dev")).expect("load");
        assert_eq!(options["a"], json!("y"));
    }

    #[test]
    fn test_ini_missing_section_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "app.ini", "[other]\na = x\n");

        let err = load_file(&path, &FileFormat::ini()).unwrap_err();
        assert!(err.to_string().contains("missing section [CONFIG]"));
    }

    #[test]
    fn test_auto_detects_by_extension() {
        let tmp = TempDir::new().expect("tmp");
        let toml = write(&tmp, "app.toml", "a = 'toml'\n");
        let ini = write(&tmp, "app.cfg", "[CONFIG]\na = ini\n");
        let unknown = write(&tmp, "app.conf.out", r#"{"a": "json"}"#);

        assert_eq!(load_file(&toml, &FileFormat::Auto).expect("toml")["a"], json!("toml"));
        assert_eq!(load_file(&ini, &FileFormat::Auto).expect("ini")["a"], json!("ini"));
        assert_eq!(load_file(&unknown, &FileFormat::Auto).expect("json")["a"], json!("json"));
    }
}
