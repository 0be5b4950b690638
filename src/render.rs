//! Text renderings of resolved options

use crate::schema::OptionMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// The `--write_config` document: sorted keys, four-space indent, trailing newline.
pub fn render_config(options: &OptionMap) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    options.serialize(&mut serializer)?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

/// The `--list_overrides` listing: one `source: {...}` line per source, in order.
pub fn render_overrides(overrides: &[(String, OptionMap)]) -> serde_json::Result<String> {
    let mut out = String::new();
    for (name, options) in overrides {
        out.push_str(name);
        out.push_str(": ");
        out.push_str(&serde_json::to_string(options)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_is_sorted_and_indented() {
        let options = OptionMap::from([
            ("zeta".to_string(), json!(1)),
            ("alpha".to_string(), json!([1, 2])),
        ]);
        let rendered = render_config(&options).expect("render");
        similar_asserts::assert_eq!(
            rendered,
            "{\n    \"alpha\": [\n        1,\n        2\n    ],\n    \"zeta\": 1\n}\n"
        );
    }

    #[test]
    fn non_ascii_values_are_written_verbatim() {
        let options = OptionMap::from([("name".to_string(), json!("Zoë ✓"))]);
        let rendered = render_config(&options).expect("render");
        assert_eq!(rendered, "{\n    \"name\": \"Zoë ✓\"\n}\n");
    }

    #[test]
    fn empty_config_renders_braces() {
        assert_eq!(render_config(&OptionMap::new()).expect("render"), "{}\n");
    }

    #[test]
    fn overrides_one_line_per_source() {
        let overrides = vec![
            ("defaults".to_string(), OptionMap::from([("a".to_string(), json!("x"))])),
            ("passed".to_string(), OptionMap::new()),
        ];
        let rendered = render_overrides(&overrides).expect("render");
        assert_eq!(rendered, "defaults: {\"a\":\"x\"}\npassed: {}\n");
    }
}
