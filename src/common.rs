use handlebars::{handlebars_helper, Handlebars};
use serde_json::Value;

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_string_to_file(filename: &str, content: &str) -> std::io::Result<()> {
    let path = Path::new(filename);
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(exists: |v: Value| !v.is_null());
    handlebars.register_helper("exists", Box::new(exists));

    handlebars_helper!(isnull: |v: Value| v.is_null());
    handlebars.register_helper("isnull", Box::new(isnull));

    handlebars_helper!(stringeq: |s1: String, s2: String| s1.eq(&s2));
    handlebars.register_helper("stringeq", Box::new(stringeq));

    // Compact JSON, for embedding values inside inline scripts. Use with
    // triple braces, the output is not HTML.
    handlebars_helper!(json: |v: Value| serde_json::to_string(&v).unwrap_or_default());
    handlebars.register_helper("json", Box::new(json));

    handlebars_helper!(percent: |v: f64| format!("{:.1}%", v * 100.0));
    handlebars.register_helper("percent", Box::new(percent));

    handlebars
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn handlebars_can_render() {
        let handlebars = get_handlebars();
        let res = handlebars
            .render_template("Hello {{name}}", &json!({"name": "foo"}))
            .expect("This to render");
        assert_eq!(res, "Hello foo");
    }

    #[test]
    fn handlebars_can_iterate() {
        let handlebars = get_handlebars();
        let res = handlebars
            .render_template(
                r#"{{#each labels as |label|}}
Bar {{label}}
{{/each}}"#,
                &json!({"labels": ["Attack", "Speed", "HP"]}),
            )
            .expect("This to render");
        assert_eq!(res, "Bar Attack\nBar Speed\nBar HP\n");
    }

    #[test]
    fn handlebars_helper_exists_can_render() {
        let handlebars = get_handlebars();
        let res = handlebars
            .render_template(
                r#"{{#if (exists chart) }}has chart{{else}}no chart{{/if}}"#,
                &json!({ "chart": null }),
            )
            .expect("This to render");
        assert_eq!(res, "no chart");
    }

    #[test]
    fn handlebars_helper_json_embeds_compact_json() {
        let handlebars = get_handlebars();
        let res = handlebars
            .render_template(
                r#"const spec = {{{json spec}}};"#,
                &json!({ "spec": { "type": "bar" } }),
            )
            .expect("This to render");
        assert_eq!(res, r#"const spec = {"type":"bar"};"#);
    }

    #[test]
    fn handlebars_helper_percent_can_render() {
        let handlebars = get_handlebars();
        let res = handlebars
            .render_template(r#"{{percent p}}"#, &json!({ "p": 0.874 }))
            .expect("This to render");
        assert_eq!(res, "87.4%");
    }
}
