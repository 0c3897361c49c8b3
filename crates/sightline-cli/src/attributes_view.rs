use sightline::Attributes;

pub const EMPTY_ATTRIBUTES: &str = "No attributes";

/// Render attributes as `key (type): value` lines under a title.
///
/// Arrays show their element count, and with `expand` each element follows
/// on its own indented line.
pub fn render_attributes(attributes: &Attributes, title: &str, expand: bool) -> String {
    if attributes.is_empty() {
        return format!("{EMPTY_ATTRIBUTES}\n");
    }

    let mut out = format!("{title}\n");
    for (key, value) in attributes {
        out.push_str(&format!("{key} ({}): {}\n", value.type_name(), value.render()));

        if expand && value.is_array() {
            for (i, item) in value.array_items().iter().enumerate() {
                out.push_str(&format!("  [{i}]: {}\n", item.render()));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(json: &str) -> Attributes {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_attributes(&Attributes::new(), "Attributes", true), "No attributes\n");
    }

    #[test]
    fn test_mixed_shapes() {
        let attributes = attrs(
            r#"{
                "http.method": "GET",
                "http.status_code": {"type": "int", "value": 200},
                "cache.hit": false
            }"#,
        );

        assert_eq!(
            render_attributes(&attributes, "Attributes", false),
            "Attributes\n\
             cache.hit (bool): false\n\
             http.method (string): GET\n\
             http.status_code (int): 200\n"
        );
    }

    #[test]
    fn test_arrays_expand_on_request() {
        let attributes = attrs(r#"{"tags": ["a", "b"]}"#);

        assert_eq!(
            render_attributes(&attributes, "Resource", false),
            "Resource\ntags (array): [2 items]\n"
        );
        assert_eq!(
            render_attributes(&attributes, "Resource", true),
            "Resource\ntags (array): [2 items]\n  [0]: a\n  [1]: b\n"
        );
    }
}
