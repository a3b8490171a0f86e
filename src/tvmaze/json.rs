//! JSON parsing helper for the TVMaze API client.

use anyhow::Result;

/// Parse JSON, reporting the serde path and location on failure.
///
/// TVMaze occasionally serves partial records; when deserialization trips,
/// knowing that the problem sits at `[3]._embedded.show.externals` beats a
/// bare "invalid type" message.
pub fn parse_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.inner();
        if path.is_empty() || path == "." {
            anyhow::anyhow!("{inner}")
        } else {
            anyhow::anyhow!("at path '{path}': {inner}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Person {
        #[allow(dead_code)]
        id: i64,
    }

    #[test]
    fn parses_valid_body() {
        let people: Vec<Person> = parse_json(r#"[{"id": 123}]"#).unwrap();
        assert_eq!(people.len(), 1);
    }

    #[test]
    fn error_includes_serde_path() {
        let result: Result<Vec<Person>> = parse_json(r#"[{"id": "not-a-number"}]"#);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("[0].id"), "missing path in: {msg}");
    }

    #[test]
    fn error_on_truncated_body_omits_path() {
        let result: Result<Vec<Person>> = parse_json(r#"[{"id": 1"#);
        assert!(result.is_err());
    }
}
