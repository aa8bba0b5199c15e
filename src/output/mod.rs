//! Result rendering
//!
//! Text mode pads `<repository>:<tag>` to the widest name so the push-time
//! column lines up; JSON mode emits the result sequence as-is.

use crate::error::Result;
use crate::search::SearchResult;

pub fn render_table(repository: &str, results: &[SearchResult]) -> String {
    let names: Vec<String> = results
        .iter()
        .map(|r| format!("{repository}:{}", r.name))
        .collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (name, result) in names.iter().zip(results) {
        out.push_str(&format!("{name:<width$}  {}\n", result.pushed_at));
    }
    out
}

pub fn render_json(results: &[SearchResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, pushed_at: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            pushed_at: pushed_at.to_string(),
        }
    }

    #[test]
    fn table_aligns_push_time_column() {
        let rendered = render_table(
            "app",
            &[
                result("latest", "2024-01-02T00:00:00Z"),
                result("v1", "2024-01-01T00:00:00Z"),
            ],
        );

        assert_eq!(
            rendered,
            "app:latest  2024-01-02T00:00:00Z\n\
             app:v1      2024-01-01T00:00:00Z\n"
        );
    }

    #[test]
    fn table_of_no_results_is_empty() {
        assert_eq!(render_table("app", &[]), "");
    }

    #[test]
    fn json_round_trips_fields() {
        let rendered = render_json(&[result("latest", "2024-01-02T00:00:00Z")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["name"], "latest");
        assert_eq!(parsed[0]["pushed_at"], "2024-01-02T00:00:00Z");
    }
}
