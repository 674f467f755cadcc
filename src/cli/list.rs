use std::path::Path;

use serde::Serialize;

use crate::domain::HookName;
use crate::hooks::HookFileWriter;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a> {
    hooks_dir: String,
    hooks: Vec<&'a str>,
}

/// Print installed hook names, one per line or as JSON.
pub fn run(writer: &HookFileWriter, json: bool) -> miette::Result<()> {
    let hooks = writer.list()?;
    print!("{}", render(writer.dir(), &hooks, json));
    Ok(())
}

/// Render the listing.
///
/// # Panics
///
/// Panics if JSON serialization fails, which cannot happen for a struct of
/// strings. Failure here indicates a programming bug.
fn render(dir: &Path, hooks: &[HookName], json: bool) -> String {
    if json {
        let output = ListOutput {
            hooks_dir: dir.display().to_string(),
            hooks: hooks.iter().map(HookName::as_str).collect(),
        };
        let json = serde_json::to_string(&output).expect("ListOutput serialization cannot fail");
        format!("{json}\n")
    } else {
        hooks.iter().map(|h| format!("{h}\n")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<HookName> {
        raw.iter().map(|r| HookName::new(r).unwrap()).collect()
    }

    #[test]
    fn render_plain_one_per_line() {
        let out = render(Path::new(".rbgithook"), &names(&["pre-commit", "pre-push"]), false);
        assert_eq!(out, "pre-commit\npre-push\n");
    }

    #[test]
    fn render_plain_empty() {
        assert_eq!(render(Path::new(".rbgithook"), &[], false), "");
    }

    #[test]
    fn render_json() {
        let out = render(Path::new(".rbgithook"), &names(&["pre-commit"]), true);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"hooksDir": ".rbgithook", "hooks": ["pre-commit"]})
        );
    }

    #[test]
    fn render_json_empty() {
        let out = render(Path::new(".rbgithook"), &[], true);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["hooks"], serde_json::json!([]));
    }
}
