use serde_json::json;

/// How command results are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        *self == OutputMode::Human
    }
}

/// Wrap a command result in the JSON envelope printed with `--json`.
pub fn success_envelope(command: &str, data: serde_json::Value) -> serde_json::Value {
    json!({
        "ok": true,
        "command": command,
        "data": data,
    })
}

pub fn emit_success(output_mode: OutputMode, command: &str, data: serde_json::Value) -> anyhow::Result<()> {
    if output_mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&success_envelope(command, data))?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope() {
        let value = success_envelope("create", json!({ "id": 3 }));
        assert_eq!(value["ok"], true);
        assert_eq!(value["command"], "create");
        assert_eq!(value["data"]["id"], 3);
    }

    #[test]
    fn test_mode_from_flag() {
        assert!(OutputMode::from_flag(false).is_human());
        assert_eq!(OutputMode::from_flag(true), OutputMode::Json);
    }
}
