//! Durable cursor position cache
//!
//! The last pointer position survives restarts so the initial cursor visuals
//! and title side can be seeded before the first pointer event arrives. The
//! cache mirrors a key-value store: `cursorX`/`cursorY`, decimal strings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Get the data directory for the cursor cache
/// - If running from source (binary path contains "target") or UNDERCURRENTS_DEV is set: ./tmp/undercurrents
/// - If installed (binary path elsewhere): ~/.local/share/undercurrents
pub fn get_data_dir() -> PathBuf {
    let use_local_storage = std::env::var("UNDERCURRENTS_DEV").is_ok()
        || std::env::current_exe()
            .map(|p| p.iter().any(|c| c == "target"))
            .unwrap_or(false);

    if use_local_storage {
        // Local/Dev mode: use local tmp directory relative to current working directory
        let mut path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        path.push("tmp");
        path.push("undercurrents");
        path
    } else {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("undercurrents")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorState {
    #[serde(rename = "cursorX")]
    cursor_x: String,
    #[serde(rename = "cursorY")]
    cursor_y: String,
}

impl CursorState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            cursor_x: x.to_string(),
            cursor_y: y.to_string(),
        }
    }

    pub fn position(&self) -> Option<(f32, f32)> {
        let x = self.cursor_x.parse().ok()?;
        let y = self.cursor_y.parse().ok()?;
        Some((x, y))
    }
}

fn cursor_state_path() -> PathBuf {
    get_data_dir().join("cursor_state.json")
}

/// Last persisted pointer position, if any. Read once at startup.
pub fn load_cursor_position() -> Option<(f32, f32)> {
    let content = fs::read_to_string(cursor_state_path()).ok()?;
    let state = serde_json::from_str::<CursorState>(&content).ok()?;
    state.position()
}

/// Persist the pointer position. Called on every desktop pointer move; a
/// failure here is cosmetic and must not interrupt the animation pipeline.
pub fn save_cursor_position(x: f32, y: f32) -> std::io::Result<()> {
    let dir = ensure_data_dir()?;
    let path = dir.join("cursor_state.json");
    let payload = serde_json::to_string_pretty(&CursorState::new(x, y))
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    fs::write(path, payload)
}

/// Ensure the data directory exists
pub fn ensure_data_dir() -> std::io::Result<PathBuf> {
    let dir = get_data_dir();
    if let Some(parent) = dir.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_state_round_trip() {
        let state = CursorState::new(812.5, 401.0);
        let payload = serde_json::to_string(&state).unwrap();
        let restored: CursorState = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored.position(), Some((812.5, 401.0)));
    }

    #[test]
    fn test_cursor_state_uses_string_keys() {
        let payload = serde_json::to_string(&CursorState::new(10.0, 20.0)).unwrap();
        assert!(payload.contains("\"cursorX\":\"10\""));
        assert!(payload.contains("\"cursorY\":\"20\""));
    }

    #[test]
    fn test_garbage_values_are_rejected() {
        let state: CursorState =
            serde_json::from_str(r#"{"cursorX":"abc","cursorY":"1.0"}"#).unwrap();
        assert_eq!(state.position(), None);
    }
}
