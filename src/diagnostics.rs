//! Devtools Hooks

use wasm_bindgen::prelude::*;

/// Buffered log lines for bug reports; call `recentLogs()` from the console
#[wasm_bindgen(js_name = recentLogs)]
pub fn recent_logs() -> String {
    rolling_logger::render_lines(&rolling_logger::recent_lines())
}
