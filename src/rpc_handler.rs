//! RPC method handler for the SecurePass JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without stdin.
//! `handle_method` maps a method name and its params onto the services in `App`;
//! `serve` runs the newline-delimited request loop over any reader and writer.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::services::password_generator::PasswordGeneratorTrait;
use crate::services::password_store::PasswordStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::password::GenerationOptions;

fn optional_bool(params: &Value, key: &str, default: bool) -> Result<bool, String> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(v) => v.as_bool().ok_or_else(|| format!("invalid {}: expected boolean", key)),
    }
}

/// Reads generation options from params, filling gaps from the defaults.
fn generation_options(params: &Value) -> Result<GenerationOptions, String> {
    let defaults = GenerationOptions::default();
    let length = match params.get("length") {
        None | Some(Value::Null) => defaults.length,
        Some(v) => v
            .as_u64()
            .ok_or("invalid length: expected non-negative integer")? as usize,
    };

    Ok(GenerationOptions {
        length,
        use_upper: optional_bool(params, "upper", defaults.use_upper)?,
        use_lower: optional_bool(params, "lower", defaults.use_lower)?,
        use_digits: optional_bool(params, "digits", defaults.use_digits)?,
        use_special: optional_bool(params, "special", defaults.use_special)?,
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Passwords ───
        "password.generate" => {
            let options = generation_options(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let password = a.generator.generate(&options).map_err(|e| e.to_string())?;
            Ok(json!({"password": password}))
        }
        "password.save" => {
            let password = match params.get("password") {
                None | Some(Value::Null) => return Err("missing password".to_string()),
                Some(v) => v.as_str().ok_or("invalid password: expected string")?,
            };
            let a = app.lock().map_err(|e| e.to_string())?;
            a.password_store.append(password).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "password.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let history = a.password_store.load_history();
            let lines = history.display_lines();
            Ok(json!({
                "lines": lines,
                "items": history.records,
                "status": history.status,
            }))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let dark_mode = params
                .get("dark_mode")
                .and_then(|v| v.as_bool())
                .ok_or("missing dark_mode")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_dark_mode(dark_mode).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

/// Writes one message as a single line and flushes.
pub fn write_message(out: &mut impl Write, message: &Value) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    out.flush()
}

/// Answers requests read from `input` until end of input.
///
/// Lines are read as raw bytes, so a line that is not valid UTF-8 or not valid
/// JSON gets a parse error response and the loop keeps going. Only I/O errors
/// on the streams themselves end the loop early.
pub fn serve<R: BufRead, W: Write>(app: &Mutex<App>, mut input: R, output: &mut W) -> io::Result<()> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.iter().all(|b| b.is_ascii_whitespace()) {
            continue;
        }

        let req: Value = match serde_json::from_slice(&line) {
            Ok(v) => v,
            Err(e) => {
                write_message(output, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        write_message(output, &response)?;
    }
    Ok(())
}
