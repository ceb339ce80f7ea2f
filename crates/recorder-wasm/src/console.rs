use recorder_common::LogChannel;
use wasm_bindgen::JsValue;

/// Writes recorder lines with `console.log`, one argument per line.
pub struct ConsoleChannel;

impl LogChannel for ConsoleChannel {
    fn emit(&mut self, line: &str) {
        web_sys::console::log_1(&JsValue::from_str(line));
    }
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
