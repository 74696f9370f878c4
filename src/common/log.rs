/// Write a diagnostic line to stderr, or to the browser console with `wasm-console`.
#[cfg(not(feature = "wasm-console"))]
pub(crate) fn diag(line: &str) {
    eprintln!("{line}");
}

#[cfg(feature = "wasm-console")]
pub(crate) fn diag(line: &str) {
    web_sys::console::log_1(&line.into());
}
