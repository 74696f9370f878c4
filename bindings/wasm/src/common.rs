use anyhow::{anyhow, Result};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

pub(crate) fn js_err(e: impl ToString) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Serialize a value into a plain JS object (maps become objects, not `Map`s).
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| e.into())
}

/// Read `obj[key]`; missing properties come back as `undefined`.
pub(crate) fn prop(obj: &JsValue, key: &str) -> Result<JsValue> {
    Reflect::get(obj, &JsValue::from_str(key))
        .map_err(|e| anyhow!("error getting property '{}': {:?}", key, e))
}

/// Set `obj[key] = value`.
pub(crate) fn set_prop(obj: &JsValue, key: &str, value: &JsValue) -> Result<()> {
    Reflect::set(obj, &JsValue::from_str(key), value)
        .map_err(|e| anyhow!("error setting property '{}': {:?}", key, e))?;
    Ok(())
}

/// Call `obj.method(...args)`.
pub(crate) fn call(obj: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue> {
    let func: Function = prop(obj, method)?
        .dyn_into()
        .map_err(|_| anyhow!("'{}' is not a function", method))?;
    let args: Array = args.iter().collect();
    func.apply(obj, &args).map_err(|e| anyhow!("call to '{}' failed: {:?}", method, e))
}

/// Log a warning to the browser console.
pub(crate) fn warn(line: &str) {
    web_sys::console::warn_1(&JsValue::from_str(line));
}
