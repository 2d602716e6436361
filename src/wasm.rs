use wasm_bindgen::prelude::*;

use crate::model::{GridConfig, Rect};

fn js_error(msg: String) -> JsValue {
    js_sys::Error::new(&msg).into()
}

#[wasm_bindgen]
pub fn layout_grid(json: &str) -> Result<String, JsValue> {
    crate::layout_json(json).map_err(|e| js_error(e.to_string()))
}

/// Snap a dragged x against the page grid solved at `container_width`.
#[wasm_bindgen]
pub fn snap_x(config: JsValue, container_width: f64, position: f64) -> Result<JsValue, JsValue> {
    let config: GridConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| js_error(e.to_string()))?;
    let grid = crate::layout::solve_columns(&config, container_width);
    let result = crate::snap::snap_to_grid(position, &grid, config.snap_tolerance);
    serde_wasm_bindgen::to_value(&result).map_err(|e| js_error(e.to_string()))
}

#[wasm_bindgen]
pub fn align_rects(active: JsValue, others: JsValue, tolerance: f64) -> Result<JsValue, JsValue> {
    let active: Rect =
        serde_wasm_bindgen::from_value(active).map_err(|e| js_error(e.to_string()))?;
    let others: Vec<Rect> =
        serde_wasm_bindgen::from_value(others).map_err(|e| js_error(e.to_string()))?;
    let alignment = crate::snap::align::calc_alignment_guides(&active, &others, tolerance);
    serde_wasm_bindgen::to_value(&alignment).map_err(|e| js_error(e.to_string()))
}
