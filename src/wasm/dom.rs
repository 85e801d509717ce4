use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlCanvasElement, HtmlScriptElement};

use crate::error::{Error, Result};
use crate::shader::{ShaderSource, Stage};

pub fn document() -> Result<Document> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Js("no window document".into()))
}

/// Looks up `id` and casts it to the element type the caller expects.
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| Error::WrongElementType(id.to_string()))
}

/// Reads the text of the `<script>` holding `stage`'s source for `program`.
pub fn shader_source(document: &Document, program: &str, stage: Stage) -> Result<ShaderSource> {
    let script: HtmlScriptElement = element(document, &stage.element_id(program))?;
    Ok(ShaderSource::new(stage, script.text()?))
}

/// Matches the drawing buffer to the canvas' laid-out size. Canvases that are
/// not laid out keep their `width`/`height` attributes.
pub fn fit_to_client(canvas: &HtmlCanvasElement) -> [u32; 2] {
    let (w, h) = (canvas.client_width(), canvas.client_height());
    if w > 0 && h > 0 {
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
    }
    [canvas.width(), canvas.height()]
}
