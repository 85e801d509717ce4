use thiserror::Error;

use crate::shader::Stage;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop a demo from coming up.
///
/// `Compile` and `Link` are the only errors the graphics driver itself
/// reports; the rest come from the page around it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error compiling {stage} shader: {log}")]
    Compile { stage: Stage, log: String },

    #[error("error linking program: {log}")]
    Link { log: String },

    #[error("graphics context could not allocate a {0}")]
    Allocation(&'static str),

    #[error("WebGL not supported")]
    NoContext,

    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("element `{0}` is not the expected kind of element")]
    WrongElementType(String),

    #[error("unknown demo `{0}`")]
    UnknownDemo(String),

    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),

    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
