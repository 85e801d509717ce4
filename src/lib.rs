//! Small WebGL demos sharing one shader, scene and draw core.
//!
//! The core is written against [`gl::GraphicsContext`]; the browser glue that
//! binds it to a real canvas only compiles for wasm32.

pub mod color;
pub mod config;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod input;
pub mod logging;
pub mod render;
pub mod scene;
pub mod shader;

#[cfg(test)]
mod testing;

pub use config::{DemoConfig, DemoKind};
pub use demo::Demo;
pub use error::{Error, Result};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::logging::{init_logging, LoggingConfig};

    pub mod dom;
    mod render;
    mod webgl;

    pub use render::{start, SharedDemo, WebDemo};
    pub use webgl::WebContext;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        // Pages without a canvas (the index) have nothing to start.
        let Some(element) = document.get_element_by_id("canvas") else {
            return Ok(());
        };
        let canvas = element.dyn_into::<web_sys::HtmlCanvasElement>()?;

        let level = canvas.get_attribute("data-log-level");
        init_logging(LoggingConfig::from_filter(level.as_deref()));

        render::start(canvas)?;
        Ok(())
    }
}
