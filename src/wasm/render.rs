use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

use super::dom;
use super::webgl::WebContext;
use crate::color::parse_hex_color;
use crate::config::{DemoConfig, DemoKind};
use crate::demo::Demo;
use crate::error::{Error, Result};
use crate::input::InputEvent;
use crate::shader::Stage;

pub type WebDemo = Demo<WebContext>;
pub type SharedDemo = Rc<RefCell<WebDemo>>;

/// Brings up the demo named by the canvas' `data-demo` attribute, draws the
/// first frame and subscribes to the page events the demo cares about.
pub fn start(canvas: HtmlCanvasElement) -> Result<SharedDemo> {
    let document = dom::document()?;
    let kind: DemoKind = canvas
        .get_attribute("data-demo")
        .as_deref()
        .unwrap_or("basics")
        .parse()?;

    let mut config = kind.config();
    read_control_values(&document, &mut config)?;

    let gl = WebContext::from_canvas(&canvas)?;
    let webgl2 = gl.is_webgl2();

    let vertex = dom::shader_source(&document, config.program, Stage::Vertex)?;
    let fragment = dom::shader_source(&document, config.program, Stage::Fragment)?;
    let viewport = dom::fit_to_client(&canvas);

    let demo = Rc::new(RefCell::new(Demo::init(gl, config, &vertex, &fragment, viewport)?));
    log::info!(
        "{kind} demo started at {}x{} (webgl2: {webgl2})",
        viewport[0],
        viewport[1]
    );

    listen_mouse(&canvas, &demo)?;
    listen_controls(&document, &demo)?;
    listen_resize(&canvas, &demo)?;
    Ok(demo)
}

fn dispatch(demo: &SharedDemo, event: InputEvent) {
    if let Err(err) = demo.borrow_mut().handle(event) {
        log::warn!("{err}");
    }
}

/// Initial slider and picker values on the page win over the config defaults.
fn read_control_values(document: &Document, config: &mut DemoConfig) -> Result<()> {
    if let Some(id) = config.controls.side_slider {
        let slider: HtmlInputElement = dom::element(document, id)?;
        if let Ok(sides) = slider.value().parse() {
            config.side_count = sides;
        }
    }
    if let Some(id) = config.controls.color_picker {
        let picker: HtmlInputElement = dom::element(document, id)?;
        match parse_hex_color(&picker.value()) {
            Ok(color) => config.color = color,
            Err(err) => log::warn!("{err}"),
        }
    }
    Ok(())
}

fn listen_mouse(canvas: &HtmlCanvasElement, demo: &SharedDemo) -> Result<()> {
    let on_move = {
        let demo = demo.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let pos = [event.offset_x() as f32, event.offset_y() as f32];
            dispatch(&demo, InputEvent::MouseMove(pos));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

fn listen_controls(document: &Document, demo: &SharedDemo) -> Result<()> {
    let controls = demo.borrow().config().controls.clone();

    if let Some(id) = controls.side_slider {
        let slider: HtmlInputElement = dom::element(document, id)?;
        let label = match controls.side_label {
            Some(id) => Some(dom::element::<HtmlElement>(document, id)?),
            None => None,
        };
        show_side_count(label.as_ref(), demo);

        let on_input = {
            let demo = demo.clone();
            let slider = slider.clone();
            Closure::wrap(Box::new(move || {
                match slider.value().parse() {
                    Ok(sides) => dispatch(&demo, InputEvent::SideCountChange(sides)),
                    Err(_) => log::warn!("slider value `{}` is not a side count", slider.value()),
                }
                show_side_count(label.as_ref(), &demo);
            }) as Box<dyn FnMut()>)
        };
        slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    if let Some(id) = controls.color_picker {
        let picker: HtmlInputElement = dom::element(document, id)?;
        let on_input = {
            let demo = demo.clone();
            let picker = picker.clone();
            Closure::wrap(Box::new(move || {
                dispatch(&demo, InputEvent::ColorChange(picker.value()));
            }) as Box<dyn FnMut()>)
        };
        picker.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
    }

    Ok(())
}

fn show_side_count(label: Option<&HtmlElement>, demo: &SharedDemo) {
    if let Some(label) = label {
        let sides = demo.borrow().state().side_count();
        label.set_text_content(Some(&sides.to_string()));
    }
}

/// Tracks the canvas' laid-out size. The new size reaches the scene but the
/// frame is only redrawn by the next input event.
fn listen_resize(canvas: &HtmlCanvasElement, demo: &SharedDemo) -> Result<()> {
    let on_resize = {
        let canvas = canvas.clone();
        let demo = demo.clone();
        Closure::wrap(Box::new(move || {
            let [width, height] = dom::fit_to_client(&canvas);
            dispatch(&demo, InputEvent::Resize(width, height));
        }) as Box<dyn FnMut()>)
    };
    window()
        .ok_or_else(|| Error::Js("no window".into()))?
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}
