use crate::input;
use garden_core::{PressOutcome, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

/// Wire pointer handlers onto the canvas/window. Move and up listen on the
/// window so a drag survives the pointer leaving the canvas; down listens on
/// the canvas and captures the pointer.
pub fn wire_input_handlers(w: InputWiring) {
    // pointermove
    {
        let scene_m = w.scene.clone();
        let canvas_m = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let ndc = input::pointer_ndc(&ev, &canvas_m);
            scene_m.borrow_mut().pointer_moved(ndc);
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerdown
    {
        let scene_d = w.scene.clone();
        let canvas_d = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let ndc = input::pointer_ndc(&ev, &canvas_d);
            let mut scene = scene_d.borrow_mut();
            scene.pointer_moved(ndc);
            match scene.pointer_down() {
                PressOutcome::Grabbed(i) => log::info!("[pointer] grabbed node {i}"),
                PressOutcome::CollapsedAll => log::debug!("[pointer] empty space, collapse"),
            }
            let _ = canvas_d.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup
    {
        let scene_u = w.scene.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(i) = scene_u.borrow_mut().pointer_up() {
                log::info!("[pointer] released node {i}: expand + burst");
            }
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
