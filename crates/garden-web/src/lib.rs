#![cfg(target_arch = "wasm32")]

mod dom;
mod events;
mod frame;
mod input;
mod render;

use garden_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "garden-canvas";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = init().await {
            log::error!("[init] failed: {e:?}");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas"))?;
    dom::sync_canvas_backing_size(&canvas);

    let scene = Rc::new(RefCell::new(Scene::new(js_sys::Date::now() as u64)));
    scene
        .borrow_mut()
        .set_viewport(canvas.width(), canvas.height());

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene.clone(),
        canvas.clone(),
    )));
    ctx.borrow_mut().init_gpu().await?;

    events::wire_input_handlers(events::InputWiring {
        canvas,
        scene,
    });

    frame::start_loop(ctx);
    log::info!("[init] thought garden running");
    Ok(())
}
