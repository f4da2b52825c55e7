use crate::dom;
use crate::render::GpuState;
use garden_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback needs: the simulation, the canvas it
/// tracks, the GPU state (absent until async init finishes), and the clock.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,
    last_instant: instant::Instant,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            scene,
            canvas,
            gpu: None,
            last_instant: instant::Instant::now(),
        }
    }

    pub async fn init_gpu(&mut self) -> anyhow::Result<()> {
        let gpu = GpuState::new(&self.canvas).await?;
        self.gpu = Some(gpu);
        log::info!("[gpu] webgpu initialised");
        Ok(())
    }

    /// One animation frame: advance the simulation by wall-clock dt, track
    /// canvas size changes, and draw.
    pub fn frame(&mut self) {
        let now = instant::Instant::now();
        let dt = now.duration_since(self.last_instant).as_secs_f32();
        self.last_instant = now;

        dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = (self.canvas.width(), self.canvas.height());

        {
            let mut scene = self.scene.borrow_mut();
            scene.set_viewport(w, h);
            scene.advance(dt);
        }

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(w, h);
            if let Err(e) = gpu.render(&self.scene.borrow()) {
                log::warn!("[gpu] render error: {e:?}");
            }
        }
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame. The closure holds
/// a slot containing itself so each frame can schedule the next.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(cb) = f.borrow().as_ref() {
            request_animation_frame(cb);
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = g.borrow().as_ref() {
        request_animation_frame(cb);
    }
}

fn request_animation_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
