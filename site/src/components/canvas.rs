//! Hero background: drifting particles joined by faint lines.
//!
//! The canvas fills the window and redraws on every animation frame until the
//! component is torn down. If the browser gives us no 2D context the canvas
//! just stays empty.

use crate::particles::{PARTICLE_COUNT, ParticleField};
use leptos::ev;
use leptos::html::Canvas;
use leptos::prelude::*;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

const LINK_RGB: &str = "124,58,237";
const PARTICLE_RGB: &str = "167,139,250";

/// Full-bleed decorative canvas behind the hero copy.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match Animation::start(canvas) {
            Some(animation) => on_cleanup(move || animation.stop()),
            None => web_sys::console::warn_1(&JsValue::from_str(
                "[antimatter] particle canvas disabled: no 2d context",
            )),
        }
    });

    view! { <canvas node_ref=canvas_ref class="particle-canvas" aria-hidden="true"></canvas> }
}

/// A running animation loop plus its resize listener.
struct Animation {
    stopped: Arc<AtomicBool>,
    resize: WindowListenerHandle,
}

impl Animation {
    fn start(canvas: HtmlCanvasElement) -> Option<Self> {
        let window = web_sys::window()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let (width, height) = viewport(&window);
        fit(&canvas, width, height);
        let field = Rc::new(RefCell::new(ParticleField::new(
            width,
            height,
            PARTICLE_COUNT,
            js_sys::Math::random,
        )));

        let resize = {
            let field = Rc::clone(&field);
            let canvas = canvas.clone();
            window_event_listener(ev::resize, move |_| {
                if let Some(window) = web_sys::window() {
                    let (width, height) = viewport(&window);
                    fit(&canvas, width, height);
                    field.borrow_mut().resize(width, height);
                }
            })
        };

        let stopped = Arc::new(AtomicBool::new(false));
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&frame);
        let halt = Arc::clone(&stopped);

        *frame.borrow_mut() = Some(Closure::new(move || {
            if halt.load(Ordering::Relaxed) {
                // Drops this closure; no further frames are requested.
                let _ = next.borrow_mut().take();
                return;
            }
            draw_frame(&ctx, &mut field.borrow_mut());
            if let Some(callback) = next.borrow().as_ref() {
                request_frame(callback);
            }
        }));

        if let Some(callback) = frame.borrow().as_ref() {
            request_frame(callback);
        }

        Some(Self { stopped, resize })
    }

    fn stop(self) {
        self.stopped.store(true, Ordering::Relaxed);
        self.resize.remove();
    }
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn fit(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Links are drawn from the current positions, then particles move and are drawn.
fn draw_frame(ctx: &CanvasRenderingContext2d, field: &mut ParticleField) {
    let (width, height) = field.bounds();
    ctx.clear_rect(0.0, 0.0, width, height);

    ctx.set_line_width(0.5);
    let particles = field.particles();
    for link in field.links() {
        let (a, b) = (particles[link.a], particles[link.b]);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.set_stroke_style_str(&format!("rgba({LINK_RGB},{})", link.alpha));
        ctx.stroke();
    }

    field.step();
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.r, 0.0, TAU).is_ok() {
            ctx.set_fill_style_str(&format!("rgba({PARTICLE_RGB},{})", p.alpha));
            ctx.fill();
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn renders_inert_canvas() {
        let html = render(view! { <ParticleCanvas /> });
        assert!(html.contains("<canvas"));
        assert!(html.contains("class=\"particle-canvas\""));
        assert!(html.contains("aria-hidden=\"true\""));
    }
}
