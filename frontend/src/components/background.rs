//! Animated particle background.
//!
//! Mounting acquires a 2D canvas context, a `requestAnimationFrame` loop and
//! window `mousemove`/`resize` listeners. Each acquisition registers its own
//! release step in a [`Teardown`] list, which runs in reverse order when the
//! component is destroyed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::background::ParticleField;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

const PARTICLES: usize = 90;
const LINK_DISTANCE: f64 = 110.0;
/// Longest frame step fed to the simulation, so a backgrounded tab does not
/// jump when it resumes.
const MAX_FRAME_SECS: f64 = 0.1;

/// Release steps run unconditionally, last acquired first.
#[derive(Default)]
struct Teardown {
    steps: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    fn push(&mut self, step: impl FnOnce() + 'static) {
        self.steps.push(Box::new(step));
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        while let Some(step) = self.steps.pop() {
            step();
        }
    }
}

pub struct Background {
    canvas_ref: NodeRef,
    scene: Option<Teardown>,
}

impl Component for Background {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            scene: None,
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        match start_scene(canvas) {
            Ok(teardown) => self.scene = Some(teardown),
            Err(e) => gloo_console::warn!("Background animation disabled", e),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.scene.take();
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas class="hero-background" ref={self.canvas_ref.clone()} aria-hidden="true" />
        }
    }
}

fn window_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn add_window_listener(
    window: &Window,
    teardown: &mut Teardown,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    let window = window.clone();
    teardown.push(move || {
        window
            .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok();
    });
    Ok(())
}

fn start_scene(canvas: HtmlCanvasElement) -> Result<Teardown, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let (width, height) = window_size(&window);
    fit_canvas(&canvas, width, height);
    let field = Rc::new(RefCell::new(ParticleField::new(PARTICLES, width, height)));
    let mut teardown = Teardown::default();

    {
        let field = field.clone();
        add_window_listener(&window, &mut teardown, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                field
                    .borrow_mut()
                    .set_pointer(mouse.client_x() as f64, mouse.client_y() as f64);
            }
        })?;
    }
    {
        let field = field.clone();
        let canvas = canvas.clone();
        let resize_window = window.clone();
        add_window_listener(&window, &mut teardown, "resize", move |_| {
            let (width, height) = window_size(&resize_window);
            fit_canvas(&canvas, width, height);
            field.borrow_mut().resize(width, height);
        })?;
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None::<i32>));
    {
        let frame_loop = frame.clone();
        let frame_id = frame_id.clone();
        let loop_window = window.clone();
        let last = Cell::new(None::<f64>);
        *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            let dt = last
                .replace(Some(now))
                .map(|prev| (now - prev) / 1000.0)
                .unwrap_or(0.0);
            field.borrow_mut().step(dt.min(MAX_FRAME_SECS));
            draw(&context, &field.borrow(), &canvas);

            if let Some(callback) = frame_loop.borrow().as_ref() {
                frame_id.set(
                    loop_window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }));
    }

    if let Some(callback) = frame.borrow().as_ref() {
        frame_id.set(Some(window.request_animation_frame(callback.as_ref().unchecked_ref())?));
    }

    teardown.push(move || {
        if let Some(id) = frame_id.take() {
            window.cancel_animation_frame(id).ok();
        }
        // the frame closure holds an Rc to its own slot
        frame.borrow_mut().take();
    });

    Ok(teardown)
}

fn draw(context: &CanvasRenderingContext2d, field: &ParticleField, canvas: &HtmlCanvasElement) {
    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    let points = field.points();

    context.set_stroke_style_str("#5eead4");
    context.set_line_width(0.6);
    for (i, j, strength) in ParticleField::links(&points, LINK_DISTANCE) {
        context.set_global_alpha(strength * 0.35);
        context.begin_path();
        context.move_to(points[i].x, points[i].y);
        context.line_to(points[j].x, points[j].y);
        context.stroke();
    }

    context.set_fill_style_str("#99f6e4");
    for point in &points {
        context.set_global_alpha(point.alpha);
        context.begin_path();
        if context
            .arc(point.x, point.y, point.radius, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            context.fill();
        }
    }
    context.set_global_alpha(1.0);
}
