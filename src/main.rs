//! Pattern lock entry point
//!
//! Handles platform-specific initialization and runs the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_widget {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use glam::Vec2;
    use pattern_lock::Settings;
    use pattern_lock::consts::STATUS_BAR_HEIGHT;
    use pattern_lock::lock::{self, LockEvent, LockState, Validation};
    use pattern_lock::renderer::{RenderState, build_frame};

    const PROMPT_TEXT: &str = "draw pattern";
    const SUCCESS_TEXT: &str = "unlocked";
    const FAILURE_TEXT: &str = "wrong pattern";

    /// Widget instance holding all state
    struct App {
        lock: LockState,
        render_state: Option<RenderState>,
        settings: Settings,
    }

    impl App {
        fn new(width: f32, height: f32, settings: Settings) -> Self {
            Self {
                lock: LockState::new(width, height),
                render_state: None,
                settings,
            }
        }

        /// Drain core notifications into the status line and log
        fn handle_events(&mut self) {
            for event in self.lock.drain_events() {
                match event {
                    LockEvent::PointSelected { label } => {
                        log::debug!("point {} selected", label);
                    }
                    LockEvent::Validated { result } => match result {
                        Validation::Success => {
                            log::info!("pattern accepted");
                            self.set_status(SUCCESS_TEXT, "status success");
                        }
                        Validation::Failure => {
                            log::info!("pattern rejected");
                            self.set_status(FAILURE_TEXT, "status failure");
                        }
                    },
                    LockEvent::GestureDiscarded => {
                        log::info!("gesture discarded (layout changed)");
                        self.set_status(PROMPT_TEXT, "status");
                    }
                }
            }
        }

        fn set_status(&self, text: &str, class: &str) {
            if !self.settings.show_status {
                return;
            }
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("status") {
                el.set_text_content(Some(text));
                let _ = el.set_attribute("class", class);
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let vertices = build_frame(&self.lock, &self.settings, (time / 1000.0) as f32);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let (lw, lh) = render_state.logical;
                        render_state.resize(w, h, lw, lh);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Canvas position -> grid-area position (the grid sits below the
    /// status line)
    fn grid_pos(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y - STATUS_BAR_HEIGHT)
    }

    /// First touch position relative to the canvas, if any
    fn touch_pos(canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        let x = touch.client_x() as f32 - rect.left() as f32;
        let y = touch.client_y() as f32 - rect.top() as f32;
        Some(grid_pos(x, y))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pattern lock starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the backing buffer for the device pixel ratio
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(
            client_w as f32,
            client_h as f32,
            settings,
        )));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            client_w as f32,
            client_h as f32,
        )
        .await;
        app.borrow_mut().render_state = Some(render_state);

        app.borrow().set_status(PROMPT_TEXT, "status");

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(canvas, app.clone());

        request_animation_frame(app);

        log::info!("Pattern lock running");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - begin a gesture
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let pos = grid_pos(event.offset_x() as f32, event.offset_y() as f32);
                lock::pointer_down(&mut a.lock, pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - the core ignores it unless a gesture is in flight
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut a = app.borrow_mut();
                let pos = grid_pos(event.offset_x() as f32, event.offset_y() as f32);
                lock::pointer_move(&mut a.lock, pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - on the window, so a release outside the canvas still
        // ends the gesture
        {
            let app = app.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                lock::pointer_up(&mut app.borrow_mut().lock);
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(pos) = touch_pos(&canvas_clone, &event) {
                    lock::pointer_down(&mut app.borrow_mut().lock, pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(pos) = touch_pos(&canvas_clone, &event) {
                    lock::pointer_move(&mut app.borrow_mut().lock, pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end / cancel both finish the gesture
        for kind in ["touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                lock::pointer_up(&mut app.borrow_mut().lock);
            });
            let _ = canvas
                .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let client_w = canvas.client_width();
            let client_h = canvas.client_height();
            let width = (client_w as f64 * dpr) as u32;
            let height = (client_h as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut a = app.borrow_mut();
            lock::resize(&mut a.lock, client_w as f32, client_h as f32);
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(width, height, client_w as f32, client_h as f32);
            }
            log::info!("Resized to {}x{} (dpr {})", client_w, client_h, dpr);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.handle_events();
            a.render(time);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_widget::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pattern lock (native) starting...");
    log::info!("Native mode has no surface - serve the wasm build for the interactive widget");

    println!("\nRunning gesture demo...");
    demo_gesture();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_gesture() {
    use glam::Vec2;
    use pattern_lock::consts::UNLOCK_PATTERN;
    use pattern_lock::lock::{self, LockState, Validation};

    let mut state = LockState::new(300.0, 194.0);

    let path: Vec<Vec2> = UNLOCK_PATTERN
        .bytes()
        .map(|d| state.layout.point(d - b'0').unwrap().pos)
        .collect();

    lock::pointer_down(&mut state, path[0]);
    for &pos in &path[1..] {
        lock::pointer_move(&mut state, pos);
    }
    lock::pointer_up(&mut state);

    assert_eq!(state.last_result, Some(Validation::Success));
    println!("✓ Unlock gesture accepted!");
}
