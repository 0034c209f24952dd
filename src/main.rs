//! Pocket Bricks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use pocket_bricks::consts::{MAX_TICKS_PER_FRAME, TICK_MS};
    use pocket_bricks::renderer::{RenderState, shapes};
    use pocket_bricks::sim::{GamePhase, GameState, Layout, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        render_state: Option<RenderState>,
        /// Unspent simulation time in milliseconds
        accumulator: f64,
        last_time: f64,
    }

    impl Game {
        fn new(layout: Layout, seed: u64) -> Self {
            let state = GameState::new(layout).expect("initial brick field");
            Self {
                state,
                rng: Pcg32::seed_from_u64(seed),
                render_state: None,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Move the paddle under a canvas-relative CSS x coordinate
        fn drag(&mut self, css_x: f32, css_width: f32) {
            let scale = self.state.layout.canvas_width / css_width.max(1.0);
            self.state.drag_paddle(css_x * scale);
        }

        /// Restart on tap/click once the run has ended
        fn pointer_down(&mut self) {
            if self.state.phase == GamePhase::GameOver {
                self.state.restart();
                log::info!("Restarting run");
            }
        }

        /// Run fixed 10 ms ticks to catch up with wall-clock time
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time).min(100.0)
            } else {
                TICK_MS
            };
            self.last_time = time;
            self.accumulator += dt;

            let mut steps = 0;
            while self.accumulator >= TICK_MS && steps < MAX_TICKS_PER_FRAME {
                tick(&mut self.state, &mut self.rng);
                self.accumulator -= TICK_MS;
                steps += 1;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::frame_vertices(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("high-score") {
                el.set_text_content(Some(&self.state.high_score.to_string()));
            }

            // Show/hide the tap-to-restart overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Pocket Bricks starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The playfield takes 60% of the viewport width at a 2:3 aspect;
        // the backing store gets the device-pixel-ratio bump.
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(640.0) as f32;
        let layout = Layout::from_viewport(viewport_width);

        let dpr = window.device_pixel_ratio();
        let width = (layout.canvas_width as f64 * dpr) as u32;
        let height = (layout.canvas_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let _ = canvas.set_attribute(
            "style",
            &format!(
                "width:{}px;height:{}px",
                layout.canvas_width, layout.canvas_height
            ),
        );

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(layout, seed)));

        log::info!("Game initialized with seed: {}", seed);

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
                power_preference: wgpu::PowerPreference::HighPerformance,
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
            (layout.canvas_width, layout.canvas_height),
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Pocket Bricks running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move - drag the paddle under the cursor
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let css_width = canvas_clone.client_width() as f32;
                game.borrow_mut().drag(event.offset_x() as f32, css_width);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click - restart after game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().pointer_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - drag the paddle under the finger
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    game.borrow_mut().drag(x, rect.width() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - restart after game over
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().pointer_down();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pocket Bricks (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the playable version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use pocket_bricks::sim::{GamePhase, GameState, Layout, tick};
    use rand::SeedableRng;

    let layout = Layout::new(360.0);
    let mut state = GameState::new(layout).expect("initial brick field");
    let mut rng = rand_pcg::Pcg32::seed_from_u64(7);

    // Sweep the paddle under the ball so the demo rallies for a while
    let mut ticks = 0u32;
    while state.phase == GamePhase::Running && ticks < 60_000 {
        state.drag_paddle(state.ball.pos.x);
        tick(&mut state, &mut rng);
        ticks += 1;
    }

    println!(
        "Demo over after {} ticks: score {}, high score {}, {} bricks per row",
        ticks, state.score, state.high_score, state.bricks_per_row
    );
}
