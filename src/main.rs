//! Emoji Invaders entry point
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
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use emoji_invaders::Tuning;
    use emoji_invaders::platform::KeyboardState;
    use emoji_invaders::renderer::CanvasRenderer;
    use emoji_invaders::sim::{GamePhase, Session, tick};
    use emoji_invaders::ui::{Banner, apply_banner};

    const CANVAS_ID: &str = "game-canvas";

    /// Game instance holding all state
    struct Game {
        session: Session,
        tuning: Tuning,
        keys: KeyboardState,
        rng: Pcg32,
        renderer: Option<CanvasRenderer>,
        /// Phase shown by the overlay, to avoid touching the DOM every frame
        last_phase: Option<GamePhase>,
    }

    impl Game {
        fn new(tuning: Tuning, seed: u64) -> Self {
            Self {
                session: Session::new(tuning.clone()),
                tuning,
                keys: KeyboardState::new(),
                rng: Pcg32::seed_from_u64(seed),
                renderer: None,
                last_phase: None,
            }
        }

        /// Replace the session wholesale
        fn restart(&mut self, seed: u64) {
            self.session = Session::new(self.tuning.clone());
            self.rng = Pcg32::seed_from_u64(seed);
            self.keys.clear();
            log::info!("Game restarted with seed: {}", seed);
        }

        /// Run one simulation tick
        fn update(&mut self) {
            if self.keys.take_restart() {
                self.restart(js_sys::Date::now() as u64);
            }

            let input = self.keys.sample();
            tick(&mut self.session, &input, &mut self.rng);
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                if let Err(e) = renderer.render(&self.session) {
                    log::warn!("Render error: {:?}", e);
                }
            }
        }

        /// Show/hide the end-of-game overlay on phase changes
        fn update_overlay(&mut self) {
            let phase = self.session.phase;
            if self.last_phase == Some(phase) {
                return;
            }
            self.last_phase = Some(phase);

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let banner = Banner::for_session(&self.session);
            apply_banner(&document, banner.as_ref());
        }
    }

    /// Read an optional tuning override from the canvas `data-tuning` attribute
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        match canvas.get_attribute("data-tuning") {
            Some(json) => Tuning::from_json_or_default(&json),
            None => Tuning::default(),
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Emoji Invaders starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let tuning = load_tuning(&canvas);
        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(tuning, seed);
        game.renderer = Some(CanvasRenderer::new(
            &canvas,
            game.tuning.width,
            game.tuning.height,
        )?);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(game));
        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Emoji Invaders running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let over = g.session.is_over();
                if g.keys.key_down(&event.code(), over) {
                    // Keep arrows/space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - drop held keys so the ship doesn't keep drifting
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_overlay();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Emoji Invaders (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    println!("\nRunning autopilot demo...");
    run_demo(42);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play one session and report the outcome
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64) {
    use emoji_invaders::sim::{GamePhase, Session, autopilot, tick};
    use emoji_invaders::ui::Banner;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const MAX_TICKS: u64 = 60 * 60 * 5;

    let mut session = Session::default();
    let mut rng = Pcg32::seed_from_u64(seed);

    while session.phase == GamePhase::Running && session.time_ticks < MAX_TICKS {
        let input = autopilot(&session);
        tick(&mut session, &input, &mut rng);
    }

    match Banner::for_session(&session) {
        Some(banner) => println!(
            "{} after {} ticks - {} ({} invaders left)",
            banner.title,
            session.time_ticks,
            banner.subtitle,
            session.alive_enemies()
        ),
        None => println!(
            "Stopped after {} ticks - score {} ({} invaders left)",
            session.time_ticks,
            session.score,
            session.alive_enemies()
        ),
    }
}
