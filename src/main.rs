//! Tap On entry point
//!
//! Browser: wires the DOM, input events and the animation-frame loop to the
//! round engine. Native: runs headless demo games with the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

    use tap_on::persistence::LocalStorageStore;
    use tap_on::platform::{FrameClock, InputSource, canvas_size, forwards_tap};
    use tap_on::presentation::Presenter;
    use tap_on::renderer::CanvasRenderer;
    use tap_on::sim::RenderSnapshot;
    use tap_on::{RoundEngine, Tuning};

    /// Presenter backed by the page's DOM and canvas
    struct DomPresenter {
        document: Document,
        renderer: CanvasRenderer,
    }

    impl DomPresenter {
        fn set_class(&self, id: &str, class: &str, on: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let list = el.class_list();
                let _ = if on { list.add_1(class) } else { list.remove_1(class) };
            }
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }
    }

    impl Presenter for DomPresenter {
        fn render_frame(&mut self, snapshot: &RenderSnapshot) {
            if let Err(e) = self.renderer.render(snapshot) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn show_start_screen(&mut self) {
            self.set_class("startScreen", "hidden", false);
        }

        fn hide_start_screen(&mut self) {
            self.set_class("startScreen", "hidden", true);
        }

        fn show_success_flash(&mut self) {
            self.set_class("successScreen", "show", true);
        }

        fn hide_success_flash(&mut self) {
            self.set_class("successScreen", "show", false);
        }

        fn show_game_over(&mut self, final_level: u32) {
            self.set_text("finalLevel", &final_level.to_string());
            self.set_class("gameOverScreen", "show", true);
        }

        fn hide_game_over(&mut self) {
            self.set_class("gameOverScreen", "show", false);
        }

        fn update_level_label(&mut self, level: u32) {
            self.set_text("currentLevel", &level.to_string());
        }

        fn update_score_label(&mut self, score: u64) {
            self.set_text("currentScore", &score.to_string());
        }

        fn update_best_label(&mut self, best: u64) {
            self.set_text("bestScore", &best.to_string());
        }
    }

    struct Game {
        engine: RoundEngine<LocalStorageStore, DomPresenter>,
        clock: FrameClock,
        /// An animation frame is currently requested
        loop_running: bool,
    }

    impl Game {
        fn tap(&mut self) {
            let outcome = self.engine.handle_input();
            log::debug!("Tap: {:?}", outcome);
        }

        fn resize(&mut self, size: f32) {
            if self.engine.presenter_mut().renderer.resize(size as u32) {
                self.engine.resize(size);
                self.engine.render();
            }
        }
    }

    fn viewport_canvas_size(window: &Window) -> f32 {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32;
        canvas_size(width, height)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tap On starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas #gameCanvas not found");
            return;
        };

        let mut renderer = match CanvasRenderer::new(canvas.clone()) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Canvas setup failed: {:?}", e);
                return;
            }
        };
        let size = viewport_canvas_size(&window);
        renderer.resize(size as u32);

        let seed = js_sys::Date::now() as u64;
        let presenter = DomPresenter {
            document: document.clone(),
            renderer,
        };
        let mut engine = RoundEngine::new(
            Tuning::default(),
            seed,
            LocalStorageStore::default(),
            presenter,
        );
        engine.resize(size);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            engine,
            clock: FrameClock::new(),
            loop_running: false,
        }));

        setup_input_handlers(&canvas, &document, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(&window, game);

        log::info!("Tap On ready");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, document: &Document, game: Rc<RefCell<Game>>) {
        // Click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if forwards_tap(InputSource::Pointer, None, true) {
                    game.borrow_mut().tap();
                }
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch (suppress the synthetic click that would follow)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if forwards_tap(InputSource::Touch, None, true) {
                    game.borrow_mut().tap();
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let playing = g.engine.state().is_playing();
                if forwards_tap(InputSource::Key, Some(&event.code()), playing) {
                    event.prevent_default();
                    g.tap();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().engine.start();
                ensure_loop(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#startButton not found");
        }

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().engine.restart();
                ensure_loop(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#restartButton not found");
        }
    }

    fn setup_resize(window: &Window, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let size = viewport_canvas_size(&window);
            game.borrow_mut().resize(size);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Start the frame loop unless it is already running
    fn ensure_loop(game: &Rc<RefCell<Game>>) {
        let start = {
            let mut g = game.borrow_mut();
            if g.loop_running {
                false
            } else {
                g.loop_running = true;
                g.clock.reset();
                true
            }
        };
        if start {
            request_animation_frame(game.clone());
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let dt = g.clock.advance(time);
            g.engine.tick(dt);

            // The loop stops with the run; start/restart request it again
            let playing = g.engine.state().is_playing();
            if !playing {
                g.loop_running = false;
            }
            playing
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use anyhow::{Result, ensure};
    use clap::Parser;

    use tap_on::autopilot::Autopilot;
    use tap_on::consts::NOMINAL_FPS;
    use tap_on::persistence::FileStore;
    use tap_on::presentation::LogPresenter;
    use tap_on::{RoundEngine, Tuning};

    /// Headless Tap On: an autopilot plays runs and logs the results
    #[derive(Parser, Debug)]
    #[command(name = "tap-on", version, about)]
    struct Args {
        /// Seed for target placement (defaults to the clock)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of runs to play
        #[arg(long, default_value_t = 1)]
        runs: u32,

        /// Ticks the autopilot waits after the ball enters the target
        #[arg(long, default_value_t = 2)]
        reaction_ticks: u32,

        /// Simulated frame rate (drives the success pause)
        #[arg(long, default_value_t = NOMINAL_FPS)]
        fps: f32,

        /// File holding the best score
        #[arg(long, default_value = "tapon_best.txt")]
        best_file: PathBuf,

        /// JSON tuning overrides
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Abandon a run after this many ticks
        #[arg(long, default_value_t = 1_000_000)]
        max_ticks: u64,
    }

    pub fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();
        ensure!(args.fps > 0.0, "--fps must be positive, got {}", args.fps);

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
        log::info!("Tap On (native) starting with seed {}", seed);

        let mut engine = RoundEngine::new(
            tuning,
            seed,
            FileStore::new(args.best_file.clone()),
            LogPresenter,
        );
        let mut pilot = Autopilot::new(args.reaction_ticks);
        let dt = 1.0 / args.fps;

        for run in 1..=args.runs {
            if run == 1 {
                engine.start();
            } else {
                engine.restart();
            }

            let mut ticks = 0u64;
            while engine.state().is_playing() {
                if pilot.wants_tap(engine.state()) {
                    engine.handle_input();
                }
                engine.tick(dt);
                ticks += 1;
                if ticks >= args.max_ticks {
                    log::warn!("Run {} abandoned after {} ticks", run, ticks);
                    break;
                }
            }

            let state = engine.state();
            log::info!(
                "Run {}: level {}, score {} ({} ticks)",
                run,
                state.level,
                state.score,
                ticks
            );
        }

        println!("Best score: {}", engine.state().best_score);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
