//! Paddle Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use paddle_ball::renderer::{CanvasSurface, Surface};
    use paddle_ball::sim::TickInput;
    use paddle_ball::{Game, GameConfig, GameError};

    /// Everything the frame loop and the event listeners share
    struct Host {
        game: Game,
        surface: CanvasSurface,
        /// Last known pointer clientX
        pointer_x: Option<f32>,
        autopilot: bool,
        /// A frame is scheduled
        running: bool,
    }

    impl Host {
        /// Tick, draw, and report whether to schedule another frame
        fn frame(&mut self) -> bool {
            let input = TickInput {
                pointer_x: self.pointer_x,
                surface_left: self.surface.left(),
                autopilot: self.autopilot,
            };
            let frame = self.game.step(&input);
            frame.execute(&mut self.surface);
            self.running = frame.reschedule;
            frame.reschedule
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Paddle Ball starting...");

        // Unsupported environments simply get no game
        if let Err(e) = start() {
            log::warn!("Paddle Ball not started: {}", e);
        }
    }

    fn start() -> Result<(), GameError> {
        let window = web_sys::window().ok_or_else(|| GameError::Host("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Host("no document".into()))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .ok_or_else(|| GameError::Host("no canvas".into()))?
            .dyn_into()
            .map_err(|_| GameError::Host("not a canvas".into()))?;

        let config_json = canvas.get_attribute("data-config");
        let surface = CanvasSurface::new(canvas)?;
        let playfield = surface.playfield();
        let config = GameConfig::load_or_default(config_json.as_deref(), playfield);

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(config, playfield, seed, surface.left());

        let host = Rc::new(RefCell::new(Host {
            game,
            surface,
            pointer_x: None,
            autopilot: false,
            running: true,
        }));

        setup_input_handlers(&document, host.clone())?;
        request_animation_frame(host);

        log::info!("Paddle Ball running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &Document,
        host: Rc<RefCell<Host>>,
    ) -> Result<(), GameError> {
        // Pointer position anywhere on the page
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                host.borrow_mut().pointer_x = Some(event.client_x() as f32);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .map_err(|_| GameError::Host("mousemove listener".into()))?;
            closure.forget();
        }

        // Click after game over starts a new session
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let restart = {
                    let mut h = host.borrow_mut();
                    if h.game.is_over() && !h.running {
                        let seed = js_sys::Date::now() as u64;
                        let left = h.surface.left();
                        h.game.restart(seed, left);
                        h.running = true;
                        true
                    } else {
                        false
                    }
                };
                if restart {
                    request_animation_frame(host.clone());
                }
            });
            document
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .map_err(|_| GameError::Host("click listener".into()))?;
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "a" | "A") {
                    let mut h = host.borrow_mut();
                    h.autopilot = !h.autopilot;
                    log::info!("Autopilot: {}", h.autopilot);
                }
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(|_| GameError::Host("keydown listener".into()))?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule frames on");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        let reschedule = host.borrow_mut().frame();
        if reschedule {
            request_animation_frame(host);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use serde::Serialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    use paddle_ball::sim::{Playfield, TickInput};
    use paddle_ball::{Game, GameConfig};

    /// Hard stop for rallies the autopilot never loses
    const DEMO_MAX_TICKS: u64 = 20_000;

    #[derive(Debug, Serialize)]
    struct DemoSummary {
        seed: u64,
        ticks: u64,
        score: u64,
        game_over: bool,
    }

    /// Headless autopilot run on the default playfield
    pub fn run() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut game = Game::new(GameConfig::default(), Playfield::default(), seed, 0.0);

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        while game.state().time_ticks < DEMO_MAX_TICKS {
            let frame = game.step(&input);
            if !frame.reschedule {
                break;
            }
            if game.state().time_ticks.is_multiple_of(1000) {
                log::info!(
                    "tick {}: score {}",
                    game.state().time_ticks,
                    game.score()
                );
            }
        }

        let summary = DemoSummary {
            seed,
            ticks: game.state().time_ticks,
            score: game.score(),
            game_over: game.is_over(),
        };
        match serde_json::to_string(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to encode summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Ball (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - serve the wasm build to play");

    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
