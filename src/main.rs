//! Roto Goal entry point
//!
//! Handles platform-specific initialization and runs the match loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use roto_goal::sim::GameEvent;
    use roto_goal::{Match, Settings};

    /// Game instance holding all state
    struct Game {
        game: Match,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Effect class currently applied to the page
        effect_shown: bool,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                game: Match::new(seed, &settings),
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                effect_shown: false,
            }
        }

        /// One step per animation frame (no fixed timestep)
        fn update(&mut self, time: f64) {
            if let Some(GameEvent::Goal { scorer }) = self.game.frame(time) {
                log::info!("{:?} scored at {}'", scorer, self.game.minute(time));
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self, time: f64) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let score = self.game.pitch.score();

            if let Some(el) = document.get_element_by_id("score-team1") {
                el.set_text_content(Some(&score.team1.to_string()));
            }
            if let Some(el) = document.get_element_by_id("score-team2") {
                el.set_text_content(Some(&score.team2.to_string()));
            }
            if let Some(el) = document.get_element_by_id("match-minute") {
                el.set_text_content(Some(&format!("{}'", self.game.minute(time))));
            }
            if let Some(el) = document.get_element_by_id("play-label") {
                let label = if self.game.is_playing() { "Pause" } else { "Play" };
                el.set_text_content(Some(label));
            }
            if self.settings.show_fps {
                if let Some(el) = document.get_element_by_id("hud-fps") {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }

            // Goal flash/shake follows the wall-clock pulse
            let active = self.game.goal_effect_active(time);
            if active != self.effect_shown {
                self.effect_shown = active;
                if let Some(body) = document.body() {
                    let classes = body.class_list();
                    let _ = classes.toggle_with_force("flash", active);
                    if self.settings.effective_screen_shake() {
                        let _ = classes.toggle_with_force("shake", active);
                    }
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Roto Goal starting...");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Match initialized with seed: {}", seed);

        setup_buttons(game.clone());
        request_animation_frame(game);

        log::info!("Roto Goal running!");
    }

    fn now() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or_else(js_sys::Date::now, |p| p.now())
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(btn) = document.get_element_by_id("play-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().game.toggle_play(now());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().game.reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
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
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.update_hud(time);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Roto Goal (native) starting...");
    log::info!("Native mode runs a headless match - run with `trunk serve` for the web version");

    run_headless_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a full match at a simulated 60 Hz and report the result
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_match() {
    use roto_goal::sim::GameEvent;
    use roto_goal::{Match, Settings};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let settings = Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64);
    let mut game = Match::new(seed, &settings);
    log::info!("Match initialized with seed: {}", seed);

    let mut now = 0.0;
    game.toggle_play(now);
    while game.is_playing() {
        now += FRAME_MS;
        if let Some(GameEvent::Goal { scorer }) = game.frame(now) {
            log::info!("{:?} scored at {}'", scorer, game.minute(now));
        }
    }

    let score = game.pitch.score();
    println!(
        "Full time after {} frames: {} - {} ({} goals)",
        game.pitch.time_steps,
        score.team1,
        score.team2,
        score.total()
    );
    match serde_json::to_string_pretty(&game.pitch.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Could not serialize snapshot: {}", e),
    }
}
