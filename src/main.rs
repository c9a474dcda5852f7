//! Breakout entry point
//!
//! On the web the game draws into the page's `<canvas>` and is driven by a
//! browser interval timer. Natively it runs headless on autopilot and prints
//! frames as text.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use breakout::renderer::CanvasSurface;
    use breakout::{Game, Settings};

    /// Game plus the browser resources bound to it
    struct Host {
        game: Game,
        surface: CanvasSurface,
        interval: Option<i32>,
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or("no canvas element")?
            .dyn_into()?;

        let settings = Settings::default();
        canvas.set_width(settings.arena_width as u32);
        canvas.set_height(settings.arena_height as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(settings, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let input = game.input();

        let host = Rc::new(RefCell::new(Host {
            game,
            surface: CanvasSurface::new(ctx),
            interval: None,
        }));

        // Paddle follows the pointer anywhere on the page
        {
            let canvas = canvas.clone();
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let left = canvas.get_bounding_client_rect().left();
                input.pointer_moved((event.client_x() as f64 - left) as f32);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click on the end screen starts a new run
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                input.click();
                let restarted = host.borrow_mut().game.poll_restart();
                if restarted {
                    if let Err(e) = start_interval(&host) {
                        log::error!("Failed to restart tick timer: {:?}", e);
                    }
                }
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        start_interval(&host)
    }

    /// Recurring tick timer; clears itself once the game stops ticking
    fn start_interval(host: &Rc<RefCell<Host>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let interval_ms = host.borrow().game.settings().tick_interval_ms().round() as i32;

        let tick_host = host.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut guard = tick_host.borrow_mut();
            let Host {
                game,
                surface,
                interval,
            } = &mut *guard;

            game.step(surface);

            if !game.is_ticking() {
                if let (Some(id), Some(window)) = (interval.take(), web_sys::window()) {
                    window.clear_interval_with_handle(id);
                    log::info!("Tick timer stopped");
                }
            }
        });
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        )?;
        closure.forget();

        host.borrow_mut().interval = Some(id);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Breakout (web) starting...");

    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start game: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let options = match native::Options::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{}", native::USAGE);
            std::process::exit(2);
        }
    };

    if let Err(e) = native::run(options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;

    use breakout::renderer::{AsciiSurface, RecordingSurface, Surface};
    use breakout::{Game, Settings};

    pub const USAGE: &str =
        "usage: breakout [settings.json] [--seed N] [--runs N] [--max-ticks N] [--dump-frame PATH]";

    /// Terminal grid size
    const COLS: usize = 90;
    const ROWS: usize = 30;

    #[derive(Debug)]
    pub struct Options {
        settings_path: Option<String>,
        seed: u64,
        runs: u32,
        max_ticks: u64,
        dump_frame: Option<String>,
    }

    impl Options {
        pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
            let mut options = Options {
                settings_path: None,
                seed: 0x5eed,
                runs: 1,
                max_ticks: 50_000,
                dump_frame: None,
            };

            while let Some(arg) = args.next() {
                let mut value = |name: &str| {
                    args.next()
                        .ok_or_else(|| format!("{name} needs a value"))
                };
                match arg.as_str() {
                    "--seed" => options.seed = parse(&value("--seed")?)?,
                    "--runs" => options.runs = parse(&value("--runs")?)?,
                    "--max-ticks" => options.max_ticks = parse(&value("--max-ticks")?)?,
                    "--dump-frame" => options.dump_frame = Some(value("--dump-frame")?),
                    flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
                    path => options.settings_path = Some(path.to_string()),
                }
            }
            Ok(options)
        }
    }

    fn parse<T: std::str::FromStr>(s: &str) -> Result<T, String> {
        s.parse().map_err(|_| format!("invalid number: {s}"))
    }

    /// Draw calls go to both the text grid and the recorder
    struct Tee {
        ascii: AsciiSurface,
        recording: RecordingSurface,
    }

    impl Surface for Tee {
        fn clear_region(&mut self, pos: breakout::Point, size: breakout::Size) {
            self.ascii.clear_region(pos, size);
            self.recording.clear_region(pos, size);
        }

        fn fill_circle(&mut self, center: breakout::Point, radius: f32, color: breakout::Color) {
            self.ascii.fill_circle(center, radius, color);
            self.recording.fill_circle(center, radius, color);
        }

        fn fill_rect(&mut self, pos: breakout::Point, size: breakout::Size, color: breakout::Color) {
            self.ascii.fill_rect(pos, size, color);
            self.recording.fill_rect(pos, size, color);
        }

        fn draw_text(
            &mut self,
            text: &str,
            pos: breakout::Point,
            font: breakout::renderer::Font,
            align: breakout::renderer::TextAlign,
            color: breakout::Color,
        ) {
            self.ascii.draw_text(text, pos, font, align, color);
            self.recording.draw_text(text, pos, font, align, color);
        }
    }

    pub fn run(options: Options) -> Result<(), Box<dyn Error>> {
        log::info!("Breakout (native) starting...");

        let settings = match &options.settings_path {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let mut game = Game::new(settings, options.seed)?;
        game.set_autopilot(true);

        let dt = game.settings().tick_dt();
        let mut surface = Tee {
            ascii: AsciiSurface::new(COLS, ROWS, game.settings().arena_size()),
            recording: RecordingSurface::default(),
        };

        loop {
            let mut ticks = 0u64;
            while game.is_ticking() && ticks < options.max_ticks {
                ticks += u64::from(game.frame(dt, &mut surface));
                if ticks == 1 {
                    println!("{}", surface.ascii);
                }
            }

            if game.is_ticking() {
                log::warn!(
                    "Run {} stopped after {} ticks with {} bricks left",
                    game.runs(),
                    ticks,
                    game.state().block_count()
                );
                println!("{}", surface.ascii);
                break;
            }

            println!("{}", surface.ascii);
            if let Some(path) = &options.dump_frame {
                std::fs::write(path, surface.recording.to_json()?)?;
                log::info!("Final frame written to {}", path);
            }

            if game.runs() >= options.runs {
                break;
            }
            game.input().click();
            game.poll_restart();
        }

        Ok(())
    }

}
