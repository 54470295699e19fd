//! Scratch & Win entry point
//!
//! Web: wires the DOM canvas and buttons to the game.
//! Native: plays one card headlessly with a scripted zig-zag stroke.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::Clamped;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData, MouseEvent, TouchEvent,
    };

    use glam::Vec2;
    use scratch_win::display::{cover_style, css_hex};
    use scratch_win::engine::{DrawableArea, GestureEvent, Step};
    use scratch_win::{Game, Settings, SurfaceError, rendered_to_logical};

    /// Browser-side state: the game plus the canvas it draws to
    struct Host {
        game: Game,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        document: Document,
    }

    impl Host {
        /// Upload the cover raster to the canvas
        fn present(&self) {
            let surface = self.game.current().surface();
            let (w, h) = surface.backing_size();
            match ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(surface.raster().as_bytes()),
                w,
                h,
            ) {
                Ok(image) => {
                    if let Err(e) = self.ctx.put_image_data(&image, 0.0, 0.0) {
                        log::warn!("putImageData failed: {:?}", e);
                    }
                }
                Err(e) => log::warn!("ImageData creation failed: {:?}", e),
            }
        }

        /// Feed one gesture and refresh whatever it changed
        fn handle(&mut self, event: GestureEvent) {
            match self.game.handle_gesture(event) {
                Step::Scratched { .. } => {
                    self.present();
                    self.update_hud();
                }
                Step::Revealed { .. } => {
                    self.present();
                    self.set_cover_visible(false);
                    self.update_hud();
                }
                Step::StrokeEnded | Step::Ignored => {}
            }
        }

        /// Deal the next card ("Try Another Card")
        fn retry(&mut self) {
            match self.game.new_card() {
                Ok(card) => log::info!("Dealt {}", card.id),
                Err(e) => {
                    log::error!("Could not deal a new card: {}", e);
                    return;
                }
            }
            // Cover goes back up before the new prize is written under it
            self.set_cover_visible(true);
            self.size_canvas();
            self.present();
            self.update_prize();
            self.update_hud();
        }

        fn size_canvas(&self) {
            let (w, h) = self.game.current().surface().backing_size();
            self.canvas.set_width(w);
            self.canvas.set_height(h);
        }

        fn set_cover_visible(&self, visible: bool) {
            let (transition, opacity) = cover_style(visible);
            let style = self.canvas.style();
            let _ = style.set_property("transition", transition);
            let _ = style.set_property("opacity", opacity);
        }

        /// Logical size the current surface was allocated at
        fn logical_size(&self) -> Vec2 {
            self.game.current().surface().logical_size()
        }

        /// Prize panel under the cover
        fn update_prize(&self) {
            let display = self.game.reward_display();
            if let Some(el) = self.document.get_element_by_id("prize-panel") {
                let style = format!("background: {}", display.background_css());
                let _ = el.set_attribute("style", &style);
            }
            if let Some(el) = self.document.get_element_by_id("prize-emoji") {
                el.set_text_content(Some(display.emoji));
            }
            if let Some(el) = self.document.get_element_by_id("prize-text") {
                el.set_text_content(Some(display.text));
                let style = format!("color: {}", css_hex(display.text_color));
                let _ = el.set_attribute("style", &style);
            }
        }

        /// Counters, progress pill and retry button
        fn update_hud(&self) {
            if let Some(el) = self.document.get_element_by_id("total-points") {
                el.set_text_content(Some(&self.game.total_points().to_string()));
            }
            if let Some(el) = self.document.get_element_by_id("games-played") {
                el.set_text_content(Some(&self.game.games_played().to_string()));
            }

            if let Some(el) = self.document.get_element_by_id("progress") {
                match self.game.scratch_label() {
                    Some(label) => {
                        el.set_text_content(Some(&label));
                        let _ = el.set_attribute("class", "");
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            if let Some(el) = self.document.get_element_by_id("retry-btn") {
                let class = if self.game.is_revealed() { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    /// Find the canvas and its 2D context
    fn acquire_canvas(
        document: &Document,
    ) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), SurfaceError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("scratch-canvas")
            .ok_or_else(|| SurfaceError::ContextUnavailable("no #scratch-canvas element".into()))?
            .dyn_into()
            .map_err(|_| {
                SurfaceError::ContextUnavailable("#scratch-canvas is not a canvas".into())
            })?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::ContextUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| SurfaceError::ContextUnavailable("2d context not supported".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable("unexpected context type".into()))?;

        Ok((canvas, ctx))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Scratch & Win starting...");

        let Some(window) = web_sys::window() else { return };
        let Some(document) = window.document() else { return };

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        // A card that can't get a canvas just stays inert
        let (canvas, ctx) = match acquire_canvas(&document) {
            Ok(pair) => pair,
            Err(e) => {
                log::error!("Scratch card disabled: {}", e);
                return;
            }
        };

        let settings = Settings::load(canvas.get_attribute("data-settings").as_deref());
        let area = DrawableArea::new(
            canvas.client_width() as f32,
            canvas.client_height() as f32,
            window.device_pixel_ratio() as f32,
        );

        let seed = js_sys::Date::now() as u64;
        let game = match Game::new(seed, area, settings) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Scratch card disabled: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let host = Rc::new(RefCell::new(Host {
            game,
            canvas: canvas.clone(),
            ctx,
            document,
        }));

        {
            let h = host.borrow();
            h.size_canvas();
            h.present();
            h.update_prize();
            h.update_hud();
        }

        setup_input_handlers(&canvas, host.clone());
        setup_retry_button(host);

        log::info!("Scratch & Win running!");
    }

    /// Client coordinates -> canvas-local logical coordinates
    ///
    /// Measured against the canvas' current box, so a resized card still
    /// scratches under the pointer.
    fn local_point(
        canvas: &HtmlCanvasElement,
        logical: Vec2,
        client_x: i32,
        client_y: i32,
    ) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let offset = Vec2::new(
            client_x as f32 - rect.left() as f32,
            client_y as f32 - rect.top() as f32,
        );
        let rendered = Vec2::new(rect.width() as f32, rect.height() as f32);
        rendered_to_logical(offset, rendered, logical)
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, host: Rc<RefCell<Host>>) {
        // Mouse down - start a stroke
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut host = host.borrow_mut();
                let logical = host.logical_size();
                let p = local_point(&canvas_clone, logical, event.client_x(), event.client_y());
                host.handle(GestureEvent::PointerDown(p));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - scratch while the button is held
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut host = host.borrow_mut();
                let logical = host.logical_size();
                let p = local_point(&canvas_clone, logical, event.client_x(), event.client_y());
                host.handle(GestureEvent::PointerMove(p));
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up / leave - end the stroke
        for (name, gesture) in [
            ("mouseup", GestureEvent::PointerUp),
            ("mouseleave", GestureEvent::PointerLeave),
        ] {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                host.borrow_mut().handle(gesture);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (first finger only)
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let mut host = host.borrow_mut();
                    let logical = host.logical_size();
                    let p = local_point(&canvas_clone, logical, touch.client_x(), touch.client_y());
                    host.handle(GestureEvent::TouchStart(p));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let host = host.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                // Keep the page from scrolling while scratching
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut host = host.borrow_mut();
                    let logical = host.logical_size();
                    let p = local_point(&canvas_clone, logical, touch.client_x(), touch.client_y());
                    host.handle(GestureEvent::TouchMove(p));
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                host.borrow_mut().handle(GestureEvent::TouchEnd);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_retry_button(host: Rc<RefCell<Host>>) {
        let btn = host.borrow().document.get_element_by_id("retry-btn");
        let Some(btn) = btn else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            host.borrow_mut().retry();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
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
    log::info!("Scratch & Win (native) starting...");
    log::info!("Native mode plays one scripted card - use `trunk serve` for the web version");

    let json = std::env::args().nth(1).and_then(|path| {
        std::fs::read_to_string(&path)
            .map_err(|e| log::warn!("Could not read settings {}: {}", path, e))
            .ok()
    });
    let settings = scratch_win::Settings::load(json.as_deref());

    play_scripted_card(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Zig-zag across a card until it reveals, logging progress
#[cfg(not(target_arch = "wasm32"))]
fn play_scripted_card(settings: scratch_win::Settings) {
    use glam::Vec2;
    use scratch_win::Game;
    use scratch_win::engine::{DrawableArea, GestureEvent, Step};

    // 42rem wide at 3:2
    let area = DrawableArea::new(672.0, 448.0, 1.0);
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = match Game::new(seed, area, settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Scratch card disabled: {}", e);
            return;
        }
    };

    let step_px = game.settings().brush_radius;
    let mut last_label = None;
    game.handle_gesture(GestureEvent::PointerDown(Vec2::ZERO));

    let mut y = 0.0;
    let mut leftward = false;
    'stroke: while y <= area.size.y {
        let mut x = 0.0;
        while x <= area.size.x {
            let px = if leftward { area.size.x - x } else { x };
            let step = game.handle_gesture(GestureEvent::PointerMove(Vec2::new(px, y)));

            let label = game.scratch_label();
            if label.is_some() && label != last_label {
                log::info!("{}", label.as_deref().unwrap_or_default());
                last_label = label;
            }
            if matches!(step, Step::Revealed { .. }) {
                break 'stroke;
            }
            x += step_px;
        }
        y += step_px;
        leftward = !leftward;
    }
    game.handle_gesture(GestureEvent::PointerUp);

    let display = game.reward_display();
    println!(
        "{} {} ({:.0}% scratched) - total points {}, cards scratched {}",
        display.emoji,
        display.text,
        game.scratch_percentage(),
        game.total_points(),
        game.games_played()
    );
}
