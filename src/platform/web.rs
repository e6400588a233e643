//! Browser host
//!
//! Canvas 2D drawing, document key/mouse listeners, a `setInterval` timer,
//! `alert` for notices and a page reload for restarts.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::{Game, Notice};
use crate::config::Config;
use crate::renderer::Surface;

/// Browser setup failures
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("No global window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("No element with id `{0}`")]
    NoCanvas(String),
    #[error("Element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("Canvas has no 2D context")]
    NoContext,
    #[error("Browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}

/// Render surface backed by a canvas 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    font: String,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, font: &str) -> Self {
        Self {
            ctx,
            font: font.to_string(),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            cx as f64,
            cy as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: &str) {
        self.ctx.set_font(&self.font);
        self.ctx.set_fill_style_str(color);
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// Wire the game to the canvas with the given id and start the timer
pub fn start(canvas_id: &str) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| HostError::NoCanvas(canvas_id.to_string()))?
        .dyn_into()
        .map_err(|_| HostError::NotACanvas(canvas_id.to_string()))?;

    let game = Game::new(Config::load());
    let config = game.config();
    canvas.set_width(config.canvas_width as u32);
    canvas.set_height(config.canvas_height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(HostError::NoContext)?
        .dyn_into()
        .map_err(|_| HostError::NoContext)?;
    let surface = CanvasSurface::new(ctx, &config.palette.font);
    let interval_ms = config.tick_interval_ms as i32;

    let game = Rc::new(RefCell::new(game));

    setup_input_handlers(&document, &canvas, game.clone())?;
    start_timer(&window, game, surface, interval_ms)?;

    log::info!("Breakout running ({}ms tick)", interval_ms);
    Ok(())
}

fn setup_input_handlers(
    document: &Document,
    canvas: &HtmlCanvasElement,
    game: Rc<RefCell<Game>>,
) -> Result<(), HostError> {
    // Key down
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_down(&event.key());
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Key up
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().key_up(&event.key());
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse move, relative to the canvas' left edge
    {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let left = canvas.get_bounding_client_rect().left();
            let relative_x = event.client_x() as f64 - left;
            game.borrow_mut().pointer_move(relative_x as f32);
        });
        document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn start_timer(
    window: &web_sys::Window,
    game: Rc<RefCell<Game>>,
    mut surface: CanvasSurface,
    interval_ms: i32,
) -> Result<(), HostError> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        let notice = game.borrow_mut().frame(&mut surface);
        if let Some(notice) = notice {
            show_notice(&game, notice);
        }
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    closure.forget();
    Ok(())
}

/// Block on an alert, then resume or restart
fn show_notice(game: &Rc<RefCell<Game>>, notice: Notice) {
    let Some(window) = web_sys::window() else {
        game.borrow_mut().acknowledge();
        return;
    };

    if let Err(e) = window.alert_with_message(&notice.to_string()) {
        log::warn!("alert failed: {:?}", e);
    }

    if notice.is_terminal() {
        // Full reload discards everything, same as a fresh visit
        match window.location().reload() {
            Ok(()) => return,
            Err(e) => log::warn!("reload failed, restarting in place: {:?}", e),
        }
    }
    game.borrow_mut().acknowledge();
}
