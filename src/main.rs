// src/main.rs
use nannou::prelude::*;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use servicedeck::{
    config::Config,
    controllers::{DeckController, OscController},
    input::{ScrollInput, StepDirection},
    models::ServiceCatalog,
    render::DeckRenderer,
    DeckError,
};

struct Model {
    config: Config,
    catalog: ServiceCatalog,

    // Deck state and drawing
    deck: DeckController,
    renderer: DeckRenderer,

    // Comms
    osc_controller: Option<OscController>,

    // Touch drag in progress: (touch id, last position)
    touch_anchor: Option<(u64, Point2)>,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // a second init (never expected) is ignored
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init();
}

fn fatal(err: DeckError) -> ! {
    error!(error = %err, "startup failed");
    std::process::exit(1);
}

fn model(app: &App) -> Model {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info");
            fatal(e)
        }
    };
    init_tracing(&config.logging.level);

    let catalog = ServiceCatalog::load(config.resolve_services_path()).unwrap_or_else(|e| fatal(e));
    info!(services = catalog.len(), "service catalog loaded");

    let osc_controller = if config.osc.enabled {
        match OscController::new(config.osc.rx_port) {
            Ok(controller) => Some(controller),
            Err(e) => {
                warn!(error = %e, "OSC disabled");
                None
            }
        }
    } else {
        None
    };

    let window_id = match app
        .new_window()
        .title(format!("servicedeck {}", env!("CARGO_PKG_VERSION")))
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_wheel(mouse_wheel)
        .touch(touch)
        .resized(resized)
        .build()
    {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, "failed to open window");
            std::process::exit(1);
        }
    };

    let (width, height) = app
        .window(window_id)
        .map(|window| window.rect().w_h())
        .unwrap_or((config.window.width as f32, config.window.height as f32));

    let deck = DeckController::new(&config, catalog.len(), width, height);
    let textures = DeckRenderer::load_textures(app, &config.resolve_image_dir(), catalog.len());
    let renderer = DeckRenderer::new(textures);

    Model {
        config,
        catalog,
        deck,
        renderer,
        osc_controller,
        touch_anchor: None,
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Down | Key::PageDown => model
            .deck
            .handle_input(ScrollInput::Key(StepDirection::Forward)),
        Key::Up | Key::PageUp => model
            .deck
            .handle_input(ScrollInput::Key(StepDirection::Backward)),
        Key::Home => model.deck.return_to_grid(),
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q | Key::Escape => {
            info!("quit requested");
            app.quit();
        }
        _ => (),
    }
}

// wheel deltas are positive toward the top of the page; forward is down
fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    let pixels = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * model.config.scroll.line_height,
        MouseScrollDelta::PixelDelta(position) => -(position.y as f32),
    };
    model.deck.handle_input(ScrollInput::Wheel(pixels));
}

// dragging a finger upward moves forward through the deck
fn touch(_app: &App, model: &mut Model, event: TouchEvent) {
    match event.phase {
        TouchPhase::Started => {
            model.touch_anchor = Some((event.id, event.position));
        }
        TouchPhase::Moved => {
            if let Some((id, last)) = model.touch_anchor {
                if id == event.id {
                    let dy = event.position.y - last.y;
                    model.deck.handle_input(ScrollInput::Touch(dy));
                    model.touch_anchor = Some((id, event.position));
                }
            }
        }
        TouchPhase::Ended | TouchPhase::Cancelled => {
            if model.touch_anchor.is_some_and(|(id, _)| id == event.id) {
                model.touch_anchor = None;
            }
        }
    }
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    model.deck.relayout(size.x, size.y);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag && duration.as_secs_f32() > 0.0 {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    // Process OSC messages
    if let Some(osc) = model.osc_controller.as_mut() {
        osc.process_messages();
        for command in osc.take_commands() {
            debug!(?command, "OSC command");
            model.deck.handle_osc(command);
        }
    }

    model.deck.update(app.time);
    model.renderer.update(&model.deck);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    model.renderer.draw(&draw, &model.deck, &model.catalog);

    if model.debug_flag {
        let rect = app.window_rect();
        draw.text(&format!("FPS: {:.1}\n{}", model.fps, model.deck.status_line()))
            .x_y(rect.left() + 220.0, rect.top() - 30.0)
            .w(400.0)
            .left_justify()
            .color(RED);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        warn!(error = ?e, "failed to render frame");
    }
}
