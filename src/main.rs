use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use fading_text::constants::*;
use fading_text::{DemoConfig, FadingLabel, FadingText, OpacityFade, TimeUnit, load_text_lines};

const DEMO_TEXTS: &[&str] = &[
    "Fading text",
    "cycles through strings",
    "one cross-fade at a time",
    "and starts over at the end",
];

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

#[derive(Parser, Debug)]
#[command(version, about = "Cycle through texts with a cross-fade")]
struct Args {
    /// Configuration file (defaults to fading_text.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File with one text per line
    #[arg(short, long)]
    texts: Option<PathBuf>,

    /// Seconds between text changes
    #[arg(long)]
    timeout: Option<f64>,

    /// Shuffle the texts before starting
    #[arg(long)]
    shuffle: bool,

    /// Texts to display, used when no text file is given
    #[arg(value_name = "TEXT")]
    words: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // --- Load Configuration ---
    let mut config = match &args.config {
        Some(path) => DemoConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => DemoConfig::load_or_default(),
    };
    config.merge_with_env();

    if let Some(path) = &args.texts {
        config.widget.texts = load_text_lines(path).with_context(|| format!("Failed to load texts from {:?}", path))?;
    } else if !args.words.is_empty() {
        config.widget.texts = args.words.clone();
    }
    if config.widget.texts.is_empty() {
        config.widget.texts = DEMO_TEXTS.iter().map(|s| s.to_string()).collect();
    }
    config.widget.shuffle |= args.shuffle;

    let mut widget = FadingText::from_config(&config.widget).context("Invalid widget configuration")?;
    if let Some(seconds) = args.timeout {
        widget.set_timeout_in(seconds, TimeUnit::Seconds).context("Invalid --timeout")?;
    }
    log::info!("Cycling through {} texts every {:?}", widget.texts().len(), widget.effective_delay());

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let fade_duration = config.window.fade_duration;
    let mut label = FadingLabel::new(
        widget,
        OpacityFade::fade_in(fade_duration),
        OpacityFade::fade_out(fade_duration),
    );

    // Attaching the label to the window starts the first cycle
    label.widget_mut().resume();

    // --- Main Loop ---
    while !rl.window_should_close() {
        handle_input(&rl, &mut label);
        label.update(rl.get_frame_time());

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        label.draw(&mut d, Vector2::new(sw * 0.5, sh * 0.45), config.window.font_size, Color::WHITE);

        let widget = label.widget();
        let status = format!(
            "timeout {:.0}s  text {}/{}{}",
            widget.timeout().as_secs_f64(),
            widget.position() + 1,
            widget.texts().len(),
            if widget.is_stopped() {
                "  [stopped]"
            } else if !widget.is_shown() {
                "  [paused]"
            } else {
                ""
            }
        );
        d.draw_text(&status, 20, sh as i32 - 60, 20, Color::GRAY);
        d.draw_text(
            "SPACE pause/resume  S stop  R restart  F refresh  H shuffle  UP/DOWN timeout  1-9 jump",
            20,
            sh as i32 - 30,
            20,
            Color::DARKGRAY,
        );
    }

    Ok(())
}

fn handle_input(rl: &RaylibHandle, label: &mut FadingLabel) {
    let widget = label.widget_mut();

    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        if widget.is_shown() {
            widget.pause();
        } else {
            widget.resume();
        }
    }
    if rl.is_key_pressed(KeyboardKey::KEY_S) {
        widget.stop();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_R) {
        widget.restart();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_F) {
        widget.force_refresh();
    }
    if rl.is_key_pressed(KeyboardKey::KEY_H) {
        if let Err(e) = widget.shuffle() {
            log::warn!("Cannot shuffle: {}", e);
        }
    }

    // Up/Down step the timeout by one second and apply it at once
    let step = if rl.is_key_pressed(KeyboardKey::KEY_UP) {
        1.0
    } else if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
        -1.0
    } else {
        0.0
    };
    if step != 0.0 {
        let seconds = (widget.timeout().as_secs_f64().round() + step).max(1.0);
        if widget.set_timeout_in(seconds, TimeUnit::Seconds).is_ok() {
            widget.force_refresh();
        }
    }

    for (position, key) in DIGIT_KEYS.iter().enumerate() {
        if rl.is_key_pressed(*key) {
            if let Err(e) = widget.fade_to(position) {
                log::warn!("Cannot jump: {}", e);
            }
        }
    }
}
