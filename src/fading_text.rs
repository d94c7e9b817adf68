//! The fading label state machine.
//!
//! `FadingText` knows which text to show and when to fade, but nothing about
//! how a label is drawn. Every state change is reported as a [`Command`]; the
//! renderer drains them, plays the fades, and reports back through
//! [`FadingText::on_fade_out_end`] when a fade-out has completed.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::FadingTextConfig;
use crate::constants::*;
use crate::error::{FadingTextError, Result};
use crate::state::{Command, CyclePhase, Fade};
use crate::timer::Timer;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
}

impl TimeUnit {
    fn millis(self) -> f64 {
        match self {
            TimeUnit::Milliseconds => 1.0,
            TimeUnit::Seconds => 1_000.0,
            TimeUnit::Minutes => 60_000.0,
        }
    }
}

#[derive(Debug)]
pub struct FadingText {
    texts: Vec<String>,
    position: usize,

    timeout: Duration,
    transition_floor: Duration,

    is_shown: bool,
    stopped: bool,

    phase: CyclePhase,
    timer: Timer,
    commands: Vec<Command>,
}

impl Default for FadingText {
    fn default() -> Self {
        Self::new()
    }
}

impl FadingText {
    pub fn new() -> Self {
        Self {
            texts: Vec::new(),
            position: 0,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS as u64),
            transition_floor: Duration::from_millis(TRANSITION_FLOOR_MS),
            is_shown: true,
            stopped: false,
            phase: CyclePhase::Idle,
            timer: Timer::new(),
            commands: Vec::new(),
        }
    }

    /// Build a widget from its declarative attributes.
    ///
    /// Texts are taken as-is (an absent list leaves the label blank until
    /// [`set_texts`](Self::set_texts) is called). The cycle does not start
    /// until the host calls [`resume`](Self::resume).
    pub fn from_config(config: &FadingTextConfig) -> Result<Self> {
        Self::from_config_with_rng(config, &mut rand::rng())
    }

    pub fn from_config_with_rng<R: Rng + ?Sized>(config: &FadingTextConfig, rng: &mut R) -> Result<Self> {
        if config.timeout <= 0 {
            return Err(FadingTextError::InvalidTimeout);
        }

        let mut widget = Self::new();
        widget.texts = config.texts.clone();
        widget.timeout = Duration::from_millis(config.timeout as u64);
        widget.transition_floor = Duration::from_millis(config.transition_floor_ms);
        if config.shuffle {
            widget.shuffle_with(rng)?;
        }
        Ok(widget)
    }

    // --- Accessors ---

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn current_text(&self) -> Option<&str> {
        self.texts.get(self.position).map(String::as_str)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Configured hold time, without the transition floor
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Delay actually scheduled between the fade-in and the fade-out
    pub fn effective_delay(&self) -> Duration {
        self.timeout.saturating_add(self.transition_floor)
    }

    pub fn is_shown(&self) -> bool {
        self.is_shown
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    // --- Configuration ---

    pub fn set_texts<I, S>(&mut self, texts: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.is_empty() {
            log::warn!("Rejected empty text list");
            return Err(FadingTextError::EmptyTextList);
        }

        self.texts = texts;
        self.cancel_cycle();
        self.position = 0;
        self.start_cycle();
        Ok(())
    }

    /// Set the hold time in milliseconds. Applies from the next cycle.
    pub fn set_timeout(&mut self, timeout_ms: i64) -> Result<()> {
        if timeout_ms < 1 {
            log::warn!("Rejected timeout of {} ms", timeout_ms);
            return Err(FadingTextError::InvalidTimeout);
        }
        self.timeout = Duration::from_millis(timeout_ms as u64);
        Ok(())
    }

    pub fn set_timeout_in(&mut self, timeout: f64, unit: TimeUnit) -> Result<()> {
        if !timeout.is_finite() || timeout <= 0.0 {
            log::warn!("Rejected timeout of {} {:?}", timeout, unit);
            return Err(FadingTextError::InvalidTimeout);
        }
        let timeout = Duration::try_from_secs_f64(timeout * unit.millis() / 1_000.0)
            .map_err(|_| FadingTextError::InvalidTimeout)?;
        self.set_timeout_duration(timeout)
    }

    pub fn set_timeout_duration(&mut self, timeout: Duration) -> Result<()> {
        if timeout.is_zero() {
            log::warn!("Rejected zero timeout");
            return Err(FadingTextError::InvalidTimeout);
        }
        self.timeout = timeout;
        Ok(())
    }

    /// Randomly permute the texts. Must be called again after every `set_texts`.
    pub fn shuffle(&mut self) -> Result<()> {
        self.shuffle_with(&mut rand::rng())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.texts.is_empty() {
            return Err(FadingTextError::EmptyTextList);
        }
        self.texts.shuffle(rng);
        Ok(())
    }

    // --- Lifecycle ---

    /// Restart the cycle immediately, e.g. to apply a new timeout at once
    pub fn force_refresh(&mut self) {
        self.cancel_cycle();
        self.start_cycle();
    }

    /// Called by the host when the label becomes visible
    pub fn resume(&mut self) {
        if self.is_shown && self.phase != CyclePhase::Idle {
            return;
        }
        log::info!("Resuming fading text at position {}", self.position);
        self.is_shown = true;
        self.cancel_cycle();
        self.start_cycle();
    }

    /// Called by the host when the label is hidden
    pub fn pause(&mut self) {
        log::info!("Pausing fading text at position {}", self.position);
        self.is_shown = false;
        self.cancel_cycle();
    }

    /// Unlike `pause`, nothing animates again until `restart` is called
    pub fn stop(&mut self) {
        log::info!("Stopping fading text");
        self.is_shown = false;
        self.stopped = true;
        self.cancel_cycle();
    }

    pub fn restart(&mut self) {
        log::info!("Restarting fading text");
        self.is_shown = true;
        self.stopped = false;
        self.cancel_cycle();
        self.start_cycle();
    }

    /// Fade to a specific text and hold it there.
    ///
    /// The widget is left paused; call `resume` to continue cycling from
    /// this position.
    pub fn fade_to(&mut self, position: usize) -> Result<()> {
        if position >= self.texts.len() {
            return Err(FadingTextError::PositionOutOfRange {
                position,
                len: self.texts.len(),
            });
        }

        self.cancel_cycle();
        self.position = position;
        self.is_shown = true;
        self.start_cycle();

        self.timer.cancel();
        self.is_shown = false;
        self.phase = CyclePhase::Idle;
        Ok(())
    }

    // --- Animation loop ---

    pub fn update(&mut self, dt: Duration) {
        if !self.timer.advance(dt) {
            return;
        }

        if self.can_animate() {
            log::debug!("Fading out text {}", self.position);
            self.commands.push(Command::Play(Fade::Out));
            self.phase = CyclePhase::FadingOut;
        } else {
            self.phase = CyclePhase::Idle;
        }
    }

    /// Completion of the fade-out animation. Stale completions are ignored.
    pub fn on_fade_out_end(&mut self) {
        if self.phase != CyclePhase::FadingOut {
            return;
        }
        self.phase = CyclePhase::Idle;

        if self.is_shown && !self.texts.is_empty() {
            self.position = (self.position + 1) % self.texts.len();
            self.start_cycle();
        }
    }

    fn can_animate(&self) -> bool {
        self.is_shown && !self.stopped
    }

    fn start_cycle(&mut self) {
        let Some(text) = self.texts.get(self.position) else {
            self.phase = CyclePhase::Idle;
            return;
        };
        self.commands.push(Command::Display(text.clone()));

        if self.can_animate() {
            log::debug!("Fading in text {} for {:?}", self.position, self.effective_delay());
            self.commands.push(Command::Play(Fade::In));
            self.timer.schedule(self.effective_delay());
            self.phase = CyclePhase::Holding;
        } else {
            self.phase = CyclePhase::Idle;
        }
    }

    fn cancel_cycle(&mut self) {
        self.timer.cancel();
        self.commands.push(Command::CancelFade);
        self.phase = CyclePhase::Idle;
    }
}
