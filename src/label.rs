use std::time::Duration;

use raylib::prelude::*;

use crate::fade::OpacityFade;
use crate::fading_text::FadingText;
use crate::state::{Command, Fade};

/// Renders a [`FadingText`] with raylib, playing its fades as opacity tweens.
pub struct FadingLabel {
    widget: FadingText,
    fade_in: OpacityFade,
    fade_out: OpacityFade,

    text: Option<String>,
    opacity: f32,
}

impl FadingLabel {
    pub fn new(widget: FadingText, fade_in: OpacityFade, fade_out: OpacityFade) -> Self {
        Self {
            widget,
            fade_in,
            fade_out,
            text: None,
            opacity: 1.0,
        }
    }

    pub fn widget(&self) -> &FadingText {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut FadingText {
        &mut self.widget
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn update(&mut self, dt: f32) {
        self.widget.update(Duration::from_secs_f32(dt.max(0.0)));
        self.apply_commands();

        if self.fade_in.is_running() {
            self.fade_in.update(dt);
            self.opacity = self.fade_in.opacity();
        }

        if self.fade_out.is_running() {
            let finished = self.fade_out.update(dt);
            self.opacity = self.fade_out.opacity();
            if finished {
                self.widget.on_fade_out_end();
                self.apply_commands();
            }
        }
    }

    /// Draw the current text centered on `center`
    pub fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2, font_size: i32, color: Color) {
        let Some(text) = self.text.as_deref() else {
            return;
        };

        let width = d.measure_text(text, font_size);
        let alpha = (color.a as f32 * self.opacity).round() as u8;
        d.draw_text(
            text,
            center.x as i32 - width / 2,
            center.y as i32 - font_size / 2,
            font_size,
            Color::new(color.r, color.g, color.b, alpha),
        );
    }

    fn apply_commands(&mut self) {
        for command in self.widget.drain_commands() {
            match command {
                Command::Display(text) => self.text = Some(text),
                Command::Play(Fade::In) => {
                    self.fade_out.cancel();
                    self.fade_in.start();
                    self.opacity = self.fade_in.opacity();
                }
                Command::Play(Fade::Out) => {
                    self.fade_in.cancel();
                    self.fade_out.start();
                    self.opacity = self.fade_out.opacity();
                }
                Command::CancelFade => {
                    self.fade_in.cancel();
                    self.fade_out.cancel();
                    self.opacity = 1.0;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CyclePhase;

    const STEP: f32 = 0.125;

    fn label(texts: &[&str]) -> FadingLabel {
        let mut widget = FadingText::new();
        widget.set_timeout(1000).unwrap();
        widget.set_texts(texts.iter().copied()).unwrap();
        FadingLabel::new(widget, OpacityFade::fade_in(0.5), OpacityFade::fade_out(0.5))
    }

    fn run(label: &mut FadingLabel, seconds: f32) {
        let steps = (seconds / STEP).round() as usize;
        for _ in 0..steps {
            label.update(STEP);
        }
    }

    #[test]
    fn fades_in_the_first_text() {
        let mut label = label(&["A", "B"]);
        label.update(STEP);
        assert_eq!(label.text(), Some("A"));
        assert!(label.opacity() < 1.0);

        run(&mut label, 0.5);
        assert_eq!(label.opacity(), 1.0);
    }

    #[test]
    fn switches_text_after_fade_out() {
        let mut label = label(&["A", "B"]);

        // 1.5s hold, then a 0.5s fade-out
        run(&mut label, 1.5);
        assert_eq!(label.widget().phase(), CyclePhase::FadingOut);
        assert_eq!(label.text(), Some("A"));

        run(&mut label, 0.5);
        assert_eq!(label.text(), Some("B"));
        assert_eq!(label.widget().position(), 1);
        assert_eq!(label.widget().phase(), CyclePhase::Holding);
    }

    #[test]
    fn pause_freezes_text_at_full_opacity() {
        let mut label = label(&["A", "B"]);
        run(&mut label, 1.75);
        label.widget_mut().pause();

        run(&mut label, 10.0);
        assert_eq!(label.text(), Some("A"));
        assert_eq!(label.opacity(), 1.0);
        assert_eq!(label.widget().position(), 0);
    }
}
