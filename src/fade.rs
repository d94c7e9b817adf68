use raylib::prelude::*;

/// Eased opacity animation between two values.
pub struct OpacityFade {
    from: f32,
    to: f32,
    duration: f32,

    opacity: f32,
    animation_timer: f32,
    tween: Option<ease::Tween>,
}

impl OpacityFade {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            opacity: to,
            animation_timer: 0.0,
            tween: None,
        }
    }

    pub fn fade_in(duration: f32) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    pub fn fade_out(duration: f32) -> Self {
        Self::new(1.0, 0.0, duration)
    }

    pub fn start(&mut self) {
        self.tween = Some(ease::Tween::new(ease::sine_in_out, self.from, self.to, self.duration));
        self.animation_timer = 0.0;
        self.opacity = self.from;
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Advances the animation. Returns true on the frame it completes.
    pub fn update(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };

        self.opacity = tween.apply(dt).clamp(0.0, 1.0);
        self.animation_timer += dt;

        if self.animation_timer >= self.duration {
            self.opacity = self.to;
            self.tween = None;
            return true;
        }
        false
    }
}
