use raylib::ease::{self, Tween};

/// Easing curve with the (time, begin, change, duration) signature raylib uses.
pub type Easing = fn(f32, f32, f32, f32) -> f32;

/// Fixed-duration progress from 0 to 1 that reports its completion exactly once.
pub struct Motion {
    tween: Tween,
    duration: f32,
    elapsed: f32,
    progress: f32,
    finished: bool,
}

impl Motion {
    pub fn new(easing: Easing, duration: f32) -> Self {
        Self {
            tween: Tween::new(easing, 0.0, 1.0, duration),
            duration,
            elapsed: 0.0,
            progress: 0.0,
            finished: false,
        }
    }

    pub fn slide_out(duration: f32) -> Self {
        Self::new(ease::cubic_out, duration)
    }

    pub fn fly(duration: f32) -> Self {
        Self::new(ease::cubic_in_out, duration)
    }

    /// Eased progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the motion. Returns `true` only on the frame it completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.progress = self.tween.apply(dt).clamp(0.0, 1.0);
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.progress = 1.0;
            self.finished = true;
            return true;
        }
        false
    }
}

/// Damped spring chasing a target value.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl Spring {
    const REST_THRESHOLD: f32 = 0.01;

    pub fn new(value: f32, stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            stiffness,
            damping,
            mass,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        // Semi-implicit Euler, sub-stepped so slow frames stay stable
        let steps = (dt / (1.0 / 240.0)).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let force = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < Self::REST_THRESHOLD
            && self.velocity.abs() < Self::REST_THRESHOLD
    }
}
