// src/counter.rs

/// ease-out cubic: arranca rápido y frena al llegar.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Contador animado de 0 a `target`, medido con el reloj de la UI (segundos).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u32,
    started_at: f64,
    duration: f64,
}

impl CountUp {
    pub fn new(target: u32, started_at: f64, duration: f64) -> Self {
        Self {
            target,
            started_at,
            duration,
        }
    }

    /// Sin animación: muestra el valor final desde el primer frame.
    pub fn instant(target: u32) -> Self {
        Self::new(target, 0.0, 0.0)
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> u32 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.target;
        }
        (self.target as f64 * ease_out_cubic(p)).floor() as u32
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
