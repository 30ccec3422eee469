//! Minimal tween: maps elapsed time to progress and drives the progress callbacks.

use std::fmt;

use vizij_props_core::{EventCallback, ProgressCallback};

use crate::config::TweenConfig;
use crate::easing::{compile_curve, Curve};
use crate::error::CurveError;
use crate::options::TweenOptions;

/// Resolved timing of a tween, options merged over `TweenConfig`.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenProps {
    pub duration: f64,
    pub delay: f64,
    pub repeat: u32,
    pub speed: f64,
    pub is_yoyo: bool,
}

pub struct Tween {
    index: usize,
    props: TweenProps,
    easing: Curve,
    backward_easing: Option<Curve>,
    on_start: Option<EventCallback>,
    on_update: Option<ProgressCallback>,
    on_complete: Option<EventCallback>,
    progress: f64,
    cycle: u32,
    started: bool,
}

impl Tween {
    /// Build a tween for the item at `index`; unset options fall back to `config`.
    pub fn new(options: TweenOptions, index: usize, config: &TweenConfig) -> Result<Self, CurveError> {
        let easing = match &options.easing {
            Some(spec) => compile_curve(spec)?,
            None => Curve::linear(),
        };
        let backward_easing = options
            .backward_easing
            .as_ref()
            .map(compile_curve)
            .transpose()?;
        let props = TweenProps {
            duration: options.duration.unwrap_or(config.duration),
            delay: options.delay.unwrap_or(config.delay),
            repeat: options.repeat.unwrap_or(config.repeat),
            speed: options.speed.unwrap_or(config.speed),
            is_yoyo: options.is_yoyo.unwrap_or(false),
        };
        Ok(Self {
            index,
            props,
            easing,
            backward_easing,
            on_start: options.on_start,
            on_update: options.on_update,
            on_complete: options.on_complete,
            progress: 0.0,
            cycle: 0,
            started: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn props(&self) -> &TweenProps {
        &self.props
    }

    /// Raw progress of the current cycle.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn on_update(&self) -> Option<&ProgressCallback> {
        self.on_update.as_ref()
    }

    /// Move to raw progress `p` (clamped to [0, 1]) and fire callbacks.
    /// Direction is forward unless `p` is below the previous progress.
    pub fn set_progress(&mut self, p: f64) {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        let forward = p >= self.progress;
        let curve = if forward {
            &self.easing
        } else {
            self.backward_easing.as_ref().unwrap_or(&self.easing)
        };
        let ep = curve.call(p);
        log::trace!("tween[{}] progress {p} eased {ep} forward {forward}", self.index);

        if !self.started && p != self.progress {
            self.started = true;
            if let Some(cb) = &self.on_start {
                cb(forward);
            }
        }
        if let Some(cb) = &self.on_update {
            cb(ep, p, forward);
        }
        self.progress = p;

        let at_edge = if forward { p >= 1.0 } else { p <= 0.0 };
        if self.started && at_edge {
            self.started = false;
            if let Some(cb) = &self.on_complete {
                cb(forward);
            }
        }
    }

    /// Advance to `elapsed` milliseconds since the tween began. Returns true once the
    /// last cycle has finished.
    pub fn update(&mut self, elapsed: f64) -> bool {
        let TweenProps {
            duration,
            delay,
            repeat,
            speed,
            is_yoyo,
        } = self.props;
        let t = elapsed * speed - delay;
        if t < 0.0 {
            return false;
        }
        if duration <= 0.0 {
            self.set_progress(1.0);
            return true;
        }

        let total = duration * (f64::from(repeat) + 1.0);
        let (cycle, local) = if t >= total {
            (repeat, 1.0)
        } else {
            ((t / duration).floor() as u32, (t % duration) / duration)
        };
        let reversed = |c: u32| is_yoyo && c % 2 == 1;

        // Crossing into a new cycle: finish the previous one first.
        if cycle != self.cycle {
            let prev_end = if reversed(self.cycle) { 0.0 } else { 1.0 };
            self.set_progress(prev_end);
            self.cycle = cycle;
            self.started = false;
            self.progress = if reversed(cycle) { 1.0 } else { 0.0 };
        }
        let p = if reversed(cycle) { 1.0 - local } else { local };
        self.set_progress(p);
        t >= total
    }

    /// Back to the idle state at progress 0.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.cycle = 0;
        self.started = false;
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("index", &self.index)
            .field("props", &self.props)
            .field("progress", &self.progress)
            .field("cycle", &self.cycle)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vizij_props_core::CurveSpec;

    fn recorder() -> (Rc<RefCell<Vec<(f64, f64, bool)>>>, ProgressCallback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let cb: ProgressCallback = Rc::new(move |ep, p, fwd| sink.borrow_mut().push((ep, p, fwd)));
        (log, cb)
    }

    #[test]
    fn options_override_config() {
        let opts = TweenOptions {
            duration: Some(2000.0),
            is_yoyo: Some(true),
            ..Default::default()
        };
        let tween = Tween::new(opts, 3, &TweenConfig::default()).unwrap();
        assert_eq!(tween.index(), 3);
        assert_eq!(
            tween.props(),
            &TweenProps {
                duration: 2000.0,
                delay: 0.0,
                repeat: 0,
                speed: 1.0,
                is_yoyo: true
            }
        );
    }

    #[test]
    fn set_progress_eases_and_reports_direction() {
        let (log, cb) = recorder();
        let opts = TweenOptions {
            easing: Some(CurveSpec::Name("pow(2).in".into())),
            ..Default::default()
        }
        .with_on_update(cb);
        let mut tween = Tween::new(opts, 0, &TweenConfig::default()).unwrap();

        tween.set_progress(0.5);
        tween.set_progress(0.25);
        let log = log.borrow();
        assert_abs_diff_eq!(log[0].0, 0.25, epsilon = 1e-12);
        assert!(log[0].2);
        assert_abs_diff_eq!(log[1].0, 0.0625, epsilon = 1e-12);
        assert!(!log[1].2);
    }

    #[test]
    fn unknown_easing_fails_construction() {
        let opts = TweenOptions {
            easing: Some(CurveSpec::Name("wobble.in".into())),
            ..Default::default()
        };
        assert!(Tween::new(opts, 0, &TweenConfig::default()).is_err());
    }

    #[test]
    fn update_maps_time_through_delay_and_speed() {
        let opts = TweenOptions {
            duration: Some(1000.0),
            delay: Some(100.0),
            speed: Some(2.0),
            ..Default::default()
        };
        let mut tween = Tween::new(opts, 0, &TweenConfig::default()).unwrap();
        assert!(!tween.update(25.0));
        assert_eq!(tween.progress(), 0.0);
        assert!(!tween.update(300.0));
        assert_abs_diff_eq!(tween.progress(), 0.5, epsilon = 1e-12);
        assert!(tween.update(1000.0));
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn largest_repeat_count_runs_without_overflow() {
        let config = TweenConfig {
            repeat: u32::MAX,
            ..TweenConfig::default()
        };
        let opts = TweenOptions {
            duration: Some(100.0),
            ..Default::default()
        };
        let mut tween = Tween::new(opts, 0, &config).unwrap();
        assert!(!tween.update(50.0));
        assert_abs_diff_eq!(tween.progress(), 0.5, epsilon = 1e-12);
        assert!(!tween.update(250.0));
        assert_abs_diff_eq!(tween.progress(), 0.5, epsilon = 1e-12);
    }
}
