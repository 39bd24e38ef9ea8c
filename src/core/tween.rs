use glam::Vec3;
use smallvec::SmallVec;

/// Easing curves used by the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Quadratic ease-out; the default for short hover transitions.
    Power1Out,
    /// Quartic ease-in-out used for camera flights.
    Power3InOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }
}

/// Property driven by a tween. A property has at most one live tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenTarget {
    CameraEye,
    OrbitTarget,
    BeaconScale(usize),
}

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }

    /// Value at `now`; once finished this is exactly `to`.
    pub fn value(&self, now: f32) -> Vec3 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.ease.apply(p))
    }
}

/// In-flight tweens keyed by [`TweenTarget`].
#[derive(Default, Debug)]
pub struct Tweens {
    active: SmallVec<[(TweenTarget, Tween); 8]>,
}

impl Tweens {
    /// Start animating `target` from its current value. Any tween already
    /// driving the same property is dropped.
    pub fn start(
        &mut self,
        target: TweenTarget,
        from: Vec3,
        to: Vec3,
        duration: f32,
        ease: Ease,
        now: f32,
    ) {
        self.active.retain(|(t, _)| *t != target);
        self.active.push((
            target,
            Tween {
                from,
                to,
                start: now,
                duration,
                ease,
            },
        ));
    }

    pub fn is_animating(&self, target: TweenTarget) -> bool {
        self.active.iter().any(|(t, _)| *t == target)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Write the current value of every tween through `apply`, then drop the
    /// finished ones (their final write is exactly the end value).
    pub fn advance(&mut self, now: f32, mut apply: impl FnMut(TweenTarget, Vec3)) {
        for (target, tween) in self.active.iter() {
            apply(*target, tween.value(now));
        }
        self.active.retain(|(_, tween)| !tween.is_done(now));
    }
}
