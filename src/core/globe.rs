use super::beacons::{build_beacons, Beacon};
use super::camera::Camera;
use super::constants::*;
use super::interaction::{ClickOutcome, Cursor, Interaction};
use super::orbit::OrbitControls;
use super::pick::nearest_hit;
use super::spots::Spot;
use super::tween::{Ease, TweenTarget, Tweens};
use glam::{Mat4, Vec2, Vec3};

/// Everything the widget knows about the scene apart from GPU resources.
///
/// `now` arguments are seconds since startup; the caller owns the clock.
pub struct GlobeState {
    pub spots: Vec<Spot>,
    pub beacons: Vec<Beacon>,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub interaction: Interaction,
    pub tweens: Tweens,
}

/// Side effects of a frame that the page has to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutput {
    pub cursor: Option<Cursor>,
}

impl GlobeState {
    pub fn new(spots: Vec<Spot>, aspect: f32) -> Self {
        let beacons = build_beacons(&spots, GLOBE_RADIUS);
        Self {
            spots,
            beacons,
            camera: Camera::new(aspect),
            controls: OrbitControls::default(),
            interaction: Interaction::default(),
            tweens: Tweens::default(),
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        self.camera.view_proj(self.controls.target)
    }

    /// One animation frame: tweens, pulse, billboard, hover, damping.
    /// `pointer_ndc` is `None` while the pointer is off the canvas.
    pub fn tick(&mut self, now: f32, pointer_ndc: Option<Vec2>) -> TickOutput {
        self.advance_tweens(now);

        let eye = self.camera.eye;
        for b in self.beacons.iter_mut() {
            b.pulse(now);
            b.face(eye);
        }

        let hit = pointer_ndc.and_then(|ndc| self.pick(ndc));
        let change = self.interaction.update_hover(hit);
        if let Some(i) = change.left {
            self.tween_beacon_scale(i, IDLE_SCALE, now);
        }
        if let Some(i) = change.entered {
            self.tween_beacon_scale(i, HOVER_SCALE, now);
        }

        self.controls.update(&mut self.camera.eye);

        TickOutput {
            cursor: change.cursor,
        }
    }

    /// Nearest beacon core under the pointer.
    pub fn pick(&self, ndc: Vec2) -> Option<usize> {
        let ray = self.camera.ray_from_ndc(ndc, self.controls.target);
        nearest_hit(&ray, self.beacons.iter().map(Beacon::core_disc)).map(|(i, _)| i)
    }

    /// Click on the canvas. Selecting a beacon flies the camera out along
    /// the beacon's radial direction.
    pub fn click(&mut self, now: f32) -> ClickOutcome {
        let outcome = self.interaction.click();
        if let ClickOutcome::Selected(i) = outcome {
            let dest = self.beacons[i].position * FLY_TO_DISTANCE_FACTOR;
            self.fly_to(dest, FLY_TO_SEC, now);
        }
        outcome
    }

    /// Dismiss the panel and return to the startup view.
    pub fn reset(&mut self, now: f32) {
        self.interaction.dismiss();
        self.fly_to(INITIAL_CAMERA_EYE, RESET_SEC, now);
    }

    /// Dismiss the panel; the camera stays where it is.
    pub fn close(&mut self) {
        self.interaction.dismiss();
    }

    pub fn selected_spot(&self) -> Option<&Spot> {
        self.interaction
            .selected()
            .and_then(|i| self.spots.get(self.beacons[i].spot))
    }

    fn fly_to(&mut self, eye: Vec3, duration: f32, now: f32) {
        self.tweens.start(
            TweenTarget::CameraEye,
            self.camera.eye,
            eye,
            duration,
            Ease::Power3InOut,
            now,
        );
        self.tweens.start(
            TweenTarget::OrbitTarget,
            self.controls.target,
            INITIAL_ORBIT_TARGET,
            duration,
            Ease::Power3InOut,
            now,
        );
    }

    fn tween_beacon_scale(&mut self, i: usize, scale: f32, now: f32) {
        let from = Vec3::splat(self.beacons[i].scale);
        self.tweens.start(
            TweenTarget::BeaconScale(i),
            from,
            Vec3::splat(scale),
            HOVER_TWEEN_SEC,
            Ease::Power1Out,
            now,
        );
    }

    fn advance_tweens(&mut self, now: f32) {
        let camera = &mut self.camera;
        let controls = &mut self.controls;
        let beacons = &mut self.beacons;
        self.tweens.advance(now, |target, value| match target {
            TweenTarget::CameraEye => camera.eye = value,
            TweenTarget::OrbitTarget => controls.target = value,
            TweenTarget::BeaconScale(i) => {
                if let Some(b) = beacons.get_mut(i) {
                    b.scale = value.x;
                }
            }
        });
    }
}
