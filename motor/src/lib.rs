#![cfg_attr(not(test), no_std)]

use common::Switchable;
use measurements::AngularVelocity;

/// Speed applied by `switch_on`.
pub const SWITCH_ON_SPEED_RPM: f64 = 100.0;

pub struct Motor {
    speed: AngularVelocity,
}

impl Motor {
    pub fn new(speed: AngularVelocity) -> Self {
        Self {
            speed: clamp_speed(speed),
        }
    }

    pub fn get_speed(&self) -> AngularVelocity {
        self.speed
    }

    // negative speeds are clamped to zero, the motor has no reverse state
    pub fn set_speed(&mut self, speed: AngularVelocity) {
        self.speed = clamp_speed(speed);
    }
}

fn clamp_speed(speed: AngularVelocity) -> AngularVelocity {
    AngularVelocity::from_rpm(speed.as_rpm().max(0f64))
}

impl Switchable for Motor {
    fn switch_on(&mut self) {
        self.set_speed(AngularVelocity::from_rpm(SWITCH_ON_SPEED_RPM));
    }

    fn switch_off(&mut self) {
        self.set_speed(AngularVelocity::from_rpm(0.0));
    }

    fn is_switched_on(&self) -> bool {
        self.speed.as_rpm() > 0.0
    }
}
