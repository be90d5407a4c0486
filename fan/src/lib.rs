#![cfg_attr(not(test), no_std)]

use common::Switchable;
use measurements::AngularVelocity;

pub struct FanConfig {
    pub max_speed: AngularVelocity,
}

pub struct Fan {
    speed: AngularVelocity,
    max_speed: AngularVelocity,
}

impl Fan {
    pub fn new(config: FanConfig) -> Self {
        Self {
            speed: AngularVelocity::from_rpm(0.0),
            max_speed: config.max_speed,
        }
    }

    pub fn set_speed(&mut self, rpm: AngularVelocity) {
        let rpm = rpm.as_rpm().max(0f64).min(self.max_speed.as_rpm());
        self.speed = AngularVelocity::from_rpm(rpm);
    }

    pub fn get_speed(&self) -> AngularVelocity {
        self.speed
    }

    pub fn get_max_speed(&self) -> AngularVelocity {
        self.max_speed
    }
}

impl Switchable for Fan {
    fn switch_on(&mut self) {
        self.set_speed(self.max_speed);
    }

    fn switch_off(&mut self) {
        self.set_speed(AngularVelocity::from_rpm(0.0));
    }

    fn is_switched_on(&self) -> bool {
        self.speed.as_rpm() > 0.0
    }
}
