use crate::game_logic::{Car, MIN_LAP_SPEED, Track};
use std::sync::Arc;

/// Which crossings of the start line count as a lap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrossingRule {
    /// Any crossing of the infinite line through the start segment
    #[default]
    Line,
    /// Only crossings made while the car is on the road surface, so
    /// cutting over the infield along the line's extension doesn't count
    OnRoad,
}

impl CrossingRule {
    pub fn toggled(self) -> Self {
        match self {
            CrossingRule::Line => CrossingRule::OnRoad,
            CrossingRule::OnRoad => CrossingRule::Line,
        }
    }
}

/// Counts laps on one-directional start line crossings.
///
/// A lap counts when the car moves from the negative to the positive side of
/// the start line at more than `MIN_LAP_SPEED`, which rejects creeping and
/// reversing over the line.
#[derive(Clone, Debug)]
pub struct LapManager {
    track: Arc<Track>,
    pub current_lap: u32,
    last_cross: bool,
    rule: CrossingRule,
    has_finished: bool,
}

impl LapManager {
    pub fn new(track: Arc<Track>) -> Self {
        Self {
            track,
            current_lap: 0,
            last_cross: false,
            rule: CrossingRule::default(),
            has_finished: false,
        }
    }

    pub fn total_laps(&self) -> u32 {
        self.track.laps
    }

    pub fn rule(&self) -> CrossingRule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: CrossingRule) {
        self.rule = rule;
    }

    pub fn is_finished(&self) -> bool {
        self.has_finished
    }

    /// Check the car against the start line; returns true if a lap was counted.
    pub fn update(&mut self, car: &Car) -> bool {
        let cross = self.track.start_line.side(car.position) > 0.0;

        let allowed = match self.rule {
            CrossingRule::Line => true,
            CrossingRule::OnRoad => self.track.is_on_road(car.position),
        };

        let counted = cross && !self.last_cross && car.speed > MIN_LAP_SPEED && allowed;
        // side is tracked every tick, counted or not
        self.last_cross = cross;

        if counted {
            self.current_lap += 1;
            if self.current_lap >= self.track.laps {
                self.has_finished = true;
            }
        }
        counted
    }
}
