//! Hitbox geometry and overlap tests
//!
//! Everything here is pure: given lane/offset coordinates, produce
//! axis-aligned boxes and test them. The tick pipeline decides what a hit
//! means (lives, combo, grace window).

use crate::consts::*;
use crate::lane_left_x;

use super::state::{GameState, Obstacle, ObstacleKind};

/// Axis-aligned hitbox in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
}

impl Hitbox {
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// The player's box at its fixed row in the given lane
pub fn player_hitbox(lane: i8) -> Hitbox {
    Hitbox {
        x: lane_left_x(lane),
        y: PLAYER_Y,
        w: CAR_W,
        h: CAR_H,
    }
}

/// Per-class obstacle hitbox
///
/// Narrow is inset and shorter than the lane box; Wide spans two lane-widths
/// centered on its lane; Standard matches the player's box.
pub fn obstacle_hitbox(obstacle: &Obstacle) -> Hitbox {
    let lane_x = lane_left_x(obstacle.lane);
    match obstacle.kind {
        ObstacleKind::Narrow => Hitbox {
            x: lane_x + 2,
            y: obstacle.y,
            w: 6,
            h: 10,
        },
        ObstacleKind::Standard => Hitbox {
            x: lane_x,
            y: obstacle.y,
            w: CAR_W,
            h: 12,
        },
        ObstacleKind::Wide => Hitbox {
            x: lane_x - 5,
            y: obstacle.y,
            w: 20,
            h: 16,
        },
    }
}

/// An 8x8 pickup box (coins and power-ups share the size)
pub fn pickup_hitbox(lane: i8, y: i16) -> Hitbox {
    Hitbox {
        x: lane_left_x(lane),
        y,
        w: 8,
        h: 8,
    }
}

/// Scan the obstacle pool for a player overlap
///
/// Pure overlap only; the caller is responsible for the invincibility and
/// shield gates.
pub fn find_player_collision(state: &GameState) -> Option<usize> {
    let player = player_hitbox(state.player_lane);
    state
        .obstacles
        .iter()
        .enumerate()
        .find(|(_, obstacle)| obstacle.alive && player.overlaps(&obstacle_hitbox(obstacle)))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane_center_x;
    use crate::settings::Settings;

    #[test]
    fn standard_hitbox_matches_player_box() {
        let obstacle = Obstacle {
            lane: 1,
            y: 50,
            alive: true,
            kind: ObstacleKind::Standard,
        };
        let hb = obstacle_hitbox(&obstacle);
        assert_eq!(hb.x, lane_left_x(1));
        assert_eq!(hb.w, CAR_W);
    }

    #[test]
    fn narrow_hitbox_is_inset() {
        let obstacle = Obstacle {
            lane: 0,
            y: 50,
            alive: true,
            kind: ObstacleKind::Narrow,
        };
        let hb = obstacle_hitbox(&obstacle);
        assert_eq!(hb.x, lane_left_x(0) + 2);
        assert_eq!(hb.w, 6);
        assert_eq!(hb.h, 10);
    }

    #[test]
    fn wide_hitbox_spans_two_lane_widths() {
        let obstacle = Obstacle {
            lane: 1,
            y: 50,
            alive: true,
            kind: ObstacleKind::Wide,
        };
        let hb = obstacle_hitbox(&obstacle);
        assert_eq!(hb.w, 20);
        assert!(hb.w > LANE_WIDTH);
        // Centered on the lane
        assert_eq!(hb.x + hb.w / 2, lane_center_x(1));
    }

    #[test]
    fn wide_in_center_lane_reaches_adjacent_lanes() {
        let obstacle = Obstacle {
            lane: 1,
            y: PLAYER_Y,
            alive: true,
            kind: ObstacleKind::Wide,
        };
        let hb = obstacle_hitbox(&obstacle);
        assert!(player_hitbox(0).overlaps(&hb));
        assert!(player_hitbox(1).overlaps(&hb));
        assert!(player_hitbox(2).overlaps(&hb));
    }

    #[test]
    fn narrow_in_other_lane_misses() {
        let obstacle = Obstacle {
            lane: 0,
            y: PLAYER_Y,
            alive: true,
            kind: ObstacleKind::Narrow,
        };
        let hb = obstacle_hitbox(&obstacle);
        assert!(player_hitbox(0).overlaps(&hb));
        assert!(!player_hitbox(1).overlaps(&hb));
        assert!(!player_hitbox(2).overlaps(&hb));
    }

    #[test]
    fn overlap_requires_vertical_proximity() {
        let player = player_hitbox(1);
        let far = Hitbox {
            x: player.x,
            y: 10,
            w: CAR_W,
            h: 12,
        };
        assert!(!player.overlaps(&far));
        let near = Hitbox {
            x: player.x,
            y: PLAYER_Y - 5,
            w: CAR_W,
            h: 12,
        };
        assert!(player.overlaps(&near));
    }

    #[test]
    fn find_player_collision_skips_dead_slots() {
        let mut state = GameState::new(1, Settings::default(), 0);
        state.obstacles[0] = Obstacle {
            lane: state.player_lane,
            y: PLAYER_Y,
            alive: false,
            kind: ObstacleKind::Standard,
        };
        assert_eq!(find_player_collision(&state), None);

        state.obstacles[0].alive = true;
        assert_eq!(find_player_collision(&state), Some(0));
    }
}
