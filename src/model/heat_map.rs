//! Heat-map grids for diagnostic display
//!
//! For every (count state, arsenal pitch) pair, a 16x10 plane whose cells
//! carry the Q value of throwing that pitch to the zone covering the cell.
//! Zones 1-9 tile the strike zone proper; zones 11-14 are the L-shaped
//! chase regions around it. A triple without league support renders as
//! `None` rather than a number. The output is purely numeric; rendering
//! belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::{
    model::actions::ActionSet,
    q_table::QTable,
    state::NUM_COUNT_STATES,
    types::{PitchType, Zone},
};

/// Rows in one zone plane.
pub const GRID_ROWS: usize = 16;

/// Columns in one zone plane.
pub const GRID_COLS: usize = 10;

/// One pitch's zone plane; `None` cells have no data.
pub type ZonePlane = [[Option<f64>; GRID_COLS]; GRID_ROWS];

/// Heat-map grids for one solved table and arsenal, plus the value range
/// over valid cells for color-scale normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatMap {
    /// Plane order along the second axis.
    pub arsenal: Vec<PitchType>,
    /// Planes indexed by [count state][arsenal pitch].
    pub planes: Vec<Vec<ZonePlane>>,
    /// Smallest Q value across valid cells, if any cell is valid.
    pub min: Option<f64>,
    /// Largest Q value across valid cells, if any cell is valid.
    pub max: Option<f64>,
}

pub(crate) fn generate(
    q: &QTable,
    actions: &ActionSet,
    arsenal: &[PitchType],
    missing: impl Fn(usize, PitchType, Zone) -> bool,
) -> HeatMap {
    let empty_plane: ZonePlane = [[None; GRID_COLS]; GRID_ROWS];
    let mut planes = vec![vec![empty_plane; arsenal.len()]; NUM_COUNT_STATES];
    let mut min = None;
    let mut max = None;

    for (action, call) in actions.iter() {
        let Some(plane_index) = arsenal.iter().position(|&p| p == call.pitch_type) else {
            continue;
        };

        for state in 0..NUM_COUNT_STATES {
            let value = if missing(state, call.pitch_type, call.zone) {
                None
            } else {
                let value = q.get(state, action);
                min = Some(min.map_or(value, |m| f64::min(m, value)));
                max = Some(max.map_or(value, |m| f64::max(m, value)));
                Some(value)
            };
            paint_zone(&mut planes[state][plane_index], call.zone, value);
        }
    }

    HeatMap {
        arsenal: arsenal.to_vec(),
        planes,
        min,
        max,
    }
}

/// Fill the cells a zone covers. Zones 1-9 are 4x2 blocks inside the
/// strike zone; 11-14 are the two-rectangle corner regions around it.
fn paint_zone(plane: &mut ZonePlane, zone: Zone, value: Option<f64>) {
    match zone.value() {
        1 => fill(plane, 2..6, 2..4, value),
        2 => fill(plane, 2..6, 4..6, value),
        3 => fill(plane, 2..6, 6..8, value),
        4 => fill(plane, 6..10, 2..4, value),
        5 => fill(plane, 6..10, 4..6, value),
        6 => fill(plane, 6..10, 6..8, value),
        7 => fill(plane, 10..14, 2..4, value),
        8 => fill(plane, 10..14, 4..6, value),
        9 => fill(plane, 10..14, 6..8, value),
        11 => {
            fill(plane, 0..2, 0..5, value);
            fill(plane, 0..8, 0..2, value);
        }
        12 => {
            fill(plane, 0..2, 5..10, value);
            fill(plane, 0..8, 8..10, value);
        }
        13 => {
            fill(plane, 8..16, 0..2, value);
            fill(plane, 14..16, 0..5, value);
        }
        14 => {
            fill(plane, 14..16, 5..10, value);
            fill(plane, 8..16, 8..10, value);
        }
        _ => unreachable!("zone values are validated at construction"),
    }
}

fn fill(
    plane: &mut ZonePlane,
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
    value: Option<f64>,
) {
    for row in rows {
        for col in cols.clone() {
            plane[row][col] = value;
        }
    }
}
