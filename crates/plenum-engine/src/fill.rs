//! Pressure flood fill.
//!
//! One fill pass floods a single pressure level outward from one entry
//! cell. The walk is depth-first with a fixed child order, right, left,
//! down, up, then net members, so every step visits cells in the same
//! order and faults and shuttle pushes land identically on every run.

use plenum_core::{CellKind, Direction, Point, PressureLevel, ShortCircuit};
use plenum_grid::{CellGrid, NetRegistry, PressureField};

/// A displacement push collected while filling, applied after all
/// passes finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PendingShift {
    /// The shuttle block cell the pressure arrived at.
    pub at: Point,
    /// The direction the pressure was travelling on arrival.
    pub push: Direction,
    /// The level doing the pushing.
    pub level: PressureLevel,
}

/// True when `kind` carries `level` onward.
///
/// The entry kind for the level is passable so that adjacent entry
/// cells of the same polarity flood as one region.
fn passable(kind: CellKind, level: PressureLevel) -> bool {
    kind == CellKind::Channel
        || kind == CellKind::Output
        || kind == level.entry_kind()
        || kind == CellKind::NarrowVertical
        || kind == CellKind::NarrowHorizontal
        || kind == CellKind::ShuttleThru
}

/// Floods `level` from `start`, writing the pressure field in place and
/// appending any displacement pushes to `shifts`.
///
/// Returns the number of cells newly pressurised. A cell already at a
/// different level is a short circuit and aborts the fill immediately,
/// leaving the field partially written.
pub(crate) fn fill_from(
    grid: &CellGrid,
    nets: &NetRegistry,
    pressure: &mut PressureField,
    start: Point,
    level: PressureLevel,
    shifts: &mut Vec<PendingShift>,
) -> Result<u32, ShortCircuit> {
    let mut pressurised = 0u32;
    let mut stack: Vec<(Point, Direction)> = vec![(start, Direction::None)];

    while let Some((at, came)) = stack.pop() {
        let Some(index) = grid.index_of(at) else {
            continue;
        };
        let kind = grid.kind_at(index);

        // A block takes a displacement push instead of pressure. The
        // push is dropped when it arrived through the shuttle's own
        // thru section, otherwise the shuttle would shear apart.
        if kind == CellKind::ShuttleBlock {
            let behind = at.step(came.opposite());
            if grid.get(behind) != Some(CellKind::ShuttleThru) {
                shifts.push(PendingShift {
                    at,
                    push: came,
                    level,
                });
            }
            continue;
        }

        let current = pressure.level_at(index);
        if current == level {
            continue;
        }
        if current != PressureLevel::None {
            return Err(ShortCircuit {
                at,
                attempted: level,
                existing: current,
            });
        }
        if !passable(kind, level) {
            continue;
        }

        pressure.set_at(index, level);
        pressurised += 1;

        // Children are pushed in reverse so they pop in visit order:
        // right, left, down, up, then net members.
        if let Some(net) = nets.net_at(index).and_then(|id| nets.net(id)) {
            for member in net.points().iter().rev() {
                stack.push((*member, Direction::None));
            }
        }
        let targets = grid.spread_targets(at);
        for (next, dir) in targets.iter().rev() {
            stack.push((*next, *dir));
        }
    }

    Ok(pressurised)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use plenum_grid::Layout;
    use plenum_test_utils::parse_diagram;
    use proptest::prelude::*;

    use super::*;

    /// Runs one fill pass against a parsed diagram, starting from the
    /// first entry cell of the level's polarity.
    fn fill_once(
        layout: &Layout,
        level: PressureLevel,
    ) -> (PressureField, Vec<PendingShift>, Result<u32, ShortCircuit>) {
        let mut pressure = PressureField::new(layout.cells().len());
        let mut shifts = Vec::new();
        let start = layout.cells().positions_of(level.entry_kind())[0];
        let outcome = fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            start,
            level,
            &mut shifts,
        );
        (pressure, shifts, outcome)
    }

    fn level_at(layout: &Layout, pressure: &PressureField, x: i32, y: i32) -> PressureLevel {
        let index = layout.cells().index_of(Point::new(x, y)).unwrap();
        pressure.level_at(index)
    }

    #[test]
    fn fills_every_reachable_channel() {
        let layout = parse_diagram(
            "#####\n\
             #+  #\n\
             #####",
        );
        let (pressure, shifts, outcome) = fill_once(&layout, PressureLevel::Positive);
        assert_eq!(outcome.unwrap(), 3);
        assert!(shifts.is_empty());
        assert_eq!(level_at(&layout, &pressure, 1, 1), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 3, 1), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 0, 0), PressureLevel::None);
    }

    #[test]
    fn refilling_the_same_level_is_a_dead_end() {
        let layout = parse_diagram("+ ");
        let mut pressure = PressureField::new(layout.cells().len());
        let mut shifts = Vec::new();
        let start = Point::new(0, 0);

        let first = fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            start,
            PressureLevel::Positive,
            &mut shifts,
        )
        .unwrap();
        let second = fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            start,
            PressureLevel::Positive,
            &mut shifts,
        )
        .unwrap();

        assert_eq!(first, 2);
        assert_eq!(second, 0);
    }

    #[test]
    fn opposing_levels_short_circuit_at_the_meeting_cell() {
        let layout = parse_diagram("+ -");
        let mut pressure = PressureField::new(layout.cells().len());
        let mut shifts = Vec::new();

        fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            Point::new(0, 0),
            PressureLevel::Positive,
            &mut shifts,
        )
        .unwrap();
        let fault = fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            Point::new(2, 0),
            PressureLevel::Negative,
            &mut shifts,
        )
        .unwrap_err();

        assert_eq!(
            fault,
            ShortCircuit {
                at: Point::new(1, 0),
                attempted: PressureLevel::Negative,
                existing: PressureLevel::Positive,
            }
        );
    }

    #[test]
    fn a_fill_reaching_a_foreign_entry_cell_faults_there() {
        // The vent's flood reaches the source cell itself; the conflict
        // is reported at the source's coordinate.
        let layout = parse_diagram("+ 0");
        let mut pressure = PressureField::new(layout.cells().len());
        let mut shifts = Vec::new();

        fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            Point::new(0, 0),
            PressureLevel::Positive,
            &mut shifts,
        )
        .unwrap();
        let fault = fill_from(
            layout.cells(),
            layout.nets(),
            &mut pressure,
            Point::new(2, 0),
            PressureLevel::Vent,
            &mut shifts,
        )
        .unwrap_err();

        assert_eq!(fault.at, Point::new(1, 0));
        assert_eq!(fault.attempted, PressureLevel::Vent);
        assert_eq!(fault.existing, PressureLevel::Positive);
    }

    #[test]
    fn blocks_take_a_push_and_stay_unpressurised() {
        let layout = parse_diagram("+* ");
        let (pressure, shifts, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 1);
        assert_eq!(
            shifts,
            vec![PendingShift {
                at: Point::new(1, 0),
                push: Direction::Right,
                level: PressureLevel::Positive,
            }]
        );
        assert_eq!(level_at(&layout, &pressure, 1, 0), PressureLevel::None);
        assert_eq!(level_at(&layout, &pressure, 2, 0), PressureLevel::None);
    }

    #[test]
    fn pressure_through_the_thru_section_does_not_push_its_own_block() {
        let layout = parse_diagram("+~* ");
        let (pressure, shifts, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 2);
        assert!(shifts.is_empty());
        assert_eq!(level_at(&layout, &pressure, 1, 0), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 3, 0), PressureLevel::None);
    }

    #[test]
    fn narrow_vertical_stops_horizontal_spread() {
        let layout = parse_diagram(
            "#####\n\
             #+\" #\n\
             #####",
        );
        let (pressure, _, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 2);
        assert_eq!(level_at(&layout, &pressure, 2, 1), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 3, 1), PressureLevel::None);
    }

    #[test]
    fn narrow_vertical_passes_vertical_flow() {
        let layout = parse_diagram(
            "#+#\n\
             #\"#\n\
             # #\n\
             ###",
        );
        let (pressure, _, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 3);
        assert_eq!(level_at(&layout, &pressure, 1, 2), PressureLevel::Positive);
    }

    #[test]
    fn narrow_horizontal_stops_vertical_spread() {
        let layout = parse_diagram(
            "#+#\n\
             #:#\n\
             # #\n\
             ###",
        );
        let (pressure, _, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 2);
        assert_eq!(level_at(&layout, &pressure, 1, 1), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 1, 2), PressureLevel::None);
    }

    #[test]
    fn a_narrow_joint_still_hops_its_net() {
        // The joint gates sideways spread but not the net: members
        // fill as soon as the joint itself does.
        let cells = vec![
            CellKind::Solid,
            CellKind::Source,
            CellKind::Solid,
            CellKind::Channel,
            CellKind::NarrowVertical,
            CellKind::Solid,
            CellKind::Solid,
            CellKind::Solid,
            CellKind::Channel,
        ];
        let grid = CellGrid::from_cells(3, 3, cells).unwrap();
        let mut nets = NetRegistry::new(grid.len());
        nets.enroll(0xFF77_0001, Point::new(1, 1), 4);
        nets.enroll(0xFF77_0001, Point::new(2, 2), 8);

        let mut pressure = PressureField::new(grid.len());
        let mut shifts = Vec::new();
        let filled = fill_from(
            &grid,
            &nets,
            &mut pressure,
            Point::new(1, 0),
            PressureLevel::Positive,
            &mut shifts,
        )
        .unwrap();

        assert_eq!(filled, 3);
        assert_eq!(pressure.level_at(4), PressureLevel::Positive);
        assert_eq!(pressure.level_at(8), PressureLevel::Positive);
        assert_eq!(pressure.level_at(3), PressureLevel::None);
    }

    #[test]
    fn nets_teleport_pressure_between_members() {
        let layout = parse_diagram(
            "#+A##\n\
             #####\n\
             ##A #",
        );
        let (pressure, _, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 4);
        assert_eq!(level_at(&layout, &pressure, 2, 0), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 2, 2), PressureLevel::Positive);
        assert_eq!(level_at(&layout, &pressure, 3, 2), PressureLevel::Positive);
    }

    #[test]
    fn blocks_past_a_net_hop_take_ordinary_directed_pushes() {
        let layout = parse_diagram(
            "#+A##\n\
             #####\n\
             ##A*#",
        );
        let (_, shifts, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 3);
        assert_eq!(
            shifts,
            vec![PendingShift {
                at: Point::new(3, 2),
                push: Direction::Right,
                level: PressureLevel::Positive,
            }]
        );
    }

    #[test]
    fn net_hop_arrival_at_a_block_records_a_directionless_push() {
        // A block can only arrive with no direction when the cell was
        // rewritten after decoding while staying enrolled in its net.
        let cells = vec![
            CellKind::Source,
            CellKind::Channel,
            CellKind::Solid,
            CellKind::ShuttleBlock,
            CellKind::Channel,
        ];
        let grid = CellGrid::from_cells(5, 1, cells).unwrap();
        let mut nets = NetRegistry::new(grid.len());
        nets.enroll(0xFF13_5790, Point::new(1, 0), 1);
        nets.enroll(0xFF13_5790, Point::new(3, 0), 3);

        let mut pressure = PressureField::new(grid.len());
        let mut shifts = Vec::new();
        let filled = fill_from(
            &grid,
            &nets,
            &mut pressure,
            Point::new(0, 0),
            PressureLevel::Positive,
            &mut shifts,
        )
        .unwrap();

        assert_eq!(filled, 2);
        assert_eq!(
            shifts,
            vec![PendingShift {
                at: Point::new(3, 0),
                push: Direction::None,
                level: PressureLevel::Positive,
            }]
        );
    }

    #[test]
    fn shift_records_follow_visit_order() {
        // Two routes to the same block: the spread order right, left,
        // down, up decides which push is recorded first.
        let layout = parse_diagram(
            "####\n\
             #+ #\n\
             # *#\n\
             ####",
        );
        let (_, shifts, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 3);
        assert_eq!(
            shifts,
            vec![
                PendingShift {
                    at: Point::new(2, 2),
                    push: Direction::Down,
                    level: PressureLevel::Positive,
                },
                PendingShift {
                    at: Point::new(2, 2),
                    push: Direction::Right,
                    level: PressureLevel::Positive,
                },
            ]
        );
    }

    #[test]
    fn an_undriven_input_blocks_flow_like_a_wall() {
        let layout = parse_diagram("+^ ");
        let (pressure, _, outcome) = fill_once(&layout, PressureLevel::Positive);

        assert_eq!(outcome.unwrap(), 1);
        assert_eq!(level_at(&layout, &pressure, 1, 0), PressureLevel::None);
        assert_eq!(level_at(&layout, &pressure, 2, 0), PressureLevel::None);
    }

    #[test]
    fn enrolment_order_only_steers_the_walk_not_the_field() {
        // Same machine, two member orders for the net. Visit order
        // differs but the set of reachable cells does not, so without
        // shuttles or conflicts the finished field must match.
        let cells = vec![
            CellKind::Source,
            CellKind::Channel,
            CellKind::Solid,
            CellKind::Channel,
            CellKind::Channel,
        ];
        let grid = CellGrid::from_cells(5, 1, cells).unwrap();

        let fill_with = |order: [i32; 2]| {
            let mut nets = NetRegistry::new(grid.len());
            for x in order {
                nets.enroll(0xFF24_6800, Point::new(x, 0), x as usize);
            }
            let mut pressure = PressureField::new(grid.len());
            let mut shifts = Vec::new();
            let filled = fill_from(
                &grid,
                &nets,
                &mut pressure,
                Point::new(0, 0),
                PressureLevel::Positive,
                &mut shifts,
            )
            .unwrap();
            assert!(shifts.is_empty());
            (filled, pressure)
        };

        let (count_fwd, field_fwd) = fill_with([1, 3]);
        let (count_rev, field_rev) = fill_with([3, 1]);
        assert_eq!(count_fwd, 4);
        assert_eq!(count_fwd, count_rev);
        assert_eq!(field_fwd, field_rev);
    }

    // ── Properties ──────────────────────────────────────────────────────────

    /// Reference reachability: breadth-first over channels from the
    /// source, ignoring visit order entirely.
    fn reachable_count(grid: &CellGrid, start: Point) -> u32 {
        let mut seen = vec![false; grid.len()];
        let mut queue = std::collections::VecDeque::from([start]);
        seen[grid.index_of(start).unwrap()] = true;
        let mut count = 0u32;
        while let Some(at) = queue.pop_front() {
            count += 1;
            for (next, _) in grid.spread_targets(at) {
                let index = grid.index_of(next).unwrap();
                let kind = grid.kind_at(index);
                let open = kind == CellKind::Channel || kind == CellKind::Source;
                if open && !seen[index] {
                    seen[index] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    proptest! {
        #[test]
        fn fill_matches_reference_reachability(
            walls in proptest::collection::vec(any::<bool>(), 24..=24),
        ) {
            let mut cells: Vec<CellKind> = walls
                .iter()
                .map(|wall| if *wall { CellKind::Solid } else { CellKind::Channel })
                .collect();
            cells[0] = CellKind::Source;
            let grid = CellGrid::from_cells(6, 4, cells).unwrap();
            let nets = NetRegistry::new(grid.len());
            let mut pressure = PressureField::new(grid.len());
            let mut shifts = Vec::new();

            let filled = fill_from(
                &grid,
                &nets,
                &mut pressure,
                Point::new(0, 0),
                PressureLevel::Positive,
                &mut shifts,
            )
            .unwrap();

            prop_assert_eq!(filled, reachable_count(&grid, Point::new(0, 0)));
            let written = pressure
                .as_slice()
                .iter()
                .filter(|l| **l == PressureLevel::Positive)
                .count() as u32;
            prop_assert_eq!(filled, written);
        }
    }
}
