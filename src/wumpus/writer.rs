//! PDDL problem output. The problem is named `wumpus-problem` and refers to
//! the `wumpus-domain` domain; every cell is an object `sq-x-y`.

use crate::eater::Coordinate;
use crate::wumpus::{WumpusError, WumpusWorld};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

fn cell_name(cell: Coordinate) -> String {
    format!("sq-{}-{}", cell.x, cell.y)
}

fn cells(world: &WumpusWorld) -> impl Iterator<Item = Coordinate> {
    let size = world.size;
    (0..size.x).flat_map(move |x| (0..size.y).map(move |y| Coordinate::new(x, y)))
}

/// Write the PDDL problem for `world` to `writer`.
pub fn write_problem<W: Write>(world: &WumpusWorld, writer: &mut W) -> Result<(), WumpusError> {
    world.validate()?;

    writeln!(writer, "(define (problem wumpus-problem)")?;
    writeln!(writer, "  (:domain wumpus-domain)")?;
    writeln!(writer, "  \n(:requirements :action-costs)")?;
    writeln!(writer, "  \n(:objects")?;
    writeln!(writer, "    agent")?;
    writeln!(writer, "    arrow")?;
    for cell in cells(world) {
        if cell == world.gold {
            writeln!(writer, "    gold")?;
        }
        if cell == world.wumpus {
            writeln!(writer, "    wumpus")?;
        }
        if cell == world.pit {
            writeln!(writer, "    pit")?;
        }
        writeln!(writer, "    {}", cell_name(cell))?;
    }
    writeln!(writer, "  )")?;

    writeln!(writer, "  (:init")?;
    writeln!(writer, "    (at agent {})", cell_name(world.agent))?;
    writeln!(writer, "    (at gold {})", cell_name(world.gold))?;
    writeln!(writer, "    (at wumpus {})", cell_name(world.wumpus))?;
    writeln!(writer, "    (at pit {})", cell_name(world.pit))?;
    writeln!(writer, "    (arrow-is arrow)")?;
    writeln!(writer, "    (agent-is agent)")?;
    writeln!(writer, "    (takeable gold)")?;
    writeln!(writer, "    (have agent arrow)")?;
    writeln!(writer, "    (exit-is {})", cell_name(Coordinate::new(0, 0)))?;
    writeln!(writer, "    (= (total-cost) 0)")?;
    for cell in cells(world) {
        if cell == world.gold {
            writeln!(writer, "    (gold-is gold)")?;
        }
        if cell == world.wumpus {
            writeln!(writer, "    (wumpus-is wumpus)")?;
        }
        if cell == world.pit {
            writeln!(writer, "    (pit-is pit)")?;
        }
        for neighbour in world.neighbours(cell) {
            writeln!(writer, "    (adj {} {})", cell_name(cell), cell_name(neighbour))?;
        }
    }
    writeln!(writer, "  )")?;

    writeln!(writer, "  (:goal")?;
    writeln!(writer, "    (and (have agent gold) (did-climb)))")?;
    writeln!(writer, "  \n(:metric minimize (total-cost))")?;
    writeln!(writer, ")")?;
    Ok(())
}

/// Write the PDDL problem for `world` to a file at `path`.
pub fn save_problem(world: &WumpusWorld, path: impl AsRef<Path>) -> Result<(), WumpusError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_problem(world, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), "PDDL problem written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::WUMPUS_2X2_PROBLEM_TEXT;

    fn two_by_two() -> WumpusWorld {
        WumpusWorld {
            size: Coordinate::new(2, 2),
            agent: Coordinate::new(0, 0),
            gold: Coordinate::new(0, 1),
            wumpus: Coordinate::new(1, 0),
            pit: Coordinate::new(1, 1),
        }
    }

    fn render(world: &WumpusWorld) -> String {
        let mut buffer = Vec::new();
        write_problem(world, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn matches_expected_problem() {
        assert_eq!(render(&two_by_two()), WUMPUS_2X2_PROBLEM_TEXT);
    }

    #[test]
    fn adjacency_count_matches_grid() {
        let world = WumpusWorld {
            size: Coordinate::new(4, 3),
            ..two_by_two()
        };
        let text = render(&world);
        // Each of the 17 edges of a 4x3 grid appears once per direction.
        assert_eq!(text.matches("(adj ").count(), 34);
        assert_eq!(text.matches("    sq-").count(), 12);
        assert!(text.contains("(adj sq-3-2 sq-3-1)"));
        assert!(!text.contains("sq-4-"));
    }

    #[test]
    fn objects_sharing_a_cell_are_all_declared() {
        let world = WumpusWorld {
            wumpus: Coordinate::new(1, 1),
            ..two_by_two()
        };
        let text = render(&world);
        assert!(text.contains("    wumpus\n    pit\n    sq-1-1\n"));
        assert!(text.contains("    (wumpus-is wumpus)\n    (pit-is pit)\n"));
    }

    #[test]
    fn out_of_bounds_world_is_rejected() {
        let world = WumpusWorld {
            gold: Coordinate::new(2, 0),
            ..two_by_two()
        };
        let mut buffer = Vec::new();
        assert!(matches!(
            write_problem(&world, &mut buffer),
            Err(WumpusError::OutOfBounds { kind: "gold", .. })
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wumpus-problem.pddl");
        save_problem(&two_by_two(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, WUMPUS_2X2_PROBLEM_TEXT);
    }
}
