//! Tests for trace passes, outcomes and tile annotation

#[cfg(test)]
mod tests {
    use tileray::algorithm::tracer::{GridRayTracer, TraceOutcome};
    use tileray::math::point::Point;
    use tileray::spatial::grid::TileGrid;
    use tileray::spatial::tiles::TileKind;

    fn kinds(grid: &TileGrid, cells: &[[i32; 2]]) -> Vec<TileKind> {
        cells.iter().map(|&[x, y]| grid.get(x, y).kind).collect()
    }

    // Tests a clear horizontal ray tags the final pair distinctly
    // Verified by swapping the CONNECT_LAST and CONNECT_END marks
    #[test]
    fn test_connected_ray_annotation() {
        let mut grid = TileGrid::new();
        let Ok(report) = GridRayTracer::trace(
            &mut grid,
            Point::new(0.5, 0.5),
            Point::new(5.5, 0.5),
        ) else {
            unreachable!("finite endpoints");
        };

        assert_eq!(report.outcome, TraceOutcome::Connected);
        assert_eq!(
            report.visited,
            vec![[0, 0], [1, 0], [2, 0], [3, 0], [4, 0], [5, 0]]
        );
        assert_eq!(
            kinds(&grid, &report.visited),
            vec![
                TileKind::Connect,
                TileKind::Connect,
                TileKind::Connect,
                TileKind::Connect,
                TileKind::ConnectLast,
                TileKind::ConnectEnd,
            ]
        );
        assert_eq!(report.hit(), None);
        assert_eq!(report.hit_distance, None);
        assert!((report.range - 5.0).abs() < 1e-12);
    }

    // Tests a wall stops the walk and is the last tile entered
    // Verified by continuing the walk past walls
    #[test]
    fn test_blocked_ray_annotation() {
        let mut grid = TileGrid::new();
        grid.set(3, 0, TileKind::Wall);

        let Ok(report) = GridRayTracer::trace(
            &mut grid,
            Point::new(0.5, 0.5),
            Point::new(5.5, 0.5),
        ) else {
            unreachable!("finite endpoints");
        };

        assert_eq!(report.outcome, TraceOutcome::Blocked);
        assert_eq!(report.hit(), Some([3, 0]));
        assert_eq!(report.last_clear(), Some([2, 0]));
        assert_eq!(
            kinds(&grid, &[[0, 0], [1, 0], [2, 0], [3, 0], [4, 0]]),
            vec![
                TileKind::EmptyCollide,
                TileKind::EmptyCollide,
                TileKind::EmptyLastCollide,
                TileKind::WallCollide,
                TileKind::Empty,
            ]
        );
        assert_eq!(report.hit_distance, Some(2.5));
    }

    // Tests starting inside a wall tags only that wall
    #[test]
    fn test_start_inside_wall() {
        let mut grid = TileGrid::new();
        grid.set(0, 0, TileKind::Wall);

        let Ok(report) = GridRayTracer::trace(
            &mut grid,
            Point::new(0.5, 0.5),
            Point::new(3.5, 0.5),
        ) else {
            unreachable!("finite endpoints");
        };

        assert_eq!(report.outcome, TraceOutcome::BlockedAtStart);
        assert_eq!(report.visited, vec![[0, 0]]);
        assert_eq!(report.last_clear(), None);
        assert_eq!(grid.get(0, 0).kind, TileKind::WallCollide);
        assert_eq!(grid.count(TileKind::EmptyCollide), 0);
        assert_eq!(grid.count(TileKind::EmptyLastCollide), 0);
    }

    // Tests a zero-length ray visits one tile and connects
    #[test]
    fn test_zero_length_ray() {
        let mut grid = TileGrid::new();
        let point = Point::new(2.25, -1.75);

        let Ok(report) = GridRayTracer::trace(&mut grid, point, point) else {
            unreachable!("finite endpoints");
        };

        assert!(report.is_connected());
        assert_eq!(report.visited, vec![[2, -2]]);
        assert_eq!(report.steps(), 0);
        assert_eq!(grid.get(2, -2).kind, TileKind::ConnectEnd);
        assert_eq!(grid.len(), 1);
    }

    // Tests an end point on a grid line reached moving forward stops short of it
    // The walk only crosses lines strictly before the end distance
    #[test]
    fn test_end_on_grid_line_stays_in_previous_tile() {
        let mut grid = TileGrid::new();

        let Ok(report) = GridRayTracer::trace(
            &mut grid,
            Point::new(0.5, 0.5),
            Point::new(3.0, 0.5),
        ) else {
            unreachable!("finite endpoints");
        };

        assert_eq!(report.visited, vec![[0, 0], [1, 0], [2, 0]]);
        assert_eq!(report.end_cell(), Some([2, 0]));
        assert_eq!(grid.get(2, 0).kind, TileKind::ConnectEnd);
        assert_eq!(grid.get(1, 0).kind, TileKind::ConnectLast);
        assert_eq!(grid.get(3, 0).kind, TileKind::Empty);

        let Ok(backward) = GridRayTracer::trace(
            &mut grid,
            Point::new(3.5, 0.5),
            Point::new(1.0, 0.5),
        ) else {
            unreachable!("finite endpoints");
        };
        assert_eq!(backward.end_cell(), Some([1, 0]));
    }

    // Tests a second trace removes every annotation of the first
    // Verified by skipping the reset pass
    #[test]
    fn test_retrace_clears_previous_annotations() {
        let mut grid = TileGrid::new();
        grid.set(2, 0, TileKind::Wall);

        let first = GridRayTracer::trace(&mut grid, Point::new(0.5, 0.5), Point::new(4.5, 0.5));
        assert!(first.is_ok());
        assert_eq!(grid.get(2, 0).kind, TileKind::WallCollide);

        let second = GridRayTracer::trace(&mut grid, Point::new(0.5, 3.5), Point::new(0.5, 5.5));
        assert!(second.is_ok());

        assert_eq!(grid.get(2, 0).kind, TileKind::Wall);
        assert_eq!(grid.get(0, 0).kind, TileKind::Empty);
        assert_eq!(grid.get(1, 0).kind, TileKind::Empty);
        assert_eq!(grid.get(0, 5).kind, TileKind::ConnectEnd);
    }

    // Tests non-finite input is rejected before the grid is touched
    #[test]
    fn test_non_finite_input_leaves_grid_untouched() {
        let mut grid = TileGrid::new();
        grid.set(1, 0, TileKind::Wall);
        let traced = GridRayTracer::trace(&mut grid, Point::new(0.5, 0.5), Point::new(3.5, 0.5));
        assert!(traced.is_ok());
        let before = grid.clone();

        let bad_inputs = [
            (Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0)),
            (Point::new(0.0, 0.0), Point::new(f64::INFINITY, 1.0)),
            (Point::new(0.0, f64::NEG_INFINITY), Point::new(1.0, 1.0)),
            (Point::new(1e300, 0.0), Point::new(1.0, 1.0)),
        ];

        for (start, end) in bad_inputs {
            assert!(GridRayTracer::trace(&mut grid, start, end).is_err());
            assert_eq!(grid, before);
        }
    }

    // Tests cast and line_of_sight leave the grid alone
    #[test]
    fn test_cast_is_read_only() {
        let mut grid = TileGrid::new();
        grid.set(0, 2, TileKind::Wall);
        let before = grid.clone();

        let Ok(report) = GridRayTracer::cast(&grid, Point::new(0.5, 0.5), Point::new(0.5, 4.5))
        else {
            unreachable!("finite endpoints");
        };
        assert_eq!(report.hit(), Some([0, 2]));
        assert_eq!(grid, before);

        assert_eq!(
            GridRayTracer::line_of_sight(&grid, Point::new(0.5, 0.5), Point::new(0.5, 4.5)).ok(),
            Some(false)
        );
        assert_eq!(
            GridRayTracer::line_of_sight(&grid, Point::new(1.5, 0.5), Point::new(1.5, 4.5)).ok(),
            Some(true)
        );
    }
}
