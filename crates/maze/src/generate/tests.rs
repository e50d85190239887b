use super::*;
use crate::grid::{Colour, Point};
use crate::solve::solve;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn zero_dimensions_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        generate(0, 4, &mut rng).unwrap_err(),
        GenerateError::InvalidDimensions {
            width: 0,
            height: 4
        }
    );
    assert!(generate(4, 0, &mut rng).is_err());
}

#[test]
fn checked_dimensions_accepts_only_positive() {
    assert_eq!(checked_dimensions(3, 7), Ok((3, 7)));
    assert!(checked_dimensions(0, 7).is_err());
    assert!(checked_dimensions(3, -1).is_err());
    let msg = checked_dimensions(-2, 5).unwrap_err().to_string();
    assert!(msg.contains("-2x5"), "{msg}");
}

#[test]
fn single_cell_maze_is_open() {
    let mut rng = StdRng::seed_from_u64(7);
    let (g, stats) = generate_with_stats(1, 1, &mut rng).unwrap();
    assert_eq!(g[Point::new(0, 0)].colour, Colour::Corridor);
    assert_eq!(stats.pushes, 0);
    assert_eq!(stats.tunnelled, 0);
}

#[test]
fn single_row_is_carved_straight_through() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = generate(9, 1, &mut rng).unwrap();
    assert_eq!(g.count(Colour::Corridor), 9);
    let g = generate(1, 6, &mut rng).unwrap();
    assert_eq!(g.count(Colour::Corridor), 6);
}

#[test]
fn same_seed_same_maze() {
    let a = generate(17, 11, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = generate(17, 11, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn endpoints_open_after_generation() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = generate(8, 6, &mut rng).unwrap();
        assert_eq!(g[g.start()].colour, Colour::Corridor);
        assert_eq!(g[g.exit()].colour, Colour::Corridor);
    }
}

#[test]
fn only_tunnel_cells_are_open_without_a_visit() {
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (g, stats) = generate_with_stats(10, 7, &mut rng).unwrap();
        let open_unvisited = g
            .rows()
            .flatten()
            .filter(|c| c.colour == Colour::Corridor && !c.visited)
            .count();
        assert_eq!(open_unvisited, stats.tunnelled, "seed {seed}");
        assert!(g.rows().flatten().all(|c| !c.visited || c.colour == Colour::Corridor));
    }
}

#[test]
fn tunnel_is_noop_when_exit_open() {
    let mut g = Grid::filled(4, 4, Colour::Wall).unwrap();
    let exit = g.exit();
    g[exit].colour = Colour::Corridor;
    let before = g.clone();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(tunnel_to_exit(&mut g, &mut rng), 0);
    assert_eq!(g, before);
}

#[test]
fn tunnel_digs_straight_until_corridor() {
    // Corridor along the top row and left column; the tunnel must meet one of
    // them whichever direction is drawn.
    for seed in 0..20 {
        let mut g = Grid::new(5, 4).unwrap();
        for x in 0..5 {
            g[Point::new(x, 0)].colour = Colour::Corridor;
        }
        for y in 0..4 {
            g[Point::new(0, y)].colour = Colour::Corridor;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let opened = tunnel_to_exit(&mut g, &mut rng);
        let vertical = (1..4).all(|y| g[Point::new(4, y)].colour == Colour::Corridor);
        let horizontal = (1..5).all(|x| g[Point::new(x, 3)].colour == Colour::Corridor);
        assert!(vertical ^ horizontal, "seed {seed}");
        assert_eq!(opened, if vertical { 3 } else { 4 });
        assert!(solve(&mut g).is_ok());
    }
}

#[test]
fn tunnel_stops_short_of_top_row_and_left_column() {
    let (mut up, mut left) = (false, false);
    for seed in 0..40 {
        let mut g = Grid::new(4, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let opened = tunnel_to_exit(&mut g, &mut rng);
        assert_eq!(g[Point::new(3, 2)].colour, Colour::Corridor);
        if g[Point::new(3, 1)].colour == Colour::Corridor {
            up = true;
            assert_eq!(opened, 2, "seed {seed}");
            assert_eq!(g[Point::new(3, 0)].colour, Colour::Wall);
            assert_eq!(g.count(Colour::Corridor), 2);
        } else {
            left = true;
            assert_eq!(opened, 3, "seed {seed}");
            assert!((1..4).all(|x| g[Point::new(x, 2)].colour == Colour::Corridor));
            assert_eq!(g[Point::new(0, 2)].colour, Colour::Wall);
            assert_eq!(g.count(Colour::Corridor), 3);
        }
    }
    assert!(up && left);
}

#[test]
fn generated_mazes_leave_walls() {
    let mut rng = StdRng::seed_from_u64(11);
    let g = generate(20, 20, &mut rng).unwrap();
    assert!(g.count(Colour::Wall) > 0);
    assert_eq!(g.count(Colour::Path), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn generated_mazes_are_solvable(w in 1usize..40, h in 1usize..40, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = generate(w, h, &mut rng).unwrap();
        prop_assert_eq!(g.width(), w);
        prop_assert_eq!(g.height(), h);
        let route = solve(&mut g);
        prop_assert!(route.is_ok(), "{}x{} seed {} unsolvable", w, h, seed);
    }
}
