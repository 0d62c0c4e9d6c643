/// Fuzzes the path engine on many seeded random grids: a path must be found exactly when the end
/// lies on the start's connected component, it must be shortest, and it must be reproducible.
use grid_astar::{manhattan, Grid, Pathfinder, Point};
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: i32, h: i32, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(w, h).unwrap();
    for x in 0..w {
        for y in 0..h {
            grid.set_obstacle(Point::new(x, y), rng.gen_bool(0.4)).unwrap();
        }
    }
    grid
}

fn visualize_grid(grid: &Grid, path: &[Point]) {
    for y in 0..grid.rows() as i32 {
        for x in 0..grid.cols() as i32 {
            let p = Point::new(x, y);
            if grid.is_start(&p) {
                print!("S");
            } else if grid.is_end(&p) {
                print!("E");
            } else if grid.is_obstacle(&p) {
                print!("#");
            } else if path.contains(&p) {
                print!("o");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Breadth-first step count from `start` to `end`, used as ground truth.
fn bfs_distance(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    let cols = grid.cols();
    let mut dist = vec![None; cols * grid.rows()];
    let ix = |p: &Point| p.y as usize * cols + p.x as usize;
    let mut queue = VecDeque::from([start]);
    dist[ix(&start)] = Some(0);
    while let Some(p) = queue.pop_front() {
        let d = dist[ix(&p)].unwrap();
        if p == end {
            return Some(d);
        }
        for (n, _) in Pathfinder::neighbours(grid, &p) {
            if dist[ix(&n)].is_none() {
                dist[ix(&n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz() {
    const N: i32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let pathfinder = Pathfinder::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let start = grid.random_start(&mut rng).unwrap();
        let end = grid.random_end(&mut rng).unwrap();
        if start == end {
            continue;
        }
        let reachable = Pathfinder::reachable(&grid, &start, &end);
        let path = pathfinder.find_path(&grid, start, end);
        // Show the grid if the engine and the components disagree
        if path.is_empty() == reachable {
            visualize_grid(&grid, path.as_slice());
        }
        assert_eq!(!path.is_empty(), reachable);
        if reachable {
            assert_eq!(path.start(), Some(start));
            assert_eq!(path.end(), Some(end));
            assert!(path.is_contiguous());
            assert!(path.iter().all(|p| !grid.is_obstacle(p)));
            assert!(path.steps() >= manhattan(&start, &end) as usize);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: i32 = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let pathfinder = Pathfinder::new();
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let start = Point::new(0, 0);
        let end = Point::new(N - 1, N - 1);
        grid.set_start(start).unwrap();
        grid.set_end(end).unwrap();
        let path = pathfinder.find_path(&grid, start, end);
        let expected = bfs_distance(&grid, start, end);
        if path.is_empty() != expected.is_none() {
            visualize_grid(&grid, path.as_slice());
        }
        match expected {
            Some(steps) => {
                if path.steps() != steps {
                    println!("A* steps: {}; BFS steps: {}", path.steps(), steps);
                    visualize_grid(&grid, path.as_slice());
                }
                assert_eq!(path.steps(), steps);
                assert_eq!(pathfinder.find_path(&grid, start, end), path);
            }
            None => assert!(path.is_empty()),
        }
    }
}
