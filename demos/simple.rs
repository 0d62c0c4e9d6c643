use grid_astar::{Brush, EditMode, Point, Session, SessionConfig};

// In this example a path is found on a 12x8 grid after a few brush strokes
// put a wall between the endpoints. The grid is printed with
// - # marking an obstacle
// - S marking the start
// - E marking the end
// - o marking the path
//
// Run with RUST_LOG=debug to see the search log.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = SessionConfig::default().with_dimensions(12, 8).with_seed(42);
    let mut session = Session::new(config)?;
    session.set_start(Point::new(1, 1))?;
    session.set_end(Point::new(10, 6))?;

    let brush = Brush::new(EditMode::Create, 1.0);
    for y in 0..6 {
        session.paint(&brush, Point::new(6, y))?;
    }

    let path = session.tick().clone();
    let grid = session.grid();
    for y in 0..grid.rows() as i32 {
        let row = (0..grid.cols() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if grid.is_start(&p) {
                    'S'
                } else if grid.is_end(&p) {
                    'E'
                } else if grid.is_obstacle(&p) {
                    '#'
                } else if path.contains(&p) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", row);
    }
    println!("Path ({} steps): {}", path.steps(), path);

    let start = session.random_start()?;
    let end = session.random_end()?;
    println!(
        "Random endpoints {:?} -> {:?}: {} steps",
        start,
        end,
        session.tick().steps()
    );
    Ok(())
}
