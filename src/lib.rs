//! # grid_astar
//!
//! An obstacle grid with a single start and end marker, plus a deterministic
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) engine that finds a shortest
//! 4-directional path between them. Intended to be driven by an interactive editor: edits go
//! through a [Session], and every redraw calls [Session::tick], which searches from scratch on
//! the current state.
//!
//! Movement is limited to up, down, left and right with unit cost, and the heuristic is the
//! Manhattan distance, so returned paths are always shortest. Among equally short candidates the
//! search is reproducible: frontier ties go to the node discovered first.
//!
//! ```
//! use grid_astar::{Point, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_dimensions(10, 10)).unwrap();
//! session.set_start(Point::new(0, 0)).unwrap();
//! session.set_end(Point::new(9, 0)).unwrap();
//! assert_eq!(session.tick().len(), 10);
//! ```
pub mod astar;
pub mod edit;
pub mod endpoints;
pub mod error;
pub mod grid;
pub mod obstacles;
pub mod path;
pub mod pathfinder;
pub mod session;

pub use edit::{Brush, EditMode};
pub use endpoints::{Endpoint, EndpointRegistry};
pub use error::{GridError, Result};
pub use grid::{CellState, Grid};
pub use grid_util::point::Point;
pub use obstacles::ObstacleSet;
pub use path::PathResult;
pub use pathfinder::{manhattan, Components, Pathfinder};
pub use session::{Session, SessionConfig};
