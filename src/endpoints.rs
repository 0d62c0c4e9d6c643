use grid_util::point::Point;

/// Selects one of the two path endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// Tracks the single start and single end cell. Markers are only ever replaced, never deleted:
/// placing one endpoint on the cell held by the other takes that cell over, which leaves the
/// other endpoint unset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EndpointRegistry {
    start: Option<Point>,
    end: Option<Point>,
}

impl EndpointRegistry {
    pub fn new() -> EndpointRegistry {
        EndpointRegistry::default()
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }
    pub fn get(&self, which: Endpoint) -> Option<Point> {
        match which {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }
    pub fn current(&self) -> (Option<Point>, Option<Point>) {
        (self.start, self.end)
    }
    /// Both endpoints, if both have been placed.
    pub fn both(&self) -> Option<(Point, Point)> {
        self.start.zip(self.end)
    }
    pub fn is_start(&self, point: &Point) -> bool {
        self.start.as_ref() == Some(point)
    }
    pub fn is_end(&self, point: &Point) -> bool {
        self.end.as_ref() == Some(point)
    }
    pub fn is_endpoint(&self, point: &Point) -> bool {
        self.is_start(point) || self.is_end(point)
    }

    /// Moves the selected marker to `point` and returns its previous position.
    pub(crate) fn replace(&mut self, which: Endpoint, point: Point) -> Option<Point> {
        let (slot, other) = match which {
            Endpoint::Start => (&mut self.start, &mut self.end),
            Endpoint::End => (&mut self.end, &mut self.start),
        };
        if *other == Some(point) {
            *other = None;
        }
        slot.replace(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_returns_previous_marker() {
        let mut registry = EndpointRegistry::new();
        assert_eq!(registry.replace(Endpoint::Start, Point::new(1, 1)), None);
        assert_eq!(
            registry.replace(Endpoint::Start, Point::new(2, 2)),
            Some(Point::new(1, 1))
        );
        assert!(registry.is_start(&Point::new(2, 2)));
        assert!(!registry.is_start(&Point::new(1, 1)));
        assert_eq!(registry.both(), None);
    }

    #[test]
    fn taking_over_the_other_marker_unsets_it() {
        let mut registry = EndpointRegistry::new();
        registry.replace(Endpoint::Start, Point::new(0, 0));
        registry.replace(Endpoint::End, Point::new(3, 0));
        assert_eq!(
            registry.both(),
            Some((Point::new(0, 0), Point::new(3, 0)))
        );
        registry.replace(Endpoint::End, Point::new(0, 0));
        assert_eq!(registry.current(), (None, Some(Point::new(0, 0))));
        assert!(!registry.is_start(&Point::new(0, 0)));
        assert!(registry.is_end(&Point::new(0, 0)));
    }
}
