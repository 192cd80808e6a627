//! Component types used by the host application.

use engine_ecs::Component;

/// 2D world position.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// 2D velocity, in units per second.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_ids_are_distinct() {
        assert_ne!(Position::component_type_id(), Velocity::component_type_id());
    }

    #[test]
    fn test_defaults_are_zeroed() {
        assert_eq!(Position::default(), Position { x: 0.0, y: 0.0 });
        assert_eq!(Velocity::default(), Velocity { x: 0.0, y: 0.0 });
    }
}
