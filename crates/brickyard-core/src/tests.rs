#[cfg(test)]
mod tests {
    use crate::enums::*;
    use crate::events::InputEvent;
    use crate::types::{Color, Position, Rect, Velocity};

    #[test]
    fn test_projected_position() {
        let pos = Position::new(10.0, 20.0);
        let vel = Velocity::new(-5.0, 2.5);
        let next = pos.projected(&vel, 2.0);
        assert!((next.x - 0.0).abs() < 1e-6);
        assert!((next.y - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_projected_pixels_truncates_toward_zero() {
        let pos = Position::new(0.0, 0.0);
        let vel = Velocity::new(-0.9, 0.9);
        assert_eq!(pos.projected_pixels(&vel, 1.0), (0, 0));

        let vel = Velocity::new(-1.5, 1.5);
        assert_eq!(pos.projected_pixels(&vel, 1.0), (-1, 1));
    }

    #[test]
    fn test_rect_overlap_excludes_shared_edge() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let touching = Rect::new(100.0, 0.0, 100.0, 50.0);
        let crossing = Rect::new(99.0, 49.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(5.0, 0.0, 5.0, 5.0)));
        assert_eq!(a.intersect(&Rect::new(20.0, 20.0, 1.0, 1.0)), None);
    }

    #[test]
    fn test_velocity_speed() {
        assert!((Velocity::new(3.0, 4.0).speed() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_constructors() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::rgba(1, 2, 3, 4).a, 4);
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!GameOutcome::Continue.is_terminal());
        assert!(GameOutcome::Won.is_terminal());
        assert!(GameOutcome::Lost.is_terminal());
        assert_eq!(GameOutcome::default(), GameOutcome::Continue);
    }

    #[test]
    fn test_phase_order() {
        let mut phases = vec![Phase::Render, Phase::Update, Phase::Setup, Phase::Event];
        phases.sort();
        assert_eq!(
            phases,
            vec![Phase::Setup, Phase::Event, Phase::Update, Phase::Render]
        );
    }

    #[test]
    fn test_input_event_json_shape() {
        let json = serde_json::to_string(&InputEvent::KeyDown { key: Key::Left }).unwrap();
        assert_eq!(json, r#"{"type":"KeyDown","key":"Left"}"#);
        let back: InputEvent = serde_json::from_str(r#"{"type":"Quit"}"#).unwrap();
        assert_eq!(back, InputEvent::Quit);
    }

    #[test]
    fn test_timing_mode_names() {
        let mode: TimingMode = serde_json::from_str(r#""measured""#).unwrap();
        assert_eq!(mode, TimingMode::Measured);
        assert_eq!(TimingMode::default(), TimingMode::Fixed);
    }
}
