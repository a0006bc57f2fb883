#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::animation::*;
    use crate::color::*;
    use crate::geometry::*;
    use crate::locals::*;
    use crate::scope::*;
    use crate::signal::*;
    use crate::timer::*;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription_and_unsubscribe() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(1);
        sig.update(|v| *v += 1);
        sig.unsubscribe(id);
        sig.set(10);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(String::from("a"));
        let echoed = Rc::new(RefCell::new(String::new()));
        {
            let sig2 = sig.clone();
            let echoed = echoed.clone();
            sig.subscribe(move |_| *echoed.borrow_mut() = sig2.get());
        }
        sig.set("b".into());
        assert_eq!(*echoed.borrow(), "b");
    }

    #[test]
    fn test_scope_explicit_dispose_runs_children_first() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let scope = Scope::new();
        let child = scope.child();
        {
            let order = order.clone();
            scope.add_disposer(move || order.borrow_mut().push("parent"));
        }
        {
            let order = order.clone();
            child.add_disposer(move || order.borrow_mut().push("child"));
        }

        assert!(order.borrow().is_empty());
        scope.dispose();
        assert_eq!(*order.borrow(), vec!["child", "parent"]);
    }

    #[test]
    fn test_scope_runs_disposers_once() {
        let count = Rc::new(Cell::new(0));
        let scope = Scope::new();
        let handle = scope.clone();
        {
            let count = count.clone();
            scope.add_disposer(move || count.set(count.get() + 1));
        }
        scope.dispose();
        assert!(handle.is_disposed());
        drop(handle);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_disposer_added_after_dispose_runs_immediately() {
        let ran = Rc::new(Cell::new(false));
        let scope = Scope::new();
        let handle = scope.clone();
        scope.dispose();
        {
            let ran = ran.clone();
            handle.add_disposer(move || ran.set(true));
        }
        assert!(ran.get());
    }

    #[test]
    fn test_current_scope_is_restored() {
        assert!(current_scope().is_none());
        let outer = Scope::new();
        outer.run(|| {
            assert!(current_scope().is_some());
            let inner = Scope::new();
            inner.run(|| assert!(current_scope().is_some()));
            assert!(current_scope().is_some());
        });
        assert!(current_scope().is_none());
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#zz"), Color::BLACK);
    }

    #[test]
    fn test_color_mul_alpha() {
        assert_eq!(Color::DARK_GRAY.mul_alpha(0.1).3, 26);
        assert_eq!(Color::WHITE.mul_alpha(2.0), Color::WHITE);
    }

    #[test]
    fn test_horizontal_gradient_stops_are_even() {
        let Brush::Linear { start, end, stops } =
            Brush::horizontal_gradient(&[Color::BLUE, Color::GREEN, Color::BLUE])
        else {
            panic!("expected a linear gradient");
        };
        assert_eq!(start, Vec2::new(0.0, 0.0));
        assert_eq!(end, Vec2::new(1.0, 0.0));
        let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
        assert_eq!(stops[1].color, Color::GREEN);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_transform_rotates_about_pivot() {
        let t = Transform::rotate_degrees_about(180.0, Vec2::new(50.0, 50.0));
        let p = t.apply_to_point(Vec2::new(25.0, 50.0));
        assert!((p.x - 75.0).abs() < 1e-3);
        assert!((p.y - 50.0).abs() < 1e-3);

        let s = Transform::scale_about(0.5, Vec2::new(100.0, 100.0));
        assert_eq!(s.apply_to_point(Vec2::new(0.0, 0.0)), Vec2::new(50.0, 50.0));
        assert!(Transform::identity().is_identity());
        assert!(!s.is_identity());
    }

    #[test]
    fn test_density_conversion() {
        assert_eq!(Dp(12.0).to_px(), 12.0);
        let (dp, sp) = with_density(
            Density {
                scale: 2.0,
                font_scale: 1.5,
            },
            || (Dp(12.0).to_px(), Sp(16.0).to_px()),
        );
        assert_eq!(dp, 24.0);
        assert_eq!(sp, 48.0);
        // popped again
        assert_eq!(density(), Density::default());
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = TestClock::install();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);
        clock.advance(Duration::from_millis(250));
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        assert!(!a.update());
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_animation_restart_wraps_around() {
        let clock = TestClock::install();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(2000), Easing::Linear)
                .infinite_repeatable(),
        );
        a.set_target(180.0);

        clock.advance(Duration::from_millis(2500));
        assert!(a.update());
        assert!((*a.get() - 45.0).abs() < 0.01);
        assert!(a.is_animating());
    }

    #[test]
    fn test_timer_fires_once_after_delay() {
        let clock = TestClock::install();
        let fired = Rc::new(Cell::new(0));
        let timer = {
            let fired = fired.clone();
            schedule_once(Duration::from_millis(1000), move || fired.set(fired.get() + 1))
        };

        clock.advance(Duration::from_millis(999));
        assert_eq!(run_due_timers(), 0);
        assert!(timer.is_pending());

        clock.advance(Duration::from_millis(1));
        assert_eq!(run_due_timers(), 1);
        assert_eq!(run_due_timers(), 0);
        assert_eq!(fired.get(), 1);
        assert!(timer.has_fired());
        assert_eq!(pending_timers(), 0);
    }

    #[test]
    fn test_timer_cancelled_with_scope() {
        let clock = TestClock::install();
        let fired = Rc::new(Cell::new(false));

        let scope = Scope::new();
        let timer = scope.run(|| {
            let fired = fired.clone();
            schedule_once(Duration::from_millis(1000), move || fired.set(true))
        });
        scope.dispose();

        clock.advance(Duration::from_secs(5));
        assert_eq!(run_due_timers(), 0);
        assert!(!fired.get());
        assert!(timer.is_cancelled());
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let clock = TestClock::install();
        let timer = schedule_once(Duration::ZERO, || {});
        clock.advance(Duration::from_millis(1));
        run_due_timers();
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Fired);
    }

    #[test]
    fn test_animation_progress_with_delay() {
        let spec = AnimationSpec::tween(Duration::from_millis(400), Easing::EaseInOut)
            .delayed(Duration::from_millis(100));
        assert_eq!(spec.progress(Duration::from_millis(50)), Progress::Waiting);
        assert_eq!(spec.progress(Duration::from_millis(300)), Progress::Running(0.5));
        assert_eq!(spec.progress(Duration::from_millis(500)), Progress::Finished);

        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
        assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
