// Integration tests for the playback controller

use std::time::Duration;

use sortty::array::RandomArray;
use sortty::playback::{
    Controller, IntervalScheduler, ManualClock, PlaybackState, Scheduler, StepOutcome,
};
use sortty::registry::Registry;

type TestController = Controller<IntervalScheduler<ManualClock>>;

fn setup() -> (TestController, ManualClock) {
    let clock = ManualClock::new();
    let controller = Controller::new(
        Registry::new(),
        RandomArray::seeded(10, 100, 2024),
        IntervalScheduler::new(clock.clone()),
    );
    (controller, clock)
}

/// Step until the run finishes, returning every published array
fn run_to_end(controller: &mut TestController) -> Vec<Vec<u32>> {
    let mut published = Vec::new();
    loop {
        match controller.step() {
            StepOutcome::Advanced => published.push(controller.array().to_vec()),
            StepOutcome::Finished => return published,
            StepOutcome::Idle => panic!("no algorithm selected"),
        }
    }
}

#[test]
fn test_step_without_algorithm_is_noop() {
    let (mut controller, _) = setup();
    let before: PlaybackState = controller.state();

    assert_eq!(controller.step(), StepOutcome::Idle);
    assert_eq!(controller.step(), StepOutcome::Idle);
    assert_eq!(controller.state(), before);
}

#[test]
fn test_insertion_sort_scenario() {
    let (mut controller, _) = setup();
    controller.set_array(vec![5, 3, 4, 1, 2]);
    controller.select_algorithm("insertion-sort");

    let published = run_to_end(&mut controller);
    assert_eq!(published.len(), 4);
    assert_eq!(published.last(), Some(&vec![1, 2, 3, 4, 5]));
    assert!(controller.is_done());
}

#[test]
fn test_empty_array_finishes_immediately() {
    let registry = Registry::new();
    for id in registry.ids() {
        let (mut controller, _) = setup();
        controller.set_array(vec![]);
        controller.select_algorithm(id);

        assert!(!controller.is_done());
        assert_eq!(controller.step(), StepOutcome::Finished, "{}", id);
        assert!(controller.is_done());
        assert!(controller.array().is_empty());
        assert_eq!(controller.steps_taken(), 0);
    }
}

#[test]
fn test_every_algorithm_sorts_through_controller() {
    let registry = Registry::new();
    for id in registry.ids() {
        let (mut controller, _) = setup();
        let input = controller.array().to_vec();
        controller.select_algorithm(id);
        run_to_end(&mut controller);

        let mut expected = input.clone();
        expected.sort_unstable();
        assert_eq!(controller.array(), expected.as_slice(), "{}", id);
    }
}

#[test]
fn test_reselect_restarts_from_current_array() {
    let (mut controller, _) = setup();
    controller.set_array(vec![6, 2, 9, 1, 5, 3]);
    controller.select_algorithm("quick-sort");
    controller.step();
    controller.step();
    let midway = controller.array().to_vec();

    // Expected: a fresh run over the midway array
    let (mut reference, _) = setup();
    reference.set_array(midway.clone());
    reference.select_algorithm("merge-sort");
    let expected = run_to_end(&mut reference);

    controller.select_algorithm("merge-sort");
    assert_eq!(controller.array(), midway.as_slice());
    assert_eq!(controller.steps_taken(), 0);
    assert_eq!(run_to_end(&mut controller), expected);
}

#[test]
fn test_finished_run_can_be_restarted() {
    let (mut controller, _) = setup();
    controller.set_array(vec![2, 1]);
    controller.select_algorithm("bubble-sort");
    run_to_end(&mut controller);

    // The next step starts a fresh run over whatever is displayed now
    controller.set_array(vec![3, 1, 2]);
    assert_eq!(controller.step(), StepOutcome::Advanced);
    assert!(!controller.is_done());
}

#[test]
fn test_set_array_does_not_touch_active_run() {
    let (mut controller, _) = setup();
    controller.set_array(vec![3, 2, 1]);
    controller.select_algorithm("bubble-sort");
    controller.step();

    controller.set_array(vec![7, 7, 7]);
    assert_eq!(controller.array(), &[7, 7, 7]);

    // The generator continues from its own copy
    controller.step();
    assert_eq!(controller.array(), &[2, 1, 3]);
}

#[test]
fn test_start_then_pause_takes_no_steps() {
    let (mut controller, clock) = setup();
    controller.select_algorithm("bubble-sort");
    let before = controller.array().to_vec();

    controller.start_auto_sorting();
    controller.pause_auto_sorting();
    clock.advance(Duration::from_secs(10));

    assert_eq!(controller.run_due_ticks(), 0);
    assert_eq!(controller.array(), before.as_slice());
    assert_eq!(controller.steps_taken(), 0);
}

#[test]
fn test_start_does_not_step_immediately() {
    let (mut controller, clock) = setup();
    controller.set_array(vec![3, 1, 2]);
    controller.select_algorithm("selection-sort");
    controller.start_auto_sorting();
    assert_eq!(controller.run_due_ticks(), 0);

    clock.advance(controller.interval());
    assert_eq!(controller.run_due_ticks(), 1);
    assert_eq!(controller.steps_taken(), 1);
}

#[test]
fn test_auto_play_runs_to_completion_and_stops() {
    let (mut controller, clock) = setup();
    controller.set_array(vec![4, 3, 2, 1]);
    controller.select_algorithm("bubble-sort");
    controller.start_auto_sorting();

    // Six swaps, then one tick that finds the run exhausted
    for _ in 0..7 {
        clock.advance(controller.interval());
        assert_eq!(controller.run_due_ticks(), 1);
    }
    assert_eq!(controller.array(), &[1, 2, 3, 4]);
    assert!(controller.is_done());
    assert!(!controller.is_auto_sorting());
    assert_eq!(controller.scheduler().active(), 0);

    clock.advance(Duration::from_secs(5));
    assert_eq!(controller.run_due_ticks(), 0);
}

#[test]
fn test_set_speed_reschedules_single_timer() {
    let (mut controller, clock) = setup();
    controller.set_array((1..=30).rev().collect());
    controller.select_algorithm("bubble-sort");
    controller.set_speed(10).unwrap(); // 300ms
    controller.start_auto_sorting();

    clock.advance(Duration::from_millis(300));
    assert_eq!(controller.run_due_ticks(), 1);

    clock.advance(Duration::from_millis(250));
    controller.set_speed(30).unwrap(); // 100ms, counted from now
    assert_eq!(controller.scheduler().active(), 1);

    // The old 300ms deadline (50ms away) must not fire
    clock.advance(Duration::from_millis(50));
    assert_eq!(controller.run_due_ticks(), 0);

    clock.advance(Duration::from_millis(50));
    assert_eq!(controller.run_due_ticks(), 1);

    // Ticks keep the new cadence, one step each
    let mut ticks = 0;
    for _ in 0..20 {
        clock.advance(Duration::from_millis(10));
        ticks += controller.run_due_ticks();
    }
    assert_eq!(ticks, 2);
    assert_eq!(controller.steps_taken(), 4);
    assert_eq!(controller.scheduler().active(), 1);
}

#[test]
fn test_select_and_reset_cancel_auto_play() {
    let (mut controller, clock) = setup();
    controller.select_algorithm("heap-sort");
    controller.start_auto_sorting();
    controller.select_algorithm("shell-sort");
    assert!(!controller.is_auto_sorting());
    assert_eq!(controller.scheduler().active(), 0);

    controller.start_auto_sorting();
    controller.reset_array();
    assert!(!controller.is_auto_sorting());

    clock.advance(Duration::from_secs(3));
    assert_eq!(controller.run_due_ticks(), 0);
    assert_eq!(controller.steps_taken(), 0);
}

#[test]
fn test_restart_auto_play_keeps_one_timer() {
    let (mut controller, _) = setup();
    controller.select_algorithm("merge-sort");
    for _ in 0..5 {
        controller.start_auto_sorting();
        controller.set_speed(80).unwrap();
    }
    assert_eq!(controller.scheduler().active(), 1);

    controller.toggle_auto_sorting();
    assert_eq!(controller.scheduler().active(), 0);
}
