use super::*;

const CONTACT: i32 = 7;

#[derive(Debug, Default)]
struct Run {
    before_lift: std::vec::Vec<GestureKey>,
    at_lift: std::vec::Vec<GestureKey>,
}

fn sample(controller: &mut StrokeController, x: i32, y: i32) -> Option<GestureKey> {
    let first = controller.handle(InputEvent::PositionX(x));
    let second = controller.handle(InputEvent::PositionY(y));
    first.or(second)
}

fn draw(controller: &mut StrokeController, points: &[(i32, i32)]) -> std::vec::Vec<GestureKey> {
    let mut keys = std::vec::Vec::new();
    for &(x, y) in points {
        keys.extend(sample(controller, x, y));
    }
    keys
}

fn stroke(controller: &mut StrokeController, points: &[(i32, i32)], lift: InputEvent) -> Run {
    assert_eq!(controller.handle(InputEvent::TrackingId(CONTACT)), None);
    let before_lift = draw(controller, points);
    let at_lift = controller.handle(lift).into_iter().collect();
    Run {
        before_lift,
        at_lift,
    }
}

fn line(from: (i32, i32), to: (i32, i32), steps: i32) -> std::vec::Vec<(i32, i32)> {
    (0..=steps)
        .map(|i| {
            (
                from.0 + (to.0 - from.0) * i / steps,
                from.1 + (to.1 - from.1) * i / steps,
            )
        })
        .collect()
}

// Counterclockwise on screen: W, SW, S, SE, E, NE, N, NW, W.
const O_PATH: [(i32, i32); 10] = [
    (300, 200),
    (250, 200),
    (220, 230),
    (220, 280),
    (250, 310),
    (300, 310),
    (330, 280),
    (330, 230),
    (300, 200),
    (250, 200),
];

// N, NE, E, SE, S, SE, E, NE, E, SE, S.
const M_PATH: [(i32, i32); 12] = [
    (100, 600),
    (100, 540),
    (130, 510),
    (190, 510),
    (220, 540),
    (220, 600),
    (250, 630),
    (310, 630),
    (340, 600),
    (400, 600),
    (430, 630),
    (430, 690),
];

// W, SW, S, SE, E.
const C_PATH: [(i32, i32); 6] = [
    (400, 200),
    (340, 200),
    (310, 230),
    (310, 290),
    (340, 320),
    (400, 320),
];

// A full turn starting and ending eastward, finishing well below the loop.
const E_PATH: [(i32, i32); 12] = [
    (100, 400),
    (160, 400),
    (190, 370),
    (190, 310),
    (160, 280),
    (100, 280),
    (70, 310),
    (70, 370),
    (130, 460),
    (230, 470),
    (330, 490),
    (430, 515),
];

#[test]
fn horizontal_swipes_fire_before_lift() {
    let mut controller = StrokeController::new();
    let run = stroke(
        &mut controller,
        &line((100, 500), (700, 500), 12),
        InputEvent::Lift,
    );
    assert_eq!(run.before_lift, std::vec![GestureKey::Right]);
    assert!(run.at_lift.is_empty());

    let run = stroke(
        &mut controller,
        &line((900, 480), (300, 470), 12),
        InputEvent::Lift,
    );
    assert_eq!(run.before_lift, std::vec![GestureKey::Left]);
    assert!(run.at_lift.is_empty());
}

#[test]
fn swipe_fires_once_the_threshold_is_reached() {
    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));
    let points = line((100, 500), (700, 500), 12);

    // Steps of 50: x=500 is 400 from the start, x=550 is 450.
    assert!(draw(&mut controller, &points[..=8]).is_empty());
    assert!(controller.is_armed());
    assert_eq!(
        draw(&mut controller, &points[9..=9]),
        std::vec![GestureKey::Right]
    );
    assert!(!controller.is_armed());
    assert!(draw(&mut controller, &points[10..]).is_empty());
}

#[test]
fn vertical_swipes_follow_screen_y() {
    let mut controller = StrokeController::new();
    let run = stroke(
        &mut controller,
        &line((100, 100), (100, 900), 8),
        InputEvent::Lift,
    );
    assert_eq!(run.before_lift, std::vec![GestureKey::Down]);

    let run = stroke(
        &mut controller,
        &line((100, 900), (100, 100), 8),
        InputEvent::Lift,
    );
    assert_eq!(run.before_lift, std::vec![GestureKey::Up]);
}

#[test]
fn short_straight_stroke_resolves_nothing() {
    let mut controller = StrokeController::new();
    let run = stroke(
        &mut controller,
        &line((100, 500), (500, 500), 8),
        InputEvent::Lift,
    );
    assert!(run.before_lift.is_empty());
    assert!(run.at_lift.is_empty());
    assert!(!controller.is_tracking());
}

#[test]
fn shapes_resolve_at_lift() {
    let cases: [(&[(i32, i32)], GestureKey); 4] = [
        (&O_PATH, GestureKey::O),
        (&M_PATH, GestureKey::M),
        (&C_PATH, GestureKey::C),
        (&E_PATH, GestureKey::E),
    ];
    let mut controller = StrokeController::new();
    for (points, key) in cases {
        let run = stroke(&mut controller, points, InputEvent::Lift);
        assert!(run.before_lift.is_empty(), "{:?}", key);
        assert_eq!(run.at_lift, std::vec![key]);
    }
}

#[test]
fn shape_buffer_holds_the_traced_octants() {
    use Octant::*;

    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));
    draw(&mut controller, &O_PATH);

    let octants: std::vec::Vec<Octant> = controller.buffer().octants().collect();
    assert_eq!(octants, std::vec![W, SW, S, SE, E, NE, N, NW, W]);
    assert_eq!(controller.buffer().entries()[1].point, crate::types::TouchPoint::new(220, 230));
}

#[test]
fn sharp_turns_record_corner_fill() {
    use Octant::*;

    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));
    // E, then straight down: a 90 degree clockwise turn.
    draw(&mut controller, &[(100, 100), (160, 100), (160, 160)]);

    let octants: std::vec::Vec<Octant> = controller.buffer().octants().collect();
    assert_eq!(octants, std::vec![E, SE, S]);
}

#[test]
fn tracking_id_minus_one_lifts_the_contact() {
    let mut controller = StrokeController::new();
    let run = stroke(&mut controller, &C_PATH, InputEvent::TrackingId(-1));
    assert_eq!(run.at_lift, std::vec![GestureKey::C]);
    assert!(!controller.is_tracking());
}

#[test]
fn repeated_lift_fires_nothing_more() {
    let mut controller = StrokeController::new();
    let run = stroke(&mut controller, &C_PATH, InputEvent::Lift);
    assert_eq!(run.at_lift, std::vec![GestureKey::C]);

    assert_eq!(controller.handle(InputEvent::Lift), None);
    assert_eq!(controller.handle(InputEvent::TrackingId(-1)), None);
    assert!(controller.buffer().is_empty());
}

#[test]
fn latch_blocks_a_shape_after_a_swipe() {
    let mut controller = StrokeController::new();
    let mut points = line((100, 300), (600, 300), 10);
    // Curl back into a C: W, SW, S, SE, E.
    points.extend_from_slice(&[(540, 300), (510, 330), (510, 390), (540, 420), (600, 420)]);

    let run = stroke(&mut controller, &points, InputEvent::Lift);
    assert_eq!(run.before_lift, std::vec![GestureKey::Right]);
    assert!(run.at_lift.is_empty());
}

#[test]
fn turning_suppresses_swipes() {
    let mut controller = StrokeController::new();
    // Short leg south, then a long leg east.
    let mut points = line((100, 300), (100, 400), 2);
    points.extend(line((100, 400), (800, 400), 14).into_iter().skip(1));

    let run = stroke(&mut controller, &points, InputEvent::Lift);
    assert!(run.before_lift.is_empty());
    assert!(run.at_lift.is_empty());
}

#[test]
fn capacity_exhaustion_resets_without_action() {
    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));

    // E/N staircase: each turn records one fill octant plus the new one.
    let mut points = std::vec![(100, 800)];
    let (mut x, mut y) = (100, 800);
    for leg in 0..8 {
        if leg % 2 == 0 {
            x += 30;
        } else {
            y -= 30;
        }
        points.push((x, y));
    }
    assert!(draw(&mut controller, &points).is_empty());
    assert_eq!(controller.buffer().len(), 15);
    assert!(controller.is_tracking());

    // Ninth leg needs two more slots.
    assert_eq!(sample(&mut controller, x + 30, y), None);
    assert!(!controller.is_tracking());
    assert!(controller.buffer().is_empty());
    assert!(controller.is_armed());
    assert_eq!(controller.handle(InputEvent::Lift), None);

    let run = stroke(&mut controller, &C_PATH, InputEvent::Lift);
    assert_eq!(run.at_lift, std::vec![GestureKey::C]);
}

#[test]
fn slot_change_resets_and_next_stroke_starts_clean() {
    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));
    draw(&mut controller, &O_PATH[..6]);
    assert!(controller.is_tracking());

    assert_eq!(controller.handle(InputEvent::SlotChange), None);
    assert!(!controller.is_tracking());
    assert!(controller.buffer().is_empty());

    let run = stroke(&mut controller, &C_PATH, InputEvent::Lift);
    assert_eq!(run.at_lift, std::vec![GestureKey::C]);
}

#[test]
fn second_contact_id_resets_the_stroke() {
    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));
    draw(&mut controller, &C_PATH);

    assert_eq!(controller.handle(InputEvent::TrackingId(CONTACT)), None);
    assert!(controller.is_tracking());

    assert_eq!(controller.handle(InputEvent::TrackingId(CONTACT + 1)), None);
    assert!(!controller.is_tracking());
    assert!(controller.buffer().is_empty());
    assert_eq!(controller.handle(InputEvent::Lift), None);

    let run = stroke(&mut controller, &C_PATH, InputEvent::Lift);
    assert_eq!(run.at_lift, std::vec![GestureKey::C]);
}

#[test]
fn swipe_latch_does_not_leak_into_the_next_stroke() {
    let mut controller = StrokeController::new();
    let run = stroke(
        &mut controller,
        &line((100, 100), (100, 900), 8),
        InputEvent::Lift,
    );
    assert_eq!(run.before_lift, std::vec![GestureKey::Down]);
    assert!(controller.is_armed());

    let run = stroke(&mut controller, &M_PATH, InputEvent::Lift);
    assert_eq!(run.at_lift, std::vec![GestureKey::M]);
}

#[test]
fn coordinates_pair_up_before_sampling() {
    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));

    controller.handle(InputEvent::PositionX(100));
    controller.handle(InputEvent::PositionX(120));
    assert!(!controller.is_tracking());

    controller.handle(InputEvent::PositionY(300));
    assert!(controller.is_tracking());

    // A lone half is dropped on reset.
    controller.handle(InputEvent::PositionX(400));
    controller.reset();
    controller.handle(InputEvent::PositionY(300));
    assert!(!controller.is_tracking());
}

#[test]
fn external_reset_discards_the_stroke() {
    let mut controller = StrokeController::new();
    controller.handle(InputEvent::TrackingId(CONTACT));
    draw(&mut controller, &C_PATH);
    controller.reset();

    assert!(!controller.is_tracking());
    assert!(controller.buffer().is_empty());
    assert_eq!(controller.handle(InputEvent::Lift), None);
}
