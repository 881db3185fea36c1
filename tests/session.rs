use cannon_game::consts::DIALOG_TITLE;
use cannon_game::renderer::{HeadlessWindows, Scene, ScriptEvent, Surface};
use cannon_game::sim::{Game, Player};
use cannon_game::ui::{DialogChoice, InputDialog};
use cannon_game::{GraphicGame, Session, Settings, TurnOutcome};
use glam::Vec2;

const FIRE_BUTTON: Vec2 = Vec2::new(1.0, 4.0);
const QUIT_BUTTON: Vec2 = Vec2::new(3.0, 4.0);

fn aim(angle: &str, velocity: &str) -> Vec<ScriptEvent> {
    vec![
        ScriptEvent::Type {
            entry: 0,
            text: angle.into(),
        },
        ScriptEvent::Type {
            entry: 1,
            text: velocity.into(),
        },
        ScriptEvent::Click(FIRE_BUTTON),
    ]
}

/// Two cannons 100 units apart, no wind
fn calm_session(windows: &mut HeadlessWindows) -> Session<Scene> {
    let game = Game::new(10.0, 3.0, 2024).with_players([
        Player::new(-50.0, "red", false),
        Player::new(50.0, "blue", true),
    ]);
    let mut session = Session::with_game(windows, game, Settings::unpaced()).unwrap();
    session.game_mut().set_current_wind(0.0);
    session
}

#[test]
fn fire_renders_at_cannon_and_moves() {
    let game = Game::new(10.0, 3.0, 1).with_players([
        Player::new(-50.0, "red", false),
        Player::new(50.0, "blue", true),
    ]);
    let mut windows = HeadlessWindows::new();
    let mut graphic = GraphicGame::open(&mut windows, game).unwrap();

    let shot = graphic.current_player().fire(45.0, 30.0).unwrap();
    assert!(shot.is_moving());
    let centre = shot.window().centroid(shot.shape()).unwrap();
    assert_eq!(centre.x, -50.0);
    assert_eq!(centre, Vec2::new(shot.x(), shot.y()));
}

#[test]
fn quit_click_resolves_dialog() {
    let mut windows = HeadlessWindows::new();
    windows.script(DIALOG_TITLE, [ScriptEvent::Click(QUIT_BUTTON)]);
    let mut dialog: InputDialog<Scene> = InputDialog::open(&mut windows, 45.0, 30.0, 2.5).unwrap();
    assert_eq!(dialog.wind_text().unwrap(), "2.50");
    assert_eq!(dialog.interact(), DialogChoice::Quit);
    assert_eq!(dialog.interact().label(), "Quit");
    dialog.close();
}

#[test]
fn hit_scores_and_starts_new_round() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    windows.script(DIALOG_TITLE, aim("45", "31"));

    let outcome = session.play_turn(&mut windows).unwrap();
    assert_eq!(outcome, TurnOutcome::Hit { shooter: 0 });

    let game = session.game();
    assert_eq!(game.scores(), [1, 0]);
    assert_eq!(game.current_player_number(), 1);
    assert_ne!(game.current_wind(), 0.0);
    assert!(game.window().find_text("Score: 1").is_some());
    assert!(game.window().frames() > 0);
}

#[test]
fn miss_only_passes_the_turn() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    windows.script(DIALOG_TITLE, aim("45", "10"));

    match session.play_turn(&mut windows).unwrap() {
        TurnOutcome::Miss { shooter, distance } => {
            assert_eq!(shooter, 0);
            // Short of the right-hand cannon
            assert!(distance.is_some_and(|d| d < 0.0), "distance {distance:?}");
        }
        other => panic!("expected a miss, got {other:?}"),
    }

    let game = session.game();
    assert_eq!(game.scores(), [0, 0]);
    assert_eq!(game.current_player_number(), 1);
    assert_eq!(game.current_wind(), 0.0);
}

#[test]
fn bad_input_reprompts() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    windows.script(DIALOG_TITLE, aim("steep", "31"));
    windows.script(DIALOG_TITLE, aim("45", "10"));

    let outcome = session.play_turn(&mut windows).unwrap();
    assert!(matches!(outcome, TurnOutcome::Miss { shooter: 0, .. }));
    assert_eq!(windows.opened(), ["Cannon game", "Fire", "Fire"]);
    assert_eq!(windows.pending(DIALOG_TITLE), 0);
}

#[test]
fn closed_dialog_quits() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    windows.script(DIALOG_TITLE, [ScriptEvent::Close]);

    assert_eq!(session.play_turn(&mut windows).unwrap(), TurnOutcome::Quit);
    assert_eq!(session.game().current_player_number(), 0);
}

#[test]
fn run_alternates_players_until_quit() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    // Left misses, right (mirrored angle) hits, then the dialog is closed
    windows.script(DIALOG_TITLE, aim("45", "10"));
    windows.script(DIALOG_TITLE, aim("45", "31"));

    let scores = session.run(&mut windows).unwrap();
    assert_eq!(scores, [0, 1]);
    assert_eq!(windows.opened().len(), 4);

    // ground + two (label, cannon) pairs + one ball per player
    let window = session.game().window();
    assert_eq!(window.live_shapes(), 7);
    assert!(!window.vertices().is_empty());
}

#[test]
fn dialog_is_prefilled_with_last_aim() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    windows.script(DIALOG_TITLE, aim("30", "12.5"));
    session.play_turn(&mut windows).unwrap();
    session.game_mut().next_player();

    // No typing this time: Fire! reuses what is in the fields
    windows.script(DIALOG_TITLE, [ScriptEvent::Click(FIRE_BUTTON)]);
    let aim = session.prompt_aim(&mut windows).unwrap();
    assert_eq!(aim, Some((30.0, 12.5)));
}

#[test]
fn shot_animation_is_capped() {
    let mut windows = HeadlessWindows::new();
    let game = Game::new(10.0, 3.0, 5);
    let settings = Settings {
        max_ticks_per_shot: 3,
        ..Settings::unpaced()
    };
    let mut session = Session::with_game(&mut windows, game, settings).unwrap();
    assert_eq!(session.fire(45.0, 40.0).unwrap(), None);
    assert_eq!(session.game().window().frames(), 3);
}

#[test]
fn capped_shot_over_the_cannon_is_not_a_hit() {
    let mut windows = HeadlessWindows::new();
    let game = Game::new(10.0, 3.0, 2024).with_players([
        Player::new(-50.0, "red", false),
        Player::new(50.0, "blue", true),
    ]);
    // 45/40 flies past x = 50 high in the air; stop it right there
    let settings = Settings {
        max_ticks_per_shot: 177,
        ..Settings::unpaced()
    };
    let mut session = Session::with_game(&mut windows, game, settings).unwrap();
    session.game_mut().set_current_wind(0.0);
    windows.script(DIALOG_TITLE, aim("45", "40"));

    let outcome = session.play_turn(&mut windows).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Miss {
            shooter: 0,
            distance: None
        }
    );
    let game = session.game();
    assert_eq!(game.scores(), [0, 0]);
    assert_eq!(game.current_player_number(), 1);
    assert_eq!(game.current_wind(), 0.0);
}

#[test]
fn uncapped_long_shot_lands_beyond_the_cannon() {
    let mut windows = HeadlessWindows::new();
    let mut session = calm_session(&mut windows);
    windows.script(DIALOG_TITLE, aim("45", "40"));

    match session.play_turn(&mut windows).unwrap() {
        TurnOutcome::Miss {
            shooter: 0,
            distance: Some(d),
        } => assert!(d > 0.0, "distance {d}"),
        other => panic!("expected a long miss, got {other:?}"),
    }
}
