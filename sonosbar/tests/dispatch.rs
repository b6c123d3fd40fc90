mod common;

use std::path::PathBuf;

use common::{speaker, Call, FakeController};
use rstest::rstest;
use sonosbar::actions::{Action, JoinTarget};
use sonosbar::cli::{Invocation, OutputMode, Target};
use sonosbar::menu::MenuConfig;
use sonosbar::model::{PlayMode, Volume};
use sonosbar::{BarError, ControllerError};

/// Kitchen alone; Living Room coordinating Dining Room
fn household() -> FakeController {
    let kitchen = speaker("Kitchen", "10.0.0.5");
    let living = speaker("Living Room", "10.0.0.10");
    let dining = speaker("Dining Room", "10.0.0.11");
    FakeController::new()
        .with_group(&[&kitchen])
        .with_group(&[&living, &dining])
        .with_playlist("Dinner", "SQ:3")
}

fn invocation(target: &str, group_scope: bool, action: Action) -> Invocation {
    Invocation {
        target: Some(Target::Name(target.to_string())),
        group_scope,
        output: OutputMode::Verbose,
        action: Some(action),
    }
}

fn run(controller: &FakeController, invocation: &Invocation) -> (Result<(), BarError>, String) {
    let config = MenuConfig {
        program: PathBuf::from("/opt/sonosbar"),
    };
    let mut out = Vec::new();
    let result = sonosbar::run(controller, invocation, &config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[rstest]
#[case(Action::Play, Call::Play("Dining Room".into()))]
#[case(Action::Pause, Call::Pause("Dining Room".into()))]
#[case(Action::Next, Call::Next("Dining Room".into()))]
#[case(Action::Previous, Call::Previous("Dining Room".into()))]
#[case(Action::Shuffle, Call::PlayMode("Dining Room".into(), PlayMode::ShuffleNoRepeat))]
#[case(Action::Normal, Call::PlayMode("Dining Room".into(), PlayMode::Normal))]
#[case(Action::PlayPlaylist("Dinner".into()), Call::PlayPlaylist("Dining Room".into(), "Dinner".into()))]
#[case(Action::PlayRadio("x-sonosapi-stream:s1".into()), Call::PlayUri("Dining Room".into(), "x-sonosapi-stream:s1".into()))]
fn player_scope_unjoins_first(#[case] action: Action, #[case] expected: Call) {
    let controller = household();
    let (result, _) = run(&controller, &invocation("Dining Room", false, action));

    result.unwrap();
    assert_eq!(controller.calls(), vec![Call::Unjoin("Dining Room".into()), expected]);
}

#[rstest]
#[case(Action::Play, Call::Play("Living Room".into()))]
#[case(Action::Next, Call::Next("Living Room".into()))]
#[case(Action::PlayPlaylist("Dinner".into()), Call::PlayPlaylist("Living Room".into(), "Dinner".into()))]
fn group_scope_acts_on_coordinator(#[case] action: Action, #[case] expected: Call) {
    let controller = household();
    let (result, _) = run(&controller, &invocation("Dining Room", true, action));

    result.unwrap();
    assert_eq!(controller.calls(), vec![expected]);
}

#[test]
fn volume_never_unjoins() {
    let controller = household();
    let (result, output) = run(
        &controller,
        &invocation("Dining Room", false, Action::SetVolume(Volume::from(40))),
    );

    result.unwrap();
    assert_eq!(controller.calls(), vec![Call::SetVolume("Dining Room".into(), 40)]);
    assert_eq!(output, "Player: Setting the volume to 40\n");
}

#[test]
fn verbose_group_prefix() {
    let controller = household();
    let (_, output) = run(&controller, &invocation("Kitchen", true, Action::Pause));
    assert_eq!(output, "Group: Pause\n");
}

#[test]
fn quiet_mode_prints_nothing() {
    let controller = household();
    let mut invocation = invocation("Kitchen", false, Action::Unjoin);
    invocation.output = OutputMode::Quiet;

    let (result, output) = run(&controller, &invocation);

    result.unwrap();
    assert!(output.is_empty());
    assert_eq!(controller.calls(), vec![Call::Unjoin("Kitchen".into())]);
}

#[test]
fn join_by_name_follows_target_coordinator() {
    let controller = household();
    let (result, output) = run(
        &controller,
        &invocation("Kitchen", false, Action::Join(JoinTarget::Name("Dining Room".into()))),
    );

    result.unwrap();
    assert_eq!(output, "Player: Joining Dining Room\n");
    assert_eq!(
        controller.calls(),
        vec![Call::Join("Kitchen".into(), "Living Room".into())]
    );
}

#[test]
fn group_join_moves_every_member() {
    let controller = household();
    let (result, _) = run(
        &controller,
        &invocation("Dining Room", true, Action::Join(JoinTarget::Address("10.0.0.5".into()))),
    );

    result.unwrap();
    assert_eq!(
        controller.calls(),
        vec![
            Call::Join("Living Room".into(), "Kitchen".into()),
            Call::Join("Dining Room".into(), "Kitchen".into()),
        ]
    );
}

#[rstest]
#[case(JoinTarget::Name("Attic".into()))]
#[case(JoinTarget::Address("10.0.0.99".into()))]
fn unknown_join_target_joins_nothing(#[case] target: JoinTarget) {
    let controller = household();
    let (result, _) = run(&controller, &invocation("Kitchen", false, Action::Join(target)));

    let error = result.unwrap_err();
    assert!(matches!(error, BarError::JoinTargetUnknown));
    assert_eq!(error.user_message().unwrap(), "ERROR: Target to join is not known");
    assert!(controller.calls().is_empty());
}

#[test]
fn unknown_speaker_name() {
    let controller = household();
    let (result, output) = run(&controller, &invocation("Attic", false, Action::Play));

    let error = result.unwrap_err();
    assert!(matches!(error, BarError::Controller(ControllerError::SpeakerNotFound(_))));
    assert_eq!(error.user_message().unwrap(), "ERROR: Speaker 'Attic' not found");
    assert!(output.is_empty());
    assert!(controller.calls().is_empty());
}

#[test]
fn unknown_playlist() {
    let controller = household();
    let (result, _) = run(&controller, &invocation("Kitchen", true, Action::PlayPlaylist("Brunch".into())));

    assert!(matches!(
        result,
        Err(BarError::Controller(ControllerError::PlaylistNotFound(_)))
    ));
    assert!(controller.calls().is_empty());
}

#[test]
fn target_by_address() {
    let controller = household();
    let invocation = Invocation {
        target: Some(Target::Address("10.0.0.11".into())),
        group_scope: true,
        output: OutputMode::Quiet,
        action: Some(Action::Play),
    };

    run(&controller, &invocation).0.unwrap();
    assert_eq!(controller.calls(), vec![Call::Play("Living Room".into())]);
}

#[test]
fn target_without_action_does_nothing() {
    let controller = household();
    let invocation = Invocation {
        target: Some(Target::Name("Kitchen".into())),
        group_scope: false,
        output: OutputMode::Quiet,
        action: None,
    };

    let (result, output) = run(&controller, &invocation);
    result.unwrap();
    assert!(output.is_empty());
    assert!(controller.calls().is_empty());
}
