//! Property-based tests for confirmation decisions

use git_pitch::confirm::{
    is_affirmative, ConfirmState, Decision, KeyInput, LinePrompt, YesNoAsker,
};
use proptest::prelude::*;
use std::io::Cursor;

fn navigation() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        Just(KeyInput::Previous),
        Just(KeyInput::Next),
        Just(KeyInput::Ignored),
    ]
}

/// Toggling an odd number of times then confirming accepts; even declines.
#[test]
fn test_toggle_parity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(navigation(), 0..40), |moves| {
            let toggles = moves
                .iter()
                .filter(|input| **input != KeyInput::Ignored)
                .count();
            let mut inputs = moves.clone();
            inputs.push(KeyInput::Confirm);

            let state = ConfirmState::replay(inputs);
            assert_eq!(state, ConfirmState::Finalized(toggles % 2 == 1));

            Ok(())
        })
        .unwrap();
}

/// Direct yes/no finalizes regardless of prior navigation.
#[test]
fn test_direct_answer_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(navigation(), 0..20), any::<bool>()),
            |(moves, yes)| {
                let mut inputs = moves.clone();
                inputs.push(if yes { KeyInput::Yes } else { KeyInput::No });

                let state = ConfirmState::replay(inputs);
                assert_eq!(state.decision(), Some(Decision::answered(yes)));

                Ok(())
            },
        )
        .unwrap();
}

/// Cancellation from any selection state aborts, and aborting reads as "no".
#[test]
fn test_cancel_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                prop::collection::vec(navigation(), 0..20),
                Just(KeyInput::Cancel),
                prop::collection::vec(any::<bool>(), 0..5),
            ),
            |(moves, cancel, trailing)| {
                let mut inputs = moves;
                inputs.push(cancel);
                // Inputs after a terminal state change nothing
                inputs.extend(trailing.into_iter().map(|yes| {
                    if yes {
                        KeyInput::Yes
                    } else {
                        KeyInput::Confirm
                    }
                }));

                let state = ConfirmState::replay(inputs);
                assert_eq!(state, ConfirmState::Aborted);
                let decision = state.decision().unwrap();
                assert!(!decision.finalized);
                assert!(!decision.is_accepted());

                Ok(())
            },
        )
        .unwrap();
}

/// Any line other than y/yes (any case, surrounding blanks) declines, finalized.
#[test]
fn test_line_prompt_declines_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[^\r\n]{0,12}", |answer| {
            prop_assume!(!is_affirmative(&answer));

            let input = format!("{}\n", answer);
            let mut prompt = LinePrompt::new(Cursor::new(input.into_bytes()), Vec::new());
            let decision = prompt.ask("Overwrite?").unwrap();

            assert_eq!(decision, Decision::answered(false));
            assert!(decision.finalized);

            Ok(())
        })
        .unwrap();
}

#[test]
fn test_line_prompt_accepts_any_case_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&"[yY]|[yY][eE][sS]", |answer| {
            let input = format!("  {}\t\n", answer);
            let mut prompt = LinePrompt::new(Cursor::new(input.into_bytes()), Vec::new());
            assert_eq!(prompt.ask("Overwrite?").unwrap(), Decision::answered(true));

            Ok(())
        })
        .unwrap();
}

/// Raw bytes, valid UTF-8 or not, decline unless they spell y/yes.
#[test]
fn test_line_prompt_raw_bytes_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec(any::<u8>().prop_filter("single line", |b| *b != b'\n'), 0..16),
            |bytes| {
                prop_assume!(!is_affirmative(&String::from_utf8_lossy(&bytes)));

                let mut input = bytes.clone();
                input.push(b'\n');
                let mut prompt = LinePrompt::new(Cursor::new(input), Vec::new());

                assert_eq!(prompt.ask("Overwrite?").unwrap(), Decision::answered(false));

                Ok(())
            },
        )
        .unwrap();
}
