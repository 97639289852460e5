//! Full sessions: time entry through display and exit.

use runviewer_engine::disambiguate::SELECTION_PROMPT;
use runviewer_engine::scripted::{RecordingPresenter, Rendered, ScriptedPrompt};
use runviewer_engine::search::{NO_RUN_FOUND, RUNS_FOUND, RUN_FOUND};
use runviewer_engine::session::TIME_PROMPT;

use crate::*;

#[test]
fn no_exact_match_then_one_search_disambiguates_two_runs() {
    // 01:15.500 = 2265 frames; the first window [2175, 2355] holds 102
    // (2340) and 105 (2190)
    let mut runs = standard_runs();
    runs.push(RunRecord::new(105, "01:13.000").unwrap().weapon(3));
    let dir = dataset_dir(&runs);
    let viewer = open_in(dir.path());

    let mut prompt = ScriptedPrompt::new(vec![
        "01:15.500",
        "Search for similar times",
        "105 102",
        "Exit",
    ]);
    let mut presenter = RecordingPresenter::new();

    let end = viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(end.searches, 2);
    assert_eq!(
        presenter.events(),
        &[
            Rendered::Message(NO_RUN_FOUND.into()),
            Rendered::Table(vec![102, 105]),
            Rendered::Message(RUNS_FOUND.into()),
            Rendered::Detail(105),
            Rendered::Detail(102),
        ]
    );
    assert!(prompt.asked().contains(&SELECTION_PROMPT.to_string()));
    viewer.close().unwrap();
}

#[test]
fn exact_single_match_displays_without_selection_prompt() {
    let (_dir, viewer) = open_standard();
    let mut prompt = ScriptedPrompt::new(vec!["01:12.000", "Exit"]);
    let mut presenter = RecordingPresenter::new();

    viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(presenter.tables(), vec![vec![101]]);
    assert!(presenter.messages().contains(&RUN_FOUND.to_string()));
    assert_eq!(presenter.details(), vec![101]);
    assert!(!prompt.asked().contains(&SELECTION_PROMPT.to_string()));
}

#[test]
fn exact_multiple_matches_always_prompt() {
    let (_dir, viewer) = open_standard();
    let mut prompt = ScriptedPrompt::new(vec!["01:30.000", "104", "Exit"]);
    let mut presenter = RecordingPresenter::new();

    viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(presenter.tables(), vec![vec![103, 104]]);
    assert_eq!(presenter.details(), vec![104]);
    assert_eq!(
        prompt.asked().iter().filter(|m| *m == SELECTION_PROMPT).count(),
        1
    );
}

#[test]
fn missing_id_reported_while_others_render() {
    let (_dir, viewer) = open_standard();
    let mut prompt = ScriptedPrompt::new(vec!["01:30.000", "103 999 104", "Exit"]);
    let mut presenter = RecordingPresenter::new();

    viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(presenter.details(), vec![103, 104]);
    assert!(presenter
        .messages()
        .contains(&"No run found with ID 999.".to_string()));
}

#[test]
fn view_another_run_reuses_selection() {
    let (_dir, viewer) = open_standard();
    let mut prompt = ScriptedPrompt::new(vec![
        "01:30.000",
        "103",
        "View another run",
        "104",
        "Exit",
    ]);
    let mut presenter = RecordingPresenter::new();

    let end = viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(end.searches, 1);
    assert_eq!(presenter.tables().len(), 1);
    assert_eq!(presenter.details(), vec![103, 104]);
}

#[test]
fn restart_returns_to_time_prompt() {
    let (_dir, viewer) = open_standard();
    let mut prompt = ScriptedPrompt::new(vec![
        "09:59.999",
        "Restart",
        "01:12.000",
        "Exit",
    ]);
    let mut presenter = RecordingPresenter::new();

    let end = viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(end.restarts, 1);
    assert_eq!(
        prompt.asked().iter().filter(|m| *m == TIME_PROMPT).count(),
        2
    );
    assert_eq!(presenter.details(), vec![101]);
}

#[test]
fn malformed_input_is_reprompted() {
    let (_dir, viewer) = open_standard();
    let mut prompt = ScriptedPrompt::new(vec![
        "1:30",
        "01:30.000",
        "103,104",
        "103 104",
        "Exit",
    ]);
    let mut presenter = RecordingPresenter::new();

    viewer.run(&mut prompt, &mut presenter).unwrap();

    assert_eq!(prompt.rejections().len(), 2);
    assert_eq!(presenter.details(), vec![103, 104]);
}
