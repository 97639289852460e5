//! Widening-window behaviour through the facade.

use runviewer::{time, LookupConfig, SearchSession, SessionLoop, SqliteRecordStore};
use runviewer_engine::scripted::{RecordingPresenter, ScriptedPrompt};

use crate::*;

fn search_range_messages(presenter: &RecordingPresenter) -> Vec<String> {
    presenter
        .messages()
        .into_iter()
        .filter(|m| m.starts_with("Current time search range"))
        .collect()
}

#[test]
fn window_grows_by_step_until_a_run_is_found() {
    let dir = dataset_dir(&standard_runs());
    let store = SqliteRecordStore::open(dir.path().join("runs.sqlite")).unwrap();
    // 01:24.000 = 2520 frames; nearest run 103 at 2700 needs radius 180
    let mut prompt = ScriptedPrompt::new(vec![
        "01:24.000",
        "Search for similar times",
        "Search for similar times",
        "103",
        "Exit",
    ]);
    let mut presenter = RecordingPresenter::new();
    let mut session = SearchSession::new(LookupConfig::default());

    SessionLoop::new(&store, LookupConfig::default())
        .run_with(&mut session, &mut prompt, &mut presenter)
        .unwrap();

    assert_eq!(
        search_range_messages(&presenter),
        vec![format!(
            "Current time search range: {} to {}",
            time::decode(2520 - 90),
            time::decode(2520 + 90)
        )]
    );
    assert_eq!(session.state().window_radius, 180);
    assert_eq!(session.state().min_frame, Some(2340));
    assert_eq!(session.state().max_frame, Some(2700));
    assert_eq!(presenter.tables(), vec![vec![102, 103, 104]]);
    assert_eq!(presenter.details(), vec![103]);
}

#[test]
fn window_cap_stops_growth() {
    let dir = dataset_dir(&standard_runs());
    let config = LookupConfig::new().max_window_radius(Some(120));
    let viewer = runviewer::RunViewer::builder()
        .dir(dir.path())
        .config(config.clone())
        .open()
        .unwrap();
    assert_eq!(viewer.config(), &config);

    let store = SqliteRecordStore::open(viewer.dataset_path()).unwrap();
    let mut prompt = ScriptedPrompt::new(vec![
        "05:00.000",
        "Search for similar times",
        "Search for similar times",
        "Search for similar times",
        "Exit",
    ]);
    let mut presenter = RecordingPresenter::new();
    let mut session = SearchSession::new(config.clone());

    SessionLoop::new(&store, config)
        .run_with(&mut session, &mut prompt, &mut presenter)
        .unwrap();

    assert_eq!(session.state().window_radius, 120);
    let ranges = search_range_messages(&presenter);
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[1], ranges[2]);
}
