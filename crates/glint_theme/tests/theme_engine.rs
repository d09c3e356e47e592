use std::sync::Arc;
use std::time::Duration;

use glint_theme::{
    ConfigError, DocumentRoot, FileStore, FixedColorScheme, MemoryStore, Theme, ThemeConfig,
    ThemeEngine, ThemeError, ThemeProvider, ThemeSource, TransitionConfig,
};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

const EPSILON: Duration = Duration::from_millis(1);

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn engine_with(store: &MemoryStore, root: &DocumentRoot, prefers: Option<Theme>) -> ThemeEngine {
    ThemeEngine::new(
        ThemeConfig::default(),
        Box::new(store.clone()),
        &FixedColorScheme(prefers),
        Box::new(root.clone()),
    )
    .unwrap()
}

#[test]
fn stored_theme_is_returned_verbatim() {
    for theme in Theme::ALL {
        let store = MemoryStore::with_entry("theme", theme.as_str());
        let engine = engine_with(&store, &DocumentRoot::new(), Some(theme.toggle()));
        assert_eq!(engine.theme(), theme);
        assert_eq!(engine.initial_resolution().source, ThemeSource::Stored);
    }
}

#[test]
fn invalid_stored_value_is_ignored_and_not_propagated() {
    let store = MemoryStore::with_entry("theme", "blue");
    let root = DocumentRoot::new();
    let engine = engine_with(&store, &root, Some(Theme::Light));

    assert_eq!(engine.theme(), Theme::Light);
    assert_eq!(root.theme().as_deref(), Some("light"));
    // Untouched until a commit overwrites it
    assert_eq!(store.peek("theme").as_deref(), Some("blue"));
    assert_eq!(store.write_count(), 0);
}

#[test]
fn invalid_stored_value_without_os_signal_uses_default() {
    let store = MemoryStore::with_entry("theme", "blue");
    let engine = engine_with(&store, &DocumentRoot::new(), None);
    assert_eq!(engine.theme(), Theme::Dark);
    assert_eq!(engine.initial_resolution().source, ThemeSource::Fallback);
}

#[test]
fn toggle_round_trips() {
    for start in Theme::ALL {
        let store = MemoryStore::with_entry("theme", start.as_str());
        let mut engine = engine_with(&store, &DocumentRoot::new(), None);

        engine.toggle();
        engine.advance(ms(500));
        assert_eq!(engine.theme(), start.toggle());

        engine.toggle();
        engine.advance(ms(500));
        assert_eq!(engine.theme(), start);
    }
}

#[test]
fn committed_theme_unchanged_until_commit_delay() {
    let store = MemoryStore::new();
    let root = DocumentRoot::new();
    let mut engine = engine_with(&store, &root, Some(Theme::Dark));

    engine.toggle();
    engine.advance(ms(200) - EPSILON);

    assert_eq!(engine.theme(), Theme::Dark);
    assert_eq!(engine.state().pending, Theme::Light);
    assert_eq!(root.theme().as_deref(), Some("dark"));
    assert_eq!(store.peek("theme"), None);

    engine.advance(EPSILON);
    assert_eq!(engine.theme(), Theme::Light);
}

#[test]
fn idle_after_settle_delay() {
    let mut engine = engine_with(&MemoryStore::new(), &DocumentRoot::new(), None);

    engine.toggle();
    engine.advance(ms(500) - EPSILON);
    assert!(engine.is_animating());

    engine.advance(EPSILON);
    let state = engine.state();
    assert!(!state.animating);
    assert_eq!(state.pending, state.committed);
    assert_eq!(engine.time_until_next_timer(), None);
}

#[test]
fn root_attribute_tracks_every_completed_toggle() {
    let root = DocumentRoot::new();
    let mut engine = engine_with(&MemoryStore::new(), &root, None);

    for _ in 0..5 {
        engine.toggle();
        engine.advance(ms(500));
        assert_eq!(root.theme().as_deref(), Some(engine.theme().as_str()));
    }
}

#[test]
fn empty_storage_light_os_then_toggle() {
    let store = MemoryStore::new();
    let root = DocumentRoot::new();
    let mut engine = engine_with(&store, &root, Some(Theme::Light));
    assert_eq!(engine.theme(), Theme::Light);

    engine.toggle();
    engine.advance(ms(500));

    assert_eq!(engine.theme(), Theme::Dark);
    assert_eq!(store.peek("theme").as_deref(), Some("dark"));
    assert_eq!(root.theme().as_deref(), Some("dark"));
}

#[test]
fn rapid_double_toggle_commits_once_at_second_timer() {
    let store = MemoryStore::new();
    let root = DocumentRoot::new();
    let provider = ThemeProvider::new(engine_with(&store, &root, Some(Theme::Dark)));
    let ctx = provider.root_scope().use_theme();

    let commits = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&commits);
    provider.on_commit(move |theme| log.lock().push(theme));

    ctx.toggle_theme();
    provider.advance(ms(50));
    ctx.toggle_theme();

    // First toggle's commit time (200ms) passes with nothing committed
    provider.advance(ms(199));
    assert!(commits.lock().is_empty());
    assert_eq!(ctx.theme(), Theme::Dark);

    // Second toggle's commit time: 50 + 200
    provider.advance(EPSILON);
    assert_eq!(*commits.lock(), vec![Theme::Light]);

    provider.advance(ms(1_000));
    assert_eq!(*commits.lock(), vec![Theme::Light]);
    assert_eq!(store.write_count(), 1);
    assert_eq!(root.theme().as_deref(), Some("light"));
    assert!(!provider.with_engine(|engine| engine.is_animating()));
}

#[test]
fn teardown_mid_transition_commits_nothing() {
    let store = MemoryStore::new();
    let root = DocumentRoot::new();
    let provider = ThemeProvider::new(engine_with(&store, &root, Some(Theme::Dark)));
    let ctx = provider.root_scope().use_theme();

    ctx.toggle_theme();
    provider.advance(ms(100));
    drop(provider);
    drop(ctx);

    assert_eq!(store.peek("theme"), None);
    assert_eq!(root.theme().as_deref(), Some("dark"));
}

#[test]
fn file_store_survives_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let root = DocumentRoot::new();
    let mut first = ThemeEngine::new(
        ThemeConfig::default(),
        Box::new(FileStore::new(&path)),
        &FixedColorScheme::prefers(Theme::Dark),
        Box::new(root.clone()),
    )
    .unwrap();
    first.toggle();
    first.advance(ms(500));
    drop(first);

    let second = ThemeEngine::new(
        ThemeConfig::default(),
        Box::new(FileStore::new(&path)),
        &FixedColorScheme::prefers(Theme::Dark),
        Box::new(DocumentRoot::new()),
    )
    .unwrap();
    assert_eq!(second.theme(), Theme::Light);
    assert_eq!(second.initial_resolution().source, ThemeSource::Stored);
}

#[test]
fn corrupt_file_store_falls_back_then_heals_on_commit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();

    let root = DocumentRoot::new();
    let mut engine = ThemeEngine::new(
        ThemeConfig::default(),
        Box::new(FileStore::new(&path)),
        &FixedColorScheme::prefers(Theme::Light),
        Box::new(root.clone()),
    )
    .unwrap();
    assert_eq!(engine.theme(), Theme::Light);

    engine.toggle();
    engine.advance(ms(500));
    assert_eq!(engine.theme(), Theme::Dark);
    assert_eq!(root.theme().as_deref(), Some("dark"));
    drop(engine);

    let next = ThemeEngine::new(
        ThemeConfig::default(),
        Box::new(FileStore::new(&path)),
        &FixedColorScheme::prefers(Theme::Light),
        Box::new(DocumentRoot::new()),
    )
    .unwrap();
    assert_eq!(next.theme(), Theme::Dark);
    assert_eq!(next.initial_resolution().source, ThemeSource::Stored);
}

#[test]
fn custom_delays_are_honoured() {
    let config = ThemeConfig::from_toml_str(
        "[transition]\ncommit_delay_ms = 40\nsettle_delay_ms = 90\n",
    )
    .unwrap();
    let mut engine = ThemeEngine::new(
        config,
        Box::new(MemoryStore::new()),
        &FixedColorScheme::NONE,
        Box::new(DocumentRoot::new()),
    )
    .unwrap();

    engine.toggle();
    engine.advance(ms(39));
    assert_eq!(engine.theme(), Theme::Dark);
    engine.advance(ms(1));
    assert_eq!(engine.theme(), Theme::Light);
    engine.advance(ms(50));
    assert!(!engine.is_animating());
}

#[test]
fn redraw_hook_reads_committed_theme() {
    let root = DocumentRoot::new();
    let provider = ThemeProvider::new(engine_with(&MemoryStore::new(), &root, Some(Theme::Light)));
    let ctx = provider.root_scope().use_theme();

    let frames = Arc::new(Mutex::new(Vec::new()));
    let redraw = provider.root_scope().child().use_theme();
    let log = Arc::clone(&frames);
    let attribute = root.clone();
    provider.on_commit(move |_| {
        log.lock().push((redraw.theme(), attribute.theme()));
    });

    ctx.toggle_theme();
    provider.advance(ms(500));

    assert_eq!(*frames.lock(), vec![(Theme::Dark, Some("dark".to_string()))]);
}

#[test]
fn inverted_delays_are_rejected_up_front() {
    let store = MemoryStore::new();
    let config = ThemeConfig {
        transition: TransitionConfig {
            commit_delay_ms: 500,
            settle_delay_ms: 200,
        },
        ..ThemeConfig::default()
    };

    let err = ThemeEngine::new(
        config,
        Box::new(store.clone()),
        &FixedColorScheme::prefers(Theme::Light),
        Box::new(DocumentRoot::new()),
    )
    .err()
    .unwrap();

    assert!(matches!(err, ThemeError::Config(ConfigError::DelayOrder { .. })));
    assert!(err.to_string().contains("must be shorter"));
    assert_eq!(store.write_count(), 0);
}
