//! Page playback on a virtual clock

use std::time::Duration;

use termynal::player::transcript::visible_rows;
use termynal::sequencer::{ControlKind, Defaults};
use termynal::{source, LoadOptions, Page, PageSettings, SequencerOptions};

use crate::helpers::fixtures_dir;

fn page(settings: PageSettings) -> Page {
    let explicit = SequencerOptions {
        no_init: true,
        ..Default::default()
    };
    let sequencers = source::load(&fixtures_dir().join("demo.html"), &LoadOptions::default())
        .expect("fixture should load")
        .into_iter()
        .map(|source| source.build(&explicit, &Defaults::default()))
        .collect();
    Page::new(sequencers, settings)
}

#[test]
fn terminals_start_when_scrolled_into_view() {
    let mut page = page(PageSettings::default());
    page.set_viewport(5);
    assert!(page.terminals()[0].deadline().is_some());
    assert!(page.terminals()[1].deadline().is_none());
    assert!(!page.is_settled());

    let second = page.box_tops()[1];
    page.scroll_to(second);
    assert!(page.terminals()[1].deadline().is_some());

    page.tick(Duration::from_secs(60));
    assert!(page.is_settled());
    assert_eq!(
        visible_rows(&page.terminals()[1].sequencer),
        vec!["$ ls", "a.txt"]
    );
}

#[test]
fn without_autostart_everything_plays_at_once() {
    let mut page = page(PageSettings {
        autostart: false,
        ..PageSettings::default()
    });
    assert!(page.terminals().iter().all(|t| t.deadline().is_some()));

    page.tick(Duration::from_secs(60));
    assert!(page.is_settled());
    assert!(page.terminals().iter().all(|t| t.sequencer.is_finished()));
}

#[test]
fn fast_forward_then_restart_from_the_page() {
    let mut page = page(PageSettings {
        autostart: false,
        ..PageSettings::default()
    });
    page.tick(Duration::from_millis(1));
    assert!(page.activate(ControlKind::FastForward));

    page.tick(Duration::from_secs(60));
    assert!(page.terminals()[0].sequencer.is_finished());

    assert!(page.activate(ControlKind::Restart));
    assert!(page.terminals()[0].sequencer.is_playing());
    assert_eq!(page.terminals()[0].deadline(), Some(page.now()));
}

#[test]
fn focus_moves_between_terminals() {
    let mut page = page(PageSettings::default());
    page.set_viewport(5);
    page.focus_next();
    assert_eq!(page.focus(), 1);
    assert!(page.scroll() > 0);
    page.focus_next();
    assert_eq!(page.focus(), 0);
    assert_eq!(page.scroll(), 0);
}
