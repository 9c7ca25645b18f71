//! Documents loaded from disk and played headlessly

use termynal::sequencer::{Defaults, Sequencer};
use termynal::{render_document, source, LoadOptions, RenderOptions, SequencerOptions};

use crate::helpers::{fixtures_dir, temp_document};

fn load(name: &str, load: &LoadOptions) -> Vec<Sequencer> {
    let explicit = SequencerOptions {
        no_init: true,
        ..Default::default()
    };
    source::load(&fixtures_dir().join(name), load)
        .expect("fixture should load")
        .into_iter()
        .map(|source| source.build(&explicit, &Defaults::default()))
        .collect()
}

#[test]
fn html_document_renders_every_terminal() {
    let mut seqs = load("demo.html", &LoadOptions::default());
    assert_eq!(seqs.len(), 2);

    let out = render_document(&mut seqs, RenderOptions::default());
    assert_eq!(
        out,
        "# terminal 1/2\n\
         $ pip install termynal\n\
         ##### 100%\n\
         Successfully installed termynal\n\
         \n\
         # terminal 2/2\n\
         $ ls\n\
         a.txt\n"
    );
}

#[test]
fn container_attributes_reach_the_resolved_config() {
    let seqs = load("demo.html", &LoadOptions::default());
    let config = seqs[0].config();
    assert_eq!(config.start_delay, 100.0);
    assert_eq!(config.type_delay, 10.0);
    assert_eq!(config.line_delay, 50.0);
    assert_eq!(seqs[1].config().start_delay, 0.0);
    assert_eq!(seqs[1].lines()[1].spec.class.as_deref(), Some("ok"));
}

#[test]
fn selector_picks_other_containers() {
    let load_options = LoadOptions {
        selector: ".other".to_string(),
        ..LoadOptions::default()
    };
    let mut seqs = load("demo.html", &load_options);
    let out = render_document(&mut seqs, RenderOptions::default());
    assert_eq!(out, "$ not a terminal\n");
}

#[test]
fn toml_script_timeline_uses_script_options() {
    let mut seqs = load("demo.toml", &LoadOptions::default());
    let out = render_document(
        &mut seqs,
        RenderOptions {
            timeline: true,
            fast: false,
        },
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.first(), Some(&"    0.100s   1  $ ▋"));
    assert_eq!(lines.last(), Some(&"    0.260s   2  Finished"));
}

#[test]
fn json_script_fast_forward_takes_no_time() {
    let mut seqs = load("demo.json", &LoadOptions::default());
    let out = render_document(
        &mut seqs,
        RenderOptions {
            timeline: true,
            fast: true,
        },
    );
    assert!(!out.is_empty());
    assert!(out.lines().all(|line| line.starts_with("    0.000s")));
    assert!(out.ends_with("hi\n"));
}

#[test]
fn custom_prefix_reads_renamed_attributes() {
    let html = r#"<div class="termynal" data-demo-startDelay="0">
        <span data-demo="input" data-demo-prompt=">">whoami</span>
        <span data-demo>root</span>
    </div>"#;
    let (_dir, path) = temp_document("prefix.html", html);
    let load_options = LoadOptions {
        prefix: "demo".to_string(),
        ..LoadOptions::default()
    };
    let explicit = SequencerOptions {
        prefix: Some("demo".to_string()),
        no_init: true,
        ..Default::default()
    };
    let mut seqs: Vec<Sequencer> = source::load(&path, &load_options)
        .unwrap()
        .into_iter()
        .map(|source| source.build(&explicit, &Defaults::default()))
        .collect();
    let out = render_document(&mut seqs, RenderOptions::default());
    assert!(out.ends_with("whoami\nroot\n"), "got {:?}", out);
}

#[test]
fn document_without_terminals_is_rejected() {
    let (_dir, path) = temp_document("empty.html", "<p>nothing here</p>");
    assert!(source::load(&path, &LoadOptions::default()).is_err());
}

#[test]
fn oversized_progress_length_degrades_to_default() {
    let html = r#"<div class="termynal">
        <span data-ty="progress" data-ty-progressLength="1e19" data-ty-progressChar="="></span>
    </div>"#;
    let (_dir, path) = temp_document("huge.html", html);
    let explicit = SequencerOptions {
        progress_length: Some(usize::MAX),
        no_init: true,
        ..Default::default()
    };
    let mut seqs: Vec<Sequencer> = source::load(&path, &LoadOptions::default())
        .unwrap()
        .into_iter()
        .map(|source| source.build(&explicit, &Defaults::default()))
        .collect();
    let out = render_document(
        &mut seqs,
        RenderOptions {
            fast: true,
            timeline: false,
        },
    );
    assert_eq!(out, format!("{} 100%\n", "=".repeat(40)));
}
