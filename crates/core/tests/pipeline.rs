use respath_api::{
    Candidate, Candidates, Component, Hints, Locator, PrioritizedComponents, ResourcePath, Result,
    SelectStrategy, Tracer, Url,
};
use respath_core::locator::{CombinedLocator, SyntheticLocator, SyntheticSpec};
use respath_core::selector::{
    CombinedSelector, FirstServletLibraryResourceSelector, HighestComponentPrioritySelector,
    NoOpSelector,
};
use respath_core::{ResolverBuilder, ResolverConfig, ResourceResolver, Selector};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn path(p: &str) -> ResourcePath {
    ResourcePath::of_path(p).unwrap()
}

fn synthetic(prefix: &str, p: &str) -> Arc<dyn Locator> {
    Arc::new(SyntheticLocator::new(vec![
        SyntheticSpec::new(prefix, path(p)).unwrap(),
    ]))
}

fn candidates(urls: &[&str]) -> Vec<Candidate> {
    urls.iter().map(|u| Candidate::parse(u).unwrap()).collect()
}

fn texts(candidates: &[Candidate]) -> Vec<String> {
    candidates.iter().map(|c| c.to_string()).collect()
}

/// Never has an opinion; counts how often it was asked.
#[derive(Default)]
struct Spy {
    calls: AtomicUsize,
}

impl SelectStrategy for Spy {
    fn name(&self) -> &str {
        "spy"
    }

    fn do_select(&self, _: &[Candidate], _: &Hints, _: &Tracer) -> Vec<Candidate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }
}

struct Undecided;

impl SelectStrategy for Undecided {
    fn name(&self) -> &str {
        "undecided"
    }

    fn do_select(&self, _: &[Candidate], _: &Hints, _: &Tracer) -> Vec<Candidate> {
        Vec::new()
    }
}

#[test]
fn test_combined_locator_keeps_child_order() {
    let resolver = ResourceResolver::new(
        Arc::new(CombinedLocator::new(vec![
            synthetic("a:", "foo"),
            synthetic("b:", "foo"),
        ])),
        Selector::new(NoOpSelector),
    );

    let located = resolver
        .locate(&path("foo"), &Hints::empty(), &Tracer::disabled())
        .unwrap();
    assert_eq!(texts(&located), vec!["a:foo", "b:foo"]);

    let absent = resolver
        .locate(&path("bar"), &Hints::empty(), &Tracer::disabled())
        .unwrap();
    assert!(absent.is_empty());
}

#[test]
fn test_undecided_selection_restores_input() {
    let selector = Selector::new(Undecided);
    for size in [2usize, 5] {
        let urls: Vec<String> = (0..size).map(|i| format!("test:r{}", i)).collect();
        let refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        let input = candidates(&refs);

        let selected = selector.select(&input, &Hints::empty(), &Tracer::disabled());
        assert_eq!(selected, input);
    }
}

#[test]
fn test_highest_priority_component_wins() {
    let components = PrioritizedComponents::new(vec![
        Component::new("low", Url::parse("file:///a.jar").unwrap(), 10),
        Component::new("high", Url::parse("file:///b.jar").unwrap(), 20),
    ]);
    let hints = Hints::builder().components(components).build();
    let input = candidates(&["jar:file:///a.jar!/foo", "jar:file:///b.jar!/foo"]);

    let selector = Selector::new(HighestComponentPrioritySelector::new());
    let selected = selector.select(&input, &hints, &Tracer::disabled());
    assert_eq!(texts(&selected), vec!["jar:file:///b.jar!/foo"]);

    let tied = PrioritizedComponents::new(vec![
        Component::new("low", Url::parse("file:///a.jar").unwrap(), 10),
        Component::new("one", Url::parse("file:///b.jar").unwrap(), 20),
        Component::new("two", Url::parse("file:///c.jar").unwrap(), 20),
    ]);
    let hints = Hints::builder().components(tied).build();
    let input = candidates(&[
        "jar:file:///a.jar!/foo",
        "jar:file:///b.jar!/foo",
        "jar:file:///c.jar!/foo",
    ]);
    let selected = selector.select(&input, &hints, &Tracer::disabled());
    assert_eq!(
        texts(&selected),
        vec!["jar:file:///b.jar!/foo", "jar:file:///c.jar!/foo"]
    );
}

#[test]
fn test_servlet_library_match_is_exact() {
    let selector = Selector::new(FirstServletLibraryResourceSelector::with_libraries([
        "library.jar",
    ]));
    let input = candidates(&[
        "jar:file:/tomcat/webapps/ROOT/WEB-INF/lib/libraryX.jar!/foo",
        "jar:file:/tomcat/webapps/ROOT/WEB-INF/lib/library.jar!/foo",
    ]);

    let selected = selector.select(&input, &Hints::empty(), &Tracer::disabled());
    assert_eq!(
        texts(&selected),
        vec!["jar:file:/tomcat/webapps/ROOT/WEB-INF/lib/library.jar!/foo"]
    );
}

#[test]
fn test_combined_selector_stops_once_decided() {
    let spy = Arc::new(Spy::default());
    let combined = CombinedSelector::new(vec![
        Selector::new(FirstServletLibraryResourceSelector::with_libraries(["a.jar"])),
        Selector::from_arc(spy.clone()),
    ]);
    let input = candidates(&[
        "jar:file:/app/WEB-INF/lib/b.jar!/foo",
        "jar:file:/app/WEB-INF/lib/a.jar!/foo",
    ]);

    let selected = Selector::new(combined).select(&input, &Hints::empty(), &Tracer::disabled());
    assert_eq!(texts(&selected), vec!["jar:file:/app/WEB-INF/lib/a.jar!/foo"]);
    assert_eq!(spy.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_small_outputs_are_idempotent() {
    let selector = Selector::new(CombinedSelector::new(vec![
        Selector::new(HighestComponentPrioritySelector::new()),
        Selector::new(FirstServletLibraryResourceSelector::with_libraries(["a.jar"])),
    ]));

    for input in [
        Vec::new(),
        candidates(&["jar:file:/app/WEB-INF/lib/a.jar!/foo"]),
        candidates(&["file:/elsewhere/foo"]),
    ] {
        let once = selector.select(&input, &Hints::empty(), &Tracer::disabled());
        assert!(once.len() <= 1);
        let twice = selector.select(&once, &Hints::empty(), &Tracer::disabled());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_synthetic_round_trip() {
    let resolver = ResourceResolver::new(synthetic("test:", "foo"), Selector::new(NoOpSelector));
    let resolved = resolver.resolve(&path("foo"), &Hints::empty()).unwrap().unwrap();
    assert_eq!(resolved.as_str(), "test:foo");
    assert_eq!(
        resolver.reverse(resolved.url(), &Hints::empty()),
        Some(path("foo"))
    );
}

#[test]
fn test_failing_child_aborts_locate() {
    struct Broken;

    impl Locator for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn locate(&self, path: &ResourcePath, _: &Hints, _: &Tracer) -> Result<Candidates> {
            Err(respath_api::ResolveError::lookup(
                path,
                "broken",
                std::io::Error::other("unreadable"),
            ))
        }
    }

    let resolver = ResourceResolver::new(
        Arc::new(CombinedLocator::new(vec![
            synthetic("a:", "foo"),
            Arc::new(Broken),
        ])),
        Selector::new(NoOpSelector),
    );
    let err = resolver.resolve_all(&path("foo"), &Hints::empty()).unwrap_err();
    assert!(err.is_lookup());
}

#[test]
fn test_configured_pipeline_resolves() {
    let config = ResolverConfig::from_json_str(
        r#"{
            "locator": { "type": "combined", "children": [
                { "type": "synthetic", "specs": [{ "prefix": "a:", "path": "foo" }] },
                { "type": "synthetic", "specs": [{ "prefix": "jar:file:/app/WEB-INF/lib/lib.jar!/", "path": "foo" }] }
            ]},
            "selector": { "type": "first_servlet_library", "libraries": ["lib.jar"] }
        }"#,
    )
    .unwrap();
    let resolver = ResolverBuilder::new(config).build().unwrap();

    let (result, tracer) = resolver.resolve_traced(&path("foo"), &Hints::empty());
    assert_eq!(
        texts(&result.unwrap()),
        vec!["jar:file:/app/WEB-INF/lib/lib.jar!/foo"]
    );
    let rendered = tracer.render();
    assert!(rendered.contains("first-servlet-library"));
    assert!(rendered.contains("kept 1 of 2"));
}
