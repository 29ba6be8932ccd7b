use respath_api::{Component, Hints, PrioritizedComponents, ResourcePath, Url};
use respath_archive::{ArchiveClassLoader, DirectoryWebContext};
use respath_core::{ResolverBuilder, ResolverConfig};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::{TempDir, tempdir};

fn create_jar(path: &Path, entries: &[&str]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for entry in entries {
        zip.start_file(*entry, options).unwrap();
        zip.write_all(b"<config/>").unwrap();
    }
    zip.finish().unwrap();
}

/// An exploded web application with two libraries both carrying `conf/app.xml`.
fn webapp() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("WEB-INF/classes")).unwrap();
    std::fs::create_dir_all(root.join("WEB-INF/lib")).unwrap();
    std::fs::create_dir_all(root.join("css")).unwrap();
    std::fs::write(root.join("WEB-INF/classes/local.properties"), "x").unwrap();
    std::fs::write(root.join("css/site.css"), "body {}").unwrap();
    create_jar(&root.join("WEB-INF/lib/alpha.jar"), &["conf/app.xml"]);
    create_jar(
        &root.join("WEB-INF/lib/library.jar"),
        &["conf/app.xml", "META-INF/resources/js/app.js"],
    );
    dir
}

fn hints(root: &Path, libraries: &[&str]) -> Hints {
    let loader = ArchiveClassLoader::new("webapp")
        .add_directory(root.join("WEB-INF/classes"))
        .add_library_dir(&root.join("WEB-INF/lib"));
    let context = DirectoryWebContext::new(root).with_libraries(libraries.iter().copied());

    Hints::builder()
        .class_loader(Arc::new(loader))
        .web_context(Arc::new(context))
        .build()
}

#[test]
fn test_library_order_decides_between_archives() {
    let dir = webapp();
    let resolver = ResolverBuilder::default().build().unwrap();
    let hints = hints(dir.path(), &["library.jar", "alpha.jar"]);
    let path = ResourcePath::of_path("conf/app.xml").unwrap();

    let located = resolver
        .locate(&path, &hints, &respath_api::Tracer::disabled())
        .unwrap();
    assert_eq!(located.len(), 2);

    let resolved = resolver.resolve(&path, &hints).unwrap().unwrap();
    assert!(resolved.as_str().starts_with("jar:file:"));
    assert!(
        resolved
            .as_str()
            .ends_with("/WEB-INF/lib/library.jar!/conf/app.xml")
    );
    assert_eq!(resolver.reverse(resolved.url(), &hints), Some(path));
}

#[test]
fn test_component_priority_beats_library_order() {
    let dir = webapp();
    let resolver = ResolverBuilder::default().build().unwrap();
    let alpha = Url::from_file_path(dir.path().join("WEB-INF/lib/alpha.jar")).unwrap();
    let library = Url::from_file_path(dir.path().join("WEB-INF/lib/library.jar")).unwrap();

    let base = hints(dir.path(), &["library.jar", "alpha.jar"]);
    let hints = Hints::builder()
        .class_loader(base.class_loader().unwrap().clone())
        .web_context(base.web_context().unwrap().clone())
        .components(PrioritizedComponents::new(vec![
            Component::new("library", library, 10),
            Component::new("alpha", alpha, 20),
        ]))
        .build();

    let path = ResourcePath::of_path("conf/app.xml").unwrap();
    let resolved = resolver.resolve_all(&path, &hints).unwrap();
    assert_eq!(resolved.len(), 1);
    assert!(resolved[0].as_str().ends_with("/alpha.jar!/conf/app.xml"));
}

#[test]
fn test_classes_directory_and_web_root() {
    let dir = webapp();
    let resolver = ResolverBuilder::default().build().unwrap();
    let hints = hints(dir.path(), &[]);

    // served both by the classes directory and the class loader
    let local = ResourcePath::of_path("local.properties").unwrap();
    let located = resolver
        .locate(&local, &hints, &respath_api::Tracer::disabled())
        .unwrap();
    assert_eq!(located.len(), 2);
    assert_eq!(located[0], located[1]);

    let css = ResourcePath::of_web_path("css/site.css").unwrap();
    let resolved = resolver.resolve(&css, &hints).unwrap().unwrap();
    assert!(resolved.as_str().ends_with("/css/site.css"));
    assert_eq!(resolver.reverse(resolved.url(), &hints), Some(css));

    // web resources packaged in a library are found through the class loader
    let js = ResourcePath::of_web_path("js/app.js").unwrap();
    let resolved = resolver.resolve(&js, &hints).unwrap().unwrap();
    assert!(
        resolved
            .as_str()
            .ends_with("/library.jar!/META-INF/resources/js/app.js")
    );
    assert_eq!(resolver.reverse(resolved.url(), &hints), Some(js));
}

#[test]
fn test_classes_directory_reverses_to_plain_path() {
    let dir = webapp();
    let resolver = ResolverBuilder::default().build().unwrap();
    let hints = hints(dir.path(), &[]);
    let local = ResourcePath::of_path("local.properties").unwrap();

    let resolved = resolver.resolve(&local, &hints).unwrap().unwrap();
    assert!(
        resolved
            .as_str()
            .ends_with("/WEB-INF/classes/local.properties")
    );
    assert_eq!(resolver.reverse(resolved.url(), &hints), Some(local));
}

#[test]
fn test_configuration_file_on_disk() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("resolver.json");
    std::fs::write(
        &config_path,
        r#"{ "locator": { "type": "class_loader" }, "selector": { "type": "no_op" } }"#,
    )
    .unwrap();

    let app = webapp();
    let resolver = ResolverBuilder::new(ResolverConfig::from_file(&config_path).unwrap())
        .build()
        .unwrap();
    let path = ResourcePath::of_path("conf/app.xml").unwrap();
    let resolved = resolver
        .resolve_all(&path, &hints(app.path(), &[]))
        .unwrap();
    assert_eq!(resolved.len(), 2);
}
