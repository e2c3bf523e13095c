//! Integration tests for view resolution against a real directory tree.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use twigbridge::filesystem::{LocalFilesystem, MemoryFilesystem};
use twigbridge::finder::ViewFinder;
use twigbridge::TwigBridgeError;

fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();
    path
}

#[test]
fn resolves_dotted_names_on_disk() {
    let temp = TempDir::new().unwrap();
    let views = temp.path().join("views");
    let expected = touch(&views, "emails/welcome.twig");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [&views]);
    finder.add_extension("twig");

    assert_eq!(finder.find("emails.welcome").unwrap(), expected);
}

#[test]
fn resolves_explicit_extension_on_disk() {
    let temp = TempDir::new().unwrap();
    let expected = touch(temp.path(), "directory/flup/someJavascript.js");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [temp.path()]);

    assert_eq!(
        finder.find("directory.flup.someJavascript.js").unwrap(),
        expected
    );
}

#[test]
fn path_priority_beats_extension_priority() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a");
    let second = temp.path().join("b");
    let expected = touch(&first, "page.css");
    touch(&second, "page.twig");

    let mut finder =
        ViewFinder::with_extensions(LocalFilesystem::new(), [&first, &second], ["twig", "css"]);

    assert_eq!(finder.find("page").unwrap(), expected);
}

#[test]
fn cache_outlives_deleted_file_until_flush() {
    let temp = TempDir::new().unwrap();
    let file = touch(temp.path(), "home.php");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [temp.path()]);
    assert_eq!(finder.find("home").unwrap(), file);

    fs::remove_file(&file).unwrap();
    assert_eq!(finder.find("home").unwrap(), file);

    finder.flush();
    assert!(finder.find("home").unwrap_err().is_not_found());
}

#[test]
fn namespaces_resolve_in_both_syntaxes() {
    let temp = TempDir::new().unwrap();
    let admin = temp.path().join("admin");
    let expected = touch(&admin, "dashboard.php");
    touch(temp.path(), "views/dashboard.php");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [temp.path().join("views")]);
    finder.add_namespace("admin", admin.as_path());

    assert_eq!(finder.find("admin::dashboard").unwrap(), expected);
    assert_eq!(finder.find("@admin/dashboard").unwrap(), expected);
}

#[test]
fn resolution_errors_are_distinct() {
    let mut finder = ViewFinder::new(MemoryFilesystem::new(), ["/views"]);
    finder.add_namespace("bad", "/bad");

    assert!(matches!(
        finder.find("missing::thing"),
        Err(TwigBridgeError::UnknownNamespace { .. })
    ));
    assert!(matches!(
        finder.find("bad::a::b"),
        Err(TwigBridgeError::InvalidName { .. })
    ));
    assert!(matches!(
        finder.find("@bad"),
        Err(TwigBridgeError::InvalidName { .. })
    ));
    assert!(matches!(
        finder.find("nosuch"),
        Err(TwigBridgeError::ViewNotFound { .. })
    ));
}

#[test]
fn cache_hit_performs_no_filesystem_checks() {
    let fs = MemoryFilesystem::new().with_file("/views/a/b.php", "");
    let mut finder = ViewFinder::new(fs, ["/views"]);

    let resolved = finder.find("a.b").unwrap();
    finder.filesystem().forbid_checks();

    for _ in 0..3 {
        assert_eq!(finder.find("a.b").unwrap(), resolved);
    }

    finder.filesystem().allow_checks();
    finder.filesystem().clear_checks();
    finder.flush();
    finder.find("a.b").unwrap();
    assert!(finder.filesystem().check_count() > 0);
}

#[test]
fn add_extension_keeps_length_and_moves_to_front() {
    let mut finder = ViewFinder::new(MemoryFilesystem::new(), ["/views"]);
    finder.add_extension("foo");
    let before = finder.extensions().len();

    finder.add_extension("css");
    finder.add_extension("foo");

    assert_eq!(finder.extensions().len(), before);
    assert_eq!(finder.extensions()[0], "foo");
}

#[test]
fn absolute_name_does_not_escape_search_paths() {
    let temp = TempDir::new().unwrap();
    let views = temp.path().join("views");
    fs::create_dir_all(&views).unwrap();
    let secret = touch(temp.path(), "secret");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [&views]);
    finder.add_namespace("admin", views.join("admin"));

    let plain = secret.to_str().unwrap().to_string();
    let namespaced = format!("admin::{}", plain);
    for name in [plain.as_str(), namespaced.as_str()] {
        let err = finder.find(name).unwrap_err();
        assert!(err.is_not_found(), "{} resolved outside views", name);
    }
}

#[test]
fn absolute_name_resolves_inside_search_path() {
    let temp = TempDir::new().unwrap();
    let views = temp.path().join("views");
    let expected = touch(&views, "etc/passwd.twig");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [&views]);
    finder.add_extension("twig");

    assert_eq!(finder.find("/etc/passwd").unwrap(), expected);
}

#[test]
fn directories_are_not_views() {
    let temp = TempDir::new().unwrap();
    let views = temp.path().join("views");
    touch(&views, "admin/dashboard.php");

    let mut finder = ViewFinder::new(LocalFilesystem::new(), [&views]);
    finder.add_namespace("admin", views.join("admin"));

    for name in ["admin", ".", "admin::"] {
        let err = finder.find(name).unwrap_err();
        assert!(err.is_not_found(), "{} resolved to a directory", name);
    }
    assert_eq!(
        finder.find("admin::dashboard").unwrap(),
        views.join("admin/dashboard.php")
    );
}
