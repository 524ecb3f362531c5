//! Behavioural parity with rsync's documented pattern-matching rules.
//!
//! The corpus below pairs rule lines with candidate paths and the decision
//! rsync's FILTER RULES section documents for them. Directory-only rules are
//! additionally exercised against a real tree so the ancestor walk and the
//! symlink probe run for real.

use std::fs;
use std::path::Path;

use rsync_patterns::{Pattern, PatternList};

fn pattern(rule: &str) -> Pattern {
    Pattern::compile(rule).expect("corpus rule compiles")
}

#[test]
fn corpus_matches_documented_rsync_semantics() {
    let root = tempfile::tempdir().expect("tempdir");
    let root = root.path();

    let cases: &[(&str, &str, bool)] = &[
        // Tail matching: unanchored single-segment rules match the final
        // path segment at any depth.
        ("*.java", "Main.java", true),
        ("*.java", "src/main/Main.java", true),
        ("*.java", "src/Main.class", false),
        ("*.o", "a/b/c.o", true),
        ("?at", "cat", true),
        ("?at", "at", false),
        ("foo", "foo", true),
        ("foo", "deep/foo", true),
        ("foo", "foobar", false),
        ("foo", "xfoo", false),
        ("foo", "deep/xfoo", false),
        // Anchoring: a leading slash pins the rule to the transfer root,
        // but descendants of the named prefix still match.
        ("/foo", "foo", true),
        ("/foo", "foo/bar", true),
        ("/foo", "a/foo", false),
        // Full-path mode for multi-segment rules.
        ("foo/bar", "foo/bar", true),
        ("foo/bar", "x/foo/bar", true),
        ("foo/bar", "foo/baz", false),
        ("src/**/*.class", "src/a/b/C.class", true),
        ("src/**/*.class", "src/C.java", false),
        // Double-star crosses directory boundaries.
        ("**/tmp", "deep/a/tmp", true),
        ("a**z", "a/b/z", true),
        ("a*z", "a/b/z", false),
        // Character classes, bare and POSIX.
        ("file[abc].txt", "filea.txt", true),
        ("file[abc].txt", "filed.txt", false),
        ("[0-9]*.log", "7x.log", true),
        ("[0-9]*.log", "x7.log", false),
        ("[[:digit:]][[:alpha:]]", "7q", true),
        ("[[:digit:]][[:alpha:]]", "q7", false),
        // Escapes: wildcards elsewhere in the rule make '\' an escape.
        (r"\*.txt", "*.txt", true),
        (r"\*.txt", "a.txt", false),
        // The exclusion marker is part of the rule syntax, not the pattern.
        ("- *.bak", "save.bak", true),
        // Directory-only rules match the directory itself and everything
        // beneath it (here the paths do not exist, so the probe falls
        // through to a match).
        ("build/", "build", true),
        ("build/", "build/out.txt", true),
        ("build/", "a/build/out.txt", true),
        ("build/", "builds", false),
        ("logs/", "logs/app/today.log", true),
    ];

    for &(rule, path, expected) in cases {
        let compiled = pattern(rule);
        let actual = compiled
            .matches(root, Path::new(path))
            .expect("match succeeds");
        assert_eq!(
            actual, expected,
            "rule '{rule}' against '{path}' (compiled to '{compiled}')"
        );
    }
}

#[test]
fn directory_rule_covers_a_real_tree() {
    let root = tempfile::tempdir().expect("tempdir");
    let root = root.path();
    fs::create_dir_all(root.join("build/classes")).expect("mkdir");
    fs::write(root.join("build/out.txt"), b"artifact").expect("write");
    fs::write(root.join("notes.txt"), b"keep").expect("write");

    let compiled = pattern("build/");
    assert!(compiled.matches(root, Path::new("build")).unwrap());
    assert!(compiled.matches(root, Path::new("build/out.txt")).unwrap());
    assert!(
        compiled
            .matches(root, Path::new("build/classes"))
            .unwrap()
    );
    assert!(!compiled.matches(root, Path::new("notes.txt")).unwrap());
}

#[cfg(unix)]
#[test]
fn directory_rule_rejects_a_symlinked_directory() {
    let root = tempfile::tempdir().expect("tempdir");
    let root = root.path();
    fs::create_dir(root.join("real")).expect("mkdir");
    std::os::unix::fs::symlink(root.join("real"), root.join("build")).expect("symlink");

    let compiled = pattern("build/");
    // The literal name matches, but the entry is a symlink pointing at a
    // directory, so the rule must not select it.
    assert!(!compiled.matches(root, Path::new("build")).unwrap());
    // With a matching real ancestor the symlink probe never runs.
    fs::create_dir_all(root.join("real/build/sub")).expect("mkdir");
    assert!(
        compiled
            .matches(root, Path::new("real/build/sub"))
            .unwrap()
    );
}

#[test]
fn directory_rule_matches_nonexistent_targets() {
    let root = tempfile::tempdir().expect("tempdir");
    let compiled = pattern("ghost/");
    // Nothing exists on disk; the existence probe cannot run and the match
    // stands.
    assert!(compiled.matches(root.path(), Path::new("ghost")).unwrap());
}

#[test]
fn candidates_outside_the_root_step_up_instead_of_going_absolute() {
    let base = tempfile::tempdir().expect("tempdir");
    let root = base.path().join("a/b");
    fs::create_dir_all(&root).expect("mkdir");
    let outside = base.path().join("stray.txt");

    // The candidate resolves above the transfer root, so it is rendered with
    // `..` steps. A rule spelling out the enclosing directory's real name
    // must therefore not see it.
    let leaf = base
        .path()
        .file_name()
        .expect("tempdir has a name")
        .to_string_lossy();
    let by_parent_name = pattern(&format!("{leaf}/**"));
    assert!(!by_parent_name.matches(&root, &outside).unwrap());

    // The final segment stays reachable through the usual tail form.
    assert!(pattern("stray.txt").matches(&root, &outside).unwrap());
}

#[test]
fn exclude_list_applies_all_rules() {
    let root = tempfile::tempdir().expect("tempdir");
    let root = root.path();

    let list = PatternList::from_lines([
        "# generated artefacts",
        "*.o",
        "build/",
        "/secrets.txt",
    ])
    .expect("list compiles");

    assert!(list.is_excluded(root, Path::new("src/main.o")).unwrap());
    assert!(list.is_excluded(root, Path::new("build/report")).unwrap());
    assert!(list.is_excluded(root, Path::new("secrets.txt")).unwrap());
    assert!(!list.is_excluded(root, Path::new("src/main.c")).unwrap());
    assert!(!list.is_excluded(root, Path::new("a/secrets.txt")).unwrap());
}
