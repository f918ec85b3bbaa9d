use snapbox::cmd::Command;

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn build_and_clean() {
    let dest = tempfile::tempdir().unwrap();
    let out = dest.path().join("public");

    Command::new(snapbox::cmd::cargo_bin!("ggb-site"))
        .arg("build")
        .arg("--config")
        .arg(fixture("custom").join("_site.yml"))
        .arg("--destination")
        .arg(&out)
        .assert()
        .success();

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("<title>Custom Battles</title>"));
    assert!(index.contains("Introducing: Custom Battles"));
    let not_found = std::fs::read_to_string(out.join("404.html")).unwrap();
    assert!(not_found.contains("<div id=\"content\">\n</div>"));
    assert!(out.join("styles/daleri-mega-v1.2.css").is_file());
    assert!(out.join("styles/normalizer-v8.0.1.css").is_file());

    Command::new(snapbox::cmd::cargo_bin!("ggb-site"))
        .arg("clean")
        .arg("--config")
        .arg(fixture("custom").join("_site.yml"))
        .arg("--destination")
        .arg(&out)
        .assert()
        .success();
    assert!(!out.exists());
}

#[test]
fn build_without_config_uses_defaults() {
    let cwd = tempfile::tempdir().unwrap();

    Command::new(snapbox::cmd::cargo_bin!("ggb-site"))
        .arg("build")
        .current_dir(cwd.path())
        .assert()
        .success();

    let index = std::fs::read_to_string(cwd.path().join("_site/index.html")).unwrap();
    assert!(index.contains("<title>Gas Giant Battles</title>"));
}

#[test]
fn invalid_config_fails() {
    let cwd = tempfile::tempdir().unwrap();
    std::fs::write(cwd.path().join("_site.yml"), "theme: dark\n").unwrap();

    Command::new(snapbox::cmd::cargo_bin!("ggb-site"))
        .arg("build")
        .current_dir(cwd.path())
        .assert()
        .failure();

    assert!(!cwd.path().join("_site").exists());
}
