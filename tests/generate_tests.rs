use std::fs;

use tempfile::tempdir;

use autodocker::models::catalog::BaseImageCatalog;
use autodocker::models::image::ImageConfig;
use autodocker::stages::generate::{generate_buildfiles, render_buildfile, write_buildfile};

fn image(base: &str, name: &str, files: Vec<&str>) -> ImageConfig {
    ImageConfig {
        index: 0,
        base_image: base.to_string(),
        image_name: name.to_string(),
        exposed_port: "8000".to_string(),
        run_command: r#"["python3", "app.py"]"#.to_string(),
        selected_files: files.into_iter().map(String::from).collect(),
    }
}

#[test]
fn test_empty_selection_renders_exactly_three_directives() {
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(&image("python:3.9-slim", "app", vec![]), &catalog);

    assert_eq!(artifact.filename, "Dockerfile.app");
    assert_eq!(
        artifact.content,
        "FROM python:3.9-slim\nEXPOSE 8000\nCMD [\"python3\", \"app.py\"]\n"
    );
}

#[test]
fn test_file_with_directory_copies_into_its_directory() {
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(&image("python:3.9-slim", "app", vec!["src/app.py"]), &catalog);

    assert!(
        artifact.content.contains("COPY src/app.py /app/src/\n"),
        "{}",
        artifact.content
    );
}

#[test]
fn test_root_level_file_copies_to_the_destination_root() {
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(&image("python:3.9-slim", "app", vec!["main.py"]), &catalog);

    // No directory join for root-level files.
    assert!(
        artifact.content.contains("COPY main.py /app/\n"),
        "{}",
        artifact.content
    );
    assert!(!artifact.content.contains("/app//"), "{}", artifact.content);
}

#[test]
fn test_unknown_base_image_has_empty_destination_root() {
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(
        &image("mystery:latest", "app", vec!["main.py", "src/app.py"]),
        &catalog,
    );

    assert!(
        artifact.content.contains("COPY main.py \n"),
        "{}",
        artifact.content
    );
    assert!(
        artifact.content.contains("COPY src/app.py src/\n"),
        "{}",
        artifact.content
    );
}

#[test]
fn test_backslash_paths_are_normalized() {
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(
        &image("python:3.9-slim", "app", vec!["src\\nested\\app.py"]),
        &catalog,
    );

    assert!(
        artifact.content.contains("COPY src/nested/app.py /app/src/nested/\n"),
        "{}",
        artifact.content
    );
}

#[test]
fn test_copy_lines_follow_selection_order() {
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(
        &image("node:16-alpine", "app", vec!["z.js", "a/b.js", "m.js"]),
        &catalog,
    );

    let lines: Vec<&str> = artifact.content.lines().collect();
    assert_eq!(lines[0], "FROM node:16-alpine");
    assert_eq!(lines[1], "COPY z.js /usr/src/app/");
    assert_eq!(lines[2], "COPY a/b.js /usr/src/app/a/");
    assert_eq!(lines[3], "COPY m.js /usr/src/app/");
    assert_eq!(lines[4], "EXPOSE 8000");
}

#[test]
fn test_rendering_is_byte_identical_across_runs() {
    let catalog = BaseImageCatalog::default();
    let config = image("ruby:3.1-alpine", "app", vec!["app.rb", "lib/helper.rb"]);

    let first = render_buildfile(&config, &catalog);
    let second = render_buildfile(&config, &catalog);

    assert_eq!(first, second);
}

#[test]
fn test_write_buildfile_writes_under_the_expected_name() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let catalog = BaseImageCatalog::default();
    let artifact = render_buildfile(&image("python:3.9-slim", "app", vec!["main.py"]), &catalog);

    write_buildfile(temp_dir.path(), &artifact).expect("write failed");

    let written = fs::read_to_string(temp_dir.path().join("Dockerfile.app")).expect("read failed");
    assert_eq!(written, artifact.content);
}

#[test]
fn test_generation_failure_does_not_stop_later_images() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let catalog = BaseImageCatalog::default();

    // The middle image's name points into a directory that does not exist,
    // so its write fails while the others succeed.
    let images = vec![
        image("python:3.9-slim", "one", vec![]),
        image("python:3.9-slim", "no/such/dir", vec![]),
        image("python:3.9-slim", "three", vec![]),
    ];

    let pairs = generate_buildfiles(temp_dir.path(), &images, &catalog);

    let names: Vec<&str> = pairs.iter().map(|(i, _)| i.image_name.as_str()).collect();
    assert_eq!(names, vec!["one", "three"]);
    assert!(temp_dir.path().join("Dockerfile.one").exists());
    assert!(temp_dir.path().join("Dockerfile.three").exists());
}
