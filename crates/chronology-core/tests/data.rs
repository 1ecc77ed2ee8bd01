// File: crates/chronology-core/tests/data.rs
// Purpose: YAML series and CSV event loading, validation errors, directory order.

use std::path::{Path, PathBuf};

use chronology_core::{load_data, load_dir, load_file, ChartError, Event, YearSpec};

fn ev(name: Option<&str>, written: i64, set: i64) -> Event {
    Event::new(name.map(str::to_string), written, set)
}

fn fixture(dir: &str, name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/data").join(dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn repo_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

#[test]
fn yaml_series_with_scalar_and_range_years() {
    let path = fixture(
        "yaml",
        "series.yml",
        "- publication: Saga\n  author: Someone\n  series:\n    - name: One\n      written_in: 1990\n      set_in: 2100\n    - written_in: [2000, 2004]\n      set_in: [1500, 1600]\n",
    );
    let pubs = load_file(&path).expect("load yaml");
    assert_eq!(pubs.len(), 1);
    let p = &pubs[0];
    assert_eq!(p.name, "Saga");
    assert_eq!(p.author.as_deref(), Some("Someone"));
    assert_eq!(p.series[0], ev(Some("One"), 1990, 2100));
    assert_eq!(p.series[1].written_in, YearSpec::Range(2000, 2004));
    assert!(p.series[1].written_in.is_range() && !p.series[0].written_in.is_range());
    assert_eq!(p.series[1].written_in_average(), 2002.0);
    assert_eq!(p.series[1].set_in_average(), 1550.0);
    assert_eq!(p.series[1].set_in.span(), 100.0);
    assert!(p.series[1].name.is_none());
}

#[test]
fn csv_rows_become_single_event_publications() {
    let path = fixture(
        "csv",
        "events.csv",
        "publication,author,written_in,set_in\nDune,Frank Herbert,1965,10191\nBlade Runner,,1982,2019\n",
    );
    let pubs = load_file(&path).expect("load csv");
    assert_eq!(pubs.len(), 2);
    assert_eq!(pubs[0].name, "Dune");
    assert_eq!(pubs[0].series, vec![ev(None, 1965, 10191)]);
    assert_eq!(pubs[1].author, None);
}

#[test]
fn unknown_suffix_is_rejected_before_reading() {
    let err = load_file(Path::new("target/test_out/data/does_not_exist.json")).unwrap_err();
    assert!(matches!(err, ChartError::MalformedInput { .. }), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_file(Path::new("target/test_out/data/does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, ChartError::Io(_)), "{err}");
}

#[test]
fn malformed_year_lists_are_rejected() {
    let backwards = fixture(
        "bad",
        "backwards.yaml",
        "- publication: Backwards\n  series:\n    - written_in: 1900\n      set_in: [1850, 1800]\n",
    );
    match load_file(&backwards) {
        Err(ChartError::MalformedInput { path, reason }) => {
            assert_eq!(path, backwards);
            assert!(reason.contains("Backwards"), "{reason}");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }

    let triple = fixture(
        "bad",
        "triple.yaml",
        "- publication: Triple\n  series:\n    - written_in: [1, 2, 3]\n      set_in: 5\n",
    );
    assert!(matches!(load_file(&triple), Err(ChartError::MalformedInput { .. })));
}

#[test]
fn empty_series_is_rejected() {
    let path = fixture("empty", "empty.yaml", "- publication: Nothing\n  series: []\n");
    assert!(matches!(load_file(&path), Err(ChartError::MalformedInput { .. })));
}

#[test]
fn invalid_yaml_surfaces_the_parser_error() {
    let path = fixture("syntax", "broken.yaml", "- publication: [unclosed\n");
    assert!(matches!(load_file(&path), Err(ChartError::Yaml(_))));
}

#[test]
fn load_data_concatenates_in_argument_order() {
    let a = fixture("order", "b.csv", "publication,author,written_in,set_in\nFirst,,1900,1950\n");
    let b = fixture("order", "a.yaml", "- publication: Second\n  series:\n    - written_in: 1800\n      set_in: 1700\n");
    let names: Vec<String> = load_data([&a, &b]).expect("load").into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[test]
fn bundled_data_directory_loads_in_sorted_order() {
    let pubs = load_dir(&repo_data_dir()).expect("load data dir");
    assert_eq!(pubs.len(), 12);
    // events.csv sorts before series.yaml
    assert_eq!(pubs[0].name, "Nineteen Eighty-Four");
    assert_eq!(pubs[11].name, "Notre-Dame de Paris");

    let war = pubs.iter().find(|p| p.name == "War and Peace").expect("present");
    assert_eq!(war.series[0].written_in, YearSpec::Range(1865, 1869));
    let mohicans = pubs.iter().find(|p| p.name.starts_with("The Last of the Mohicans")).expect("present");
    assert_eq!(mohicans.series[0].set_in, YearSpec::Scalar(1757));
}
