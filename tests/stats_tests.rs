use predicates::str::contains;

mod common;
use common::{init_store, setup_test_store, ttk};

#[test]
fn test_stats_on_seed_data() {
    let store = setup_test_store("stats_seed");
    init_store(&store);

    ttk()
        .args(["--store", &store, "stats"])
        .assert()
        .success()
        .stdout(contains("Total:        8"))
        .stdout(contains("Completion:   38%"));
}

#[test]
fn test_stats_after_complete_all() {
    let store = setup_test_store("stats_all_done");
    init_store(&store);

    ttk()
        .args(["--store", &store, "status", "completed", "--all"])
        .assert()
        .success()
        .stdout(contains("applied to all 8 technologies"));

    ttk()
        .args(["--store", &store, "stats"])
        .assert()
        .success()
        .stdout(contains("Completion:   100%"))
        .stdout(contains("Great progress"));
}

#[test]
fn test_stats_after_reset_all() {
    let store = setup_test_store("stats_reset");
    init_store(&store);

    ttk()
        .args(["--store", &store, "status", "not-started", "--all"])
        .assert()
        .success();

    ttk()
        .args(["--store", &store, "stats"])
        .assert()
        .success()
        .stdout(contains("Completion:   0%"));
}

#[test]
fn test_stats_by_category_breakdown() {
    let store = setup_test_store("stats_by_cat");
    init_store(&store);

    ttk()
        .args(["--store", &store, "stats", "--by-category"])
        .assert()
        .success()
        .stdout(contains("By category"))
        .stdout(contains("3/5 (60%)"))
        .stdout(contains("database"));
}

#[test]
fn test_stats_on_empty_store() {
    let store = setup_test_store("stats_empty");
    std::fs::write(&store, "[]").unwrap();

    ttk()
        .args(["--store", &store, "stats"])
        .assert()
        .success()
        .stdout(contains("Total:        0"))
        .stdout(contains("Completion:   0%"));
}
