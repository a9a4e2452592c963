use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("recipedex").unwrap();
    cmd.env("RECIPEDEX_HOME", home);
    cmd
}

#[test]
fn add_normalizes_link_and_lists_domain_label() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd(temp_dir.path())
        .args(["add", "Pancakes", "breakfast", "tastyrecipes.com/pancakes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Recipe added: Pancakes"));

    cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pancakes"))
        .stdout(predicates::str::contains("Link to recipe @ tastyrecipes"));

    // The stored payload carries the explicit scheme and the `type` key.
    let payload = std::fs::read_to_string(temp_dir.path().join("recipes.json")).unwrap();
    assert!(payload.contains("https://tastyrecipes.com/pancakes"));
    assert!(payload.contains("\"type\":\"breakfast\""));
}

#[test]
fn add_with_empty_name_fails_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd(temp_dir.path())
        .args(["add", "  ", "breakfast", "tastyrecipes.com"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("One or more fields are left empty"));

    assert!(!temp_dir.path().join("recipes.json").exists());
}

#[test]
fn list_filters_by_category_in_insertion_order() {
    let temp_dir = tempfile::tempdir().unwrap();

    for args in [
        ["add", "Brownies", "dessert", "brownies.net"],
        ["add", "Omelette", "breakfast", "eggs.com"],
        ["add", "Tiramisu", "dessert", "tiramisu.it"],
    ] {
        cmd(temp_dir.path()).args(args).assert().success();
    }

    cmd(temp_dir.path())
        .args(["list", "--category", "dessert"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Brownies"))
        .stdout(predicates::str::contains("Tiramisu"))
        .stdout(predicates::str::contains("Omelette").not());
}

#[test]
fn list_sorted_by_name_descending() {
    let temp_dir = tempfile::tempdir().unwrap();

    for args in [
        ["add", "apple pie", "dessert", "a.com"],
        ["add", "Brownies", "dessert", "b.com"],
    ] {
        cmd(temp_dir.path()).args(args).assert().success();
    }

    let output = cmd(temp_dir.path())
        .args(["list", "--sort", "name-desc"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let brownies = stdout.find("Brownies").unwrap();
    let apple = stdout.find("apple pie").unwrap();
    assert!(brownies < apple);
}

#[test]
fn type_sort_is_suppressed_under_a_category_filter() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd(temp_dir.path())
        .args(["add", "Brownies", "dessert", "b.com"])
        .assert()
        .success();

    cmd(temp_dir.path())
        .args(["list", "--category", "dessert", "--sort", "type"])
        .assert()
        .success()
        .stdout(predicates::str::contains("unavailable"));
}

#[test]
fn edit_renormalizes_links_and_keeps_old_value_on_blank() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd(temp_dir.path())
        .args(["add", "Soup", "lunch", "soup.com"])
        .assert()
        .success();

    cmd(temp_dir.path())
        .args(["edit", "1", "link", "ramen.net/best"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Recipe updated"));

    let payload = std::fs::read_to_string(temp_dir.path().join("recipes.json")).unwrap();
    assert!(payload.contains("https://ramen.net/best"));

    cmd(temp_dir.path())
        .args(["edit", "1", "name", "   "])
        .assert()
        .success()
        .stdout(predicates::str::contains("kept the previous name"));

    let payload = std::fs::read_to_string(temp_dir.path().join("recipes.json")).unwrap();
    assert!(payload.contains("Soup"));
}

#[test]
fn delete_with_yes_removes_the_recipe() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd(temp_dir.path())
        .args(["add", "Soup", "lunch", "soup.com"])
        .assert()
        .success();

    cmd(temp_dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Recipe deleted."));

    cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No recipes yet."));
}

#[test]
fn delete_out_of_range_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cmd(temp_dir.path())
        .args(["delete", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid index"));
}

#[test]
fn categories_lists_unique_names() {
    let temp_dir = tempfile::tempdir().unwrap();

    for args in [
        ["add", "Brownies", "dessert", "b.com"],
        ["add", "Tiramisu", "dessert", "t.it"],
        ["add", "Omelette", "breakfast", "e.com"],
    ] {
        cmd(temp_dir.path()).args(args).assert().success();
    }

    let output = cmd(temp_dir.path()).arg("categories").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["breakfast", "dessert"]);
}
