use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn contact_book(storage: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("STORAGE_CHOICE", "json")
        .env("JSON_STORAGE_PATH", storage);
    cmd
}

fn add(storage: &Path, name: &str, phone: &str, email: &str) {
    contact_book(storage)
        .args(["add", "--name", name, "--phone", phone, "--email", email])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));
}

#[test]
fn edit_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let storage = dir.path().join("contacts.json");
    add(&storage, "Patricia", "08066809241", "lmartinez@bender-patterson.net");
    add(&storage, "Diane", "08064879199", "grahammatthew@gmail.com");

    contact_book(&storage)
        .args(["edit", "--index", "2", "--phone", "09123456789"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully"));

    contact_book(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diane"))
        .stdout(predicate::str::contains("09123456789"))
        .stdout(predicate::str::contains("grahammatthew@gmail.com"))
        .stdout(predicate::str::contains("08064879199").not());

    // Out of range positions change nothing
    contact_book(&storage)
        .args(["edit", "--index", "3", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact at position 3"));

    contact_book(&storage)
        .args(["edit", "--index", "1", "--email", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing: email"));

    Ok(())
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let storage = dir.path().join("contacts.json");

    // Attempt to delete from an empty list
    contact_book(&storage)
        .args(["delete", "--index", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact at position 1"));

    add(&storage, "Patricia", "08066809241", "lmartinez@bender-patterson.net");
    add(&storage, "Diane", "08064879199", "grahammatthew@gmail.com");
    add(&storage, "John", "08046516806", "wendy59@turner.com");

    contact_book(&storage)
        .args(["delete", "--index", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    // Former second contact moved up to position 1
    contact_book(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Diane"))
        .stdout(predicate::str::contains("  2. John"))
        .stdout(predicate::str::contains("Patricia").not());

    Ok(())
}

#[test]
fn delete_asks_for_confirmation() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let storage = dir.path().join("contacts.json");
    add(&storage, "Wayne", "08062866694", "jackie73@lopez.com");

    contact_book(&storage)
        .args(["delete", "--index", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure you want to delete"))
        .stdout(predicate::str::contains("Email: jackie73@lopez.com\n? (y/n)"))
        .stdout(predicate::str::contains("\n\n? (y/n)").not())
        .stdout(predicate::str::contains("Delete cancelled"));

    contact_book(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wayne"));

    contact_book(&storage)
        .args(["delete", "--index", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    contact_book(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    Ok(())
}
