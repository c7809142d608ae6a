#![allow(missing_docs)]
use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;
use tempfile::tempdir;

fn classic_cli() -> Command {
    let mut cmd = Command::cargo_bin("classic-cli").expect("Failed to find classic-cli binary");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn test_caesar_encrypt_and_decrypt() {
    classic_cli()
        .args(["encrypt", "--algorithm", "caesar", "--shift", "3", "Hello, World!"])
        .assert()
        .success()
        .stdout("Khoor, Zruog!\n");

    classic_cli()
        .args(["decrypt", "--algorithm", "caesar", "--shift", "3", "Khoor, Zruog!"])
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn test_negative_shift() {
    classic_cli()
        .args(["encrypt", "--algorithm", "caesar", "--shift", "-23", "xyz"])
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_algorithm_names_accept_dashes() {
    classic_cli()
        .args([
            "encrypt",
            "--algorithm",
            "rail-fence",
            "--rails",
            "3",
            "WEAREDISCOVEREDFLEEATONCE",
        ])
        .assert()
        .success()
        .stdout("WECRLTEERDSOEEFEAOCAIVDEN\n");
}

#[test]
fn test_keyed_ciphers() {
    classic_cli()
        .args(["encrypt", "--algorithm", "vigenere", "--key", "LEMON", "ATTACKATDAWN"])
        .assert()
        .success()
        .stdout("LXFOPVEFRNHR\n");

    classic_cli()
        .args(["decrypt", "--algorithm", "hill", "--key", "GYBNQKURP", "--size", "3", "POH"])
        .assert()
        .success()
        .stdout("ACT\n");

    classic_cli()
        .args(["encrypt", "--algorithm", "affine", "-a", "5", "-b", "8", "HELLO"])
        .assert()
        .success()
        .stdout("RCLLA\n");

    classic_cli()
        .args(["encrypt", "--algorithm", "route", "--rows", "3", "--cols", "5", "WEAREDISCOVERED"])
        .assert()
        .success()
        .stdout("WEAREODEREVDISC\n");
}

#[test]
fn test_json_report() {
    let output = classic_cli()
        .args(["encrypt", "--algorithm", "caesar", "--shift", "3", "ABC", "--json"])
        .output()
        .expect("Failed to run classic-cli");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(report["algorithm"], "caesar");
    assert_eq!(report["mode"], "encrypt");
    assert_eq!(report["output"], "DEF");
    assert!(report["elapsed_micros"].is_u64());
}

#[test]
fn test_file_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let plain_path = temp_dir.path().join("plain.txt");
    let cipher_path = temp_dir.path().join("cipher.txt");
    let decrypted_path = temp_dir.path().join("decrypted.txt");
    fs::write(&plain_path, "Meet me by the old oak tree\n").expect("Failed to write input");

    classic_cli()
        .args(["encrypt", "--algorithm", "vigenere", "--key", "oak"])
        .arg("--input")
        .arg(&plain_path)
        .arg("--output")
        .arg(&cipher_path)
        .assert()
        .success();

    let ciphertext = fs::read_to_string(&cipher_path).expect("Failed to read ciphertext");
    assert_ne!(ciphertext, "Meet me by the old oak tree");

    classic_cli()
        .args(["decrypt", "--algorithm", "vigenere", "--key", "oak"])
        .arg("--input")
        .arg(&cipher_path)
        .arg("--output")
        .arg(&decrypted_path)
        .assert()
        .success();

    let decrypted = fs::read_to_string(&decrypted_path).expect("Failed to read decrypted file");
    assert_eq!(decrypted, "Meet me by the old oak tree");
}

#[test]
fn test_text_from_stdin() {
    classic_cli()
        .args(["encrypt", "--algorithm", "columnar", "--key", "KEY"])
        .write_stdin("attack at dawn\n")
        .assert()
        .success()
        .stdout("tctwaaaatkdn\n");
}

#[test]
fn test_keygen_prints_letters() {
    classic_cli()
        .args(["keygen", "--length", "40"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Z]{40}\n$").expect("bad regex"));
}

#[test]
fn test_list_shows_every_algorithm() {
    classic_cli()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("rail_fence")
                .and(predicate::str::contains("Playfair Cipher"))
                .and(predicate::str::contains("Columnar Transposition"))
                .and(predicate::str::contains("size (2 or 3)")),
        );
}

#[test]
fn test_single_rail_is_rejected() {
    classic_cli()
        .args(["encrypt", "--algorithm", "rail_fence", "--rails", "1", "HELLO"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("rails must be at least 2"));
}

#[test]
fn test_missing_key_is_rejected() {
    classic_cli()
        .args(["encrypt", "--algorithm", "playfair", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --key"));
}

#[test]
fn test_non_coprime_affine_key_is_rejected() {
    classic_cli()
        .args(["encrypt", "--algorithm", "affine", "-a", "13", "-b", "2", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("coprime"));
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    classic_cli()
        .args(["encrypt", "--algorithm", "enigma", "HELLO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm"));
}
