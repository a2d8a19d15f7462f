use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_session(home: &Path, book: &Path, script: &str) -> String {
    let output = cargo_bin_cmd!("addrbook")
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG")
        .args(["--book", book.to_str().expect("book path")])
        .write_stdin(script)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn cli_add_show_remove_flow() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("contacts.json");

    let output = run_session(
        temp.path(),
        &book,
        "hello\nadd John 123\nadd John 0501234567\nphones of John\nremove John\nphones of John\nexit\n",
    );

    assert!(output.contains("How can I help you?"));
    assert!(output.contains("Phone number must be 10 digits"));
    assert!(output.contains("I added a phone 0501234567 to contact John"));
    assert!(output.contains("John | 0501234567"));
    assert!(output.contains("Contact John was removed"));
    assert!(output.contains("Contact John not found"));
    assert!(output.trim_end().ends_with("Good bye!"));
}

#[test]
fn cli_persists_between_sessions() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("contacts.json");

    run_session(
        temp.path(),
        &book,
        "add Ann 0501234567\nset birthday Ann 01.01.2000\ngood bye\n",
    );
    let saved = fs::read_to_string(&book).expect("read book");
    assert!(saved.contains("\"Ann\""));
    assert!(saved.contains("01.01.2000"));

    let output = run_session(temp.path(), &book, "show all\nbirthday of Ann\n");
    assert!(output.contains("Ann  | 01.01.2000 | 0501234567"));
    assert!(output.contains("Address book contain 1 contacts"));
    assert!(output.contains("Ann  | 01.01.2000 |"));
}

#[test]
fn cli_end_of_input_saves() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("book.db");

    let output = run_session(temp.path(), &book, "add Ann 0501234567");
    assert!(output.trim_end().ends_with("Good bye!"));
    assert!(book.exists());

    let output = run_session(temp.path(), &book, "phones of Ann\n.\n");
    assert!(output.contains("Ann  | 0501234567"));
}

#[test]
fn cli_export_and_import_csv() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("contacts.json");
    let csv = temp.path().join("people.csv");

    run_session(
        temp.path(),
        &book,
        &format!("add Ann 0501234567\nexport {}\nexit\n", csv.display()),
    );
    let exported = fs::read_to_string(&csv).expect("read csv");
    assert!(exported.starts_with("name;phones;birthday\n"));
    assert!(exported.contains("Ann;0501234567;-"));

    let other = temp.path().join("other.json");
    let output = run_session(
        temp.path(),
        &other,
        &format!("import {}\nsearch Ann\nexit\n", csv.display()),
    );
    assert!(output.contains(&format!("Imported 1 contacts from {}", csv.display())));
    assert!(output.contains("Found 1 contacts matching 'Ann'"));
}

#[test]
fn cli_unknown_command() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("contacts.json");

    let output = run_session(temp.path(), &book, "do something\nclose\n");
    assert!(output.contains("What do you mean?"));
}

#[test]
fn cli_rejects_damaged_session_file() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("contacts.json");
    fs::write(&book, "{ not json").expect("write book");

    let output = cargo_bin_cmd!("addrbook")
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .args(["--book", book.to_str().expect("book path")])
        .write_stdin("exit\n")
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("load address book"), "{stderr}");
    assert_eq!(fs::read_to_string(&book).expect("read book"), "{ not json");
}

#[test]
fn cli_uses_page_size_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let book = temp.path().join("contacts.json");
    let config = temp.path().join("config.toml");
    fs::write(&config, "page_size = 1\npause_between_pages = false\n").expect("write config");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&config, fs::Permissions::from_mode(0o600)).expect("chmod");
    }

    let output = cargo_bin_cmd!("addrbook")
        .args(["--config", config.to_str().expect("config path")])
        .args(["--book", book.to_str().expect("book path")])
        .write_stdin("add Ann 0501234567\nadd Bob 0671112233\nshow all\nexit\n")
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("Page 1/2"));
    assert!(stdout.contains("Page 2/2"));
}
