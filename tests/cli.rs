use std::io::Write;
use std::process::{Command, Stdio};

fn run(input: &str, args: &[&str]) -> (String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_chromachess"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start binary");

    let stdin = child.stdin.as_mut().expect("Failed to open stdin");
    stdin.write_all(input.as_bytes()).expect("Failed to write to stdin");
    stdin.flush().expect("Failed to flush stdin");

    let output = child.wait_with_output().expect("Failed to read output");

    (String::from_utf8_lossy(&output.stdout).to_string(), output.status.success())
}

#[test]
fn test_play_a_move() {
    let (stdout, success) = run("new\nmoves 1\nmove 1 c3\nshow\nquit\n", &[]);

    assert!(success);
    assert!(stdout.contains("red to move"));
    assert!(stdout.contains("moves: d2 a3 c3"));
    assert!(stdout.contains("blue to move"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let (stdout, success) = run("show\nnew\nmove 1 h8\nfly\nperft 1\nquit\n", &[]);

    assert!(success);
    assert!(stdout.contains("error: no game in progress"));
    assert!(stdout.contains("error: "));
    assert!(stdout.contains("unknown command 'fly'"));
    assert!(stdout.contains("nodes: 13"));
}

#[test]
fn test_computer_moves_and_undo() {
    let (stdout, success) = run(
        "new ry\nsetoption name Depth value 1\ngo\nundo\nquit\n",
        &["--difficulty", "hard"],
    );

    assert!(success);
    assert!(stdout.contains("red played"));
    assert!(stdout.matches("red to move").count() >= 2);
}

#[test]
fn test_self_play_terminates() {
    let (stdout, success) = run("", &["--self-play", "--players", "rb", "--depth", "1", "--max-moves", "6"]);

    assert!(success);
    assert!(stdout.contains("move 1: red"));
}

#[test]
fn test_end_of_input_quits() {
    let (_, success) = run("new\n", &[]);
    assert!(success);
}
