use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

use connect_four_engine::protocol::{build_position, parse_command, Command as ProtocolCommand};

#[test]
fn protocol_smoke_test_returns_legal_move() {
    let exe = env!("CARGO_BIN_EXE_connect_four_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let mut reader = BufReader::new(stdout);

    stdin
        .write_all(b"new\nposition moves 3 3 2 4\ngo movetime 100 depth 4\n")
        .unwrap();

    let mut output = String::new();
    let mut bestmove_line = None;
    loop {
        let mut line = String::new();
        let bytes = reader.read_line(&mut line).expect("read failed");
        if bytes == 0 {
            break;
        }
        output.push_str(&line);
        if line.starts_with("bestmove") {
            bestmove_line = Some(line);
            break;
        }
    }

    stdin.write_all(b"quit\n").unwrap();
    let status = child.wait().expect("engine did not exit");
    assert!(status.success());

    assert!(output.contains("info depth 2"), "{output}");
    assert!(!output.contains("error"), "{output}");

    let bestmove = bestmove_line.expect("no bestmove found");
    let parts: Vec<&str> = bestmove.split_whitespace().collect();
    assert_eq!(parts.len(), 2, "bestmove missing column: {bestmove}");
    let col: usize = parts[1].parse().expect("numeric column");

    let cmd = parse_command("position moves 3 3 2 4").unwrap();
    let Some(ProtocolCommand::Position(spec)) = cmd else {
        panic!("expected position command");
    };
    let grid = build_position(spec).unwrap();
    assert!(grid.is_legal(col), "engine returned illegal column {col}");
}

#[test]
fn protocol_reports_errors_and_keeps_running() {
    let exe = env!("CARGO_BIN_EXE_connect_four_engine");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn engine binary");

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(b"fly away\nplay 9\nposition moves 0 0 0\nshow\nquit\n")
            .unwrap();
    }

    let output = child.wait_with_output().expect("engine did not exit");
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "error unknown command 'fly'");
    assert_eq!(lines[1], "error illegal move 9");
    assert_eq!(lines.len(), 2 + 7, "{text}");
    assert_eq!(lines[6], "Y......");
    assert_eq!(lines[7], "R......");
    assert_eq!(lines[8], "Y");
}
