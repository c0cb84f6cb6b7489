#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn tsg() -> Command {
    cargo_bin_cmd!("tsgen")
}
