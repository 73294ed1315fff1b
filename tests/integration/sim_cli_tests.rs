//! Host simulator binary: logger setup, variant selection, JSON report.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_samplerboard"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn trace_run_logs_every_pin_and_prints_clean_report() {
    let out = run(&["atmega328p", "--trace"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("samplerboard sim v"));
    assert!(stderr.contains("hw_init: pin 5 (XBEE_ENABLE)"));
    assert!(!stderr.contains("not in boot state"));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["variant"], "Atmega328p");
    assert_eq!(report["pins"].as_array().unwrap().len(), 14);
    assert_eq!(report["pins"][8]["config"]["latch"], "high");
}

#[test]
fn default_level_hides_per_pin_lines() {
    let out = run(&["attiny841"]);
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("samplerboard sim v"));
    assert!(!stderr.contains("hw_init: pin"));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["variant"], "Attiny841");
    assert_eq!(report["pins"].as_array().unwrap().len(), 12);
}

#[test]
fn unknown_variant_fails() {
    let out = run(&["atmega32u4"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown board variant"));
}
