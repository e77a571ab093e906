use ftc::commands::fetch::render;
use ftc::core::config::{Config, Fact};
use ftc::platform::{SourceReader, SystemReader, IO_BUFFER_SIZE};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_file_returns_exact_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("temp2_input");
    fs::write(&path, "45231\n").unwrap();

    let buffer = SystemReader::new().read_file(&path).unwrap();
    assert_eq!(buffer.as_bytes(), b"45231\n");
    assert_eq!(buffer.len(), 6);
}

#[test]
fn test_read_file_is_capped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("pacman.log");
    let line = "[2023-04-01T10:00:00+0000] [ALPM] installed filesystem (2023.01.31-1)\n";
    fs::write(&path, line.repeat(1000)).unwrap();

    let buffer = SystemReader::new().read_file(&path).unwrap();
    assert_eq!(buffer.len() as u64, IO_BUFFER_SIZE);
    assert!(buffer.first_line().starts_with(b"[2023-04-01T"));
}

#[test]
fn test_empty_file_is_empty_buffer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty");
    fs::write(&path, "").unwrap();

    assert!(SystemReader::new().read_file(&path).unwrap().is_empty());
}

#[test]
fn test_render_with_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let sensor = temp_dir.path().join("temp1_input");
    let log = temp_dir.path().join("pacman.log");
    fs::write(&sensor, "-2500\n").unwrap();
    fs::write(&log, "[2021-07-15T09:30:00+0200] [PACMAN] Running 'pacman -S base'\n").unwrap();

    let config = Config::default()
        .with_facts(vec![Fact::InstallDate, Fact::Temperature])
        .with_temperature_sensor(&sensor)
        .with_pacman_log(&log);
    let lines = render(&config, &SystemReader::new());

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("2021-07-15"));
    assert!(lines[1].ends_with("-2°C"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_live_kernel_fact() {
    // /proc/version exists on any Linux host running the suite.
    let config = Config::default().with_facts(vec![Fact::Kernel, Fact::Memory]);
    let lines = render(&config, &SystemReader::new());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("linux "));
    assert!(lines[1].contains("MiB"));
}
