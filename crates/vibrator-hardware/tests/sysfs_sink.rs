//! Integration tests for SysfsSink against a staged node tree.

use std::path::Path;
use vibrator_core::Error;
use vibrator_hardware::settings::VibratorSettings;
use vibrator_hardware::sysfs::SysfsSink;
use vibrator_hardware::traits::ControlSink;
use vibrator_hardware::write_sequence;

/// Create every node the default settings reference below `root`.
fn stage_default_nodes(root: &Path) {
    let dir = root.join("sys/class/leds/vibrator");
    std::fs::create_dir_all(&dir).unwrap();
    for node in ["activate", "activate_mode", "duration", "seq", "loop", "index"] {
        std::fs::write(dir.join(node), "").unwrap();
    }
}

fn read_node(root: &Path, node: &str) -> String {
    std::fs::read_to_string(root.join("sys/class/leds/vibrator").join(node)).unwrap()
}

#[tokio::test]
async fn test_write_replaces_node_content() {
    let stage = tempfile::tempdir().unwrap();
    stage_default_nodes(stage.path());
    let sink = SysfsSink::with_root(stage.path());

    sink.write(Path::new("/sys/class/leds/vibrator/duration"), "30000")
        .await
        .unwrap();
    sink.write(Path::new("/sys/class/leds/vibrator/duration"), "500")
        .await
        .unwrap();

    assert_eq!(read_node(stage.path(), "duration"), "500");
}

#[tokio::test]
async fn test_missing_node_is_not_created() {
    let stage = tempfile::tempdir().unwrap();
    let sink = SysfsSink::with_root(stage.path());

    let err = sink
        .write(Path::new("/sys/class/leds/vibrator/activate"), "1")
        .await
        .unwrap_err();

    match err {
        Error::NodeWrite { node, value, source } => {
            assert_eq!(node, Path::new("/sys/class/leds/vibrator/activate"));
            assert_eq!(value, "1");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected node write error, got {:?}", other),
    }
    assert!(!stage.path().join("sys/class/leds/vibrator/activate").exists());
}

#[tokio::test]
async fn test_default_click_setup_on_staged_tree() {
    let stage = tempfile::tempdir().unwrap();
    stage_default_nodes(stage.path());
    let sink = SysfsSink::with_root(stage.path());
    let settings = VibratorSettings::default();

    write_sequence(&sink, &settings.setup_click).await.unwrap();

    assert_eq!(read_node(stage.path(), "activate"), "0");
    assert_eq!(read_node(stage.path(), "activate_mode"), "1");
    assert_eq!(read_node(stage.path(), "loop"), "0x00 0x00");
}

#[tokio::test]
async fn test_sequence_stops_at_missing_node() {
    let stage = tempfile::tempdir().unwrap();
    stage_default_nodes(stage.path());
    std::fs::remove_file(stage.path().join("sys/class/leds/vibrator/activate_mode")).unwrap();
    let sink = SysfsSink::with_root(stage.path());
    let settings = VibratorSettings::default();

    let result = write_sequence(&sink, &settings.setup_click).await;

    assert!(matches!(result, Err(Error::NodeWrite { .. })));
    assert_eq!(read_node(stage.path(), "activate"), "0");
    // The write after the failing node never happened
    assert_eq!(read_node(stage.path(), "loop"), "");
}
