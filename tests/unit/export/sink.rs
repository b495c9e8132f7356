use super::*;
use crate::CropError;

fn artifact(name: &str) -> ExportArtifact {
    ExportArtifact {
        filename: name.to_string(),
        png: vec![0x89, b'P', b'N', b'G'],
    }
}

#[test]
fn in_memory_sink_keeps_arrival_order() {
    let mut sink = InMemorySink::new();
    sink.put(artifact("b.png")).unwrap();
    let path = sink.put(artifact("a.png")).unwrap();

    assert_eq!(path, PathBuf::from("a.png"));
    let names: Vec<_> = sink.artifacts().iter().map(|a| a.filename.as_str()).collect();
    assert_eq!(names, ["b.png", "a.png"]);
}

#[test]
fn directory_sink_creates_missing_dirs() {
    let dir = PathBuf::from("target/sink_unit/nested/out");
    let _ = std::fs::remove_dir_all("target/sink_unit");

    let mut sink = DirectorySink::new(&dir);
    let path = sink.put(artifact("photo_1-1.png")).unwrap();

    assert_eq!(path, dir.join("photo_1-1.png"));
    assert_eq!(std::fs::read(&path).unwrap(), artifact("x").png);
}

#[test]
fn directory_sink_reports_unwritable_target() {
    let blocker = PathBuf::from("target/sink_unit_blocker");
    let _ = std::fs::remove_dir_all(&blocker);
    std::fs::create_dir_all("target").unwrap();
    std::fs::write(&blocker, b"not a dir").unwrap();

    let mut sink = DirectorySink::new(&blocker);
    assert!(matches!(
        sink.put(artifact("x.png")),
        Err(CropError::Other(_))
    ));
    let _ = std::fs::remove_file(&blocker);
}
