use super::*;

#[test]
fn preset_label_becomes_hyphenated() {
    assert_eq!(
        export_filename("photo.jpg", "1:1 (Square)"),
        "photo_1-1-Square.png"
    );
    assert_eq!(
        export_filename("IMG_0042.jpeg", "16:9 (Display)"),
        "IMG_0042_16-9-Display.png"
    );
    assert_eq!(
        export_filename("shot.webp", "Custom 7:3"),
        "shot_Custom-7-3.png"
    );
}

#[test]
fn only_the_last_extension_is_stripped() {
    assert_eq!(export_filename("archive.tar.gz", "1:1"), "archive.tar_1-1.png");
    assert_eq!(export_filename("noext", "1:1"), "noext_1-1.png");
    assert_eq!(export_filename("dir.v2/noext", "1:1"), "dir.v2/noext_1-1.png");
    assert_eq!(export_filename("trailing.", "1:1"), "trailing._1-1.png");
}

#[test]
fn whitespace_runs_collapse_and_allowed_chars_survive() {
    assert_eq!(export_filename("a.png", "  wide   shot_v2-b  "), "a_wide-shot_v2-b.png");
    assert_eq!(export_filename("a.png", "é/ü"), "a_.png");
}

#[test]
fn sheet_name_joins_all_labels() {
    assert_eq!(
        sheet_filename("photo.jpg", &["1:1 (Square)", "4:5 (Photo)"]),
        "photo_1-1-Square-4-5-Photo.png"
    );
}
