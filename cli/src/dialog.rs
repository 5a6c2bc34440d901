use ascii_roundtrip::PathProvider;
use std::path::PathBuf;

/// Native "Select Image" dialog, starting in the home directory when known
pub struct ImageDialog;

impl PathProvider for ImageDialog {
    fn select(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select Image")
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp"]);

        if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            dialog = dialog.set_directory(home);
        }

        dialog.pick_file()
    }
}
