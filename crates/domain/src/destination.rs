use std::path::PathBuf;

use newer_filter_shared_kernel::path::extname;

use crate::config::NewerConfig;

impl NewerConfig {
    /// Relative destination path for a source-relative path.
    ///
    /// The extension override replaces the first occurrence of the source
    /// extension text, so `v1.ts/app.ts` becomes `v1.js/app.ts`. A source
    /// without an extension gets the override prepended (`README` becomes
    /// `.htmlREADME`). The mapper, if any, sees the result of that substitution.
    pub fn destination_relative(&self, relative: &str) -> String {
        let substituted = match self.extension() {
            Some(ext) => replace_extension(relative, ext),
            None => relative.to_string(),
        };
        match self.mapper() {
            Some(map) => map(&substituted),
            None => substituted,
        }
    }

    /// Destination path joined onto the configured root.
    ///
    /// An absolute mapper result replaces the root, following `Path::join`.
    pub fn destination_path(&self, relative: &str) -> PathBuf {
        self.destination_root().join(self.destination_relative(relative))
    }
}

fn replace_extension(relative: &str, ext: &str) -> String {
    // an empty extension matches at offset 0, so the override is prepended
    relative.replacen(extname(relative), ext, 1)
}
