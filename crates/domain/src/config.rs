use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use newer_filter_shared_kernel::{DomainError, DomainResult, Result, TimestampField};
use serde::{Deserialize, Serialize};

/// Rewrites a derived relative destination path.
pub type PathMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options accepted when constructing a filter.
///
/// Either a plain destination (`"build"`, via the `From` impls) or the full
/// form with an extension override, a mapper and the ctime switch. Only the
/// serialisable fields can be loaded from JSON/YAML; `map` is code.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewerOptions {
    pub dest: Option<PathBuf>,
    pub ext: Option<String>,
    #[serde(skip)]
    pub map: Option<PathMapper>,
    pub ctime: bool,
}

impl NewerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dest(mut self, dest: impl Into<PathBuf>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = Some(ext.into());
        self
    }

    pub fn map<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.map = Some(Arc::new(mapper));
        self
    }

    pub fn ctime(mut self, ctime: bool) -> Self {
        self.ctime = ctime;
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}

impl fmt::Debug for NewerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewerOptions")
            .field("dest", &self.dest)
            .field("ext", &self.ext)
            .field("map", &self.map.as_ref().map(|_| "<fn>"))
            .field("ctime", &self.ctime)
            .finish()
    }
}

impl From<&str> for NewerOptions {
    fn from(dest: &str) -> Self {
        Self::new().dest(dest)
    }
}

impl From<String> for NewerOptions {
    fn from(dest: String) -> Self {
        Self::new().dest(dest)
    }
}

impl From<&Path> for NewerOptions {
    fn from(dest: &Path) -> Self {
        Self::new().dest(dest)
    }
}

impl From<PathBuf> for NewerOptions {
    fn from(dest: PathBuf) -> Self {
        Self::new().dest(dest)
    }
}

/// Validated, immutable filter configuration.
#[derive(Clone)]
pub struct NewerConfig {
    destination_root: PathBuf,
    extension: Option<String>,
    mapper: Option<PathMapper>,
    timestamp_field: TimestampField,
}

impl NewerConfig {
    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn mapper(&self) -> Option<&PathMapper> {
        self.mapper.as_ref()
    }

    pub fn timestamp_field(&self) -> TimestampField {
        self.timestamp_field
    }
}

impl TryFrom<NewerOptions> for NewerConfig {
    type Error = DomainError;

    fn try_from(options: NewerOptions) -> DomainResult<Self> {
        // 空文字列は未指定と同じ扱い
        let dest = options.dest.filter(|d| !d.as_os_str().is_empty());
        if dest.is_none() && options.map.is_none() {
            return Err(DomainError::InvalidConfiguration {
                reason: "requires a destination path or a map function".to_string(),
            });
        }

        Ok(Self {
            destination_root: dest.unwrap_or_default(),
            extension: options.ext.filter(|e| !e.is_empty()),
            mapper: options.map,
            timestamp_field: if options.ctime { TimestampField::Ctime } else { TimestampField::Mtime },
        })
    }
}

impl fmt::Debug for NewerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewerConfig")
            .field("destination_root", &self.destination_root)
            .field("extension", &self.extension)
            .field("mapper", &self.mapper.as_ref().map(|_| "<fn>"))
            .field("timestamp_field", &self.timestamp_field)
            .finish()
    }
}
