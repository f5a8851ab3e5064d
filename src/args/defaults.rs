pub(crate) const DEFAULT_DEST: &str = "0.0.0.0:8000";

pub(crate) const DEFAULT_REQUEST_COUNT: &str = "1";

/// Config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["xffgen.toml", "xffgen.json"];
