use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_DICT_NAME, HMM_MODEL_NAME, IDF_DICT_NAME, STOP_WORDS_NAME, USER_DICT_DIR_NAME,
};

/// Locations of the resource files a segmenter is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePaths {
    pub base_dict: PathBuf,
    /// Every file below this directory is loaded as a user dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_dict_dir: Option<PathBuf>,
    pub hmm_model: PathBuf,
    pub idf_dict: PathBuf,
    pub stop_words: PathBuf,
}

impl ResourcePaths {
    /// Conventional layout below `root`. The user dictionary directory is
    /// only included when it exists.
    pub fn from_root<P: AsRef<Path>>(root: P) -> ResourcePaths {
        let root = root.as_ref();
        let user_dir = root.join(USER_DICT_DIR_NAME);

        ResourcePaths {
            base_dict: root.join(BASE_DICT_NAME),
            user_dict_dir: if user_dir.is_dir() { Some(user_dir) } else { None },
            hmm_model: root.join(HMM_MODEL_NAME),
            idf_dict: root.join(IDF_DICT_NAME),
            stop_words: root.join(STOP_WORDS_NAME),
        }
    }
}
