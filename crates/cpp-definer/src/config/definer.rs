use serde::Deserialize;

use crate::definer::DefinerConfig;

impl DefinerConfig {
    pub(crate) fn apply_patch(
        &mut self,
        patch: DefinerSettingsPatch,
    ) {
        if let Some(v) = patch.text_after_def {
            self.text_after_def = v;
        }
        if let Some(v) = patch.text_between_multiple_defs {
            self.text_between_multiple_defs = v;
        }
        if let Some(v) = patch.text_after_multiple_defs {
            self.text_after_multiple_defs = v;
        }
        if let Some(v) = patch.discarded_segments {
            self.discarded_segments = v.into_iter().collect();
        }
    }

    /// Discard entries are matched against whole segments, so surrounding
    /// whitespace and empty entries can never match anything.
    pub(crate) fn normalize(&mut self) {
        self.discarded_segments = self
            .discarded_segments
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
}

/// Glue text is taken verbatim; whitespace is significant there.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct DefinerSettingsPatch {
    pub(crate) text_after_def: Option<String>,
    pub(crate) text_between_multiple_defs: Option<String>,
    pub(crate) text_after_multiple_defs: Option<String>,
    pub(crate) discarded_segments: Option<Vec<String>>,
}
