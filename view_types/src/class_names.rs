//! Class names the rendering side applies to page nodes

use serde::{Deserialize, Serialize};

/// Class names for page wrapper nodes
///
/// Supplied by the rendering collaborator. The ordering core never reads
/// them; they ride along on the view root so a renderer can find them.
/// Partial JSON is accepted; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageClassNames {
    pub wrapper: String,
    pub wrapper_stretched: String,
    pub content: String,
    pub focused: String,
    pub selected: String,
    pub drop_target: String,
}

impl Default for PageClassNames {
    fn default() -> Self {
        Self {
            wrapper: "ce-page".to_string(),
            wrapper_stretched: "ce-block--stretched".to_string(),
            content: "ce-block__content".to_string(),
            focused: "ce-block--focused".to_string(),
            selected: "ce-block--selected".to_string(),
            drop_target: "ce-block--drop-target".to_string(),
        }
    }
}
