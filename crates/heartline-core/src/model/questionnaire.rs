use serde::{Deserialize, Serialize};

use super::common::Coding;
use crate::item_tree::{ItemTree, TreeItem};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub url: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub item: Vec<QuestionnaireItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireItem {
    pub link_id: String,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub answer_option: Vec<QuestionnaireAnswerOption>,
    #[serde(default)]
    pub item: Vec<QuestionnaireItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswerOption {
    pub value_coding: Option<Coding>,
}

impl TreeItem for QuestionnaireItem {
    fn take_children(&mut self) -> Vec<Self> {
        std::mem::take(&mut self.item)
    }
}

impl Questionnaire {
    pub fn item_tree(&self) -> ItemTree<QuestionnaireItem> {
        ItemTree::from_roots(self.item.clone())
    }
}

impl QuestionnaireItem {
    /// Coded answer options as `"display (code)"` joined by `|`.
    pub fn answer_options_label(&self) -> String {
        self.answer_option
            .iter()
            .filter_map(|option| option.value_coding.as_ref())
            .map(|coding| {
                format!(
                    "{} ({})",
                    coding.display.as_deref().unwrap_or_default(),
                    coding.code.as_deref().unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("|")
    }
}
