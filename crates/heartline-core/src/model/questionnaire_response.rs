use serde::{Deserialize, Serialize};

use super::common::Coding;
use crate::item_tree::{ItemTree, TreeItem};
use crate::time::FhirDateTime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub questionnaire: Option<String>,
    pub authored: Option<FhirDateTime>,
    #[serde(default)]
    pub item: Vec<QuestionnaireResponseItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponseItem {
    pub link_id: String,
    #[serde(default)]
    pub answer: Vec<QuestionnaireResponseAnswer>,
    #[serde(default)]
    pub item: Vec<QuestionnaireResponseItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireResponseAnswer {
    pub value_coding: Option<Coding>,
    pub value_string: Option<String>,
}

impl TreeItem for QuestionnaireResponseItem {
    fn take_children(&mut self) -> Vec<Self> {
        std::mem::take(&mut self.item)
    }
}

impl QuestionnaireResponseItem {
    /// Code of the first answer, if that answer is coded.
    pub fn first_coded_answer(&self) -> Option<&str> {
        self.answer.first()?.value_coding.as_ref()?.code.as_deref()
    }
}

impl QuestionnaireResponse {
    pub fn item_tree(&self) -> ItemTree<QuestionnaireResponseItem> {
        ItemTree::from_roots(self.item.clone())
    }

    pub fn is_response_to(&self, questionnaire_url: &str) -> bool {
        self.questionnaire.as_deref() == Some(questionnaire_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_lookup_by_link_id() {
        let response: QuestionnaireResponse = serde_json::from_value(json!({
            "questionnaire": "http://example.org/kccq",
            "item": [{
                "linkId": "section",
                "item": [
                    {"linkId": "q1", "answer": [{"valueCoding": {"code": "3"}}, {"valueCoding": {"code": "4"}}]},
                    {"linkId": "q2", "answer": [{"valueString": "free text"}]}
                ]
            }]
        }))
        .unwrap();

        let tree = response.item_tree();
        let q1 = tree.find_leaf(|item| item.link_id == "q1");
        assert_eq!(q1.and_then(|item| item.first_coded_answer()), Some("3"));

        let q2 = tree.find_leaf(|item| item.link_id == "q2");
        assert!(q2.is_some());
        assert_eq!(q2.and_then(|item| item.first_coded_answer()), None);

        assert!(tree.find_leaf(|item| item.link_id == "section").is_none());
        assert!(response.is_response_to("http://example.org/kccq"));
        assert!(!response.is_response_to("http://example.org/KCCQ"));
    }
}
