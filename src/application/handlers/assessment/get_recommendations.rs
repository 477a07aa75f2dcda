//! GetRecommendationsHandler - Query handler for a level's recommendations.

use std::sync::Arc;

use crate::domain::assessment::Classifier;

pub struct GetRecommendationsHandler {
    classifier: Arc<Classifier>,
}

impl GetRecommendationsHandler {
    pub fn new(classifier: Arc<Classifier>) -> Self {
        Self { classifier }
    }

    /// Recommendations for a stored label. Unknown labels yield an empty list.
    pub fn handle(&self, label: &str) -> Vec<String> {
        let recommendations = self.classifier.recommendations_for_label(label);
        if recommendations.is_empty() {
            tracing::debug!(label, "no recommendations for label");
        }
        recommendations.to_vec()
    }
}
