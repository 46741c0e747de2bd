// Case-insensitive substring screening against a configured denylist. A real
// classifier would implement the same predicate behind this type.
#[derive(Debug, Clone)]
pub struct ContentModerator {
	denylist: Vec<String>,
}

impl ContentModerator {
	pub fn new(denylist: Vec<String>) -> Self {
		ContentModerator {
			denylist: denylist.into_iter().map(|w| w.to_lowercase()).collect(),
		}
	}

	// demo list
	pub fn demo_list() -> Self {
		ContentModerator::new(vec![
			"badword".to_string(),
			"curse".to_string(),
			"xxx".to_string(),
		])
	}

	pub fn contains_disallowed(&self, text: &str) -> bool {
		let lower = text.to_lowercase();
		self.denylist.iter().any(|word| lower.contains(word))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn matches_case_insensitively() {
		let moderator = ContentModerator::demo_list();

		assert!(moderator.contains_disallowed("this is a BadWord here"));
		assert!(moderator.contains_disallowed("CURSE"));
		assert!(!moderator.contains_disallowed("a perfectly clean description"));
	}

	#[test]
	fn matches_substrings() {
		let moderator = ContentModerator::demo_list();

		assert!(moderator.contains_disallowed("superbadwordish"));
	}

	#[test]
	fn custom_denylist_replaces_demo_list() {
		let moderator = ContentModerator::new(vec!["Rusty".to_string()]);

		assert!(moderator.contains_disallowed("old rusty sedan"));
		assert!(!moderator.contains_disallowed("badword"));
	}
}
