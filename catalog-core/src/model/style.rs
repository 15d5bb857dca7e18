//! Category → style tag mapping.
//!
//! Several categories share a tag. Anything not listed falls back to
//! [`StyleTag::Default`], which has an empty class name.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Database,
    Search,
    Web,
    Workflow,
    Development,
    Project,
    Knowledge,
    Cloud,
    #[default]
    Default,
}

impl StyleTag {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Database" => Self::Database,
            "Search Engine" => Self::Search,
            "Web Scraping & Content" | "Maps & Location" => Self::Web,
            "File Management" | "Messaging" | "Productivity" => Self::Workflow,
            "Version Control" | "API Integration" | "Development Tools" => Self::Development,
            "Project Management" => Self::Project,
            "Knowledge Base" | "Language & Translation" => Self::Knowledge,
            "Cloud Storage" => Self::Cloud,
            _ => Self::Default,
        }
    }

    /// Class name as used by the web stylesheet; empty for the default tag.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Database => "category-database",
            Self::Search => "category-search",
            Self::Web => "category-web",
            Self::Workflow => "category-workflow",
            Self::Development => "category-development",
            Self::Project => "category-project",
            Self::Knowledge => "category-knowledge",
            Self::Cloud => "category-cloud",
            Self::Default => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        let table = [
            ("Database", "category-database"),
            ("Search Engine", "category-search"),
            ("Web Scraping & Content", "category-web"),
            ("File Management", "category-workflow"),
            ("Version Control", "category-development"),
            ("Project Management", "category-project"),
            ("Knowledge Base", "category-knowledge"),
            ("Cloud Storage", "category-cloud"),
            ("Maps & Location", "category-web"),
            ("Language & Translation", "category-knowledge"),
            ("API Integration", "category-development"),
            ("Development Tools", "category-development"),
            ("Messaging", "category-workflow"),
            ("Productivity", "category-workflow"),
        ];

        for (category, class) in table {
            assert_eq!(StyleTag::for_category(category).class_name(), class, "{category}");
        }
    }

    #[test]
    fn test_unmapped_category_falls_back() {
        assert_eq!(StyleTag::for_category("Finance"), StyleTag::Default);
        assert_eq!(StyleTag::for_category(""), StyleTag::Default);
        assert_eq!(StyleTag::for_category("database"), StyleTag::Default);
        assert_eq!(StyleTag::Default.class_name(), "");
    }
}
