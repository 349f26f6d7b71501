/// One external job posting shown in the catalog panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobPosting {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub snippet: &'static str,
    pub link: &'static str,
    pub source: &'static str,
    pub skills: &'static [&'static str],
}

/// Data seam for the catalog panel. The panel does no filtering or
/// ranking; it renders whatever the provider hands over, once per load.
pub trait CatalogProvider {
    fn postings(&self) -> &[JobPosting];
}

/// The demo's fixed list of postings from public career pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl CatalogProvider for StaticCatalog {
    fn postings(&self) -> &[JobPosting] {
        REAL_JOBS
    }
}

const REAL_JOBS: &[JobPosting] = &[
    JobPosting {
        title: "Software Engineer, Machine Learning",
        company: "Google",
        location: "Mountain View, CA • Remote",
        snippet: "Build and optimize machine learning models. Work on large-scale AI systems at Google.",
        link: "https://careers.google.com/jobs/results/?q=Machine%20Learning",
        source: "Google Careers",
        skills: &["Python", "TensorFlow", "Machine Learning", "C++", "Distributed Systems"],
    },
    JobPosting {
        title: "Applied Scientist",
        company: "Amazon",
        location: "Seattle, WA • Virtual",
        snippet: "Research and implement ML algorithms for Amazon services and products.",
        link: "https://www.amazon.jobs/en/jobs/?keywords=Machine+Learning",
        source: "Amazon Jobs",
        skills: &["Python", "Machine Learning", "Research", "Java", "AWS"],
    },
    JobPosting {
        title: "Data Scientist",
        company: "Microsoft",
        location: "Redmond, WA • Remote",
        snippet: "Analyze data and build predictive models for Microsoft products and services.",
        link: "https://careers.microsoft.com/professionals/us/en/search-results?keywords=Data%20Scientist",
        source: "Microsoft Careers",
        skills: &["Python", "SQL", "Azure", "Statistics", "Power BI"],
    },
    JobPosting {
        title: "AI Research Scientist",
        company: "Meta",
        location: "Menlo Park, CA • Remote",
        snippet: "Conduct research in AI and develop new machine learning techniques.",
        link: "https://www.metacareers.com/jobs/?q=AI%20Research",
        source: "Meta Careers",
        skills: &["Python", "PyTorch", "Research", "Deep Learning", "NLP"],
    },
    JobPosting {
        title: "Machine Learning Engineer",
        company: "Apple",
        location: "Cupertino, CA • Hybrid",
        snippet: "Develop ML systems for Apple products including iPhone, iPad, and services.",
        link: "https://jobs.apple.com/en-us/search?keyword=Machine%20Learning",
        source: "Apple Careers",
        skills: &["Python", "TensorFlow", "C++", "iOS", "MLOps"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_non_empty_and_fully_populated() {
        let postings = StaticCatalog.postings();
        assert_eq!(postings.len(), 5);
        for posting in postings {
            assert!(!posting.title.is_empty());
            assert!(!posting.skills.is_empty());
            assert!(posting.link.starts_with("https://"));
        }
    }
}
